//! Color values used by the particle backdrop.

use std::fmt;

use ratatui::style::Color;

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an opacity in the 0.0-1.0 range.
    pub const fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// An RGB color with an alpha component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0 (transparent) to 1.0 (opaque).
    pub a: f64,
}

impl Rgba {
    /// Composite this color over an opaque background.
    ///
    /// Terminal cells carry no alpha channel, so translucent draws are
    /// flattened into a plain color before they reach the screen.
    pub fn over(self, bg: Rgb) -> Rgb {
        let blend =
            |fg: u8, bg: u8| (f64::from(fg) * self.a + f64::from(bg) * (1.0 - self.a)).round() as u8;
        Rgb::new(
            blend(self.r, bg.r),
            blend(self.g, bg.g),
            blend(self.b, bg.b),
        )
    }
}

impl fmt::Display for Rgba {
    /// CSS-style form, e.g. `rgba(6, 182, 212, 0.5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_black() {
        let c = Rgb::new(100, 200, 40).with_alpha(0.5);
        assert_eq!(c.over(Rgb::BLACK), Rgb::new(50, 100, 20));
    }

    #[test]
    fn test_over_opaque_and_transparent() {
        let bg = Rgb::new(10, 20, 30);
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(1.0).over(bg), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(0.0).over(bg), bg);
    }

    #[test]
    fn test_display_css_form() {
        let c = Rgb::new(6, 182, 212).with_alpha(0.5);
        assert_eq!(c.to_string(), "rgba(6, 182, 212, 0.5)");
    }
}
