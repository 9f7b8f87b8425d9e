//! Braille-canvas adapter for the particle surface.

use folio_core::{Rgb, Rgba};
use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Line};

use crate::surface::Surface;

/// Horizontal braille dots per terminal cell.
const DOTS_PER_CELL_X: f64 = 2.0;
/// Vertical braille dots per terminal cell.
const DOTS_PER_CELL_Y: f64 = 4.0;

/// Surface size in braille dots for a terminal of `cols` x `rows` cells.
///
/// One braille dot is one surface unit, so the canvas rasterizes the
/// field 1:1 when its bounds are set to this size.
pub fn surface_size(cols: u16, rows: u16) -> (f64, f64) {
    (
        f64::from(cols) * DOTS_PER_CELL_X,
        f64::from(rows) * DOTS_PER_CELL_Y,
    )
}

/// A [`Surface`] that paints onto a ratatui canvas context.
///
/// Canvas y grows upward while surface y grows downward, so draws flip
/// around the surface height. Translucent colors are composited over the
/// black backdrop before they become terminal colors.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    /// Wrap a canvas context whose y bounds span `height` surface units.
    pub fn new(ctx: &'a mut Context<'b>, height: f64) -> Self {
        Self { ctx, height }
    }

    fn terminal_color(color: Rgba) -> Color {
        color.over(Rgb::BLACK).into()
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear(&mut self) {
        // The canvas widget rasterizes into a fresh grid every render;
        // nothing persists between frames to erase.
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.draw(&Circle {
            x,
            y: self.height - y,
            radius,
            color: Self::terminal_color(color),
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        self.ctx.draw(&Line {
            x1,
            y1: self.height - y1,
            x2,
            y2: self.height - y2,
            color: Self::terminal_color(color),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size_in_braille_dots() {
        assert_eq!(surface_size(80, 24), (160.0, 96.0));
        assert_eq!(surface_size(0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_terminal_color_composites_over_black() {
        let color = Rgb::new(236, 72, 153).with_alpha(0.5);
        assert_eq!(
            CanvasSurface::terminal_color(color),
            Color::Rgb(118, 36, 77)
        );
    }
}
