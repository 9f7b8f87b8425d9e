//! Cycling color palette for the particle backdrop.

use folio_core::Rgb;

/// Cycle position gained per millisecond; a full palette traversal
/// takes 2000 ms.
const CYCLE_SPEED: f64 = 0.0005;

/// Default gradient: teal → blue → indigo → purple → pink.
const DEFAULT_STOPS: [Rgb; 5] = [
    Rgb::new(6, 182, 212),
    Rgb::new(59, 130, 246),
    Rgb::new(99, 102, 241),
    Rgb::new(139, 92, 246),
    Rgb::new(236, 72, 153),
];

/// An ordered sequence of color stops cycled over time.
#[derive(Debug, Clone)]
pub struct Palette {
    stops: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_STOPS.to_vec())
    }
}

impl Palette {
    /// Create a palette from explicit stops.
    ///
    /// # Panics
    ///
    /// Panics if `stops` is empty.
    pub fn new(stops: Vec<Rgb>) -> Self {
        assert!(!stops.is_empty(), "palette needs at least one stop");
        Self { stops }
    }

    /// Color of the cycle at `time_ms`, phase-shifted by `offset`
    /// (a fraction of the whole cycle, 0.0-1.0).
    ///
    /// The cycle position maps to a continuous index over the stops and
    /// each channel interpolates linearly between the two neighboring
    /// stops. The upper neighbor clamps to the last stop, so the lookup
    /// never runs past the palette end.
    pub fn cycling_color(&self, time_ms: f64, offset: f64) -> Rgb {
        let t = (time_ms * CYCLE_SPEED + offset).fract();
        let idx = t * (self.stops.len() - 1) as f64;
        let i = idx.floor() as usize;
        let f = idx - i as f64;

        let c1 = self.stops[i];
        let c2 = self.stops[(i + 1).min(self.stops.len() - 1)];

        Rgb::new(
            lerp_channel(c1.r, c2.r, f),
            lerp_channel(c1.g, c2.g, f),
            lerp_channel(c1.b, c2.b, f),
        )
    }
}

fn lerp_channel(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8
}
