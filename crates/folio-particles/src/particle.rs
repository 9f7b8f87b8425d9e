//! Particle entities and their per-frame behavior.

use rand::Rng;

use crate::palette::Palette;
use crate::surface::Surface;

/// Fill opacity of the particle circles.
const FILL_ALPHA: f64 = 0.5;

/// A single drifting particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position in surface units.
    pub x: f64,
    /// Vertical position in surface units.
    pub y: f64,
    /// Horizontal velocity in surface units per frame tick.
    pub vx: f64,
    /// Vertical velocity in surface units per frame tick.
    pub vy: f64,
    /// Radius of the drawn circle.
    pub radius: f64,
    /// Phase shift into the color cycle (0.0-1.0), so particles are not
    /// all the same color at once.
    pub color_offset: f64,
}

/// Spawn `count` particles uniformly over a `width` x `height` surface.
pub fn init_particles(rng: &mut impl Rng, count: usize, width: f64, height: f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.random_range(0.0..width),
            y: rng.random_range(0.0..height),
            vx: rng.random_range(-0.25..0.25),
            vy: rng.random_range(-0.25..0.25),
            radius: rng.random_range(1.0..3.0),
            color_offset: rng.random_range(0.0..1.0),
        })
        .collect()
}

/// Advance a particle by one frame tick, bouncing off the surface edges.
///
/// Crossing an edge negates that axis's velocity. The overshot position
/// is kept as-is, never clamped back inside; the particle drifts back on
/// its own over the following ticks.
pub fn update(p: &mut Particle, width: f64, height: f64) {
    p.x += p.vx;
    p.y += p.vy;

    if p.x < 0.0 || p.x > width {
        p.vx = -p.vx;
    }
    if p.y < 0.0 || p.y > height {
        p.vy = -p.vy;
    }
}

/// Draw a particle as a translucent filled circle, colored from its own
/// phase in the palette cycle.
pub fn draw<S: Surface>(p: &Particle, surface: &mut S, palette: &Palette, time_ms: f64) {
    let color = palette.cycling_color(time_ms, p.color_offset);
    surface.fill_circle(p.x, p.y, p.radius, color.with_alpha(FILL_ALPHA));
}
