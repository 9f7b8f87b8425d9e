//! Particle field state and the per-frame animation step.

use rand::Rng;

use crate::palette::Palette;
use crate::particle::{self, Particle};
use crate::surface::Surface;

/// Fixed particle population for the lifetime of the field.
pub const PARTICLE_COUNT: usize = 80;

/// Particles closer than this many surface units get a connecting line.
pub const LINK_DISTANCE: f64 = 150.0;

/// Opacity of a connecting line at zero distance.
const LINK_ALPHA: f64 = 0.2;

/// Opacity of a connecting line between particles `distance` apart,
/// fading linearly from [`LINK_ALPHA`] to zero at [`LINK_DISTANCE`].
pub fn connection_alpha(distance: f64) -> f64 {
    if distance >= LINK_DISTANCE {
        0.0
    } else {
        LINK_ALPHA * (1.0 - distance / LINK_DISTANCE)
    }
}

/// The animated particle backdrop.
///
/// Owns the fixed particle population and the tracked surface size.
/// Resizing updates the tracked size only; existing particles keep
/// their positions and drift back into view on their own.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    palette: Palette,
    width: f64,
    height: f64,
}

impl ParticleField {
    /// Create a field spanning `width` x `height` surface units.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(&mut rand::rng(), width, height)
    }

    /// Create a field using the given RNG for particle placement.
    pub fn with_rng(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Self {
            particles: particle::init_particles(rng, PARTICLE_COUNT, width, height),
            palette: Palette::default(),
            width,
            height,
        }
    }

    /// Tracked surface width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Tracked surface height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The particles, in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Track a new surface size.
    ///
    /// Particles are not repositioned or clamped; any now outside the
    /// surface bounce back at their next update.
    pub fn resize(&mut self, width: f64, height: f64) {
        log::debug!("backdrop surface resized to {width}x{height}");
        self.width = width;
        self.height = height;
    }

    /// Run one animation frame against `surface` at `time_ms`.
    ///
    /// Clears the surface, advances and draws every particle, then
    /// strokes a line between every pair of particles within
    /// [`LINK_DISTANCE`] of each other, all lines sharing one color from
    /// the unshifted cycle. A field with no area draws nothing.
    pub fn step<S: Surface>(&mut self, surface: &mut S, time_ms: f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }

        surface.clear();

        for p in &mut self.particles {
            particle::update(p, self.width, self.height);
            particle::draw(p, surface, &self.palette, time_ms);
        }

        let line_color = self.palette.cycling_color(time_ms, 0.0);
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < LINK_DISTANCE {
                    surface.stroke_line(
                        a.x,
                        a.y,
                        b.x,
                        b.y,
                        line_color.with_alpha(connection_alpha(distance)),
                    );
                }
            }
        }
    }
}
