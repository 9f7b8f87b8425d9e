//! Animated particle backdrop for the folio portfolio.
//!
//! A fixed population of drifting particles is advanced once per frame,
//! tinted from a cycling color palette, and joined by proximity lines
//! whose opacity fades with distance. All drawing goes through the
//! [`Surface`] trait; [`CanvasSurface`] adapts a ratatui braille canvas.

mod canvas;
mod field;
mod palette;
mod particle;
mod surface;

pub use canvas::{CanvasSurface, surface_size};
pub use field::{LINK_DISTANCE, PARTICLE_COUNT, ParticleField, connection_alpha};
pub use palette::Palette;
pub use particle::Particle;
pub use surface::Surface;
