//! Core types shared across the folio portfolio crates.

mod color;
mod focus;
mod project;

pub use color::{Rgb, Rgba};
pub use focus::Focus;
pub use project::Project;
