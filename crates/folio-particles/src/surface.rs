//! Drawing surface abstraction for the particle backdrop.

use folio_core::Rgba;

/// A 2D drawing target the particle field renders onto.
///
/// The field only ever clears the frame, fills circles, and strokes
/// lines, so anything that can do those three can host the backdrop: a
/// braille canvas in production, a recording buffer in tests.
/// Coordinates are in surface units with the origin at the top left and
/// y growing downward.
pub trait Surface {
    /// Erase the whole drawing area.
    fn clear(&mut self);

    /// Fill a circle of `radius` centered at (`x`, `y`).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    /// Stroke a straight line from (`x1`, `y1`) to (`x2`, `y2`).
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba);
}
