//! Renderer boundary: the sphere decides what to draw and where, a host
//! surface turns that into pixels.

/// Drawing primitives the core issues each frame.
///
/// All coordinates handed to a surface are already floored to integer pixel
/// values by the core; rounding policy is not a surface concern. Draw order
/// encodes the depth rule (background disc, then segments, stars, objects,
/// then the hover highlight), so implementations must not reorder calls.
/// Surface-side failures must be swallowed or logged, never propagated into
/// the frame clock.
pub trait DrawSurface {
    /// Resize the backing surface, clearing it.
    fn set_size(&mut self, width: u32, height: u32);

    /// Clear the full drawing area.
    fn clear(&mut self, width: f64, height: f64);

    /// Filled circle (background disc, star dots, object markers).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);

    /// Circle outline with the given line width (sphere rim, hover ring).
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, line_width: f64);

    /// One-pixel-wide line segment.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str);

    /// Label text: outlined in `outline` (at `outline_width`), filled in
    /// `fill`, using the given CSS font spec.
    fn text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &str,
        fill: &str,
        outline: &str,
        outline_width: f64,
    );
}
