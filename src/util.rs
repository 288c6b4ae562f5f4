// DOM helpers shared by the components.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

use web_sys::{HtmlCanvasElement, TouchEvent};

use crate::model::Point;

/// Maps viewport coordinates onto the canvas bitmap.
///
/// The bounding rect includes the CSS border, so the origin is shifted by the
/// border width, and the displayed content box may be stretched relative to the
/// bitmap, so each axis is scaled by `bitmap / displayed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMapping {
    origin: Point,
    scale_x: f64,
    scale_y: f64,
}

impl CanvasMapping {
    /// `rect` is the top-left of the bounding client rect, `border` the left/top
    /// border widths, `shown` the content box size in CSS pixels and `bitmap`
    /// the canvas width/height attributes.
    #[must_use]
    pub fn new(rect: Point, border: Point, shown: (f64, f64), bitmap: (f64, f64)) -> Self {
        Self {
            origin: Point::new(rect.x + border.x, rect.y + border.y),
            scale_x: axis_scale(bitmap.0, shown.0),
            scale_y: axis_scale(bitmap.1, shown.1),
        }
    }

    #[must_use]
    pub fn of(canvas: &HtmlCanvasElement) -> Self {
        let rect = canvas.get_bounding_client_rect();
        Self::new(
            Point::new(rect.left(), rect.top()),
            Point::new(f64::from(canvas.client_left()), f64::from(canvas.client_top())),
            (f64::from(canvas.client_width()), f64::from(canvas.client_height())),
            (f64::from(canvas.width()), f64::from(canvas.height())),
        )
    }

    /// Viewport (client) coordinates to bitmap pixels.
    #[must_use]
    pub fn to_canvas(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(
            (client_x - self.origin.x) * self.scale_x,
            (client_y - self.origin.y) * self.scale_y,
        )
    }
}

// An element that is not laid out yet reports 0; treat it as unscaled.
fn axis_scale(bitmap: f64, shown: f64) -> f64 {
    if shown > 0.0 && bitmap.is_finite() { bitmap / shown } else { 1.0 }
}

/// Active touches of `e` in canvas bitmap pixels.
pub fn touch_points(e: &TouchEvent, canvas: &HtmlCanvasElement) -> Vec<Point> {
    let mapping = CanvasMapping::of(canvas);
    let touches = e.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| mapping.to_canvas(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
}
