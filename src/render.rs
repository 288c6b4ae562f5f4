//! Drawing the diagram.
//!
//! [`redraw`] describes the scene through the [`Surface`] trait so it can run
//! against the browser canvas or a recording fake in tests.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::EditorConfig;
use crate::model::{CircleStore, Point};

/// Minimal drawing API needed by the diagram.
pub trait Surface {
    fn clear(&mut self);
    fn fill_disc(&mut self, center: Point, radius: f64, fill: &str);
    fn fill_text(&mut self, text: &str, at: Point, font: &str, fill: &str);
}

/// Clear the surface and paint every circle in creation order: disc, centre dot, label.
pub fn redraw<S: Surface + ?Sized>(surface: &mut S, store: &CircleStore, cfg: &EditorConfig) {
    surface.clear();
    for (label, circle) in store.labeled() {
        surface.fill_disc(circle.center, circle.radius, cfg.fill_for(circle.color));
        surface.fill_disc(circle.center, cfg.center_dot_radius, &cfg.center_dot_fill);
        let at = Point::new(circle.center.x, circle.center.y + circle.radius + cfg.label_offset);
        surface.fill_text(cfg.label_text(label), at, &cfg.label_font, &cfg.label_fill);
    }
}

/// A [`Surface`] backed by a 2D canvas context of the given pixel size.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("canvas {op} failed: {e:?}");
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_disc(&mut self, center: Point, radius: f64, fill: &str) {
        self.ctx.begin_path();
        report("arc", self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU));
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &str, fill: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_fill_style_str(fill);
        report("fill_text", self.ctx.fill_text(text, at.x, at.y));
    }
}
