//! `DrawSurface` implementation over a 2D canvas context.

use std::f64::consts::TAU;

use sky_core::{DrawSurface, SkyError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws the core's primitives on a `CanvasRenderingContext2d`. Context
/// errors are swallowed here; a failed draw call must never reach the
/// frame clock.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    context: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, SkyError> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or_else(|| SkyError::PreconditionViolated("no 2d canvas context".into()))?;
        context.set_line_width(1.0);
        Ok(Self { canvas, context })
    }
}

impl DrawSurface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.begin_path();
        let _ = self.context.arc(x, y, radius, 0.0, TAU);
        self.context.fill();
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, line_width: f64) {
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(line_width);
        self.context.begin_path();
        let _ = self.context.arc(x, y, radius, 0.0, TAU);
        self.context.stroke();
        self.context.set_line_width(1.0);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) {
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(1.0);
        self.context.begin_path();
        self.context.move_to(x1, y1);
        self.context.line_to(x2, y2);
        self.context.stroke();
    }

    fn text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &str,
        fill: &str,
        outline: &str,
        outline_width: f64,
    ) {
        self.context.set_font(font);
        self.context.set_stroke_style_str(outline);
        self.context.set_line_width(outline_width);
        if let Err(e) = self.context.stroke_text(text, x, y) {
            log::error!("stroke_text failed: {e:?}");
        }
        self.context.set_line_width(1.0);
        self.context.set_fill_style_str(fill);
        if let Err(e) = self.context.fill_text(text, x, y) {
            log::error!("fill_text failed: {e:?}");
        }
    }
}
