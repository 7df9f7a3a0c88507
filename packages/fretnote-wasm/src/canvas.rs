//! Canvas 2D implementation of the fretboard [`Surface`].

use fretnote::fretboard::{Point, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context
    pub fn for_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = canvas.get_context("2d").ok().flatten()?;
        let context = context.dyn_into::<CanvasRenderingContext2d>().ok()?;
        Some(Self { context })
    }
}

#[allow(deprecated)]
impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: &str) {
        self.context.set_fill_style(&JsValue::from_str(color));
        self.context.fill_rect(origin.x, origin.y, width, height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str) {
        self.context.set_stroke_style(&JsValue::from_str(color));
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.context.set_fill_style(&JsValue::from_str(color));
        self.context.begin_path();
        if self.context.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.context.fill();
    }
}
