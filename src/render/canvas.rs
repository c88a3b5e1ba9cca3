use std::f64::consts::TAU;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wasm_bindgen::JsCast;
use crate::entity::Color;
use crate::math::Vec2;
use super::surface::Surface;

/// Wrapper around a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    // Style strings are rebuilt only when the color changes. Cleared every
    // frame: resizing the canvas element resets the context's styles.
    fill: Option<Color>,
    stroke: Option<Color>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, fill: None, stroke: None }
    }

    /// Get the 2D context of a canvas element
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Canvas 2d context request threw".to_string())?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Context is not a CanvasRenderingContext2d".to_string())?;
        Ok(Self::new(ctx))
    }

    /// Forget the cached styles so the next draw sets them again
    pub fn invalidate(&mut self) {
        self.fill = None;
        self.stroke = None;
    }

    fn use_fill(&mut self, color: Color) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.fill = Some(color);
        }
    }

    fn use_stroke(&mut self, color: Color) {
        if self.stroke != Some(color) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.stroke = Some(color);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.invalidate();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.use_fill(color);
        self.ctx.begin_path();
        // arc only rejects negative radii
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.use_stroke(color);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}
