use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod animation;
pub mod console;
pub mod entity;
pub mod growth;
pub mod lifecycle;
pub mod math;
pub mod render;
pub mod sim;

pub use growth::GrowthParams;
pub use lifecycle::GrowthController;

use render::CanvasSurface;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console::init(log::LevelFilter::Info);
}

/// Growth animation bound to a canvas element.
///
/// The page drives it: call `render(dt)` from `requestAnimationFrame` and
/// `resize(w, h)` after resizing the canvas.
#[wasm_bindgen]
pub struct GrowthCanvas {
    controller: GrowthController,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl GrowthCanvas {
    /// Start a growth animation with default parameters
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<GrowthCanvas, JsValue> {
        Self::create(canvas, GrowthParams::default())
    }

    /// Start a growth animation with parameters from a YAML document
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<GrowthCanvas, JsValue> {
        let params = GrowthParams::from_yaml(yaml).map_err(|e| {
            log::warn!("rejected growth config: {}", e);
            JsValue::from_str(&e)
        })?;
        Self::create(canvas, params)
    }

    fn create(canvas: HtmlCanvasElement, params: GrowthParams) -> Result<GrowthCanvas, JsValue> {
        let surface = CanvasSurface::from_canvas(&canvas)
            .map_err(|e| JsValue::from_str(&e))?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let controller = GrowthController::new(
            params,
            canvas.width() as f64,
            canvas.height() as f64,
            seed,
        );

        Ok(Self { controller, surface })
    }

    /// Advance by `dt` milliseconds and draw a frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f64) {
        self.controller.frame(dt, &mut self.surface);
    }

    /// Adopt the new canvas size and regrow from scratch
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.invalidate();
        self.controller.resize(width, height);
    }

    /// Regrow from scratch without waiting for the idle timer
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.controller.reset_simulation();
    }

    /// Live (fully grown) particles
    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.controller.simulation().live_count()
    }

    #[wasm_bindgen]
    pub fn line_count(&self) -> usize {
        self.controller.simulation().lines().len()
    }

    #[wasm_bindgen]
    pub fn expanded_center_count(&self) -> usize {
        self.controller.simulation().expanded_centers().len()
    }

    /// Whether the idle reset countdown is running
    #[wasm_bindgen]
    pub fn is_reset_pending(&self) -> bool {
        self.controller.is_reset_pending()
    }
}
