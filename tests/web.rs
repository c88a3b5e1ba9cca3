//! Browser smoke tests; run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use filament_growth::GrowthCanvas;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn test_canvas_seeds_and_renders() {
    let mut growth = GrowthCanvas::new(canvas(800, 600)).unwrap();
    assert_eq!(growth.particle_count(), 3);
    assert_eq!(growth.line_count(), 9);

    for _ in 0..120 {
        growth.render(16.0);
    }
    assert!(growth.line_count() >= 9);
}

#[wasm_bindgen_test]
fn test_resize_regrows() {
    let mut growth = GrowthCanvas::new(canvas(400, 300)).unwrap();
    for _ in 0..200 {
        growth.render(16.0);
    }
    growth.resize(200.0, 100.0);

    assert_eq!(growth.particle_count(), 3);
    assert_eq!(growth.line_count(), 9);
    assert!(!growth.is_reset_pending());
}

#[wasm_bindgen_test]
fn test_bad_config_rejected() {
    let result = GrowthCanvas::with_config(canvas(100, 100), "branch_length: { start: 5.0, end: 1.0 }");
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_styles_restored_after_canvas_resize() {
    use filament_growth::entity::Color;
    use filament_growth::math::Vec2;
    use filament_growth::render::{CanvasSurface, Surface};
    use web_sys::CanvasRenderingContext2d;

    let canvas = canvas(200, 100);
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    let mut surface = CanvasSurface::from_canvas(&canvas).unwrap();
    let gold = Color::new(255, 215, 0, 0.8);

    surface.clear(200.0, 100.0);
    surface.stroke_segment(Vec2::ZERO, Vec2::new(10.0, 10.0), gold);
    surface.fill_circle(Vec2::new(5.0, 5.0), 2.0, gold);

    // resizing the element resets every context style to black
    canvas.set_width(300);
    assert_eq!(ctx.stroke_style().as_string().as_deref(), Some("#000000"));

    surface.clear(300.0, 100.0);
    surface.stroke_segment(Vec2::ZERO, Vec2::new(10.0, 10.0), gold);
    surface.fill_circle(Vec2::new(5.0, 5.0), 2.0, gold);

    assert_eq!(ctx.stroke_style().as_string().as_deref(), Some("rgba(255, 215, 0, 0.8)"));
    assert_eq!(ctx.fill_style().as_string().as_deref(), Some("rgba(255, 215, 0, 0.8)"));
}

#[wasm_bindgen_test]
fn test_growth_canvas_draws_in_color_after_resize() {
    let canvas = canvas(400, 300);
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();
    let mut growth = GrowthCanvas::new(canvas.clone()).unwrap();
    growth.render(16.0);

    canvas.set_width(500);
    growth.resize(500.0, 300.0);
    growth.render(16.0);

    assert_eq!(ctx.stroke_style().as_string().as_deref(), Some("rgba(255, 215, 0, 0.8)"));
}
