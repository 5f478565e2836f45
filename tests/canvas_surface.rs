#![cfg(target_arch = "wasm32")]

use paged_chart_wasm::domain::{
    chart::Orientation,
    errors::AppError,
    scrollbar::{DrawSurface, ScrollbarRenderer},
    window::DataWindow,
};
use paged_chart_wasm::infrastructure::rendering::{CanvasSurface, canvas_surface::find_canvas};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn detached_canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let canvas: HtmlCanvasElement =
        document.create_element("canvas").expect("create canvas").dyn_into().expect("canvas element");
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn surface_reports_canvas_size() {
    let surface = CanvasSurface::from_canvas(detached_canvas(640, 12)).expect("2d context");
    assert_eq!(surface.size(), (640.0, 12.0));
}

#[wasm_bindgen_test]
fn resize_reshapes_canvas() {
    let mut surface = CanvasSurface::from_canvas(detached_canvas(800, 12)).expect("2d context");
    surface.resize(12, 400);
    assert_eq!(surface.size(), (12.0, 400.0));
    assert_eq!((surface.canvas().width(), surface.canvas().height()), (12, 400));
}

#[wasm_bindgen_test]
fn renderer_draws_on_canvas() {
    let mut surface = CanvasSurface::from_canvas(detached_canvas(1000, 12)).expect("2d context");
    let geometry = ScrollbarRenderer::default().draw(
        &mut surface,
        DataWindow::new(2500, 100),
        5000,
        Orientation::Horizontal,
    );
    assert_eq!(geometry.thumb_position, 500.0);
    assert_eq!(geometry.thumb_length, 20.0);
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
    assert!(matches!(find_canvas("no-such-canvas"), Err(AppError::SurfaceUnavailable(_))));
}
