use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::log_debug;
use crate::domain::{
    chart::Color,
    errors::{AppError, AppResult},
    logging::LogComponent,
    scrollbar::{DrawSurface, Rect},
};

/// Canvas 2D implementation of [`DrawSurface`]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> AppResult<Self> {
        let context = context_2d(&canvas)?;
        Ok(Self { canvas, context })
    }

    /// Look the canvas up by element id.
    pub fn from_element_id(canvas_id: &str) -> AppResult<Self> {
        Self::from_canvas(find_canvas(canvas_id)?)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }

    /// Pointer position relative to this canvas from viewport client coordinates.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        (client_x - rect.left(), client_y - rect.top())
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}

pub fn find_canvas(canvas_id: &str) -> AppResult<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::SurfaceUnavailable("document not available".into()))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| AppError::SurfaceUnavailable(format!("element '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| AppError::SurfaceUnavailable(format!("element '{}' is not a canvas", canvas_id)))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> AppResult<CanvasRenderingContext2d> {
    let context = canvas
        .get_context("2d")
        .map_err(|_| AppError::SurfaceUnavailable("failed to get 2D context".into()))?
        .ok_or_else(|| AppError::SurfaceUnavailable("2D context not supported".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::SurfaceUnavailable("failed to cast to 2D context".into()))?;
    log_debug!(
        LogComponent::Infrastructure("CanvasSurface"),
        "acquired 2D context {}x{}",
        canvas.width(),
        canvas.height()
    );
    Ok(context)
}
