pub mod canvas_surface;
pub mod chartjs;

pub use canvas_surface::CanvasSurface;
pub use chartjs::JsChartAdapter;
