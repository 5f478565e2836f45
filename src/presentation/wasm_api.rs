use wasm_bindgen::prelude::*;

use crate::application::ChartController;
use crate::config::WidgetConfig;
use crate::domain::{
    chart::ChartKind,
    errors::AppError,
    events::InputEvent,
    gesture::PointerPosition,
    logging::{LogComponent, get_logger},
};
use crate::log_warn;
use crate::infrastructure::rendering::{
    CanvasSurface, JsChartAdapter,
    canvas_surface::{context_2d, find_canvas},
};

/// Paged chart driven from plain JavaScript, for hosts that do not use Leptos.
///
/// Pointer coordinates are expected relative to the scrollbar canvas.
#[wasm_bindgen]
pub struct PagedChartApi {
    controller: ChartController<JsChartAdapter, CanvasSurface>,
}

#[wasm_bindgen]
impl PagedChartApi {
    /// Bind to two existing canvases. `config_json` may omit any field.
    #[wasm_bindgen(constructor)]
    pub fn new(
        chart_canvas_id: &str,
        scrollbar_canvas_id: &str,
        config_json: Option<String>,
    ) -> Result<PagedChartApi, JsValue> {
        let config = match config_json {
            Some(json) => WidgetConfig::from_json(&json)?,
            None => WidgetConfig::default(),
        };

        let chart_context = find_canvas(chart_canvas_id)
            .and_then(|canvas| context_2d(&canvas))
            .map_err(|e| warn_missing(&e))
            .ok();
        let scrollbar_surface = CanvasSurface::from_element_id(scrollbar_canvas_id)
            .map_err(|e| warn_missing(&e))
            .ok();

        let source = config.data_source();
        let mut controller = ChartController::new(config, JsChartAdapter::new(), source)?;
        if let Err(e) = controller.mount(chart_context.as_ref(), scrollbar_surface) {
            get_logger().error(LogComponent::Presentation("PagedChartApi"), &e.to_string());
        }
        Ok(Self { controller })
    }

    pub fn wheel(&mut self, delta_y: f64) -> bool {
        self.controller.handle(InputEvent::Wheel { delta_y })
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.controller.handle(InputEvent::PointerDown(PointerPosition::new(x, y)));
        self.controller.is_dragging()
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.controller.handle(InputEvent::PointerMove(PointerPosition::new(x, y)))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.controller.handle(InputEvent::PointerUp);
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> bool {
        self.controller.handle(InputEvent::PageForward)
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) -> bool {
        self.controller.handle(InputEvent::PageBack)
    }

    /// Accepts `"line"` or `"bar"`.
    #[wasm_bindgen(js_name = setKind)]
    pub fn set_kind(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind: ChartKind = kind
            .parse()
            .map_err(|_| AppError::ConfigurationError(format!("unknown chart kind '{}'", kind)))?;
        Ok(self.controller.handle(InputEvent::SetKind(kind)))
    }

    pub fn offset(&self) -> usize {
        self.controller.window().offset
    }

    #[wasm_bindgen(js_name = datasetLen)]
    pub fn dataset_len(&self) -> usize {
        self.controller.dataset_len()
    }

    /// Labels of the visible slice, for hosts that render their own legend.
    #[wasm_bindgen(js_name = visibleLabels)]
    pub fn visible_labels(&self) -> Vec<String> {
        self.controller.visible_slice().labels
    }

    #[wasm_bindgen(js_name = visibleValues)]
    pub fn visible_values(&self) -> Vec<f64> {
        self.controller.visible_slice().values
    }

    #[wasm_bindgen(js_name = isChartReady)]
    pub fn is_chart_ready(&self) -> bool {
        self.controller.is_chart_ready()
    }

    pub fn destroy(&mut self) {
        self.controller.unmount();
    }
}

fn warn_missing(error: &AppError) {
    log_warn!(LogComponent::Presentation("PagedChartApi"), "{}", error);
}
