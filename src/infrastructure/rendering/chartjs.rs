//! Chart.js bound through `wasm-bindgen`. The library must be loaded as the global `Chart`.

use std::collections::HashMap;

use js_sys::{Array, JSON, Reflect};
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::application::chart_adapter::ChartAdapter;
use crate::domain::{
    chart::{ChartConfig, ChartKind},
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &CanvasRenderingContext2d, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn update(this: &ChartJs);

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &ChartJs);
}

/// Chart.js configuration object for a freshly created, empty chart.
pub fn chart_options_json(config: &ChartConfig) -> Value {
    json!({
        "type": config.kind.as_ref(),
        "data": {
            "labels": [],
            "datasets": [{
                "data": [],
                "label": config.dataset_label,
                "fill": true,
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": false,
            "indexAxis": config.index_axis(),
            "plugins": {
                "legend": { "position": "top" }
            },
            "scales": {
                "x": { "beginAtZero": config.begin_at_zero },
                "y": { "beginAtZero": config.begin_at_zero }
            }
        }
    })
}

struct TrackedChart {
    handle: ChartJs,
    kind: ChartKind,
}

/// Registry of live Chart.js instances keyed by chart id
#[derive(Default)]
pub struct JsChartAdapter {
    charts: HashMap<String, TrackedChart>,
}

impl JsChartAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, chart_id: &str) -> bool {
        self.charts.contains_key(chart_id)
    }
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn apply_update(
    tracked: &mut TrackedChart,
    labels: &[String],
    values: &[f64],
    kind_hint: Option<ChartKind>,
) -> Result<(), JsValue> {
    let chart: &JsValue = tracked.handle.as_ref();
    let data = get(chart, "data")?;

    let labels: Array = labels.iter().map(|label| JsValue::from_str(label)).collect();
    set(&data, "labels", &labels)?;

    let datasets = Array::from(&get(&data, "datasets")?);
    let first = datasets.get(0);
    if !first.is_undefined() {
        let values: Array = values.iter().map(|value| JsValue::from_f64(*value)).collect();
        set(&first, "data", &values)?;
    }

    if let Some(kind) = kind_hint.filter(|kind| *kind != tracked.kind) {
        set(&get(chart, "config")?, "type", &JsValue::from_str(kind.as_ref()))?;
        set(&get(chart, "options")?, "indexAxis", &JsValue::from_str(kind.index_axis()))?;
        tracked.kind = kind;
    }

    tracked.handle.update();
    Ok(())
}

impl ChartAdapter for JsChartAdapter {
    type Surface = CanvasRenderingContext2d;

    fn create(
        &mut self,
        chart_id: &str,
        surface: &Self::Surface,
        config: &ChartConfig,
    ) -> AppResult<()> {
        if let Some(previous) = self.charts.remove(chart_id) {
            previous.handle.destroy();
        }

        let options = JSON::parse(&chart_options_json(config).to_string())
            .map_err(|e| AppError::RenderingError(format!("chart config rejected: {:?}", e)))?;
        let handle = ChartJs::new(surface, &options)
            .map_err(|e| AppError::RenderingError(format!("Chart.js unavailable: {:?}", e)))?;

        get_logger().info(
            LogComponent::Infrastructure("ChartJs"),
            &format!("created {} chart '{}'", config.kind, chart_id),
        );
        self.charts.insert(chart_id.to_string(), TrackedChart { handle, kind: config.kind });
        Ok(())
    }

    fn update(
        &mut self,
        chart_id: &str,
        labels: &[String],
        values: &[f64],
        kind_hint: Option<ChartKind>,
    ) {
        let Some(tracked) = self.charts.get_mut(chart_id) else {
            return;
        };
        if let Err(e) = apply_update(tracked, labels, values, kind_hint) {
            get_logger().warn(
                LogComponent::Infrastructure("ChartJs"),
                &format!("update of '{}' failed: {:?}", chart_id, e),
            );
        }
    }

    fn destroy(&mut self, chart_id: &str) {
        if let Some(tracked) = self.charts.remove(chart_id) {
            tracked.handle.destroy();
        }
    }
}
