#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use paged_chart_wasm::application::{ChartAdapter, ChartController};
use paged_chart_wasm::config::WidgetConfig;
use paged_chart_wasm::domain::{
    chart::{ChartConfig, ChartKind, Color},
    data_source::SequentialSource,
    errors::{AppError, AppResult},
    events::ChartEvent,
    scrollbar::{DrawSurface, Rect},
};

/// Calls received by [`RecordingAdapter`]
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    Create { chart_id: String, kind: ChartKind },
    Update { chart_id: String, labels: Vec<String>, values: Vec<f64>, kind: Option<ChartKind> },
    Destroy { chart_id: String },
}

/// Chart library stand-in that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    pub calls: Vec<AdapterCall>,
    pub fail_create: bool,
}

impl RecordingAdapter {
    pub fn failing() -> Self {
        Self { calls: Vec::new(), fail_create: true }
    }

    pub fn updates(&self) -> Vec<&AdapterCall> {
        self.calls.iter().filter(|c| matches!(c, AdapterCall::Update { .. })).collect()
    }

    pub fn last_update(&self) -> Option<(&[String], &[f64], Option<ChartKind>)> {
        self.calls.iter().rev().find_map(|call| match call {
            AdapterCall::Update { labels, values, kind, .. } => {
                Some((labels.as_slice(), values.as_slice(), *kind))
            }
            _ => None,
        })
    }
}

impl ChartAdapter for RecordingAdapter {
    type Surface = ();

    fn create(&mut self, chart_id: &str, _surface: &(), config: &ChartConfig) -> AppResult<()> {
        if self.fail_create {
            return Err(AppError::RenderingError("library missing".into()));
        }
        self.calls.push(AdapterCall::Create { chart_id: chart_id.to_string(), kind: config.kind });
        Ok(())
    }

    fn update(&mut self, chart_id: &str, labels: &[String], values: &[f64], kind_hint: Option<ChartKind>) {
        self.calls.push(AdapterCall::Update {
            chart_id: chart_id.to_string(),
            labels: labels.to_vec(),
            values: values.to_vec(),
            kind: kind_hint,
        });
    }

    fn destroy(&mut self, chart_id: &str) {
        self.calls.push(AdapterCall::Destroy { chart_id: chart_id.to_string() });
    }
}

/// Drawing operations captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Fill(Rect, Color),
}

impl std::fmt::Display for DrawOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawOp::Clear => write!(f, "clear"),
            DrawOp::Fill(rect, color) => write!(
                f,
                "fill x={} y={} w={} h={} {}",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                color.to_css()
            ),
        }
    }
}

pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
    pub redraws: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ops: Vec::new(), redraws: 0 }
    }

    pub fn fills(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(rect, _) => Some(*rect),
                DrawOp::Clear => None,
            })
            .collect()
    }

    /// Rectangle painted last, i.e. the thumb.
    pub fn thumb(&self) -> Option<Rect> {
        self.fills().last().copied()
    }

    pub fn transcript(&self) -> String {
        self.ops.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
    }

    fn clear(&mut self) {
        self.redraws += 1;
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.ops.push(DrawOp::Fill(rect, *color));
    }
}

pub type TestController = ChartController<RecordingAdapter, RecordingSurface>;

/// 5000 sequential samples, window 100, step 10, 1000px horizontal track.
pub fn config_5000() -> WidgetConfig {
    WidgetConfig {
        initial_len: 5000,
        window_size: 100,
        wheel_step: 10,
        prefetch_threshold: 0.9,
        fetch_batch: 5000,
        ..WidgetConfig::default()
    }
}

pub fn controller_with(config: WidgetConfig) -> TestController {
    ChartController::new(config, RecordingAdapter::default(), Box::new(SequentialSource))
        .expect("valid config")
}

pub fn mounted_controller(config: WidgetConfig, track_length: f64) -> TestController {
    let mut controller = controller_with(config);
    controller
        .mount(Some(&()), Some(RecordingSurface::new(track_length, 12.0)))
        .expect("mount succeeds");
    controller
}

/// Subscribe and collect every published event.
pub fn record_events(controller: &mut TestController) -> Rc<RefCell<Vec<ChartEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    controller.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}
