//! Widget configuration, deserialized from JSON with per-field defaults.

use serde::{Deserialize, Serialize};

use crate::domain::{
    chart::{ChartConfig, ChartKind, Color, Orientation},
    data_source::{DataMode, DataSource, RandomSource, SequentialSource},
    errors::{AppError, AppResult},
    scrollbar::ScrollbarStyle,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub chart_id: String,
    pub dataset_label: String,
    pub kind: ChartKind,
    /// Samples visible at once
    pub window_size: usize,
    /// Offset change per wheel notch
    pub wheel_step: usize,
    /// Offset fraction of the dataset length that triggers a fetch
    pub prefetch_threshold: f64,
    pub fetch_batch: usize,
    pub initial_len: usize,
    pub data_mode: DataMode,
    /// Upper bound for random samples
    pub random_scale: f64,
    pub chart_width: u32,
    pub chart_height: u32,
    /// Scrollbar thickness across the scroll axis, in pixels
    pub scrollbar_thickness: u32,
    pub track_color: Color,
    pub thumb_color: Color,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chart_id: "paged-chart".to_string(),
            dataset_label: "Dataset".to_string(),
            kind: ChartKind::Line,
            window_size: 100,
            wheel_step: 10,
            prefetch_threshold: 0.9,
            fetch_batch: 5000,
            initial_len: 5000,
            data_mode: DataMode::Sequential,
            random_scale: 100.0,
            chart_width: 800,
            chart_height: 400,
            scrollbar_thickness: 12,
            track_color: Color::from_hex(0xe0e0e0),
            thumb_color: Color::from_hex(0x888888),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON object; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigurationError(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.chart_id.trim().is_empty() {
            return Err(AppError::ConfigurationError("chartId must not be empty".into()));
        }
        if self.window_size == 0 {
            return Err(AppError::ConfigurationError("windowSize must be > 0".into()));
        }
        if self.wheel_step == 0 {
            return Err(AppError::ConfigurationError("wheelStep must be > 0".into()));
        }
        if !(self.prefetch_threshold > 0.0 && self.prefetch_threshold <= 1.0) {
            return Err(AppError::ConfigurationError(format!(
                "prefetchThreshold must be in (0, 1], got {}",
                self.prefetch_threshold
            )));
        }
        if self.fetch_batch == 0 {
            return Err(AppError::ConfigurationError("fetchBatch must be > 0".into()));
        }
        if self.scrollbar_thickness == 0 {
            return Err(AppError::ConfigurationError("scrollbarThickness must be > 0".into()));
        }
        if !(self.random_scale.is_finite() && self.random_scale > 0.0) {
            return Err(AppError::ConfigurationError("randomScale must be a positive number".into()));
        }
        Ok(())
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::new(self.kind, self.dataset_label.clone())
    }

    /// Pixel size of the scrollbar canvas: a strip under line charts, a column beside bar charts.
    pub fn scrollbar_dimensions(&self, kind: ChartKind) -> (u32, u32) {
        match kind.scroll_orientation() {
            Orientation::Horizontal => (self.chart_width, self.scrollbar_thickness),
            Orientation::Vertical => (self.scrollbar_thickness, self.chart_height),
        }
    }

    pub fn scrollbar_style(&self) -> ScrollbarStyle {
        ScrollbarStyle { track_color: self.track_color, thumb_color: self.thumb_color }
    }

    /// Generator matching `data_mode`. Random mode draws from `Math.random()`.
    pub fn data_source(&self) -> Box<dyn DataSource> {
        match self.data_mode {
            DataMode::Sequential => Box::new(SequentialSource),
            DataMode::Random => Box::new(RandomSource::browser(self.random_scale)),
        }
    }
}
