//! Dataset windowing: the full sample array plus the offset of the rendered slice.

use crate::domain::logging::{LogComponent, get_logger};

/// Value Object - contiguous range of the dataset currently rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataWindow {
    pub offset: usize,
    pub size: usize,
}

impl DataWindow {
    pub fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    /// Number of samples the window covers on a dataset of `len` samples.
    pub fn visible_len(&self, len: usize) -> usize {
        self.size.min(len)
    }

    /// Largest offset that still keeps the window inside the dataset.
    pub fn max_offset(&self, len: usize) -> usize {
        len.saturating_sub(self.size)
    }

    /// Clamp a raw (possibly negative) offset into `[0, len - size]`.
    pub fn clamp_offset(&self, raw: i64, len: usize) -> usize {
        let max = self.max_offset(len) as i64;
        raw.clamp(0, max) as usize
    }
}

/// Materialized window: values and their positional labels
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSlice {
    pub offset: usize,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl VisibleSlice {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Label shown for the sample at `index` within a slice starting at `offset`.
pub fn position_label(index: usize, offset: usize) -> String {
    format!("Label {}", index + 1 + offset)
}

/// Owns the dataset and the window over it.
///
/// The dataset only grows; the offset only changes through [`WindowManager::set_window`]
/// and the paging helpers, which always clamp instead of failing.
#[derive(Debug, Clone)]
pub struct WindowManager {
    data: Vec<f64>,
    window: DataWindow,
}

impl WindowManager {
    /// A zero window size is bumped to 1 so the window is never empty on a non-empty dataset.
    pub fn new(data: Vec<f64>, window_size: usize) -> Self {
        Self { data, window: DataWindow::new(0, window_size.max(1)) }
    }

    pub fn window(&self) -> DataWindow {
        self.window
    }

    pub fn offset(&self) -> usize {
        self.window.offset
    }

    pub fn window_size(&self) -> usize {
        self.window.size
    }

    pub fn dataset_len(&self) -> usize {
        self.data.len()
    }

    pub fn dataset(&self) -> &[f64] {
        &self.data
    }

    /// Move the window to `offset`, clamped to the valid range.
    ///
    /// Returns `true` when the effective offset changed.
    pub fn set_window(&mut self, offset: i64) -> bool {
        let clamped = self.window.clamp_offset(offset, self.data.len());
        let changed = clamped != self.window.offset;
        if changed {
            get_logger().trace(
                LogComponent::Domain("WindowManager"),
                &format!("offset {} -> {} (requested {})", self.window.offset, clamped, offset),
            );
        }
        self.window.offset = clamped;
        changed
    }

    /// Append samples without touching the offset.
    pub fn append_data(&mut self, samples: impl IntoIterator<Item = f64>) -> usize {
        let before = self.data.len();
        self.data.extend(samples);
        let added = self.data.len() - before;
        get_logger().debug(
            LogComponent::Domain("WindowManager"),
            &format!("appended {} samples, dataset now {}", added, self.data.len()),
        );
        added
    }

    pub fn visible_values(&self) -> &[f64] {
        let start = self.window.offset.min(self.data.len());
        let end = (start + self.window.size).min(self.data.len());
        &self.data[start..end]
    }

    pub fn visible_slice(&self) -> VisibleSlice {
        let values = self.visible_values().to_vec();
        let offset = self.window.offset;
        let labels = (0..values.len()).map(|i| position_label(i, offset)).collect();
        VisibleSlice { offset, labels, values }
    }

    pub fn page_forward(&mut self) -> bool {
        let target = self.window.offset as i64 + self.window.size as i64;
        self.set_window(target)
    }

    pub fn page_back(&mut self) -> bool {
        let target = self.window.offset as i64 - self.window.size as i64;
        self.set_window(target)
    }

    pub fn current_page(&self) -> usize {
        self.window.offset / self.window.size
    }

    pub fn page_count(&self) -> usize {
        self.data.len().div_ceil(self.window.size)
    }

    /// True once the offset reaches `threshold` (a fraction) of the dataset length,
    /// or the window sits at the end of the dataset when that mark is out of reach.
    pub fn crossed_high_water(&self, threshold: f64) -> bool {
        let len = self.data.len();
        if len == 0 {
            return true;
        }
        let mark = (threshold * len as f64).min(self.window.max_offset(len) as f64);
        self.window.offset as f64 >= mark
    }
}
