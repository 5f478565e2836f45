//! Application layer: the chart controller and the charting-library seam it drives.

pub mod chart_adapter;
pub mod controller;

pub use chart_adapter::ChartAdapter;
pub use controller::{ChartController, ChartStatus};
