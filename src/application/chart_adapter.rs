use crate::domain::{
    chart::{ChartConfig, ChartKind},
    errors::AppResult,
};

/// Capability the controller needs from a charting library.
///
/// Implementations keep charts keyed by id. Creating an id that already exists
/// replaces the old chart; updating or destroying an unknown id does nothing.
pub trait ChartAdapter {
    /// Drawing target the library renders into.
    type Surface;

    fn create(&mut self, chart_id: &str, surface: &Self::Surface, config: &ChartConfig)
    -> AppResult<()>;

    /// Replace the chart's labels and values. A `kind_hint` different from the
    /// chart's current kind switches its type and index axis.
    fn update(
        &mut self,
        chart_id: &str,
        labels: &[String],
        values: &[f64],
        kind_hint: Option<ChartKind>,
    );

    fn destroy(&mut self, chart_id: &str);
}
