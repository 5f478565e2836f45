use crate::application::ChartStatus;
use crate::domain::chart::ChartKind;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive mirror of the mounted widget's controller state.
pub struct Globals {
    pub offset: RwSignal<usize>,
    pub dataset_len: RwSignal<usize>,
    pub page: RwSignal<usize>,
    pub page_count: RwSignal<usize>,
    pub chart_kind: RwSignal<ChartKind>,
    pub is_dragging: RwSignal<bool>,
    pub status_message: RwSignal<String>,
}

impl Globals {
    pub fn apply(&self, status: ChartStatus) {
        self.offset.set(status.offset);
        self.dataset_len.set(status.dataset_len);
        self.page.set(status.page);
        self.page_count.set(status.page_count);
        self.chart_kind.set(status.kind);
        self.is_dragging.set(status.is_dragging);
    }
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        offset: create_rw_signal(0),
        dataset_len: create_rw_signal(0),
        page: create_rw_signal(0),
        page_count: create_rw_signal(0),
        chart_kind: create_rw_signal(ChartKind::Line),
        is_dragging: create_rw_signal(false),
        status_message: create_rw_signal("Initializing...".to_string()),
    })
}
