use crate::application::chart_adapter::ChartAdapter;
use crate::log_chart;
use crate::config::WidgetConfig;
use crate::domain::{
    chart::{ChartKind, Orientation},
    data_source::DataSource,
    errors::AppResult,
    events::{ChartEvent, EventDispatcher, InMemoryEventDispatcher, InputEvent},
    gesture::{GestureTranslator, PointerPosition, TrackRegion},
    logging::LogComponent,
    scrollbar::{DrawSurface, ScrollbarGeometry, ScrollbarRenderer},
    window::{DataWindow, VisibleSlice, WindowManager},
};

const COMPONENT: LogComponent = LogComponent::Application("ChartController");

/// Read-only summary handed to hosts after each event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStatus {
    pub offset: usize,
    pub dataset_len: usize,
    pub page: usize,
    pub page_count: usize,
    pub kind: ChartKind,
    pub is_dragging: bool,
}

/// Explicit state object behind the paged chart widget.
///
/// Every change to the window or the dataset goes through [`ChartController::refresh`],
/// which pushes the slice to the chart and redraws the scrollbar in the same call.
pub struct ChartController<A: ChartAdapter, S: DrawSurface> {
    config: WidgetConfig,
    kind: ChartKind,
    windows: WindowManager,
    gestures: GestureTranslator,
    source: Box<dyn DataSource>,
    adapter: A,
    chart_ready: bool,
    scrollbar: ScrollbarRenderer,
    scrollbar_surface: Option<S>,
    last_geometry: Option<ScrollbarGeometry>,
    dispatcher: InMemoryEventDispatcher,
}

impl<A: ChartAdapter, S: DrawSurface> ChartController<A, S> {
    /// Validate the config and load the initial synthetic dataset.
    pub fn new(config: WidgetConfig, adapter: A, mut source: Box<dyn DataSource>) -> AppResult<Self> {
        config.validate()?;
        let data = source.fetch(0, config.initial_len);
        log_chart!(
            Info,
            COMPONENT,
            &config.chart_id,
            "created with {} samples, window {}",
            data.len(),
            config.window_size
        );
        Ok(Self {
            kind: config.kind,
            windows: WindowManager::new(data, config.window_size),
            gestures: GestureTranslator::new(config.wheel_step),
            scrollbar: ScrollbarRenderer::new(config.scrollbar_style()),
            config,
            source,
            adapter,
            chart_ready: false,
            scrollbar_surface: None,
            last_geometry: None,
            dispatcher: InMemoryEventDispatcher::new(),
        })
    }

    /// Attach the drawing surfaces and draw the first window.
    ///
    /// A missing surface only skips its drawing step. A chart library failure is
    /// returned after the scrollbar has still been drawn.
    pub fn mount(&mut self, chart_surface: Option<&A::Surface>, scrollbar_surface: Option<S>) -> AppResult<()> {
        if scrollbar_surface.is_none() {
            log_chart!(Warn, COMPONENT, &self.config.chart_id, "scrollbar surface missing, overlay will not be drawn");
        }
        self.scrollbar_surface = scrollbar_surface;

        let created = match chart_surface {
            Some(surface) => {
                let chart_config = self.config.chart_config();
                self.adapter.create(&self.config.chart_id, surface, &chart_config)
            }
            None => {
                log_chart!(Warn, COMPONENT, &self.config.chart_id, "chart surface missing, chart will not be drawn");
                Ok(())
            }
        };
        self.chart_ready = chart_surface.is_some() && created.is_ok();

        self.refresh();
        created
    }

    /// Route one input event. Returns `true` when the chart and scrollbar were redrawn.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Wheel { delta_y } => match self.gestures.wheel(delta_y, self.windows.offset()) {
                Some(target) => self.apply_offset(target),
                None => false,
            },
            InputEvent::PointerDown(position) => {
                self.pointer_down(position);
                false
            }
            InputEvent::PointerMove(position) => {
                let target = self.track_region().and_then(|region| {
                    self.gestures.pointer_move(position, &region, self.windows.dataset_len())
                });
                match target {
                    Some(target) => self.apply_offset(target),
                    None => false,
                }
            }
            InputEvent::PointerUp => {
                self.pointer_up();
                false
            }
            InputEvent::PageForward => self.apply_move(WindowManager::page_forward),
            InputEvent::PageBack => self.apply_move(WindowManager::page_back),
            InputEvent::SetKind(kind) => self.set_kind(kind),
        }
    }

    /// Move the window to a raw offset, prefetch if the high-water mark is reached,
    /// and redraw when anything changed.
    pub fn apply_offset(&mut self, target: i64) -> bool {
        self.apply_move(|windows| windows.set_window(target))
    }

    /// Run one window move, then prefetch, redraw and publish as for [`Self::apply_offset`].
    fn apply_move(&mut self, move_window: impl FnOnce(&mut WindowManager) -> bool) -> bool {
        let old_offset = self.windows.offset();
        let moved = move_window(&mut self.windows);
        let appended = self.prefetch_if_needed();

        let changed = moved || appended.is_some();
        if changed {
            self.refresh();
        }

        let chart_id = &self.config.chart_id;
        let dataset_len = self.windows.dataset_len();
        if moved {
            self.dispatcher.publish_chart_event(ChartEvent::WindowChanged {
                chart_id: chart_id.clone(),
                old_offset,
                new_offset: self.windows.offset(),
                dataset_len,
            });
        }
        if let Some(added) = appended {
            self.dispatcher.publish_chart_event(ChartEvent::DataAppended {
                chart_id: chart_id.clone(),
                added,
                dataset_len,
            });
        }
        changed
    }

    /// Append a synthetic batch once the offset reaches the prefetch threshold.
    fn prefetch_if_needed(&mut self) -> Option<usize> {
        if !self.windows.crossed_high_water(self.config.prefetch_threshold) {
            return None;
        }
        let loaded = self.windows.dataset_len();
        let batch = self.source.fetch(loaded, self.config.fetch_batch);
        let added = self.windows.append_data(batch);
        log_chart!(
            Info,
            COMPONENT,
            &self.config.chart_id,
            "offset {} reached {:.0}% of {} samples, fetched {} more",
            self.windows.offset(),
            self.config.prefetch_threshold * 100.0,
            loaded,
            added
        );
        (added > 0).then_some(added)
    }

    fn pointer_down(&mut self, position: PointerPosition) {
        let Some(region) = self.track_region() else {
            return;
        };
        let was_dragging = self.gestures.is_dragging();
        if self.gestures.pointer_down(position, &region) && !was_dragging {
            self.publish_drag_state();
        }
    }

    fn pointer_up(&mut self) {
        let was_dragging = self.gestures.is_dragging();
        self.gestures.pointer_up();
        if was_dragging {
            self.publish_drag_state();
        }
    }

    fn publish_drag_state(&self) {
        self.dispatcher.publish_chart_event(ChartEvent::DragStateChanged {
            chart_id: self.config.chart_id.clone(),
            is_dragging: self.gestures.is_dragging(),
        });
    }

    /// Switch between line and bar. The scrollbar surface is resized to the new axis first.
    pub fn set_kind(&mut self, kind: ChartKind) -> bool {
        if kind == self.kind {
            return false;
        }
        self.pointer_up();
        self.kind = kind;
        if let Some(surface) = self.scrollbar_surface.as_mut() {
            let (width, height) = self.config.scrollbar_dimensions(kind);
            surface.resize(width, height);
        }
        self.refresh();
        self.dispatcher.publish_chart_event(ChartEvent::KindChanged {
            chart_id: self.config.chart_id.clone(),
            kind,
        });
        true
    }

    /// Push the current slice to the chart and redraw the scrollbar.
    pub fn refresh(&mut self) {
        let slice = self.windows.visible_slice();
        if self.chart_ready {
            self.adapter.update(&self.config.chart_id, &slice.labels, &slice.values, Some(self.kind));
        }

        let orientation = self.orientation();
        let window = self.windows.window();
        let dataset_len = self.windows.dataset_len();
        if let Some(surface) = self.scrollbar_surface.as_mut() {
            self.last_geometry = Some(self.scrollbar.draw(surface, window, dataset_len, orientation));
        }
    }

    /// Destroy the chart and release the scrollbar surface.
    pub fn unmount(&mut self) {
        self.gestures.pointer_up();
        if self.chart_ready {
            self.adapter.destroy(&self.config.chart_id);
            self.chart_ready = false;
            self.dispatcher.publish_chart_event(ChartEvent::ChartDestroyed {
                chart_id: self.config.chart_id.clone(),
            });
        }
        self.scrollbar_surface = None;
        log_chart!(Info, COMPONENT, &self.config.chart_id, "unmounted");
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.dispatcher.subscribe_to_chart_events(handler);
    }

    fn track_region(&self) -> Option<TrackRegion> {
        self.scrollbar_surface.as_ref().map(|surface| {
            let (width, height) = surface.size();
            TrackRegion::new(width, height, self.orientation())
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.kind.scroll_orientation()
    }

    pub fn status(&self) -> ChartStatus {
        ChartStatus {
            offset: self.windows.offset(),
            dataset_len: self.windows.dataset_len(),
            page: self.windows.current_page(),
            page_count: self.windows.page_count(),
            kind: self.kind,
            is_dragging: self.gestures.is_dragging(),
        }
    }

    pub fn window(&self) -> DataWindow {
        self.windows.window()
    }

    pub fn dataset_len(&self) -> usize {
        self.windows.dataset_len()
    }

    pub fn visible_slice(&self) -> VisibleSlice {
        self.windows.visible_slice()
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    pub fn is_chart_ready(&self) -> bool {
        self.chart_ready
    }

    /// Geometry of the last scrollbar draw, if any surface was attached.
    pub fn geometry(&self) -> Option<ScrollbarGeometry> {
        self.last_geometry
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn scrollbar_surface(&self) -> Option<&S> {
        self.scrollbar_surface.as_ref()
    }
}
