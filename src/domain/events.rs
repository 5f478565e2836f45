//! Explicit event plumbing: `InputEvent`s flow in from any host toolkit,
//! `ChartEvent`s flow out to subscribers.

use crate::domain::chart::ChartKind;
use crate::domain::gesture::PointerPosition;
use std::fmt::Debug;

/// Base trait for all published events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Host-agnostic user input, already converted to surface-relative coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel { delta_y: f64 },
    PointerDown(PointerPosition),
    PointerMove(PointerPosition),
    PointerUp,
    PageForward,
    PageBack,
    SetKind(ChartKind),
}

/// State changes published by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    WindowChanged {
        chart_id: String,
        old_offset: usize,
        new_offset: usize,
        dataset_len: usize,
    },
    DataAppended {
        chart_id: String,
        added: usize,
        dataset_len: usize,
    },
    KindChanged {
        chart_id: String,
        kind: ChartKind,
    },
    DragStateChanged {
        chart_id: String,
        is_dragging: bool,
    },
    ChartDestroyed {
        chart_id: String,
    },
}

impl DomainEvent for ChartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ChartEvent::WindowChanged { .. } => "WindowChanged",
            ChartEvent::DataAppended { .. } => "DataAppended",
            ChartEvent::KindChanged { .. } => "KindChanged",
            ChartEvent::DragStateChanged { .. } => "DragStateChanged",
            ChartEvent::ChartDestroyed { .. } => "ChartDestroyed",
        }
    }
}

pub trait EventDispatcher {
    fn publish_chart_event(&self, event: ChartEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    chart_handlers: Vec<Box<dyn Fn(&ChartEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self { chart_handlers: Vec::new() }
    }

    pub fn subscribe_to_chart_events<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.chart_handlers.push(Box::new(handler));
    }

    pub fn handler_count(&self) -> usize {
        self.chart_handlers.len()
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_chart_event(&self, event: ChartEvent) {
        for handler in &self.chart_handlers {
            handler(&event);
        }
    }
}

impl Debug for InMemoryEventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventDispatcher")
            .field("chart_handlers", &self.chart_handlers.len())
            .finish()
    }
}
