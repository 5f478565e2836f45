mod common;

use common::{
    AdapterCall, RecordingAdapter, RecordingSurface, TestController, config_5000, controller_with,
    mounted_controller, record_events,
};
use paged_chart_wasm::application::ChartController;
use paged_chart_wasm::domain::{
    chart::{ChartKind, Orientation},
    data_source::SequentialSource,
    errors::AppError,
    events::{ChartEvent, InputEvent},
    gesture::PointerPosition,
};

#[test]
fn mount_creates_chart_and_draws_first_window() {
    let controller = mounted_controller(config_5000(), 1000.0);
    let calls = &controller.adapter().calls;
    assert_eq!(
        calls[0],
        AdapterCall::Create { chart_id: "paged-chart".into(), kind: ChartKind::Line }
    );
    let (labels, values, kind) = controller.adapter().last_update().expect("initial update");
    assert_eq!(labels.len(), 100);
    assert_eq!(values.first().copied(), Some(1.0));
    assert_eq!(kind, Some(ChartKind::Line));

    let surface = controller.scrollbar_surface().expect("surface attached");
    assert_eq!(surface.redraws, 1);
    assert!(controller.is_chart_ready());
}

#[test]
fn every_window_change_updates_chart_and_scrollbar_together() {
    let mut controller = mounted_controller(config_5000(), 1000.0);
    for step in 1..=5 {
        controller.handle(InputEvent::Wheel { delta_y: 1.0 });
        let updates = controller.adapter().updates().len();
        let redraws = controller.scrollbar_surface().map(|s| s.redraws).unwrap_or_default();
        assert_eq!(updates, step + 1);
        assert_eq!(redraws, step + 1);
    }

    let geometry = controller.geometry().expect("scrollbar drawn");
    let thumb = controller.scrollbar_surface().and_then(|s| s.thumb()).expect("thumb");
    assert_eq!(thumb.x, geometry.thumb_position);
    assert_eq!(thumb.width, geometry.thumb_length);
}

#[test]
fn unchanged_offset_skips_redraw() {
    let mut controller = mounted_controller(config_5000(), 1000.0);
    controller.handle(InputEvent::PageBack);
    assert_eq!(controller.adapter().updates().len(), 1);
    assert_eq!(controller.scrollbar_surface().map(|s| s.redraws), Some(1));
}

#[test]
fn missing_surfaces_are_tolerated() {
    let mut controller = controller_with(config_5000());
    assert!(controller.mount(None, None).is_ok());
    assert!(controller.adapter().calls.is_empty());
    assert_eq!(controller.geometry(), None);

    assert!(controller.handle(InputEvent::PageForward));
    assert_eq!(controller.window().offset, 100);
    assert!(controller.adapter().calls.is_empty());
}

#[test]
fn chart_library_failure_still_draws_scrollbar() {
    let mut controller: TestController =
        ChartController::new(config_5000(), RecordingAdapter::failing(), Box::new(SequentialSource))
            .expect("valid config");
    let result = controller.mount(Some(&()), Some(RecordingSurface::new(1000.0, 12.0)));

    assert!(matches!(result, Err(AppError::RenderingError(_))));
    assert!(!controller.is_chart_ready());
    assert!(controller.geometry().is_some());

    controller.handle(InputEvent::Wheel { delta_y: 1.0 });
    assert!(controller.adapter().updates().is_empty());
    assert_eq!(controller.scrollbar_surface().map(|s| s.redraws), Some(2));
}

#[test]
fn switching_to_bar_flips_scrollbar_axis() {
    let mut controller = controller_with(config_5000());
    controller
        .mount(Some(&()), Some(RecordingSurface::new(12.0, 400.0)))
        .expect("mount succeeds");
    let events = record_events(&mut controller);

    assert!(controller.handle(InputEvent::SetKind(ChartKind::Bar)));
    assert_eq!(controller.orientation(), Orientation::Vertical);
    let (_, _, kind) = controller.adapter().last_update().expect("update");
    assert_eq!(kind, Some(ChartKind::Bar));

    let thumb = controller.scrollbar_surface().and_then(|s| s.thumb()).expect("thumb");
    assert_eq!((thumb.x, thumb.y, thumb.width, thumb.height), (0.0, 0.0, 12.0, 8.0));

    assert_eq!(
        events.borrow().as_slice(),
        &[ChartEvent::KindChanged { chart_id: "paged-chart".into(), kind: ChartKind::Bar }]
    );
    assert!(!controller.handle(InputEvent::SetKind(ChartKind::Bar)));
}

#[test]
fn kind_switch_ends_an_active_drag() {
    let mut controller = mounted_controller(config_5000(), 1000.0);
    controller.handle(InputEvent::PointerDown(PointerPosition::new(5.0, 5.0)));
    assert!(controller.is_dragging());
    controller.handle(InputEvent::SetKind(ChartKind::Bar));
    assert!(!controller.is_dragging());
}

#[test]
fn drag_state_changes_are_published() {
    let mut controller = mounted_controller(config_5000(), 1000.0);
    let events = record_events(&mut controller);
    controller.handle(InputEvent::PointerDown(PointerPosition::new(5.0, 5.0)));
    controller.handle(InputEvent::PointerUp);
    controller.handle(InputEvent::PointerUp);

    let drag: Vec<bool> = events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            ChartEvent::DragStateChanged { is_dragging, .. } => Some(*is_dragging),
            _ => None,
        })
        .collect();
    assert_eq!(drag, vec![true, false]);
}

#[test]
fn paging_walks_whole_windows() {
    let mut controller = mounted_controller(config_5000(), 1000.0);
    assert!(controller.handle(InputEvent::PageForward));
    assert!(controller.handle(InputEvent::PageForward));
    assert_eq!(controller.status().page, 2);
    assert_eq!(controller.status().page_count, 50);

    assert!(controller.handle(InputEvent::PageBack));
    assert_eq!(controller.window().offset, 100);
    let slice = controller.visible_slice();
    assert_eq!(slice.labels.first().map(String::as_str), Some("Label 101"));
}

#[test]
fn unmount_destroys_chart_once() {
    let mut controller = mounted_controller(config_5000(), 1000.0);
    let events = record_events(&mut controller);
    controller.unmount();
    controller.unmount();

    let destroys = controller
        .adapter()
        .calls
        .iter()
        .filter(|call| matches!(call, AdapterCall::Destroy { .. }))
        .count();
    assert_eq!(destroys, 1);
    assert!(controller.scrollbar_surface().is_none());
    assert_eq!(
        events.borrow().as_slice(),
        &[ChartEvent::ChartDestroyed { chart_id: "paged-chart".into() }]
    );
}

#[test]
fn kind_switch_reshapes_scrollbar_surface() {
    let mut controller = controller_with(config_5000());
    controller
        .mount(Some(&()), Some(RecordingSurface::new(800.0, 12.0)))
        .expect("mount succeeds");

    controller.handle(InputEvent::SetKind(ChartKind::Bar));
    let surface = controller.scrollbar_surface().expect("surface attached");
    assert_eq!((surface.width, surface.height), (12.0, 400.0));
    let thumb = surface.thumb().expect("thumb");
    assert_eq!((thumb.width, thumb.height), (12.0, 8.0));

    controller.handle(InputEvent::PointerDown(PointerPosition::new(6.0, 2.0)));
    controller.handle(InputEvent::PointerMove(PointerPosition::new(500.0, 200.0)));
    assert_eq!(controller.window().offset, 2500);
    controller.handle(InputEvent::PointerUp);

    controller.handle(InputEvent::SetKind(ChartKind::Line));
    let surface = controller.scrollbar_surface().expect("surface attached");
    assert_eq!((surface.width, surface.height), (800.0, 12.0));
}
