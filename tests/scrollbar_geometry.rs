mod common;

use common::{config_5000, mounted_controller};
use paged_chart_wasm::domain::{
    scrollbar::ScrollbarGeometry,
    window::{DataWindow, WindowManager},
};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn thumb_never_overflows_track(raw: i64, len: u16, size: u8, track: u16) -> bool {
    let len = len as usize;
    let size = size as usize + 1;
    let track = track as f64;
    let mut windows = WindowManager::new(vec![0.0; len], size);
    windows.set_window(raw);
    let geometry = ScrollbarGeometry::compute(windows.window(), len, track);
    geometry.thumb_position >= 0.0 && geometry.thumb_end() <= track + 1e-9
}

#[test]
fn thumb_is_proportional_to_window() {
    let geometry = ScrollbarGeometry::compute(DataWindow::new(10, 100), 5000, 1000.0);
    assert!((geometry.thumb_length - 20.0).abs() < 1e-9);
    assert!((geometry.thumb_position - 2.0).abs() < 1e-9);
}

#[test]
fn empty_dataset_fills_track() {
    let geometry = ScrollbarGeometry::compute(DataWindow::new(0, 100), 0, 300.0);
    assert_eq!(geometry.thumb_length, 300.0);
    assert_eq!(geometry.thumb_position, 0.0);
}

#[test]
fn window_larger_than_dataset_fills_track() {
    let geometry = ScrollbarGeometry::compute(DataWindow::new(0, 100), 40, 500.0);
    assert_eq!(geometry.thumb_length, 500.0);
    assert_eq!(geometry.thumb_position, 0.0);
}

#[test]
fn same_offset_twice_gives_identical_output() {
    let mut controller = mounted_controller(config_5000(), 1000.0);
    assert!(controller.apply_offset(1234));
    let slice = controller.visible_slice();
    let geometry = controller.geometry();

    assert!(!controller.apply_offset(1234));
    assert_eq!(controller.visible_slice(), slice);
    assert_eq!(controller.geometry(), geometry);
}
