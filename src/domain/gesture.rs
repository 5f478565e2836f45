//! Translates wheel and scrollbar-drag gestures into raw window offsets.
//!
//! Offsets produced here are unclamped; [`crate::domain::window::WindowManager::set_window`]
//! is responsible for bounding them.

use crate::domain::chart::Orientation;
use crate::domain::logging::{LogComponent, get_logger};

/// Pointer coordinates relative to the scrollbar surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle occupied by the scrollbar, anchored at its surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRegion {
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
}

impl TrackRegion {
    pub fn new(width: f64, height: f64, orientation: Orientation) -> Self {
        Self { width, height, orientation }
    }

    /// Pixel length of the track along the scroll axis.
    pub fn track_length(&self) -> f64 {
        self.orientation.along(self.width, self.height)
    }

    pub fn contains(&self, position: PointerPosition) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }

    /// Pointer position along the scroll axis mapped to `[0, 1]`.
    pub fn normalize(&self, position: PointerPosition) -> f64 {
        let length = self.track_length();
        if length <= 0.0 {
            return 0.0;
        }
        (self.orientation.along(position.x, position.y) / length).clamp(0.0, 1.0)
    }
}

/// Wheel and drag state machine.
///
/// The only state is the dragging flag: armed by a pointer-down inside the track,
/// cleared by any pointer-up.
#[derive(Debug, Clone)]
pub struct GestureTranslator {
    wheel_step: usize,
    is_dragging: bool,
}

impl GestureTranslator {
    pub fn new(wheel_step: usize) -> Self {
        Self { wheel_step, is_dragging: false }
    }

    pub fn wheel_step(&self) -> usize {
        self.wheel_step
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Raw target for a wheel event; `None` when the delta carries no direction.
    pub fn wheel(&self, delta_y: f64, current_offset: usize) -> Option<i64> {
        let step = self.wheel_step as i64;
        let current = current_offset as i64;
        if delta_y > 0.0 {
            Some(current + step)
        } else if delta_y < 0.0 {
            Some(current - step)
        } else {
            None
        }
    }

    /// Arms dragging when the pointer lands inside the track. Returns whether it did.
    pub fn pointer_down(&mut self, position: PointerPosition, region: &TrackRegion) -> bool {
        if region.contains(position) {
            self.is_dragging = true;
            get_logger().trace(
                LogComponent::Domain("GestureTranslator"),
                &format!("drag started at ({:.1}, {:.1})", position.x, position.y),
            );
        }
        self.is_dragging
    }

    /// Absolute target offset for the pointer position, or `None` when not dragging.
    pub fn pointer_move(
        &self,
        position: PointerPosition,
        region: &TrackRegion,
        dataset_len: usize,
    ) -> Option<i64> {
        if !self.is_dragging {
            return None;
        }
        let ratio = region.normalize(position);
        Some((ratio * dataset_len as f64).floor() as i64)
    }

    pub fn pointer_up(&mut self) {
        if self.is_dragging {
            get_logger().trace(LogComponent::Domain("GestureTranslator"), "drag finished");
        }
        self.is_dragging = false;
    }
}
