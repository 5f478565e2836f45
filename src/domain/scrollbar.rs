//! Scrollbar overlay: geometry derived from the window and a stateless renderer.

use crate::domain::chart::{Color, Orientation};
use crate::domain::window::DataWindow;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Minimal 2D drawing capability the scrollbar needs from its host.
pub trait DrawSurface {
    /// Pixel size as `(width, height)`.
    fn size(&self) -> (f64, f64);
    /// Change the pixel size. Drawn content may be discarded.
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &Color);
}

/// Thumb placement along a track of `track_length` pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarGeometry {
    pub track_length: f64,
    pub thumb_length: f64,
    pub thumb_position: f64,
}

impl ScrollbarGeometry {
    pub fn compute(window: DataWindow, dataset_len: usize, track_length: f64) -> Self {
        let track_length = track_length.max(0.0);
        if dataset_len == 0 {
            return Self { track_length, thumb_length: track_length, thumb_position: 0.0 };
        }
        let total = dataset_len as f64;
        let visible = window.visible_len(dataset_len) as f64;
        let offset = window.offset.min(window.max_offset(dataset_len)) as f64;
        let thumb_length = visible / total * track_length;
        let thumb_position = (offset / total * track_length).min(track_length - thumb_length);
        Self { track_length, thumb_length, thumb_position }
    }

    pub fn thumb_end(&self) -> f64 {
        self.thumb_position + self.thumb_length
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarStyle {
    pub track_color: Color,
    pub thumb_color: Color,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self { track_color: Color::from_hex(0xe0e0e0), thumb_color: Color::from_hex(0x888888) }
    }
}

/// Redraws the overlay from scratch on every call.
#[derive(Debug, Clone, Default)]
pub struct ScrollbarRenderer {
    style: ScrollbarStyle,
}

impl ScrollbarRenderer {
    pub fn new(style: ScrollbarStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ScrollbarStyle {
        &self.style
    }

    /// Clear, paint the full track, then paint the thumb. Returns the geometry drawn.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        window: DataWindow,
        dataset_len: usize,
        orientation: Orientation,
    ) -> ScrollbarGeometry {
        let (width, height) = surface.size();
        let geometry =
            ScrollbarGeometry::compute(window, dataset_len, orientation.along(width, height));

        surface.clear();
        surface.fill_rect(Rect::new(0.0, 0.0, width, height), &self.style.track_color);

        let thumb = match orientation {
            Orientation::Horizontal => {
                Rect::new(geometry.thumb_position, 0.0, geometry.thumb_length, height)
            }
            Orientation::Vertical => {
                Rect::new(0.0, geometry.thumb_position, width, geometry.thumb_length)
            }
        };
        surface.fill_rect(thumb, &self.style.thumb_color);
        geometry
    }
}
