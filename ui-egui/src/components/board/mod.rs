// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board rendering components

mod artist;
mod interaction;
mod renderer;

pub use artist::{Artist, EguiArtist};
pub use renderer::{BoardRenderer, RenderStats};

use egui::{Pos2, Rect};

/// Pixel position relative to the canvas' top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSize {
    pub x: f32,
    pub y: f32,
}

/// Where the canvas sits in the window and how large its client area is
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Window x of the canvas' left edge
    pub left: f32,
    /// Window y of the canvas' top edge
    pub top: f32,
    /// Client width in pixels
    pub width: f32,
    /// Client height in pixels
    pub height: f32,
}

impl Viewport {
    /// Canvas of the given client size anchored at the window origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Move the canvas to a window position
    pub fn at(mut self, left: f32, top: f32) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width(), rect.height()).at(rect.min.x, rect.min.y)
    }

    /// Window position of the canvas' top-left corner
    pub fn origin(&self) -> Pos2 {
        Pos2::new(self.left, self.top)
    }

    /// A canvas with no area cannot be drawn on or hit-tested
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Raw pointer position in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f32,
    pub client_y: f32,
}

impl PointerEvent {
    pub fn new(client_x: f32, client_y: f32) -> Self {
        Self { client_x, client_y }
    }
}

impl From<Pos2> for PointerEvent {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

/// Round to nearest, halves toward positive infinity (-0.5 -> 0, 0.5 -> 1)
pub(crate) fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Clamp that never panics on an inverted or NaN range
pub(crate) fn clamp(n: f32, min: f32, max: f32) -> f32 {
    n.max(min).min(max)
}
