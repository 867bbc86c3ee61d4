// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Dotbox UI library
//!
//! Board rendering and pointer hit-testing for dots and boxes, an egui
//! drawing backend, and the desktop application shell.

pub mod app;
pub mod components;
pub mod ui_config;

pub use components::board::{
    Artist, BoardRenderer, BoxSize, EguiArtist, PointerEvent, RenderStats, ScreenPoint, Viewport,
};
