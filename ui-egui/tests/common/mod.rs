// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common utilities for Dotbox integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Once;

use dotbox_core::{color_constants::default_players, Board, PlayerId, Rgb};
use dotbox_ui_egui::{Artist, BoardRenderer, BoxSize, ScreenPoint, Viewport};

static INIT_LOGGING: Once = Once::new();

/// Route tracing output through the test harness; quiet unless RUST_LOG is set
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Screen position rounded to thousandths so it can be hashed
pub type PixelKey = (i64, i64);

pub fn key(sp: ScreenPoint) -> PixelKey {
    ((sp.x * 1000.0).round() as i64, (sp.y * 1000.0).round() as i64)
}

/// One recorded artist call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    Point { at: ScreenPoint, owned: bool },
    Edge { a: ScreenPoint, b: ScreenPoint, owner: Option<PlayerId> },
    Face { color: Rgb, anchor: ScreenPoint, box_size: BoxSize },
}

/// Artist that remembers every call instead of painting
#[derive(Debug, Default)]
pub struct RecordingArtist {
    pub calls: Vec<DrawCall>,
}

impl Artist for RecordingArtist {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn draw_point(&mut self, at: ScreenPoint, owned: bool) {
        self.calls.push(DrawCall::Point { at, owned });
    }

    fn draw_edge(&mut self, a: ScreenPoint, b: ScreenPoint, owner: Option<&dotbox_core::Player>) {
        self.calls.push(DrawCall::Edge {
            a,
            b,
            owner: owner.map(|p| p.id),
        });
    }

    fn draw_face(&mut self, color: Rgb, anchor: ScreenPoint, box_size: BoxSize) {
        self.calls.push(DrawCall::Face {
            color,
            anchor,
            box_size,
        });
    }
}

impl RecordingArtist {
    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear { .. }))
            .count()
    }

    pub fn points(&self) -> Vec<(PixelKey, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Point { at, owned } => Some((key(*at), *owned)),
                _ => None,
            })
            .collect()
    }

    /// Edges as unordered endpoint pairs (smaller key first)
    pub fn edges(&self) -> Vec<((PixelKey, PixelKey), Option<PlayerId>)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Edge { a, b, owner } => {
                    let (a, b) = (key(*a), key(*b));
                    Some(((a.min(b), a.max(b)), *owner))
                }
                _ => None,
            })
            .collect()
    }

    pub fn faces(&self) -> Vec<(Rgb, PixelKey)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Face { color, anchor, .. } => Some((*color, key(*anchor))),
                _ => None,
            })
            .collect()
    }

    /// Order-independent summary of everything drawn
    pub fn drawn_set(
        &self,
    ) -> (
        HashSet<(PixelKey, bool)>,
        HashSet<((PixelKey, PixelKey), Option<PlayerId>)>,
        HashSet<(Rgb, PixelKey)>,
    ) {
        (
            self.points().into_iter().collect(),
            self.edges().into_iter().collect(),
            self.faces().into_iter().collect(),
        )
    }
}

pub fn board(width: usize, height: usize) -> Board {
    Board::new(width, height, default_players(2)).unwrap()
}

/// 3x3 board on a 300x300 canvas: 100px cells, points at 50/150/250
pub fn setup_3x3() -> (BoardRenderer, Board) {
    init_logging();
    (BoardRenderer::new(Viewport::new(300.0, 300.0)), board(3, 3))
}

/// Claim the edge between two points for whoever is to move
pub fn claim(board: &mut Board, p1: usize, p2: usize) {
    let edge = board.get_edge(p1, p2).unwrap().id;
    let player = board.current_player().id;
    board.play(edge, player).unwrap();
}
