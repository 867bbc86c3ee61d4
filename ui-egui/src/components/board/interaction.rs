// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board interaction handling

use dotbox_core::{Board, Edge, GameError, PlayOutcome, PlayerId, PointId};
use tracing::{debug, trace, warn};

use super::{clamp, round_half_up, Artist, BoardRenderer, PointerEvent, ScreenPoint};

impl BoardRenderer {
    /// Find the edge nearest to a canvas position.
    ///
    /// The position is projected onto the lattice of points. Whichever axis
    /// lies closer to a grid line decides the orientation: closer to a row
    /// picks the horizontal edge along it, otherwise (ties included) the
    /// vertical edge along the nearest column.
    pub fn map_screen_to_edge<'b>(&self, sp: ScreenPoint, board: &'b Board) -> Option<&'b Edge> {
        let viewport = self.viewport();
        if !viewport.is_drawable() {
            return None;
        }

        let box_size = self.get_box_size(board);
        let margin = self.get_screen_margin(board);

        // Position among the (n - 1) cells spanned by the points
        let x_factor = (sp.x - margin.x) / (viewport.width - box_size.x);
        let y_factor = (sp.y - margin.y) / (viewport.height - box_size.y);

        let x_ratio = snap_to_lattice(x_factor * (board.width() - 1) as f32);
        let y_ratio = snap_to_lattice(y_factor * (board.height() - 1) as f32);
        if !x_ratio.is_finite() || !y_ratio.is_finite() {
            return None;
        }

        let x_round = round_half_up(x_ratio);
        let y_round = round_half_up(y_ratio);
        trace!(x_ratio, y_ratio, x_round, y_round, "Hit test");

        let (p1, p2) = if (y_round - y_ratio).abs() < (x_round - x_ratio).abs() {
            let row = y_round as i64;
            let col = x_ratio.floor() as i64;
            (grid_point(row, col, board)?, grid_point(row, col + 1, board)?)
        } else {
            let row = y_ratio.floor() as i64;
            let col = x_round as i64;
            (grid_point(row, col, board)?, grid_point(row + 1, col, board)?)
        };

        board.get_edge(p1, p2)
    }

    /// Turn a click into a move.
    ///
    /// The pointer is clamped into the playable area, resolved to an edge,
    /// and handed to [`Board::play`] for `player`. Whatever the board
    /// decides, the canvas is repainted. Returns `Ok(None)` when the click
    /// does not land near any edge; nothing is drawn then, so the caller
    /// still owns painting that frame.
    pub fn select_edge<A: Artist + ?Sized>(
        &self,
        pointer: PointerEvent,
        player: PlayerId,
        board: &mut Board,
        artist: &mut A,
    ) -> Result<Option<PlayOutcome>, GameError> {
        let margin = self.get_screen_margin(board);
        let pos = self.get_mouse_pos(pointer, margin);

        let Some(edge) = self.map_screen_to_edge(pos, board).map(|edge| edge.id) else {
            debug!(x = pos.x, y = pos.y, "No edge under pointer");
            return Ok(None);
        };

        let result = board.play(edge, player);
        if let Err(e) = &result {
            warn!(edge, player, "Move rejected: {}", e);
        }

        self.draw(board, artist);
        result.map(Some)
    }

    /// Canvas-local pointer position kept within half a cell of the border
    fn get_mouse_pos(&self, pointer: PointerEvent, margin: ScreenPoint) -> ScreenPoint {
        let viewport = self.viewport();
        ScreenPoint::new(
            clamp(
                pointer.client_x - viewport.left,
                margin.x,
                viewport.width - margin.x,
            ),
            clamp(
                pointer.client_y - viewport.top,
                margin.y,
                viewport.height - margin.y,
            ),
        )
    }
}

/// Grid-unit distance under which a ratio counts as sitting on a grid line
const LATTICE_EPSILON: f32 = 1e-4;

/// Pull a ratio that is within float noise of an integer onto it
fn snap_to_lattice(ratio: f32) -> f32 {
    let nearest = round_half_up(ratio);
    if (nearest - ratio).abs() < LATTICE_EPSILON {
        nearest
    } else {
        ratio
    }
}

/// Index of the point at `(row, col)`, `None` off the grid
fn grid_point(row: i64, col: i64, board: &Board) -> Option<PointId> {
    let row = usize::try_from(row).ok()?;
    let col = usize::try_from(col).ok()?;
    (row < board.height() && col < board.width()).then(|| row * board.width() + col)
}
