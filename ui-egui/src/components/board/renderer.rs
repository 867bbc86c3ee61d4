// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board rendering logic

use std::collections::{HashSet, VecDeque};

use dotbox_core::{Board, EdgeId, FaceId, PointId};
use tracing::debug;

use super::{Artist, BoxSize, ScreenPoint, Viewport};

/// What one render pass drew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub points: usize,
    pub edges: usize,
    pub faces: usize,
}

/// Board renderer component
///
/// Points sit at the centres of a `width x height` grid of cells covering
/// the canvas, so there is half a cell of margin on every side.
#[derive(Debug, Clone, Default)]
pub struct BoardRenderer {
    viewport: Viewport,
}

impl BoardRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track canvas moves and resizes
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Repaint the whole board.
    ///
    /// Walks breadth-first from point 0. Owned boxes are filled before the
    /// edges around them so lines stay on top, and every point, edge and
    /// box is drawn once.
    pub fn draw<A: Artist + ?Sized>(&self, board: &Board, artist: &mut A) -> RenderStats {
        artist.clear(self.viewport.width, self.viewport.height);
        let box_size = self.get_box_size(board);

        let mut stats = RenderStats::default();
        let mut to_visit: VecDeque<PointId> = VecDeque::from([0]);
        let mut discovered: HashSet<PointId> = HashSet::from([0]);
        let mut drawn_points: HashSet<PointId> = HashSet::new();
        let mut drawn_edges: HashSet<EdgeId> = HashSet::new();
        let mut drawn_faces: HashSet<FaceId> = HashSet::new();

        while let Some(p) = to_visit.pop_front() {
            let sp = self.map_point_to_screen(p, board);
            let mut owned = false;

            for (_, edge) in board.edge_pool(p) {
                let Some(neighbor) = edge.other_end(p) else {
                    continue;
                };

                for &face_id in &edge.faces {
                    let Some(face) = board.face(face_id) else {
                        continue;
                    };
                    let Some(color) = board.face_color(face) else {
                        continue;
                    };
                    if drawn_faces.insert(face_id) {
                        let anchor = self.map_point_to_screen(board.face_anchor(face), board);
                        artist.draw_face(color, anchor, box_size);
                        stats.faces += 1;
                    }
                }

                owned |= edge.is_owned();
                if drawn_edges.insert(edge.id) {
                    let owner = edge.owner.and_then(|id| board.player(id));
                    artist.draw_edge(sp, self.map_point_to_screen(neighbor, board), owner);
                    stats.edges += 1;
                }

                if discovered.insert(neighbor) {
                    to_visit.push_back(neighbor);
                }
            }

            if drawn_points.insert(p) {
                artist.draw_point(sp, owned);
                stats.points += 1;
            }
        }

        debug!(
            points = stats.points,
            edges = stats.edges,
            faces = stats.faces,
            "Board rendered"
        );
        stats
    }

    /// Canvas position of a grid point (the centre of its cell)
    pub fn map_point_to_screen(&self, point: PointId, board: &Board) -> ScreenPoint {
        let col = (point % board.width()) as f32;
        let row = (point / board.width()) as f32;

        let box_size = self.get_box_size(board);
        ScreenPoint::new(
            self.viewport.width * col / board.width() as f32 + box_size.x / 2.0,
            self.viewport.height * row / board.height() as f32 + box_size.y / 2.0,
        )
    }

    /// Pixel size of one grid cell
    pub fn get_box_size(&self, board: &Board) -> BoxSize {
        BoxSize {
            x: self.viewport.width / board.width() as f32,
            y: self.viewport.height / board.height() as f32,
        }
    }

    /// Offset from the canvas edge to the first row and column of points
    pub fn get_screen_margin(&self, board: &Board) -> ScreenPoint {
        let box_size = self.get_box_size(board);
        ScreenPoint::new(box_size.x / 2.0, box_size.y / 2.0)
    }
}
