// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation
//!
//! A board of `width * height` points. Adjacent points are joined by
//! edges; every unit square of four edges is a face. Claiming the last
//! free edge of a face gives that face to the mover, who then moves again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{EdgeId, FaceId, GameError, PlayOutcome, Player, PlayerId, PointId, Rgb};

/// A line between two adjacent points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Index into the board's edge list
    pub id: EdgeId,
    /// Endpoints, lower index first
    pub ends: (PointId, PointId),
    /// Player who claimed this edge
    pub owner: Option<PlayerId>,
    /// Faces bordered by this edge (one on the rim, two inside)
    pub faces: Vec<FaceId>,
}

impl Edge {
    /// The endpoint opposite `point`, if `point` is one of the ends
    pub fn other_end(&self, point: PointId) -> Option<PointId> {
        match self.ends {
            (a, b) if a == point => Some(b),
            (a, b) if b == point => Some(a),
            _ => None,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}

/// A unit box bounded by four edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Index into the board's face list
    pub id: FaceId,
    /// Top, bottom, left, right
    pub edges: [EdgeId; 4],
    /// Player who closed this box
    pub owner: Option<PlayerId>,
}

/// Represents the dots-and-boxes board with its edges, faces and players
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Points per row
    width: usize,
    /// Points per column
    height: usize,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    /// point -> neighbour point -> edge joining them
    edge_pool: Vec<BTreeMap<PointId, EdgeId>>,
    players: Vec<Player>,
    current_player: PlayerId,
}

impl Board {
    /// Create a new board with every edge unclaimed
    pub fn new(width: usize, height: usize, players: Vec<Player>) -> Result<Self, GameError> {
        if width < 2 || height < 2 {
            return Err(GameError::InvalidDimensions { width, height });
        }
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(players.len()));
        }

        // Normalise ids to turn order
        let players = players
            .into_iter()
            .enumerate()
            .map(|(id, player)| Player { id, ..player })
            .collect();

        let mut board = Self {
            width,
            height,
            edges: Vec::with_capacity((width - 1) * height + width * (height - 1)),
            faces: Vec::with_capacity((width - 1) * (height - 1)),
            edge_pool: vec![BTreeMap::new(); width * height],
            players,
            current_player: 0,
        };

        // Horizontal edges
        for row in 0..height {
            for col in 0..width - 1 {
                let p = row * width + col;
                board.add_edge(p, p + 1);
            }
        }

        // Vertical edges
        for row in 0..height - 1 {
            for col in 0..width {
                let p = row * width + col;
                board.add_edge(p, p + width);
            }
        }

        for row in 0..height - 1 {
            for col in 0..width - 1 {
                let p = row * width + col;
                let top = board.edge_pool[p][&(p + 1)];
                let bottom = board.edge_pool[p + width][&(p + width + 1)];
                let left = board.edge_pool[p][&(p + width)];
                let right = board.edge_pool[p + 1][&(p + width + 1)];

                let id = board.faces.len();
                board.faces.push(Face {
                    id,
                    edges: [top, bottom, left, right],
                    owner: None,
                });
                for edge in [top, bottom, left, right] {
                    board.edges[edge].faces.push(id);
                }
            }
        }

        debug!(
            width,
            height,
            edges = board.edges.len(),
            faces = board.faces.len(),
            "Board created"
        );

        Ok(board)
    }

    fn add_edge(&mut self, a: PointId, b: PointId) {
        let id = self.edges.len();
        self.edges.push(Edge {
            id,
            ends: (a.min(b), a.max(b)),
            owner: None,
            faces: Vec::new(),
        });
        self.edge_pool[a].insert(b, id);
        self.edge_pool[b].insert(a, id);
    }

    /// Points per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Points per column
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of points
    pub fn point_count(&self) -> usize {
        self.width * self.height
    }

    /// Edges incident to `point`, keyed by the neighbour they lead to.
    ///
    /// Out-of-range points have no edges.
    pub fn edge_pool(&self, point: PointId) -> impl Iterator<Item = (PointId, &Edge)> + '_ {
        self.edge_pool
            .get(point)
            .into_iter()
            .flat_map(|pool| pool.iter())
            .map(|(&neighbor, &edge)| (neighbor, &self.edges[edge]))
    }

    /// Look up the edge joining two points in either order
    pub fn get_edge(&self, p1: PointId, p2: PointId) -> Option<&Edge> {
        let id = self.edge_pool.get(p1)?.get(&p2)?;
        self.edges.get(*id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Colour of the face's owner, `None` while the face is open
    pub fn face_color(&self, face: &Face) -> Option<Rgb> {
        face.owner
            .and_then(|owner| self.player(owner))
            .map(|player| player.color)
    }

    /// Lowest point index on the face's boundary (its top-left corner)
    pub fn face_anchor(&self, face: &Face) -> PointId {
        face.edges
            .iter()
            .filter_map(|&edge| self.edge(edge))
            .flat_map(|edge| [edge.ends.0, edge.ends.1])
            .min()
            .unwrap_or(0)
    }

    /// Number of boxes owned by `player`
    pub fn score(&self, player: PlayerId) -> usize {
        self.faces
            .iter()
            .filter(|face| face.owner == Some(player))
            .count()
    }

    /// Box count per player, in turn order
    pub fn scores(&self) -> Vec<usize> {
        (0..self.players.len()).map(|id| self.score(id)).collect()
    }

    /// True once every edge has been claimed
    pub fn is_game_over(&self) -> bool {
        self.edges.iter().all(Edge::is_owned)
    }

    /// Players sharing the top score, empty while the game is running
    pub fn winners(&self) -> Vec<PlayerId> {
        if !self.is_game_over() {
            return Vec::new();
        }
        let scores = self.scores();
        let best = scores.iter().copied().max().unwrap_or(0);
        scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score == best)
            .map(|(id, _)| id)
            .collect()
    }

    /// Claim `edge` for `player`.
    ///
    /// Closing one or more boxes keeps the turn with the mover; otherwise
    /// play passes to the next player.
    pub fn play(&mut self, edge: EdgeId, player: PlayerId) -> Result<PlayOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.edges.get(edge).is_none() {
            return Err(GameError::UnknownEdge(edge));
        }
        if self.player(player).is_none() {
            return Err(GameError::UnknownPlayer(player));
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn(player));
        }
        if self.edges[edge].is_owned() {
            return Err(GameError::EdgeTaken(edge));
        }

        self.edges[edge].owner = Some(player);

        let mut completed_faces = Vec::new();
        for face_id in self.edges[edge].faces.clone() {
            let closed = self.faces[face_id]
                .edges
                .iter()
                .all(|&e| self.edges[e].is_owned());
            if closed && self.faces[face_id].owner.is_none() {
                self.faces[face_id].owner = Some(player);
                completed_faces.push(face_id);
            }
        }

        if completed_faces.is_empty() {
            self.current_player = (self.current_player + 1) % self.players.len();
        }

        let game_over = self.is_game_over();
        info!(
            edge,
            player,
            completed = completed_faces.len(),
            next = self.current_player,
            game_over,
            "Edge claimed"
        );

        Ok(PlayOutcome {
            edge,
            completed_faces,
            next_player: self.current_player,
            game_over,
        })
    }
}

/// Board as it comes off the wire, before its index links are checked
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    edge_pool: Vec<BTreeMap<PointId, EdgeId>>,
    players: Vec<Player>,
    current_player: PlayerId,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let corrupt = |what: String| Err(GameError::CorruptBoard(what));

        if raw.width < 2 || raw.height < 2 {
            return Err(GameError::InvalidDimensions {
                width: raw.width,
                height: raw.height,
            });
        }
        if raw.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(raw.players.len()));
        }
        if raw.current_player >= raw.players.len() {
            return corrupt(format!("current player {} out of range", raw.current_player));
        }

        let points = raw.width * raw.height;
        if raw.edge_pool.len() != points {
            return corrupt(format!("{} edge pools for {} points", raw.edge_pool.len(), points));
        }

        for (id, edge) in raw.edges.iter().enumerate() {
            let (a, b) = edge.ends;
            if edge.id != id || a >= points || b >= points {
                return corrupt(format!("edge {} is malformed", id));
            }
            if edge.faces.iter().any(|&face| face >= raw.faces.len()) {
                return corrupt(format!("edge {} borders a missing face", id));
            }
        }

        for (id, face) in raw.faces.iter().enumerate() {
            if face.id != id || face.edges.iter().any(|&edge| edge >= raw.edges.len()) {
                return corrupt(format!("face {} is malformed", id));
            }
        }

        for (point, pool) in raw.edge_pool.iter().enumerate() {
            for (&neighbor, &edge) in pool {
                let joins = raw
                    .edges
                    .get(edge)
                    .is_some_and(|e| e.other_end(point) == Some(neighbor));
                if !joins {
                    return corrupt(format!("pool of point {} links edge {}", point, edge));
                }
            }
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            edges: raw.edges,
            faces: raw.faces,
            edge_pool: raw.edge_pool,
            players: raw.players,
            current_player: raw.current_player,
        })
    }
}
