// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotbox Core - Board Model and Game Rules
//!
//! This crate provides the core game functionality including:
//! - Dots-and-boxes board representation (points, edges, faces)
//! - Turn and scoring rules
//! - Player colour palette

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod color_constants;

use serde::{Serialize, Deserialize};
use thiserror::Error;

pub use board::{Board, Edge, Face};

/// Row-major index of a grid point: `row * width + col`
pub type PointId = usize;

/// Index of an edge in the board's edge list
pub type EdgeId = usize;

/// Index of a face (unit box) in the board's face list
pub type FaceId = usize;

/// Index of a player in the board's player list
pub type PlayerId = usize;

/// 8-bit RGB colour
pub type Rgb = [u8; 3];

/// A participant in the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Position in the board's turn order
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Colour used for claimed edges and boxes
    pub color: Rgb,
}

impl Player {
    /// Create a new player
    pub fn new(id: PlayerId, name: impl Into<String>, color: Rgb) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }
}

/// Result of a successful [`Board::play`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The edge that was claimed
    pub edge: EdgeId,
    /// Faces closed by this move (the mover now owns them)
    pub completed_faces: Vec<FaceId>,
    /// Whose turn it is now
    pub next_player: PlayerId,
    /// Whether every edge is now claimed
    pub game_over: bool,
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board dimensions must be at least 2x2 points
    #[error("Invalid board dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in points
        width: usize,
        /// Requested height in points
        height: usize,
    },

    /// A game needs at least two players
    #[error("Need at least two players, got {0}")]
    NotEnoughPlayers(usize),

    /// The edge id does not exist on this board
    #[error("Unknown edge {0}")]
    UnknownEdge(EdgeId),

    /// The player id does not exist on this board
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// The edge already has an owner
    #[error("Edge {0} is already taken")]
    EdgeTaken(EdgeId),

    /// Someone other than the current player tried to move
    #[error("It is not player {0}'s turn")]
    NotYourTurn(PlayerId),

    /// All edges are claimed
    #[error("The game is over")]
    GameOver,

    /// A deserialized board whose links do not hold together
    #[error("Corrupt board: {0}")]
    CorruptBoard(String),
}
