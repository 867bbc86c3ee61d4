// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI Configuration System for Dotbox
//!
//! This module provides UI customization including:
//! - Window size and title
//! - Board dimensions and appearance (line widths, point colours, fills)
//! - Player names and colours

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use dotbox_core::{
    color_constants::{hex_to_rgb, player_color, rgb_to_hex},
    Board, Player,
};
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Complete UI configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Board visual configuration
    pub board: BoardConfig,
    /// Players in turn order
    pub players: Vec<PlayerConfig>,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window size (width, height)
    pub initial_size: (f32, f32),
    /// Minimum window size
    pub min_size: (f32, f32),
}

/// Board visual configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Points per row
    pub width: usize,
    /// Points per column
    pub height: usize,
    /// Largest side of the square canvas in pixels
    pub canvas_size: f32,
    /// Canvas background colour
    pub background_color: SerializableColor,
    /// Point colour while no adjacent edge is claimed
    pub point_color: SerializableColor,
    /// Point colour once an adjacent edge is claimed
    pub owned_point_color: SerializableColor,
    /// Unclaimed edge colour
    pub neutral_edge_color: SerializableColor,
    /// Unclaimed edge width
    pub line_width: f32,
    /// Claimed edge width
    pub owned_line_width: f32,
    /// Point radius in pixels
    pub point_radius: f32,
    /// Brightness factor applied to the owner's colour for claimed boxes
    pub face_brightness: f32,
}

/// A player entry; the colour is a `#RRGGBB` string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

/// Serializable color wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_array();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Dotbox".to_string(),
                initial_size: (720.0, 800.0),
                min_size: (400.0, 460.0),
            },
            board: BoardConfig {
                width: 5,
                height: 5,
                canvas_size: 700.0,
                background_color: Color32::from_gray(245).into(),
                point_color: Color32::from_gray(60).into(),
                owned_point_color: Color32::BLACK.into(),
                neutral_edge_color: Color32::from_gray(210).into(),
                line_width: 2.0,
                owned_line_width: 5.0,
                point_radius: 6.0,
                face_brightness: 1.3,
            },
            players: (0..2)
                .map(|id| PlayerConfig {
                    name: format!("Player {}", id + 1),
                    color: rgb_to_hex(player_color(id)),
                })
                .collect(),
        }
    }
}

impl UiConfig {
    /// Load config from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Build the player list, parsing each colour
    pub fn players(&self) -> Result<Vec<Player>> {
        self.players
            .iter()
            .enumerate()
            .map(|(id, p)| {
                let color = hex_to_rgb(&p.color)
                    .map_err(|e| anyhow!("Player '{}': {}", p.name, e))?;
                Ok(Player::new(id, p.name.clone(), color))
            })
            .collect()
    }

    /// Fresh board with the configured size and players
    pub fn new_board(&self) -> Result<Board> {
        Board::new(self.board.width, self.board.height, self.players()?)
            .context("Failed to create board")
    }
}
