// SPDX-License-Identifier: MIT OR Apache-2.0

//! Color constants for players, including colorblind-safe palettes

use crate::{Player, Rgb};

/// Okabe-Ito colorblind-safe palette as RGB 8-bit values [0-255]
/// Source: https://jfly.uni-koeln.de/color/
pub mod okabe_ito_rgb {
    pub const ORANGE: [u8; 3] = [230, 159, 0];
    pub const LIGHT_BLUE: [u8; 3] = [86, 180, 233];
    pub const GREEN: [u8; 3] = [0, 158, 115];
    pub const BLUE: [u8; 3] = [0, 114, 178];
    pub const VERMILLION: [u8; 3] = [213, 94, 0];
    pub const PURPLE: [u8; 3] = [204, 121, 167];
}

/// Player colours in turn order, picked to stay distinguishable side by side
pub const PLAYER_PALETTE: [Rgb; 6] = [
    okabe_ito_rgb::BLUE,
    okabe_ito_rgb::VERMILLION,
    okabe_ito_rgb::GREEN,
    okabe_ito_rgb::PURPLE,
    okabe_ito_rgb::ORANGE,
    okabe_ito_rgb::LIGHT_BLUE,
];

/// Palette colour for the player at `index`, wrapping around
pub fn player_color(index: usize) -> Rgb {
    PLAYER_PALETTE[index % PLAYER_PALETTE.len()]
}

/// `count` players named "Player 1", "Player 2", ... with palette colours
pub fn default_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|id| Player::new(id, format!("Player {}", id + 1), player_color(id)))
        .collect()
}

/// Get a color with modified brightness (factor: 0.0 = black, 1.0 = original, >1.0 brighter)
pub fn adjust_brightness(color: Rgb, factor: f32) -> Rgb {
    [
        (color[0] as f32 * factor).clamp(0.0, 255.0) as u8,
        (color[1] as f32 * factor).clamp(0.0, 255.0) as u8,
        (color[2] as f32 * factor).clamp(0.0, 255.0) as u8,
    ]
}

/// Convert a hex color string (#RRGGBB) to RGB
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, String> {
    // Byte slicing below needs every character to be one byte wide
    if hex.len() != 7 || !hex.is_ascii() || !hex.starts_with('#') {
        return Err(format!("Invalid hex color: {}", hex));
    }

    let r = u8::from_str_radix(&hex[1..3], 16)
        .map_err(|_| format!("Invalid red component: {}", &hex[1..3]))?;

    let g = u8::from_str_radix(&hex[3..5], 16)
        .map_err(|_| format!("Invalid green component: {}", &hex[3..5]))?;

    let b = u8::from_str_radix(&hex[5..7], 16)
        .map_err(|_| format!("Invalid blue component: {}", &hex[5..7]))?;

    Ok([r, g, b])
}

/// Format RGB as an uppercase `#RRGGBB` string
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}
