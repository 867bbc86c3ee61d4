// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drawing primitives used by the board renderer

use dotbox_core::{color_constants::adjust_brightness, Player, Rgb};
use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use super::{BoxSize, ScreenPoint};
use crate::ui_config::BoardConfig;

/// A surface the board renderer paints on.
///
/// All positions are canvas-local pixels.
pub trait Artist {
    /// Wipe the whole canvas
    fn clear(&mut self, width: f32, height: f32);

    /// Draw a grid point; `owned` is set when any edge touching it is claimed
    fn draw_point(&mut self, at: ScreenPoint, owned: bool);

    /// Draw the line between two adjacent points
    fn draw_edge(&mut self, a: ScreenPoint, b: ScreenPoint, owner: Option<&Player>);

    /// Fill a claimed box whose top-left corner point sits at `anchor`
    fn draw_face(&mut self, color: Rgb, anchor: ScreenPoint, box_size: BoxSize);
}

/// [`Artist`] backed by an egui painter
pub struct EguiArtist<'a> {
    painter: &'a Painter,
    /// Window position of the canvas' top-left corner
    origin: Pos2,
    style: &'a BoardConfig,
}

impl<'a> EguiArtist<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, style: &'a BoardConfig) -> Self {
        Self {
            painter,
            origin,
            style,
        }
    }

    fn to_pos(&self, sp: ScreenPoint) -> Pos2 {
        self.origin + Vec2::new(sp.x, sp.y)
    }
}

fn rgb(color: Rgb) -> Color32 {
    Color32::from_rgb(color[0], color[1], color[2])
}

impl Artist for EguiArtist<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        let rect = Rect::from_min_size(self.origin, Vec2::new(width, height));
        self.painter
            .rect_filled(rect, 0.0, Color32::from(self.style.background_color));
    }

    fn draw_point(&mut self, at: ScreenPoint, owned: bool) {
        let color = if owned {
            self.style.owned_point_color
        } else {
            self.style.point_color
        };
        self.painter
            .circle_filled(self.to_pos(at), self.style.point_radius, Color32::from(color));
    }

    fn draw_edge(&mut self, a: ScreenPoint, b: ScreenPoint, owner: Option<&Player>) {
        let stroke = match owner {
            Some(player) => Stroke::new(self.style.owned_line_width, rgb(player.color)),
            None => Stroke::new(
                self.style.line_width,
                Color32::from(self.style.neutral_edge_color),
            ),
        };
        self.painter
            .line_segment([self.to_pos(a), self.to_pos(b)], stroke);
    }

    fn draw_face(&mut self, color: Rgb, anchor: ScreenPoint, box_size: BoxSize) {
        let rect = Rect::from_min_size(self.to_pos(anchor), Vec2::new(box_size.x, box_size.y));
        let fill = adjust_brightness(color, self.style.face_brightness);
        self.painter.rect_filled(rect, 0.0, rgb(fill));
    }
}
