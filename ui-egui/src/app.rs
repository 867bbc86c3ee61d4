// SPDX-License-Identifier: MIT OR Apache-2.0

//! Desktop application shell: status bar plus the board canvas

use anyhow::Result;
use dotbox_core::Board;
use egui::{Color32, Context, Sense, Vec2};
use tracing::{error, info};

use crate::components::board::{Artist, BoardRenderer, EguiArtist, PointerEvent, Viewport};
use crate::ui_config::UiConfig;

/// Local hot-seat game
pub struct DotboxApp {
    config: UiConfig,
    board: Board,
    renderer: BoardRenderer,
    /// Why the last click was refused
    last_error: Option<String>,
}

impl DotboxApp {
    pub fn new(config: UiConfig) -> Result<Self> {
        let board = config.new_board()?;
        info!(
            width = board.width(),
            height = board.height(),
            players = board.players().len(),
            "Starting game"
        );
        Ok(Self {
            config,
            board,
            renderer: BoardRenderer::default(),
            last_error: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Throw away the current game
    pub fn restart(&mut self) {
        match self.config.new_board() {
            Ok(board) => {
                self.board = board;
                self.last_error = None;
                info!("New game");
            }
            Err(e) => {
                error!("Failed to restart: {:#}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Current player, scores, and the result once the board is full
    pub fn status_line(&self) -> String {
        let scores = self
            .board
            .players()
            .iter()
            .map(|p| format!("{}: {}", p.name, self.board.score(p.id)))
            .collect::<Vec<_>>()
            .join("  ");

        if !self.board.is_game_over() {
            return format!("{} to move   |   {}", self.board.current_player().name, scores);
        }

        let winners = self
            .board
            .winners()
            .iter()
            .filter_map(|&id| self.board.player(id))
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        match winners.as_slice() {
            [single] => format!("{} wins   |   {}", single, scores),
            _ => format!("Draw between {}   |   {}", winners.join(", "), scores),
        }
    }

    /// Paint one frame of the board, applying `click` first if there is one.
    ///
    /// The canvas is drawn exactly once per call, including when the click
    /// misses every edge.
    fn paint_canvas<A: Artist + ?Sized>(&mut self, click: Option<PointerEvent>, artist: &mut A) {
        let Some(pointer) = click else {
            self.renderer.draw(&self.board, artist);
            return;
        };

        let player = self.board.current_player().id;
        match self
            .renderer
            .select_edge(pointer, player, &mut self.board, artist)
        {
            Ok(Some(_)) => self.last_error = None,
            // Nothing was drawn for a miss
            Ok(None) => {
                self.renderer.draw(&self.board, artist);
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }
}

impl eframe::App for DotboxApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_line());
                if ui.button("New game").clicked() {
                    self.restart();
                }
            });
            if let Some(msg) = &self.last_error {
                ui.colored_label(Color32::from_rgb(220, 38, 38), msg);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let side = ui
                .available_size()
                .min_elem()
                .min(self.config.board.canvas_size)
                .max(0.0);
            let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
            self.renderer.set_viewport(Viewport::from_rect(response.rect));

            let style = self.config.board.clone();
            let mut artist = EguiArtist::new(&painter, response.rect.min, &style);

            let click = response
                .clicked()
                .then(|| response.interact_pointer_pos())
                .flatten()
                .map(PointerEvent::from);
            self.paint_canvas(click, &mut artist);
        });
    }
}
