//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, Id, Modal, RichText, TopBottomPanel};
use tracing::info;

use super::board_view::{BoardGeometry, BoardView};
use super::theme::*;
use crate::config::GomokuConfig;
use crate::game::{GomokuGame, MoveOutcome};
use crate::Stone;

/// Hotseat Gomoku application
pub struct GomokuApp {
    game: GomokuGame,
    board_view: BoardView,
    /// Winner dialog is open
    show_winner: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_config(&GomokuConfig::default())
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GomokuConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &GomokuConfig) -> Self {
        Self {
            game: GomokuGame::new(),
            board_view: BoardView::new(BoardGeometry::from_config(config)),
            show_winner: false,
        }
    }

    pub fn game(&self) -> &GomokuGame {
        &self.game
    }

    /// Forward a board click to the game. Illegal moves are dropped silently.
    pub fn handle_click(&mut self, pos: crate::Pos) {
        if let Ok(MoveOutcome::Win { .. }) = self.game.try_place_stone(pos.row as i32, pos.col as i32) {
            self.show_winner = true;
        }
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.show_winner = false;
    }

    fn undo(&mut self) {
        self.game.undo();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    let can_undo = !self.game.is_game_over() && self.game.move_count() > 0;
                    if ui.add_enabled(can_undo, egui::Button::new("Undo (U)")).clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the status line under the board
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = if let Some(winner) = self.game.winner() {
                    RichText::new(format!("{winner} wins")).strong().color(WIN_HIGHLIGHT)
                } else if self.game.is_draw() {
                    RichText::new("Board full - draw").strong()
                } else {
                    RichText::new(format!("{} to move", self.game.current_player()))
                };
                ui.label(status);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("Move #{}", self.game.move_count())).color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = self.board_view.show(ui, &self.game) {
                self.handle_click(pos);
            }
        });
    }

    /// Modal announcing the winner
    fn render_winner_dialog(&mut self, ctx: &Context) {
        let Some(winner) = self.game.winner() else {
            return;
        };
        if !self.show_winner {
            return;
        }

        let mut new_game = false;
        let mut close = false;
        let response = Modal::new(Id::new("winner_dialog")).show(ctx, |ui| {
            ui.set_width(220.0);
            ui.heading("Victory");
            ui.add_space(8.0);
            let symbol = if winner == Stone::Black { "●" } else { "○" };
            ui.label(RichText::new(format!("{symbol} {winner} wins!")).size(18.0).strong());
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                new_game = ui.button("New Game").clicked();
                close = ui.button("Close").clicked();
            });
        });

        if new_game {
            self.new_game();
        } else if close || response.should_close() {
            self.show_winner = false;
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, undo) = ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::U)));

        if new_game {
            info!("new game requested from keyboard");
            self.new_game();
        } else if undo {
            self.undo();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_board(ctx);
        self.render_winner_dialog(ctx);
    }
}
