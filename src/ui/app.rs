//! Main application for the Reversi GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::GameSession;
use super::theme::*;
use crate::config::GameConfig;
use crate::Player;

/// Main Reversi application
pub struct ReversiApp {
    session: GameSession,
    board_view: BoardView,
    /// End-of-game dialog dismissed for the current game
    summary_dismissed: bool,
}

impl ReversiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board_view: BoardView::new(config.cell_size),
            session: GameSession::new(config, Instant::now()),
            summary_dismissed: false,
        }
    }

    fn new_game(&mut self) {
        self.session.reset(Instant::now());
        self.summary_dismissed = false;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", self.session.human()));
                });
            });
        });
    }

    /// Render the side panel with score and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(notice) = self.session.pass_notice() {
                    ui.add_space(10.0);
                    Self::render_notice(ui, &notice);
                }
                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    Self::render_notice(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let game = &self.session.game;
            let (text, color) = if game.is_over() {
                ("Game over".to_string(), STATUS_OVER)
            } else if self.session.is_human_turn() {
                (format!("Your move ({})", game.current_player()), STATUS_READY)
            } else {
                (format!("{} is thinking...", game.current_player()), STATUS_WAITING)
            };
            ui.label(RichText::new(text).size(16.0).strong().color(color));
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let score = self.session.game.score();
            for player in [Player::Black, Player::White] {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(18.0), egui::Sense::hover());
                    let (fill, outline) = match player {
                        Player::Black => (BLACK_DISC, BLACK_DISC_HIGHLIGHT),
                        Player::White => (WHITE_DISC, DISC_OUTLINE),
                    };
                    ui.painter().circle_filled(rect.center(), 8.0, fill);
                    ui.painter().circle_stroke(rect.center(), 8.0, egui::Stroke::new(1.0, outline));

                    let you = if player == self.session.human() { " (you)" } else { "" };
                    ui.label(RichText::new(format!("{player}{you}")).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(score.get(player).to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("New game").size(13.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.new_game();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_notice(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(NOTICE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let legal_moves = if self.session.is_human_turn() {
                self.session.game.current_legal_moves()
            } else {
                Vec::new()
            };
            let overlay = BoardOverlay {
                to_move: self.session.is_human_turn().then(|| self.session.human()),
                legal_moves: &legal_moves,
                last_move: self.session.last_move,
                flipped: &self.session.flipped,
            };

            let clicked = self.board_view.show(ui, self.session.game.board(), &overlay);

            // Handle click
            if let Some(pos) = clicked {
                if let Err(e) = self.session.try_place(pos, Instant::now()) {
                    // Illegal clicks are simply ignored
                    debug!(pos = %pos.label(), error = %e, "click rejected");
                }
            }
        });
    }

    /// Modal end-of-game summary
    fn render_summary(&mut self, ctx: &Context) {
        if self.summary_dismissed {
            return;
        }
        let Some(text) = self.session.summary() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("end_of_game")).show(ctx, |ui| {
            ui.heading("End of the game");
            ui.add_space(4.0);
            ui.label(RichText::new(text).size(14.0));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    self.summary_dismissed = true;
                }
                if ui.button("New game").clicked() {
                    self.new_game();
                }
            });
        });
        // Escape or a click on the backdrop
        if modal.should_close() {
            self.summary_dismissed = true;
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.session.poll_opponent(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_summary(ctx);

        // Wake up when the opponent is due
        if let Some(wait) = self.session.time_until_opponent(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
