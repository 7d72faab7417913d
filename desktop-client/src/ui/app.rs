use std::time::Duration;

use common::games::tictactoe::{GameResult, GameSession, PointerTrigger};
use common::{log, log_debug};
use eframe::egui;

use super::game::TicTacToeBoardUi;
use crate::config::Config;

pub struct TicTacToeApp {
    session: GameSession,
    pointer: PointerTrigger,
    board_ui: TicTacToeBoardUi,
    restart_key: egui::Key,
    frame_interval: Duration,
    result_reported: bool,
}

impl TicTacToeApp {
    pub fn new(session: GameSession, config: &Config) -> Self {
        let board_ui = TicTacToeBoardUi::new(session.cell_size());
        Self {
            pointer: PointerTrigger::new(config.game.input_trigger),
            board_ui,
            restart_key: config.game.restart_key().unwrap_or(egui::Key::Space),
            frame_interval: config.game.frame_interval(),
            result_reported: false,
            session,
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, board_rect: egui::Rect) {
        let (pressed, pointer_pos) =
            ctx.input(|i| (i.pointer.primary_down(), i.pointer.latest_pos()));

        if !self.pointer.sample(pressed) {
            return;
        }
        let Some(pos) = pointer_pos else {
            return;
        };

        let local = pos - board_rect.min;
        let (x, y) = (local.x.floor() as i32, local.y.floor() as i32);
        match self.session.handle_pointer_move(x, y) {
            Ok(()) => {
                if let Some(last) = self.session.board().last_move() {
                    log_debug!("Round {}: mark placed at {}", self.session.round(), last);
                }
            }
            Err(e) => log_debug!("Ignored click at ({}, {}): {}", x, y, e),
        }
    }

    fn report_result(&mut self) {
        if self.result_reported {
            return;
        }
        match self.session.board().result() {
            GameResult::InProgress => return,
            GameResult::Win(line) => {
                if let Some(winner) = line.winner() {
                    log!(
                        "Round {}: player {} wins ({} - {})",
                        self.session.round(),
                        winner,
                        line.start,
                        line.end
                    );
                }
            }
            GameResult::Draw => log!("Round {}: draw", self.session.round()),
        }
        self.result_reported = true;
    }

    fn restart(&mut self) {
        self.session.restart();
        self.result_reported = false;
        log!(
            "Round {} started, {} moves first",
            self.session.round(),
            self.session.board().current_player()
        );
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let size = self.board_ui.board_size();
                let (board_rect, _response) =
                    ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
                let painter = ui.painter_at(board_rect);

                let view = self.session.snapshot();
                self.board_ui.draw_board(&painter, board_rect, &view);

                self.handle_pointer(ctx, board_rect);
                self.report_result();

                if self.session.board().is_full() {
                    self.board_ui
                        .draw_restart_hint(&painter, board_rect, self.restart_key);
                }
            });

        if ctx.input(|i| i.key_pressed(self.restart_key)) {
            self.restart();
        }

        ctx.request_repaint_after(self.frame_interval);
    }
}
