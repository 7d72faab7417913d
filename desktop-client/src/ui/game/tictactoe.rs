use common::games::tictactoe::{BoardStateView, Mark, Position, WinningLine, BOARD_SIZE};
use eframe::egui;

/// Paints a board snapshot. Holds no game state of its own.
pub struct TicTacToeBoardUi {
    cell_size: f32,
}

impl TicTacToeBoardUi {
    const GRID_LINE_WIDTH: f32 = 4.0;
    const MARK_PADDING: f32 = 0.2;
    const LABEL_PADDING: f32 = 8.0;

    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
        }
    }

    pub fn board_size(&self) -> f32 {
        self.cell_size * BOARD_SIZE as f32
    }

    fn cell_rect(&self, board_rect: egui::Rect, row: usize, col: usize) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * self.cell_size,
                board_rect.top() + row as f32 * self.cell_size,
            ),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    fn cell_center(&self, board_rect: egui::Rect, position: Position) -> egui::Pos2 {
        self.cell_rect(board_rect, position.row, position.col).center()
    }

    pub fn draw_board(&self, painter: &egui::Painter, rect: egui::Rect, view: &BoardStateView) {
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        let stroke = egui::Stroke::new(Self::GRID_LINE_WIDTH, egui::Color32::BLACK);
        for i in 1..BOARD_SIZE {
            let x = rect.left() + i as f32 * self.cell_size;
            painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);

            let y = rect.top() + i as f32 * self.cell_size;
            painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        }

        for (row, cells) in view.grid.iter().enumerate() {
            for (col, mark) in cells.iter().enumerate() {
                let cell_rect = self.cell_rect(rect, row, col);
                match mark {
                    Mark::X => self.draw_x(painter, cell_rect),
                    Mark::O => self.draw_o(painter, cell_rect),
                    Mark::Empty => {}
                }
            }
        }

        if let Some(line) = view.winning_line {
            self.draw_winner(painter, rect, line);
        }
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * Self::MARK_PADDING;
        let stroke = egui::Stroke::new(self.mark_width(), egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * Self::MARK_PADDING;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(self.mark_width(), egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }

    fn mark_width(&self) -> f32 {
        (self.cell_size / 20.0).max(2.0)
    }

    fn draw_winner(&self, painter: &egui::Painter, rect: egui::Rect, line: WinningLine) {
        let start = self.cell_center(rect, line.start);
        let end = self.cell_center(rect, line.end);
        painter.line_segment(
            [start, end],
            egui::Stroke::new((self.cell_size / 7.0).floor(), egui::Color32::RED),
        );

        if let Some(winner) = line.winner() {
            self.draw_label(
                painter,
                rect.center(),
                &format!("Player \" {} \" wins!", winner),
            );
        }
    }

    pub fn draw_restart_hint(&self, painter: &egui::Painter, rect: egui::Rect, key: egui::Key) {
        let pos = rect.center() + egui::vec2(0.0, self.font_size() + Self::LABEL_PADDING * 3.0);
        self.draw_label(
            painter,
            pos,
            &format!("Game Over! Press {} to Restart", key.name()),
        );
    }

    fn font_size(&self) -> f32 {
        (self.cell_size / 5.0).floor()
    }

    fn draw_label(&self, painter: &egui::Painter, center: egui::Pos2, text: &str) {
        let galley = painter.layout_no_wrap(
            text.to_string(),
            egui::FontId::proportional(self.font_size()),
            egui::Color32::WHITE,
        );
        let text_rect = egui::Align2::CENTER_CENTER.anchor_size(center, galley.size());
        painter.rect_filled(
            text_rect.expand(Self::LABEL_PADDING),
            0.0,
            egui::Color32::BLACK,
        );
        painter.galley(text_rect.min, galley, egui::Color32::WHITE);
    }
}
