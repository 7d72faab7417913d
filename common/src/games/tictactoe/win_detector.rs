use super::types::{BOARD_SIZE, Mark, Position, WinningLine};

/// Every winning line, scanned in this order: rows, columns, main diagonal,
/// anti diagonal. The first match is the one recorded.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

pub fn check_win_with_line(grid: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<WinningLine> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = *line;
        let mark = grid[a.row][a.col];
        if mark != Mark::Empty && grid[b.row][b.col] == mark && grid[c.row][c.col] == mark {
            Some(WinningLine::new(mark, a, c))
        } else {
            None
        }
    })
}

pub fn check_win(grid: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<Mark> {
    check_win_with_line(grid).map(|line| line.mark)
}
