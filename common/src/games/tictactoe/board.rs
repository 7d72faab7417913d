use super::types::{BOARD_SIZE, Mark, Position};

pub fn get_available_moves(grid: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in grid.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn count_marks(grid: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> usize {
    grid.iter()
        .flat_map(|cells| cells.iter())
        .filter(|cell| !cell.is_empty())
        .count()
}
