use super::board::get_available_moves;
use super::types::{BOARD_SIZE, CELL_COUNT, GameResult, Mark, MoveError, Player, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// One round of play. Never reset in place; a new round gets a new value.
#[derive(Debug, Clone)]
pub struct BoardState {
    grid: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    current_player: Player,
    move_count: usize,
    result: GameResult,
    last_move: Option<Position>,
}

impl BoardState {
    pub fn new(first_player: Player) -> Self {
        Self {
            grid: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player: first_player,
            move_count: 0,
            result: GameResult::InProgress,
            last_move: None,
        }
    }

    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_decided() {
            return Err(MoveError::GameAlreadyDecided);
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }

        if self.grid[row][col] != Mark::Empty {
            return Err(MoveError::CellOccupied);
        }

        self.grid[row][col] = self.current_player.mark();
        self.move_count += 1;
        self.current_player = self.current_player.opponent();
        self.last_move = Some(Position::new(row, col));

        self.check_winner();

        Ok(())
    }

    fn check_winner(&mut self) {
        if let Some(line) = check_win_with_line(&self.grid) {
            self.result = GameResult::Win(line);
            return;
        }

        if self.move_count == CELL_COUNT {
            self.result = GameResult::Draw;
        }
    }

    pub fn is_decided(&self) -> bool {
        self.result.is_decided()
    }

    pub fn is_full(&self) -> bool {
        self.move_count == CELL_COUNT
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.grid.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn grid(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.result.winning_line()
    }

    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn available_moves(&self) -> Vec<Position> {
        if self.is_decided() {
            return Vec::new();
        }
        get_available_moves(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::count_marks;

    fn play(first_player: Player, moves: &[(usize, usize)]) -> BoardState {
        let mut board = BoardState::new(first_player);
        for &(row, col) in moves {
            board.apply_move(row, col).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new(Player::O);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.current_player(), Player::O);
        assert_eq!(board.result(), GameResult::InProgress);
        assert_eq!(count_marks(board.grid()), 0);
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_apply_move_places_mark_and_switches_player() {
        let mut board = BoardState::new(Player::X);
        board.apply_move(1, 2).unwrap();
        assert_eq!(board.cell(1, 2), Some(Mark::X));
        assert_eq!(board.current_player(), Player::O);
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.last_move(), Some(Position::new(1, 2)));

        board.apply_move(0, 0).unwrap();
        assert_eq!(board.cell(0, 0), Some(Mark::O));
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn test_move_count_matches_marks() {
        let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)];
        let mut board = BoardState::new(Player::X);
        for (i, &(row, col)) in moves.iter().enumerate() {
            board.apply_move(row, col).unwrap();
            assert_eq!(board.move_count(), i + 1);
            assert_eq!(count_marks(board.grid()), board.move_count());
        }
    }

    #[test]
    fn test_row_win_scenario() {
        let board = play(Player::X, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let expected = WinningLine::new(Mark::X, Position::new(0, 0), Position::new(0, 2));
        assert_eq!(board.result(), GameResult::Win(expected));
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.winning_line(), Some(expected));
        assert!(board.is_decided());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_o_can_win_on_diagonal() {
        let board = play(Player::O, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert_eq!(board.winner(), Some(Player::O));
        let line = board.winning_line().unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_draw_scenario() {
        // X O X
        // X O O
        // O X X
        let moves = [
            (0, 0), (0, 1), (0, 2), (1, 1), (1, 0),
            (1, 2), (2, 1), (2, 0), (2, 2),
        ];
        let mut board = BoardState::new(Player::X);
        for (i, &(row, col)) in moves.iter().enumerate() {
            board.apply_move(row, col).unwrap();
            if i < moves.len() - 1 {
                assert_eq!(board.result(), GameResult::InProgress);
            }
        }
        assert_eq!(board.result(), GameResult::Draw);
        assert_eq!(board.winning_line(), None);
        assert!(board.is_full());
    }

    #[test]
    fn test_final_move_completing_two_lines_records_first_in_table_order() {
        // X O X
        // O X O
        // X O X
        let moves = [
            (0, 0), (0, 1), (0, 2), (1, 0), (2, 2),
            (1, 2), (2, 0), (2, 1), (1, 1),
        ];
        let board = play(Player::X, &moves);
        assert!(board.is_full());
        let line = board.winning_line().unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_out_of_bounds_leaves_board_unchanged() {
        let mut board = play(Player::X, &[(0, 0)]);
        let before = board.clone();
        assert_eq!(board.apply_move(5, 5), Err(MoveError::OutOfBounds));
        assert_eq!(board.apply_move(0, 3), Err(MoveError::OutOfBounds));
        assert_eq!(board.grid(), before.grid());
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut board = BoardState::new(Player::X);
        board.apply_move(0, 0).unwrap();
        assert_eq!(board.apply_move(0, 0), Err(MoveError::CellOccupied));
        assert_eq!(board.cell(0, 0), Some(Mark::X));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.current_player(), Player::O);
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let mut board = play(Player::X, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let grid = *board.grid();
        let current = board.current_player();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.apply_move(row, col), Err(MoveError::GameAlreadyDecided));
            }
        }
        assert_eq!(board.apply_move(7, 7), Err(MoveError::GameAlreadyDecided));
        assert_eq!(*board.grid(), grid);
        assert_eq!(board.current_player(), current);
        assert_eq!(board.move_count(), 5);
    }

    #[test]
    fn test_cell_out_of_range_is_none() {
        let board = BoardState::new(Player::X);
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, 0), Some(Mark::Empty));
    }
}
