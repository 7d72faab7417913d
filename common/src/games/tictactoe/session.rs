use crate::games::SessionRng;
use super::game_state::BoardState;
use super::types::{BOARD_SIZE, FirstPlayerMode, GameResult, Mark, MoveError, Player, WinningLine};

/// Cell edge in pixels; three of them make the 900 px board.
pub const DEFAULT_CELL_SIZE: u32 = 300;

/// Read-only copy of a board, handed to the renderer once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStateView {
    pub grid: [[Mark; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Player,
    pub move_count: usize,
    pub result: GameResult,
    pub winning_line: Option<WinningLine>,
    pub winner: Option<Player>,
    pub decided: bool,
}

impl From<&BoardState> for BoardStateView {
    fn from(board: &BoardState) -> Self {
        Self {
            grid: *board.grid(),
            current_player: board.current_player(),
            move_count: board.move_count(),
            result: board.result(),
            winning_line: board.winning_line(),
            winner: board.winner(),
            decided: board.is_decided(),
        }
    }
}

/// Owns the board for the current round and maps pointer input onto it.
pub struct GameSession {
    board: BoardState,
    rng: SessionRng,
    first_player_mode: FirstPlayerMode,
    cell_size: u32,
    round: u64,
}

impl GameSession {
    pub fn new(rng: SessionRng, first_player_mode: FirstPlayerMode) -> Self {
        Self::with_cell_size(rng, first_player_mode, DEFAULT_CELL_SIZE)
    }

    pub fn with_cell_size(
        mut rng: SessionRng,
        first_player_mode: FirstPlayerMode,
        cell_size: u32,
    ) -> Self {
        let board = Self::create_board(&mut rng, first_player_mode);
        Self {
            board,
            rng,
            first_player_mode,
            cell_size: cell_size.max(1),
            round: 1,
        }
    }

    fn create_board(rng: &mut SessionRng, first_player_mode: FirstPlayerMode) -> BoardState {
        let first_player = match first_player_mode {
            FirstPlayerMode::Random => rng.random_player(),
            FirstPlayerMode::X => Player::X,
            FirstPlayerMode::O => Player::O,
        };
        BoardState::new(first_player)
    }

    /// Decided boards swallow input until `restart`.
    pub fn handle_pointer_move(&mut self, pixel_x: i32, pixel_y: i32) -> Result<(), MoveError> {
        if self.board.is_decided() {
            return Ok(());
        }

        let (row, col) = self.cell_at(pixel_x, pixel_y).ok_or(MoveError::OutOfBounds)?;
        self.board.apply_move(row, col)
    }

    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.board.apply_move(row, col)
    }

    /// Maps a pixel inside the board to `(row, col)`.
    pub fn cell_at(&self, pixel_x: i32, pixel_y: i32) -> Option<(usize, usize)> {
        if pixel_x < 0 || pixel_y < 0 {
            return None;
        }
        let col = (pixel_x as u32 / self.cell_size) as usize;
        let row = (pixel_y as u32 / self.cell_size) as usize;
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some((row, col))
    }

    pub fn restart(&mut self) {
        self.board = Self::create_board(&mut self.rng, self.first_player_mode);
        self.round += 1;
    }

    pub fn snapshot(&self) -> BoardStateView {
        BoardStateView::from(&self.board)
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn is_decided(&self) -> bool {
        self.board.is_decided()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn board_size_px(&self) -> u32 {
        self.cell_size * BOARD_SIZE as u32
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
