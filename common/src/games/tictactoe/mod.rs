mod board;
mod game_state;
mod pointer;
mod session;
mod types;
mod win_detector;

pub use board::{count_marks, get_available_moves};
pub use game_state::BoardState;
pub use pointer::{InputTrigger, PointerTrigger};
pub use session::{BoardStateView, DEFAULT_CELL_SIZE, GameSession};
pub use types::{
    BOARD_SIZE, CELL_COUNT, FirstPlayerMode, GameResult, Mark, MoveError, Player, Position,
    WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
