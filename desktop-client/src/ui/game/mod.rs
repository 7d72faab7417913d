mod tictactoe;

pub use tictactoe::TicTacToeBoardUi;
