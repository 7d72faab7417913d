mod app;
mod game;

pub use app::TicTacToeApp;
