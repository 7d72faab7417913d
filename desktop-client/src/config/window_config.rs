use common::config::Validate;
use common::games::tictactoe::DEFAULT_CELL_SIZE;
use serde::{Deserialize, Serialize};

pub const MIN_CELL_SIZE: u32 = 60;
pub const MAX_CELL_SIZE: u32 = 400;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub cell_size: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < MIN_CELL_SIZE || self.cell_size > MAX_CELL_SIZE {
            return Err(format!(
                "cell_size must be between {} and {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE
            ));
        }
        Ok(())
    }
}
