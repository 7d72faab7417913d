use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, InputTrigger};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MAX_FPS_LIMIT: u32 = 240;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    pub input_trigger: InputTrigger,
    pub restart_key: String,
    pub max_fps: u32,
}

impl GameConfig {
    pub fn restart_key(&self) -> Option<egui::Key> {
        egui::Key::from_name(&self.restart_key)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.max_fps.max(1) as f64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Random,
            input_trigger: InputTrigger::Edge,
            restart_key: egui::Key::Space.name().to_string(),
            max_fps: 60,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.restart_key().is_none() {
            return Err(format!("unknown restart_key: {}", self.restart_key));
        }
        if self.max_fps == 0 {
            return Err("max_fps must be greater than 0".to_string());
        }
        if self.max_fps > MAX_FPS_LIMIT {
            return Err(format!("max_fps must not exceed {}", MAX_FPS_LIMIT));
        }
        Ok(())
    }
}
