use serde::{Deserialize, Serialize};

/// When a held primary button counts as a move request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputTrigger {
    /// Only the tick on which the button goes down.
    #[default]
    Edge,
    /// Every tick the button is down.
    Level,
}

/// Turns one "button down" sample per tick into a yes/no move decision.
#[derive(Debug, Clone)]
pub struct PointerTrigger {
    mode: InputTrigger,
    was_pressed: bool,
}

impl PointerTrigger {
    pub fn new(mode: InputTrigger) -> Self {
        Self {
            mode,
            was_pressed: false,
        }
    }

    pub fn mode(&self) -> InputTrigger {
        self.mode
    }

    pub fn sample(&mut self, pressed: bool) -> bool {
        let fire = match self.mode {
            InputTrigger::Edge => pressed && !self.was_pressed,
            InputTrigger::Level => pressed,
        };
        self.was_pressed = pressed;
        fire
    }
}
