use common::config::Validate;
use common::logger::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ConfigManager, FileContentConfigProvider, GameConfig, WindowConfig, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: impl AsRef<Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub game: GameConfig,
    pub log_level: LogLevel,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.game.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{FirstPlayerMode, InputTrigger};
    use eframe::egui;

    fn get_temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game.restart_key(), Some(egui::Key::Space));
        assert_eq!(config.window.cell_size, 300);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        let created = manager.get_or_create_config().unwrap();
        assert_eq!(created, Config::default());

        let content_provider = FileContentConfigProvider::new(&file_path);
        let content = content_provider.get_config_content().unwrap();
        assert!(content.is_some());

        let reloaded = get_config_manager(&file_path).get_config().unwrap();
        assert_eq!(reloaded, created);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let manager = get_config_manager(get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_custom_config_from_yaml() {
        let yaml = "\
window:
  cell_size: 120
game:
  first_player: O
  input_trigger: Level
  restart_key: Enter
  max_fps: 30
log_level: Debug
";
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.cell_size, 120);
        assert_eq!(config.game.first_player, FirstPlayerMode::O);
        assert_eq!(config.game.input_trigger, InputTrigger::Level);
        assert_eq!(config.game.restart_key(), Some(egui::Key::Enter));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.game.restart_key = "NotAKey".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.game.max_fps = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.window.cell_size = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frame_interval_follows_max_fps() {
        let mut config = Config::default();
        config.game.max_fps = 1;
        assert_eq!(config.game.frame_interval(), std::time::Duration::from_secs(1));
        config.game.max_fps = 60;
        assert_eq!(config.game.frame_interval().as_millis(), 16);
    }
}
