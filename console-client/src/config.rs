use engine::config::{ConfigManager, Validate};
use engine::game::SessionSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(path_override: Option<&str>) -> ConfigManager<Config> {
    let path = path_override
        .map(str::to_string)
        .unwrap_or_else(default_config_path);
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub game: SessionSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: SessionSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_roundtrips_through_manager() {
        let manager: ConfigManager<Config> = ConfigManager::from_yaml_file(get_temp_file_path());
        let config = Config::default();
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_missing_config_file_returns_default() {
        let manager: ConfigManager<Config> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_delay_fails_validation() {
        let config = Config {
            game: SessionSettings {
                bot_delay_ms: 120_000,
                ..SessionSettings::default()
            },
        };
        let manager: ConfigManager<Config> = ConfigManager::from_yaml_file(get_temp_file_path());
        assert!(manager.set_config(&config).is_err());
    }
}
