use common::config::Validate;
use common::games::snake::{DEFAULT_HIGH_SCORE_FILE, SnakeSettings};
use serde::{Deserialize, Serialize};

use super::{CalculatorConfig, ConfigManager, FileContentConfigProvider, Screen, YamlConfigSerializer};

pub const CONFIG_FILE: &str = "mini_arcade_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeSettings,
    pub calculator: CalculatorConfig,
    pub high_score_file: String,
    #[serde(default)]
    pub last_screen: Option<Screen>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.calculator.validate()?;
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snake: SnakeSettings::default(),
            calculator: CalculatorConfig::default(),
            high_score_file: DEFAULT_HIGH_SCORE_FILE.to_string(),
            last_screen: None,
        }
    }
}
