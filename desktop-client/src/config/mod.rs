mod calculator_config;
mod main_config;
mod screen;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use calculator_config::CalculatorConfig;
pub use main_config::{get_config_manager, Config, CONFIG_FILE};
pub use screen::Screen;
