use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{
    ConfigContentProvider, ConfigManager, FileContentConfigProvider, MemoryContentConfigProvider,
    Validate, YamlConfigSerializer,
};

pub const DEFAULT_HIGH_SCORE_FILE: &str = "mini_arcade_high_score.yaml";

/// Persistence for the best score. Absent values load as 0.
pub trait HighScoreStore: Send {
    fn load(&self) -> Result<u32, String>;
    fn save(&self, high_score: u32) -> Result<(), String>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub snake_high_score: u32,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

pub struct ConfigHighScoreStore<TProvider: ConfigContentProvider> {
    manager: ConfigManager<TProvider, HighScoreRecord, YamlConfigSerializer>,
}

pub type FileHighScoreStore = ConfigHighScoreStore<FileContentConfigProvider>;

impl FileHighScoreStore {
    pub fn from_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl ConfigHighScoreStore<MemoryContentConfigProvider> {
    pub fn in_memory() -> Self {
        Self {
            manager: ConfigManager::new(MemoryContentConfigProvider::new(), YamlConfigSerializer::new()),
        }
    }
}

impl<TProvider> HighScoreStore for ConfigHighScoreStore<TProvider>
where
    TProvider: ConfigContentProvider + Send,
{
    fn load(&self) -> Result<u32, String> {
        Ok(self.manager.get_config()?.snake_high_score)
    }

    fn save(&self, high_score: u32) -> Result<(), String> {
        self.manager.set_config(&HighScoreRecord {
            snake_high_score: high_score,
        })
    }
}

/// Keeps the value for the process lifetime only.
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    value: AtomicU32,
}

impl MemoryHighScoreStore {
    pub fn new(initial: u32) -> Self {
        Self {
            value: AtomicU32::new(initial),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<u32, String> {
        Ok(self.value.load(Ordering::Relaxed))
    }

    fn save(&self, high_score: u32) -> Result<(), String> {
        self.value.store(high_score, Ordering::Relaxed);
        Ok(())
    }
}
