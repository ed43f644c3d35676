use common::config::Validate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct CalculatorConfig {
    pub error_clear_ms: u32,
}

impl CalculatorConfig {
    pub fn error_clear_delay(&self) -> Duration {
        Duration::from_millis(self.error_clear_ms as u64)
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.error_clear_ms < 100 {
            return Err("error_clear_ms must be at least 100".to_string());
        }
        if self.error_clear_ms > 10_000 {
            return Err("error_clear_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_clear_ms: common::calculator::DEFAULT_ERROR_CLEAR_DELAY.as_millis() as u32,
        }
    }
}
