use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::WallCollisionMode;

const MAX_FOOD_REWARD: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub initial_interval_ms: u32,
    pub min_interval_ms: u32,
    pub speed_step_ms: u32,
    pub food_reward: u32,
    #[serde(default)]
    pub wall_collision_mode: WallCollisionMode,
}

impl SnakeSettings {
    /// Interval after one more food eaten, clamped to the floor.
    pub fn next_interval_ms(&self, current_ms: u32) -> u32 {
        current_ms
            .saturating_sub(self.speed_step_ms)
            .max(self.min_interval_ms)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_interval_ms: 150,
            min_interval_ms: 60,
            speed_step_ms: 5,
            food_reward: 10,
            wall_collision_mode: WallCollisionMode::Death,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 5 || self.grid_size > 100 {
            return Err(format!(
                "grid_size must be between 5 and 100, got {}",
                self.grid_size
            ));
        }
        if self.min_interval_ms < 20 {
            return Err("min_interval_ms must be at least 20".to_string());
        }
        if self.initial_interval_ms < self.min_interval_ms {
            return Err("initial_interval_ms must not be below min_interval_ms".to_string());
        }
        if self.initial_interval_ms > 2000 {
            return Err("initial_interval_ms must not exceed 2000".to_string());
        }
        if self.food_reward == 0 {
            return Err("food_reward must be greater than 0".to_string());
        }
        if self.food_reward > MAX_FOOD_REWARD {
            return Err(format!("food_reward must not exceed {}", MAX_FOOD_REWARD));
        }
        Ok(())
    }
}
