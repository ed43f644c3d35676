mod engine;
mod entity;
mod game_state;
mod high_score;
mod render;
mod session;
mod settings;
mod types;

pub use engine::SnakeEngine;
pub use entity::Snake;
pub use game_state::SnakeGameState;
pub use high_score::{
    ConfigHighScoreStore, DEFAULT_HIGH_SCORE_FILE, FileHighScoreStore, HighScoreRecord,
    HighScoreStore, MemoryHighScoreStore,
};
pub use render::{render, DrawRect, Glow, Rgba};
pub use session::{SnakeCommand, SnakeSession, SnakeStateSink};
pub use settings::SnakeSettings;
pub use types::{Direction, GameOverReason, Phase, Point, TickOutcome, WallCollisionMode};
