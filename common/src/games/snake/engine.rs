use crate::games::SessionRng;
use crate::log;
use super::game_state::SnakeGameState;
use super::high_score::HighScoreStore;
use super::render::{render, DrawRect};
use super::settings::SnakeSettings;
use super::types::{Direction, Phase, TickOutcome};

/// Owns one Snake game: state, RNG and the high-score store it persists to.
pub struct SnakeEngine {
    state: SnakeGameState,
    rng: SessionRng,
    store: Box<dyn HighScoreStore>,
}

impl SnakeEngine {
    pub fn new(settings: SnakeSettings, rng: SessionRng, store: Box<dyn HighScoreStore>) -> Self {
        let high_score = store.load().unwrap_or_else(|e| {
            log!("Failed to load high score, starting from 0: {}", e);
            0
        });
        let mut rng = rng;
        let state = SnakeGameState::new(settings, high_score, &mut rng);
        log!(
            "Snake engine created: grid {}x{}, seed {}, high score {}",
            state.grid_size(),
            state.grid_size(),
            rng.seed(),
            high_score
        );
        Self { state, rng, store }
    }

    pub fn request_direction(&mut self, direction: Direction) {
        if !self.state.request_direction(direction) {
            log!("Ignored reversing turn to {:?}", direction);
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        let previous_high_score = self.state.high_score();
        let outcome = self.state.tick(&mut self.rng);

        if self.state.high_score() > previous_high_score {
            self.persist_high_score();
        }

        match outcome {
            TickOutcome::AteFood { score } => {
                let head = self.state.snake().head();
                log!(
                    "Ate food at ({}, {}). Score: {}, interval: {}ms",
                    head.x,
                    head.y,
                    score,
                    self.state.speed_interval_ms()
                );
            }
            TickOutcome::GameOver(reason) => {
                log!("Game over ({:?}). Score: {}", reason, self.state.score());
            }
            TickOutcome::Moved | TickOutcome::Skipped => {}
        }

        outcome
    }

    pub fn start(&mut self) {
        if self.state.phase() == Phase::Over {
            log!("Restarting after game over");
        }
        self.state.start(&mut self.rng);
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.state.reset(&mut self.rng);
    }

    pub fn render(&self) -> Vec<DrawRect> {
        render(&self.state)
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn snapshot(&self) -> SnakeGameState {
        self.state.clone()
    }

    fn persist_high_score(&self) {
        let high_score = self.state.high_score();
        if let Err(e) = self.store.save(high_score) {
            log!("Failed to save high score {}: {}", high_score, e);
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SnakeGameState {
        &mut self.state
    }
}
