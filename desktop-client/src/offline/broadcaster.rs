use common::games::snake::{SnakeGameState, SnakeStateSink};

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalSnakeSink {
    shared_state: SharedState,
}

impl LocalSnakeSink {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SnakeStateSink for LocalSnakeSink {
    async fn publish(&self, state: SnakeGameState) {
        self.shared_state.set_snake_state(state);
    }
}
