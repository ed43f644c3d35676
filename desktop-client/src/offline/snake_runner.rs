use common::games::SessionRng;
use common::games::snake::{FileHighScoreStore, SnakeEngine, SnakeSession, SnakeSettings};
use common::log;
use tokio::sync::mpsc;

use crate::state::{CommandSender, SharedState};
use super::LocalSnakeSink;

/// Runs the Snake session on its own tokio runtime thread, the UI talks to it
/// through the returned sender and reads snapshots from `shared_state`.
pub fn spawn_snake_session(
    settings: SnakeSettings,
    high_score_file: String,
    seed: Option<u64>,
    shared_state: SharedState,
) -> CommandSender {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let sink = LocalSnakeSink::new(shared_state.clone());
    let shared_state_for_errors = shared_state.clone();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start snake runtime: {}", e);
                shared_state_for_errors.set_error(format!("Failed to start Snake: {}", e));
                return;
            }
        };

        runtime.block_on(async move {
            let rng = match seed {
                Some(seed) => SessionRng::new(seed),
                None => SessionRng::from_random(),
            };
            let store = FileHighScoreStore::from_file(high_score_file);
            let engine = SnakeEngine::new(settings, rng, Box::new(store));
            SnakeSession::run(engine, command_rx, sink).await;
        });
    });

    CommandSender::new(command_tx, shared_state)
}
