use common::games::snake::{SnakeCommand, SnakeGameState};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// Latest Snake snapshot, written by the session task and read by the UI each frame.
#[derive(Clone, Default)]
pub struct SharedState {
    snake: Arc<Mutex<Option<SnakeGameState>>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snake_state(&self, state: SnakeGameState) {
        *self.snake.lock().unwrap_or_else(PoisonError::into_inner) = Some(state);
    }

    pub fn snake_state(&self) -> Option<SnakeGameState> {
        self.snake
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        self.error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SnakeCommand>,
    shared_state: SharedState,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SnakeCommand>, shared_state: SharedState) -> Self {
        Self { tx, shared_state }
    }

    pub fn send(&self, command: SnakeCommand) {
        if self.tx.send(command).is_err() {
            self.shared_state
                .set_error("Snake session is not running".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_after_session_stopped_reports_error() {
        let shared_state = SharedState::new();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sender = CommandSender::new(tx, shared_state.clone());

        sender.send(SnakeCommand::Start);
        assert!(shared_state.get_error().is_some());

        shared_state.clear_error();
        assert!(shared_state.get_error().is_none());
    }

    #[test]
    fn test_send_delivers_command() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sender = CommandSender::new(tx, SharedState::new());
        sender.send(SnakeCommand::TogglePause);
        assert_eq!(rx.try_recv().unwrap(), SnakeCommand::TogglePause);
    }
}
