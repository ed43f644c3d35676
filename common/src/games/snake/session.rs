use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::log;
use super::engine::SnakeEngine;
use super::game_state::SnakeGameState;
use super::types::{Direction, Phase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    Start,
    TogglePause,
    Reset,
    Shutdown,
}

/// Receives a snapshot after every command and every tick.
pub trait SnakeStateSink: Send + Sync + 'static {
    fn publish(&self, state: SnakeGameState) -> impl Future<Output = ()> + Send;
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives the engine until `Shutdown` arrives or every sender is dropped.
    /// Ticks fire every `speed_interval_ms` while the game is running; commands
    /// never push the next tick back.
    pub async fn run(
        mut engine: SnakeEngine,
        mut commands: mpsc::UnboundedReceiver<SnakeCommand>,
        sink: impl SnakeStateSink,
    ) -> SnakeGameState {
        sink.publish(engine.snapshot()).await;
        let mut next_tick = Instant::now() + tick_interval(&engine);

        loop {
            let running = engine.state().phase() == Phase::Running;

            tokio::select! {
                command = commands.recv() => {
                    let Some(command) = command else {
                        log!("Snake command channel closed");
                        break;
                    };
                    if command == SnakeCommand::Shutdown {
                        break;
                    }

                    Self::handle_command(&mut engine, command);

                    if !running && engine.state().phase() == Phase::Running {
                        next_tick = Instant::now() + tick_interval(&engine);
                    }
                }
                _ = sleep_until(next_tick), if running => {
                    engine.tick();
                    next_tick = Instant::now() + tick_interval(&engine);
                }
            }

            sink.publish(engine.snapshot()).await;
        }

        log!("Snake session stopped. Score: {}", engine.state().score());
        engine.snapshot()
    }

    pub fn handle_command(engine: &mut SnakeEngine, command: SnakeCommand) {
        match command {
            SnakeCommand::Turn(direction) => engine.request_direction(direction),
            SnakeCommand::Start => engine.start(),
            SnakeCommand::TogglePause => engine.toggle_pause(),
            SnakeCommand::Reset => engine.reset(),
            SnakeCommand::Shutdown => {}
        }
    }
}

fn tick_interval(engine: &SnakeEngine) -> Duration {
    Duration::from_millis(engine.state().speed_interval_ms() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::{MemoryHighScoreStore, Point, SnakeSettings};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CollectingSink {
        snapshots: Arc<Mutex<Vec<SnakeGameState>>>,
    }

    impl SnakeStateSink for CollectingSink {
        async fn publish(&self, state: SnakeGameState) {
            self.snapshots.lock().unwrap().push(state);
        }
    }

    fn fast_engine() -> SnakeEngine {
        let settings = SnakeSettings {
            initial_interval_ms: 20,
            min_interval_ms: 20,
            ..SnakeSettings::default()
        };
        let mut engine = SnakeEngine::new(
            settings,
            SessionRng::new(42),
            Box::new(MemoryHighScoreStore::new(0)),
        );
        engine
            .state_mut()
            .set_layout(&[Point::new(10, 10)], Direction::Right, Some(Point::new(0, 0)));
        engine
    }

    #[tokio::test]
    async fn test_idle_game_does_not_tick() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = CollectingSink::default();
        let handle = tokio::spawn(SnakeSession::run(fast_engine(), rx, sink.clone()));

        tokio::time::sleep(Duration::from_millis(80)).await;
        tx.send(SnakeCommand::Shutdown).unwrap();
        let final_state = handle.await.unwrap();

        assert_eq!(final_state.phase(), Phase::Idle);
        assert_eq!(final_state.snake().head(), Point::new(10, 10));
        assert_eq!(sink.snapshots.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_running_game_ticks_until_shutdown() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = CollectingSink::default();
        let handle = tokio::spawn(SnakeSession::run(fast_engine(), rx, sink.clone()));

        tx.send(SnakeCommand::Start).unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        tx.send(SnakeCommand::Shutdown).unwrap();
        let final_state = handle.await.unwrap();

        assert_eq!(final_state.phase(), Phase::Running);
        let head = final_state.snake().head();
        assert_eq!(head.y, 10);
        assert!(head.x > 10 && head.x <= 16, "unexpected head {:?}", head);
        assert!(sink.snapshots.lock().unwrap().len() >= 3);
    }

    #[tokio::test]
    async fn test_commands_are_applied_in_order() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = CollectingSink::default();
        let handle = tokio::spawn(SnakeSession::run(fast_engine(), rx, sink.clone()));

        tx.send(SnakeCommand::Turn(Direction::Up)).unwrap();
        tx.send(SnakeCommand::Turn(Direction::Left)).unwrap();
        tx.send(SnakeCommand::Start).unwrap();
        tx.send(SnakeCommand::TogglePause).unwrap();
        tx.send(SnakeCommand::Shutdown).unwrap();
        let final_state = handle.await.unwrap();

        // Left reverses the applied Right direction and is dropped.
        assert_eq!(final_state.pending_direction(), Direction::Up);
        assert_eq!(final_state.phase(), Phase::Paused);
    }

    #[tokio::test]
    async fn test_paused_game_stops_ticking_until_resumed() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = CollectingSink::default();
        let handle = tokio::spawn(SnakeSession::run(fast_engine(), rx, sink.clone()));

        tx.send(SnakeCommand::Start).unwrap();
        tx.send(SnakeCommand::TogglePause).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let paused = sink.snapshots.lock().unwrap().last().cloned().unwrap();
        assert_eq!(paused.phase(), Phase::Paused);
        assert_eq!(paused.snake().head(), Point::new(10, 10));

        // Resuming waits a full interval before the first tick.
        tx.send(SnakeCommand::TogglePause).unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let resumed = sink.snapshots.lock().unwrap().last().cloned().unwrap();
        assert_eq!(resumed.phase(), Phase::Running);
        assert_eq!(resumed.snake().head(), Point::new(10, 10));

        tokio::time::sleep(Duration::from_millis(60)).await;
        tx.send(SnakeCommand::Shutdown).unwrap();
        let final_state = handle.await.unwrap();
        assert!(final_state.snake().head().x > 10);
    }

    #[tokio::test]
    async fn test_dropping_sender_stops_session() {
        let (tx, rx) = mpsc::unbounded_channel::<SnakeCommand>();
        let handle = tokio::spawn(SnakeSession::run(fast_engine(), rx, CollectingSink::default()));
        drop(tx);
        let final_state = handle.await.unwrap();
        assert_eq!(final_state.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset_command_returns_to_idle() {
        let mut engine = fast_engine();
        SnakeSession::handle_command(&mut engine, SnakeCommand::Start);
        assert_eq!(engine.state().phase(), Phase::Running);
        SnakeSession::handle_command(&mut engine, SnakeCommand::Reset);
        assert_eq!(engine.state().phase(), Phase::Idle);
    }
}
