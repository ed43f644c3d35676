mod broadcaster;
mod snake_runner;

pub use broadcaster::LocalSnakeSink;
pub use snake_runner::spawn_snake_session;
