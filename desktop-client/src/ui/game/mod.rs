mod calculator;
mod snake;

pub use calculator::CalculatorUi;
pub use snake::SnakeGameUi;
