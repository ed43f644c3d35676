mod display;
mod keypad;
mod operator;
mod state;

pub use display::{display_number, format_result, round_result};
pub use keypad::CalculatorKey;
pub use operator::Operator;
pub use state::{Calculator, DEFAULT_ERROR_CLEAR_DELAY, ERROR_TEXT};
