use super::operator::Operator;

/// One calculator intent, from a button or a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorKey {
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    Percent,
}

impl CalculatorKey {
    /// Maps typed characters. Enter, Backspace and Escape arrive as named keys
    /// and are mapped by the front-end.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(CalculatorKey::Digit(c)),
            '=' => Some(CalculatorKey::Equals),
            '%' => Some(CalculatorKey::Percent),
            _ => Operator::from_char(c).map(CalculatorKey::Operator),
        }
    }

    pub fn label(&self) -> String {
        match self {
            CalculatorKey::Digit(c) => c.to_string(),
            CalculatorKey::Operator(op) => op.symbol().to_string(),
            CalculatorKey::Equals => "=".to_string(),
            CalculatorKey::Clear => "AC".to_string(),
            CalculatorKey::Delete => "DEL".to_string(),
            CalculatorKey::Percent => "%".to_string(),
        }
    }
}
