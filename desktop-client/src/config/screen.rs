use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, ValueEnum)]
pub enum Screen {
    Menu,
    Snake,
    Calculator,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Mini Arcade",
            Screen::Snake => "Mini Arcade - Snake",
            Screen::Calculator => "Mini Arcade - Calculator",
        }
    }
}
