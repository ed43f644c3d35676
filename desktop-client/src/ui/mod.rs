mod game;
mod menu;

use common::log;
use eframe::egui;

use crate::config::{get_config_manager, Config, Screen};
use crate::state::{CommandSender, SharedState};
use game::{CalculatorUi, SnakeGameUi};
use menu::MenuUi;

pub struct ArcadeApp {
    screen: Screen,
    shared_state: SharedState,
    snake_ui: SnakeGameUi,
    calculator_ui: CalculatorUi,
    config_path: String,
}

impl ArcadeApp {
    pub fn new(
        screen: Screen,
        config: &Config,
        config_path: String,
        shared_state: SharedState,
        command_sender: CommandSender,
    ) -> Self {
        Self {
            screen,
            shared_state,
            snake_ui: SnakeGameUi::new(command_sender),
            calculator_ui: CalculatorUi::new(config.calculator.error_clear_delay()),
            config_path,
        }
    }

    fn switch_screen(&mut self, ctx: &egui::Context, screen: Screen) {
        if screen == self.screen {
            return;
        }
        log!("Switching screen: {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(screen.title().to_string()));

        if let Err(e) = self.remember_screen(screen) {
            log!("Failed to save last screen: {}", e);
        }
    }

    fn remember_screen(&self, screen: Screen) -> Result<(), String> {
        let manager = get_config_manager(&self.config_path);
        let mut config = manager.get_config()?;
        config.last_screen = Some(screen);
        manager.set_config(&config)
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        let snake_state = self.shared_state.snake_state();
        let mut next_screen = None;

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Menu => {
                let high_score = snake_state.as_ref().map(|state| state.high_score());
                next_screen = MenuUi::render(ui, high_score);
            }
            Screen::Snake => {
                if self.snake_ui.render_game(ui, ctx, &snake_state) {
                    next_screen = Some(Screen::Menu);
                }
            }
            Screen::Calculator => {
                if self.calculator_ui.render(ui, ctx) {
                    next_screen = Some(Screen::Menu);
                }
            }
        });

        if let Some(screen) = next_screen {
            self.switch_screen(ctx, screen);
        }
    }
}
