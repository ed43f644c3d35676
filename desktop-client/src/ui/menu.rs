use eframe::egui;

use crate::colors;
use crate::config::Screen;

pub struct MenuUi;

impl MenuUi {
    /// Returns the screen the user picked, if any.
    pub fn render(ui: &mut egui::Ui, high_score: Option<u32>) -> Option<Screen> {
        let mut selected = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading(egui::RichText::new("Mini Arcade").size(36.0).color(colors::ACCENT));
            ui.add_space(30.0);

            let button_size = egui::vec2(220.0, 48.0);
            if ui
                .add_sized(button_size, egui::Button::new(egui::RichText::new("Snake (S)").size(20.0)))
                .clicked()
            {
                selected = Some(Screen::Snake);
            }
            ui.add_space(12.0);
            if ui
                .add_sized(button_size, egui::Button::new(egui::RichText::new("Calculator (C)").size(20.0)))
                .clicked()
            {
                selected = Some(Screen::Calculator);
            }

            if let Some(high_score) = high_score {
                ui.add_space(30.0);
                ui.label(
                    egui::RichText::new(format!("Snake high score: {}", high_score))
                        .color(colors::PANEL_TEXT),
                );
            }
        });

        ui.input(|i| {
            if i.key_pressed(egui::Key::S) {
                selected = Some(Screen::Snake);
            } else if i.key_pressed(egui::Key::C) {
                selected = Some(Screen::Calculator);
            }
        });

        selected
    }
}
