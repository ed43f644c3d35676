use common::calculator::{Calculator, CalculatorKey, Operator};
use eframe::egui;
use std::time::{Duration, Instant};

use crate::colors;

const KEY_SIZE: egui::Vec2 = egui::vec2(72.0, 56.0);

const KEY_ROWS: [&[CalculatorKey]; 5] = [
    &[
        CalculatorKey::Clear,
        CalculatorKey::Delete,
        CalculatorKey::Percent,
        CalculatorKey::Operator(Operator::Divide),
    ],
    &[
        CalculatorKey::Digit('7'),
        CalculatorKey::Digit('8'),
        CalculatorKey::Digit('9'),
        CalculatorKey::Operator(Operator::Multiply),
    ],
    &[
        CalculatorKey::Digit('4'),
        CalculatorKey::Digit('5'),
        CalculatorKey::Digit('6'),
        CalculatorKey::Operator(Operator::Subtract),
    ],
    &[
        CalculatorKey::Digit('1'),
        CalculatorKey::Digit('2'),
        CalculatorKey::Digit('3'),
        CalculatorKey::Operator(Operator::Add),
    ],
    &[
        CalculatorKey::Digit('0'),
        CalculatorKey::Digit('.'),
        CalculatorKey::Equals,
    ],
];

pub struct CalculatorUi {
    calculator: Calculator,
    active_operator: Option<Operator>,
}

impl CalculatorUi {
    pub fn new(error_clear_delay: Duration) -> Self {
        Self {
            calculator: Calculator::new(error_clear_delay),
            active_operator: None,
        }
    }

    /// Returns `true` when the user asked to go back to the menu.
    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> bool {
        let now = Instant::now();
        if self.calculator.poll_auto_clear(now) {
            self.active_operator = None;
        }
        if let Some(remaining) = self.calculator.time_until_auto_clear(now) {
            ctx.request_repaint_after(remaining);
        }

        for key in keyboard_keys(ctx) {
            self.press(key);
        }

        let mut back_clicked = false;
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            self.render_display(ui);
            ui.add_space(12.0);
            self.render_keys(ui);
            ui.add_space(16.0);
            if ui.button("Back to menu").clicked() {
                back_clicked = true;
            }
        });
        back_clicked
    }

    fn press(&mut self, key: CalculatorKey) {
        self.calculator.press(key);
        match key {
            CalculatorKey::Operator(op) => self.active_operator = Some(op),
            CalculatorKey::Equals | CalculatorKey::Clear => self.active_operator = None,
            _ => {}
        }
        if self.calculator.is_error() {
            self.active_operator = None;
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let frame = egui::Frame::new()
            .fill(egui::Color32::from_rgb(20, 20, 40))
            .inner_margin(12.0)
            .corner_radius(8.0);

        frame.show(ui, |ui| {
            ui.set_width(KEY_SIZE.x * 4.0 + 24.0);
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(
                    egui::RichText::new(self.calculator.history_text())
                        .size(18.0)
                        .color(colors::FUNCTION_KEY),
                );
                let color = if self.calculator.is_error() {
                    colors::WARNING
                } else {
                    colors::PANEL_TEXT
                };
                ui.label(
                    egui::RichText::new(self.calculator.display_text())
                        .size(40.0)
                        .color(color),
                );
            });
        });
    }

    fn render_keys(&mut self, ui: &mut egui::Ui) {
        let mut pressed = None;

        for row in KEY_ROWS {
            ui.horizontal(|ui| {
                for &key in row {
                    let size = if key == CalculatorKey::Digit('0') {
                        egui::vec2(KEY_SIZE.x * 2.0 + ui.spacing().item_spacing.x, KEY_SIZE.y)
                    } else {
                        KEY_SIZE
                    };
                    let button = egui::Button::new(egui::RichText::new(key.label()).size(22.0))
                        .fill(self.key_color(key));
                    if ui.add_sized(size, button).clicked() {
                        pressed = Some(key);
                    }
                }
            });
        }

        if let Some(key) = pressed {
            self.press(key);
        }
    }

    fn key_color(&self, key: CalculatorKey) -> egui::Color32 {
        match key {
            CalculatorKey::Operator(op) if self.active_operator == Some(op) => colors::ACCENT,
            CalculatorKey::Operator(_) | CalculatorKey::Equals => colors::OPERATOR_KEY,
            CalculatorKey::Clear | CalculatorKey::Delete | CalculatorKey::Percent => colors::FUNCTION_KEY,
            CalculatorKey::Digit(_) => colors::DIGIT_KEY,
        }
    }
}

fn keyboard_keys(ctx: &egui::Context) -> Vec<CalculatorKey> {
    ctx.input(|i| {
        i.events
            .iter()
            .flat_map(|event| match event {
                egui::Event::Text(text) => text.chars().filter_map(CalculatorKey::from_char).collect(),
                egui::Event::Key { key, pressed: true, .. } => named_key(*key).into_iter().collect(),
                _ => Vec::new(),
            })
            .collect()
    })
}

fn named_key(key: egui::Key) -> Option<CalculatorKey> {
    match key {
        egui::Key::Enter => Some(CalculatorKey::Equals),
        egui::Key::Backspace => Some(CalculatorKey::Delete),
        egui::Key::Escape => Some(CalculatorKey::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(named_key(egui::Key::Enter), Some(CalculatorKey::Equals));
        assert_eq!(named_key(egui::Key::Backspace), Some(CalculatorKey::Delete));
        assert_eq!(named_key(egui::Key::Escape), Some(CalculatorKey::Clear));
        assert_eq!(named_key(egui::Key::Tab), None);
    }

    #[test]
    fn test_operator_highlight_follows_presses() {
        let mut calculator_ui = CalculatorUi::new(Duration::from_millis(1500));
        calculator_ui.press(CalculatorKey::Digit('8'));
        calculator_ui.press(CalculatorKey::Operator(Operator::Divide));
        assert_eq!(calculator_ui.active_operator, Some(Operator::Divide));

        calculator_ui.press(CalculatorKey::Digit('0'));
        calculator_ui.press(CalculatorKey::Equals);
        assert_eq!(calculator_ui.active_operator, None);
        assert!(calculator_ui.calculator.is_error());
    }

    #[test]
    fn test_every_keypad_button_is_unique() {
        let keys: Vec<CalculatorKey> = KEY_ROWS.iter().flat_map(|row| row.iter().copied()).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
        assert_eq!(keys.len(), 19);
    }
}
