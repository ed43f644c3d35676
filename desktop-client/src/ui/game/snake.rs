use common::games::snake::{
    render, Direction, GameOverReason, Phase, SnakeCommand, SnakeGameState,
};
use common::timer::DeadlineTimer;
use eframe::egui;
use std::time::{Duration, Instant};

use crate::colors;
use crate::state::CommandSender;

const HIGH_SCORE_FLASH: Duration = Duration::from_millis(2000);
const MAX_BOARD_PIXELS: f32 = 560.0;

const HANDLED_KEYS: [egui::Key; 12] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::W,
    egui::Key::S,
    egui::Key::A,
    egui::Key::D,
    egui::Key::Space,
    egui::Key::Enter,
    egui::Key::P,
    egui::Key::R,
];

pub struct SnakeGameUi {
    command_sender: CommandSender,
    high_score_flash: DeadlineTimer,
    last_high_score: Option<u32>,
}

impl SnakeGameUi {
    pub fn new(command_sender: CommandSender) -> Self {
        Self {
            command_sender,
            high_score_flash: DeadlineTimer::new(),
            last_high_score: None,
        }
    }

    /// Returns `true` when the user asked to go back to the menu.
    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        game_state: &Option<SnakeGameState>,
    ) -> bool {
        let Some(state) = game_state else {
            ui.centered_and_justified(|ui| {
                ui.label("Waiting for game state...");
            });
            ctx.request_repaint();
            return false;
        };

        self.track_high_score(state);
        self.handle_input(ctx, state);

        let mut back_clicked = false;
        ui.vertical_centered(|ui| {
            self.render_header(ui, state);
            ui.add_space(8.0);
            self.render_board(ui, state);
            ui.add_space(8.0);
            back_clicked = self.render_controls(ui, state);
        });

        // The session ticks on its own thread, keep drawing its snapshots.
        ctx.request_repaint();

        if back_clicked && state.phase() == Phase::Running {
            self.command_sender.send(SnakeCommand::TogglePause);
        }
        back_clicked
    }

    fn track_high_score(&mut self, state: &SnakeGameState) {
        let now = Instant::now();
        if let Some(previous) = self.last_high_score
            && state.high_score() > previous
        {
            self.high_score_flash.arm(now, HIGH_SCORE_FLASH);
        }
        if state.phase() == Phase::Idle {
            self.high_score_flash.cancel();
        }
        self.high_score_flash.fire_if_due(now);
        self.last_high_score = Some(state.high_score());
    }

    fn handle_input(&self, ctx: &egui::Context, state: &SnakeGameState) {
        let pressed: Vec<egui::Key> = ctx.input(|i| {
            HANDLED_KEYS
                .iter()
                .copied()
                .filter(|key| i.key_pressed(*key))
                .collect()
        });

        for key in pressed {
            if let Some(command) = command_for_key(key, state.phase()) {
                self.command_sender.send(command);
            }
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, state: &SnakeGameState) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Score: {}", state.score()))
                    .size(22.0)
                    .color(colors::PANEL_TEXT),
            );
            ui.add_space(24.0);
            let high_score_text = egui::RichText::new(format!("High score: {}", state.high_score())).size(22.0);
            if self.high_score_flash.is_armed() {
                ui.label(high_score_text.color(colors::ACCENT).strong());
                ui.label(egui::RichText::new("New record!").color(colors::ACCENT));
            } else {
                ui.label(high_score_text.color(colors::PANEL_TEXT));
            }
        });
    }

    fn render_board(&self, ui: &mut egui::Ui, state: &SnakeGameState) {
        let available = ui.available_size();
        let board_pixels = available.x.min(available.y - 60.0).clamp(100.0, MAX_BOARD_PIXELS);
        let cell = board_pixels / state.grid_size() as f32;

        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(board_pixels), egui::Sense::hover());
        let origin = response.rect.min;

        for draw_rect in render(state) {
            let rect = egui::Rect::from_min_size(
                origin + egui::vec2(draw_rect.x * cell, draw_rect.y * cell),
                egui::vec2(draw_rect.width * cell, draw_rect.height * cell),
            );
            if let Some(glow) = draw_rect.glow {
                let radius = glow.radius * cell;
                painter.rect_filled(rect.expand(radius * 0.5), radius, colors::glow_color(glow.color));
            }
            painter.rect_filled(rect, cell * 0.15, colors::to_color32(draw_rect.color));
        }

        if let Some(message) = overlay_message(state) {
            painter.text(
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                message,
                egui::FontId::proportional(26.0),
                if state.phase() == Phase::Over { colors::WARNING } else { colors::PANEL_TEXT },
            );
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui, state: &SnakeGameState) -> bool {
        let mut back_clicked = false;
        ui.horizontal(|ui| {
            let start_label = match state.phase() {
                Phase::Over => "Play again",
                _ => "Start",
            };
            let can_start = matches!(state.phase(), Phase::Idle | Phase::Over);
            if ui.add_enabled(can_start, egui::Button::new(start_label)).clicked() {
                self.command_sender.send(SnakeCommand::Start);
            }

            let pause_label = if state.phase() == Phase::Paused { "Resume" } else { "Pause" };
            let can_pause = matches!(state.phase(), Phase::Running | Phase::Paused);
            if ui.add_enabled(can_pause, egui::Button::new(pause_label)).clicked() {
                self.command_sender.send(SnakeCommand::TogglePause);
            }

            if ui.button("Reset").clicked() {
                self.command_sender.send(SnakeCommand::Reset);
            }

            if ui.button("Back to menu").clicked() {
                back_clicked = true;
            }
        });
        ui.label("Arrows/WASD to steer, Space to start or pause, R to reset");
        back_clicked
    }
}

fn command_for_key(key: egui::Key, phase: Phase) -> Option<SnakeCommand> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(SnakeCommand::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(SnakeCommand::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(SnakeCommand::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(SnakeCommand::Turn(Direction::Right)),
        egui::Key::Space => match phase {
            Phase::Idle | Phase::Over => Some(SnakeCommand::Start),
            Phase::Running | Phase::Paused => Some(SnakeCommand::TogglePause),
        },
        egui::Key::Enter if matches!(phase, Phase::Idle | Phase::Over) => Some(SnakeCommand::Start),
        egui::Key::P => Some(SnakeCommand::TogglePause),
        egui::Key::R => Some(SnakeCommand::Reset),
        _ => None,
    }
}

fn overlay_message(state: &SnakeGameState) -> Option<String> {
    match state.phase() {
        Phase::Idle => Some("Press Space to start".to_string()),
        Phase::Paused => Some("Paused".to_string()),
        Phase::Running => None,
        Phase::Over => {
            let reason = match state.game_over_reason() {
                Some(GameOverReason::WallCollision) => "Hit the wall",
                Some(GameOverReason::SelfCollision) => "Bit yourself",
                Some(GameOverReason::BoardFilled) => "Board filled, you win",
                None => "Game over",
            };
            Some(format!("{}\nScore: {}", reason, state.score()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys_steer() {
        assert_eq!(
            command_for_key(egui::Key::ArrowUp, Phase::Running),
            Some(SnakeCommand::Turn(Direction::Up))
        );
        assert_eq!(
            command_for_key(egui::Key::A, Phase::Running),
            Some(SnakeCommand::Turn(Direction::Left))
        );
    }

    #[test]
    fn test_space_starts_or_pauses_depending_on_phase() {
        assert_eq!(command_for_key(egui::Key::Space, Phase::Idle), Some(SnakeCommand::Start));
        assert_eq!(command_for_key(egui::Key::Space, Phase::Over), Some(SnakeCommand::Start));
        assert_eq!(
            command_for_key(egui::Key::Space, Phase::Running),
            Some(SnakeCommand::TogglePause)
        );
        assert_eq!(
            command_for_key(egui::Key::Space, Phase::Paused),
            Some(SnakeCommand::TogglePause)
        );
    }

    #[test]
    fn test_enter_only_starts_when_not_playing() {
        assert_eq!(command_for_key(egui::Key::Enter, Phase::Running), None);
        assert_eq!(command_for_key(egui::Key::Enter, Phase::Idle), Some(SnakeCommand::Start));
        assert_eq!(command_for_key(egui::Key::Q, Phase::Idle), None);
    }
}
