use common::games::snake::Rgba;
use eframe::egui;

pub fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Translucent halo color used behind glowing cells.
pub fn glow_color(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, 60)
}

pub const PANEL_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 220, 240);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 255, 136);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 71, 87);
pub const OPERATOR_KEY: egui::Color32 = egui::Color32::from_rgb(255, 159, 67);
pub const FUNCTION_KEY: egui::Color32 = egui::Color32::from_rgb(90, 90, 120);
pub const DIGIT_KEY: egui::Color32 = egui::Color32::from_rgb(50, 50, 75);
