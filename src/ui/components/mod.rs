pub mod compose;
pub mod history;
pub mod notifications;
pub mod stat_cards;
pub mod subscribers;

use eframe::egui;

pub const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
const MUTED_BADGE_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
const PRIMARY_BADGE_COLOR: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

/// Small filled label; `primary` picks the accent colour, otherwise muted.
pub fn badge(ui: &mut egui::Ui, text: &str, primary: bool) {
    let fill = if primary {
        PRIMARY_BADGE_COLOR
    } else {
        MUTED_BADGE_COLOR
    };
    ui.label(
        egui::RichText::new(format!(" {text} "))
            .small()
            .color(egui::Color32::WHITE)
            .background_color(fill),
    );
}

/// Heading plus weak description, used at the top of each tab.
pub fn section_header(ui: &mut egui::Ui, title: &str, description: &str) {
    ui.heading(title);
    ui.label(egui::RichText::new(description).weak());
    ui.add_space(8.0);
}
