use eframe::egui;

use crate::common::{DeliveryTotals, Stats};
use crate::ui::text::Labels;

use super::{ERROR_COLOR, SUCCESS_COLOR};

pub fn render(ui: &mut egui::Ui, stats: &Stats, totals: &DeliveryTotals, labels: &Labels) {
    ui.columns(4, |columns| {
        card(
            &mut columns[0],
            labels.total_subscribers,
            stats.total_subscribers as u64,
            egui::RichText::new(format!("{}: {}", labels.active_count, stats.active_subscribers))
                .weak(),
        );
        card(
            &mut columns[1],
            labels.total_broadcasts,
            stats.total_messages as u64,
            egui::RichText::new(format!("{}: {}", labels.sent_count, stats.sent_messages)).weak(),
        );
        card(
            &mut columns[2],
            labels.delivered_title,
            totals.successful,
            egui::RichText::new(format!("✔ {}", labels.delivered_caption)).color(SUCCESS_COLOR),
        );
        card(
            &mut columns[3],
            labels.failed_title,
            totals.failed,
            egui::RichText::new(format!("✖ {}", labels.failed_caption)).color(ERROR_COLOR),
        );
    });
}

fn card(ui: &mut egui::Ui, title: &str, value: u64, caption: egui::RichText) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).weak());
        ui.label(egui::RichText::new(value.to_string()).size(28.0).strong());
        ui.label(caption);
    });
}
