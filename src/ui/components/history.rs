use eframe::egui;

use crate::common::BroadcastMessage;
use crate::ui::format::format_timestamp;
use crate::ui::text::Labels;

use super::{ERROR_COLOR, SUCCESS_COLOR, badge, section_header};

pub fn render(ui: &mut egui::Ui, messages: &[BroadcastMessage], labels: &Labels) {
    section_header(ui, labels.history_title, labels.history_description);

    if messages.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(labels.no_messages).weak());
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for message in messages {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                entry(ui, message, labels);
            });
            ui.add_space(6.0);
        }
    });
}

fn entry(ui: &mut egui::Ui, message: &BroadcastMessage, labels: &Labels) {
    ui.horizontal(|ui| {
        if message.is_sent() {
            badge(ui, labels.status_sent, true);
        } else {
            badge(ui, labels.status_draft, false);
        }
        if let Some(sent_at) = &message.sent_at {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(format_timestamp(sent_at)).weak());
            });
        }
    });

    // Two lines at most, like a preview.
    let mut job = egui::text::LayoutJob::single_section(
        message.message_text.clone(),
        egui::TextFormat::default(),
    );
    job.wrap.max_width = ui.available_width();
    job.wrap.max_rows = 2;
    ui.label(job);

    if message.is_sent() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("👥 {}", message.total_recipients)).small());
            ui.label(
                egui::RichText::new(format!("✔ {}", message.successful_sends))
                    .small()
                    .color(SUCCESS_COLOR),
            );
            if message.failed_sends > 0 {
                ui.label(
                    egui::RichText::new(format!("✖ {}", message.failed_sends))
                        .small()
                        .color(ERROR_COLOR),
                );
            }
        });
    }
}
