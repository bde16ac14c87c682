use eframe::egui;

use crate::common::Subscriber;
use crate::ui::format::format_timestamp;
use crate::ui::text::Labels;

use super::{badge, section_header};

pub fn render(ui: &mut egui::Ui, subscribers: &[Subscriber], labels: &Labels) {
    section_header(ui, labels.subscribers_title, labels.subscribers_description);

    if subscribers.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(labels.no_subscribers).weak());
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for subscriber in subscribers {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(subscriber.full_name()).strong());
                        let handle = subscriber.username.as_deref().unwrap_or_default();
                        ui.label(egui::RichText::new(format!("@{handle}")).weak());
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(subscribed_at) = &subscriber.subscribed_at {
                            ui.label(
                                egui::RichText::new(format_timestamp(subscribed_at))
                                    .small()
                                    .weak(),
                            );
                        }
                        if subscriber.is_active {
                            badge(ui, labels.active, true);
                        } else {
                            badge(ui, labels.inactive, false);
                        }
                    });
                });
            });
            ui.add_space(4.0);
        }
    });
}
