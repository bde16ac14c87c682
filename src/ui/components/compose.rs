use eframe::egui;

use crate::ui::state::AppState;
use crate::ui::text::Labels;

use super::section_header;

/// Returns `true` when the operator pressed the submit button.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, labels: &Labels) -> bool {
    section_header(ui, labels.compose_title, labels.compose_description);

    ui.add(
        egui::TextEdit::multiline(&mut state.compose_text)
            .hint_text(labels.compose_hint)
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );
    ui.label(
        egui::RichText::new(format!(
            "{}: {}",
            labels.recipients, state.stats.active_subscribers
        ))
        .weak(),
    );
    ui.add_space(8.0);

    if state.is_busy() {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            let button_size = egui::vec2(ui.available_width(), 36.0);
            ui.add_enabled(false, egui::Button::new(labels.sending).min_size(button_size));
        });
        return false;
    }

    let button_size = egui::vec2(ui.available_width(), 36.0);
    ui.add_enabled(
        state.can_send(),
        egui::Button::new(format!("➤ {}", labels.send_button)).min_size(button_size),
    )
    .clicked()
}
