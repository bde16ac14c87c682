use eframe::egui;

use crate::ui::state::{AppState, Notice};
use crate::ui::text::Labels;

use super::{ERROR_COLOR, SUCCESS_COLOR};

fn text(notice: Notice, labels: &Labels) -> &'static str {
    match notice {
        Notice::EmptyMessage => labels.notice_empty_message,
        Notice::LoadFailed => labels.notice_load_failed,
        Notice::SendSucceeded => labels.notice_send_succeeded,
        Notice::SendFailed => labels.notice_send_failed,
    }
}

pub fn render(ui: &mut egui::Ui, state: &AppState, labels: &Labels) {
    for notification in state.notifications() {
        let color = if notification.notice.is_error() {
            ERROR_COLOR
        } else {
            SUCCESS_COLOR
        };
        ui.colored_label(color, text(notification.notice, labels));
    }
}
