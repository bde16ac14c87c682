use std::time::{Duration, Instant};

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::components::{compose, history, notifications, stat_cards, subscribers};
use super::state::{AppState, Tab};
use super::text::Labels;

/// Polling interval for worker results and notification expiry.
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct DashboardApp {
    state: AppState,
    labels: &'static Labels,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl DashboardApp {
    /// Builds the app and issues the initial load.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        state: AppState,
        labels: &'static Labels,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        let mut app = Self {
            state,
            labels,
            command_sender,
            event_receiver,
        };
        let command = app.state.request_load();
        app.dispatch(command);
        app
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            if let Some(command) = self.state.apply_event(event) {
                self.dispatch(command);
            }
        }
    }

    fn dispatch(&mut self, command: ApiCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to API worker: {err}");
            // Nothing will answer this command, so settle it here.
            let reason = err.to_string();
            let event = match err.into_inner() {
                ApiCommand::LoadData => ApiEvent::LoadFailed(reason),
                ApiCommand::SendMessage(_) => ApiEvent::SendFailed(reason),
            };
            self.state.apply_event(event);
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!("➤ {}", self.labels.app_title));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.state.is_busy(), egui::Button::new(self.labels.refresh))
                    .clicked()
                {
                    let command = self.state.request_load();
                    self.dispatch(command);
                }
                if self.state.is_busy() {
                    ui.add(egui::Spinner::new());
                }
            });
        });
        ui.label(egui::RichText::new(self.labels.app_subtitle).weak());
    }

    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        let labels = self.labels;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.state.tab, Tab::Broadcast, labels.tab_broadcast);
            ui.selectable_value(&mut self.state.tab, Tab::History, labels.tab_history);
            ui.selectable_value(&mut self.state.tab, Tab::Subscribers, labels.tab_subscribers);
        });
        ui.separator();

        match self.state.tab {
            Tab::Broadcast => {
                if compose::render(ui, &mut self.state, labels) {
                    if let Some(command) = self.state.request_send() {
                        self.dispatch(command);
                    }
                }
            }
            Tab::History => history::render(ui, &self.state.messages, labels),
            Tab::Subscribers => subscribers::render(ui, &self.state.subscribers, labels),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();
        self.state.expire_notifications(Instant::now());

        egui::TopBottomPanel::bottom("notifications")
            .show_separator_line(false)
            .show(ctx, |ui| {
                notifications::render(ui, &self.state, self.labels);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.add_space(12.0);
            stat_cards::render(ui, &self.state.stats, &self.state.totals, self.labels);
            ui.add_space(12.0);
            self.render_tabs(ui);
        });

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
