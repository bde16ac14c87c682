use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::api::BackendApi;

/// Background worker that executes UI commands against the backend.
///
/// Commands are handled one at a time, so a refresh requested after a send
/// never overtakes it. The loop ends when the UI drops its command sender or
/// stops listening for events.
pub struct ApiClient {
    api: BackendApi,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl ApiClient {
    pub fn new(
        api: BackendApi,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            api,
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("API worker started");

        while let Some(command) = self.command_receiver.recv().await {
            let event = self.handle_command(command).await;
            if self.event_sender.send(event).await.is_err() {
                log::debug!("UI is gone; dropping API result");
                break;
            }
        }

        log::info!("API worker stopped");
    }

    async fn handle_command(&self, command: ApiCommand) -> ApiEvent {
        match command {
            ApiCommand::LoadData => match self.api.load_snapshot().await {
                Ok(snapshot) => {
                    log::info!(
                        "Loaded {} subscribers and {} broadcasts",
                        snapshot.subscribers.len(),
                        snapshot.messages.len()
                    );
                    ApiEvent::DataLoaded {
                        subscribers: snapshot.subscribers,
                        messages: snapshot.messages,
                    }
                }
                Err(err) => {
                    log::error!("Error loading data: {err}");
                    ApiEvent::LoadFailed(err.to_string())
                }
            },
            ApiCommand::SendMessage(text) => match self.api.send_broadcast(&text).await {
                Ok(()) => {
                    log::info!("Broadcast accepted by backend");
                    ApiEvent::MessageSent
                }
                Err(err) => {
                    log::error!("Error sending message: {err}");
                    ApiEvent::SendFailed(err.to_string())
                }
            },
        }
    }
}
