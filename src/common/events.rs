use super::types::{BroadcastMessage, Subscriber};

/// Results the API worker reports back to the UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    DataLoaded {
        subscribers: Vec<Subscriber>,
        messages: Vec<BroadcastMessage>,
    },
    LoadFailed(String),
    MessageSent,
    SendFailed(String),
}
