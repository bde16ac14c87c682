/// Requests the UI hands to the API worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    /// Re-fetch subscribers and broadcasts, replacing the current collections.
    LoadData,
    /// Broadcast the given text to every active subscriber, exactly as typed.
    SendMessage(String),
}
