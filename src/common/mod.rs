pub mod commands;
pub mod events;
pub mod stats;
pub mod types;

pub use commands::ApiCommand;
pub use events::ApiEvent;
pub use stats::{DeliveryTotals, Stats};
pub use types::{BroadcastMessage, BroadcastStatus, SendMessageRequest, Subscriber};
