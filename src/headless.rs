//! Command line modes that talk to the backend without opening a window.

use crate::common::{ApiCommand, DeliveryTotals, Stats};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::network::{BackendApi, Snapshot};
use crate::ui::state::AppState;

/// Loads once and prints the dashboard figures.
pub async fn run_stats(api: &BackendApi) -> Result<Snapshot, AppError> {
    let snapshot = api.load_snapshot().await?;
    print_summary(&snapshot);
    Ok(snapshot)
}

/// Broadcasts `text`, then reloads and prints the figures.
///
/// Blank text is rejected before any request is made.
pub async fn run_send(
    api: &BackendApi,
    app_config: &AppConfig,
    text: String,
) -> Result<Snapshot, AppError> {
    // Same validation path as the compose panel.
    let mut state = AppState::new(app_config.notification_ttl());
    state.compose_text = text;
    let Some(ApiCommand::SendMessage(text)) = state.request_send() else {
        return Err(AppError::EmptyMessage);
    };

    api.send_broadcast(&text).await?;
    println!("{}", app_config.locale.labels().notice_send_succeeded);
    run_stats(api).await
}

fn print_summary(snapshot: &Snapshot) {
    let stats = Stats::derive(&snapshot.subscribers, &snapshot.messages);
    let totals = DeliveryTotals::derive(&snapshot.messages);

    println!("subscribers:        {}", stats.total_subscribers);
    println!("active subscribers: {}", stats.active_subscribers);
    println!("broadcasts:         {}", stats.total_messages);
    println!("sent broadcasts:    {}", stats.sent_messages);
    println!("delivered:          {}", totals.successful);
    println!("failed deliveries:  {}", totals.failed);
}
