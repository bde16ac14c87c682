use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::common::{ApiCommand, ApiEvent, BroadcastMessage, DeliveryTotals, Stats, Subscriber};

/// Upper bound on queued notifications.
const NOTIFICATIONS_CAP: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Broadcast,
    History,
    Subscribers,
}

/// What the dashboard is waiting for, if anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activity {
    #[default]
    Idle,
    Loading,
    Sending,
}

/// Conditions the operator is told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyMessage,
    LoadFailed,
    SendSucceeded,
    SendFailed,
}

impl Notice {
    pub fn is_error(self) -> bool {
        !matches!(self, Notice::SendSucceeded)
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub notice: Notice,
    pub raised_at: Instant,
}

/// Session state of the dashboard. All transitions go through the methods
/// below; the returned commands are what the caller must hand to the worker.
pub struct AppState {
    pub subscribers: Vec<Subscriber>,
    pub messages: Vec<BroadcastMessage>,
    pub stats: Stats,
    pub totals: DeliveryTotals,
    pub compose_text: String,
    pub tab: Tab,
    activity: Activity,
    notifications: VecDeque<Notification>,
    notification_ttl: Duration,
}

impl AppState {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            subscribers: Vec::new(),
            messages: Vec::new(),
            stats: Stats::default(),
            totals: DeliveryTotals::default(),
            compose_text: String::new(),
            tab: Tab::default(),
            activity: Activity::Idle,
            notifications: VecDeque::new(),
            notification_ttl,
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_busy(&self) -> bool {
        self.activity() != Activity::Idle
    }

    /// Whether the submit control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.is_busy() && !self.compose_text.trim().is_empty()
    }

    pub fn request_load(&mut self) -> ApiCommand {
        self.activity = Activity::Loading;
        ApiCommand::LoadData
    }

    /// Validates the compose text and, if acceptable, enters `Sending`.
    ///
    /// Returns `None` without touching the network when the text is blank
    /// or another request is still in flight.
    pub fn request_send(&mut self) -> Option<ApiCommand> {
        if self.compose_text.trim().is_empty() {
            self.notify(Notice::EmptyMessage);
            return None;
        }
        if self.is_busy() {
            log::debug!("Ignoring send while {:?}", self.activity);
            return None;
        }

        self.activity = Activity::Sending;
        Some(ApiCommand::SendMessage(self.compose_text.clone()))
    }

    /// Applies a worker result. May return a follow-up command.
    pub fn apply_event(&mut self, event: ApiEvent) -> Option<ApiCommand> {
        match event {
            ApiEvent::DataLoaded {
                subscribers,
                messages,
            } => {
                self.stats = Stats::derive(&subscribers, &messages);
                self.totals = DeliveryTotals::derive(&messages);
                self.subscribers = subscribers;
                self.messages = messages;
                self.activity = Activity::Idle;
                None
            }
            ApiEvent::LoadFailed(reason) => {
                log::debug!("Load failed: {reason}");
                self.notify(Notice::LoadFailed);
                self.activity = Activity::Idle;
                None
            }
            ApiEvent::MessageSent => {
                self.notify(Notice::SendSucceeded);
                self.compose_text.clear();
                Some(self.request_load())
            }
            ApiEvent::SendFailed(reason) => {
                log::debug!("Send failed: {reason}");
                self.notify(Notice::SendFailed);
                self.activity = Activity::Idle;
                None
            }
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notifications.push_back(Notification {
            notice,
            raised_at: Instant::now(),
        });
        while self.notifications.len() > NOTIFICATIONS_CAP {
            self.notifications.pop_front();
        }
    }

    /// Drops notifications older than the configured lifetime.
    pub fn expire_notifications(&mut self, now: Instant) {
        let ttl = self.notification_ttl;
        self.notifications
            .retain(|n| now.saturating_duration_since(n.raised_at) < ttl);
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }
}
