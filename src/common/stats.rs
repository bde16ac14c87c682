use super::types::{BroadcastMessage, Subscriber};

/// Summary counts shown on the dashboard cards. Recomputed on every load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_subscribers: usize,
    pub active_subscribers: usize,
    pub total_messages: usize,
    pub sent_messages: usize,
}

impl Stats {
    pub fn derive(subscribers: &[Subscriber], messages: &[BroadcastMessage]) -> Self {
        Self {
            total_subscribers: subscribers.len(),
            active_subscribers: subscribers.iter().filter(|s| s.is_active).count(),
            total_messages: messages.len(),
            sent_messages: messages.iter().filter(|m| m.is_sent()).count(),
        }
    }
}

/// Delivery outcomes summed over every broadcast, whatever its status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryTotals {
    pub successful: u64,
    pub failed: u64,
}

impl DeliveryTotals {
    pub fn derive(messages: &[BroadcastMessage]) -> Self {
        messages.iter().fold(Self::default(), |acc, message| Self {
            successful: acc.successful.saturating_add(message.successful_sends),
            failed: acc.failed.saturating_add(message.failed_sends),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{message, subscriber};
    use super::*;
    use crate::common::BroadcastStatus;

    #[test]
    fn derives_counts_for_reference_scenario() {
        let subscribers = vec![subscriber(1, true), subscriber(2, false)];
        let messages = vec![message(1, BroadcastStatus::Sent, 5, 1)];

        let stats = Stats::derive(&subscribers, &messages);
        assert_eq!(
            stats,
            Stats {
                total_subscribers: 2,
                active_subscribers: 1,
                total_messages: 1,
                sent_messages: 1,
            }
        );

        let totals = DeliveryTotals::derive(&messages);
        assert_eq!(totals.successful, 5);
        assert_eq!(totals.failed, 1);
    }

    #[test]
    fn totals_include_non_sent_messages() {
        let mut draft = message(2, BroadcastStatus::Draft, 0, 0);
        draft.successful_sends = 3;
        draft.failed_sends = 2;
        let messages = vec![message(1, BroadcastStatus::Sent, 10, 0), draft];

        let stats = Stats::derive(&[], &messages);
        assert_eq!(stats.total_messages, 2);
        assert_eq!(stats.sent_messages, 1);
        assert_eq!(
            DeliveryTotals::derive(&messages),
            DeliveryTotals {
                successful: 13,
                failed: 2,
            }
        );
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut huge = message(1, BroadcastStatus::Sent, 0, 0);
        huge.successful_sends = u64::MAX;
        huge.failed_sends = u64::MAX - 1;
        let messages = vec![huge, message(2, BroadcastStatus::Sent, 7, 7)];
        assert_eq!(
            DeliveryTotals::derive(&messages),
            DeliveryTotals {
                successful: u64::MAX,
                failed: u64::MAX,
            }
        );
    }

    #[test]
    fn empty_collections_give_zeroes() {
        assert_eq!(Stats::derive(&[], &[]), Stats::default());
        assert_eq!(DeliveryTotals::derive(&[]), DeliveryTotals::default());
    }
}
