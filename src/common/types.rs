use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a missing or `null` value as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A bot end-user as reported by `GET /api/subscribers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: i64,
    pub telegram_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default)]
    pub subscribed_at: Option<String>,
}

impl Subscriber {
    /// First and last name joined by a space, skipping missing parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lifecycle status of a broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastStatus {
    Draft,
    Sent,
    /// Any status string the dashboard does not know. Rendered like a draft.
    #[serde(other)]
    Other,
}

/// A broadcast record as reported by `GET /api/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    pub id: i64,
    pub message_text: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    pub status: BroadcastStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_recipients: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub successful_sends: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub failed_sends: u64,
}

impl BroadcastMessage {
    pub fn is_sent(&self) -> bool {
        self.status == BroadcastStatus::Sent
    }
}

/// Body of `POST /api/send-message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_subscriber_with_nulls() {
        let raw = r#"[
            {"id": 1, "telegram_id": 1001, "username": "alice", "first_name": "Alice",
             "last_name": "Smith", "is_active": true, "subscribed_at": "2024-03-01T09:15:00"},
            {"id": 2, "telegram_id": 1002, "username": null, "first_name": "Bob",
             "last_name": null, "is_active": false, "subscribed_at": null}
        ]"#;

        let subscribers: Vec<Subscriber> = serde_json::from_str(raw).unwrap();
        assert_eq!(subscribers.len(), 2);
        assert_eq!(subscribers[0].full_name(), "Alice Smith");
        assert_eq!(subscribers[1].username, None);
        assert_eq!(subscribers[1].full_name(), "Bob");
        assert!(subscribers[1].subscribed_at.is_none());
    }

    #[test]
    fn decodes_message_statuses() {
        let raw = r#"[
            {"id": 3, "message_text": "hello", "created_at": "2024-03-01T10:00:00",
             "sent_at": "2024-03-01T10:00:05", "status": "sent", "total_recipients": 4,
             "successful_sends": 4, "failed_sends": 0},
            {"id": 2, "message_text": "later", "created_at": "2024-02-01T10:00:00",
             "sent_at": null, "status": "draft", "total_recipients": 0,
             "successful_sends": 0, "failed_sends": 0},
            {"id": 1, "message_text": "odd", "created_at": null, "sent_at": null,
             "status": "queued", "total_recipients": 0, "successful_sends": 0,
             "failed_sends": 0}
        ]"#;

        let messages: Vec<BroadcastMessage> = serde_json::from_str(raw).unwrap();
        assert_eq!(messages[0].status, BroadcastStatus::Sent);
        assert!(messages[0].is_sent());
        assert_eq!(messages[1].status, BroadcastStatus::Draft);
        assert_eq!(messages[2].status, BroadcastStatus::Other);
        assert!(!messages[2].is_sent());
    }

    #[test]
    fn null_counts_and_flags_decode_as_zero_and_false() {
        let messages: Vec<BroadcastMessage> = serde_json::from_str(
            r#"[
            {"id": 2, "message_text": "done", "sent_at": "2024-03-01T10:00:05",
             "status": "sent", "total_recipients": 3, "successful_sends": 3, "failed_sends": 0},
            {"id": 1, "message_text": "wip", "sent_at": null, "status": "draft",
             "total_recipients": null, "successful_sends": null, "failed_sends": null}
        ]"#,
        )
        .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].total_recipients, 0);
        assert_eq!(messages[1].successful_sends, 0);
        assert_eq!(messages[1].failed_sends, 0);

        let subscribers: Vec<Subscriber> = serde_json::from_str(
            r#"[{"id": 5, "telegram_id": 55, "is_active": null},
                {"id": 6, "telegram_id": 66}]"#,
        )
        .unwrap();
        assert!(!subscribers[0].is_active);
        assert!(!subscribers[1].is_active);
    }

    #[test]
    fn send_request_serializes_message_field() {
        let body = SendMessageRequest {
            message: "  hi there ".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"message":"  hi there "}"#
        );
    }
}
