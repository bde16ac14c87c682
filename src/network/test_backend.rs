//! In-process stand-in for the bot backend used by the network tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

pub struct Shared {
    subscribers: Value,
    messages: Mutex<Vec<Value>>,
    send_status: StatusCode,
    pub subscriber_hits: AtomicUsize,
    pub message_hits: AtomicUsize,
    pub send_hits: AtomicUsize,
    pub sent_bodies: Mutex<Vec<Value>>,
}

impl Shared {
    pub fn subscriber_hits(&self) -> usize {
        self.subscriber_hits.load(Ordering::SeqCst)
    }

    pub fn message_hits(&self) -> usize {
        self.message_hits.load(Ordering::SeqCst)
    }

    pub fn send_hits(&self) -> usize {
        self.send_hits.load(Ordering::SeqCst)
    }
}

pub struct TestBackend {
    pub base_url: String,
    pub shared: Arc<Shared>,
}

/// Serves `subscribers` and `messages` verbatim. A send answered with a
/// success status records a new sent broadcast, like the real backend.
pub async fn spawn(subscribers: Value, messages: Value, send_status: StatusCode) -> TestBackend {
    let messages = match messages {
        Value::Array(items) => items,
        other => vec![other],
    };
    let shared = Arc::new(Shared {
        subscribers,
        messages: Mutex::new(messages),
        send_status,
        subscriber_hits: AtomicUsize::new(0),
        message_hits: AtomicUsize::new(0),
        send_hits: AtomicUsize::new(0),
        sent_bodies: Mutex::new(Vec::new()),
    });

    let router = Router::new()
        .route("/api/subscribers", get(list_subscribers))
        .route("/api/messages", get(list_messages))
        .route("/api/send-message", post(send_message))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestBackend {
        base_url: format!("http://{addr}"),
        shared,
    }
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn list_subscribers(State(shared): State<Arc<Shared>>) -> Json<Value> {
    shared.subscriber_hits.fetch_add(1, Ordering::SeqCst);
    Json(shared.subscribers.clone())
}

async fn list_messages(State(shared): State<Arc<Shared>>) -> Json<Value> {
    shared.message_hits.fetch_add(1, Ordering::SeqCst);
    Json(Value::Array(shared.messages.lock().unwrap().clone()))
}

async fn send_message(
    State(shared): State<Arc<Shared>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    shared.send_hits.fetch_add(1, Ordering::SeqCst);
    shared.sent_bodies.lock().unwrap().push(body.clone());

    if !shared.send_status.is_success() {
        return (shared.send_status, Json(json!({"error": "rejected"})));
    }

    let mut messages = shared.messages.lock().unwrap();
    let id = messages.len() as i64 + 1;
    messages.insert(
        0,
        json!({
            "id": id,
            "message_text": body["message"],
            "created_at": "2024-03-02T08:00:00",
            "sent_at": "2024-03-02T08:00:00",
            "status": "sent",
            "total_recipients": 1,
            "successful_sends": 1,
            "failed_sends": 0
        }),
    );

    (
        shared.send_status,
        Json(json!({"success": true, "message_id": id, "recipients": 1})),
    )
}
