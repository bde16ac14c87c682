use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::common::{BroadcastMessage, SendMessageRequest, Subscriber};
use crate::error::ApiError;

const SUBSCRIBERS_PATH: &str = "/api/subscribers";
const MESSAGES_PATH: &str = "/api/messages";
const SEND_MESSAGE_PATH: &str = "/api/send-message";

/// Both collections from one load. Either both arrive or neither is used.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub subscribers: Vec<Subscriber>,
    pub messages: Vec<BroadcastMessage>,
}

/// The three backend endpoints the dashboard consumes.
#[derive(Debug, Clone)]
pub struct BackendApi {
    http: Client,
    base_url: String,
}

impl BackendApi {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ApiError> {
        log::debug!("GET {endpoint}");
        let response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { endpoint, source })
    }

    pub async fn fetch_subscribers(&self) -> Result<Vec<Subscriber>, ApiError> {
        self.get_json(SUBSCRIBERS_PATH).await
    }

    pub async fn fetch_messages(&self) -> Result<Vec<BroadcastMessage>, ApiError> {
        self.get_json(MESSAGES_PATH).await
    }

    /// Issues both reads concurrently and fails if either one does.
    pub async fn load_snapshot(&self) -> Result<Snapshot, ApiError> {
        let (subscribers, messages) =
            futures::future::try_join(self.fetch_subscribers(), self.fetch_messages()).await?;

        Ok(Snapshot {
            subscribers,
            messages,
        })
    }

    /// Posts a broadcast. Only the response status is inspected.
    pub async fn send_broadcast(&self, text: &str) -> Result<(), ApiError> {
        let endpoint = SEND_MESSAGE_PATH;
        log::debug!("POST {endpoint} ({} chars)", text.chars().count());

        let body = SendMessageRequest {
            message: text.to_string(),
        };
        let response = self
            .http
            .post(self.url(endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status { endpoint, status })
        }
    }
}
