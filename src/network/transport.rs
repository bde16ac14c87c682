use reqwest::Client;

use crate::config::AppConfig;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client(config: &AppConfig) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
