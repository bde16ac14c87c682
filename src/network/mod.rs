pub mod api;
pub mod client;
pub mod transport;

pub use api::{BackendApi, Snapshot};
pub use client::ApiClient;

#[cfg(test)]
pub(crate) mod test_backend;
