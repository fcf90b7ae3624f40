use thiserror::Error;

/// Failure modes shared by the token and secret fetches.
///
/// Transport failures (connection refused, timeout, TLS) surface as
/// `Network`; a body that is not JSON or lacks the expected field surfaces
/// as `Decode`. Neither is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
