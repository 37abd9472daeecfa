use thiserror::Error;

/// Why a feed request produced no events.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("feed returned HTTP {status}")]
    Status { status: u16 },
    /// The body was not a feature collection.
    #[error("could not decode feed response: {0}")]
    Decode(String),
}
