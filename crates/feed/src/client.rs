use tracing::{debug, warn};

use crate::error::FetchError;
use crate::event::SeismicEvent;
use crate::protocol::decode_events;
use crate::request::{DEFAULT_ENDPOINT, FeedQuery};

/// HTTP client for the event feed.
///
/// Every call issues a fresh request; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl FeedClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches up to `query.limit` events of at least `query.min_magnitude`,
    /// newest first.
    pub async fn fetch(&self, query: &FeedQuery) -> Result<Vec<SeismicEvent>, FetchError> {
        let url = query.url(&self.endpoint);
        debug!(%url, "fetching events");

        let resp = self.http.get(&url).send().await.map_err(|e| {
            warn!(%url, error = %e, "feed request failed");
            FetchError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "feed returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let events = decode_events(&body)?;
        debug!(count = events.len(), "decoded events");
        Ok(events)
    }
}
