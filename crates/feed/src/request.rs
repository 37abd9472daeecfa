use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Public EMSC FDSN event service.
pub const DEFAULT_ENDPOINT: &str = "https://www.seismicportal.eu/fdsnws/event/1/query";

/// Parameters of one feed request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedQuery {
    /// Maximum number of events, newest first.
    pub limit: NonZeroU32,
    /// Inclusive lower bound on magnitude.
    pub min_magnitude: f64,
}

impl FeedQuery {
    pub fn new(limit: NonZeroU32, min_magnitude: f64) -> Self {
        Self {
            limit,
            min_magnitude,
        }
    }

    /// Full request URL against `endpoint`.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}?orderby=time&limit={}&format=json&minmag={}",
            endpoint.trim_end_matches('?'),
            self.limit,
            self.min_magnitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ENDPOINT, FeedQuery};
    use std::num::NonZeroU32;

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn url_carries_all_parameters() {
        let q = FeedQuery::new(limit(20), 2.5);
        assert_eq!(
            q.url(DEFAULT_ENDPOINT),
            format!("{DEFAULT_ENDPOINT}?orderby=time&limit=20&format=json&minmag=2.5")
        );
        assert_eq!(DEFAULT_ENDPOINT, "https://www.seismicportal.eu/fdsnws/event/1/query");
    }

    #[test]
    fn whole_magnitudes_print_without_fraction() {
        let q = FeedQuery::new(limit(1), 4.0);
        assert!(q.url("http://localhost/q").ends_with("limit=1&format=json&minmag=4"));
    }
}
