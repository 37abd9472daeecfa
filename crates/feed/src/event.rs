use serde::{Deserialize, Serialize};

/// One earthquake as reported by the feed.
///
/// Every field is optional: the upstream payload is not schema-checked, and
/// a missing value renders as blank text rather than failing the whole
/// response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeismicEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub magnitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub depth_km: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    /// Origin time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
}

impl SeismicEvent {
    /// `(latitude, longitude)` when both are present and finite.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}
