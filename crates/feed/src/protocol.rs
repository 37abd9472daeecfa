//! Wire format of the event feed.
//!
//! The feed answers with a GeoJSON-like feature collection:
//!
//! ```json
//! { "features": [ { "id": "...", "properties": {
//!     "mag": 4.2, "lat": 35.1, "lon": 139.7, "depth": 10.0,
//!     "flynn_region": "NEAR EAST COAST OF HONSHU, JAPAN",
//!     "time": "2024-01-01T12:00:00.0Z" } } ] }
//! ```
//!
//! Only `features` is required. Properties that are missing, `null` or of an
//! unexpected type decode to `None` instead of rejecting the response.

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;
use crate::event::SeismicEvent;

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub mag: Option<Value>,
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lon: Option<Value>,
    #[serde(default)]
    pub depth: Option<Value>,
    #[serde(default)]
    pub flynn_region: Option<Value>,
    /// Epoch milliseconds or an ISO 8601 timestamp.
    #[serde(default)]
    pub time: Option<Value>,
    /// Some feed mirrors publish the event id inside `properties`.
    #[serde(default)]
    pub unid: Option<Value>,
}

impl Feature {
    pub fn into_event(self) -> SeismicEvent {
        let p = self.properties;
        SeismicEvent {
            id: self.id.as_ref().and_then(text).or_else(|| p.unid.as_ref().and_then(text)),
            magnitude: p.mag.as_ref().and_then(number),
            latitude: p.lat.as_ref().and_then(number),
            longitude: p.lon.as_ref().and_then(number),
            depth_km: p.depth.as_ref().and_then(number),
            region: p.flynn_region.as_ref().and_then(text),
            timestamp_ms: p.time.as_ref().and_then(timestamp_ms),
        }
    }
}

/// Decodes a feed response body into events, preserving response order.
pub fn decode_events(body: &str) -> Result<Vec<SeismicEvent>, FetchError> {
    let collection: FeatureCollection =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(collection
        .features
        .into_iter()
        .map(Feature::into_event)
        .collect())
}

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn timestamp_ms(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => parse_time_text(s.trim()),
        _ => None,
    }
}

fn parse_time_text(s: &str) -> Option<i64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Some(ms);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    // Zone-less timestamps are UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::decode_events;
    use crate::error::FetchError;
    use crate::event::SeismicEvent;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_features_in_response_order() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                { "id": "a", "properties": {
                    "mag": 5.1, "lat": 35.5, "lon": 139.25, "depth": 10.0,
                    "flynn_region": "NEAR EAST COAST OF HONSHU, JAPAN",
                    "time": "2024-01-01T12:00:00.0Z" } },
                { "id": "b", "properties": {
                    "mag": 2.3, "lat": -12.0, "lon": -77.0, "depth": 55.0,
                    "flynn_region": "NEAR COAST OF PERU",
                    "time": 1704110400000 } }
            ]
        }"#;

        let events = decode_events(body).unwrap();
        assert_eq!(
            events,
            vec![
                SeismicEvent {
                    id: Some("a".into()),
                    magnitude: Some(5.1),
                    latitude: Some(35.5),
                    longitude: Some(139.25),
                    depth_km: Some(10.0),
                    region: Some("NEAR EAST COAST OF HONSHU, JAPAN".into()),
                    timestamp_ms: Some(1_704_110_400_000),
                },
                SeismicEvent {
                    id: Some("b".into()),
                    magnitude: Some(2.3),
                    latitude: Some(-12.0),
                    longitude: Some(-77.0),
                    depth_km: Some(55.0),
                    region: Some("NEAR COAST OF PERU".into()),
                    timestamp_ms: Some(1_704_110_400_000),
                },
            ]
        );
    }

    #[test]
    fn missing_and_malformed_properties_become_none() {
        let body = r#"{ "features": [
            { "properties": { "mag": null, "lat": "12.5", "lon": true } },
            {}
        ] }"#;

        let events = decode_events(body).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            SeismicEvent {
                latitude: Some(12.5),
                ..SeismicEvent::default()
            }
        );
        assert_eq!(events[1], SeismicEvent::default());
    }

    #[test]
    fn zone_less_time_is_utc() {
        let body = r#"{ "features": [ { "properties": { "time": "1970-01-01T00:00:01.5" } } ] }"#;
        let events = decode_events(body).unwrap();
        assert_eq!(events[0].timestamp_ms, Some(1_500));
    }

    #[test]
    fn empty_collection_is_ok() {
        assert!(decode_events(r#"{ "features": [] }"#).unwrap().is_empty());
    }

    #[test]
    fn missing_features_is_a_decode_error() {
        assert!(matches!(decode_events("{}"), Err(FetchError::Decode(_))));
        assert!(matches!(decode_events("<html>"), Err(FetchError::Decode(_))));
    }
}
