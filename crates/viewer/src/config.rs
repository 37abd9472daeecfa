use serde::{Deserialize, Serialize};
use thiserror::Error;

use feed::DEFAULT_ENDPOINT;
use layers::symbology::MarkerStyle;
use scene::camera::OrbitCamera;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid viewer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid viewer config: {0}")]
    Invalid(String),
}

/// Orbit camera tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_y_deg: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub rotate_speed: f64,
    pub zoom_speed: f64,
    pub damping: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let cam = OrbitCamera::default();
        Self {
            fov_y_deg: cam.fov_y_deg,
            min_distance: cam.min_distance,
            max_distance: cam.max_distance,
            rotate_speed: cam.rotate_speed,
            zoom_speed: cam.zoom_speed,
            damping: cam.damping,
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> OrbitCamera {
        let mut cam = OrbitCamera::default();
        cam.fov_y_deg = self.fov_y_deg;
        cam.min_distance = self.min_distance;
        cam.max_distance = self.max_distance;
        cam.rotate_speed = self.rotate_speed;
        cam.zoom_speed = self.zoom_speed;
        cam.damping = self.damping;
        cam
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Event feed query endpoint.
    pub endpoint: String,
    /// Limit used for the initial load and for an empty limit field.
    pub default_limit: u32,
    /// Minimum magnitude used for the initial load and for an empty field.
    pub default_min_magnitude: f64,
    pub camera: CameraConfig,
    /// Marker sphere radius in globe units.
    pub marker_radius: f64,
    /// Scale applied to markers under the pointer.
    pub hover_scale: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let style = MarkerStyle::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_limit: 20,
            default_min_magnitude: 2.5,
            camera: CameraConfig::default(),
            marker_radius: style.radius,
            hover_scale: style.hover_scale,
        }
    }
}

impl ViewerConfig {
    /// Parses a JSON config; absent keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: ViewerConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::Invalid("default_limit must be at least 1".into()));
        }
        let cam = &self.camera;
        if !(cam.min_distance > 0.0 && cam.min_distance <= cam.max_distance) {
            return Err(ConfigError::Invalid(format!(
                "camera distance range [{}, {}] is empty",
                cam.min_distance, cam.max_distance
            )));
        }
        if !(self.marker_radius > 0.0 && self.hover_scale > 0.0) {
            return Err(ConfigError::Invalid(
                "marker_radius and hover_scale must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle::new(self.marker_radius, self.hover_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ViewerConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_round_trip_through_json() {
        let cfg = ViewerConfig::default();
        let text = cfg.to_json().unwrap();
        assert_eq!(ViewerConfig::from_json(&text).unwrap(), cfg);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let text = r#"{ "default_limit": 50, "camera": { "fov_y_deg": 60 } }"#;
        let cfg = ViewerConfig::from_json(text).unwrap();
        assert_eq!(cfg.default_limit, 50);
        assert_eq!(cfg.camera.fov_y_deg, 60.0);
        assert_eq!(cfg.camera.max_distance, 3.0);
        assert_eq!(cfg.endpoint, ViewerConfig::default().endpoint);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            ViewerConfig::from_json(r#"{ "default_limit": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ViewerConfig::from_json(r#"{ "camera": { "min_distance": 4 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ViewerConfig::from_json("[1, 2]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn camera_config_builds_camera() {
        let cam = ViewerConfig::default().camera.build();
        assert_eq!(cam.min_distance, 1.2);
        assert_eq!(cam.max_distance, 3.0);
        assert_eq!(cam.rotate_speed, 0.3);
        assert_eq!(cam.zoom_speed, 0.2);
        assert_eq!(cam.fov_y_deg, 70.0);
    }
}
