//! Runtime configuration shared by the core and its adapters.

use crate::error::ConfigError;
use crate::geometry::DEFAULT_HIT_EPSILON;
use serde::{Deserialize, Serialize};

/// Viewport, pacing and hit-test tuning. Every field has a default, so a
/// partial JSON document is enough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial viewport `[width, height]` the layout boundaries pin to.
    pub viewport: [f64; 2],
    /// Minimum milliseconds between accepted frames for `FramePacer`.
    pub min_frame_interval_ms: u64,
    /// Relative tolerance for the rectangle hit test.
    pub hit_epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: [1280.0, 720.0],
            min_frame_interval_ms: 5,
            hit_epsilon: DEFAULT_HIT_EPSILON,
        }
    }
}

impl Config {
    /// Parse and validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let [w, h] = self.viewport;
        if !(w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0) {
            return Err(ConfigError::invalid(format!(
                "viewport must be finite and non-negative, got {w}x{h}"
            )));
        }
        if !(self.hit_epsilon.is_finite() && self.hit_epsilon >= 0.0) {
            return Err(ConfigError::invalid(format!(
                "hit_epsilon must be finite and non-negative, got {}",
                self.hit_epsilon
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config = Config::from_json(r#"{ "viewport": [800, 600] }"#).unwrap();
        assert_eq!(config.viewport, [800.0, 600.0]);
        assert_eq!(config.min_frame_interval_ms, 5);
    }

    #[test]
    fn rejects_negative_viewport() {
        let err = Config::from_json(r#"{ "viewport": [-1, 600] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
