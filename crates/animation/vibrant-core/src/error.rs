//! Error types for the engine-agnostic core.

use thiserror::Error;

/// Errors raised while building a tween request.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TweenError {
    /// Curve formulas divide by the duration; zero or negative is rejected up front.
    #[error("tween duration must be positive and finite, got {duration}")]
    NonPositiveDuration { duration: f64 },

    #[error("tween delay must be non-negative and finite, got {delay}")]
    InvalidDelay { delay: f64 },

    #[error("unknown easing curve '{name}'")]
    UnknownEase { name: String },
}

/// Hex color strings that do not parse as `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{input}'")]
pub struct ColorParseError {
    pub input: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_value() {
        let err = TweenError::NonPositiveDuration { duration: -1.0 };
        assert_eq!(
            err.to_string(),
            "tween duration must be positive and finite, got -1"
        );

        let err = TweenError::UnknownEase {
            name: "wobble".into(),
        };
        assert_eq!(err.to_string(), "unknown easing curve 'wobble'");
    }
}
