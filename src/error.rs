//! Error types for the tracks binding layer.
//!
//! Only producer-side misuse surfaces as an error here. Consumer-side misses
//! (absent value, stale value, wrong requested payload kind, unregistered
//! property id) are expected conditions and surface as `None`, never as an
//! error. Calling an accessor through an unbound store handle is a
//! programming error and panics instead.

use serde::{Deserialize, Serialize};

/// Error type for track and property operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TrackError {
    /// Value kind mismatch on a producer write
    #[error("Value kind mismatch: expected {expected:?}, got {actual:?}")]
    ValueKindMismatch {
        expected: crate::value::ValueKind,
        actual: crate::value::ValueKind,
    },

    /// Invalid value
    #[error("Invalid value: {reason}")]
    InvalidValue { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic track error
    #[error("Track error: {message}")]
    Generic { message: String },
}

impl TrackError {
    /// Create a new generic error
    pub fn new(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ValueKindMismatch { .. } | Self::InvalidValue { .. }
        )
    }

    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::ValueKindMismatch { .. } | Self::InvalidValue { .. } => "validation",
            Self::SerializationError { .. } => "serialization",
            Self::Generic { .. } => "generic",
        }
    }
}

impl From<serde_json::Error> for TrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
