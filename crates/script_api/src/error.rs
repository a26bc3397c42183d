//! Errors reported back to the calling script

use std::fmt;

use thiserror::Error;

/// Kind of host resource a script referred to by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Sound asset
    Sound,
    /// Image asset
    Image,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sound => f.write_str("sound"),
            Self::Image => f.write_str("image"),
        }
    }
}

/// Script API errors
///
/// Raised synchronously, before anything is recorded or forwarded to the host.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Wrong type, non-finite number or out-of-range value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed message name
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Sound or image id unknown to the host
    #[error("Missing {kind}: {id}")]
    MissingResource {
        /// Resource category
        kind: ResourceKind,
        /// Id the script passed
        id: String,
    },

    /// Message argument could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Shorthand for [`ApiError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for [`ApiError::MissingResource`]
    pub fn missing(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::MissingResource { kind, id: id.into() }
    }
}

/// Result type used by every script-facing operation
pub type ApiResult<T> = Result<T, ApiError>;

/// Reject NaN and infinities
pub(crate) fn ensure_finite(name: &str, value: f32) -> ApiResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::invalid(format!("{name} must be a finite number, got {value}")))
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn ensure_non_negative(name: &str, value: f32) -> ApiResult<f32> {
    let value = ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(ApiError::invalid(format!("{name} must not be negative, got {value}")));
    }
    Ok(value)
}
