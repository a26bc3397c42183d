//! Message-name validation
//!
//! Click messages are dispatched to a handler by name, so names follow the
//! usual identifier rule: a letter or underscore, then letters, digits or
//! underscores.

use crate::error::{ApiError, ApiResult};

/// Whether `name` is a valid message identifier
pub fn is_valid_message_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Fail with [`ApiError::InvalidIdentifier`] unless `name` is valid
pub fn validate_message_name(name: &str) -> ApiResult<()> {
    if is_valid_message_name(name) {
        Ok(())
    } else {
        Err(ApiError::InvalidIdentifier(name.to_string()))
    }
}
