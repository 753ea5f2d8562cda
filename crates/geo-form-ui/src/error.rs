//! Lookup error type
//!
//! Reverse geocoding is the only fallible operation in the widget. Every
//! failure mode folds into [`LookupFailure`]; callers log it and clear the
//! address rather than surfacing it.

use geo_form_types::PayloadError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Request never produced a response (DNS, TLS, CORS, connection reset)
    #[error("request failed: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body was not a reverse-geocode JSON object
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<PayloadError> for LookupFailure {
    fn from(error: PayloadError) -> Self {
        LookupFailure::Malformed(error.to_string())
    }
}

impl From<url::ParseError> for LookupFailure {
    fn from(error: url::ParseError) -> Self {
        LookupFailure::Transport(format!("invalid geocoder URL: {}", error))
    }
}
