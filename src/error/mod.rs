//! Error types produced by this crate.
//!
//! [`ValidationError`] is the normalized form of an upstream validation
//! failure. [`OptionsError`] is only returned when loading
//! [`MessageOptions`](crate::MessageOptions) from JSON.

mod validation_error;

pub use validation_error::{ValidationError, VALIDATION_ERROR_NAME};

use thiserror::Error;

/// Errors while loading message options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid message options: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}
