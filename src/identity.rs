//! Recognizing normalized validation errors.
//!
//! Two predicates with different strictness:
//!
//! - [`is_validation_error`] is nominal: true only for a [`ValidationError`]
//!   built by this copy of the crate, directly or behind a boxed error.
//! - [`is_validation_error_like`] is structural: it also accepts the
//!   serialized form of a validation error (a JSON object with a string
//!   `"message"` and `"name"` equal to [`VALIDATION_ERROR_NAME`]). Two copies
//!   of this crate in one dependency graph have distinct `TypeId`s, but they
//!   agree on that shape.
//!
//! Neither predicate panics; anything unrecognized is simply `false`.

use std::any::Any;
use std::error::Error;

use serde_json::Value;

use crate::error::{ValidationError, VALIDATION_ERROR_NAME};

/// Returns true if `value` is a [`ValidationError`] from this crate.
///
/// Boxed errors (`Box<dyn Error>` and `Box<dyn Error + Send + Sync>`) are
/// looked through.
///
/// ```rust
/// use autopsy::{is_validation_error, normalize, MessageOptions};
///
/// let error = normalize(Vec::new(), &MessageOptions::default());
/// assert!(is_validation_error(&error));
/// assert!(!is_validation_error(&"Validation error:"));
/// ```
pub fn is_validation_error(value: &dyn Any) -> bool {
    if value.is::<ValidationError>() {
        return true;
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        return boxed.is::<ValidationError>();
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Error>>() {
        return boxed.is::<ValidationError>();
    }
    false
}

/// Returns true if `value` is, or has the shape of, a normalized validation error.
///
/// ```rust
/// use autopsy::{is_validation_error_like, VALIDATION_ERROR_NAME};
/// use serde_json::json;
///
/// let mimic = json!({ "name": VALIDATION_ERROR_NAME, "message": "Validation error: Required" });
/// assert!(is_validation_error_like(&mimic));
///
/// let generic = json!({ "name": "Error", "message": "boom" });
/// assert!(!is_validation_error_like(&generic));
/// ```
pub fn is_validation_error_like(value: &dyn Any) -> bool {
    if is_validation_error(value) {
        return true;
    }
    value
        .downcast_ref::<Value>()
        .is_some_and(json_is_validation_error)
}

fn json_is_validation_error(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let has_message = object.get("message").is_some_and(Value::is_string);
    let tagged = object.get("name").and_then(Value::as_str) == Some(VALIDATION_ERROR_NAME);
    has_message && tagged
}
