//! # Autopsy
//!
//! Turns the issues reported by a schema validator into one readable error
//! that still carries every structured issue.
//!
//! ## Overview
//!
//! A validator reports failure as a list of [`Issue`]s, each with a location
//! path, a message and a code. Autopsy reduces that list to a
//! [`ValidationError`] whose message reads like
//! `Validation error: Required at "id"; Expected string at "tags[0]"`, while
//! [`ValidationError::details`] keeps the original issues for programs that
//! need to map failures back to fields.
//!
//! ## Core Types
//!
//! - [`JsonPath`]: Location of an issue (e.g., `users[0].email`)
//! - [`Issue`]: A single failure; union failures nest one issue set per alternative
//! - [`Issues`]: A non-empty collection of issues, the upstream failure payload
//! - [`MessageOptions`]: Separators, prefix, truncation and override for the summary
//! - [`ValidationError`]: The normalized error
//!
//! ## Example
//!
//! ```rust
//! use autopsy::{is_validation_error_like, normalize, Issue, JsonPath, MessageOptions};
//!
//! let issues = vec![
//!     Issue::new(JsonPath::from_field("id"), "Required"),
//!     Issue::union(
//!         JsonPath::from_field("status"),
//!         "Invalid input",
//!         vec![
//!             vec![Issue::new(JsonPath::from_field("status"), "Expected 'open'")],
//!             vec![Issue::new(JsonPath::from_field("status"), "Expected 'closed'")],
//!         ],
//!     ),
//! ];
//!
//! let error = normalize(issues, &MessageOptions::default());
//! assert_eq!(
//!     error.to_string(),
//!     "Validation error: Required at \"id\"; \
//!      Expected 'open' at \"status\", or Expected 'closed' at \"status\""
//! );
//! assert_eq!(error.details().len(), 2);
//! assert!(is_validation_error_like(&error.to_json().unwrap()));
//! ```

pub mod convert;
pub mod error;
pub mod identity;
pub mod issue;
pub mod message;
pub mod options;
pub mod path;

pub use convert::{explain, from_issue, normalize, to_validation_error};
pub use error::{OptionsError, ValidationError, VALIDATION_ERROR_NAME};
pub use identity::{is_validation_error, is_validation_error_like};
pub use issue::{Issue, IssueCode, IssueKind, Issues};
pub use message::{format_issue, join_fragments, summarize};
pub use options::{MessageOptions, DEFAULT_PREFIX};
pub use path::{format_path, JsonPath, PathSegment};

/// Type alias for upstream validation outcomes carrying [`Issues`].
pub type ValidationResult<T> = stillwater::Validation<T, Issues>;
