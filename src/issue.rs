//! Issues reported by an upstream schema validator.
//!
//! This module provides [`Issue`] for a single field-level failure and
//! [`Issues`] for the non-empty collection an upstream validator fails with.
//! Issues are treated as immutable data; nothing in this crate rewrites them.

use std::fmt::{self, Display};

use serde::{Deserialize, Deserializer, Serialize};
use stillwater::prelude::*;

use crate::path::JsonPath;

/// The category of a validation failure.
///
/// Only [`IssueCode::InvalidUnion`] changes how an issue is rendered. Every
/// other code, including codes this crate does not know about, is carried
/// along verbatim for programmatic consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueCode {
    /// The value had the wrong type.
    InvalidType,
    /// The value was below a lower bound (length, size or magnitude).
    TooSmall,
    /// The value was above an upper bound.
    TooBig,
    /// None of the alternatives of a union matched.
    InvalidUnion,
    /// The value failed an intersection of schemas.
    InvalidIntersection,
    /// A user-defined check failed.
    Custom,
    /// Any other code reported by the upstream validator.
    Other(String),
}

impl IssueCode {
    /// Returns the wire name of this code (e.g., `invalid_union`).
    pub fn as_str(&self) -> &str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::TooSmall => "too_small",
            IssueCode::TooBig => "too_big",
            IssueCode::InvalidUnion => "invalid_union",
            IssueCode::InvalidIntersection => "invalid_intersection",
            IssueCode::Custom => "custom",
            IssueCode::Other(code) => code,
        }
    }
}

impl From<&str> for IssueCode {
    fn from(code: &str) -> Self {
        match code {
            "invalid_type" => IssueCode::InvalidType,
            "too_small" => IssueCode::TooSmall,
            "too_big" => IssueCode::TooBig,
            "invalid_union" => IssueCode::InvalidUnion,
            "invalid_intersection" | "invalid_intersection_types" => {
                IssueCode::InvalidIntersection
            }
            "custom" => IssueCode::Custom,
            other => IssueCode::Other(other.to_string()),
        }
    }
}

impl From<String> for IssueCode {
    fn from(code: String) -> Self {
        IssueCode::from(code.as_str())
    }
}

impl From<IssueCode> for String {
    fn from(code: IssueCode) -> Self {
        code.as_str().to_string()
    }
}

impl Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an issue has to be rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IssueKind<'a> {
    /// A plain failure rendered from its own message and path.
    Base,
    /// A failed union, with one issue set per alternative attempted.
    Union(&'a [Vec<Issue>]),
}

/// A single validation failure.
///
/// # Example
///
/// ```rust
/// use autopsy::{Issue, IssueCode, JsonPath};
///
/// let issue = Issue::new(JsonPath::from_field("age"), "Expected number, received string")
///     .with_code(IssueCode::InvalidType);
///
/// assert_eq!(issue.code.as_str(), "invalid_type");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Where in the validated value the failure occurred.
    #[serde(default)]
    pub path: JsonPath,
    /// Human-readable description, as rendered by the upstream validator.
    pub message: String,
    /// The failure category.
    pub code: IssueCode,
    /// One issue set per union alternative; empty unless `code` is `invalid_union`.
    ///
    /// Serialized as `[[issue, ...], ...]`. Each alternative is also read from
    /// the wrapped `{"issues": [...]}` form some validators emit.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_branches"
    )]
    pub union_errors: Vec<Vec<Issue>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Branch {
    Bare(Vec<Issue>),
    Wrapped { issues: Vec<Issue> },
}

fn deserialize_branches<'de, D>(deserializer: D) -> Result<Vec<Vec<Issue>>, D::Error>
where
    D: Deserializer<'de>,
{
    let branches = Vec::<Branch>::deserialize(deserializer)?;
    Ok(branches
        .into_iter()
        .map(|branch| match branch {
            Branch::Bare(issues) | Branch::Wrapped { issues } => issues,
        })
        .collect())
}

impl Issue {
    /// Creates a new issue with the given path and message.
    ///
    /// The code defaults to [`IssueCode::Custom`].
    pub fn new(path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code: IssueCode::Custom,
            union_errors: Vec::new(),
        }
    }

    /// Creates a union issue carrying the issues of every alternative tried.
    pub fn union(path: JsonPath, message: impl Into<String>, branches: Vec<Vec<Issue>>) -> Self {
        Self {
            path,
            message: message.into(),
            code: IssueCode::InvalidUnion,
            union_errors: branches,
        }
    }

    /// Sets the code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<IssueCode>) -> Self {
        self.code = code.into();
        self
    }

    /// Classifies this issue for rendering.
    ///
    /// A union issue without any recorded alternatives renders like a plain one.
    pub fn kind(&self) -> IssueKind<'_> {
        match self.code {
            IssueCode::InvalidUnion if !self.union_errors.is_empty() => {
                IssueKind::Union(&self.union_errors)
            }
            _ => IssueKind::Base,
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
};

/// A non-empty collection of issues.
///
/// This is the failure payload of an upstream `Validation<T, Issues>`. It
/// implements `Semigroup`, so failures from independent checks combine:
///
/// ```rust
/// use autopsy::{Issue, Issues, JsonPath};
/// use stillwater::prelude::*;
///
/// let name = Issues::single(Issue::new(JsonPath::from_field("name"), "Required"));
/// let email = Issues::single(Issue::new(JsonPath::from_field("email"), "Invalid email"));
///
/// let combined = name.combine(email);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(NonEmptyVec<Issue>);

impl Issues {
    /// Creates an `Issues` containing a single issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates an `Issues` from a `NonEmptyVec` of issues.
    pub fn from_non_empty(issues: NonEmptyVec<Issue>) -> Self {
        Self(issues)
    }

    /// Creates an `Issues` from a vec, or returns `None` if it is empty.
    pub fn try_from_vec(issues: Vec<Issue>) -> Option<Self> {
        NonEmptyVec::from_vec(issues).map(Self)
    }

    /// Returns the number of issues in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained issues.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Returns all issues at the specified path.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&Issue> {
        self.0.iter().filter(|i| &i.path == path).collect()
    }

    /// Returns all issues with the specified code.
    pub fn with_code(&self, code: &IssueCode) -> Vec<&Issue> {
        self.0.iter().filter(|i| &i.code == code).collect()
    }

    /// Returns the first issue in the collection.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Converts this collection into a `Vec<Issue>`.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl Semigroup for Issues {
    fn combine(self, other: Self) -> Self {
        Issues(self.0.combine(other.0))
    }
}

impl Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation issue(s)", self.len())
    }
}

impl std::error::Error for Issues {}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issues>();
    assert_sync::<Issues>();
};
