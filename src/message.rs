//! Rendering of issues into message fragments and the final summary.
//!
//! Each top-level issue becomes exactly one fragment. A union issue is
//! expanded into its alternatives, which collapse back into a single
//! fragment, so truncation with `max_issues_in_message` always counts a
//! union as one unit.

use crate::issue::{Issue, IssueKind};
use crate::options::{MessageOptions, DEFAULT_PREFIX};
use crate::path::format_path;

/// Renders one issue as a message fragment.
///
/// # Example
///
/// ```rust
/// use autopsy::{format_issue, Issue, JsonPath, MessageOptions};
///
/// let issue = Issue::new(JsonPath::from_field("tags").push_index(0), "Expected string");
/// assert_eq!(
///     format_issue(&issue, &MessageOptions::default()),
///     "Expected string at \"tags[0]\""
/// );
/// ```
pub fn format_issue(issue: &Issue, options: &MessageOptions) -> String {
    match issue.kind() {
        IssueKind::Union(branches) => {
            tracing::trace!(branches = branches.len(), "expanding union issue");

            let mut alternatives: Vec<String> = Vec::with_capacity(branches.len());
            for branch in branches {
                let rendered = branch
                    .iter()
                    .map(|nested| format_issue(nested, options))
                    .collect::<Vec<_>>()
                    .join(&options.issue_separator);

                if !rendered.is_empty() && !alternatives.contains(&rendered) {
                    alternatives.push(rendered);
                }
            }

            if alternatives.is_empty() {
                format_plain(issue, options)
            } else {
                alternatives.join(&options.union_separator)
            }
        }
        IssueKind::Base => format_plain(issue, options),
    }
}

fn format_plain(issue: &Issue, options: &MessageOptions) -> String {
    if !options.include_path {
        return issue.message.clone();
    }

    let path = format_path(&options.path_prefix, &issue.path);
    if path.is_empty() {
        issue.message.clone()
    } else {
        format!("{} at \"{}\"", issue.message, path)
    }
}

/// Joins top-level fragments into the summary.
///
/// At most `max_issues_in_message` fragments are kept, in order, joined with
/// `issue_separator` and placed after `prefix` and `prefix_separator`. With no
/// fragments the summary is exactly `prefix`.
pub fn join_fragments(fragments: &[String], options: &MessageOptions) -> String {
    let shown = options
        .max_issues_in_message
        .map_or(fragments.len(), |max| max.min(fragments.len()));

    if shown < fragments.len() {
        tracing::debug!(shown, total = fragments.len(), "truncating issue summary");
    }

    let body = fragments[..shown].join(&options.issue_separator);
    match (options.prefix.is_empty(), body.is_empty()) {
        // summary must never be empty
        (true, true) => DEFAULT_PREFIX.to_string(),
        (true, false) => body,
        (false, true) => options.prefix.clone(),
        (false, false) => format!("{}{}{}", options.prefix, options.prefix_separator, body),
    }
}

/// Renders a whole issue sequence into the summary string.
///
/// Each issue is formatted with [`format_issue`] and the fragments are
/// aggregated by [`join_fragments`].
///
/// ```rust
/// use autopsy::{summarize, Issue, JsonPath, MessageOptions};
///
/// let issues = vec![
///     Issue::new(JsonPath::from_field("id"), "Required"),
///     Issue::new(JsonPath::from_field("name"), "Too short"),
/// ];
///
/// assert_eq!(
///     summarize(&issues, &MessageOptions::default()),
///     "Validation error: Required at \"id\"; Too short at \"name\""
/// );
/// ```
pub fn summarize(issues: &[Issue], options: &MessageOptions) -> String {
    let fragments: Vec<String> = issues
        .iter()
        .map(|issue| format_issue(issue, options))
        .collect();

    join_fragments(&fragments, options)
}
