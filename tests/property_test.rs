//! Property tests for path rendering and summary determinism.

use autopsy::{format_path, normalize, summarize, Issue, JsonPath, MessageOptions, PathSegment};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = PathSegment> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,8}".prop_map(PathSegment::Field),
        (0usize..100).prop_map(PathSegment::Index),
    ]
}

fn path() -> impl Strategy<Value = JsonPath> {
    prop::collection::vec(segment(), 0..6).prop_map(JsonPath::from)
}

fn issue() -> impl Strategy<Value = Issue> {
    (path(), "[A-Za-z ]{1,20}").prop_map(|(path, message)| Issue::new(path, message))
}

proptest! {
    #[test]
    fn summary_is_deterministic(issues in prop::collection::vec(issue(), 0..8)) {
        let options = MessageOptions::default();
        let first = normalize(issues.clone(), &options);
        let second = normalize(issues, &options);
        prop_assert_eq!(first.message(), second.message());
    }

    #[test]
    fn summary_starts_with_prefix(issues in prop::collection::vec(issue(), 0..8)) {
        let summary = summarize(&issues, &MessageOptions::default());
        prop_assert!(summary.starts_with("Validation error:"));
    }

    #[test]
    fn details_survive_any_limit(
        issues in prop::collection::vec(issue(), 0..8),
        limit in 0usize..4,
    ) {
        let error = normalize(issues.clone(), &MessageOptions::new().with_max_issues(limit));
        prop_assert_eq!(error.details(), issues.as_slice());
    }

    #[test]
    fn root_issue_has_no_location(message in "[A-Za-z ]{1,20}") {
        let error = normalize(vec![Issue::new(JsonPath::root(), message)], &MessageOptions::default());
        prop_assert!(!error.message().contains(" at \""));
    }

    #[test]
    fn path_rendering_has_one_piece_per_segment(path in path()) {
        let rendered = format_path(&JsonPath::root(), &path);
        let indices = path.segments().skip(1).filter(|s| matches!(s, PathSegment::Index(_))).count();
        let fields = path.segments().skip(1).filter(|s| matches!(s, PathSegment::Field(_))).count();
        prop_assert_eq!(rendered.matches('[').count(), indices);
        prop_assert_eq!(rendered.matches('.').count(), fields);
        prop_assert_eq!(rendered.is_empty(), path.is_empty());
    }
}
