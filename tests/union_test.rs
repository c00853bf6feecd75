//! Integration tests for union and intersection issue rendering.

use autopsy::{format_issue, normalize, Issue, IssueCode, JsonPath, MessageOptions};
use pretty_assertions::assert_eq;

fn root(message: &str) -> Issue {
    Issue::new(JsonPath::root(), message)
}

#[test]
fn test_two_branch_union() {
    let union = Issue::union(
        JsonPath::root(),
        "Invalid input",
        vec![vec![root("Required")], vec![root("Invalid literal")]],
    );
    assert_eq!(
        format_issue(&union, &MessageOptions::default()),
        "Required, or Invalid literal"
    );
}

#[test]
fn test_union_is_one_fragment_among_siblings() {
    let issues = vec![
        Issue::new(JsonPath::from_field("id"), "Required"),
        Issue::union(
            JsonPath::from_field("contact"),
            "Invalid input",
            vec![
                vec![Issue::new(
                    JsonPath::from_field("contact").push_field("email"),
                    "Invalid email",
                )],
                vec![Issue::new(
                    JsonPath::from_field("contact").push_field("phone"),
                    "Required",
                )],
            ],
        ),
        Issue::new(JsonPath::from_field("age"), "Expected number"),
    ];

    let error = normalize(issues, &MessageOptions::default());
    assert_eq!(
        error.message(),
        "Validation error: Required at \"id\"; \
         Invalid email at \"contact.email\", or Required at \"contact.phone\"; \
         Expected number at \"age\""
    );
}

#[test]
fn test_truncation_counts_union_once() {
    let issues = vec![
        Issue::union(
            JsonPath::root(),
            "Invalid input",
            vec![
                vec![root("Expected string"), root("Too short")],
                vec![root("Expected number")],
            ],
        ),
        Issue::new(JsonPath::from_field("extra"), "Unrecognized key"),
    ];

    let error = normalize(issues, &MessageOptions::new().with_max_issues(1));
    assert_eq!(
        error.message(),
        "Validation error: Expected string; Too short, or Expected number"
    );
    assert_eq!(error.details().len(), 2);
}

#[test]
fn test_custom_union_separator() {
    let union = Issue::union(
        JsonPath::root(),
        "Invalid input",
        vec![vec![root("Expected 'a'")], vec![root("Expected 'b'")]],
    );
    let options = MessageOptions::new().with_union_separator(" | ");
    assert_eq!(format_issue(&union, &options), "Expected 'a' | Expected 'b'");
}

#[test]
fn test_union_branches_respect_include_path() {
    let union = Issue::union(
        JsonPath::from_field("value"),
        "Invalid input",
        vec![
            vec![Issue::new(JsonPath::from_field("value"), "Expected string")],
            vec![Issue::new(JsonPath::from_field("value"), "Expected boolean")],
        ],
    );
    let options = MessageOptions::new().with_include_path(false);
    assert_eq!(
        format_issue(&union, &options),
        "Expected string, or Expected boolean"
    );
}

#[test]
fn test_intersection_issues_are_plain_siblings() {
    let issues = vec![
        Issue::new(JsonPath::from_field("a"), "Required").with_code(IssueCode::InvalidType),
        Issue::new(JsonPath::root(), "Intersection results could not be merged")
            .with_code(IssueCode::InvalidIntersection),
    ];

    let error = normalize(issues, &MessageOptions::default());
    assert_eq!(
        error.message(),
        "Validation error: Required at \"a\"; Intersection results could not be merged"
    );
}

#[test]
fn test_path_prefix_applies_to_every_alternative() {
    let union = Issue::union(
        JsonPath::from_field("payment"),
        "Invalid input",
        vec![
            vec![Issue::new(
                JsonPath::from_field("payment").push_field("card"),
                "Required",
            )],
            vec![Issue::new(
                JsonPath::from_field("payment").push_field("iban").push_index(0),
                "Invalid character",
            )],
        ],
    );
    let options = MessageOptions::new().with_path_prefix(JsonPath::from_field("order"));

    let error = normalize(vec![union], &options);
    assert_eq!(
        error.message(),
        "Validation error: Required at \"order.payment.card\", or \
         Invalid character at \"order.payment.iban[0]\""
    );
}
