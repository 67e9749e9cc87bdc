//! End-to-end tests for structured-output extraction.
//!
//! Model replies arrive as free text: fenced, half-fenced, wrapped in
//! prose, or refused outright. Extraction must classify every one of
//! these without panicking.

use curricula::extract::{ExpectedShape, ExtractError, extract};

#[test]
fn tagged_fence_with_surrounding_prose() {
    let raw = "Here you go:\n```json\n{\"title\":\"X\",\"total_credits\":12}\n```";
    let value = extract(raw, ExpectedShape::Object).expect("tagged fence should parse");
    assert_eq!(value["title"], "X");
    assert_eq!(value["total_credits"], 12);
}

#[test]
fn bare_array_without_fences() {
    let raw = "[{\"code\":\"C1\",\"credits\":3}]";
    let value = extract(raw, ExpectedShape::Array).expect("bare array should parse");
    assert_eq!(value.as_array().map(|a| a.len()), Some(1));
    assert_eq!(value[0]["code"], "C1");
}

#[test]
fn refusal_reports_no_delimiters() {
    let raw = "Sorry, I cannot help with that.";
    let err = extract(raw, ExpectedShape::Object).unwrap_err();
    assert!(matches!(err, ExtractError::NoDelimiters { .. }));
    assert_eq!(err.reason(), "no-delimiters");
}

#[test]
fn invalid_syntax_reports_parse_error_with_cause() {
    let raw = "```json\n{\"title\": \"X\", }\n```";
    let err = extract(raw, ExpectedShape::Object).unwrap_err();
    assert!(matches!(err, ExtractError::Parse(_)));
    assert_eq!(err.reason(), "parse-error");
    // The underlying serde_json error must survive as the source.
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn untagged_fence_is_used_when_no_tagged_fence_exists() {
    let raw = "The curriculum:\n```\n{\"title\": \"Y\"}\n```\nHope this helps!";
    let value = extract(raw, ExpectedShape::Object).expect("untagged fence should parse");
    assert_eq!(value["title"], "Y");
}

#[test]
fn only_the_first_fenced_block_is_considered() {
    let raw = "```json\n{\"first\": true}\n```\nAnd an alternative:\n```json\n{\"second\": true}\n```";
    let value = extract(raw, ExpectedShape::Object).expect("first block should parse");
    assert_eq!(value["first"], true);
    assert!(value.get("second").is_none());
}

#[test]
fn prose_around_a_naked_object_is_ignored() {
    let raw = "Sure! Here is the plan: {\"title\": \"Z\", \"total_credits\": 9} Let me know.";
    let value = extract(raw, ExpectedShape::Object).expect("embedded object should parse");
    assert_eq!(value["title"], "Z");
}

#[test]
fn literal_braces_inside_string_values_do_not_truncate() {
    let raw = r#"{"overview": "Covers sets {A, B} and maps", "total_credits": 6}"#;
    let value = extract(raw, ExpectedShape::Object).expect("braces in strings should be skipped");
    assert_eq!(value["overview"], "Covers sets {A, B} and maps");
    assert_eq!(value["total_credits"], 6);
}

#[test]
fn escaped_quotes_inside_strings_are_handled() {
    let raw = r#"Reply: {"title": "Intro to \"Systems\"", "level": "UG"}"#;
    let value = extract(raw, ExpectedShape::Object).expect("escaped quotes should be skipped");
    assert_eq!(value["title"], "Intro to \"Systems\"");
}

#[test]
fn unbalanced_object_reports_no_delimiters() {
    let raw = "{\"title\": \"truncated reply";
    let err = extract(raw, ExpectedShape::Object).unwrap_err();
    assert!(matches!(err, ExtractError::NoDelimiters { .. }));
}

#[test]
fn empty_fenced_block_reports_empty() {
    let raw = "```json\n\n```";
    let err = extract(raw, ExpectedShape::Object).unwrap_err();
    assert!(matches!(err, ExtractError::Empty));
    assert_eq!(err.reason(), "empty");
}

#[test]
fn expected_array_does_not_accept_an_object() {
    let raw = "{\"not\": \"an array\"}";
    let err = extract(raw, ExpectedShape::Array).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::NoDelimiters {
            expected: ExpectedShape::Array
        }
    ));
}

#[test]
fn nested_structures_parse_to_full_depth() {
    let raw =
        "```json\n{\"semesters\": [{\"semester_number\": 1, \"courses\": [{\"code\": \"A\"}]}]}\n```";
    let value = extract(raw, ExpectedShape::Object).expect("nested payload should parse");
    assert_eq!(value["semesters"][0]["courses"][0]["code"], "A");
}

#[test]
fn whitespace_only_reply_reports_empty() {
    let err = extract("   \n\t  ", ExpectedShape::Object).unwrap_err();
    assert!(matches!(err, ExtractError::Empty));
}

#[test]
fn array_embedded_in_prose_with_trailing_chatter() {
    let raw = "Recommendations below.\n[{\"code\": \"R1\"}, {\"code\": \"R2\"}]\nEnjoy!";
    let value = extract(raw, ExpectedShape::Array).expect("embedded array should parse");
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
}
