//! Structured-output recovery from raw model replies.
//!
//! Model replies routinely wrap the requested JSON in prose, markdown code
//! fences, or trailing commentary. [`extract`] isolates the embedded object
//! or array and parses it, reporting a typed [`ExtractError`] instead of
//! panicking on malformed input.
//!
//! Isolation order:
//! 1. The first fenced block tagged `json`.
//! 2. Otherwise the first untagged fenced segment.
//! 3. Otherwise the full reply text.
//!
//! Within the isolated candidate, the payload boundaries are found with a
//! bracket-depth scan that skips string literals, so braces inside string
//! values cannot truncate the capture. Later fenced blocks are ignored.

use serde_json::Value;

/// Opening fence for a JSON-tagged code block.
const TAGGED_FENCE: &str = "```json";

/// Fence delimiter for untagged code blocks.
const FENCE: &str = "```";

/// The top-level JSON shape the caller expects to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedShape {
    /// A JSON object: `{ ... }`.
    Object,
    /// A JSON array: `[ ... ]`.
    Array,
}

impl ExpectedShape {
    /// The bounding delimiter pair for this shape.
    fn delimiters(self) -> (u8, u8) {
        match self {
            ExpectedShape::Object => (b'{', b'}'),
            ExpectedShape::Array => (b'[', b']'),
        }
    }
}

impl std::fmt::Display for ExpectedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedShape::Object => write!(f, "object"),
            ExpectedShape::Array => write!(f, "array"),
        }
    }
}

/// Why no structured value could be recovered from a reply.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No opening delimiter of the expected shape was found, or the one
    /// found was never balanced by a closing delimiter.
    #[error("no delimiters: reply contains no {expected}")]
    NoDelimiters {
        /// The shape that was being looked for.
        expected: ExpectedShape,
    },

    /// The isolated candidate was not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The reply, or its first fenced block, had no content at all.
    #[error("empty payload")]
    Empty,
}

impl ExtractError {
    /// Stable short tag for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ExtractError::NoDelimiters { .. } => "no-delimiters",
            ExtractError::Parse(_) => "parse-error",
            ExtractError::Empty => "empty",
        }
    }
}

/// Recover the embedded JSON value of the expected shape from a raw reply.
///
/// Always returns an outcome; malformed input surfaces as [`ExtractError`],
/// never as a panic.
pub fn extract(raw: &str, shape: ExpectedShape) -> Result<Value, ExtractError> {
    let candidate = isolate_candidate(raw).trim();
    if candidate.is_empty() {
        return Err(ExtractError::Empty);
    }
    let slice =
        balanced_slice(candidate, shape).ok_or(ExtractError::NoDelimiters { expected: shape })?;
    Ok(serde_json::from_str(slice)?)
}

/// Narrow the reply to the fenced segment most likely to hold the payload.
///
/// A `json`-tagged fence wins over an untagged one; an unterminated fence
/// yields everything after the opening delimiter.
fn isolate_candidate(raw: &str) -> &str {
    if let Some((_, after_tag)) = raw.split_once(TAGGED_FENCE) {
        return match after_tag.split_once(FENCE) {
            Some((inner, _)) => inner,
            None => after_tag,
        };
    }
    if let Some((_, after_fence)) = raw.split_once(FENCE) {
        // First fenced segment; a language tag on the opening fence is left
        // in place and skipped by the delimiter scan below.
        return match after_fence.split_once(FENCE) {
            Some((inner, _)) => inner,
            None => after_fence,
        };
    }
    raw
}

/// Find the balanced `{...}` or `[...]` slice starting at the first opening
/// delimiter.
///
/// Tracks nesting depth and skips string literals (including escape
/// sequences), so delimiters inside string values are not counted. Returns
/// `None` when no opening delimiter exists or depth never returns to zero.
fn balanced_slice(text: &str, shape: ExpectedShape) -> Option<&str> {
    let (open, close) = shape.delimiters();
    let start = text.find(open as char)?;

    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    // Delimiters and quotes are single ASCII bytes, so a byte scan is safe
    // in UTF-8 text and every slice boundary below is a char boundary.
    for (i, &b) in text.as_bytes().iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        if b == b'"' {
            in_string = true;
        } else if b == open {
            depth += 1;
        } else if b == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(&text[start..=i]);
            }
        }
    }
    None
}
