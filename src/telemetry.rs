//! Telemetry metric name constants.
//!
//! Centralised metric names for curricula operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `curricula_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `provider` — generation backend name (e.g. "gemini")
//! - `operation` — pipeline step invoked (e.g. "generate", "curriculum")
//! - `status` — outcome: "ok" or "error"
//! - `reason` — extraction failure reason ("no-delimiters" | "parse-error" | "empty")

/// Total generation requests dispatched to a backend.
///
/// Labels: `provider`, `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "curricula_requests_total";

/// Generation request duration in seconds.
///
/// Labels: `provider`, `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "curricula_request_duration_seconds";

/// Total failed attempts observed by the retry loop.
///
/// Labels: `provider`, `operation`.
pub const RETRIES_TOTAL: &str = "curricula_retries_total";

/// Total replies from which no structured value could be recovered.
///
/// Labels: `operation`, `reason`.
pub const EXTRACTION_FAILURES_TOTAL: &str = "curricula_extraction_failures_total";
