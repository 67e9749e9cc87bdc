//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use curricula::llm::{GeminiClient, RetryConfig, RetryingGenerator, TextGenerator};
use curricula::telemetry;
use curricula::types::{CurriculumRequest, GenerationRequest};
use curricula::{CurriculaError, CurriculumGenerator, Result};

const MODEL: &str = "models/gemini-2.5-flash";
const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

// ============================================================================
// Mock backends
// ============================================================================

struct AlwaysFails;

#[async_trait]
impl TextGenerator for AlwaysFails {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        Err(CurriculaError::Http("connection refused".to_string()))
    }
}

struct ProseReply;

#[async_trait]
impl TextGenerator for ProseReply {
    fn name(&self) -> &str {
        "prose"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        Ok("I am unable to produce a curriculum right now.".to_string())
    }
}

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a given metric name.
fn counter_total(snapshot: &SnapshotVec, name: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

fn success_body() -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": "{\"ok\": true}" } ] } }
        ]
    })
}

// ============================================================================
// Tests
// ============================================================================

/// Runs async code within a local recorder scope on the multi-thread runtime.
///
/// `block_in_place` ensures the sync `with_local_recorder` closure stays
/// on the current thread while `block_on` drives the inner async work.
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn successful_request_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let mock_server = MockServer::start().await;
                Mock::given(method("POST"))
                    .and(path(GENERATE_PATH))
                    .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
                    .mount(&mock_server)
                    .await;

                let client =
                    GeminiClient::with_base_url("test_key", MODEL, mock_server.uri()).unwrap();
                client.generate(&GenerationRequest::new("prompt")).await
            })
        })
    });
    assert!(result.is_ok());

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_total(&snapshot, telemetry::REQUESTS_TOTAL);
    assert_eq!(count, 1, "expected 1 request counter");

    assert!(
        has_histogram(&snapshot, telemetry::REQUEST_DURATION_SECONDS),
        "expected a duration histogram entry"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn failed_request_records_error_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let mock_server = MockServer::start().await;
                Mock::given(method("POST"))
                    .and(path(GENERATE_PATH))
                    .respond_with(ResponseTemplate::new(401))
                    .mount(&mock_server)
                    .await;

                let client =
                    GeminiClient::with_base_url("bad_key", MODEL, mock_server.uri()).unwrap();
                client.generate(&GenerationRequest::new("prompt")).await
            })
        })
    });
    assert!(matches!(result, Err(CurriculaError::AuthenticationFailed)));

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_total(&snapshot, telemetry::REQUESTS_TOTAL);
    assert_eq!(count, 1, "expected 1 request counter for error");

    assert!(
        has_histogram(&snapshot, telemetry::REQUEST_DURATION_SECONDS),
        "failed requests still record a duration"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn every_failed_attempt_counts_a_retry() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let generator = RetryingGenerator::new(
                    Arc::new(AlwaysFails),
                    RetryConfig::new()
                        .max_attempts(3)
                        .initial_delay(Duration::from_millis(1)),
                );
                generator.generate(&GenerationRequest::new("prompt")).await
            })
        })
    });
    assert!(result.is_err());

    let snapshot = snapshotter.snapshot().into_vec();

    // The final attempt counts too, not only the ones that slept.
    let count = counter_total(&snapshot, telemetry::RETRIES_TOTAL);
    assert_eq!(count, 3, "expected one retry counter per failed attempt");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn extraction_failure_records_a_failure_counter() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let generator = CurriculumGenerator::builder()
                    .generator(Arc::new(ProseReply))
                    .retry(RetryConfig::disabled())
                    .build()
                    .unwrap();
                generator
                    .generate(&CurriculumRequest::new("Machine Learning", "BTech", 1))
                    .await
            })
        })
    });
    assert!(matches!(result, Err(CurriculaError::Extraction(_))));

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_total(&snapshot, telemetry::EXTRACTION_FAILURES_TOTAL);
    assert_eq!(count, 1, "expected 1 extraction failure counter");
}

#[tokio::test]
async fn metrics_are_noop_without_recorder() {
    // Verify no panics when no recorder is installed.
    let generator = RetryingGenerator::new(
        Arc::new(AlwaysFails),
        RetryConfig::new()
            .max_attempts(2)
            .initial_delay(Duration::from_millis(1)),
    );
    let result = generator.generate(&GenerationRequest::new("prompt")).await;
    assert!(result.is_err());
}
