//! Generation trait implemented by remote backends.
//!
//! The pipeline only ever sees `generate(request) -> text`; one backend is
//! constructed at startup and reused for every call. Decorators
//! (`RetryingGenerator`) wrap the trait object rather than the concrete
//! client, so retry policy composes with any backend, including test
//! doubles.

use async_trait::async_trait;

use crate::Result;
use crate::types::GenerationRequest;

/// A backend that turns a prompt into reply text.
///
/// Implementations classify their own failures into the crate error
/// taxonomy and perform no retries; retry policy belongs to
/// [`RetryingGenerator`](crate::llm::RetryingGenerator).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name for logging/debugging.
    fn name(&self) -> &str;

    /// Perform one generation call and return the raw reply text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
