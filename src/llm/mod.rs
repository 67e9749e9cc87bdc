//! Remote generation backends and the retry decorator.
//!
//! The [`TextGenerator`] trait is the seam between the pipeline and the
//! hosted model. [`GeminiClient`] is the shipped backend;
//! [`RetryingGenerator`] wraps any backend with bounded exponential
//! backoff.

pub mod gemini;
pub mod retry;
pub mod traits;

pub use gemini::{API_KEY_ENV, DEFAULT_MODEL, GeminiClient};
pub use retry::{RetryConfig, RetryingGenerator};
pub use traits::TextGenerator;
