//! Types for generation requests.

use serde::{Deserialize, Serialize};

use crate::{CurriculaError, Result};

/// Default sampling temperature when none is set.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// A single generation call: prompt plus sampling parameters.
///
/// Immutable per call. When `max_output_tokens` is unset, the backend
/// applies its own default cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Instruction text sent to the model.
    pub prompt: String,

    /// Sampling temperature (0.0 to 1.0).
    pub temperature: f32,

    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Create a request with the given prompt and default sampling.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: None,
        }
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the output-token cap.
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// Reject requests that would be refused by any backend.
    ///
    /// Checked before any network activity: the prompt must be non-empty,
    /// the temperature within [0.0, 1.0], and the token cap positive.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(CurriculaError::InvalidInput("prompt is empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(CurriculaError::InvalidInput(format!(
                "temperature {} outside [0.0, 1.0]",
                self.temperature
            )));
        }
        if self.max_output_tokens == Some(0) {
            return Err(CurriculaError::InvalidInput(
                "max_output_tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_valid() {
        let request = GenerationRequest::new("design a course plan");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_output_tokens, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let request = GenerationRequest::new("   ");
        assert!(matches!(
            request.validate(),
            Err(CurriculaError::InvalidInput(_))
        ));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let request = GenerationRequest::new("p").temperature(1.5);
        assert!(request.validate().is_err());
        let request = GenerationRequest::new("p").temperature(-0.1);
        assert!(request.validate().is_err());
    }

    #[test]
    fn zero_token_cap_is_rejected() {
        let request = GenerationRequest::new("p").max_output_tokens(0);
        assert!(request.validate().is_err());
    }

    #[test]
    fn unset_token_cap_is_not_serialized() {
        let request = GenerationRequest::new("p");
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("max_output_tokens").is_none());
    }
}
