use serde::Deserialize;

use super::common::Sampler;

/// A validated generation request. Width and height are derived from the
/// chosen aspect-ratio preset when the form is collected, never entered
/// directly.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub steps: u32,
    pub guidance_scale: f64,
    pub sampler: Sampler,
    pub seed: Option<u32>,
    pub width: u32,
    pub height: u32,
}

impl GenerationRequest {
    pub const MIN_STEPS: u32 = 20;
    pub const MAX_STEPS: u32 = 50;
    pub const DEFAULT_STEPS: u32 = 28;

    pub const MIN_GUIDANCE: f64 = 0.0;
    pub const MAX_GUIDANCE: f64 = 10.0;
    pub const DEFAULT_GUIDANCE: f64 = 3.0;
}

/// A generated image plus where its bytes came from. Held only long enough
/// to display or save.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub source: String,
}

/// Response to a generation submission.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    pub id: Option<String>,
}

/// Polled generation state.
#[derive(Debug, Deserialize)]
pub struct ResultResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<ResultPayload>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload of a ready result. The image location arrives in `sample` or, for
/// multi-image responses, in `samples`.
#[derive(Debug, Deserialize)]
pub struct ResultPayload {
    #[serde(default)]
    pub sample: Option<String>,
    #[serde(default)]
    pub samples: Option<Vec<String>>,
}

impl ResultPayload {
    pub fn into_sample(self) -> Option<String> {
        match self.sample {
            Some(sample) => Some(sample),
            None => self
                .samples
                .and_then(|samples| samples.into_iter().next()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_payload_prefers_sample() {
        let payload: ResultPayload = serde_json::from_str(
            r#"{"sample": "https://delivery.bfl.ai/a.png", "samples": ["https://delivery.bfl.ai/b.png"]}"#,
        )
        .unwrap();
        assert_eq!(
            payload.into_sample().as_deref(),
            Some("https://delivery.bfl.ai/a.png")
        );
    }

    #[test]
    fn test_result_payload_falls_back_to_samples() {
        let payload: ResultPayload =
            serde_json::from_str(r#"{"samples": ["https://delivery.bfl.ai/b.png"]}"#).unwrap();
        assert_eq!(
            payload.into_sample().as_deref(),
            Some("https://delivery.bfl.ai/b.png")
        );
    }

    #[test]
    fn test_result_payload_may_be_empty() {
        let payload: ResultPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.into_sample(), None);
    }
}
