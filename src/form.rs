use crate::error::ValidationError;
use crate::models::{AspectRatio, GenerationRequest, Sampler};

/// Raw, user-entered generation parameters. Numeric fields arrive as numbers
/// from the CLI layer; sampler, seed, and aspect ratio stay free text until
/// [`collect`](GenerationForm::collect) validates them.
#[derive(Debug, Clone)]
pub struct GenerationForm {
    pub prompt: String,
    pub negative_prompt: String,
    pub steps: u32,
    pub guidance_scale: f64,
    pub sampler: String,
    pub seed: Option<String>,
    pub aspect_ratio: String,
}

impl Default for GenerationForm {
    fn default() -> Self {
        GenerationForm {
            prompt: String::new(),
            negative_prompt: String::new(),
            steps: GenerationRequest::DEFAULT_STEPS,
            guidance_scale: GenerationRequest::DEFAULT_GUIDANCE,
            sampler: Sampler::EulerA.as_str().to_string(),
            seed: None,
            aspect_ratio: AspectRatio::Square.label().to_string(),
        }
    }
}

impl GenerationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = negative_prompt.into();
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_guidance_scale(mut self, guidance_scale: f64) -> Self {
        self.guidance_scale = guidance_scale;
        self
    }

    pub fn with_sampler(mut self, sampler: impl Into<String>) -> Self {
        self.sampler = sampler.into();
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    /// Validate the raw input and build a request. Pure: no I/O, no state.
    /// Out-of-range values are rejected with a message, never clamped.
    pub fn collect(&self) -> Result<GenerationRequest, ValidationError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        if self.steps < GenerationRequest::MIN_STEPS || self.steps > GenerationRequest::MAX_STEPS {
            return Err(ValidationError::StepsOutOfRange(self.steps));
        }

        if self.guidance_scale < GenerationRequest::MIN_GUIDANCE
            || self.guidance_scale > GenerationRequest::MAX_GUIDANCE
        {
            return Err(ValidationError::GuidanceOutOfRange(self.guidance_scale));
        }

        let sampler = Sampler::parse(&self.sampler)
            .ok_or_else(|| ValidationError::UnknownSampler(self.sampler.clone()))?;

        // Absent or blank seed means the server picks one.
        let seed = match self.seed.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(
                text.parse::<u32>()
                    .map_err(|_| ValidationError::InvalidSeed(text.to_string()))?,
            ),
        };

        // Unreachable from the CLI's closed selection set, but fail safely.
        let preset = AspectRatio::from_label(&self.aspect_ratio)
            .ok_or_else(|| ValidationError::UnknownPreset(self.aspect_ratio.clone()))?;
        let (width, height) = preset.dimensions();

        Ok(GenerationRequest {
            prompt: prompt.to_string(),
            negative_prompt: self.negative_prompt.clone(),
            steps: self.steps,
            guidance_scale: self.guidance_scale,
            sampler,
            seed,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> GenerationForm {
        GenerationForm::new().with_prompt("A lighthouse at dusk")
    }

    #[test]
    fn test_defaults_collect_with_a_prompt() {
        let request = valid_form().collect().unwrap();
        assert_eq!(request.steps, 28);
        assert_eq!(request.guidance_scale, 3.0);
        assert_eq!(request.sampler, Sampler::EulerA);
        assert_eq!(request.seed, None);
        assert_eq!((request.width, request.height), (1024, 1024));
    }

    #[test]
    fn test_whitespace_prompt_is_rejected() {
        for prompt in ["", "   ", "\t\n", " \r\n "] {
            let err = GenerationForm::new().with_prompt(prompt).collect().unwrap_err();
            assert_eq!(err, ValidationError::EmptyPrompt);
        }
    }

    #[test]
    fn test_prompt_is_trimmed() {
        let request = valid_form().with_prompt("  a red fox  ").collect().unwrap();
        assert_eq!(request.prompt, "a red fox");
    }

    #[test]
    fn test_steps_bounds() {
        for steps in [19, 51, 0, 1000] {
            let err = valid_form().with_steps(steps).collect().unwrap_err();
            assert_eq!(err, ValidationError::StepsOutOfRange(steps));
        }
        for steps in [20, 35, 50] {
            let request = valid_form().with_steps(steps).collect().unwrap();
            assert_eq!(request.steps, steps);
        }
    }

    #[test]
    fn test_guidance_scale_bounds() {
        for guidance in [-0.1, 10.1, -5.0, 100.0] {
            let err = valid_form().with_guidance_scale(guidance).collect().unwrap_err();
            assert_eq!(err, ValidationError::GuidanceOutOfRange(guidance));
        }
        for guidance in [0.0, 10.0, 7.5] {
            let request = valid_form().with_guidance_scale(guidance).collect().unwrap();
            assert_eq!(request.guidance_scale, guidance);
        }
    }

    #[test]
    fn test_every_documented_sampler_is_accepted() {
        for sampler in Sampler::ALL {
            let request = valid_form().with_sampler(sampler.as_str()).collect().unwrap();
            assert_eq!(request.sampler, sampler);
        }
    }

    #[test]
    fn test_unknown_sampler_is_rejected() {
        for sampler in ["ddim", "euler-a", "Euler_A", ""] {
            let err = valid_form().with_sampler(sampler).collect().unwrap_err();
            assert_eq!(err, ValidationError::UnknownSampler(sampler.to_string()));
        }
    }

    #[test]
    fn test_seed_parsing() {
        let request = valid_form().with_seed("42").collect().unwrap();
        assert_eq!(request.seed, Some(42));

        let request = valid_form().with_seed(" 7 ").collect().unwrap();
        assert_eq!(request.seed, Some(7));

        let request = valid_form().with_seed("").collect().unwrap();
        assert_eq!(request.seed, None);

        for seed in ["-1", "abc", "4.2", "4294967296"] {
            let err = valid_form().with_seed(seed).collect().unwrap_err();
            assert_eq!(err, ValidationError::InvalidSeed(seed.to_string()));
        }
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let err = valid_form()
            .with_aspect_ratio("Banner (2:1)")
            .collect()
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownPreset("Banner (2:1)".to_string()));
    }

    #[test]
    fn test_full_scenario() {
        let request = GenerationForm::new()
            .with_prompt("A red fox in snow")
            .with_negative_prompt("blurry")
            .with_steps(35)
            .with_guidance_scale(7.0)
            .with_sampler("euler_a")
            .with_seed("42")
            .with_aspect_ratio("Landscape (4:3)")
            .collect()
            .unwrap();

        assert_eq!(request.prompt, "A red fox in snow");
        assert_eq!(request.negative_prompt, "blurry");
        assert_eq!(request.steps, 35);
        assert_eq!(request.guidance_scale, 7.0);
        assert_eq!(request.sampler, Sampler::EulerA);
        assert_eq!(request.seed, Some(42));
        assert_eq!(request.width, 1024);
        assert_eq!(request.height, 768);
    }
}
