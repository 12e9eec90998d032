use std::fmt;

/// Local input validation failures. These never reach the network and are
/// reported against the field that caused them.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyPrompt,
    StepsOutOfRange(u32),
    GuidanceOutOfRange(f64),
    UnknownSampler(String),
    InvalidSeed(String),
    UnknownPreset(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyPrompt => write!(f, "prompt: must not be empty"),
            ValidationError::StepsOutOfRange(got) => {
                write!(f, "steps: must be between 20 and 50, got {}", got)
            }
            ValidationError::GuidanceOutOfRange(got) => {
                write!(f, "guidance scale: must be between 0 and 10, got {}", got)
            }
            ValidationError::UnknownSampler(got) => write!(
                f,
                "sampler: unknown method '{}', expected one of euler_a, euler, heun, dpm_2, dpm_2_a, lms",
                got
            ),
            ValidationError::InvalidSeed(got) => {
                write!(f, "seed: must be a non-negative integer, got '{}'", got)
            }
            ValidationError::UnknownPreset(got) => {
                write!(f, "aspect ratio: unknown preset '{}'", got)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failures of a submitted generation, classified so the message tells the
/// user what to do about them.
#[derive(Debug)]
pub enum GenerationError {
    AuthError(String),
    RateLimited(String),
    InvalidRequest(String),
    ServerError(String),
    NetworkError(String),
    UnexpectedResponse(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::AuthError(msg) => {
                write!(f, "authentication failed, check your API key: {}", msg)
            }
            GenerationError::RateLimited(msg) => {
                write!(f, "rate limited, try again shortly: {}", msg)
            }
            GenerationError::InvalidRequest(msg) => {
                write!(f, "request rejected by the generation service: {}", msg)
            }
            GenerationError::ServerError(msg) => {
                write!(f, "generation service error: {}", msg)
            }
            GenerationError::NetworkError(msg) => write!(f, "network error: {}", msg),
            GenerationError::UnexpectedResponse(msg) => {
                write!(f, "unexpected response from the generation service: {}", msg)
            }
        }
    }
}

impl std::error::Error for GenerationError {}

#[derive(Debug)]
pub enum ChronoFluxError {
    ConfigError(String),
    ValidationError(ValidationError),
    GenerationError(GenerationError),
    IoError(std::io::Error),
}

impl fmt::Display for ChronoFluxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChronoFluxError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChronoFluxError::ValidationError(err) => write!(f, "Validation error: {}", err),
            ChronoFluxError::GenerationError(err) => write!(f, "Generation error: {}", err),
            ChronoFluxError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ChronoFluxError {}

impl From<ValidationError> for ChronoFluxError {
    fn from(err: ValidationError) -> Self {
        ChronoFluxError::ValidationError(err)
    }
}

impl From<GenerationError> for ChronoFluxError {
    fn from(err: GenerationError) -> Self {
        ChronoFluxError::GenerationError(err)
    }
}

impl From<std::io::Error> for ChronoFluxError {
    fn from(err: std::io::Error) -> Self {
        ChronoFluxError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, ChronoFluxError>;
