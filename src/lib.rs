//! Client library for the Black Forest Labs Flux image generation API:
//! validated prompt parameters, aspect-ratio presets, and a blocking
//! submit/poll/fetch generation call.

pub mod bfl;
pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod models;

pub use bfl::{FluxClient, ImageClient};
pub use config::FluxConfig;
pub use error::{ChronoFluxError, GenerationError, Result, ValidationError};
pub use form::GenerationForm;
pub use models::{AspectRatio, GeneratedImage, GenerationRequest, Sampler};
