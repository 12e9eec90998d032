use std::time::Duration;

use base64::Engine as _;
use reqwest::{Client, Response, StatusCode};
use serde_json::json;

use crate::error::GenerationError;
use crate::models::{GeneratedImage, GenerationRequest, ResultResponse, SubmitResponse};

const GENERATE_ENDPOINT: &str = "flux-pro-1.1";
const RESULT_ENDPOINT: &str = "get_result";

/// Polling cadence for a submitted request: every 500ms, at most 60 attempts.
const POLL_INTERVAL: Duration = Duration::from_millis(500);
const MAX_POLL_ATTEMPTS: u32 = 60;

#[derive(Clone, Debug)]
pub struct ImageClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl ImageClient {
    pub(crate) fn new(http: Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    /// The exact JSON body the Flux API expects. Field names and sampler
    /// identifiers are the remote contract; an unset seed goes out as null
    /// and the server picks one.
    pub fn request_payload(request: &GenerationRequest) -> serde_json::Value {
        json!({
            "prompt": request.prompt,
            "negative_prompt": request.negative_prompt,
            "width": request.width,
            "height": request.height,
            "guidance_scale": request.guidance_scale,
            "seed": request.seed,
            "sampler": request.sampler.as_str(),
            "steps": request.steps,
        })
    }

    /// Run one generation to completion: submit, poll until ready, fetch the
    /// image. One attempt per call; retrying is the caller's decision.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        let payload = Self::request_payload(request);

        log::info!(
            "🎨 Submitting image generation request ({}x{}, {} steps, sampler {})",
            request.width,
            request.height,
            request.steps,
            request.sampler.as_str()
        );

        let response = self
            .http
            .post(format!("{}/{}", self.base_url, GENERATE_ENDPOINT))
            .header("x-key", &self.api_key)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport)?;
        let response = check_status(response).await?;

        let submit: SubmitResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::UnexpectedResponse(e.to_string()))?;
        let request_id = submit.id.ok_or_else(|| {
            GenerationError::UnexpectedResponse("no request id in response".into())
        })?;

        log::info!("⏳ Request accepted, id: {}", request_id);

        let sample = self.poll_result(&request_id).await?;
        self.fetch_image(&sample).await
    }

    async fn poll_result(&self, request_id: &str) -> Result<String, GenerationError> {
        log::info!("⏳ Waiting for image generation...");

        for _ in 0..MAX_POLL_ATTEMPTS {
            tokio::time::sleep(POLL_INTERVAL).await;

            let response = self
                .http
                .get(format!("{}/{}", self.base_url, RESULT_ENDPOINT))
                .header("x-key", &self.api_key)
                .header("accept", "application/json")
                .query(&[("id", request_id)])
                .send()
                .await
                .map_err(classify_transport)?;
            let response = check_status(response).await?;

            let result: ResultResponse = response
                .json()
                .await
                .map_err(|e| GenerationError::UnexpectedResponse(e.to_string()))?;

            match result.status.as_str() {
                "Ready" => {
                    return result
                        .result
                        .and_then(|payload| payload.into_sample())
                        .ok_or_else(|| {
                            GenerationError::UnexpectedResponse(
                                "ready result carries no sample".into(),
                            )
                        });
                }
                "Failed" => {
                    return Err(GenerationError::ServerError(format!(
                        "generation failed: {}",
                        result.error.unwrap_or_else(|| "unknown error".into())
                    )));
                }
                status if status.contains("Moderated") => {
                    return Err(GenerationError::InvalidRequest(format!(
                        "rejected by the remote content filter ({})",
                        status
                    )));
                }
                status => log::debug!("Generation status: {}", status),
            }
        }

        Err(GenerationError::NetworkError(
            "image generation timed out".into(),
        ))
    }

    /// The ready payload carries either a delivery URL or inline base64 data.
    async fn fetch_image(&self, sample: &str) -> Result<GeneratedImage, GenerationError> {
        if sample.starts_with("http://") || sample.starts_with("https://") {
            log::debug!("Downloading image from {}", sample);

            let response = self
                .http
                .get(sample)
                .send()
                .await
                .map_err(classify_transport)?;
            let response = check_status(response).await?;
            let bytes = response
                .bytes()
                .await
                .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

            Ok(GeneratedImage {
                bytes: bytes.to_vec(),
                source: sample.to_string(),
            })
        } else {
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(sample)
                .map_err(|e| {
                    GenerationError::UnexpectedResponse(format!(
                        "sample is neither a URL nor base64 image data: {}",
                        e
                    ))
                })?;

            Ok(GeneratedImage {
                bytes,
                source: "inline".to_string(),
            })
        }
    }
}

fn classify_transport(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::NetworkError(format!("request timed out: {}", err))
    } else {
        GenerationError::NetworkError(err.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, GenerationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::AuthError(detail),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited(detail),
        StatusCode::BAD_REQUEST => GenerationError::InvalidRequest(detail),
        s if s.is_server_error() => GenerationError::ServerError(format!("{}: {}", status, detail)),
        _ => GenerationError::UnexpectedResponse(format!("{}: {}", status, detail)),
    })
}
