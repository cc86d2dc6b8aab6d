//! Client for the remote mood-to-colors service.

use crate::palette::Palette;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/generate-palette";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("please enter a mood")]
pub struct ValidationError;

/// Any failure talking to the service. Status codes and transport errors
/// are not distinguished beyond the detail string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to connect to the palette service: {detail}")]
pub struct GenerationError {
    pub detail: String,
}

impl GenerationError {
    fn new(detail: impl std::fmt::Display) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Trimmed mood, or an error when nothing is left.
pub fn validate_mood(mood: &str) -> Result<&str, ValidationError> {
    let trimmed = mood.trim();
    if trimmed.is_empty() {
        Err(ValidationError)
    } else {
        Ok(trimmed)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    mood: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    colors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PaletteClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PaletteClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().context("build reqwest client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Request a palette for `mood`. Sends nothing when the mood is blank.
    pub async fn generate(&self, mood: &str) -> Result<Palette, GenerateError> {
        let mood = validate_mood(mood)?;
        tracing::info!(endpoint = %self.endpoint, mood, "requesting palette");

        let colors = self.request_colors(mood).await.map_err(|e| {
            tracing::warn!("palette generation failed: {e:#}");
            GenerationError::new(format!("{e:#}"))
        })?;

        let palette = Palette::new(mood, colors);
        tracing::info!(id = %palette.id, count = palette.colors.len(), "palette generated");
        Ok(palette)
    }

    async fn request_colors(&self, mood: &str) -> anyhow::Result<Vec<String>> {
        let resp: GenerateResponse = self
            .http
            .post(&self.endpoint)
            .json(&GenerateRequest { mood })
            .send()
            .await
            .context("send generate request")?
            .error_for_status()
            .context("generate http status")?
            .json()
            .await
            .context("parse generate json")?;
        Ok(resp.colors)
    }
}
