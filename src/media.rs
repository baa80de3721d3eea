//! Client for the external image host.
//!
//! Images arrive as raw bytes from a multipart request and are forwarded to an
//! upload endpoint that answers with a durable URL. The product services only
//! see the [`MediaHost`] trait, so tests can swap in an in-process fake.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

use crate::config::MediaConfig;

/// Raw image received from a client.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media host is not configured")]
    NotConfigured,

    #[error("empty image payload")]
    EmptyPayload,

    #[error("media host request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("media host response carried no url")]
    MissingUrl,
}

#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Upload the image and return its public URL.
    async fn upload(&self, image: ImagePayload) -> Result<String, MediaError>;
}

/// Used when no upload endpoint is configured; every upload fails.
#[derive(Debug, Default, Clone)]
pub struct DisabledMediaHost;

#[async_trait]
impl MediaHost for DisabledMediaHost {
    async fn upload(&self, _image: ImagePayload) -> Result<String, MediaError> {
        Err(MediaError::NotConfigured)
    }
}

#[derive(Debug, Clone)]
pub struct HttpMediaHost {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

impl HttpMediaHost {
    pub fn new(
        upload_url: impl Into<String>,
        upload_preset: Option<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            upload_url: upload_url.into(),
            upload_preset,
            api_key,
        })
    }
}

#[async_trait]
impl MediaHost for HttpMediaHost {
    async fn upload(&self, image: ImagePayload) -> Result<String, MediaError> {
        if image.bytes.is_empty() {
            return Err(MediaError::EmptyPayload);
        }

        let size = image.bytes.len();
        let mut part = Part::bytes(image.bytes).file_name(image.file_name.clone());
        if let Some(content_type) = image.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }

        let mut form = Form::new().part("file", part);
        if let Some(preset) = &self.upload_preset {
            form = form.text("upload_preset", preset.clone());
        }
        if let Some(api_key) = &self.api_key {
            form = form.text("api_key", api_key.clone());
        }

        tracing::debug!(file_name = %image.file_name, bytes = size, "uploading image");
        let response: UploadResponse = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .secure_url
            .or(response.url)
            .filter(|url| !url.is_empty())
            .ok_or(MediaError::MissingUrl)
    }
}

/// Build the media host described by the configuration.
pub fn from_config(config: &MediaConfig, timeout: Duration) -> Result<Arc<dyn MediaHost>, MediaError> {
    match &config.upload_url {
        Some(url) => {
            let host = HttpMediaHost::new(
                url.clone(),
                config.upload_preset.clone(),
                config.api_key.clone(),
                timeout,
            )?;
            Ok(Arc::new(host))
        }
        None => {
            tracing::warn!("MEDIA_UPLOAD_URL not set; image uploads are disabled");
            Ok(Arc::new(DisabledMediaHost))
        }
    }
}
