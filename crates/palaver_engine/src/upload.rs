use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Where and how the upload request is made.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Full URL of the upload endpoint.
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl UploadSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Decoded upload response body.
///
/// The server reports either a `download_endpoint` or an `error`; both are
/// carried on any HTTP status, so status codes are not inspected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub download_endpoint: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub csv_filename: Option<String>,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("could not read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("upload request failed: {0}")]
    Network(String),
    #[error("upload response was not valid JSON: {0}")]
    InvalidResponse(String),
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, file: &Path, use_ocr: bool) -> Result<UploadResponse, UploadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| UploadError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(&self, file: &Path, use_ocr: bool) -> Result<UploadResponse, UploadError> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|source| UploadError::FileRead {
                path: file.to_path_buf(),
                source,
            })?;

        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.pdf")
            .to_string();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")
            .map_err(|err| UploadError::Network(err.to_string()))?;

        // The checkbox is normalized away: the field is either absent or
        // present with the literal value "true".
        let mut form = reqwest::multipart::Form::new().part("file", part);
        if use_ocr {
            form = form.text("use_ocr", "true");
        }

        let client = self.build_client()?;
        let response = client
            .post(&self.settings.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| UploadError::Network(err.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|err| UploadError::Network(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| UploadError::InvalidResponse(err.to_string()))
    }
}
