use std::path::Path;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::models::{AccountInfo, FileMetadata};

const API_BASE: &str = "https://api.dropboxapi.com";
const CONTENT_BASE: &str = "https://content.dropboxapi.com";

/// Remote object storage accepting whole-file uploads with overwrite
/// semantics.
#[async_trait]
pub trait RemoteStorage: Send + Sync {
    /// Checks that the configured credential is accepted by the remote
    /// service.
    async fn verify_credentials(&self) -> Result<AccountInfo, AppError>;

    /// Reads `local_path` fully into memory and uploads it to `remote_path`,
    /// replacing any existing file there.
    async fn upload_file(
        &self,
        local_path: &Path,
        remote_path: &str,
    ) -> Result<FileMetadata, AppError>;
}

pub struct DropboxStorage {
    client: reqwest::Client,
    access_token: String,
    api_base: String,
    content_base: String,
}

impl DropboxStorage {
    pub fn new(access_token: String) -> Self {
        Self::with_endpoints(access_token, API_BASE.into(), CONTENT_BASE.into())
    }

    /// Client talking to non-default hosts. Tests use this to target a local
    /// stand-in for the Dropbox API.
    pub fn with_endpoints(access_token: String, api_base: String, content_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
            api_base,
            content_base,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

#[async_trait]
impl RemoteStorage for DropboxStorage {
    async fn verify_credentials(&self) -> Result<AccountInfo, AppError> {
        let response = self
            .client
            .post(format!("{}/2/users/get_current_account", self.api_base))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await?;

        let response = check_response(response).await?;
        Ok(response.json::<AccountInfo>().await?)
    }

    async fn upload_file(
        &self,
        local_path: &Path,
        remote_path: &str,
    ) -> Result<FileMetadata, AppError> {
        let data = tokio::fs::read(local_path).await?;
        debug!("uploading {} bytes to {}", data.len(), remote_path);

        let arg = json!({
            "path": remote_path,
            "mode": "overwrite",
            "autorename": false,
            "mute": false,
        });

        let response = self
            .client
            .post(format!("{}/2/files/upload", self.content_base))
            .header(AUTHORIZATION, self.bearer())
            .header(CONTENT_TYPE, "application/octet-stream")
            .header("Dropbox-API-Arg", header_safe_json(&arg))
            .body(data)
            .send()
            .await?;

        let response = check_response(response).await?;
        Ok(response.json::<FileMetadata>().await?)
    }
}

async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // Dropbox puts an `error_summary` in the body of failed calls.
    let message = response.text().await.unwrap_or_default();
    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Serializes a `Dropbox-API-Arg` header value. The header must be
/// HTTP-header-safe, so every non-ASCII character in the JSON is escaped as
/// `\uXXXX`.
fn header_safe_json(value: &serde_json::Value) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    let mut units = [0u16; 2];
    for c in raw.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
