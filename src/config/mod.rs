use std::env;

use crate::error::AppError;

/// Filename of the generated sample plot, written to the current working
/// directory and reused as the remote filename.
pub const SAMPLE_IMAGE_FILENAME: &str = "test_image.png";

/// Destination directory inside the Dropbox namespace. Dropbox creates
/// intermediate folders implicitly, so no mkdir step is needed.
pub const REMOTE_DIR: &str = "/Apps/Overleaf/tum-thesis-latex/data";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pre-obtained Dropbox bearer token.
    pub access_token: String,
}

impl AppConfig {
    /// Load configuration from environment variables. A missing or empty
    /// `DROPBOX_ACCESS_TOKEN` is a hard error: nothing downstream can work
    /// without it, so the process stops here instead of failing mid-upload.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_token(env::var("DROPBOX_ACCESS_TOKEN").ok())
    }

    fn from_token(token: Option<String>) -> Result<Self, AppError> {
        let access_token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(AppError::MissingCredential)?;
        Ok(Self { access_token })
    }
}

/// Remote destination for a given filename.
pub fn remote_path_for(filename: &str) -> String {
    format!("{}/{}", REMOTE_DIR, filename)
}
