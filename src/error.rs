use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("DROPBOX_ACCESS_TOKEN is not set")]
    MissingCredential,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Dropbox API error ({status}): {message}")]
    Api { status: u16, message: String },
}
