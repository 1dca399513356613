use model::Snowflake;
use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("User {0} does not exist")]
    UserNotFound(Snowflake),

    #[error("Discord rejected the configured token")]
    Unauthorized,

    #[error("Error requesting Discord. Status: {0}")]
    RemoteError(StatusCode),

    #[error("Error while performing HTTP request: {0}")]
    TransportError(#[source] reqwest::Error),

    #[error("Error while decoding response body: {0}")]
    DecodeError(#[source] reqwest::Error),

    #[error("Error while building image URL: {0}")]
    ImageUrlError(#[from] cdn::Error),

    #[error("Failed to load image from {url}: {reason}")]
    ImageLoadError { url: String, reason: String },

    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "signature")]
    #[error("Error while encoding image: {0}")]
    EncodeError(#[from] image::ImageError),
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
