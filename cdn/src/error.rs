use crate::{ImageExtension, ImageKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} is not a supported image type")]
    InvalidImageKind(String),

    #[error("{0} is not a supported file extension")]
    InvalidExtension(String),

    #[error("{kind} image is missing its {field}")]
    MissingField {
        kind: ImageKind,
        field: &'static str,
    },

    #[error("{kind} images cannot be requested as {extension}")]
    UnsupportedFormat {
        kind: ImageKind,
        extension: ImageExtension,
    },
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
