mod error;
pub use error::{Error, Result};

mod descriptor;
pub use descriptor::{ImageDescriptor, ImageExtension, ImageKind};

mod url;
pub use url::{build_image_url, clamp_size, CDN_BASE_URL, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
