mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

mod client;
pub use client::Client;

mod profile;
pub use profile::{avatar_descriptor, UserProfile, AVATAR_SIZE};

#[cfg(feature = "signature")]
pub mod signature;
