use crate::{build_image_url, Error, Result};
use model::{ImageHash, Snowflake};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    UserAvatar,
    GuildIcon,
    GuildBanner,
    GuildSplash,
    Default,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::UserAvatar => "user_avatar",
            ImageKind::GuildIcon => "guild_icon",
            ImageKind::GuildBanner => "guild_banner",
            ImageKind::GuildSplash => "guild_splash",
            ImageKind::Default => "default",
        }
    }
}

impl FromStr for ImageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "user_avatar" => Ok(ImageKind::UserAvatar),
            "guild_icon" => Ok(ImageKind::GuildIcon),
            "guild_banner" => Ok(ImageKind::GuildBanner),
            "guild_splash" => Ok(ImageKind::GuildSplash),
            "default" => Ok(ImageKind::Default),
            _ => Error::InvalidImageKind(s.to_string()).into(),
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtension {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExtension::Png => "png",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Webp => "webp",
            ImageExtension::Gif => "gif",
        }
    }
}

impl FromStr for ImageExtension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageExtension::Png),
            "jpeg" => Ok(ImageExtension::Jpeg),
            "webp" => Ok(ImageExtension::Webp),
            "gif" => Ok(ImageExtension::Gif),
            _ => Error::InvalidExtension(s.to_string()).into(),
        }
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to address one image on the CDN.
///
/// Which fields are required depends on `kind`; see [`build_image_url`].
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ImageDescriptor {
    pub kind: ImageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<ImageHash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<ImageExtension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<u16>,
}

impl ImageDescriptor {
    pub fn new(kind: ImageKind) -> ImageDescriptor {
        ImageDescriptor {
            kind,
            hash: None,
            owner_id: None,
            extension: None,
            size: None,
            discriminator: None,
        }
    }

    fn hashed(
        kind: ImageKind,
        owner_id: Snowflake,
        hash: ImageHash,
        extension: ImageExtension,
    ) -> ImageDescriptor {
        ImageDescriptor {
            hash: Some(hash),
            owner_id: Some(owner_id),
            extension: Some(extension),
            ..ImageDescriptor::new(kind)
        }
    }

    pub fn user_avatar(
        user_id: Snowflake,
        hash: ImageHash,
        extension: ImageExtension,
    ) -> ImageDescriptor {
        Self::hashed(ImageKind::UserAvatar, user_id, hash, extension)
    }

    pub fn guild_icon(
        guild_id: Snowflake,
        hash: ImageHash,
        extension: ImageExtension,
    ) -> ImageDescriptor {
        Self::hashed(ImageKind::GuildIcon, guild_id, hash, extension)
    }

    pub fn guild_banner(
        guild_id: Snowflake,
        hash: ImageHash,
        extension: ImageExtension,
    ) -> ImageDescriptor {
        Self::hashed(ImageKind::GuildBanner, guild_id, hash, extension)
    }

    pub fn guild_splash() -> ImageDescriptor {
        ImageDescriptor::new(ImageKind::GuildSplash)
    }

    /// The generated avatar shown for users that never uploaded one.
    pub fn default_avatar(discriminator: u16) -> ImageDescriptor {
        ImageDescriptor {
            discriminator: Some(discriminator),
            ..ImageDescriptor::new(ImageKind::Default)
        }
    }

    pub fn with_size(mut self, size: u32) -> ImageDescriptor {
        self.size = Some(size);
        self
    }

    pub fn with_extension(mut self, extension: ImageExtension) -> ImageDescriptor {
        self.extension = Some(extension);
        self
    }

    pub fn url(&self) -> Result<String> {
        build_image_url(self)
    }
}
