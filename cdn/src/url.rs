use crate::{Error, ImageDescriptor, ImageExtension, ImageKind, Result};
use model::{ImageHash, Snowflake};

pub const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

pub const DEFAULT_SIZE: u32 = 128;
pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 4096;

/// Number of distinct generated avatars.
const DEFAULT_AVATAR_COUNT: u16 = 5;

/// Builds the CDN URL for an image.
///
/// | kind           | path                                   | requires                   |
/// |----------------|----------------------------------------|----------------------------|
/// | `user_avatar`  | `/avatars/{owner_id}/{hash}.{ext}`     | owner_id, hash, extension  |
/// | `guild_icon`   | `/icons/{owner_id}/{hash}.{ext}`       | owner_id, hash, extension  |
/// | `guild_banner` | `/banners/{owner_id}/{hash}.{ext}`     | as above, extension != gif |
/// | `guild_splash` | none                                   | nothing                    |
/// | `default`      | `/embed/avatars/{discriminator % 5}.png` | discriminator            |
///
/// Every URL ends with a `?size=` query, see [`clamp_size`].
pub fn build_image_url(descriptor: &ImageDescriptor) -> Result<String> {
    let mut url = String::from(CDN_BASE_URL);

    match descriptor.kind {
        ImageKind::UserAvatar => {
            let (id, hash, extension) = hashed_fields(descriptor)?;

            // Animated and static avatars currently resolve to the same path
            #[allow(clippy::if_same_then_else)]
            let path = if hash.animated {
                format!("/avatars/{}/{}.{}", id, hash, extension)
            } else {
                format!("/avatars/{}/{}.{}", id, hash, extension)
            };
            url.push_str(&path);
        }
        ImageKind::GuildIcon => {
            let (id, hash, extension) = hashed_fields(descriptor)?;

            #[allow(clippy::if_same_then_else)]
            let path = if hash.animated {
                format!("/icons/{}/{}.{}", id, hash, extension)
            } else {
                format!("/icons/{}/{}.{}", id, hash, extension)
            };
            url.push_str(&path);
        }
        ImageKind::GuildBanner => {
            let (id, hash, extension) = hashed_fields(descriptor)?;

            if extension == ImageExtension::Gif {
                return Error::UnsupportedFormat {
                    kind: descriptor.kind,
                    extension,
                }
                .into();
            }

            url.push_str(&format!("/banners/{}/{}.{}", id, hash, extension));
        }
        ImageKind::GuildSplash => {}
        ImageKind::Default => {
            let discriminator = descriptor.discriminator.ok_or(Error::MissingField {
                kind: descriptor.kind,
                field: "discriminator",
            })?;

            url.push_str(&format!(
                "/embed/avatars/{}.png",
                discriminator % DEFAULT_AVATAR_COUNT
            ));
        }
    }

    url.push_str(&format!("?size={}", clamp_size(descriptor.size)));
    Ok(url)
}

/// Returns `size` if it is a power of two within [`MIN_SIZE`]..=[`MAX_SIZE`],
/// otherwise [`DEFAULT_SIZE`].
pub fn clamp_size(size: Option<u32>) -> u32 {
    match size {
        Some(size) if is_power_of_two(size) && (MIN_SIZE..=MAX_SIZE).contains(&size) => size,
        _ => DEFAULT_SIZE,
    }
}

fn is_power_of_two(n: u32) -> bool {
    n > 0 && n & (n - 1) == 0
}

fn hashed_fields(descriptor: &ImageDescriptor) -> Result<(Snowflake, ImageHash, ImageExtension)> {
    let missing = |field| Error::MissingField {
        kind: descriptor.kind,
        field,
    };

    let id = descriptor.owner_id.ok_or_else(|| missing("owner_id"))?;
    let hash = descriptor.hash.ok_or_else(|| missing("hash"))?;
    let extension = descriptor.extension.ok_or_else(|| missing("extension"))?;

    Ok((id, hash, extension))
}
