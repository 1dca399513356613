use crate::Result;
use cdn::{ImageDescriptor, ImageExtension};
use model::user::{Badge, User};
use model::{Discriminator, Snowflake, SnowflakeTimestamp};
use serde::Serialize;

/// Size requested for every profile avatar.
pub const AVATAR_SIZE: u32 = 4096;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: Discriminator,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    pub badges: Vec<Badge>,
}

impl UserProfile {
    /// `id` is the ID that was looked up, which is reported even if the
    /// payload disagrees.
    pub fn from_user(id: Snowflake, user: User) -> Result<UserProfile> {
        let avatar_url = avatar_descriptor(id, &user).url()?;
        let badges = user.public_flags.unwrap_or_default().badges();

        Ok(UserProfile {
            id,
            username: user.username,
            discriminator: user.discriminator,
            avatar_url,
            badges,
        })
    }

    pub fn created_at(&self) -> SnowflakeTimestamp {
        self.id.timestamp()
    }

    /// `username#discriminator`
    pub fn tag(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }
}

/// Picks the image a client would show for the user: the generated default
/// avatar when none is set, otherwise their upload as gif or webp.
pub fn avatar_descriptor(id: Snowflake, user: &User) -> ImageDescriptor {
    let descriptor = match user.avatar {
        None => ImageDescriptor::default_avatar(user.discriminator.value())
            .with_extension(ImageExtension::Webp),
        Some(hash) if hash.animated => ImageDescriptor::user_avatar(id, hash, ImageExtension::Gif),
        Some(hash) => ImageDescriptor::user_avatar(id, hash, ImageExtension::Webp),
    };

    descriptor.with_size(AVATAR_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(avatar: Option<&str>, discriminator: &str, public_flags: Option<u64>) -> User {
        serde_json::from_value(serde_json::json!({
            "id": "424606447867789312",
            "username": "Searcher",
            "avatar": avatar,
            "discriminator": discriminator,
            "public_flags": public_flags,
        }))
        .unwrap()
    }

    #[test]
    fn test_static_avatar() {
        let id = Snowflake(424606447867789312);
        let profile =
            UserProfile::from_user(id, user(Some("3f2290152cc9eaef437db2e365cce095"), "0001", Some(64)))
                .unwrap();

        assert_eq!(
            profile,
            UserProfile {
                id,
                username: "Searcher".to_string(),
                discriminator: "0001".parse().unwrap(),
                avatar_url: "https://cdn.discordapp.com/avatars/424606447867789312/3f2290152cc9eaef437db2e365cce095.webp?size=4096".to_string(),
                badges: vec![Badge::HouseBravery],
            }
        );
    }

    #[test]
    fn test_animated_avatar() {
        let id = Snowflake(424606447867789312);
        let profile =
            UserProfile::from_user(id, user(Some("a_3f2290152cc9eaef437db2e365cce095"), "0001", None))
                .unwrap();

        assert_eq!(
            profile.avatar_url,
            "https://cdn.discordapp.com/avatars/424606447867789312/a_3f2290152cc9eaef437db2e365cce095.gif?size=4096"
        );
        assert!(profile.badges.is_empty());
    }

    #[test]
    fn test_default_avatar() {
        let profile = UserProfile::from_user(Snowflake(1), user(None, "1337", Some(0))).unwrap();

        assert_eq!(
            profile.avatar_url,
            "https://cdn.discordapp.com/embed/avatars/2.png?size=4096"
        );
    }

    #[test]
    fn test_created_at_and_tag() {
        let profile =
            UserProfile::from_user(Snowflake(424606447867789312), user(None, "42", None)).unwrap();

        assert_eq!(profile.tag(), "Searcher#42");
        assert_eq!(profile.created_at().unix, 1521304465);
    }

    #[test]
    fn test_serialize() {
        let profile =
            UserProfile::from_user(Snowflake(424606447867789312), user(None, "0005", Some(256 | 512)))
                .unwrap();

        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            serde_json::json!({
                "id": "424606447867789312",
                "username": "Searcher",
                "discriminator": "0005",
                "avatar": "https://cdn.discordapp.com/embed/avatars/0.png?size=4096",
                "badges": ["House Balance", "Early Supporter"],
            })
        );
    }

    #[test]
    fn test_migrated_discriminator_kept() {
        let profile =
            UserProfile::from_user(Snowflake(424606447867789312), user(None, "0", Some(0))).unwrap();

        assert_eq!(profile.tag(), "Searcher#0");
        assert_eq!(
            serde_json::to_value(&profile).unwrap(),
            serde_json::json!({
                "id": "424606447867789312",
                "username": "Searcher",
                "discriminator": "0",
                "avatar": "https://cdn.discordapp.com/embed/avatars/0.png?size=4096",
                "badges": [],
            })
        );
    }
}
