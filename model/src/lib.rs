mod snowflake;
pub use snowflake::{decode_timestamp, Snowflake, SnowflakeTimestamp, DISCORD_EPOCH};

mod discriminator;
pub use discriminator::Discriminator;

mod image_hash;
pub use image_hash::{ImageHash, InvalidImageHash};

pub mod user;

mod util;
