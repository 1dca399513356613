mod user;
pub use user::User;

mod premium_type;
pub use premium_type::{decode_premium_tier, InvalidPremiumTier, PremiumType};

mod badge;
pub use badge::{decode_badges, Badge, UserFlags};
