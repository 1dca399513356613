use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PremiumType {
    None = 0,
    NitroClassic = 1,
    Nitro = 2,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0} is not a known premium tier")]
pub struct InvalidPremiumTier(pub u8);

impl PremiumType {
    pub fn label(&self) -> &'static str {
        match self {
            PremiumType::None => "None",
            PremiumType::NitroClassic => "Nitro Classic",
            PremiumType::Nitro => "Nitro",
        }
    }
}

impl TryFrom<u8> for PremiumType {
    type Error = InvalidPremiumTier;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            0 => Ok(PremiumType::None),
            1 => Ok(PremiumType::NitroClassic),
            2 => Ok(PremiumType::Nitro),
            _ => Err(InvalidPremiumTier(tier)),
        }
    }
}

impl fmt::Display for PremiumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn decode_premium_tier(tier: u8) -> Result<&'static str, InvalidPremiumTier> {
    PremiumType::try_from(tier).map(|premium_type| premium_type.label())
}
