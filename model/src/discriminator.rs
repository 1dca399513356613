use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Formatter;
use std::num::ParseIntError;
use std::str::FromStr;

/// A user's discriminator, kept exactly as Discord sent it. Migrated
/// accounts report `"0"`, older ones a zero-padded `"0001"`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Discriminator {
    raw: String,
    value: u16,
}

impl Discriminator {
    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Discriminator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Discriminator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(Error::custom)
    }
}

impl FromStr for Discriminator {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Discriminator {
            raw: s.to_string(),
            value: s.parse()?,
        })
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
