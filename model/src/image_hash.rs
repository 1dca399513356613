use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Hashes of animated images carry this prefix.
const ANIMATED_PREFIX: &str = "a_";
const HASH_LENGTH: usize = 32;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0:?} is not a 32 character lowercase hex image hash")]
pub struct InvalidImageHash(pub String);

/// A CDN image hash. Only 32 lowercase hex digits are accepted, so the value
/// prints back exactly as Discord sent it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageHash {
    pub animated: bool,
    data: u128,
}

impl FromStr for ImageHash {
    type Err = InvalidImageHash;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (animated, hash) = match raw.strip_prefix(ANIMATED_PREFIX) {
            Some(hash) => (true, hash),
            None => (false, raw),
        };

        let is_canonical = hash.len() == HASH_LENGTH
            && hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !is_canonical {
            return Err(InvalidImageHash(raw.to_string()));
        }

        let data = u128::from_str_radix(hash, 16).map_err(|_| InvalidImageHash(raw.to_string()))?;
        Ok(ImageHash { animated, data })
    }
}

impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.animated {
            write!(f, "{}{:032x}", ANIMATED_PREFIX, self.data)
        } else {
            write!(f, "{:032x}", self.data)
        }
    }
}

impl Serialize for ImageHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ImageHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(Error::custom)
    }
}
