use super::util;
use chrono::{DateTime, TimeDelta, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Milliseconds between the Unix epoch and 2015-01-01T00:00:00Z.
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

/// The high 42 bits hold milliseconds since [`DISCORD_EPOCH`].
const TIMESTAMP_SHIFT: u64 = 22;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Unix time, in milliseconds, at which the ID was generated.
    pub fn timestamp_millis(&self) -> u64 {
        (self.0 >> TIMESTAMP_SHIFT) + DISCORD_EPOCH
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        // At most 2^42 ms past the epoch, well inside chrono's range
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(self.timestamp_millis() as i64)
    }

    pub fn timestamp(&self) -> SnowflakeTimestamp {
        SnowflakeTimestamp::from(self.created_at())
    }
}

/// Creation time of a snowflake in the three formats clients display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnowflakeTimestamp {
    /// RFC 1123, e.g. `Sat, 17 Mar 2018 16:34:25 GMT`
    #[serde(rename = "UTC")]
    pub utc: String,
    /// ISO 8601 with millisecond precision
    #[serde(rename = "ISO")]
    pub iso: String,
    /// Whole seconds since the Unix epoch
    #[serde(rename = "UNIX")]
    pub unix: i64,
}

impl From<DateTime<Utc>> for SnowflakeTimestamp {
    fn from(date: DateTime<Utc>) -> Self {
        SnowflakeTimestamp {
            utc: date.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            iso: date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            unix: date.timestamp(),
        }
    }
}

/// Decodes the creation time of a snowflake given in its decimal string form.
pub fn decode_timestamp(id: &str) -> Result<SnowflakeTimestamp, ParseIntError> {
    Ok(id.parse::<Snowflake>()?.timestamp())
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        if let Some(i) = value.as_u64() {
            return Ok(Snowflake(i));
        }

        if let Some(s) = value.as_str() {
            return Ok(Snowflake(s.parse().map_err(Error::custom)?));
        }

        Err(Error::invalid_type(
            util::to_unexpected(&value),
            &"a string or u64",
        ))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Snowflake(s.parse()?))
    }
}

impl From<u64> for Snowflake {
    fn from(x: u64) -> Self {
        Snowflake(x)
    }
}
