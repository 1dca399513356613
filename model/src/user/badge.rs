use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Profile badges exposed through a user's public flags.
///
/// Bits 4, 5, 11, 13 and 15 are deprecated or reserved and have no badge.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u64)]
pub enum Badge {
    DiscordEmployee = 1 << 0,
    PartneredServerOwner = 1 << 1,
    HypeSquadEvents = 1 << 2,
    BugHunterLevel1 = 1 << 3,
    HouseBravery = 1 << 6,
    HouseBrilliance = 1 << 7,
    HouseBalance = 1 << 8,
    EarlySupporter = 1 << 9,
    TeamUser = 1 << 10,
    System = 1 << 12,
    BugHunterLevel2 = 1 << 14,
    VerifiedBot = 1 << 16,
    EarlyVerifiedBotDeveloper = 1 << 17,
}

impl Badge {
    /// Every badge, in the order they are reported.
    pub const ALL: [Badge; 13] = [
        Badge::DiscordEmployee,
        Badge::PartneredServerOwner,
        Badge::HypeSquadEvents,
        Badge::BugHunterLevel1,
        Badge::HouseBravery,
        Badge::HouseBrilliance,
        Badge::HouseBalance,
        Badge::EarlySupporter,
        Badge::TeamUser,
        Badge::System,
        Badge::BugHunterLevel2,
        Badge::VerifiedBot,
        Badge::EarlyVerifiedBotDeveloper,
    ];

    pub fn bit(&self) -> u64 {
        *self as u64
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::DiscordEmployee => "Discord Employee",
            Badge::PartneredServerOwner => "Partnered Server Owner",
            Badge::HypeSquadEvents => "HypeSquad Events",
            Badge::BugHunterLevel1 => "Bug Hunter Level 1",
            Badge::HouseBravery => "House Bravery",
            Badge::HouseBrilliance => "House Brilliance",
            Badge::HouseBalance => "House Balance",
            Badge::EarlySupporter => "Early Supporter",
            Badge::TeamUser => "Team User",
            Badge::System => "System",
            Badge::BugHunterLevel2 => "Bug Hunter Level 2",
            Badge::VerifiedBot => "Verified Bot",
            Badge::EarlyVerifiedBotDeveloper => "Early Verified Bot Developer",
        }
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[serde(transparent)]
pub struct UserFlags(pub u64);

impl UserFlags {
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.0 & badge.bit() != 0
    }

    /// Badges whose bit is set, in [`Badge::ALL`] order. Unknown bits are ignored.
    pub fn badges(&self) -> Vec<Badge> {
        Badge::ALL
            .iter()
            .copied()
            .filter(|badge| self.has_badge(*badge))
            .collect()
    }
}

impl From<u64> for UserFlags {
    fn from(mask: u64) -> Self {
        UserFlags(mask)
    }
}

pub fn decode_badges(mask: u64) -> Vec<&'static str> {
    UserFlags(mask)
        .badges()
        .iter()
        .map(Badge::label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_houses() {
        assert!(decode_badges(256).contains(&"House Balance"));
        assert!(decode_badges(128).contains(&"House Brilliance"));
        assert!(decode_badges(64).contains(&"House Bravery"));
    }

    #[test]
    fn test_empty() {
        assert!(decode_badges(0).is_empty());
    }

    #[test]
    fn test_table_order() {
        let mask = Badge::EarlyVerifiedBotDeveloper.bit()
            | Badge::DiscordEmployee.bit()
            | Badge::HouseBalance.bit();

        assert_eq!(
            decode_badges(mask),
            vec!["Discord Employee", "House Balance", "Early Verified Bot Developer"]
        );
    }

    #[test]
    fn test_reserved_bits_ignored() {
        let reserved = (1 << 4) | (1 << 5) | (1 << 11) | (1 << 13) | (1 << 15) | (1 << 40);
        assert!(decode_badges(reserved).is_empty());
        assert_eq!(decode_badges(reserved | 1), vec!["Discord Employee"]);
    }

    #[test]
    fn test_all_bits() {
        let all = UserFlags(u64::MAX).badges();
        assert_eq!(all, Badge::ALL.to_vec());
    }

    #[test]
    fn test_serialize_labels() {
        let json = serde_json::to_string(&UserFlags(1 << 9).badges()).unwrap();
        assert_eq!(json, r#"["Early Supporter"]"#);
    }
}
