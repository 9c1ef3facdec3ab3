//! Squadron membership and trust tiers.

use serde::{Deserialize, Serialize};

/// A named rank and the numeric level it corresponds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustLevel {
    pub rank: String,
    pub level: i64,
}

impl TrustLevel {
    pub fn new(rank: impl Into<String>, level: i64) -> Self {
        Self {
            rank: rank.into(),
            level,
        }
    }
}

/// The two thresholds a squadron grants trust at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadronTrust {
    pub somewhat_trusted: TrustLevel,
    pub fully_trusted: TrustLevel,
}

impl Default for SquadronTrust {
    fn default() -> Self {
        Self {
            somewhat_trusted: TrustLevel::new("wingman", 100),
            fully_trusted: TrustLevel::new("co-pilot", 300),
        }
    }
}

/// Membership in a squadron, as reported by the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadronMembership {
    #[serde(default)]
    pub squadron_name: Option<String>,
    #[serde(default)]
    pub squadron_id: Option<i64>,
    #[serde(default)]
    pub squadron_rank: Option<String>,
    #[serde(default)]
    pub squadron_level: Option<i64>,
    #[serde(default)]
    pub heartbeat: Option<i64>,
}

/// The identifying part of a membership, without the heartbeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadronInfo {
    pub squadron_name: Option<String>,
    pub squadron_id: Option<i64>,
    pub squadron_rank: Option<String>,
    pub squadron_level: Option<i64>,
}

impl SquadronMembership {
    pub fn new(name: impl Into<String>, id: i64, rank: impl Into<String>, level: i64) -> Self {
        Self {
            squadron_name: Some(name.into()),
            squadron_id: Some(id),
            squadron_rank: Some(rank.into()),
            squadron_level: Some(level),
            heartbeat: None,
        }
    }

    /// An unknown level grants no trust.
    pub fn is_somewhat_trusted(&self, trust: &SquadronTrust) -> bool {
        self.squadron_level
            .map(|level| level >= trust.somewhat_trusted.level)
            .unwrap_or(false)
    }

    pub fn is_fully_trusted(&self, trust: &SquadronTrust) -> bool {
        self.squadron_level
            .map(|level| level >= trust.fully_trusted.level)
            .unwrap_or(false)
    }

    pub fn info(&self) -> SquadronInfo {
        SquadronInfo {
            squadron_name: self.squadron_name.clone(),
            squadron_id: self.squadron_id,
            squadron_rank: self.squadron_rank.clone(),
            squadron_level: self.squadron_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_thresholds() {
        let trust = SquadronTrust::default();

        let recruit = SquadronMembership::new("Hutton Truckers", 42, "recruit", 50);
        assert!(!recruit.is_somewhat_trusted(&trust));
        assert!(!recruit.is_fully_trusted(&trust));

        let wingman = SquadronMembership::new("Hutton Truckers", 42, "wingman", 100);
        assert!(wingman.is_somewhat_trusted(&trust));
        assert!(!wingman.is_fully_trusted(&trust));

        let copilot = SquadronMembership::new("Hutton Truckers", 42, "co-pilot", 300);
        assert!(copilot.is_somewhat_trusted(&trust));
        assert!(copilot.is_fully_trusted(&trust));
    }

    #[test]
    fn test_unknown_level_is_untrusted() {
        let membership = SquadronMembership {
            squadron_name: Some("Hutton Truckers".into()),
            ..Default::default()
        };
        assert!(!membership.is_somewhat_trusted(&SquadronTrust::default()));
    }

    #[test]
    fn test_custom_thresholds() {
        let trust = SquadronTrust {
            somewhat_trusted: TrustLevel::new("member", 10),
            fully_trusted: TrustLevel::new("officer", 20),
        };
        let membership = SquadronMembership::new("Small Wing", 1, "officer", 20);
        assert!(membership.is_fully_trusted(&trust));
    }

    #[test]
    fn test_deserialize_from_profile_fields() {
        let membership: SquadronMembership = serde_json::from_str(
            r#"{"squadronName": "Hutton Truckers", "squadronId": 7, "squadronRank": "co-pilot",
                "squadronLevel": 300, "heartbeat": 1520000000}"#,
        )
        .unwrap();

        assert_eq!(membership.squadron_name.as_deref(), Some("Hutton Truckers"));
        assert_eq!(membership.heartbeat, Some(1_520_000_000));

        let info = serde_json::to_value(membership.info()).unwrap();
        assert_eq!(info["squadronRank"], "co-pilot");
        assert_eq!(info["squadronLevel"], 300);
        assert!(info.get("heartbeat").is_none());
    }
}
