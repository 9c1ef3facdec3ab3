//! Powerplay pledges and the enmity rule between powers.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Umbrella factions that several powers belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Superfaction {
    Empire,
    Federation,
    Alliance,
}

/// Canonical form of a power name: lowercase, no internal whitespace.
pub fn canonical_power_name(power: &str) -> String {
    power.trim().to_lowercase().replace(' ', "_")
}

/// Looks up a canonical power name.
///
/// `None` means the power is unknown. `Some(None)` means a known power
/// without a parent superfaction.
pub fn superfaction_of(canonical: &str) -> Option<Option<Superfaction>> {
    let superfaction = match canonical {
        "a_lavigny-duval" | "arissa_lavigny_duval" => Some(Superfaction::Empire),
        "aisling_duval" => Some(Superfaction::Empire),
        "denton_patreus" => Some(Superfaction::Empire),
        "zemina_torval" => Some(Superfaction::Empire),
        "edmund_mahon" => Some(Superfaction::Alliance),
        "felicia_winters" => Some(Superfaction::Federation),
        "zachary_hudson" => Some(Superfaction::Federation),
        "archon_delaine" | "li_yong-rui" | "pranav_antal" | "yuri_grom" => None,
        _ => return None,
    };
    Some(superfaction)
}

/// A pledge to one of the powers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerAffiliation {
    pledged_to: String,
    pledged_since: DateTime<Utc>,
}

impl PowerAffiliation {
    /// Pledge to `power`, back-dated by however long the pledge already lasted.
    pub fn new(power: &str, time_already_pledged: Duration, now: DateTime<Utc>) -> Self {
        Self {
            pledged_to: canonical_power_name(power),
            pledged_since: now - time_already_pledged,
        }
    }

    pub fn canonical_name(&self) -> &str {
        &self.pledged_to
    }

    pub fn pledged_since(&self) -> DateTime<Utc> {
        self.pledged_since
    }

    pub fn time_pledged(&self, now: DateTime<Utc>) -> Duration {
        now - self.pledged_since
    }

    pub fn superfaction(&self) -> Option<Superfaction> {
        superfaction_of(&self.pledged_to).flatten()
    }

    /// Whether pledges to `other` are fair game for us.
    ///
    /// Unknown powers are never enemies. Powers without a superfaction are at
    /// odds with every other known power; otherwise enmity follows the
    /// superfactions.
    pub fn is_enemy_of(&self, other: &str) -> bool {
        let other = canonical_power_name(other);
        if other == self.pledged_to {
            return false;
        }
        let (Some(mine), Some(theirs)) = (superfaction_of(&self.pledged_to), superfaction_of(&other))
        else {
            return false;
        };
        match mine {
            None => true,
            Some(mine) => Some(mine) != theirs,
        }
    }

    /// Short display name, e.g. "Winters". Falls back to the canonical name.
    pub fn short_name(&self) -> &str {
        match self.pledged_to.as_str() {
            "a_lavigny-duval" | "arissa_lavigny_duval" => "Lavigny",
            "aisling_duval" => "Aisling",
            "archon_delaine" => "Archon",
            "denton_patreus" => "Patreus",
            "edmund_mahon" => "Mahon",
            "felicia_winters" => "Winters",
            "li_yong-rui" => "Li Yong-rui",
            "pranav_antal" => "Antal",
            "yuri_grom" => "Yuri",
            "zachary_hudson" => "Zachary",
            "zemina_torval" => "Zemina",
            other => other,
        }
    }

    // TODO: accrue trust with time pledged once a policy for it is agreed on.
    pub fn is_somewhat_trusted(&self) -> bool {
        false
    }

    pub fn is_fully_trusted(&self) -> bool {
        false
    }
}
