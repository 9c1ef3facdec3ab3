//! Game mechanics: session modes, security levels, locations, bounties and
//! journal time.

mod vehicles;

pub use vehicles::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RulesError, RulesResult};

/// Game session modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Solo,
    /// Private group.
    Group,
    Open,
}

/// Security level of a star system, as reported by the journal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityState {
    High,
    Medium,
    Low,
    Anarchy,
    Lawless,
    /// Anything the journal reports that we don't know about yet.
    Other(String),
}

impl SecurityState {
    /// Map a journal security symbol (e.g. `$GALAXY_MAP_INFO_state_anarchy;`).
    pub fn from_journal(symbol: &str) -> Self {
        let lowered = symbol.to_lowercase();
        let state = lowered
            .trim_start_matches("$galaxy_map_info_state_")
            .trim_start_matches("$system_security_")
            .trim_end_matches(';');
        match state {
            "high" => SecurityState::High,
            "medium" => SecurityState::Medium,
            "low" => SecurityState::Low,
            "anarchy" => SecurityState::Anarchy,
            "lawless" => SecurityState::Lawless,
            _ => SecurityState::Other(symbol.to_string()),
        }
    }

    /// Whether local authorities will not respond to crimes here.
    pub fn is_anarchy_or_lawless(&self) -> bool {
        matches!(self, SecurityState::Anarchy | SecurityState::Lawless)
    }
}

/// Where a commander is: a star system, an optional place within it and the
/// system's security.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub star_system: Option<String>,
    pub place: Option<String>,
    pub security: Option<SecurityState>,
}

impl Location {
    pub fn new(star_system: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            star_system: Some(star_system.into()),
            place: Some(place.into()),
            security: None,
        }
    }

    pub fn is_anarchy_or_lawless(&self) -> bool {
        self.security
            .as_ref()
            .map(SecurityState::is_anarchy_or_lawless)
            .unwrap_or(false)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let system = self.star_system.as_deref().unwrap_or(UNKNOWN);
        write!(f, "{}", system)?;
        match self.place.as_deref() {
            Some(place) if !place.is_empty() && place != system => {
                // "Sol Abraham Lincoln" reads better as "Sol, Abraham Lincoln"
                let prefix = format!("{} ", system);
                let place = place.strip_prefix(prefix.as_str()).unwrap_or(place);
                write!(f, ", {}", place)
            }
            _ => Ok(()),
        }
    }
}

/// Order of magnitude of a bounty, used to pick a compact rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BountyMagnitude {
    Credits,
    Thousands,
    Millions,
    Billions,
}

/// A bounty in credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bounty(pub u64);

impl Bounty {
    pub fn new(credits: u64) -> Self {
        Self(credits)
    }

    pub fn credits(&self) -> u64 {
        self.0
    }

    /// Whether the bounty reaches the configured intel threshold.
    pub fn is_significant(&self, threshold: u64) -> bool {
        self.0 >= threshold
    }

    pub fn magnitude(&self) -> BountyMagnitude {
        match self.0 {
            v if v >= 1_000_000_000 => BountyMagnitude::Billions,
            v if v > 1_000_000 => BountyMagnitude::Millions,
            v if v >= 1_000 => BountyMagnitude::Thousands,
            _ => BountyMagnitude::Credits,
        }
    }

    /// Compact rendering: whole units from ten of a magnitude up, one decimal below.
    pub fn short_form(&self) -> String {
        let v = self.0;
        if v >= 10_000_000_000 {
            format!("{} b", v / 1_000_000_000)
        } else if v >= 1_000_000_000 {
            format!("{:.1} b", v as f64 / 1_000_000_000.0)
        } else if v >= 10_000_000 {
            format!("{} m", v / 1_000_000)
        } else if v > 1_000_000 {
            format!("{:.1} m", v as f64 / 1_000_000.0)
        } else if v >= 10_000 {
            format!("{} k", v / 1_000)
        } else if v >= 1_000 {
            format!("{:.1} k", v as f64 / 1_000.0)
        } else {
            format!("{}", v)
        }
    }
}

impl fmt::Display for Bounty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_form())
    }
}

/// Parse a journal timestamp such as `2018-03-01T12:00:00Z`.
pub fn parse_journal_timestamp(value: &str) -> RulesResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RulesError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
