//! Situation snapshots - what was observed about a commander, and when.

use chrono::{DateTime, Utc};
use commander_rules::{parse_journal_timestamp, CommanderState};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IntelError, IntelResult};

/// The kinds of situations that are gated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SituationKind {
    /// A commander showed up on the player's sensors.
    Blip,
    /// The player scanned a commander.
    Scan,
    /// A commander was sighted in the player's system.
    Traffic,
    /// A realtime alert about an outlaw or enemy elsewhere.
    Alert,
}

impl fmt::Display for SituationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SituationKind::Blip => "blip",
            SituationKind::Scan => "scan",
            SituationKind::Traffic => "traffic",
            SituationKind::Alert => "alert",
        };
        write!(f, "{}", name)
    }
}

/// An immutable observation of a commander.
///
/// Optional fields are ordered with absence below any value, so `None <
/// Some(false) < Some(true)` for `wanted` and `None < Some(0)` for `bounty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSituation")]
pub struct Situation {
    #[serde(serialize_with = "chrono::serde::ts_milliseconds::serialize")]
    pub timestamp: DateTime<Utc>,
    pub star_system: String,
    pub place: String,
    #[serde(rename = "ship")]
    pub vehicle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wanted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy: Option<bool>,
}

impl Situation {
    pub fn new(
        timestamp: DateTime<Utc>,
        star_system: impl Into<String>,
        place: impl Into<String>,
        vehicle: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            star_system: star_system.into(),
            place: place.into(),
            vehicle: vehicle.into(),
            wanted: None,
            bounty: None,
            enemy: None,
        }
    }

    pub fn with_wanted(mut self, wanted: bool) -> Self {
        self.wanted = Some(wanted);
        self
    }

    pub fn with_bounty(mut self, bounty: u64) -> Self {
        self.bounty = Some(bounty);
        self
    }

    pub fn with_enemy(mut self, enemy: bool) -> Self {
        self.enemy = Some(enemy);
        self
    }

    /// Snapshot a commander's whereabouts.
    ///
    /// `None` while the commander's status is partial or was never timestamped.
    pub fn of_commander(cmdr: &CommanderState) -> Option<Self> {
        if cmdr.has_partial_status() {
            return None;
        }
        Some(Self::new(
            cmdr.timestamp()?,
            cmdr.star_system()?,
            cmdr.place(),
            cmdr.vehicle()?,
        ))
    }

    /// Parse a situation from telemetry JSON.
    ///
    /// The timestamp is either a JS epoch in milliseconds or an RFC 3339
    /// journal timestamp. A situation without one is rejected.
    pub fn from_json_str(source: &str) -> IntelResult<Self> {
        let raw: RawSituation = serde_json::from_str(source)?;
        raw.try_into()
    }

    pub fn from_json_value(value: serde_json::Value) -> IntelResult<Self> {
        let raw: RawSituation = serde_json::from_value(value)?;
        raw.try_into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSituation {
    #[serde(default)]
    timestamp: Option<RawTimestamp>,
    #[serde(default)]
    star_system: String,
    #[serde(default)]
    place: String,
    #[serde(default, alias = "vehicle")]
    ship: String,
    #[serde(default)]
    wanted: Option<bool>,
    #[serde(default)]
    bounty: Option<u64>,
    #[serde(default)]
    enemy: Option<bool>,
}

impl TryFrom<RawSituation> for Situation {
    type Error = IntelError;

    fn try_from(raw: RawSituation) -> IntelResult<Self> {
        let timestamp = match raw.timestamp.ok_or(IntelError::MissingTimestamp)? {
            RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| IntelError::InvalidTimestamp(ms.to_string()))?,
            RawTimestamp::Text(text) => {
                parse_journal_timestamp(&text).map_err(|_| IntelError::InvalidTimestamp(text))?
            }
        };
        Ok(Self {
            timestamp,
            star_system: raw.star_system,
            place: raw.place,
            vehicle: raw.ship,
            wanted: raw.wanted,
            bounty: raw.bounty,
            enemy: raw.enemy,
        })
    }
}
