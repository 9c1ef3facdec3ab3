//! The novelty decision itself, free of any cache or clock.

use chrono::Duration;
use commander_rules::UNKNOWN;
use serde::{Deserialize, Serialize};

use crate::config::saturating_secs;
use crate::situation::Situation;

/// How strictly repetition is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strictness {
    /// Backend reporting: each dimension has its own threshold.
    Broad,
    /// User-facing warnings: only location changes or the cognitive threshold count.
    Cognitive,
}

/// Which comparison a gate applies on top of the generic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoveltyRule {
    /// Wanted status and bounty only count when they escalate.
    Generic,
    /// Any change of wanted status or bounty counts, so scans surface
    /// paid-off bounties too.
    ScanForced,
}

/// Minimum elapsed time, per dimension, before a change is worth repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoveltyThresholds {
    pub system_secs: i64,
    pub place_secs: i64,
    pub vehicle_secs: i64,
    pub cognitive_secs: i64,
}

impl Default for NoveltyThresholds {
    fn default() -> Self {
        Self {
            system_secs: 30 * 60,
            place_secs: 15 * 60,
            vehicle_secs: 15 * 60,
            cognitive_secs: 10 * 60,
        }
    }
}

impl NoveltyThresholds {
    pub fn system(&self) -> Duration {
        saturating_secs(self.system_secs)
    }

    pub fn place(&self) -> Duration {
        saturating_secs(self.place_secs)
    }

    pub fn vehicle(&self) -> Duration {
        saturating_secs(self.vehicle_secs)
    }

    pub fn cognitive(&self) -> Duration {
        saturating_secs(self.cognitive_secs)
    }

    pub(crate) fn named_secs(&self) -> [(&'static str, i64); 4] {
        [
            ("novelty.system_secs", self.system_secs),
            ("novelty.place_secs", self.place_secs),
            ("novelty.vehicle_secs", self.vehicle_secs),
            ("novelty.cognitive_secs", self.cognitive_secs),
        ]
    }
}

fn is_unknown(value: &str) -> bool {
    value.is_empty() || value == UNKNOWN
}

/// Whether `new` is worth passing on given the last accepted `baseline`.
///
/// First match wins:
/// 1. no baseline;
/// 2. cognitive: system or place changed, or the cognitive threshold elapsed;
/// 3. system changed and the system threshold elapsed (a change alone is not
///    enough, which debounces rapid hops);
/// 4. place changed and was unknown, or the place threshold elapsed;
/// 5. vehicle changed and was unknown, or the vehicle threshold elapsed;
/// 6. wanted present and escalated;
/// 7. bounty present and escalated.
///
/// [`NoveltyRule::ScanForced`] then also accepts any wanted/bounty difference.
pub fn is_novel(
    new: &Situation,
    baseline: Option<&Situation>,
    strictness: Strictness,
    rule: NoveltyRule,
    thresholds: &NoveltyThresholds,
) -> bool {
    let Some(old) = baseline else {
        return true;
    };
    if situation_is_novel(new, old, strictness, thresholds) {
        return true;
    }
    match rule {
        NoveltyRule::Generic => false,
        NoveltyRule::ScanForced => new.wanted != old.wanted || new.bounty != old.bounty,
    }
}

fn situation_is_novel(
    new: &Situation,
    old: &Situation,
    strictness: Strictness,
    thresholds: &NoveltyThresholds,
) -> bool {
    let elapsed = new.timestamp - old.timestamp;

    if strictness == Strictness::Cognitive {
        return new.star_system != old.star_system
            || new.place != old.place
            || elapsed > thresholds.cognitive();
    }

    if new.star_system != old.star_system {
        return elapsed > thresholds.system();
    }

    if new.place != old.place {
        return is_unknown(&old.place) || elapsed > thresholds.place();
    }

    if new.vehicle != old.vehicle {
        return is_unknown(&old.vehicle) || elapsed > thresholds.vehicle();
    }

    if new.wanted.is_some() {
        return new.wanted > old.wanted;
    }

    if new.bounty.is_some() {
        return new.bounty > old.bounty;
    }

    false
}
