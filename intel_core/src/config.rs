//! Configuration for the novelty gates.

use chrono::Duration;
use commander_rules::SquadronTrust;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{IntelError, IntelResult};
use crate::novelty::NoveltyThresholds;

/// Whole seconds as a duration, clamped to `[0, Duration::MAX]`.
pub(crate) fn saturating_secs(secs: i64) -> Duration {
    if secs < 0 {
        return Duration::zero();
    }
    Duration::try_seconds(secs).unwrap_or(Duration::MAX)
}

fn check_secs(key: &str, secs: i64) -> IntelResult<()> {
    match Duration::try_seconds(secs) {
        Some(_) if secs >= 0 => Ok(()),
        _ => Err(IntelError::InvalidConfig {
            key: key.to_string(),
            value: secs,
        }),
    }
}

/// Sizing of one recency cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub max_size: usize,
    pub max_age_secs: i64,
}

impl CacheConfig {
    pub fn new(max_size: usize, max_age_secs: i64) -> Self {
        Self {
            max_size,
            max_age_secs,
        }
    }

    pub fn max_age(&self) -> Duration {
        saturating_secs(self.max_age_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(1000, 30 * 60)
    }
}

/// One cache per gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub blips: CacheConfig,
    pub cognitive_blips: CacheConfig,
    pub scans: CacheConfig,
    pub cognitive_scans: CacheConfig,
    pub traffic: CacheConfig,
    pub alerts: CacheConfig,
}

impl CacheSettings {
    fn named(&self) -> [(&'static str, &CacheConfig); 6] {
        [
            ("caches.blips.max_age_secs", &self.blips),
            ("caches.cognitive_blips.max_age_secs", &self.cognitive_blips),
            ("caches.scans.max_age_secs", &self.scans),
            ("caches.cognitive_scans.max_age_secs", &self.cognitive_scans),
            ("caches.traffic.max_age_secs", &self.traffic),
            ("caches.alerts.max_age_secs", &self.alerts),
        ]
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            blips: CacheConfig::default(),
            cognitive_blips: CacheConfig::default(),
            scans: CacheConfig::default(),
            cognitive_scans: CacheConfig::default(),
            traffic: CacheConfig::default(),
            alerts: CacheConfig::new(1000, 10 * 60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelConfig {
    pub novelty: NoveltyThresholds,
    pub caches: CacheSettings,
    pub squadron: SquadronTrust,
    /// Bounties at or above this many credits are worth calling out.
    pub intel_bounty_threshold: u64,
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            novelty: NoveltyThresholds::default(),
            caches: CacheSettings::default(),
            squadron: SquadronTrust::default(),
            intel_bounty_threshold: 1_000_000,
        }
    }
}

impl IntelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> IntelResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Every threshold and max age must be a non-negative number of seconds
    /// that fits in a [`Duration`].
    pub fn validate(&self) -> IntelResult<()> {
        for (key, secs) in self.novelty.named_secs() {
            check_secs(key, secs)?;
        }
        for (key, cache) in self.caches.named() {
            check_secs(key, cache.max_age_secs)?;
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> IntelResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), "Loaded intel config");
        Ok(config)
    }
}
