//! A single novelty gate: one rule, one cache of last accepted situations.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use super::rules::{is_novel, NoveltyRule, NoveltyThresholds, Strictness};
use crate::cache::RecencyCache;
use crate::clock::Clock;
use crate::config::CacheConfig;
use crate::situation::{Situation, SituationKind};

/// Remembers the last accepted situation per subject and tells whether a new
/// one is worth passing on.
///
/// `accept` only reads. The caller decides whether the situation was actually
/// delivered and then calls `record`, so a failed delivery leaves the
/// baseline untouched and the same situation is accepted again next time.
pub struct NoveltyGate {
    kind: SituationKind,
    strictness: Strictness,
    rule: NoveltyRule,
    thresholds: NoveltyThresholds,
    cache: Mutex<RecencyCache<String, Situation>>,
    clock: Arc<dyn Clock>,
}

impl NoveltyGate {
    pub fn new(
        kind: SituationKind,
        strictness: Strictness,
        rule: NoveltyRule,
        thresholds: NoveltyThresholds,
        cache: CacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            kind,
            strictness,
            rule,
            thresholds,
            cache: Mutex::new(RecencyCache::new(cache.max_size, cache.max_age())),
            clock,
        }
    }

    pub fn kind(&self) -> SituationKind {
        self.kind
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn rule(&self) -> NoveltyRule {
        self.rule
    }

    /// Whether `situation` is novel for `key`. Never touches the cache.
    ///
    /// The lock is released before returning, so a later [`record`](Self::record)
    /// is not atomic with this check.
    pub fn accept(&self, key: &str, situation: &Situation) -> bool {
        let baseline = self.baseline(key);

        if let Some(old) = &baseline {
            if situation.timestamp < old.timestamp {
                warn!(
                    kind = %self.kind,
                    key,
                    "Situation is older than its baseline"
                );
            }
        }

        let novel = is_novel(
            situation,
            baseline.as_ref(),
            self.strictness,
            self.rule,
            &self.thresholds,
        );
        debug!(
            kind = %self.kind,
            strictness = ?self.strictness,
            key,
            novel,
            "Novelty verdict"
        );
        novel
    }

    /// Make `situation` the baseline for `key`.
    pub fn record(&self, key: &str, situation: Situation) {
        let now = self.clock.now();
        self.cache.lock().set(key.to_string(), situation, now);
    }

    /// The last recorded situation for `key`, if it has not aged out.
    pub fn baseline(&self, key: &str) -> Option<Situation> {
        let now = self.clock.now();
        self.cache.lock().peek(&key.to_string(), now).cloned()
    }

    /// Drop the baseline for `key`.
    pub fn forget(&self, key: &str) -> Option<Situation> {
        self.cache.lock().remove(&key.to_string())
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl fmt::Debug for NoveltyGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoveltyGate")
            .field("kind", &self.kind)
            .field("strictness", &self.strictness)
            .field("rule", &self.rule)
            .field("thresholds", &self.thresholds)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{DateTime, Duration, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn gate(clock: Arc<ManualClock>, cache: CacheConfig) -> NoveltyGate {
        let thresholds = NoveltyThresholds {
            place_secs: 3600,
            ..NoveltyThresholds::default()
        };
        NoveltyGate::new(
            SituationKind::Blip,
            Strictness::Broad,
            NoveltyRule::Generic,
            thresholds,
            cache,
            clock,
        )
    }

    #[test]
    fn test_accept_then_record() {
        let clock = Arc::new(ManualClock::default());
        let gate = gate(clock, CacheConfig::default());

        let first = Situation::new(at(0), "Sol", "Unknown", "Unknown");
        assert!(gate.accept("bob", &first));
        gate.record("bob", first.clone());
        assert!(!gate.accept("bob", &first));

        let learned = Situation::new(at(10), "Sol", "Abraham Lincoln", "Unknown");
        assert!(gate.accept("bob", &learned));
        gate.record("bob", learned);

        let repeated = Situation::new(at(15), "Sol", "Abraham Lincoln", "Unknown");
        assert!(!gate.accept("bob", &repeated));
    }

    #[test]
    fn test_accept_does_not_record() {
        let clock = Arc::new(ManualClock::default());
        let gate = gate(clock, CacheConfig::default());
        let situation = Situation::new(at(0), "Sol", "Unknown", "Unknown");

        assert!(gate.accept("bob", &situation));
        assert!(gate.accept("bob", &situation));
        assert!(gate.is_empty());
        assert!(gate.baseline("bob").is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let clock = Arc::new(ManualClock::default());
        let gate = gate(clock, CacheConfig::default());
        let situation = Situation::new(at(0), "Sol", "Unknown", "Unknown");

        gate.record("bob", situation.clone());
        assert!(!gate.accept("bob", &situation));
        assert!(gate.accept("alice", &situation));
    }

    #[test]
    fn test_baseline_ages_out() {
        let clock = Arc::new(ManualClock::default());
        let gate = gate(clock.clone(), CacheConfig::new(10, 60));
        let situation = Situation::new(at(0), "Sol", "Unknown", "Unknown");

        gate.record("bob", situation.clone());
        clock.advance(Duration::seconds(61));

        assert!(gate.baseline("bob").is_none());
        assert!(gate.accept("bob", &situation));
    }

    #[test]
    fn test_capacity_forgets_oldest_subject() {
        let clock = Arc::new(ManualClock::default());
        let gate = gate(clock, CacheConfig::new(2, 600));
        let situation = Situation::new(at(0), "Sol", "Unknown", "Unknown");

        gate.record("a", situation.clone());
        gate.record("b", situation.clone());
        gate.record("c", situation.clone());

        assert_eq!(gate.len(), 2);
        assert!(gate.accept("a", &situation));
        assert!(!gate.accept("c", &situation));
    }

    #[test]
    fn test_forget() {
        let clock = Arc::new(ManualClock::default());
        let gate = gate(clock, CacheConfig::default());
        let situation = Situation::new(at(0), "Sol", "Unknown", "Unknown");

        gate.record("bob", situation.clone());
        assert_eq!(gate.forget("bob"), Some(situation.clone()));
        assert!(gate.accept("bob", &situation));
    }

    #[test]
    fn test_out_of_order_situation_is_rejected() {
        let clock = Arc::new(ManualClock::default());
        let gate = gate(clock, CacheConfig::default());

        gate.record("bob", Situation::new(at(10_000), "Sol", "Abraham Lincoln", "Anaconda"));
        let stale = Situation::new(at(0), "Alpha Centauri", "Hutton Orbital", "Anaconda");
        assert!(!gate.accept("bob", &stale));
    }

    #[test]
    fn test_gate_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoveltyGate>();
    }
}
