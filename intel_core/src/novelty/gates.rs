//! The full set of gates, one broad gate per situation kind plus cognitive
//! gates for the kinds that can warn the user.

use std::sync::Arc;

use super::gate::NoveltyGate;
use super::rules::{NoveltyRule, Strictness};
use crate::clock::Clock;
use crate::config::IntelConfig;
use crate::situation::{Situation, SituationKind};

#[derive(Debug)]
pub struct IntelGates {
    config: IntelConfig,
    blips: NoveltyGate,
    cognitive_blips: NoveltyGate,
    scans: NoveltyGate,
    cognitive_scans: NoveltyGate,
    traffic: NoveltyGate,
    alerts: NoveltyGate,
}

impl IntelGates {
    pub fn new(config: &IntelConfig, clock: Arc<dyn Clock>) -> Self {
        let caches = &config.caches;
        let gate = |kind, strictness, rule, cache| {
            NoveltyGate::new(kind, strictness, rule, config.novelty, cache, clock.clone())
        };

        Self {
            config: config.clone(),
            blips: gate(SituationKind::Blip, Strictness::Broad, NoveltyRule::Generic, caches.blips),
            cognitive_blips: gate(
                SituationKind::Blip,
                Strictness::Cognitive,
                NoveltyRule::Generic,
                caches.cognitive_blips,
            ),
            scans: gate(SituationKind::Scan, Strictness::Broad, NoveltyRule::ScanForced, caches.scans),
            cognitive_scans: gate(
                SituationKind::Scan,
                Strictness::Cognitive,
                NoveltyRule::ScanForced,
                caches.cognitive_scans,
            ),
            traffic: gate(SituationKind::Traffic, Strictness::Broad, NoveltyRule::Generic, caches.traffic),
            alerts: gate(SituationKind::Alert, Strictness::Broad, NoveltyRule::Generic, caches.alerts),
        }
    }

    /// The configuration the gates were built from.
    pub fn config(&self) -> &IntelConfig {
        &self.config
    }

    /// The gate for `kind` at `strictness`. Traffic and alerts have no
    /// cognitive gate.
    pub fn gate(&self, kind: SituationKind, strictness: Strictness) -> Option<&NoveltyGate> {
        match (kind, strictness) {
            (SituationKind::Blip, Strictness::Broad) => Some(&self.blips),
            (SituationKind::Blip, Strictness::Cognitive) => Some(&self.cognitive_blips),
            (SituationKind::Scan, Strictness::Broad) => Some(&self.scans),
            (SituationKind::Scan, Strictness::Cognitive) => Some(&self.cognitive_scans),
            (SituationKind::Traffic, Strictness::Broad) => Some(&self.traffic),
            (SituationKind::Alert, Strictness::Broad) => Some(&self.alerts),
            (SituationKind::Traffic | SituationKind::Alert, Strictness::Cognitive) => None,
        }
    }

    pub fn broad(&self, kind: SituationKind) -> &NoveltyGate {
        match kind {
            SituationKind::Blip => &self.blips,
            SituationKind::Scan => &self.scans,
            SituationKind::Traffic => &self.traffic,
            SituationKind::Alert => &self.alerts,
        }
    }

    pub fn cognitive(&self, kind: SituationKind) -> Option<&NoveltyGate> {
        self.gate(kind, Strictness::Cognitive)
    }

    /// `false` when there is no such gate.
    pub fn accept(&self, kind: SituationKind, strictness: Strictness, key: &str, situation: &Situation) -> bool {
        self.gate(kind, strictness)
            .map(|gate| gate.accept(key, situation))
            .unwrap_or(false)
    }

    /// No-op when there is no such gate.
    pub fn record(&self, kind: SituationKind, strictness: Strictness, key: &str, situation: Situation) {
        if let Some(gate) = self.gate(kind, strictness) {
            gate.record(key, situation);
        }
    }
}
