//! Dispatching situations through the gates to the collaborators that warn
//! the user and report to the backend.

use commander_rules::{Bounty, CommanderState};
use tracing::{debug, info, warn};

use crate::error::IntelResult;
use crate::novelty::IntelGates;
use crate::situation::{Situation, SituationKind};

/// What became of a report handed to an [`IntelSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// Deliberately not sent, e.g. the player reports anonymously. Counts as
    /// handled, so the situation becomes the baseline.
    Skipped,
    Failed,
}

/// The I/O side: user-facing notices and the reporting backend.
pub trait IntelSink {
    /// Tell the user about a dangerous commander.
    fn warn(&mut self, kind: SituationKind, key: &str, situation: &Situation);

    /// Tell the user about a commander who is not dangerous but carries a
    /// significant bounty.
    fn intel(&mut self, _kind: SituationKind, _key: &str, _situation: &Situation) {}

    /// Send a situation to the backend.
    fn report(&mut self, kind: SituationKind, key: &str, situation: &Situation) -> Delivery;
}

/// Which user-facing notice a situation earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Warning,
    Intel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    NotNovel,
    Reported,
    Skipped,
    /// The backend did not take it; the baseline is unchanged so the next
    /// identical situation is tried again.
    DeliveryFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub notice: Option<Notice>,
    pub report: ReportOutcome,
}

#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    gates: &'a IntelGates,
}

impl<'a> Dispatcher<'a> {
    pub fn new(gates: &'a IntelGates) -> Self {
        Self { gates }
    }

    /// Wanted with a bounty at or above the configured intel threshold.
    pub fn is_significant(&self, situation: &Situation) -> bool {
        let threshold = self.gates.config().intel_bounty_threshold;
        situation.wanted == Some(true)
            && situation
                .bounty
                .map(|credits| Bounty::new(credits).is_significant(threshold))
                .unwrap_or(false)
    }

    /// Squadron trust measured against the configured levels.
    pub fn is_trusted_by_squadron(&self, cmdr: &CommanderState) -> bool {
        cmdr.is_trusted_by_squadron(&self.gates.config().squadron)
    }

    pub fn is_empowered_by_squadron(&self, cmdr: &CommanderState) -> bool {
        cmdr.is_empowered_by_squadron(&self.gates.config().squadron)
    }

    /// Run one situation through the gates for `kind`.
    ///
    /// A `dangerous` subject, or one with a significant bounty, is first
    /// checked against the cognitive gate and, if novel, the user is notified
    /// and the cognitive baseline recorded. The broad gate then decides
    /// whether to report; its baseline is only recorded once the sink has
    /// handled the report.
    ///
    /// Each gate is locked separately for the check and for the record, so
    /// callers must serialize submissions for the same key; two concurrent
    /// submissions of one key may both be reported.
    pub fn submit(
        &self,
        kind: SituationKind,
        key: &str,
        situation: Situation,
        dangerous: bool,
        sink: &mut dyn IntelSink,
    ) -> DispatchOutcome {
        let notice = if dangerous {
            Some(Notice::Warning)
        } else if self.is_significant(&situation) {
            Some(Notice::Intel)
        } else {
            None
        };

        let notice = notice.filter(|notice| {
            let Some(cognitive) = self.gates.cognitive(kind) else {
                return false;
            };
            if !cognitive.accept(key, &situation) {
                return false;
            }
            match notice {
                Notice::Warning => sink.warn(kind, key, &situation),
                Notice::Intel => sink.intel(kind, key, &situation),
            }
            cognitive.record(key, situation.clone());
            true
        });

        let broad = self.gates.broad(kind);
        if !broad.accept(key, &situation) {
            debug!(%kind, key, "Skipping non-novel situation");
            return DispatchOutcome {
                notice,
                report: ReportOutcome::NotNovel,
            };
        }

        let report = match sink.report(kind, key, &situation) {
            Delivery::Delivered => {
                info!(%kind, key, system = %situation.star_system, "Reported situation");
                broad.record(key, situation);
                ReportOutcome::Reported
            }
            Delivery::Skipped => {
                debug!(%kind, key, "Report skipped by sink");
                broad.record(key, situation);
                ReportOutcome::Skipped
            }
            Delivery::Failed => {
                warn!(%kind, key, "Failed to report situation");
                ReportOutcome::DeliveryFailed
            }
        };

        DispatchOutcome { notice, report }
    }

    /// Parse telemetry JSON and submit it. A malformed situation is rejected
    /// before any gate sees it.
    pub fn submit_json(
        &self,
        kind: SituationKind,
        key: &str,
        source: &str,
        dangerous: bool,
        sink: &mut dyn IntelSink,
    ) -> IntelResult<DispatchOutcome> {
        let situation = Situation::from_json_str(source)?;
        Ok(self.submit(kind, key, situation, dangerous, sink))
    }
}
