//! Commander state: identity, whereabouts and group affiliations over a session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::{CrewSession, PowerAffiliation, SquadronInfo, SquadronMembership, SquadronTrust};
use crate::error::{RulesError, RulesResult};
use crate::mechanics::{GameMode, Location, SecurityState, VehicleCanonicalizer, UNKNOWN};

/// What a commander had going on when they were destroyed, restored on resurrection.
///
/// There is a single slot: dying again before resurrecting replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspendedSession {
    pub mode: Option<GameMode>,
    pub wing: HashSet<String>,
}

/// The current state of one commander.
///
/// Wing and crew are exclusive: joining one clears the other. While destroyed,
/// mode, wing and crew are cleared and the first two are parked in a
/// [`SuspendedSession`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommanderState {
    name: String,
    /// Canonical vehicle name; `None` until telemetry reports one.
    vehicle: Option<String>,
    location: Location,
    game_mode: Option<GameMode>,
    wing: HashSet<String>,
    friends: HashSet<String>,
    crew: Option<CrewSession>,
    /// `None` means independent.
    power: Option<PowerAffiliation>,
    /// `None` means lone wolf.
    squadron: Option<SquadronMembership>,
    suspended: Option<SuspendedSession>,
    target: Option<String>,
    from_birth: bool,
    timestamp: Option<DateTime<Utc>>,
}

impl CommanderState {
    /// Create a commander with nothing known beyond their name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vehicle: None,
            location: Location::default(),
            game_mode: None,
            wing: HashSet::new(),
            friends: HashSet::new(),
            crew: None,
            power: None,
            squadron: None,
            suspended: None,
            target: None,
            from_birth: false,
            timestamp: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // Session lifecycle

    /// Start of a game session. Identity, power and squadron survive.
    pub fn inception(&mut self) {
        self.from_birth = true;
        self.game_mode = None;
        self.suspended = None;
        self.wing.clear();
        self.crew = None;
        self.target = None;
        self.debug_check_invariants();
    }

    pub fn killed(&mut self) {
        if self.suspended.is_some() {
            warn!(cmdr = %self.name, "Destroyed again before resurrecting; previous session is lost");
        }
        self.suspended = Some(SuspendedSession {
            mode: self.game_mode.take(),
            wing: std::mem::take(&mut self.wing),
        });
        self.crew = None;
        self.target = None;
        self.debug_check_invariants();
    }

    /// A crew formed while destroyed takes precedence over the wing parked at death.
    pub fn resurrect(&mut self) -> RulesResult<()> {
        let Some(suspended) = self.suspended.take() else {
            warn!(cmdr = %self.name, "Resurrect requested for a commander who is alive");
            return Err(RulesError::NotDestroyed(self.name.clone()));
        };
        self.game_mode = suspended.mode;
        if self.in_multi_member_crew() {
            warn!(cmdr = %self.name, "Resurrected aboard a crew; previous wing is dropped");
        } else {
            self.wing = suspended.wing;
        }
        self.target = None;
        self.debug_check_invariants();
        Ok(())
    }

    pub fn is_alive(&self) -> bool {
        self.suspended.is_none()
    }

    pub fn is_destroyed(&self) -> bool {
        self.suspended.is_some()
    }

    pub fn suspended_session(&self) -> Option<&SuspendedSession> {
        self.suspended.as_ref()
    }

    pub fn from_birth(&self) -> bool {
        self.from_birth
    }

    // Game mode

    pub fn game_mode(&self) -> Option<GameMode> {
        self.game_mode
    }

    pub fn set_game_mode(&mut self, mode: Option<GameMode>) {
        self.game_mode = mode;
    }

    pub fn in_solo_or_private(&self) -> bool {
        matches!(self.game_mode, Some(GameMode::Solo) | Some(GameMode::Group))
    }

    pub fn in_open(&self) -> bool {
        self.game_mode == Some(GameMode::Open)
    }

    // Wing

    pub fn wing(&self) -> &HashSet<String> {
        &self.wing
    }

    pub fn in_wing(&self) -> bool {
        !self.wing.is_empty()
    }

    pub fn leave_wing(&mut self) {
        self.wing.clear();
    }

    /// Joining a wing ends any crew session.
    pub fn join_wing<I, S>(&mut self, others: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wing = others.into_iter().map(Into::into).collect();
        self.crew = None;
        self.debug_check_invariants();
    }

    /// Fails if the commander is in a multi-member crew; the caller decides
    /// whether to leave the crew first.
    pub fn add_to_wing(&mut self, other: impl Into<String>) -> RulesResult<()> {
        if let Some(crew) = self.crew.as_ref().filter(|crew| crew.len() > 1) {
            return Err(RulesError::WingCrewConflict {
                crew_size: crew.len(),
            });
        }
        self.wing.insert(other.into());
        self.debug_check_invariants();
        Ok(())
    }

    // Crew

    pub fn crew(&self) -> Option<&CrewSession> {
        self.crew.as_ref()
    }

    pub fn in_crew(&self) -> bool {
        self.crew.is_some()
    }

    /// In a crew, but not its captain.
    pub fn is_crew_member(&self) -> bool {
        self.crew
            .as_ref()
            .map(|crew| !crew.is_captain(&self.name))
            .unwrap_or(false)
    }

    pub fn is_captain(&self) -> bool {
        self.is_crew_captain(&self.name)
    }

    pub fn is_crew_captain(&self, member: &str) -> bool {
        self.crew
            .as_ref()
            .map(|crew| crew.is_captain(member))
            .unwrap_or(false)
    }

    /// Board someone else's ship. The vehicle is unknown until telemetry says otherwise.
    pub fn join_crew(&mut self, captain: impl Into<String>, now: DateTime<Utc>) {
        let mut crew = CrewSession::new(captain, now);
        crew.add(self.name.clone(), now);
        debug!(cmdr = %self.name, crew = %crew.id(), captain = %crew.captain(), "Joined crew");
        self.crew = Some(crew);
        self.wing.clear();
        self.vehicle = Some(UNKNOWN.to_string());
        self.debug_check_invariants();
    }

    /// Returns false if `member` was already aboard. Forms a crew captained
    /// by this commander if there isn't one. A crew with company ends the wing.
    pub fn add_to_crew(&mut self, member: impl Into<String>, now: DateTime<Utc>) -> bool {
        let added = self.ensure_crew(now).add(member, now);
        if self.in_multi_member_crew() && !self.wing.is_empty() {
            debug!(cmdr = %self.name, "Crew has company; leaving wing");
            self.wing.clear();
        }
        self.debug_check_invariants();
        added
    }

    /// Returns false if `member` wasn't aboard. Forms a crew captained by
    /// this commander if there isn't one.
    pub fn remove_from_crew(&mut self, member: &str, now: DateTime<Utc>) -> bool {
        let removed = self.ensure_crew(now).remove(member);
        self.debug_check_invariants();
        removed
    }

    pub fn leave_crew(&mut self) {
        if let Some(crew) = self.crew.take() {
            debug!(cmdr = %self.name, crew = %crew.id(), "Left crew");
        }
    }

    /// Ends the crew session, returning everyone who was aboard.
    pub fn disband_crew(&mut self) -> Vec<String> {
        let Some(mut crew) = self.crew.take() else {
            return Vec::new();
        };
        debug!(cmdr = %self.name, crew = %crew.id(), size = crew.len(), "Disbanded crew");
        crew.disband()
    }

    pub fn crew_time_elapsed(&self, member: &str, now: DateTime<Utc>) -> Duration {
        self.crew
            .as_ref()
            .map(|crew| crew.duration(member, now))
            .unwrap_or_else(Duration::zero)
    }

    fn ensure_crew(&mut self, now: DateTime<Utc>) -> &mut CrewSession {
        if self.crew.is_none() {
            self.wing.clear();
        }
        let name = &self.name;
        self.crew.get_or_insert_with(|| {
            let crew = CrewSession::new(name.clone(), now);
            debug!(cmdr = %name, crew = %crew.id(), "Formed crew");
            crew
        })
    }

    fn in_multi_member_crew(&self) -> bool {
        self.crew.as_ref().map(|crew| crew.len() > 1).unwrap_or(false)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.check_invariants().is_ok(),
            "wing and crew overlap for {}",
            self.name
        );
    }

    // Friends and targets

    pub fn add_friend(&mut self, friend: impl Into<String>) -> bool {
        self.friends.insert(friend.into())
    }

    pub fn is_friend_or_in_wing(&self, other: &str) -> bool {
        self.friends.contains(other) || self.wing.contains(other)
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    // Vehicle and location

    pub fn vehicle(&self) -> Option<&str> {
        self.vehicle.as_deref()
    }

    pub fn set_vehicle(&mut self, vehicle: Option<&str>, vehicles: &VehicleCanonicalizer) {
        self.vehicle = Some(vehicles.canonicalize(vehicle));
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn star_system(&self) -> Option<&str> {
        self.location.star_system.as_deref()
    }

    pub fn set_star_system(&mut self, star_system: Option<String>) {
        self.location.star_system = star_system;
    }

    /// The current place, or [`UNKNOWN`] when none was reported.
    pub fn place(&self) -> &str {
        self.location.place.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn set_place(&mut self, place: Option<String>) {
        self.location.place = place;
    }

    pub fn set_location_security(&mut self, journal_symbol: &str) {
        self.location.security = Some(SecurityState::from_journal(journal_symbol));
    }

    pub fn in_bad_neighborhood(&self) -> bool {
        self.location.is_anarchy_or_lawless()
    }

    /// True while any of vehicle, system or place has never been reported.
    pub fn has_partial_status(&self) -> bool {
        self.vehicle.is_none() || self.location.star_system.is_none() || self.location.place.is_none()
    }

    /// Returns whether anything changed; callers re-evaluate novelty when it did.
    pub fn update_vehicle_if_obsolete(
        &mut self,
        vehicle: Option<&str>,
        timestamp: DateTime<Utc>,
        vehicles: &VehicleCanonicalizer,
    ) -> bool {
        let canonical = vehicles.canonicalize(vehicle);
        if self.vehicle.as_deref() == Some(canonical.as_str()) {
            return false;
        }
        debug!(
            cmdr = %self.name,
            old = ?self.vehicle,
            new = %canonical,
            "Updating vehicle info (was missing or obsolete)"
        );
        self.vehicle = Some(canonical);
        self.timestamp = Some(timestamp);
        true
    }

    pub fn update_star_system_if_obsolete(&mut self, star_system: &str, timestamp: DateTime<Utc>) -> bool {
        if self.location.star_system.as_deref() == Some(star_system) {
            return false;
        }
        info!(
            cmdr = %self.name,
            old = ?self.location.star_system,
            new = %star_system,
            "Updating system info (was missing or obsolete)"
        );
        self.location.star_system = Some(star_system.to_string());
        self.timestamp = Some(timestamp);
        true
    }

    pub fn update_place_if_obsolete(&mut self, place: &str, timestamp: DateTime<Utc>) -> bool {
        if self.location.place.as_deref() == Some(place) {
            return false;
        }
        info!(
            cmdr = %self.name,
            old = ?self.location.place,
            new = %place,
            "Updating place info (was missing or obsolete)"
        );
        self.location.place = Some(place.to_string());
        self.timestamp = Some(timestamp);
        true
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = Some(timestamp);
    }

    /// Milliseconds since the Unix epoch, as the reporting backend expects.
    pub fn timestamp_js_epoch(&self) -> Option<i64> {
        self.timestamp.map(|ts| ts.timestamp_millis())
    }

    // Powerplay

    pub fn pledged_to(&mut self, power: &str, time_already_pledged: Duration, now: DateTime<Utc>) {
        self.power = Some(PowerAffiliation::new(power, time_already_pledged, now));
    }

    pub fn go_independent(&mut self) {
        self.power = None;
    }

    pub fn power(&self) -> Option<&PowerAffiliation> {
        self.power.as_ref()
    }

    pub fn power_name(&self) -> Option<&str> {
        self.power.as_ref().map(PowerAffiliation::canonical_name)
    }

    pub fn time_pledged(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.power.as_ref().map(|power| power.time_pledged(now))
    }

    pub fn pledged_since(&self) -> Option<DateTime<Utc>> {
        self.power.as_ref().map(PowerAffiliation::pledged_since)
    }

    pub fn is_independent(&self) -> bool {
        self.power.is_none()
    }

    pub fn is_enemy_with(&self, power: &str) -> bool {
        match &self.power {
            Some(affiliation) if !power.is_empty() => affiliation.is_enemy_of(power),
            _ => false,
        }
    }

    pub fn is_trusted_by_power(&self) -> bool {
        self.power
            .as_ref()
            .map(PowerAffiliation::is_somewhat_trusted)
            .unwrap_or(false)
    }

    /// Independents answer to no power, so nothing holds them back.
    pub fn is_empowered_by_power(&self) -> bool {
        self.power
            .as_ref()
            .map(PowerAffiliation::is_fully_trusted)
            .unwrap_or(true)
    }

    // Squadron

    pub fn squadron_member(&mut self, membership: SquadronMembership) {
        self.squadron = Some(membership);
    }

    pub fn lone_wolf(&mut self) {
        self.squadron = None;
    }

    pub fn squadron(&self) -> Option<&SquadronMembership> {
        self.squadron.as_ref()
    }

    pub fn squadron_info(&self) -> Option<SquadronInfo> {
        self.squadron.as_ref().map(SquadronMembership::info)
    }

    pub fn is_lone_wolf(&self) -> bool {
        self.squadron.is_none()
    }

    pub fn is_trusted_by_squadron(&self, trust: &SquadronTrust) -> bool {
        self.squadron
            .as_ref()
            .map(|squadron| squadron.is_somewhat_trusted(trust))
            .unwrap_or(false)
    }

    pub fn is_empowered_by_squadron(&self, trust: &SquadronTrust) -> bool {
        self.squadron
            .as_ref()
            .map(|squadron| squadron.is_fully_trusted(trust))
            .unwrap_or(false)
    }

    pub fn squadron_trusted_rank<'a>(&self, trust: &'a SquadronTrust) -> &'a str {
        &trust.somewhat_trusted.rank
    }

    pub fn squadron_empowered_rank<'a>(&self, trust: &'a SquadronTrust) -> &'a str {
        &trust.fully_trusted.rank
    }

    /// Checks the invariants every transition is expected to preserve.
    pub fn check_invariants(&self) -> RulesResult<()> {
        if let Some(crew) = self.crew.as_ref().filter(|crew| crew.len() > 1) {
            if !self.wing.is_empty() {
                return Err(RulesError::WingCrewConflict {
                    crew_size: crew.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn vehicles() -> VehicleCanonicalizer {
        VehicleCanonicalizer::from_pairs([("anaconda", "Anaconda"), ("empire_trader", "Imperial Clipper")])
    }

    fn winged(names: &[&str]) -> CommanderState {
        let mut cmdr = CommanderState::new("Jameson");
        cmdr.set_game_mode(Some(GameMode::Open));
        cmdr.join_wing(names.iter().copied());
        cmdr
    }

    #[test]
    fn test_new_commander() {
        let cmdr = CommanderState::new("Jameson");
        assert_eq!(cmdr.name(), "Jameson");
        assert!(cmdr.is_alive());
        assert!(cmdr.is_independent());
        assert!(cmdr.is_lone_wolf());
        assert!(cmdr.has_partial_status());
        assert_eq!(cmdr.place(), "Unknown");
    }

    #[test]
    fn test_inception_clears_transient_state() {
        let mut cmdr = winged(&["Alice"]);
        cmdr.pledged_to("Felicia Winters", Duration::zero(), at(0));
        cmdr.squadron_member(SquadronMembership::new("Hutton Truckers", 1, "wingman", 100));
        cmdr.set_target(Some("Bob".into()));
        cmdr.killed();

        cmdr.inception();

        assert!(cmdr.from_birth());
        assert!(cmdr.is_alive());
        assert!(cmdr.suspended_session().is_none());
        assert!(!cmdr.in_wing());
        assert!(!cmdr.in_crew());
        assert_eq!(cmdr.game_mode(), None);
        assert_eq!(cmdr.target(), None);
        assert_eq!(cmdr.name(), "Jameson");
        assert_eq!(cmdr.power_name(), Some("felicia_winters"));
        assert!(!cmdr.is_lone_wolf());
    }

    #[test]
    fn test_killed_then_resurrect_restores_session() {
        let mut cmdr = winged(&["Alice", "Bob"]);
        let wing_before = cmdr.wing().clone();

        cmdr.killed();
        assert!(cmdr.is_destroyed());
        assert_eq!(cmdr.game_mode(), None);
        assert!(!cmdr.in_wing());
        assert!(!cmdr.in_crew());

        cmdr.resurrect().unwrap();
        assert!(cmdr.is_alive());
        assert_eq!(cmdr.game_mode(), Some(GameMode::Open));
        assert_eq!(cmdr.wing(), &wing_before);
        assert!(cmdr.suspended_session().is_none());
    }

    #[test]
    fn test_second_death_discards_first_snapshot() {
        let mut cmdr = winged(&["Alice"]);

        cmdr.killed();
        cmdr.killed();
        cmdr.resurrect().unwrap();

        assert_eq!(cmdr.game_mode(), None);
        assert!(!cmdr.in_wing());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut cmdr = winged(&["Alice"]);
        cmdr.killed();
        cmdr.join_wing(["Mallory"]);
        assert_eq!(cmdr.suspended_session().unwrap().wing.len(), 1);
        assert!(cmdr.suspended_session().unwrap().wing.contains("Alice"));
    }

    #[test]
    fn test_resurrect_while_alive_is_rejected() {
        let mut cmdr = winged(&["Alice"]);
        let err = cmdr.resurrect().unwrap_err();
        assert!(matches!(err, RulesError::NotDestroyed(name) if name == "Jameson"));
        assert!(cmdr.in_wing());
        assert_eq!(cmdr.game_mode(), Some(GameMode::Open));
    }

    #[test]
    fn test_wing_operations() {
        let mut cmdr = CommanderState::new("Jameson");
        cmdr.add_to_wing("Alice").unwrap();
        assert!(cmdr.in_wing());
        assert!(cmdr.is_friend_or_in_wing("Alice"));
        assert!(!cmdr.is_friend_or_in_wing("Bob"));

        cmdr.add_friend("Bob");
        assert!(cmdr.is_friend_or_in_wing("Bob"));

        cmdr.leave_wing();
        assert!(!cmdr.in_wing());
        assert!(!cmdr.is_friend_or_in_wing("Alice"));
    }

    #[test]
    fn test_join_wing_ends_crew() {
        let mut cmdr = CommanderState::new("Jameson");
        cmdr.join_crew("Captain", at(0));
        cmdr.join_wing(["Alice", "Bob"]);
        assert!(!cmdr.in_crew());
        assert_eq!(cmdr.wing().len(), 2);
        cmdr.check_invariants().unwrap();
    }

    #[test]
    fn test_add_to_wing_while_in_crew_is_a_violation() {
        let mut cmdr = CommanderState::new("Jameson");
        cmdr.join_crew("Captain", at(0));

        let err = cmdr.add_to_wing("Alice").unwrap_err();
        assert!(matches!(err, RulesError::WingCrewConflict { crew_size: 2 }));
        assert!(!cmdr.in_wing());

        cmdr.leave_crew();
        cmdr.add_to_wing("Alice").unwrap();
        cmdr.check_invariants().unwrap();
    }

    #[test]
    fn test_growing_a_solo_crew_leaves_the_wing() {
        let mut cmdr = CommanderState::new("Jameson");
        assert!(!cmdr.remove_from_crew("Nobody", at(0)));
        cmdr.add_to_wing("Alice").unwrap();
        assert!(cmdr.in_wing());

        assert!(cmdr.add_to_crew("Bob", at(1)));

        assert_eq!(cmdr.crew().unwrap().len(), 2);
        assert!(!cmdr.in_wing());
        cmdr.check_invariants().unwrap();
    }

    #[test]
    fn test_resurrect_aboard_crew_drops_parked_wing() {
        let mut cmdr = winged(&["Alice"]);
        cmdr.killed();
        cmdr.join_crew("Captain", at(0));

        cmdr.resurrect().unwrap();

        assert!(cmdr.in_crew());
        assert!(!cmdr.in_wing());
        assert_eq!(cmdr.game_mode(), Some(GameMode::Open));
        cmdr.check_invariants().unwrap();
    }

    #[test]
    fn test_new_crew_after_disband_has_new_id() {
        let mut cmdr = CommanderState::new("Jameson");
        cmdr.add_to_crew("Gunner", at(0));
        let first = cmdr.crew().unwrap().id();

        cmdr.disband_crew();
        cmdr.add_to_crew("Gunner", at(1));
        assert_ne!(cmdr.crew().unwrap().id(), first);
    }

    #[test]
    fn test_join_crew() {
        let vehicles = vehicles();
        let mut cmdr = winged(&["Alice"]);
        cmdr.set_vehicle(Some("ANACONDA"), &vehicles);

        cmdr.join_crew("Captain", at(0));

        assert!(!cmdr.in_wing());
        assert!(cmdr.in_crew());
        assert!(cmdr.is_crew_member());
        assert!(!cmdr.is_captain());
        assert!(cmdr.is_crew_captain("Captain"));
        assert_eq!(cmdr.vehicle(), Some("Unknown"));
        assert_eq!(cmdr.crew().unwrap().len(), 2);
    }

    #[test]
    fn test_captain_adds_members() {
        let mut cmdr = winged(&["Alice"]);

        assert!(cmdr.add_to_crew("Gunner", at(10)));
        assert!(!cmdr.add_to_crew("Gunner", at(20)));

        assert!(!cmdr.in_wing());
        assert!(cmdr.is_captain());
        assert!(!cmdr.is_crew_member());
        assert_eq!(cmdr.crew_time_elapsed("Gunner", at(70)), Duration::seconds(60));
        assert_eq!(cmdr.crew_time_elapsed("Nobody", at(70)), Duration::zero());
    }

    #[test]
    fn test_remove_from_crew_forms_crew_if_missing() {
        let mut cmdr = winged(&["Alice"]);
        assert!(!cmdr.remove_from_crew("Gunner", at(0)));
        assert!(cmdr.in_crew());
        assert!(!cmdr.in_wing());
        assert!(cmdr.is_captain());

        cmdr.add_to_crew("Gunner", at(1));
        assert!(cmdr.remove_from_crew("Gunner", at(2)));
    }

    #[test]
    fn test_leave_and_disband_crew() {
        let mut cmdr = CommanderState::new("Jameson");
        cmdr.add_to_crew("Gunner", at(0));

        let mut former = cmdr.disband_crew();
        former.sort();
        assert_eq!(former, vec!["Gunner".to_string(), "Jameson".to_string()]);
        assert!(!cmdr.in_crew());
        assert!(cmdr.disband_crew().is_empty());

        cmdr.join_crew("Captain", at(5));
        cmdr.leave_crew();
        assert!(!cmdr.in_crew());
        assert_eq!(cmdr.crew_time_elapsed("Jameson", at(10)), Duration::zero());
    }

    #[test]
    fn test_killed_ends_crew() {
        let mut cmdr = CommanderState::new("Jameson");
        cmdr.join_crew("Captain", at(0));
        cmdr.killed();
        assert!(!cmdr.in_crew());
        cmdr.resurrect().unwrap();
        assert!(!cmdr.in_crew());
    }

    #[test]
    fn test_enmity() {
        let mut cmdr = CommanderState::new("Jameson");
        assert!(!cmdr.is_enemy_with("Aisling Duval"));

        cmdr.pledged_to("Felicia Winters", Duration::hours(2), at(7200));
        assert_eq!(cmdr.pledged_since(), Some(at(0)));
        assert_eq!(cmdr.time_pledged(at(7300)), Some(Duration::seconds(7300)));
        assert!(cmdr.is_enemy_with("Aisling Duval"));
        assert!(!cmdr.is_enemy_with("Zachary Hudson"));
        assert!(!cmdr.is_enemy_with(""));

        cmdr.go_independent();
        assert!(cmdr.is_independent());
        assert!(!cmdr.is_enemy_with("Aisling Duval"));
    }

    #[test]
    fn test_power_trust() {
        let mut cmdr = CommanderState::new("Jameson");
        assert!(!cmdr.is_trusted_by_power());
        assert!(cmdr.is_empowered_by_power());

        cmdr.pledged_to("Yuri Grom", Duration::days(100), at(10_000_000));
        assert!(!cmdr.is_trusted_by_power());
        assert!(!cmdr.is_empowered_by_power());
    }

    #[test]
    fn test_squadron_trust() {
        let trust = SquadronTrust::default();
        let mut cmdr = CommanderState::new("Jameson");
        assert!(!cmdr.is_trusted_by_squadron(&trust));
        assert!(cmdr.squadron_info().is_none());

        cmdr.squadron_member(SquadronMembership::new("Hutton Truckers", 9, "wingman", 150));
        assert!(cmdr.is_trusted_by_squadron(&trust));
        assert!(!cmdr.is_empowered_by_squadron(&trust));
        assert_eq!(cmdr.squadron_info().unwrap().squadron_id, Some(9));
        assert_eq!(cmdr.squadron_trusted_rank(&trust), "wingman");
        assert_eq!(cmdr.squadron_empowered_rank(&trust), "co-pilot");

        cmdr.lone_wolf();
        assert!(cmdr.is_lone_wolf());
        assert!(!cmdr.is_trusted_by_squadron(&trust));
    }

    #[test]
    fn test_update_if_obsolete() {
        let vehicles = vehicles();
        let mut cmdr = CommanderState::new("Jameson");

        assert!(cmdr.update_vehicle_if_obsolete(Some("Anaconda"), at(1), &vehicles));
        assert!(!cmdr.update_vehicle_if_obsolete(Some("ANACONDA"), at(2), &vehicles));
        assert_eq!(cmdr.timestamp(), Some(at(1)));
        assert_eq!(cmdr.vehicle(), Some("Anaconda"));

        assert!(cmdr.update_vehicle_if_obsolete(Some("Empire_Trader"), at(3), &vehicles));
        assert_eq!(cmdr.vehicle(), Some("Imperial Clipper"));

        assert!(cmdr.update_star_system_if_obsolete("Sol", at(4)));
        assert!(!cmdr.update_star_system_if_obsolete("Sol", at(5)));
        assert!(cmdr.has_partial_status());

        assert!(cmdr.update_place_if_obsolete("Abraham Lincoln", at(6)));
        assert!(!cmdr.update_place_if_obsolete("Abraham Lincoln", at(7)));
        assert_eq!(cmdr.timestamp(), Some(at(6)));
        assert_eq!(cmdr.timestamp_js_epoch(), Some(6_000));
        assert!(!cmdr.has_partial_status());
    }

    #[test]
    fn test_unknown_vehicle_is_canonical() {
        let vehicles = vehicles();
        let mut cmdr = CommanderState::new("Jameson");
        assert!(cmdr.update_vehicle_if_obsolete(None, at(1), &vehicles));
        assert_eq!(cmdr.vehicle(), Some(UNKNOWN));
        assert!(!cmdr.update_vehicle_if_obsolete(None, at(2), &vehicles));
    }

    #[test]
    fn test_bad_neighborhood() {
        let mut cmdr = CommanderState::new("Jameson");
        assert!(!cmdr.in_bad_neighborhood());
        cmdr.set_location_security("$GALAXY_MAP_INFO_state_anarchy;");
        assert!(cmdr.in_bad_neighborhood());
        cmdr.set_location_security("$SYSTEM_SECURITY_high;");
        assert!(!cmdr.in_bad_neighborhood());
    }

    #[test]
    fn test_game_mode_queries() {
        let mut cmdr = CommanderState::new("Jameson");
        assert!(!cmdr.in_open());
        assert!(!cmdr.in_solo_or_private());

        cmdr.set_game_mode(Some(GameMode::Group));
        assert!(cmdr.in_solo_or_private());

        cmdr.set_game_mode(Some(GameMode::Open));
        assert!(cmdr.in_open());
    }
}
