//! Multicrew sessions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CrewId;

/// A temporary group with one captain; every member carries the time they joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewSession {
    id: CrewId,
    captain: String,
    /// Member name -> join time. The captain is a member from creation.
    members: HashMap<String, DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl CrewSession {
    /// Form a crew around `captain`.
    pub fn new(captain: impl Into<String>, now: DateTime<Utc>) -> Self {
        let captain = captain.into();
        let mut members = HashMap::new();
        members.insert(captain.clone(), now);
        Self {
            id: CrewId::new(),
            captain,
            members,
            created_at: now,
        }
    }

    pub fn id(&self) -> CrewId {
        self.id
    }

    pub fn captain(&self) -> &str {
        &self.captain
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns false if `member` was already aboard.
    pub fn add(&mut self, member: impl Into<String>, now: DateTime<Utc>) -> bool {
        let member = member.into();
        if self.members.contains_key(&member) {
            return false;
        }
        self.members.insert(member, now);
        true
    }

    /// Returns false if `member` wasn't aboard.
    pub fn remove(&mut self, member: &str) -> bool {
        self.members.remove(member).is_some()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.contains_key(member)
    }

    pub fn is_captain(&self, member: &str) -> bool {
        self.captain == member
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// How long `member` has been aboard; zero if they aren't.
    pub fn duration(&self, member: &str, now: DateTime<Utc>) -> Duration {
        self.members
            .get(member)
            .map(|joined| now - *joined)
            .unwrap_or_else(Duration::zero)
    }

    /// Break the crew up, returning everyone who was aboard.
    pub fn disband(&mut self) -> Vec<String> {
        self.captain.clear();
        self.members.drain().map(|(member, _)| member).collect()
    }
}
