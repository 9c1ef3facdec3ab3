//! Roster - the local player plus every third-party commander we track.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::CommanderState;

/// Commanders known to this session, keyed by lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    player: CommanderState,
    others: HashMap<String, CommanderState>,
}

impl Roster {
    pub fn new(player: CommanderState) -> Self {
        Self {
            player,
            others: HashMap::new(),
        }
    }

    pub fn player(&self) -> &CommanderState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut CommanderState {
        &mut self.player
    }

    /// Get or start tracking a third-party commander.
    pub fn track(&mut self, name: &str) -> &mut CommanderState {
        self.others
            .entry(name.to_lowercase())
            .or_insert_with(|| CommanderState::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&CommanderState> {
        self.others.get(&name.to_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CommanderState> {
        self.others.get_mut(&name.to_lowercase())
    }

    /// Stop tracking a commander.
    pub fn evict(&mut self, name: &str) -> Option<CommanderState> {
        self.others.remove(&name.to_lowercase())
    }

    pub fn is_player(&self, name: &str) -> bool {
        self.player.name().eq_ignore_ascii_case(name)
    }

    pub fn tracked_count(&self) -> usize {
        self.others.len()
    }

    /// Sighted commanders whose power is hostile to the player's.
    pub fn enemies_of_player(&self) -> Vec<&CommanderState> {
        self.others
            .values()
            .filter(|other| {
                other
                    .power_name()
                    .map(|power| self.player.is_enemy_with(power))
                    .unwrap_or(false)
            })
            .collect()
    }
}
