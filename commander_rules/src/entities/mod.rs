//! Commander and group-affiliation definitions.

mod commander;
mod crew;
mod power;
mod squadron;

pub use commander::*;
pub use crew::*;
pub use power::*;
pub use squadron::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a crew session, so reports about the same
/// multicrew session can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrewId(pub Uuid);

impl CrewId {
    /// Create a new random crew ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CrewId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CrewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
