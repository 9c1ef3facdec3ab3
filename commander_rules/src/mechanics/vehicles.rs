//! Vehicle name canonicalization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RulesResult;

/// Placeholder for a vehicle, place or system we have no data for.
/// Never localized: it is compared against in novelty decisions.
pub const UNKNOWN: &str = "Unknown";

const BUILTIN_ALIASES: &str = include_str!("../../data/vehicles.toml");

#[derive(Debug, Default, Deserialize)]
struct AliasTable {
    #[serde(default)]
    aliases: HashMap<String, String>,
}

/// Maps journal vehicle identifiers to canonical names.
///
/// Built once at startup and passed to whatever needs it. Names the table
/// doesn't know pass through lowercased, so new ships never fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleCanonicalizer {
    aliases: HashMap<String, String>,
}

impl VehicleCanonicalizer {
    /// The table shipped with the crate.
    pub fn builtin() -> RulesResult<Self> {
        Self::from_toml_str(BUILTIN_ALIASES)
    }

    /// Load a table from a TOML document with an `[aliases]` section.
    pub fn from_toml_str(source: &str) -> RulesResult<Self> {
        let table: AliasTable = toml::from_str(source)?;
        Ok(Self::from_pairs(table.aliases))
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(alias, name)| (alias.as_ref().to_lowercase(), name.into()))
                .collect(),
        }
    }

    pub fn canonicalize(&self, name: Option<&str>) -> String {
        let Some(name) = name else {
            return UNKNOWN.to_string();
        };
        let lowered = name.to_lowercase();
        match self.aliases.get(&lowered) {
            Some(canonical) => canonical.clone(),
            None => lowered,
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
