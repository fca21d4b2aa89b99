use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one linear chatlog collectible, e.g. `Chatlog_SU1`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatlogId(String);

impl ChatlogId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Region acronym embedded in the identifier: the two characters starting
    /// three from the end (`"Chatlog_SU1"` -> `"SU"`).
    pub fn region_acronym(&self) -> Option<&str> {
        let len = self.0.len();
        if len < 3 {
            return None;
        }
        self.0.get(len - 3..len - 1)
    }
}

impl fmt::Display for ChatlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-owned lookup from region acronym to human-readable region name
/// (`"SU"` -> `"Outskirts"`). Used for display only; acronyms are compared
/// exactly as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionNames {
    names: BTreeMap<String, String>,
}

impl RegionNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(acronym, name)| (acronym.into(), name.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, acronym: impl Into<String>, name: impl Into<String>) {
        self.names.insert(acronym.into(), name.into());
    }

    pub fn full_name(&self, acronym: &str) -> Option<&str> {
        self.names.get(acronym).map(String::as_str)
    }

    /// Full region name, or the acronym itself when the lookup has no entry.
    pub fn full_name_or_acronym<'a>(&'a self, acronym: &'a str) -> &'a str {
        self.full_name(acronym).unwrap_or(acronym)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
