use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::region::ChatlogId;

/// One region's trackable linear chatlog tokens, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionTokens {
    pub acronym: String,
    pub tokens: Vec<ChatlogId>,
}

/// Ordered mapping from region acronym to that region's linear chatlog
/// tokens, snapshotted from the host token cache. Read-only after
/// construction; a save reload builds a new catalog rather than mutating
/// this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTokenCatalog {
    regions: Vec<RegionTokens>,
}

impl RegionTokenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_regions(regions: Vec<RegionTokens>) -> Self {
        Self { regions }
    }

    /// Snapshot the host token cache, keeping only the campaign's story
    /// regions and dropping unique (coloured) chatlogs from each list.
    /// Regions left without any linear tokens are dropped entirely.
    pub fn from_cache<I>(
        pairs: I,
        story_regions: &[String],
        unique: &BTreeSet<ChatlogId>,
    ) -> Self
    where
        I: IntoIterator<Item = (String, Vec<ChatlogId>)>,
    {
        let mut regions = Vec::new();
        for (acronym, tokens) in pairs {
            if !story_regions.iter().any(|region| *region == acronym) {
                continue;
            }
            let tokens: Vec<ChatlogId> = tokens
                .into_iter()
                .filter(|token| !unique.contains(token))
                .collect();
            if tokens.is_empty() {
                continue;
            }
            regions.push(RegionTokens { acronym, tokens });
        }
        Self { regions }
    }

    pub fn get(&self, acronym: &str) -> Option<&[ChatlogId]> {
        self.regions
            .iter()
            .find(|region| region.acronym == acronym)
            .map(|region| region.tokens.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionTokens> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
