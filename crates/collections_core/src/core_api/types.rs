use serde::{Deserialize, Serialize};

use crate::region::{ChatlogId, RegionNames};

/// Raw menu construction inputs delivered by the host menu: the pearl types
/// and chatlog identifiers on display, the number of live-broadcast slots in
/// each bracket, and the region name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuSources {
    pub pearl_types: Vec<String>,
    pub pre_broadcast_count: usize,
    pub post_broadcast_count: usize,
    pub chatlog_ids: Vec<ChatlogId>,
    pub region_names: RegionNames,
}

/// One row of the uncollected-regions panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionStatus {
    pub acronym: String,
    pub name: String,
    pub total: usize,
    pub remaining: usize,
}

impl RegionStatus {
    pub fn completed(&self) -> bool {
        self.remaining == 0
    }
}

/// Snapshot of the uncollected-regions panel for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelSnapshot {
    pub post_pebbles: bool,
    pub regions: Vec<RegionStatus>,
}
