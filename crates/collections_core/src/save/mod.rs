pub mod sections;
pub mod types;

use std::collections::BTreeSet;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalog::{RegionTokenCatalog, RegionTokens};
use crate::core_api::{CoreError, CoreErrorCode};
use crate::region::ChatlogId;
use sections::{parse_post_pebbles, parse_read_chatlogs};
use types::{
    FIELD_SEPARATOR, PERSISTENT_CATEGORY, PROGRESSION_SEPARATOR, RECORD_SEPARATOR,
    SAVE_STATE_NUMBER_TAG, SAVE_STATE_TAG, WORLD_CATEGORY, split_tagged,
};

/// Per-region uncollected linear chatlogs, in catalog order. A region is
/// dropped from the index once its list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UncollectedIndex {
    regions: Vec<RegionTokens>,
}

impl UncollectedIndex {
    fn subtract(catalog: &RegionTokenCatalog, read: &BTreeSet<ChatlogId>) -> Self {
        let regions = catalog
            .iter()
            .filter_map(|region| {
                let tokens: Vec<ChatlogId> = region
                    .tokens
                    .iter()
                    .filter(|token| !read.contains(token))
                    .cloned()
                    .collect();
                if tokens.is_empty() {
                    return None;
                }
                Some(RegionTokens {
                    acronym: region.acronym.clone(),
                    tokens,
                })
            })
            .collect();
        Self { regions }
    }

    pub fn get(&self, acronym: &str) -> Option<&[ChatlogId]> {
        self.regions
            .iter()
            .find(|region| region.acronym == acronym)
            .map(|region| region.tokens.as_slice())
    }

    pub fn contains_region(&self, acronym: &str) -> bool {
        self.get(acronym).is_some()
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

/// Linear chatlog collection state indexed from one campaign save blob.
///
/// Built atomically by [`LinearChatlogTracker::load`]; a failed load returns
/// an error without publishing anything, so callers never observe a partial
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearChatlogTracker {
    all: RegionTokenCatalog,
    uncollected: UncollectedIndex,
    post_pebbles: bool,
}

impl LinearChatlogTracker {
    /// Index a raw campaign save blob against the region token catalog.
    ///
    /// The blob is scanned in full for the two recognised categories before
    /// anything else is checked; a blob missing either category reports
    /// `MissingCategory` even when the catalog is also empty. An empty
    /// catalog reports `CatalogUnavailable`, which is transient: the host
    /// cache rebuilds itself and the caller should retry later. Inputs are
    /// never mutated, and the same inputs always produce the same tracker.
    pub fn load(raw_blob: &str, catalog: &RegionTokenCatalog) -> Result<Self, CoreError> {
        debug!("indexing campaign save data ({} bytes)", raw_blob.len());

        let mut read_chatlogs: Option<BTreeSet<ChatlogId>> = None;
        let mut post_pebbles: Option<bool> = None;
        for (tag, payload) in split_tagged(raw_blob, RECORD_SEPARATOR, FIELD_SEPARATOR) {
            match tag {
                PERSISTENT_CATEGORY => read_chatlogs = Some(parse_read_chatlogs(payload)),
                WORLD_CATEGORY => post_pebbles = Some(parse_post_pebbles(payload)),
                _ => {}
            }
        }

        let read_chatlogs = read_chatlogs.ok_or_else(|| {
            CoreError::new(
                CoreErrorCode::MissingCategory,
                format!("save data has no {PERSISTENT_CATEGORY} record"),
            )
        })?;
        let post_pebbles = post_pebbles.ok_or_else(|| {
            CoreError::new(
                CoreErrorCode::MissingCategory,
                format!("save data has no {WORLD_CATEGORY} record"),
            )
        })?;

        if catalog.is_empty() {
            return Err(CoreError::new(
                CoreErrorCode::CatalogUnavailable,
                "region token catalog is empty; the host cache has not been rebuilt yet",
            ));
        }

        let uncollected = UncollectedIndex::subtract(catalog, &read_chatlogs);
        info!(
            "indexed campaign save data: {} of {} regions have uncollected chatlogs, post-pebbles={}",
            uncollected.len(),
            catalog.len(),
            post_pebbles
        );

        Ok(Self {
            all: catalog.clone(),
            uncollected,
            post_pebbles,
        })
    }

    /// Every trackable region with its full token list, in catalog order.
    pub fn all_chatlogs(&self) -> &RegionTokenCatalog {
        &self.all
    }

    /// Regions that still contain uncollected chatlogs, in catalog order.
    pub fn uncollected(&self) -> &UncollectedIndex {
        &self.uncollected
    }

    /// Whether the player has talked to the oracle yet.
    pub fn post_pebbles(&self) -> bool {
        self.post_pebbles
    }
}

/// Find the raw save blob for `campaign` in the host progression lines.
/// The last matching `SAVE STATE` line wins.
pub fn find_campaign_save<'a>(lines: &'a [String], campaign: &str) -> Option<&'a str> {
    let mut found = None;
    for line in lines {
        let Some((tag, payload)) = line.split_once(PROGRESSION_SEPARATOR) else {
            continue;
        };
        if tag != SAVE_STATE_TAG {
            continue;
        }
        if save_state_campaign(payload) == Some(campaign) {
            found = Some(payload);
        }
    }
    found
}

/// Campaign name recorded in a save blob's `SAVE STATE NUMBER` record.
fn save_state_campaign(blob: &str) -> Option<&str> {
    split_tagged(blob, RECORD_SEPARATOR, FIELD_SEPARATOR)
        .into_iter()
        .find(|(tag, _)| *tag == SAVE_STATE_NUMBER_TAG)
        .map(|(_, value)| value.trim())
}
