use std::collections::BTreeMap;

use crate::menu::BroadcastWindow;
use crate::region::{ChatlogId, RegionNames};

/// Disambiguate a list of raw display names by closing each one with a
/// bracket, numbering duplicates by first-occurrence order:
/// `["[Shoreline pearl", "[Shoreline pearl", "[Music pearl"]` becomes
/// `["[Shoreline pearl 1]", "[Shoreline pearl 2]", "[Music pearl]"]`.
///
/// Output has the same length and order as the input. Expects raw
/// (unresolved) names; feeding an already-resolved list back in is not
/// supported.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for name in names {
        *counts.entry(name.as_ref()).or_insert(0) += 1;
    }

    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            if counts.get(name).copied().unwrap_or(0) > 1 {
                let position = *seen.entry(name).and_modify(|p| *p += 1).or_insert(1);
                format!("{name} {position}]")
            } else {
                format!("{name}]")
            }
        })
        .collect()
}

/// Raw display name for a pearl type. Most pearls are named after the region
/// in their type value (`"SL_moon"` -> `"Shoreline"`); a few are set
/// manually.
pub fn pearl_raw_name(pearl_type: &str, regions: &RegionNames) -> String {
    let name = match pearl_type {
        "RM" => "Music",
        "Red_stomach" => "Hunter",
        "Spearmasterpearl" => "Spearmaster",
        "Rivulet_stomach" => "Rivulet",
        // Mislabeled in the game data; this pearl appears in Garbage Wastes.
        "MS" => "Garbage Wastes",
        _ => {
            let acronym = pearl_type.split('_').next().unwrap_or(pearl_type);
            regions.full_name_or_acronym(acronym)
        }
    };
    format!("[{name} pearl")
}

/// Raw display name for a live broadcast slot.
pub fn broadcast_raw_name(window: BroadcastWindow) -> String {
    match window {
        BroadcastWindow::Pre => "[Live broadcast (Pre-event)".to_string(),
        BroadcastWindow::Post => "[Live broadcast (Post-event)".to_string(),
    }
}

/// Raw display name for a regional chatlog, named after the region embedded
/// in its identifier.
pub fn chatlog_raw_name(id: &ChatlogId, regions: &RegionNames) -> String {
    let name = match id.region_acronym() {
        Some(acronym) => regions.full_name_or_acronym(acronym),
        None => id.value(),
    };
    format!("[{name} transmission")
}
