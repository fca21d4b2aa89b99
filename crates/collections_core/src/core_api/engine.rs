use log::{debug, warn};

use crate::catalog::RegionTokenCatalog;
use crate::menu::{BroadcastWindow, MenuEvent};
use crate::names;
use crate::region::RegionNames;
use crate::save::LinearChatlogTracker;

use super::error::{CoreError, CoreErrorCode};
use super::types::{MenuSources, PanelSnapshot, RegionStatus};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelState {
    Unloaded,
    Loading,
    Loaded,
    Failed(CoreErrorCode),
}

/// One collections-menu session: the resolved label lists plus the
/// uncollected-regions panel loader. Owned by the menu lifecycle; opening a
/// new menu builds a new session rather than reusing this one.
#[derive(Debug)]
pub struct Session {
    pearl_labels: Vec<String>,
    chatlog_labels: Vec<String>,
    pre_broadcast_count: usize,
    post_broadcast_count: usize,
    region_names: RegionNames,
    panel_state: PanelState,
    tracker: Option<LinearChatlogTracker>,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Build a menu session from the host's raw entry lists: derive raw
    /// display names for every entry, resolve duplicates, and return a
    /// session owning the finished labels.
    pub fn open_menu(&self, sources: MenuSources) -> Session {
        let MenuSources {
            pearl_types,
            pre_broadcast_count,
            post_broadcast_count,
            chatlog_ids,
            region_names,
        } = sources;

        let mut raw = Vec::with_capacity(
            pearl_types.len() + pre_broadcast_count + post_broadcast_count + chatlog_ids.len(),
        );
        for pearl_type in &pearl_types {
            raw.push(names::pearl_raw_name(pearl_type, &region_names));
        }
        let pearl_count = raw.len();
        for _ in 0..pre_broadcast_count {
            raw.push(names::broadcast_raw_name(BroadcastWindow::Pre));
        }
        for _ in 0..post_broadcast_count {
            raw.push(names::broadcast_raw_name(BroadcastWindow::Post));
        }
        for id in &chatlog_ids {
            raw.push(names::chatlog_raw_name(id, &region_names));
        }

        // Pearl and chatlog labels share one duplicate grouping.
        let mut pearl_labels = names::resolve(&raw);
        let chatlog_labels = pearl_labels.split_off(pearl_count);
        debug!(
            "resolved {} pearl and {} chatlog labels",
            pearl_labels.len(),
            chatlog_labels.len()
        );

        Session {
            pearl_labels,
            chatlog_labels,
            pre_broadcast_count,
            post_broadcast_count,
            region_names,
            panel_state: PanelState::Unloaded,
            tracker: None,
        }
    }
}

impl Session {
    pub fn pearl_labels(&self) -> &[String] {
        &self.pearl_labels
    }

    pub fn chatlog_labels(&self) -> &[String] {
        &self.chatlog_labels
    }

    pub fn pearl_label(&self, index: usize) -> Option<&str> {
        self.pearl_labels.get(index).map(String::as_str)
    }

    pub fn chatlog_label(&self, index: usize) -> Option<&str> {
        self.chatlog_labels.get(index).map(String::as_str)
    }

    /// Label for a decoded menu selection. Broadcast indices count within
    /// their own bracket; regular chatlog indices count after both brackets.
    pub fn label_for(&self, event: MenuEvent) -> Option<&str> {
        match event {
            MenuEvent::PearlSelected { index } => self.pearl_label(index),
            MenuEvent::BroadcastSelected { window, index } => match window {
                BroadcastWindow::Pre if index < self.pre_broadcast_count => {
                    self.chatlog_label(index)
                }
                BroadcastWindow::Post if index < self.post_broadcast_count => {
                    self.chatlog_label(self.pre_broadcast_count + index)
                }
                _ => None,
            },
            MenuEvent::ChatlogSelected { index } => {
                self.chatlog_label(self.pre_broadcast_count + self.post_broadcast_count + index)
            }
        }
    }

    /// Load the uncollected-regions panel for this session.
    ///
    /// `Loaded` and `Failed` are terminal until [`Session::request_reload`];
    /// there is no automatic retry. A failed load keeps any previously
    /// published tracker untouched, so the panel degrades rather than
    /// flickering to a partial state.
    pub fn load_panel(
        &mut self,
        raw_blob: &str,
        catalog: &RegionTokenCatalog,
    ) -> Result<(), CoreError> {
        match self.panel_state {
            PanelState::Loaded => Ok(()),
            PanelState::Failed(code) => Err(CoreError::new(
                code,
                "panel load already failed this session; request a reload first",
            )),
            PanelState::Unloaded | PanelState::Loading => {
                self.panel_state = PanelState::Loading;
                match LinearChatlogTracker::load(raw_blob, catalog) {
                    Ok(tracker) => {
                        self.tracker = Some(tracker);
                        self.panel_state = PanelState::Loaded;
                        Ok(())
                    }
                    Err(e) => {
                        warn!("disabling uncollected-regions panel: {e}");
                        self.panel_state = PanelState::Failed(e.code);
                        Err(e)
                    }
                }
            }
        }
    }

    /// Allow one more load attempt, e.g. after the save or the host token
    /// cache changed. A previously loaded tracker stays published until a
    /// new load succeeds.
    pub fn request_reload(&mut self) {
        self.panel_state = PanelState::Unloaded;
    }

    /// The indexed tracker, if any load has succeeded.
    pub fn panel(&self) -> Option<&LinearChatlogTracker> {
        self.tracker.as_ref()
    }

    /// Per-region status rows for the panel, in catalog order, with the
    /// progress flag. `None` until a load has succeeded.
    pub fn panel_snapshot(&self) -> Option<PanelSnapshot> {
        let tracker = self.tracker.as_ref()?;
        let regions = tracker
            .all_chatlogs()
            .iter()
            .map(|region| {
                let remaining = tracker
                    .uncollected()
                    .get(&region.acronym)
                    .map(|tokens| tokens.len())
                    .unwrap_or(0);
                RegionStatus {
                    acronym: region.acronym.clone(),
                    name: self
                        .region_names
                        .full_name_or_acronym(&region.acronym)
                        .to_string(),
                    total: region.tokens.len(),
                    remaining,
                }
            })
            .collect();
        Some(PanelSnapshot {
            post_pebbles: tracker.post_pebbles(),
            regions,
        })
    }
}
