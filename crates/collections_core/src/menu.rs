use serde::{Deserialize, Serialize};

/// Which broadcast bracket a live-broadcast chatlog belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastWindow {
    Pre,
    Post,
}

/// A collections-menu selection, decoded once at the boundary from the
/// host's string-tagged signal messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    PearlSelected { index: usize },
    BroadcastSelected { window: BroadcastWindow, index: usize },
    ChatlogSelected { index: usize },
}

impl MenuEvent {
    /// Decode a host signal message such as `PEARL_3`, `TYPE_0`,
    /// `CHATLOG_PREPEB_1`, `CHATLOG_POSTPEB_0` or `CHATLOG_NORMAL_4`.
    /// Unknown messages yield `None`.
    pub fn from_signal(message: &str) -> Option<Self> {
        let index = trailing_index(message)?;
        if message.contains("PREPEB") {
            Some(Self::BroadcastSelected {
                window: BroadcastWindow::Pre,
                index,
            })
        } else if message.contains("POSTPEB") {
            Some(Self::BroadcastSelected {
                window: BroadcastWindow::Post,
                index,
            })
        } else if message.contains("CHATLOG") {
            Some(Self::ChatlogSelected { index })
        } else if message.contains("PEARL") || message.contains("TYPE") {
            Some(Self::PearlSelected { index })
        } else {
            None
        }
    }
}

fn trailing_index(message: &str) -> Option<usize> {
    message.rsplit_once('_')?.1.parse().ok()
}
