use std::collections::BTreeSet;

use crate::region::ChatlogId;

use super::types::{
    CHATLOG_TAG, CONVERSATIONS_TAG, PERSISTENT_ENTRY_SEPARATOR, PERSISTENT_FIELD_SEPARATOR,
    WORLD_ENTRY_SEPARATOR, WORLD_FIELD_SEPARATOR, split_tagged,
};

/// Chatlogs recorded as read in a death-persistent payload. Entries with
/// other tags are skipped.
pub fn parse_read_chatlogs(payload: &str) -> BTreeSet<ChatlogId> {
    split_tagged(
        payload,
        PERSISTENT_ENTRY_SEPARATOR,
        PERSISTENT_FIELD_SEPARATOR,
    )
    .into_iter()
    .filter(|(tag, _)| *tag == CHATLOG_TAG)
    .map(|(_, value)| ChatlogId::new(value))
    .collect()
}

/// Whether a misc-world payload records any oracle conversations. A missing
/// or unparseable counter counts as none.
pub fn parse_post_pebbles(payload: &str) -> bool {
    split_tagged(payload, WORLD_ENTRY_SEPARATOR, WORLD_FIELD_SEPARATOR)
        .into_iter()
        .find(|(tag, _)| *tag == CONVERSATIONS_TAG)
        .and_then(|(_, value)| value.trim().parse::<i64>().ok())
        .map(|count| count > 0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_read_chatlogs_collects_chatlog_entries_only() {
        let payload = "KARMA<dpB>4<dpA>CHATLOG<dpB>Chatlog_SU1<dpA>CHATLOG<dpB>Chatlog_GW2";
        let read = parse_read_chatlogs(payload);
        assert_eq!(read.len(), 2);
        assert!(read.contains(&ChatlogId::new("Chatlog_SU1")));
        assert!(read.contains(&ChatlogId::new("Chatlog_GW2")));
    }

    #[test]
    fn parse_read_chatlogs_handles_empty_payload() {
        assert!(parse_read_chatlogs("").is_empty());
    }

    #[test]
    fn parse_post_pebbles_requires_positive_counter() {
        assert!(parse_post_pebbles("SSAICONVERSATIONSHAD<mwB>1"));
        assert!(parse_post_pebbles(
            "CYCLENUM<mwB>12<mwA>SSAICONVERSATIONSHAD<mwB>3"
        ));
        assert!(!parse_post_pebbles("SSAICONVERSATIONSHAD<mwB>0"));
        assert!(!parse_post_pebbles("CYCLENUM<mwB>12"));
        assert!(!parse_post_pebbles("SSAICONVERSATIONSHAD<mwB>junk"));
    }
}
