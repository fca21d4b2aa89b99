/// Top-level record separator inside a campaign save blob.
pub const RECORD_SEPARATOR: &str = "<svA>";
/// Separator between a save record's category tag and its payload.
pub const FIELD_SEPARATOR: &str = "<svB>";

/// Separator between a progression line's tag and its payload.
pub const PROGRESSION_SEPARATOR: &str = "<progDivB>";

/// Entry and field separators inside the death-persistent payload.
pub const PERSISTENT_ENTRY_SEPARATOR: &str = "<dpA>";
pub const PERSISTENT_FIELD_SEPARATOR: &str = "<dpB>";

/// Entry and field separators inside the misc-world payload.
pub const WORLD_ENTRY_SEPARATOR: &str = "<mwA>";
pub const WORLD_FIELD_SEPARATOR: &str = "<mwB>";

/// Save record category holding death-persistent data (read chatlogs).
pub const PERSISTENT_CATEGORY: &str = "DEATHPERSISTENTSAVEDATA";
/// Save record category holding misc world data (oracle conversations).
pub const WORLD_CATEGORY: &str = "MISCWORLDSAVEDATA";

/// Progression line tag marking a campaign save state.
pub const SAVE_STATE_TAG: &str = "SAVE STATE";
/// Save record naming the campaign a save state belongs to.
pub const SAVE_STATE_NUMBER_TAG: &str = "SAVE STATE NUMBER";

/// Death-persistent entry recording one read chatlog.
pub const CHATLOG_TAG: &str = "CHATLOG";
/// Misc-world entry counting oracle conversations.
pub const CONVERSATIONS_TAG: &str = "SSAICONVERSATIONSHAD";

/// Split `input` into `(tag, payload)` pairs on the given literal entry and
/// field separators. Entries without both parts are skipped.
pub fn split_tagged<'a>(
    input: &'a str,
    entry_sep: &str,
    field_sep: &str,
) -> Vec<(&'a str, &'a str)> {
    input
        .split(entry_sep)
        .filter_map(|entry| entry.split_once(field_sep))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tagged_skips_entries_without_a_field_separator() {
        let input = "A<svB>1<svA>garbage<svA>B<svB>2";
        let parsed = split_tagged(input, RECORD_SEPARATOR, FIELD_SEPARATOR);
        assert_eq!(parsed, vec![("A", "1"), ("B", "2")]);
    }

    #[test]
    fn split_tagged_keeps_separators_literal() {
        // A dot must not behave as a wildcard.
        let parsed = split_tagged("AxsvBx1", "<svA>", ".svB.");
        assert!(parsed.is_empty());
    }

    #[test]
    fn split_tagged_splits_payload_on_first_field_separator_only() {
        let parsed = split_tagged("A<svB>1<svB>2", RECORD_SEPARATOR, FIELD_SEPARATOR);
        assert_eq!(parsed, vec![("A", "1<svB>2")]);
    }
}
