//! Turns free-text recipe blocks into structured drafts.
//!
//! The input format is deliberately loose: within a block, any line that
//! starts with one of eight known `field:` prefixes (case-insensitive)
//! populates that field; everything else is ignored. Blocks in a file are
//! separated by `---`.

use crate::model::RecipeDraft;

/// Separator between recipe blocks in a favorites file.
pub const BLOCK_DELIMITER: &str = "---";

/// Parse a single recipe text block into a draft.
///
/// Each line is matched case-insensitively against the known prefixes;
/// the value is everything after the first colon, trimmed. A prefix seen
/// twice overwrites the earlier value. Unrecognized lines are skipped.
/// This never fails: worst case is a draft with every field `None`.
pub fn parse_block(raw_block: &str) -> RecipeDraft {
    let mut draft = RecipeDraft::default();

    for line in raw_block.trim().lines() {
        // Trim and lowercase only for the prefix test; the value is cut
        // from the original line so embedded colons survive.
        let lower = line.trim().to_lowercase();
        if lower.starts_with("title:") {
            draft.title = Some(field_value(line));
        } else if lower.starts_with("ingredients:") {
            draft.ingredients = Some(field_value(line));
        } else if lower.starts_with("instructions:") {
            draft.instructions = Some(field_value(line));
        } else if lower.starts_with("taste:") {
            draft.taste = Some(field_value(line));
        } else if lower.starts_with("reviews:") {
            draft.reviews = Some(field_value(line));
        } else if lower.starts_with("cuisine:") {
            draft.cuisine = Some(field_value(line));
        } else if lower.starts_with("preptime:") {
            draft.prep_time = Some(field_value(line));
        } else if lower.starts_with("additionaltags:") {
            draft.additional_tags = Some(field_value(line));
        }
    }

    draft
}

/// Everything after the first colon, trimmed.
fn field_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or("")
        .to_string()
}

/// Split file content on the `---` delimiter and parse each block.
///
/// Empty or whitespace-only segments are dropped, so files that start or
/// end with a delimiter (or contain nothing but delimiters) are fine.
/// Drafts come back in source order.
pub fn split_blocks(content: &str) -> Vec<RecipeDraft> {
    content
        .split(BLOCK_DELIMITER)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(parse_block)
        .collect()
}
