//! Reading and writing a header's block content.
//!
//! `parse_sequence` never fails. Content that is not a JSON array is legacy
//! text and is promoted to a single text block; an empty or missing value is
//! an empty sequence. Array elements that cannot be decoded as a block (an
//! unknown `type`, say) are kept as [`BlockData::Unknown`] so saving the
//! sequence writes them back untouched.

use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::{new_block_id, Block, BlockData, TextBlock};
use crate::error::Result;

pub fn parse_sequence(raw: Option<&str>) -> Vec<Block> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
            Ok(values) => return values.into_iter().map(decode_block).collect(),
            Err(err) => debug!("content is not a block array ({}), promoting to text", err),
        }
    }

    vec![promote_plain_text(trimmed)]
}

pub fn serialize_sequence(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string(blocks)?)
}

/// True when `raw` is block content rather than markdown.
pub fn is_block_sequence(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.starts_with('[') && serde_json::from_str::<Vec<serde_json::Value>>(trimmed).is_ok()
}

/// Give a fresh id to any block whose id repeats an earlier one.
/// Returns the number of blocks re-identified.
pub fn ensure_unique_ids(blocks: &mut [Block]) -> usize {
    let mut seen = HashSet::new();
    let mut fixed = 0;
    for block in blocks.iter_mut() {
        if !seen.insert(block.id.clone()) {
            block.id = new_block_id();
            seen.insert(block.id.clone());
            fixed += 1;
        }
    }
    fixed
}

fn decode_block(value: serde_json::Value) -> Block {
    match Block::deserialize(&value) {
        Ok(block) => block,
        Err(err) => {
            warn!("keeping undecodable block as stored: {}", err);
            Block::unknown(value)
        }
    }
}

fn promote_plain_text(text: &str) -> Block {
    Block::new(BlockData::Text(TextBlock {
        html: text.replace('\n', "<br>"),
        ..TextBlock::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{create_block, BlockKind, BlockWidth};

    #[test]
    fn test_empty_input_is_empty_sequence() {
        assert!(parse_sequence(None).is_empty());
        assert!(parse_sequence(Some("")).is_empty());
        assert!(parse_sequence(Some("   \n\t")).is_empty());
    }

    #[test]
    fn test_plain_text_promoted_with_line_breaks() {
        let blocks = parse_sequence(Some("  line one\nline two  "));
        assert_eq!(blocks.len(), 1);
        match &blocks[0].data {
            BlockData::Text(text) => {
                assert_eq!(text.html, "line one<br>line two");
                assert_eq!(text.font_size, 14);
            }
            other => panic!("expected text block, got {:?}", other),
        }
    }

    #[test]
    fn test_promotion_is_idempotent_apart_from_id() {
        let a = parse_sequence(Some("some plain text"));
        let b = parse_sequence(Some("some plain text"));
        assert_ne!(a[0].id, b[0].id);
        assert_eq!(a[0].data, b[0].data);
        assert_eq!(a[0].width, b[0].width);
    }

    #[test]
    fn test_malformed_array_falls_through_to_text() {
        let blocks = parse_sequence(Some("[not, json"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].data.markup(), Some("[not, json"));
    }

    #[test]
    fn test_round_trip() {
        let mut blocks: Vec<Block> = BlockKind::ALL.iter().map(|k| create_block(*k)).collect();
        blocks[1].width = Some(BlockWidth::Third);
        if let BlockData::Table(table) = &mut blocks[5].data {
            table.rows[0][0] = "Name".to_string();
        }

        let raw = serialize_sequence(&blocks).unwrap();
        assert_eq!(parse_sequence(Some(&raw)), blocks);
    }

    #[test]
    fn test_empty_array_round_trips() {
        let raw = serialize_sequence(&[]).unwrap();
        assert_eq!(raw, "[]");
        assert!(parse_sequence(Some(&raw)).is_empty());
        assert!(is_block_sequence(&raw));
    }

    #[test]
    fn test_undecodable_elements_survive_a_save() {
        let raw = r#"[{"id":"a","data":{"type":"video","src":"clip.mp4"}},{"id":"b","data":{"type":"text","html":"keep me","fontSize":15.5}},{"id":"c","data":{"type":"quote","html":"hi"}}]"#;
        let blocks = parse_sequence(Some(raw));
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind(), BlockKind::Unknown);
        assert_eq!(blocks[1].kind(), BlockKind::Unknown);
        assert_eq!(blocks[1].id, "b");
        assert_eq!(blocks[2].kind(), BlockKind::Quote);

        let saved = serialize_sequence(&blocks).unwrap();
        let before: serde_json::Value = serde_json::from_str(raw).unwrap();
        let after: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[1]);
        assert_eq!(after[2]["data"]["html"], "hi");
    }

    #[test]
    fn test_non_object_elements_are_kept() {
        let blocks = parse_sequence(Some(r#"[42, {"id":"q","data":{"type":"quote"}}]"#));
        assert_eq!(blocks.len(), 2);
        let saved = serialize_sequence(&blocks).unwrap();
        assert!(saved.starts_with("[42,"));
    }

    #[test]
    fn test_ensure_unique_ids() {
        let first = create_block(BlockKind::Text);
        let mut blocks = vec![first.clone(), first.clone(), create_block(BlockKind::Badge)];
        assert_eq!(ensure_unique_ids(&mut blocks), 1);
        assert_eq!(blocks[0].id, first.id);
        assert_ne!(blocks[1].id, first.id);
    }
}
