//! Plain-text helpers for listings and previews.

use wellmark_core::Block;

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Visible text of all blocks, one block per line
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter(|b| has_text(b))
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short preview text: the first paragraph, or the first non-blank block when
/// there is none, cut on a word boundary to at most `max_chars` characters
/// plus an ellipsis.
pub fn excerpt(blocks: &[Block], max_chars: usize) -> String {
    let source = blocks
        .iter()
        .find(|b| matches!(b, Block::Paragraph(_)) && has_text(b))
        .or_else(|| blocks.iter().find(|b| has_text(b)));

    match source {
        Some(block) => truncate_words(&block.plain_text(), max_chars),
        None => String::new(),
    }
}

fn has_text(block: &Block) -> bool {
    !matches!(block, Block::ThematicBreak) && !block.is_blank()
}

/// Collapse whitespace and truncate on a word boundary
pub fn truncate_words(text: &str, max_chars: usize) -> String {
    let text = collapse_whitespace(text);
    let text = text.trim();

    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..cut];

    // Back up to the last space unless the cut already falls between words
    let head = if text[cut..].starts_with(' ') {
        head
    } else {
        head.rfind(' ').map(|i| &head[..i]).unwrap_or(head)
    };

    let head = head.trim_end_matches(|c: char| c.is_whitespace() || ",;:-".contains(c));
    format!("{}…", head)
}
