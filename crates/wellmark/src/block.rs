//! Line-based block scanning.

use wellmark_core::{Block, ListItem};

use crate::inline::parse_inlines;

/// Classification of a single trimmed source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Blank,
    Heading(u8, &'a str),
    Quote(&'a str),
    Rule,
    ListItem(&'a str),
    Paragraph(&'a str),
}

/// Classify a line by its leading token. Checks run in a fixed order.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.is_empty() {
        LineKind::Blank
    } else if let Some(rest) = line.strip_prefix("# ") {
        LineKind::Heading(1, rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        LineKind::Heading(2, rest)
    } else if let Some(rest) = line.strip_prefix("### ") {
        LineKind::Heading(3, rest)
    } else if let Some(rest) = line.strip_prefix("> ") {
        LineKind::Quote(rest)
    } else if line == "---" {
        LineKind::Rule
    } else if let Some(rest) = line.strip_prefix("- ") {
        LineKind::ListItem(rest)
    } else {
        LineKind::Paragraph(line)
    }
}

/// Parse a post body into blocks, preserving source order
pub fn parse(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list: Vec<ListItem> = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let kind = classify(line);
        log::debug!("Line {}: {:?}", index + 1, kind);

        if let LineKind::ListItem(text) = kind {
            list.push(ListItem::new(parse_inlines(text)));
            continue;
        }

        flush_list(&mut list, &mut blocks);

        match kind {
            LineKind::Blank | LineKind::ListItem(_) => {}
            LineKind::Heading(level, text) => blocks.push(Block::Heading {
                level,
                content: parse_inlines(text),
            }),
            LineKind::Quote(text) => blocks.push(Block::BlockQuote(parse_inlines(text))),
            LineKind::Rule => blocks.push(Block::ThematicBreak),
            LineKind::Paragraph(text) => blocks.push(Block::Paragraph(parse_inlines(text))),
        }
    }

    flush_list(&mut list, &mut blocks);
    blocks
}

/// Emit the open list, if any
fn flush_list(list: &mut Vec<ListItem>, blocks: &mut Vec<Block>) {
    if list.is_empty() {
        return;
    }
    log::trace!("Flushing list with {} items", list.len());
    blocks.push(Block::List {
        items: std::mem::take(list),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellmark_core::Inline;

    fn text(value: &str) -> Vec<Inline> {
        vec![Inline::text(value)]
    }

    fn list(items: &[&str]) -> Block {
        Block::List {
            items: items.iter().map(|i| ListItem::new(text(i))).collect(),
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("# A"), LineKind::Heading(1, "A"));
        assert_eq!(classify("## A"), LineKind::Heading(2, "A"));
        assert_eq!(classify("  ### A  "), LineKind::Heading(3, "A"));
        assert_eq!(classify("#### A"), LineKind::Paragraph("#### A"));
        assert_eq!(classify("#A"), LineKind::Paragraph("#A"));
        assert_eq!(classify("##"), LineKind::Paragraph("##"));
        assert_eq!(classify("# "), LineKind::Paragraph("#"));
        assert_eq!(classify("> quote"), LineKind::Quote("quote"));
        assert_eq!(classify(">quote"), LineKind::Paragraph(">quote"));
        assert_eq!(classify(" --- "), LineKind::Rule);
        assert_eq!(classify("----"), LineKind::Paragraph("----"));
        assert_eq!(classify("- item"), LineKind::ListItem("item"));
        assert_eq!(classify("-item"), LineKind::Paragraph("-item"));
    }

    #[test]
    fn test_empty() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_heading() {
        assert_eq!(
            parse("# Title"),
            vec![Block::Heading {
                level: 1,
                content: text("Title"),
            }]
        );
    }

    #[test]
    fn test_heading_keeps_inner_spacing() {
        assert_eq!(
            parse("##   Spaced"),
            vec![Block::Heading {
                level: 2,
                content: text("  Spaced"),
            }]
        );
    }

    #[test]
    fn test_list_aggregates() {
        assert_eq!(parse("- a\n- b\n- c"), vec![list(&["a", "b", "c"])]);
    }

    #[test]
    fn test_blank_line_flushes_list() {
        assert_eq!(
            parse("- a\n\nparagraph"),
            vec![list(&["a"]), Block::Paragraph(text("paragraph"))]
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        assert_eq!(parse("- a\n\n- b"), vec![list(&["a"]), list(&["b"])]);
    }

    #[test]
    fn test_heading_splits_lists() {
        assert_eq!(
            parse("- a\n## Mid\n- b"),
            vec![
                list(&["a"]),
                Block::Heading {
                    level: 2,
                    content: text("Mid"),
                },
                list(&["b"]),
            ]
        );
    }

    #[test]
    fn test_mixed_document() {
        let source = "# Welcome\n\
                      Intro line\n\
                      > Be here now\n\
                      ---\n\
                      - one\n\
                      - two\n";
        assert_eq!(
            parse(source),
            vec![
                Block::Heading {
                    level: 1,
                    content: text("Welcome"),
                },
                Block::Paragraph(text("Intro line")),
                Block::BlockQuote(text("Be here now")),
                Block::ThematicBreak,
                list(&["one", "two"]),
            ]
        );
    }

    #[test]
    fn test_consecutive_lines_are_separate_paragraphs() {
        assert_eq!(
            parse("first\nsecond"),
            vec![
                Block::Paragraph(text("first")),
                Block::Paragraph(text("second")),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            parse("- a\r\n- b\r\n"),
            vec![list(&["a", "b"])]
        );
    }
}
