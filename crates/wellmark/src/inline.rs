//! Inline formatting for a single line of text.
//!
//! Links are matched first, then `**strong**` spans whose delimiters sit
//! outside every link, then `*emphasis*` in whatever text remains. Markup
//! that never closes is kept as literal text.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use wellmark_core::Inline;

/// `[label](url)`; the label has no brackets, the url no parentheses or spaces
static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]\(\s*([^()\s]+)\s*\)").unwrap());

/// `*text*` with no asterisk inside
static EMPHASIS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

struct LinkMatch<'a> {
    range: Range<usize>,
    label: &'a str,
    url: &'a str,
}

/// Convert one line of text into inline nodes
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let links: Vec<LinkMatch> = LINK_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            Some(LinkMatch {
                range: caps.get(0)?.range(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect();

    let mut out = Vec::new();
    let mut pos = 0;

    while let Some((open, close)) = find_strong(text, pos, &links) {
        push_links_and_emphasis(text, pos..open, &links, &mut out);

        let mut content = Vec::new();
        push_links_and_emphasis(text, open + 2..close, &links, &mut content);
        out.push(Inline::Strong(content));

        pos = close + 2;
    }

    push_links_and_emphasis(text, pos..text.len(), &links, &mut out);
    out
}

/// Find the next `**…**` pair at or after `from`, returning the byte offsets
/// of the opening and closing delimiters.
fn find_strong(text: &str, from: usize, links: &[LinkMatch]) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut search = from;

    while let Some(open) = find_delimiter(bytes, search, links) {
        // Inner text must be non-empty
        if let Some(mut close) = find_delimiter(bytes, open + 3, links) {
            // `***x***` keeps the inner `*x*` balanced
            if bytes[open + 2] == b'*' && bytes.get(close + 2) == Some(&b'*') {
                close += 1;
            }
            return Some((open, close));
        }
        search = open + 1;
    }

    None
}

fn find_delimiter(bytes: &[u8], from: usize, links: &[LinkMatch]) -> Option<usize> {
    (from..bytes.len().saturating_sub(1)).find(|&i| {
        bytes[i] == b'*'
            && bytes[i + 1] == b'*'
            && !links
                .iter()
                .any(|link| link.range.start < i + 2 && i < link.range.end)
    })
}

fn push_links_and_emphasis(
    text: &str,
    range: Range<usize>,
    links: &[LinkMatch],
    out: &mut Vec<Inline>,
) {
    let mut pos = range.start;

    for link in links
        .iter()
        .filter(|link| link.range.start >= range.start && link.range.end <= range.end)
    {
        push_emphasis(&text[pos..link.range.start], out);
        out.push(Inline::link(link.label, link.url));
        pos = link.range.end;
    }

    push_emphasis(&text[pos..range.end], out);
}

fn push_emphasis(text: &str, out: &mut Vec<Inline>) {
    let mut pos = 0;

    for caps in EMPHASIS_REGEX.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&text[pos..whole.start()], out);
        out.push(Inline::emphasis(inner.as_str()));
        pos = whole.end();
    }

    push_text(&text[pos..], out);
}

/// Append text, merging with a preceding text node
fn push_text(text: &str, out: &mut Vec<Inline>) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(Inline::Text(prev)) => prev.push_str(text),
        _ => out.push(Inline::text(text)),
    }
}
