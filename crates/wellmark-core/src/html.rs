//! HTML rendering
//!
//! Maps block and inline nodes to escaped HTML markup.

use crate::ast::{Block, Inline, ListItem};
use crate::options::HtmlOptions;

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://"];
const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Render blocks to an HTML string, one block per line
pub fn render_html(blocks: &[Block], options: &HtmlOptions) -> String {
    let mut output = String::with_capacity(blocks.len() * 64);

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        render_block(block, options, &mut output);
    }

    output
}

fn render_block(block: &Block, options: &HtmlOptions, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            let level = level.saturating_add(options.heading_offset).clamp(1, 6);
            out.push_str("<h");
            out.push(char::from(b'0' + level));
            out.push('>');
            render_inlines(content, options, out);
            out.push_str("</h");
            out.push(char::from(b'0' + level));
            out.push('>');
        }

        Block::Paragraph(inlines) => {
            out.push_str("<p>");
            render_inlines(inlines, options, out);
            out.push_str("</p>");
        }

        Block::BlockQuote(inlines) => {
            out.push_str("<blockquote><p>");
            render_inlines(inlines, options, out);
            out.push_str("</p></blockquote>");
        }

        Block::List { items } => render_list(items, options, out),

        Block::ThematicBreak => out.push_str("<hr />"),
    }
}

fn render_list(items: &[ListItem], options: &HtmlOptions, out: &mut String) {
    out.push_str("<ul>\n");
    for item in items {
        out.push_str("<li>");
        render_inlines(&item.content, options, out);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>");
}

fn render_inlines(inlines: &[Inline], options: &HtmlOptions, out: &mut String) {
    for inline in inlines {
        render_inline(inline, options, out);
    }
}

fn render_inline(inline: &Inline, options: &HtmlOptions, out: &mut String) {
    match inline {
        Inline::Text(text) => push_escaped(text, out),

        Inline::Strong(content) => {
            out.push_str("<strong>");
            render_inlines(content, options, out);
            out.push_str("</strong>");
        }

        Inline::Emphasis(text) => {
            out.push_str("<em>");
            push_escaped(text, out);
            out.push_str("</em>");
        }

        Inline::Link { label, url } => {
            let href = if options.allow_unsafe_links || !is_unsafe_url(url) {
                url.as_str()
            } else {
                "#"
            };

            out.push_str("<a href=\"");
            push_escaped(href, out);
            out.push('"');
            if is_external_url(href) {
                if let Some(target) = &options.external_link_target {
                    out.push_str(" target=\"");
                    push_escaped(target, out);
                    out.push('"');
                }
                if let Some(rel) = &options.external_link_rel {
                    out.push_str(" rel=\"");
                    push_escaped(rel, out);
                    out.push('"');
                }
            }
            out.push('>');
            push_escaped(label, out);
            out.push_str("</a>");
        }
    }
}

/// Whether a url points off-site
pub fn is_external_url(url: &str) -> bool {
    url.starts_with("//") || EXTERNAL_SCHEMES.iter().any(|scheme| has_scheme(url, scheme))
}

fn is_unsafe_url(url: &str) -> bool {
    let url = url.trim_start();
    UNSAFE_SCHEMES.iter().any(|scheme| has_scheme(url, scheme))
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    push_escaped(text, &mut result);
    result
}

fn push_escaped(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
