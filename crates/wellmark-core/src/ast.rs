//! Post body node model
//!
//! Block and inline nodes produced by the scanner and consumed by the HTML
//! adapter. Text is carried as data, never as pre-rendered markup.

/// A block-level node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level (1-3) and inline content
    Heading {
        level: u8,
        content: Vec<Inline>,
    },

    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),

    /// Single-line block quote
    BlockQuote(Vec<Inline>),

    /// Unordered list built from contiguous `- ` lines
    List { items: Vec<ListItem> },

    /// Thematic break (horizontal rule)
    ThematicBreak,
}

/// A list item holding one line of inline content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    pub fn is_blank(&self) -> bool {
        self.content.iter().all(|i| i.is_blank())
    }
}

/// An inline node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Strong emphasis (bold). Children are `Text`, `Emphasis` or `Link`.
    Strong(Vec<Inline>),

    /// Emphasis (italic), single level only
    Emphasis(String),

    /// Link with a literal label
    Link { label: String, url: String },
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }

    /// Bold span with a single text child
    pub fn strong(value: impl Into<String>) -> Self {
        Inline::Strong(vec![Inline::Text(value.into())])
    }

    pub fn emphasis(value: impl Into<String>) -> Self {
        Inline::Emphasis(value.into())
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Check if this inline is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) | Inline::Emphasis(text) => text.trim().is_empty(),
            Inline::Strong(inlines) => inlines.iter().all(|i| i.is_blank()),
            // Still navigable with an empty label
            Inline::Link { .. } => false,
        }
    }

    /// Visible text of this inline, markup removed
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Emphasis(text) => out.push_str(text),
            Inline::Strong(inlines) => {
                for inline in inlines {
                    inline.push_plain_text(out);
                }
            }
            Inline::Link { label, .. } => out.push_str(label),
        }
    }
}

impl Block {
    /// Check if this block is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Block::Heading { content, .. } => content.iter().all(|i| i.is_blank()),
            Block::Paragraph(inlines) | Block::BlockQuote(inlines) => {
                inlines.iter().all(|i| i.is_blank())
            }
            Block::List { items } => items.iter().all(|i| i.is_blank()),
            Block::ThematicBreak => false,
        }
    }

    /// Visible text of this block. List items are joined by newlines.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { content, .. } => inlines_plain_text(content),
            Block::Paragraph(inlines) | Block::BlockQuote(inlines) => inlines_plain_text(inlines),
            Block::List { items } => items
                .iter()
                .map(|item| inlines_plain_text(&item.content))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::ThematicBreak => String::new(),
        }
    }
}

/// Helper to concatenate the visible text of an inline vec
pub fn inlines_plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        inline.push_plain_text(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_markup() {
        let inlines = vec![
            Inline::text("Join "),
            Inline::Strong(vec![Inline::text("the "), Inline::emphasis("spring")]),
            Inline::text(" "),
            Inline::link("retreat", "/events/spring"),
        ];
        assert_eq!(inlines_plain_text(&inlines), "Join the spring retreat");
    }

    #[test]
    fn test_list_plain_text() {
        let block = Block::List {
            items: vec![
                ListItem::new(vec![Inline::text("Breathe")]),
                ListItem::new(vec![Inline::text("Stretch")]),
            ],
        };
        assert_eq!(block.plain_text(), "Breathe\nStretch");
    }

    #[test]
    fn test_is_blank() {
        assert!(Block::Paragraph(vec![Inline::text("   ")]).is_blank());
        assert!(Block::List { items: vec![] }.is_blank());
        assert!(!Block::ThematicBreak.is_blank());
        assert!(!Block::Paragraph(vec![Inline::link(" ", "/x")]).is_blank());
        assert!(!Block::Heading {
            level: 2,
            content: vec![Inline::strong("Hi")],
        }
        .is_blank());
    }
}
