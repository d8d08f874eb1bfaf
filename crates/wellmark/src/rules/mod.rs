//! Rule system for rewriting link urls before rendering.

mod builtin;
mod rule;

pub use builtin::{mailto, site_relative};
pub use rule::{Filter, RewriteFn, Rule};

use indexmap::IndexMap;
use wellmark_core::{Block, Inline};

/// Collection of link rules, checked in insertion order
pub struct Rules {
    rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Add a rule. Re-using a key replaces the rule but keeps its position.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.rules.insert(key.to_string(), rule);
    }

    /// Remove a rule by key
    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.rules.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the first rule matching a url
    pub fn for_url(&self, url: &str) -> Option<(&str, &Rule)> {
        self.rules
            .iter()
            .find(|(_, rule)| rule.filter.matches(url))
            .map(|(key, rule)| (key.as_str(), rule))
    }

    /// Rewrite a url with the first matching rule, if any
    pub fn rewrite_url(&self, url: &str) -> Option<String> {
        let (key, rule) = self.for_url(url)?;
        let rewritten = rule.apply(url);
        log::trace!("Rule {} rewrote {} -> {}", key, url, rewritten);
        Some(rewritten)
    }

    /// Rewrite every link url in the given blocks
    pub fn apply(&self, blocks: &mut [Block]) {
        if self.rules.is_empty() {
            return;
        }
        for block in blocks {
            match block {
                Block::Heading { content, .. } => self.apply_inlines(content),
                Block::Paragraph(inlines) | Block::BlockQuote(inlines) => {
                    self.apply_inlines(inlines)
                }
                Block::List { items } => {
                    for item in items {
                        self.apply_inlines(&mut item.content);
                    }
                }
                Block::ThematicBreak => {}
            }
        }
    }

    fn apply_inlines(&self, inlines: &mut [Inline]) {
        for inline in inlines {
            match inline {
                Inline::Link { url, .. } => {
                    if let Some(rewritten) = self.rewrite_url(url) {
                        *url = rewritten;
                    }
                }
                Inline::Strong(content) => self.apply_inlines(content),
                Inline::Text(_) | Inline::Emphasis(_) => {}
            }
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
