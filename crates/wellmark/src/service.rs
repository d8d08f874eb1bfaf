//! Renderer - the main entry point for turning post bodies into HTML.

use wellmark_core::{render_html, Block, HtmlOptions};

use crate::post::{FrontMatter, Post, DEFAULT_EXCERPT_CHARS};
use crate::rules::{Rule, Rules};

/// A post ready for a page template
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPost {
    pub front_matter: FrontMatter,
    pub html: String,
    pub excerpt: String,
}

/// Parses the markdown subset, rewrites links and renders HTML
pub struct Renderer {
    options: HtmlOptions,
    rules: Rules,
}

impl Renderer {
    /// Create a new Renderer with default options
    pub fn new() -> Self {
        Self {
            options: HtmlOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a Renderer with custom options
    pub fn with_options(options: HtmlOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Add a link rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove a link rule
    pub fn remove_rule(&mut self, key: &str) -> Option<Rule> {
        self.rules.remove(key)
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut HtmlOptions {
        &mut self.options
    }

    /// Parse source into blocks with link rules applied
    pub fn parse(&self, source: &str) -> Vec<Block> {
        let mut blocks = crate::parse(source);
        self.rules.apply(&mut blocks);
        blocks
    }

    /// Convert source to HTML
    pub fn to_html(&self, source: &str) -> String {
        render_html(&self.parse(source), &self.options)
    }

    /// Render a post body and compute its listing excerpt
    pub fn render_post(&self, post: &Post) -> RenderedPost {
        let blocks = self.parse(&post.body);
        let excerpt = match &post.front_matter.excerpt {
            Some(_) => post.excerpt(DEFAULT_EXCERPT_CHARS),
            None => crate::utilities::excerpt(&blocks, DEFAULT_EXCERPT_CHARS),
        };

        RenderedPost {
            front_matter: post.front_matter.clone(),
            html: render_html(&blocks, &self.options),
            excerpt,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
