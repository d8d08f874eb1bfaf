//! # wellmark
//!
//! Render blog posts written in a small markdown subset.
//!
//! The dialect covers `#`/`##`/`###` headings, `> ` quotes, `---` rules,
//! `- ` lists and paragraphs, with `**bold**`, `*italic*` and
//! `[label](url)` inside a line. Everything else is plain text: malformed
//! markup degrades to literal characters and parsing never fails.
//!
//! ## Design
//!
//! Parsing produces the node model from `wellmark-core`, which carries text as
//! data. HTML is produced by a separate adapter so that escaping stays in one
//! place and templating layers can map nodes however they like.
//!
//! ## Example
//!
//! ```rust
//! use wellmark::{parse, Block, Inline};
//!
//! let blocks = parse("# Retreats\n- **Spring** in the hills");
//! assert_eq!(
//!     blocks[0],
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::text("Retreats")],
//!     }
//! );
//! ```
//!
//! ## Example (HTML)
//!
//! ```rust
//! use wellmark::{rules, Renderer};
//!
//! let mut renderer = Renderer::new();
//! renderer.add_rule("base", rules::site_relative("/studio"));
//!
//! let html = renderer.to_html("Read [about us](/about).");
//! assert_eq!(html, "<p>Read <a href=\"/studio/about\">about us</a>.</p>");
//! ```

use std::path::PathBuf;

mod block;
mod inline;
pub mod post;
pub mod rules;
mod service;
mod utilities;

pub use block::parse;
pub use inline::parse_inlines;
pub use post::{FrontMatter, Post};
pub use rules::{Filter, Rule, Rules};
pub use service::{RenderedPost, Renderer};
pub use utilities::*;
pub use wellmark_core::{
    escape_html, inlines_plain_text, is_external_url, render_html, Block, HtmlOptions, Inline,
    ListItem,
};

/// Alias of [`parse`]
pub fn render(source: &str) -> Vec<Block> {
    parse(source)
}

/// Error type for loading posts
#[derive(Debug, thiserror::Error)]
pub enum WellmarkError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Front matter opened on the first line is never closed")]
    UnterminatedFrontMatter,

    #[error("Invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, WellmarkError>;
