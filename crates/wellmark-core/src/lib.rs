//! wellmark-core - post body node model and HTML rendering
//!
//! This crate provides the node model produced by the `wellmark` scanner and
//! the adapter that turns it into HTML. It has no dependencies, so templating
//! layers can depend on the model without pulling in the parser.
//!
//! # Architecture
//!
//! ```text
//! Markdown subset ──wellmark::parse──▶ ┌────────────┐
//!                                      │ Vec<Block> │ ──render_html──▶ HTML String
//!                                      └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use wellmark_core::{render_html, Block, HtmlOptions, Inline};
//!
//! let blocks = vec![
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::text("Morning rituals")],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::text("Start "),
//!         Inline::strong("slowly"),
//!         Inline::text("."),
//!     ]),
//! ];
//!
//! let html = render_html(&blocks, &HtmlOptions::default());
//! assert_eq!(html, "<h1>Morning rituals</h1>\n<p>Start <strong>slowly</strong>.</p>");
//! ```

mod ast;
mod html;
mod options;

pub use ast::{inlines_plain_text, Block, Inline, ListItem};
pub use html::{escape_html, is_external_url, render_html};
pub use options::HtmlOptions;
