//! Blog posts: YAML front matter followed by a markdown-subset body.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use wellmark_core::Block;

use crate::utilities::truncate_words;
use crate::{Result, WellmarkError};

/// Excerpt length used when rendering posts for listings
pub const DEFAULT_EXCERPT_CHARS: usize = 160;

const FRONT_MATTER_DELIMITER: &str = "---";

/// Metadata block at the top of a post
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
    pub draft: bool,
    /// Any other keys, in source order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// A post split into front matter and body
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub front_matter: FrontMatter,
    pub body: String,
    pub path: Option<PathBuf>,
}

impl Post {
    /// Parse a post from text.
    ///
    /// A first line of `---` opens the front matter, which runs to the next
    /// `---` line. Without it the whole text is the body.
    pub fn parse(source: &str) -> Result<Self> {
        let (yaml, body) = split_front_matter(source)?;

        let front_matter = match yaml {
            Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str(yaml)?,
            _ => FrontMatter::default(),
        };

        Ok(Self {
            front_matter,
            body: body.to_string(),
            path: None,
        })
    }

    /// Read and parse a post file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| WellmarkError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut post = Self::parse(&source)?;
        post.path = Some(path.to_path_buf());
        log::debug!(
            "Loaded post {} ({} bytes of body)",
            path.display(),
            post.body.len()
        );
        Ok(post)
    }

    pub fn title(&self) -> Option<&str> {
        self.front_matter.title.as_deref()
    }

    pub fn is_draft(&self) -> bool {
        self.front_matter.draft
    }

    /// Parse the body into blocks
    pub fn blocks(&self) -> Vec<Block> {
        crate::parse(&self.body)
    }

    /// The front matter excerpt, or one derived from the body
    pub fn excerpt(&self, max_chars: usize) -> String {
        match &self.front_matter.excerpt {
            Some(excerpt) => truncate_words(excerpt, max_chars),
            None => crate::utilities::excerpt(&self.blocks(), max_chars),
        }
    }
}

/// Split `source` into optional front matter text and the body
fn split_front_matter(source: &str) -> Result<(Option<&str>, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let mut offset = match lines.next() {
        Some(first) if first.trim_end() == FRONT_MATTER_DELIMITER => first.len(),
        _ => return Ok((None, source)),
    };
    let yaml_start = offset;

    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Ok((Some(&source[yaml_start..offset]), &source[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(WellmarkError::UnterminatedFrontMatter)
}
