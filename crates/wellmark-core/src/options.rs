//! Configuration options for HTML rendering

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Added to every heading level, clamped to `h6`
    pub heading_offset: u8,

    /// `target` attribute for external links
    pub external_link_target: Option<String>,

    /// `rel` attribute for external links
    pub external_link_rel: Option<String>,

    /// Emit `javascript:`, `vbscript:` and `data:` urls as written
    pub allow_unsafe_links: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            heading_offset: 0,
            external_link_target: Some("_blank".to_string()),
            external_link_rel: Some("noopener noreferrer".to_string()),
            allow_unsafe_links: false,
        }
    }
}

impl HtmlOptions {
    /// Options that add no attributes to links
    pub fn plain() -> Self {
        Self {
            external_link_target: None,
            external_link_rel: None,
            ..Default::default()
        }
    }
}
