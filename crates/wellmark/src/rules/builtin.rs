//! Ready-made link rules.

use super::{Filter, Rule};

/// Prefix root-relative urls (`/about`) with a base path, for sites served
/// below the domain root. Protocol-relative urls (`//host`) are left alone.
pub fn site_relative(base: &str) -> Rule {
    let base = base.trim_end_matches('/').to_string();
    Rule::new(
        Filter::predicate(|url| url.starts_with('/') && !url.starts_with("//")),
        move |url| format!("{}{}", base, url),
    )
}

/// Turn bare addresses such as `hello@example.com` into `mailto:` links
pub fn mailto() -> Rule {
    Rule::new(
        Filter::predicate(|url| {
            url.contains('@') && !url.contains(':') && !url.contains('/')
        }),
        |url| format!("mailto:{}", url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_relative() {
        let rule = site_relative("/studio/");
        assert!(rule.filter.matches("/events"));
        assert!(!rule.filter.matches("//cdn.example.com/a.png"));
        assert!(!rule.filter.matches("https://example.com"));
        assert!(!rule.filter.matches("events"));
        assert_eq!(rule.apply("/events"), "/studio/events");
    }

    #[test]
    fn test_mailto() {
        let rule = mailto();
        assert!(rule.filter.matches("hello@example.com"));
        assert!(!rule.filter.matches("mailto:hello@example.com"));
        assert!(!rule.filter.matches("https://example.com/@handle"));
        assert_eq!(rule.apply("hello@example.com"), "mailto:hello@example.com");
    }
}
