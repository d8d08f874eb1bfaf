//! Rule and Filter types for link rewriting.

/// Type alias for rewrite functions
pub type RewriteFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A filter determines which link urls a rule applies to
pub enum Filter {
    /// Match urls starting with a prefix
    Prefix(String),
    /// Match urls starting with any of several prefixes
    Prefixes(Vec<String>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single prefix
    pub fn prefix(prefix: &str) -> Self {
        Filter::Prefix(prefix.to_string())
    }

    /// Create a filter for multiple prefixes
    pub fn prefixes(prefixes: &[&str]) -> Self {
        Filter::Prefixes(prefixes.iter().map(|s| s.to_string()).collect())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a url
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Filter::Prefix(p) => url.starts_with(p.as_str()),
            Filter::Prefixes(ps) => ps.iter().any(|p| url.starts_with(p.as_str())),
            Filter::Predicate(f) => f(url),
        }
    }
}

/// A rule rewrites the url of every link its filter matches
pub struct Rule {
    /// Filter to determine which urls this rule applies to
    pub filter: Filter,
    /// Function producing the replacement url
    pub rewrite: RewriteFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, rewrite: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            rewrite: Box::new(rewrite),
        }
    }

    /// Create a rule that matches a single prefix
    pub fn for_prefix<F>(prefix: &str, rewrite: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::prefix(prefix), rewrite)
    }

    /// Apply this rule's rewrite
    pub fn apply(&self, url: &str) -> String {
        (self.rewrite)(url)
    }
}
