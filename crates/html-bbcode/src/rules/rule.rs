//! Rule and Filter types for HTML to BBCode rewriting.

use html_bbcode_core::{Tag, TranslateOptions};

/// Type alias for custom replacement functions
pub type ReplacementFn = Box<dyn Fn(&Tag, &TranslateOptions) -> String + Send + Sync>;

/// Type alias for filter predicates
pub type PredicateFn = Box<dyn Fn(&str, &Tag, &TranslateOptions) -> bool + Send + Sync>;

/// A filter determines which tags a rule applies to
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match any of multiple tag names
    TagNames(Vec<String>),
    /// Match using a predicate function
    Predicate(PredicateFn),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    /// Create a filter for multiple tags
    pub fn tags(names: &[&str]) -> Self {
        Filter::TagNames(names.iter().map(|s| s.to_lowercase()).collect())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &Tag, &TranslateOptions) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a tag
    pub fn matches(&self, tag: &Tag, options: &TranslateOptions) -> bool {
        let tag_lower = tag.name.to_lowercase();
        match self {
            Filter::TagName(t) => tag_lower == *t,
            Filter::TagNames(tags) => tags.contains(&tag_lower),
            Filter::Predicate(f) => f(&tag_lower, tag, options),
        }
    }
}

/// What a matched tag becomes
pub enum Replacement {
    /// Literal bracket pair. An empty side emits nothing.
    Pair { open: String, close: String },
    /// `[name=VALUE]` / `[/name]` with VALUE taken from an attribute.
    /// Both sides are skipped when the attribute is missing.
    Parameterized { name: String, attribute: String },
    /// Emit nothing for either side
    Drop,
    /// Splice the next pre-synthesized `[img]SRC[/img]`
    Image,
    /// Emit an attribute value as plain text; the close side is dropped
    AttributeText { attribute: String },
    /// Arbitrary function of the tag, called for every side
    Custom(ReplacementFn),
}

impl Replacement {
    /// Literal pair shorthand
    pub fn pair(open: &str, close: &str) -> Self {
        Replacement::Pair {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    /// `[open]` / `[/open]`
    pub fn bracket(name: &str) -> Self {
        Self::pair(&format!("[{}]", name), &format!("[/{}]", name))
    }

    /// Parameterized pair shorthand
    pub fn parameterized(name: &str, attribute: &str) -> Self {
        Replacement::Parameterized {
            name: name.to_string(),
            attribute: attribute.to_lowercase(),
        }
    }

    /// Custom function shorthand
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Tag, &TranslateOptions) -> String + Send + Sync + 'static,
    {
        Replacement::Custom(Box::new(f))
    }
}

/// A rule defines how to convert a matched HTML tag to BBCode
pub struct Rule {
    /// Filter to determine which tags this rule applies to
    pub filter: Filter,
    /// What the tag is rewritten to
    pub replacement: Replacement,
}

impl Rule {
    /// Create a new rule
    pub fn new(filter: Filter, replacement: Replacement) -> Self {
        Self {
            filter,
            replacement,
        }
    }

    /// Create a rule that matches a single tag
    pub fn for_tag(tag: &str, replacement: Replacement) -> Self {
        Self::new(Filter::tag(tag), replacement)
    }

    /// Create a rule that matches multiple tags
    pub fn for_tags(tags: &[&str], replacement: Replacement) -> Self {
        Self::new(Filter::tags(tags), replacement)
    }

    /// Create a rule backed by a replacement function
    pub fn custom<F>(filter: Filter, f: F) -> Self
    where
        F: Fn(&Tag, &TranslateOptions) -> String + Send + Sync + 'static,
    {
        Self::new(filter, Replacement::custom(f))
    }
}
