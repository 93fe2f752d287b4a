//! Editor style capabilities.
//!
//! Each style an editor can be configured with is one variant of [`Style`].
//! The editor's schema and the BBCode rewrite rules are both derived from the
//! same [`StyleSet`], so enabling a style in one place enables it in the other.

use std::fmt;
use std::str::FromStr;

/// Error returned when a style list names an unknown style
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown editor style: {name:?}")]
pub struct StyleParseError {
    pub name: String,
}

/// Whether a style decorates existing content or adds a document node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// In-place styling of existing text (bold, italic, ...)
    Mark,
    /// A structural unit of the document (image, list, ...)
    Node,
}

/// A single editor capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Code,
    Link,
    VideoLink,
    Blockquote,
    HorizontalRule,
    Image,
    Break,
    Emoji,
    List,
}

impl Style {
    /// Every style, in configuration order
    pub const ALL: [Style; 12] = [
        Style::Bold,
        Style::Italic,
        Style::Underline,
        Style::Code,
        Style::Link,
        Style::VideoLink,
        Style::Blockquote,
        Style::HorizontalRule,
        Style::Image,
        Style::Break,
        Style::Emoji,
        Style::List,
    ];

    /// Name used in the editor's `;`-separated style list
    pub fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Code => "code",
            Style::Link => "link",
            Style::VideoLink => "video-link",
            Style::Blockquote => "blockquote",
            Style::HorizontalRule => "horizontal-rule",
            Style::Image => "image",
            Style::Break => "break",
            Style::Emoji => "emoji",
            Style::List => "list",
        }
    }

    pub fn kind(self) -> StyleKind {
        match self {
            Style::Bold
            | Style::Italic
            | Style::Underline
            | Style::Code
            | Style::Link
            | Style::VideoLink => StyleKind::Mark,
            Style::Blockquote
            | Style::HorizontalRule
            | Style::Image
            | Style::Break
            | Style::Emoji
            | Style::List => StyleKind::Node,
        }
    }

    /// HTML tags the editor serializes this style to.
    ///
    /// Emoji is a `p` carrying a `type` attribute.
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Style::Bold => &["b", "strong"],
            Style::Italic => &["i", "em"],
            Style::Underline => &["u"],
            Style::Code => &["code"],
            Style::Link | Style::VideoLink => &["a"],
            Style::Blockquote => &["blockquote"],
            Style::HorizontalRule => &["hr"],
            Style::Image => &["img"],
            Style::Break => &["br"],
            Style::Emoji => &["p"],
            Style::List => &["ul", "ol", "li"],
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or(StyleParseError { name })
    }
}

/// An ordered set of enabled styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    styles: Vec<Style>,
}

impl StyleSet {
    /// No styles at all
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    /// Every known style
    pub fn all() -> Self {
        Self {
            styles: Style::ALL.to_vec(),
        }
    }

    /// What an editor gets when its style list is not configured
    pub fn fallback() -> Self {
        Self {
            styles: vec![Style::Bold, Style::Italic, Style::Underline],
        }
    }

    /// Parse a `;`-separated style list such as `"bold;italic;link"`.
    ///
    /// Blank entries are skipped. A list with no entries yields
    /// [`StyleSet::fallback`].
    pub fn parse(list: &str) -> Result<Self, StyleParseError> {
        let mut set = Self::empty();
        for entry in list.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            set.insert(entry.parse()?);
        }
        if set.is_empty() {
            return Ok(Self::fallback());
        }
        Ok(set)
    }

    /// Add a style; returns false if it was already present
    pub fn insert(&mut self, style: Style) -> bool {
        if self.contains(style) {
            return false;
        }
        self.styles.push(style);
        true
    }

    pub fn contains(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Style> + '_ {
        self.styles.iter().copied()
    }

    /// Enabled mark styles
    pub fn marks(&self) -> impl Iterator<Item = Style> + '_ {
        self.iter().filter(|s| s.kind() == StyleKind::Mark)
    }

    /// Enabled node styles
    pub fn nodes(&self) -> impl Iterator<Item = Style> + '_ {
        self.iter().filter(|s| s.kind() == StyleKind::Node)
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for StyleSet {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Style> for StyleSet {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        let mut set = Self::empty();
        for style in iter {
            set.insert(style);
        }
        set
    }
}
