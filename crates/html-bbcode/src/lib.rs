//! # html-bbcode
//!
//! Translate the HTML a rich-text editor serializes into BBCode.
//!
//! ## Design
//!
//! Translation is an explicit two-phase pipeline over a flat token stream:
//!
//! 1. **Image synthesis**: every `img` is turned into `[img]SRC[/img]` up front,
//!    because a void tag has no closing tag to pair against in a forward scan.
//! 2. **Structural recoding**: tokens are walked in document order and rewritten
//!    by rules generated from the editor's [`StyleSet`]. Tags no rule claims fall
//!    under the configured [`UnknownTagPolicy`].
//!
//! Nothing is ever reordered; tokens are only substituted or deleted.
//! Degradations (a missing `src`, an unknown tag, a stray list item) never
//! abort a lenient translation; they are collected as warnings.
//!
//! ## Example
//!
//! ```rust
//! use html_bbcode::Translator;
//!
//! let translator = Translator::new();
//! let bbcode = translator
//!     .translate(r#"<p>Read<a href="http://x.com">this</a></p>"#)
//!     .unwrap();
//! assert_eq!(bbcode, "Read[url=http://x.com]this[/url]");
//! ```
//!
//! ## Example (editor style list)
//!
//! ```rust
//! use html_bbcode::{StyleSet, TranslateOptions, Translator};
//!
//! let styles: StyleSet = "bold;italic;list".parse().unwrap();
//! let translator = Translator::with_styles(styles, TranslateOptions::default());
//! let report = translator
//!     .translate_with_report("<ol><li><b>one</b></li></ol><u>x</u>")
//!     .unwrap();
//! assert_eq!(report.bbcode, "[list=1][*][b]one[/b][/list][u]x[/u]");
//! assert_eq!(report.warnings.len(), 1);
//! ```

#[cfg(feature = "html")]
pub mod html;
mod images;
pub mod rules;
mod service;
pub mod tokenizer;
mod utilities;

pub use html_bbcode_core::{
    MarkupToken, SpaceHandling, Style, StyleKind, StyleParseError, StyleSet, Tag, TagKind,
    TranslateOptions, UnknownTagPolicy,
};
#[cfg(feature = "html")]
pub use html::tokenize_document;
pub use rules::{Filter, Replacement, Rule};
pub use service::Translator;
pub use utilities::{clean_attribute, strip_spaces};

use once_cell::sync::Lazy;

/// Degradations met while translating.
///
/// A lenient translation reports these as warnings; only
/// [`TranslationError::UnsupportedTag`] under [`UnknownTagPolicy::Strict`]
/// is returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("unsupported tag <{tag}>")]
    UnsupportedTag { tag: String },

    #[error("<{tag}> has no usable {attribute:?} attribute")]
    MissingAttribute { tag: String, attribute: String },

    #[error("list item outside of any list")]
    ListItemOutsideList,

    #[error("</{tag}> does not close the innermost open list")]
    UnbalancedListClose { tag: String },

    #[error("{depth} list(s) left open at end of input")]
    UnclosedList { depth: usize },
}

pub type Result<T> = std::result::Result<T, TranslationError>;

/// A finished translation and everything that was degraded on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The BBCode output
    pub bbcode: String,
    /// Degradations, in document order
    pub warnings: Vec<TranslationError>,
}

impl Translation {
    /// True when nothing was degraded
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

static DEFAULT_TRANSLATOR: Lazy<Translator> = Lazy::new(Translator::new);

/// Translate with every style enabled and default options.
///
/// The default policy is lenient, so this never fails.
///
/// ```rust
/// assert_eq!(html_bbcode::translate("<h3>Title</h3>"), "[b]Title[/b]");
/// ```
pub fn translate(markup: &str) -> String {
    DEFAULT_TRANSLATOR.rewrite(tokenizer::tokenize(markup)).bbcode
}
