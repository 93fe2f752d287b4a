//! html-bbcode-core - markup tokens, style capabilities and options
//!
//! This crate holds the data shared by every front-end of the translator.
//! It does no parsing: `html-bbcode` turns HTML into [`MarkupToken`]s and
//! rewrites them into BBCode.
//!
//! # Architecture
//!
//! ```text
//! HTML fragment ──scan──▶ ┌────────────────┐
//!                         │                │ ──rules──▶ BBCode String
//! scraper DOM ───walk───▶ │ MarkupToken[]  │
//!                         └────────────────┘
//!                                 ▲
//!                     StyleSet ───┘ (which rules exist)
//! ```
//!
//! # Example
//!
//! ```rust
//! use html_bbcode_core::{MarkupToken, Style, StyleSet, Tag};
//!
//! let styles: StyleSet = "bold;link".parse().unwrap();
//! assert!(styles.contains(Style::Link));
//!
//! let tokens = vec![
//!     MarkupToken::from(Tag::open("a").with_attr("href", "https://example.com")),
//!     MarkupToken::text("link"),
//!     MarkupToken::from(Tag::close("a")),
//! ];
//! assert_eq!(tokens[0].as_tag().and_then(|t| t.attr("href")), Some("https://example.com"));
//! ```

mod options;
mod style;
mod token;

pub use options::{SpaceHandling, TranslateOptions, UnknownTagPolicy};
pub use style::{Style, StyleKind, StyleParseError, StyleSet};
pub use token::{is_void, Attributes, MarkupToken, Tag, TagKind, VOID_ELEMENTS};
