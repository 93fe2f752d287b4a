//! Flat markup token stream.
//!
//! The translator never builds a DOM. Any front-end (the regex scanner, an
//! html5ever walk, a hand-built fixture) produces a `Vec<MarkupToken>` in
//! document order, and the rewrite phase consumes it without reordering.

use indexmap::IndexMap;

/// Attributes in source order, keyed by lower-cased name.
pub type Attributes = IndexMap<String, String>;

/// HTML void elements. They never have a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Check if a tag name is an HTML void element
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name.to_lowercase().as_str())
}

/// Which side of an element a tag token stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>`
    Open,
    /// `</name>`
    Close,
    /// `<name ...>` for a void element, or `<name ... />`
    Void,
}

/// A single tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name (lowercase)
    pub name: String,

    /// Open, close or void
    pub kind: TagKind,

    /// Attributes in source order. Always empty for close tags.
    pub attributes: Attributes,
}

impl Tag {
    /// Create an opening tag
    pub fn open(name: &str) -> Self {
        Self::new(name, TagKind::Open)
    }

    /// Create a closing tag
    pub fn close(name: &str) -> Self {
        Self::new(name, TagKind::Close)
    }

    /// Create a void tag
    pub fn void(name: &str) -> Self {
        Self::new(name, TagKind::Void)
    }

    fn new(name: &str, kind: TagKind) -> Self {
        Self {
            name: name.to_lowercase(),
            kind,
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Get an attribute value by name, regardless of its position
    pub fn attr(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.attributes
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_lowercase(), value.to_string());
    }

    /// Remove an attribute, keeping the order of the others
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(&name.to_lowercase())
    }

    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    pub fn is_close(&self) -> bool {
        self.kind == TagKind::Close
    }

    pub fn is_void(&self) -> bool {
        self.kind == TagKind::Void
    }

    /// Render the tag with the given delimiters, e.g. `('<', '>')` for HTML.
    ///
    /// Empty-valued attributes are written bare.
    pub fn render(&self, open: char, close: char) -> String {
        let mut out = String::new();
        out.push(open);
        if self.is_close() {
            out.push('/');
        }
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
        }
        out.push(close);
        out
    }
}

/// One parsed unit of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupToken {
    /// Character data between tags, verbatim
    Text(String),
    /// Any tag
    Tag(Tag),
}

impl MarkupToken {
    /// Create a text token
    pub fn text(content: &str) -> Self {
        MarkupToken::Text(content.to_string())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, MarkupToken::Text(_))
    }

    /// The tag, if this is a tag token
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            MarkupToken::Tag(tag) => Some(tag),
            MarkupToken::Text(_) => None,
        }
    }

    pub fn as_tag_mut(&mut self) -> Option<&mut Tag> {
        match self {
            MarkupToken::Tag(tag) => Some(tag),
            MarkupToken::Text(_) => None,
        }
    }
}

impl From<Tag> for MarkupToken {
    fn from(tag: Tag) -> Self {
        MarkupToken::Tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tag() {
        let tag = Tag::open("DIV");
        assert_eq!(tag.name, "div");
        assert!(tag.is_open());
        assert!(Tag::close("p").is_close());
        assert!(Tag::void("br").is_void());
    }

    #[test]
    fn test_attr_lookup_ignores_order_and_case() {
        let tag = Tag::void("img")
            .with_attr("alt", "x")
            .with_attr("SRC", "a.png");
        assert_eq!(tag.attr("src"), Some("a.png"));
        assert_eq!(tag.attr("Alt"), Some("x"));
        assert_eq!(tag.attr("title"), None);
        assert!(!tag.has_attr("title"));
    }

    #[test]
    fn test_remove_attr_keeps_order() {
        let mut tag = Tag::open("span")
            .with_attr("class", "")
            .with_attr("lang", "en")
            .with_attr("id", "");
        assert_eq!(tag.remove_attr("class"), Some(String::new()));
        let names: Vec<&str> = tag.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["lang", "id"]);
    }

    #[test]
    fn test_render() {
        let tag = Tag::open("span").with_attr("lang", "en").with_attr("hidden", "");
        assert_eq!(tag.render('<', '>'), "<span lang=\"en\" hidden>");
        assert_eq!(Tag::close("span").render('[', ']'), "[/span]");
    }

    #[test]
    fn test_is_void() {
        assert!(is_void("br"));
        assert!(is_void("IMG"));
        assert!(!is_void("p"));
    }

    #[test]
    fn test_token_accessors() {
        let token: MarkupToken = Tag::open("b").into();
        assert_eq!(token.as_tag().map(|t| t.name.as_str()), Some("b"));
        assert!(MarkupToken::text("hi").is_text());
        assert!(MarkupToken::text("hi").as_tag().is_none());
    }
}
