//! Regex scanner turning an editor HTML fragment into markup tokens.
//!
//! Anything that does not look like a tag is kept as text, so a stray `<`
//! never aborts the scan. Entities are not decoded.

use html_bbcode_core::{is_void, Attributes, MarkupToken, Tag, TagKind};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `<name attr="v" ...>`, `</name>` or `<name ... />`
static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<(/?)([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s"'<>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'<>=`]+))?)*)\s*(/?)>"#,
    )
    .expect("tag pattern is valid")
});

/// One attribute inside the attribute run captured by `TAG_RE`
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'<>=`]+)))?"#)
        .expect("attribute pattern is valid")
});

/// Split `markup` into text and tag tokens, in document order.
pub fn tokenize(markup: &str) -> Vec<MarkupToken> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TAG_RE.captures_iter(markup) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(MarkupToken::text(&markup[last..whole.start()]));
        }
        tokens.push(MarkupToken::Tag(tag_from_captures(&caps)));
        last = whole.end();
    }

    if last < markup.len() {
        tokens.push(MarkupToken::text(&markup[last..]));
    }

    tokens
}

fn tag_from_captures(caps: &Captures) -> Tag {
    let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
    let self_closing = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
    let name = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

    let kind = if closing {
        TagKind::Close
    } else if self_closing || is_void(name) {
        TagKind::Void
    } else {
        TagKind::Open
    };

    let mut tag = match kind {
        TagKind::Open => Tag::open(name),
        TagKind::Close => Tag::close(name),
        TagKind::Void => Tag::void(name),
    };

    // Close tags never carry attributes
    if kind != TagKind::Close {
        if let Some(run) = caps.get(3) {
            tag.attributes = parse_attributes(run.as_str());
        }
    }

    tag
}

/// Parse an attribute run such as ` href="x" target=_blank disabled`.
///
/// The first occurrence of a repeated attribute wins, as in HTML.
pub fn parse_attributes(run: &str) -> Attributes {
    let mut attributes = Attributes::new();

    for caps in ATTR_RE.captures_iter(run) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or_default();

        attributes
            .entry(name.as_str().to_lowercase())
            .or_insert_with(|| value.to_string());
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(token: &MarkupToken) -> &Tag {
        token.as_tag().unwrap()
    }

    #[test]
    fn test_text_only() {
        assert_eq!(tokenize("plain text"), vec![MarkupToken::text("plain text")]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_document_order() {
        let tokens = tokenize("<p>Hello<b>world</b></p>");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0], MarkupToken::from(Tag::open("p")));
        assert_eq!(tokens[1], MarkupToken::text("Hello"));
        assert_eq!(tokens[2], MarkupToken::from(Tag::open("b")));
        assert_eq!(tokens[3], MarkupToken::text("world"));
        assert_eq!(tokens[4], MarkupToken::from(Tag::close("b")));
        assert_eq!(tokens[5], MarkupToken::from(Tag::close("p")));
    }

    #[test]
    fn test_void_kinds() {
        let tokens = tokenize("a<br>b<hr/><span/>");
        assert!(tag(&tokens[1]).is_void());
        assert!(tag(&tokens[3]).is_void());
        assert!(tag(&tokens[4]).is_void());
        assert_eq!(tag(&tokens[4]).name, "span");
    }

    #[test]
    fn test_attributes() {
        let tokens = tokenize(r#"<img alt='A cat' src="cat.png" title=Cat hidden>"#);
        let img = tag(&tokens[0]);
        assert!(img.is_void());
        assert_eq!(img.attr("src"), Some("cat.png"));
        assert_eq!(img.attr("alt"), Some("A cat"));
        assert_eq!(img.attr("title"), Some("Cat"));
        assert_eq!(img.attr("hidden"), Some(""));
        let names: Vec<&str> = img.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["alt", "src", "title", "hidden"]);
    }

    #[test]
    fn test_uppercase_names() {
        let tokens = tokenize(r#"<A HREF="x">y</A>"#);
        assert_eq!(tag(&tokens[0]).name, "a");
        assert_eq!(tag(&tokens[0]).attr("href"), Some("x"));
        assert!(tag(&tokens[2]).is_close());
    }

    #[test]
    fn test_repeated_attribute_first_wins() {
        let attrs = parse_attributes(r#" class="a" class="b""#);
        assert_eq!(attrs.get("class").map(String::as_str), Some("a"));
    }

    #[test]
    fn test_stray_angle_brackets_are_text() {
        let tokens = tokenize("1 < 2 and 3 > 2");
        assert_eq!(tokens, vec![MarkupToken::text("1 < 2 and 3 > 2")]);
    }

    #[test]
    fn test_close_tag_has_no_attributes() {
        let tokens = tokenize("</p>");
        assert!(tag(&tokens[0]).attributes.is_empty());
    }
}
