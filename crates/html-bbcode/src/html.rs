//! HTML document parsing support.
//!
//! The regex scanner expects the clean fragments an editor serializes. For
//! anything else (entities, implied end tags, stray markup) this module parses
//! with html5ever through scraper and flattens the resulting tree back into
//! the same token stream.

use html_bbcode_core::{is_void, MarkupToken, Tag};
use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::service::Translator;
use crate::{Result, Translation};

/// Parse an HTML string and flatten it into tokens.
///
/// Text is entity-decoded and every element is explicitly closed.
///
/// # Example
///
/// ```rust
/// use html_bbcode::tokenize_document;
///
/// let tokens = tokenize_document("<p>Fish &amp; chips");
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize_document(html: &str) -> Vec<MarkupToken> {
    let document = Html::parse_fragment(html);
    let mut tokens = Vec::new();
    // The fragment root is a synthetic <html>; only its children are content.
    flatten_children(document.root_element(), &mut tokens);
    tokens
}

fn flatten_children(element: ElementRef, tokens: &mut Vec<MarkupToken>) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                tokens.push(MarkupToken::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    flatten_element(child_element, tokens);
                }
            }
            _ => {}
        }
    }
}

fn flatten_element(element: ElementRef, tokens: &mut Vec<MarkupToken>) {
    let name = element.value().name();

    let mut open = if is_void(name) {
        Tag::void(name)
    } else {
        Tag::open(name)
    };
    for (attr, value) in element.value().attrs() {
        open.set_attr(attr, value);
    }

    let void = open.is_void();
    tokens.push(MarkupToken::Tag(open));
    if void {
        return;
    }

    flatten_children(element, tokens);
    tokens.push(MarkupToken::Tag(Tag::close(name)));
}

impl Translator {
    /// Convert an arbitrary HTML string to BBCode via a full parse
    pub fn translate_document(&self, html: &str) -> Result<String> {
        self.translate_document_with_report(html).map(|t| t.bbcode)
    }

    /// Like [`Translator::translate_document`], with the degradations
    pub fn translate_document_with_report(&self, html: &str) -> Result<Translation> {
        self.translate_tokens(tokenize_document(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_html() {
        let tokens = tokenize_document("<p>Hello</p>");
        assert_eq!(
            tokens,
            vec![
                MarkupToken::from(Tag::open("p")),
                MarkupToken::text("Hello"),
                MarkupToken::from(Tag::close("p")),
            ]
        );
    }

    #[test]
    fn test_entities_decoded() {
        let tokens = tokenize_document("<b>Fish &amp; chips</b>");
        assert_eq!(tokens[1], MarkupToken::text("Fish & chips"));
    }

    #[test]
    fn test_translate_document_implied_close() {
        let translator = Translator::new();
        let result = translator
            .translate_document("<ul><li>one<li>two</ul>")
            .unwrap();
        assert_eq!(result, "[list][*]one[*]two[/list]");
    }

    #[test]
    fn test_translate_document_image() {
        let translator = Translator::new();
        let result = translator
            .translate_document(r#"<p><img alt="a" src="x.png">text</p>"#)
            .unwrap();
        assert_eq!(result, "[img]x.png[/img]text");
    }

    #[test]
    fn test_translate_document_heading() {
        let translator = Translator::new();
        assert_eq!(
            translator.translate_document("<h2>Title</h2>").unwrap(),
            "[b]Title[/b]"
        );
    }
}
