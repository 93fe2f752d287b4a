//! Image pre-pass.
//!
//! `img` is void, so there is no closing tag to pair `[/img]` with during the
//! forward rewrite. Every image is therefore synthesized up front, one slot per
//! occurrence, and the rewrite pass splices the slots back in order.

use html_bbcode_core::MarkupToken;

use crate::utilities::clean_attribute;

/// Synthesized images, in the order their `img` tags appear.
#[derive(Debug, Default)]
pub struct ImageSlots {
    slots: Vec<Option<String>>,
    cursor: usize,
}

impl ImageSlots {
    /// Build one slot per non-closing `img` tag.
    ///
    /// A slot is `None` when the tag has no usable `src`; that occurrence is
    /// dropped from the output.
    pub fn synthesize(tokens: &[MarkupToken]) -> Self {
        let slots = tokens
            .iter()
            .filter_map(MarkupToken::as_tag)
            .filter(|tag| tag.name == "img" && !tag.is_close())
            .map(|tag| {
                let src = clean_attribute(tag.attr("src"));
                (!src.is_empty()).then(|| format!("[img]{}[/img]", src))
            })
            .collect();

        Self { slots, cursor: 0 }
    }

    /// Take the next slot. Called once per `img` tag during the rewrite.
    pub fn next_slot(&mut self) -> Option<String> {
        let slot = self.slots.get(self.cursor).cloned().flatten();
        self.cursor += 1;
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_slots_in_order() {
        let tokens = tokenize(r#"<img src="a.png">x<img alt="b" src="b.png"/>"#);
        let mut slots = ImageSlots::synthesize(&tokens);
        assert_eq!(slots.next_slot().as_deref(), Some("[img]a.png[/img]"));
        assert_eq!(slots.next_slot().as_deref(), Some("[img]b.png[/img]"));
        assert_eq!(slots.next_slot(), None);
    }

    #[test]
    fn test_missing_src_is_empty_slot() {
        let tokens = tokenize(r#"<img alt="nothing"><img src=""><img src="c.png">"#);
        let mut slots = ImageSlots::synthesize(&tokens);
        assert_eq!(slots.next_slot(), None);
        assert_eq!(slots.next_slot(), None);
        assert_eq!(slots.next_slot().as_deref(), Some("[img]c.png[/img]"));
    }

    #[test]
    fn test_no_images() {
        let mut slots = ImageSlots::synthesize(&tokenize("<p>text</p>"));
        assert_eq!(slots.next_slot(), None);
    }
}
