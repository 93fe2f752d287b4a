//! Rewrite rules for the editor's tag vocabulary.
//!
//! The rule list is derived from a [`StyleSet`], so a style that is not
//! enabled has no rule and its tags fall under the unknown-tag policy.

use html_bbcode_core::{Style, StyleSet, Tag};

use super::{Filter, Replacement, Rule};

/// Create all rules for the enabled styles
pub fn editor_rules(styles: &StyleSet) -> Vec<Rule> {
    // Emoji must be checked before the plain paragraph rule.
    let mut rules = Vec::new();
    if styles.contains(Style::Emoji) {
        rules.push(emoji_rule());
    }
    rules.push(paragraph_rule());
    rules.push(heading_rule());

    for style in styles.iter() {
        match style {
            Style::Bold => rules.push(strong_rule()),
            Style::Italic => rules.push(emphasis_rule()),
            Style::Underline => rules.push(underline_rule()),
            Style::Code => rules.push(code_rule()),
            // Both link styles serialize to the same anchor
            Style::Link | Style::VideoLink => {
                if !(style == Style::VideoLink && styles.contains(Style::Link)) {
                    rules.push(link_rule());
                }
            }
            Style::Blockquote => rules.push(blockquote_rule()),
            Style::HorizontalRule => rules.push(horizontal_rule()),
            Style::Image => rules.push(image_rule()),
            Style::Break => rules.push(line_break_rule()),
            Style::List => {
                rules.push(unordered_list_rule());
                rules.push(ordered_list_rule());
                rules.push(list_item_rule());
            }
            Style::Emoji => {}
        }
    }

    rules
}

fn paragraph_rule() -> Rule {
    Rule::for_tag("p", Replacement::Drop)
}

fn heading_rule() -> Rule {
    Rule::for_tags(&["h1", "h2", "h3", "h4", "h5", "h6"], Replacement::bracket("b"))
}

fn emoji_rule() -> Rule {
    Rule::new(
        Filter::predicate(|tag, node, _| tag == "p" && node.has_attr("type")),
        Replacement::AttributeText {
            attribute: "type".to_string(),
        },
    )
}

fn strong_rule() -> Rule {
    Rule::for_tags(&["strong", "b"], Replacement::bracket("b"))
}

fn emphasis_rule() -> Rule {
    Rule::for_tags(&["em", "i"], Replacement::bracket("i"))
}

fn underline_rule() -> Rule {
    Rule::for_tag("u", Replacement::bracket("u"))
}

fn code_rule() -> Rule {
    Rule::for_tag("code", Replacement::bracket("code"))
}

fn link_rule() -> Rule {
    Rule::for_tag("a", Replacement::parameterized("url", "href"))
}

fn blockquote_rule() -> Rule {
    Rule::for_tag("blockquote", Replacement::bracket("quote"))
}

fn horizontal_rule() -> Rule {
    Rule::custom(Filter::tag("hr"), |tag, options| {
        void_replacement(tag, &options.hr)
    })
}

fn line_break_rule() -> Rule {
    Rule::custom(Filter::tag("br"), |tag, options| {
        void_replacement(tag, &options.br)
    })
}

fn image_rule() -> Rule {
    Rule::for_tag("img", Replacement::Image)
}

fn unordered_list_rule() -> Rule {
    Rule::for_tag("ul", Replacement::bracket("list"))
}

fn ordered_list_rule() -> Rule {
    Rule::custom(Filter::tag("ol"), |tag, options| {
        if tag.is_close() {
            "[/list]".to_string()
        } else {
            format!("[list={}]", options.ordered_list_marker)
        }
    })
}

fn list_item_rule() -> Rule {
    Rule::for_tag("li", Replacement::pair("[*]", ""))
}

/// A stray `</hr>` or `</br>` emits nothing
fn void_replacement(tag: &Tag, replacement: &str) -> String {
    if tag.is_close() {
        String::new()
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_bbcode_core::TranslateOptions;

    fn claims(rules: &[Rule], tag: &Tag) -> bool {
        let options = TranslateOptions::default();
        rules.iter().any(|r| r.filter.matches(tag, &options))
    }

    #[test]
    fn test_structural_rules_always_present() {
        let rules = editor_rules(&StyleSet::empty());
        assert_eq!(rules.len(), 2);
        assert!(claims(&rules, &Tag::open("p")));
        assert!(claims(&rules, &Tag::open("h4")));
        assert!(!claims(&rules, &Tag::open("b")));
    }

    #[test]
    fn test_every_style_tag_is_claimed() {
        let rules = editor_rules(&StyleSet::all());
        for style in StyleSet::all().iter() {
            for name in style.tags() {
                assert!(claims(&rules, &Tag::open(name)), "{} not claimed", name);
            }
        }
    }

    #[test]
    fn test_single_anchor_rule_for_both_link_styles() {
        let both: StyleSet = [Style::Link, Style::VideoLink].into_iter().collect();
        assert_eq!(editor_rules(&both).len(), 3);
        let video: StyleSet = [Style::VideoLink].into_iter().collect();
        assert_eq!(editor_rules(&video).len(), 3);
    }

    #[test]
    fn test_emoji_precedes_paragraph() {
        let options = TranslateOptions::default();
        let rules = editor_rules(&StyleSet::all());
        let emoji = Tag::open("p").with_attr("type", "🙂");
        let first = rules.iter().find(|r| r.filter.matches(&emoji, &options));
        assert!(matches!(
            first.map(|r| &r.replacement),
            Some(Replacement::AttributeText { .. })
        ));
    }

    #[test]
    fn test_ordered_list_marker_from_options() {
        let rule = ordered_list_rule();
        let options = TranslateOptions {
            ordered_list_marker: "a".to_string(),
            ..Default::default()
        };
        let Replacement::Custom(f) = &rule.replacement else {
            panic!("expected a custom replacement");
        };
        assert_eq!(f(&Tag::open("ol"), &options), "[list=a]");
        assert_eq!(f(&Tag::close("ol"), &options), "[/list]");
    }
}
