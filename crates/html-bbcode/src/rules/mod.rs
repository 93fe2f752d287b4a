//! Rule system for HTML to BBCode rewriting.

mod editor;
mod rule;

pub use editor::editor_rules;
pub use rule::{Filter, PredicateFn, Replacement, ReplacementFn, Rule};

use html_bbcode_core::{StyleSet, Tag, TranslateOptions};
use indexmap::IndexMap;

/// Collection of rules for conversion
pub struct Rules {
    /// Custom rules added by the user (checked first)
    custom_rules: IndexMap<String, Rule>,
    /// Built-in rules for the enabled styles
    editor_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance covering every style
    pub fn new() -> Self {
        Self::for_styles(&StyleSet::all())
    }

    /// Create a Rules instance for the given styles
    pub fn for_styles(styles: &StyleSet) -> Self {
        Self {
            custom_rules: IndexMap::new(),
            editor_rules: editor_rules(styles),
        }
    }

    /// Add a custom rule. A rule with the same key is replaced in place.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Find the rule for a tag
    pub fn for_tag<'a>(&'a self, tag: &Tag, options: &TranslateOptions) -> Option<&'a Rule> {
        self.custom_rules
            .values()
            .chain(self.editor_rules.iter())
            .find(|rule| rule.filter.matches(tag, options))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_rules_win() {
        let options = TranslateOptions::default();
        let mut rules = Rules::new();
        rules.add("strike", Rule::for_tag("b", Replacement::bracket("s")));

        let rule = rules.for_tag(&Tag::open("b"), &options).unwrap();
        assert!(matches!(&rule.replacement, Replacement::Pair { open, .. } if open == "[s]"));
    }

    #[test]
    fn test_unknown_tag_has_no_rule() {
        let options = TranslateOptions::default();
        assert!(Rules::new().for_tag(&Tag::open("span"), &options).is_none());
    }

    #[test]
    fn test_disabled_style_has_no_rule() {
        let options = TranslateOptions::default();
        let rules = Rules::for_styles(&StyleSet::fallback());
        assert!(rules.for_tag(&Tag::open("strong"), &options).is_some());
        assert!(rules.for_tag(&Tag::void("img"), &options).is_none());
    }
}
