//! Utility functions for attribute and output cleanup.

use html_bbcode_core::{MarkupToken, TranslateOptions};

/// Clean an attribute value (trim and handle empty)
pub fn clean_attribute(value: Option<&str>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_default()
}

/// Remove every literal space (U+0020). Other whitespace is kept.
pub fn strip_spaces(s: &str) -> String {
    s.replace(' ', "")
}

/// Drop attributes named in `options.empty_attribute_filter` whose value is empty.
///
/// Runs on the tag tokens before any rewriting, so later steps never see them.
pub fn filter_empty_attributes(tokens: &mut [MarkupToken], options: &TranslateOptions) {
    if options.empty_attribute_filter.is_empty() {
        return;
    }

    for tag in tokens.iter_mut().filter_map(MarkupToken::as_tag_mut) {
        for name in &options.empty_attribute_filter {
            if tag.attr(name) == Some("") {
                tag.remove_attr(name);
            }
        }
    }
}
