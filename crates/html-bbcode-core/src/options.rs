//! Configuration options for BBCode translation

/// What to do with a tag that no rule claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Fail the translation
    Strict,
    /// Convert `<`/`>` to `[`/`]` and keep the tag
    #[default]
    LenientBracket,
    /// Remove the tag, keep its content
    Drop,
}

/// Where literal spaces are removed from the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceHandling {
    /// Remove every space, text included.
    /// Matches the output of the editor plugin this crate replaces.
    #[default]
    StripAll,
    /// Remove spaces only inside emitted tag syntax
    StripInTags,
}

/// Options for the translator
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Policy for tags without a rule
    pub unknown_tags: UnknownTagPolicy,

    /// Space removal
    pub spaces: SpaceHandling,

    /// Attributes dropped when their value is empty
    pub empty_attribute_filter: Vec<String>,

    /// Horizontal rule replacement
    pub hr: String,

    /// Line break replacement
    pub br: String,

    /// Parameter of `[list=...]` for ordered lists
    pub ordered_list_marker: String,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            unknown_tags: UnknownTagPolicy::LenientBracket,
            spaces: SpaceHandling::StripAll,
            empty_attribute_filter: vec!["class".to_string(), "id".to_string()],
            hr: "[hr]".to_string(),
            br: "[br]".to_string(),
            ordered_list_marker: "1".to_string(),
        }
    }
}
