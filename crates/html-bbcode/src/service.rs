//! Translator - the main entry point for HTML to BBCode conversion.

use html_bbcode_core::{
    MarkupToken, SpaceHandling, StyleSet, Tag, TagKind, TranslateOptions, UnknownTagPolicy,
};
use tracing::{debug, trace, warn};

use crate::images::ImageSlots;
use crate::rules::{Replacement, Rule, Rules};
use crate::tokenizer::tokenize;
use crate::utilities::{clean_attribute, filter_empty_attributes, strip_spaces};
use crate::{Result, Translation, TranslationError};

/// The main service for converting editor HTML to BBCode
pub struct Translator {
    options: TranslateOptions,
    styles: StyleSet,
    rules: Rules,
}

impl Translator {
    /// Create a Translator for every style with default options
    pub fn new() -> Self {
        Self::with_styles(StyleSet::all(), TranslateOptions::default())
    }

    /// Create a Translator for every style with custom options
    pub fn with_options(options: TranslateOptions) -> Self {
        Self::with_styles(StyleSet::all(), options)
    }

    /// Create a Translator that only knows the given styles
    pub fn with_styles(styles: StyleSet, options: TranslateOptions) -> Self {
        let rules = Rules::for_styles(&styles);
        Self {
            options,
            styles,
            rules,
        }
    }

    /// Convert an HTML fragment to BBCode
    pub fn translate(&self, markup: &str) -> Result<String> {
        self.translate_with_report(markup).map(|t| t.bbcode)
    }

    /// Convert an HTML fragment to BBCode, returning the degradations as well.
    ///
    /// With [`UnknownTagPolicy::Strict`] the first unsupported tag is an error.
    pub fn translate_with_report(&self, markup: &str) -> Result<Translation> {
        debug!(input_len = markup.len(), "translating fragment");
        self.translate_tokens(tokenize(markup))
    }

    /// Convert an already tokenized fragment
    pub fn translate_tokens(&self, tokens: Vec<MarkupToken>) -> Result<Translation> {
        let translation = self.rewrite(tokens);

        if self.options.unknown_tags == UnknownTagPolicy::Strict {
            if let Some(err) = translation
                .warnings
                .iter()
                .find(|w| matches!(w, TranslationError::UnsupportedTag { .. }))
            {
                return Err(err.clone());
            }
        }

        Ok(translation)
    }

    /// Split a fragment into tokens without rewriting it
    pub fn tokenize(&self, markup: &str) -> Vec<MarkupToken> {
        tokenize(markup)
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TranslateOptions {
        &mut self.options
    }

    /// Styles the built-in rules were generated from
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Run both phases. Never fails; policy errors are decided by the caller.
    pub(crate) fn rewrite(&self, mut tokens: Vec<MarkupToken>) -> Translation {
        filter_empty_attributes(&mut tokens, &self.options);

        let mut rewriter = Rewriter {
            translator: self,
            images: ImageSlots::synthesize(&tokens),
            pieces: Vec::with_capacity(tokens.len()),
            warnings: Vec::new(),
            lists: Vec::new(),
            parameterized: Vec::new(),
        };

        for token in &tokens {
            match token {
                MarkupToken::Text(text) => rewriter.text(text),
                MarkupToken::Tag(tag) => rewriter.tag(tag),
            }
        }

        let translation = rewriter.finish();
        debug!(
            output_len = translation.bbcode.len(),
            warnings = translation.warnings.len(),
            "translation finished"
        );
        translation
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// A unit of output. Only markup is tag syntax.
enum Piece {
    Markup(String),
    Text(String),
}

/// State of one Phase 2 walk
struct Rewriter<'a> {
    translator: &'a Translator,
    images: ImageSlots,
    pieces: Vec<Piece>,
    warnings: Vec<TranslationError>,
    /// Open `ul`/`ol` tags, innermost last
    lists: Vec<String>,
    /// Open parameterized tags and whether their opening was emitted
    parameterized: Vec<(String, bool)>,
}

impl Rewriter<'_> {
    fn text(&mut self, text: &str) {
        self.pieces.push(Piece::Text(text.to_string()));
    }

    fn markup(&mut self, markup: String) {
        if !markup.is_empty() {
            self.pieces.push(Piece::Markup(markup));
        }
    }

    fn warn(&mut self, warning: TranslationError) {
        warn!(%warning, "degraded translation");
        self.warnings.push(warning);
    }

    fn tag(&mut self, tag: &Tag) {
        // Every image occurrence consumes its slot, whichever rule handles it.
        let image = if tag.name == "img" && !tag.is_close() {
            self.images.next_slot()
        } else {
            None
        };

        let translator = self.translator;
        match translator.rules.for_tag(tag, &translator.options) {
            Some(rule) => {
                trace!(tag = %tag.name, kind = ?tag.kind, "rule matched");
                self.track_list(tag);
                self.apply(rule, tag, image);
            }
            None => self.unknown(tag),
        }
    }

    fn apply(&mut self, rule: &Rule, tag: &Tag, image: Option<String>) {
        match &rule.replacement {
            Replacement::Pair { open, close } => {
                let markup = match tag.kind {
                    TagKind::Open => open.clone(),
                    TagKind::Close => close.clone(),
                    TagKind::Void => format!("{}{}", open, close),
                };
                self.markup(markup);
            }
            Replacement::Parameterized { name, attribute } => {
                self.parameterized_tag(tag, name, attribute);
            }
            Replacement::Drop => {}
            Replacement::Image => {
                if tag.is_close() {
                    return;
                }
                match image {
                    Some(img) => self.markup(img),
                    None => self.warn(TranslationError::MissingAttribute {
                        tag: tag.name.clone(),
                        attribute: "src".to_string(),
                    }),
                }
            }
            Replacement::AttributeText { attribute } => {
                if tag.is_close() {
                    return;
                }
                if let Some(value) = tag.attr(attribute) {
                    self.text(value);
                }
            }
            Replacement::Custom(f) => {
                let markup = f(tag, &self.translator.options);
                self.markup(markup);
            }
        }
    }

    fn parameterized_tag(&mut self, tag: &Tag, name: &str, attribute: &str) {
        if tag.is_close() {
            // An orphan close still emits; nesting is not validated.
            let emitted = self
                .parameterized
                .iter()
                .rposition(|(open, _)| *open == tag.name)
                .map(|i| self.parameterized.remove(i).1)
                .unwrap_or(true);
            if emitted {
                self.markup(format!("[/{}]", name));
            }
            return;
        }

        let value = clean_attribute(tag.attr(attribute));
        let emitted = !value.is_empty();
        if emitted {
            self.markup(format!("[{}={}]", name, value));
        } else {
            self.warn(TranslationError::MissingAttribute {
                tag: tag.name.clone(),
                attribute: attribute.to_string(),
            });
        }

        match tag.kind {
            TagKind::Open => self.parameterized.push((tag.name.clone(), emitted)),
            TagKind::Void if emitted => self.markup(format!("[/{}]", name)),
            _ => {}
        }
    }

    fn track_list(&mut self, tag: &Tag) {
        match (tag.name.as_str(), tag.kind) {
            ("ul" | "ol", TagKind::Open) => self.lists.push(tag.name.clone()),
            ("ul" | "ol", TagKind::Close) => match self.lists.pop() {
                Some(open) if open == tag.name => {}
                _ => self.warn(TranslationError::UnbalancedListClose {
                    tag: tag.name.clone(),
                }),
            },
            ("li", TagKind::Open | TagKind::Void) if self.lists.is_empty() => {
                self.warn(TranslationError::ListItemOutsideList)
            }
            _ => {}
        }
    }

    fn unknown(&mut self, tag: &Tag) {
        if !tag.is_close() {
            self.warn(TranslationError::UnsupportedTag {
                tag: tag.name.clone(),
            });
        }

        match self.translator.options.unknown_tags {
            UnknownTagPolicy::Strict | UnknownTagPolicy::LenientBracket => {
                self.markup(tag.render('[', ']'));
            }
            UnknownTagPolicy::Drop => {}
        }
    }

    fn finish(mut self) -> Translation {
        if !self.lists.is_empty() {
            let depth = self.lists.len();
            self.warn(TranslationError::UnclosedList { depth });
        }

        let spaces = self.translator.options.spaces;
        let mut bbcode = String::new();
        for piece in &self.pieces {
            match (piece, spaces) {
                (Piece::Text(text), SpaceHandling::StripInTags) => bbcode.push_str(text),
                (Piece::Text(s) | Piece::Markup(s), _) => bbcode.push_str(&strip_spaces(s)),
            }
        }

        Translation {
            bbcode,
            warnings: self.warnings,
        }
    }
}
