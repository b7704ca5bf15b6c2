use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    // Greedy across the whole entry, so the capture runs from the first
    // "{{" to the last "}}". Anything outside the span is discarded,
    // including trailing free text after the close.
    static ref FORM_SPAN: Regex = Regex::new(r"(?s)\{\{(.*)\}\}").unwrap();
}

/// Everything that can go wrong between a detected entry and a rendered
/// link. Callers never see this as a failure; `format` swallows it and
/// hands the variant to the diagnostic sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedMarkup {
    /// The entry passed detection but has no `{{...}}` span, e.g. the
    /// last `}}` sits before the first `{{`.
    #[error("no {{{{...}}}} span found in entry")]
    UnclosedSpan,
    /// Every token after the label was a tag or empty.
    #[error("no base word among markup tokens")]
    MissingBaseWord,
}

/// One parsed form-of template, transient per entry.
///
/// Only constructed when a base word exists; the "invalid" case is the
/// `Err` side of [`WordForm::parse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordForm {
    /// Pipe-split span contents, order and multiplicity preserved.
    /// Index 0 is the template label (e.g. `fi-form of`).
    pub tokens: Vec<String>,
    /// The `key=value` tokens in original order. The base word and
    /// empty tokens never appear here.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// The dictionary headword the inflected form points back to.
    pub base_word: String,
}

impl WordForm {
    /// Extracts the markup span from `entry` and classifies its tokens.
    ///
    /// Classification scans tokens left to right starting at index 1:
    /// tokens containing `=` are tags, whitespace-empty tokens are
    /// skipped, and the first remaining token becomes the base word.
    /// Later bare tokens are dropped silently; only the first candidate
    /// ever wins.
    pub fn parse(entry: &str) -> Result<Self, MalformedMarkup> {
        let span = FORM_SPAN
            .captures(entry)
            .and_then(|cap| cap.get(1))
            .ok_or(MalformedMarkup::UnclosedSpan)?;

        let tokens: Vec<String> = span.as_str().split('|').map(str::to_string).collect();

        let mut tags = Vec::new();
        let mut base_word: Option<String> = None;
        for token in tokens.iter().skip(1) {
            if token.contains('=') {
                tags.push(token.clone());
            } else if token.trim().is_empty() {
                // Adjacent or trailing pipes; consumes a position, never shown.
            } else if base_word.is_none() {
                base_word = Some(token.clone());
            }
        }

        let base_word = base_word.ok_or(MalformedMarkup::MissingBaseWord)?;
        Ok(WordForm { tokens, tags, base_word })
    }

    /// Leading text of the rendered fragment: the label token followed
    /// by the retained tags, pipe-joined. The base word and empty
    /// tokens do not reappear here.
    pub fn description(&self) -> String {
        let label = self.tokens.first().map(String::as_str).unwrap_or("");
        let mut parts = Vec::with_capacity(1 + self.tags.len());
        parts.push(label);
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join("|")
    }
}
