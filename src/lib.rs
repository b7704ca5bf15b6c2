//! Renders Wiktionary form-of markup into an HTML fragment linking the
//! inflected form back to its base (infinitive) entry.
//!
//! The crate recognizes exactly one markup shape,
//! `{{<label>-form of|tok1|tok2|...}}`, and passes everything else
//! through unchanged. For a recognized entry it emits
//!
//! ```text
//! <i>{description} form of <a href="dictionary-fi-en-{c0}-{c1}.html#{base}">{base}</a></i>
//! ```
//!
//! where `c0`/`c1` are the zero-padded decimal code points of the base
//! word's first two characters, matching the filenames of the generated
//! dictionary pages the link points into. This is not a wikitext
//! parser; nested templates and anything outside the outermost braces
//! are not interpreted.
//!
//! ```
//! use wiktionary_formatter::format;
//!
//! let html = format("{{fi-form of|asia|case=translative||pl=plural}}");
//! assert_eq!(
//!     html,
//!     "<i>fi-form of|case=translative|pl=plural form of \
//!      <a href=\"dictionary-fi-en-097-115.html#asia\">asia</a></i>"
//! );
//! ```

mod word_form;

pub use word_form::{MalformedMarkup, WordForm};

/// Substring that marks an entry as a candidate for formatting.
const FORM_OF_MARKER: &str = "-form of";

/// Formats a dictionary entry, returning it unchanged when it carries
/// no recognizable form-of markup.
///
/// Total: never panics, never errors. Malformed markup that passed
/// detection is reported through `log::warn!` and the original entry
/// comes back as-is.
pub fn format(entry: &str) -> String {
    format_with(entry, |err| {
        log::warn!("skipping malformed form-of markup in {entry:?}: {err}");
    })
}

/// Like [`format`], but routes malformed-markup diagnostics to the
/// given sink instead of the `log` facade. The sink fires at most once
/// per call and only for entries that looked like form-of markup.
pub fn format_with(entry: &str, mut diagnostic: impl FnMut(&MalformedMarkup)) -> String {
    if !(entry.contains("{{") && entry.contains("}}") && entry.contains(FORM_OF_MARKER)) {
        return entry.to_string();
    }

    match WordForm::parse(entry) {
        Ok(form) => render(&form),
        Err(err) => {
            diagnostic(&err);
            entry.to_string()
        }
    }
}

/// Builds the HTML fragment. The filename segments are the decimal
/// code points of the base word's first two characters, zero-padded to
/// three digits; a one-character base word leaves the second segment
/// empty, yielding a bare `-` before `.html`.
fn render(form: &WordForm) -> String {
    let mut codes = form.base_word.chars().map(|c| format!("{:03}", c as u32));
    let c0 = codes.next().unwrap_or_default();
    let c1 = codes.next().unwrap_or_default();

    format!(
        "<i>{} form of <a href=\"dictionary-fi-en-{}-{}.html#{}\">{}</a></i>",
        form.description(),
        c0,
        c1,
        form.base_word,
        form.base_word
    )
}
