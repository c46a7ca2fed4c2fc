//! # Delimiter Recognition
//!
//! Decides whether the text starting at a `<!--` is a block delimiter. Three
//! shapes are recognized (shown with the default `wp` prefix):
//!
//! ```text
//! opener       <!-- wp:NAME ATTRS? -->
//! self-closer  <!-- wp:NAME ATTRS? /-->
//! closer       <!-- /wp:NAME -->
//! ```
//!
//! - `NAME` is `(namespace/)?identifier`, each part `[a-z][a-z0-9_-]*`.
//! - `ATTRS` runs from `{` up to the first `}` that is followed by
//!   whitespace and `/-->` or `-->`. It is returned raw; JSON decoding is the
//!   caller's job.
//! - Whitespace is required after `<!--`, after the name and after the
//!   attributes.
//!
//! Anything else, including ordinary HTML comments and delimiters whose name
//! breaks the grammar, is not a delimiter and stays literal text.

use std::sync::OnceLock;

use regex::Regex;

/// The default delimiter prefix, as in `<!-- wp:paragraph -->`.
pub const DEFAULT_PREFIX: &str = "wp";

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// A recognized block delimiter, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter<'a> {
    /// `<!-- wp:NAME ATTRS? -->` or, with `self_closing`, `<!-- wp:NAME ATTRS? /-->`
    Opener {
        name: &'a str,
        raw_attributes: Option<&'a str>,
        self_closing: bool,
    },
    /// `<!-- /wp:NAME -->`
    Closer { name: &'a str },
}

/// A delimiter together with the number of bytes it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognized<'a> {
    pub delimiter: Delimiter<'a>,
    pub len: usize,
}

fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z][a-z0-9_-]*(?:/[a-z][a-z0-9_-]*)?").expect("Invalid block name regex")
    })
}

fn terminator_regex() -> &'static Regex {
    static TERMINATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    TERMINATOR_REGEX
        .get_or_init(|| Regex::new(r"^\s+(/)?-->").expect("Invalid delimiter terminator regex"))
}

/// Recognizes delimiters for one prefix (`wp` unless configured otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterRecognizer {
    prefix: String,
}

impl DelimiterRecognizer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Try to recognize a delimiter at the very start of `source`.
    pub fn recognize<'a>(&self, source: &'a str) -> Option<Recognized<'a>> {
        let rest = source.strip_prefix(COMMENT_OPEN)?;
        let rest = strip_required_whitespace(rest)?;

        let (is_closer, rest) = match rest.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let rest = rest.strip_prefix(self.prefix.as_str())?.strip_prefix(':')?;

        let name = name_regex().find(rest)?.as_str();
        let rest = strip_required_whitespace(&rest[name.len()..])?;

        if is_closer {
            let rest = rest.strip_prefix(COMMENT_CLOSE)?;
            return Some(Recognized {
                delimiter: Delimiter::Closer { name },
                len: source.len() - rest.len(),
            });
        }

        if rest.starts_with('{') {
            let (raw, self_closing, rest) = split_attributes(rest)?;
            return Some(Recognized {
                delimiter: Delimiter::Opener {
                    name,
                    raw_attributes: Some(raw),
                    self_closing,
                },
                len: source.len() - rest.len(),
            });
        }

        let (self_closing, rest) = match rest.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let rest = rest.strip_prefix(COMMENT_CLOSE)?;
        Some(Recognized {
            delimiter: Delimiter::Opener {
                name,
                raw_attributes: None,
                self_closing,
            },
            len: source.len() - rest.len(),
        })
    }
}

impl Default for DelimiterRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

fn strip_required_whitespace(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    (trimmed.len() < s.len()).then_some(trimmed)
}

/// Split `{...}` off the front of `rest`, ending at the first `}` that is
/// followed by the delimiter terminator.
///
/// Returns the raw attribute text, whether the delimiter is self-closing, and
/// the text after `-->`.
fn split_attributes(rest: &str) -> Option<(&str, bool, &str)> {
    rest.match_indices('}').find_map(|(close, _)| {
        let after = &rest[close + 1..];
        let terminator = terminator_regex().captures(after)?;
        let matched = terminator.get(0)?;
        Some((
            &rest[..=close],
            terminator.get(1).is_some(),
            &after[matched.end()..],
        ))
    })
}
