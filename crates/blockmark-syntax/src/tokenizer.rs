//! # Tokenizer - Delimiters and Text Runs
//!
//! Combines the Logos pre-lexer with the [`DelimiterRecognizer`] to produce
//! the flat token stream the document walker consumes:
//!
//! ```text
//! "a<!-- wp:x /-->b" → [Text("a"), Opener(x, self_closing), Text("b")]
//! ```
//!
//! Consecutive non-delimiter pre-tokens are merged, so literal text between
//! two delimiters always arrives as a single [`Token::Text`]. No nesting
//! logic happens here.

use std::ops::Range;

use logos::Logos;

use crate::delimiter::{Delimiter, DelimiterRecognizer};
use crate::lexer::PreTokenKind;

/// A token of the block grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// An opening delimiter, possibly self-closing.
    Opener {
        name: &'a str,
        raw_attributes: Option<&'a str>,
        self_closing: bool,
    },
    /// A closing delimiter.
    Closer { name: &'a str },
    /// A run of literal text.
    Text(&'a str),
}

impl<'a> From<Delimiter<'a>> for Token<'a> {
    fn from(delimiter: Delimiter<'a>) -> Self {
        match delimiter {
            Delimiter::Opener {
                name,
                raw_attributes,
                self_closing,
            } => Token::Opener {
                name,
                raw_attributes,
                self_closing,
            },
            Delimiter::Closer { name } => Token::Closer { name },
        }
    }
}

/// Splits documents into [`Token`]s for a single delimiter prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    recognizer: DelimiterRecognizer,
}

impl Tokenizer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            recognizer: DelimiterRecognizer::new(prefix),
        }
    }

    pub fn prefix(&self) -> &str {
        self.recognizer.prefix()
    }

    /// Tokenize the input.
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        self.tokenize_with_spans(input)
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    /// Tokenize and return each token with its byte span in `input`.
    pub fn tokenize_with_spans<'a>(&self, input: &'a str) -> Vec<(Token<'a>, Range<usize>)> {
        let mut tokens = Vec::new();
        let mut text_start: Option<usize> = None;
        let mut lexer = PreTokenKind::lexer(input);

        while let Some(result) = lexer.next() {
            let span = lexer.span();

            let recognized = match result {
                Ok(PreTokenKind::CommentOpen) => self.recognizer.recognize(&input[span.start..]),
                _ => None,
            };
            let Some(recognized) = recognized else {
                text_start.get_or_insert(span.start);
                continue;
            };

            if let Some(start) = text_start.take() {
                tokens.push((Token::Text(&input[start..span.start]), start..span.start));
            }
            // Swallow the rest of the delimiter so lexing resumes after `-->`.
            lexer.bump(recognized.len - span.len());
            tokens.push((
                recognized.delimiter.into(),
                span.start..span.start + recognized.len,
            ));
        }

        if let Some(start) = text_start {
            tokens.push((Token::Text(&input[start..]), start..input.len()));
        }

        tokens
    }
}

/// Tokenize with the default `wp` prefix.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokenizer::default().tokenize(input)
}
