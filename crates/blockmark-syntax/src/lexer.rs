//! # Lexer - Coarse Pre-Tokenization
//!
//! The first pass over a document uses [Logos] to split it into three kinds
//! of pre-token:
//!
//! - `<!--` → [`PreTokenKind::CommentOpen`], a *candidate* delimiter start
//! - `<` → [`PreTokenKind::Lt`], a lone angle bracket
//! - everything else → [`PreTokenKind::Text`], grouped into runs
//!
//! [Logos]: https://docs.rs/logos
//!
//! Nothing here knows what a block delimiter looks like. A `CommentOpen` may
//! begin a delimiter or an ordinary HTML comment; the [`delimiter`] module
//! decides which, and the [`tokenizer`] bumps this lexer past any delimiter it
//! recognizes.
//!
//! Like the rest of the crate, the lexer is lossless: every byte of the input
//! appears in exactly one pre-token.
//!
//! ```
//! use blockmark_syntax::lexer::PreTokenKind;
//! use logos::Logos;
//!
//! let input = "a < b <!-- c -->";
//! let mut lexer = PreTokenKind::lexer(input);
//! let mut reconstructed = String::new();
//! while lexer.next().is_some() {
//!     reconstructed.push_str(lexer.slice());
//! }
//! assert_eq!(input, reconstructed);
//! ```
//!
//! [`delimiter`]: crate::delimiter
//! [`tokenizer`]: crate::tokenizer

use logos::Logos;

/// Pre-token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreTokenKind {
    /// `<!--`, the start of any HTML comment
    #[token("<!--")]
    CommentOpen,

    /// A `<` that does not open a comment
    #[token("<")]
    Lt,

    /// Everything up to the next `<`
    #[regex(r"[^<]+")]
    Text,
}
