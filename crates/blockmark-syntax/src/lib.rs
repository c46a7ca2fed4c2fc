//! # blockmark-syntax
//!
//! Tokenizer for documents that mark up nested content blocks with HTML
//! comment delimiters:
//!
//! ```text
//! <!-- wp:quote {"cite":"Ada"} -->
//! <blockquote>…<!-- wp:image {"id":7} /-->…</blockquote>
//! <!-- /wp:quote -->
//! ```
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Pre-tokens → Recognizer → Tokens
//!               (Logos)              (delimiter)   (Opener | Closer | Text)
//! ```
//!
//! 1. [`lexer`] splits the text into `<!--`, `<` and text runs using [Logos].
//! 2. [`delimiter`] checks each `<!--` for one of the three delimiter shapes.
//! 3. [`tokenizer`] merges everything that is not a delimiter into literal
//!    text runs and bumps the lexer past each recognized delimiter.
//!
//! Nesting is not resolved here. The token stream is flat; matching openers
//! to closers is the document walker's job (see `blockmark-engine`).
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Quick Start
//!
//! ```
//! use blockmark_syntax::{Token, tokenize};
//!
//! let tokens = tokenize("<!-- wp:block {\"ref\":313} /-->");
//! assert_eq!(
//!     tokens,
//!     vec![Token::Opener {
//!         name: "block",
//!         raw_attributes: Some("{\"ref\":313}"),
//!         self_closing: true,
//!     }]
//! );
//! ```

pub mod delimiter;
pub mod lexer;
pub mod tokenizer;

pub use delimiter::{DEFAULT_PREFIX, Delimiter, DelimiterRecognizer, Recognized};
pub use tokenizer::{Token, Tokenizer, tokenize};
