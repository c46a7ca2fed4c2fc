//! # blockmark-engine
//!
//! Parses block-annotated documents into a tree of [`Block`]s and
//! [`Freeform`] text.
//!
//! ```text
//! Source Text → Tokenizer → Tokens → Walker → Nodes
//!               (blockmark-syntax)   (frame stack, attributes, markers)
//! ```
//!
//! Parsing is total: every input produces a node sequence, degraded where
//! the markup is broken: unmatched closers stay literal text, unterminated
//! blocks are closed at end of input and malformed attributes become an
//! empty map.
//!
//! ## Quick Start
//!
//! ```
//! use blockmark_engine::parse;
//!
//! let nodes = parse("<!-- wp:block -->aa<!-- wp:void /-->bb<!-- /wp:block -->");
//!
//! let block = nodes[0].as_block().unwrap();
//! assert_eq!(block.name(), "core/block");
//! assert_eq!(block.inner_content(), "aabb");
//! assert_eq!(block.block_markers(), &[2]);
//! assert_eq!(block.inner_blocks()[0].name(), "core/void");
//! ```

pub mod attributes;
pub mod markers;
pub mod node;
mod walker;

use std::path::Path;

use blockmark_config::{ConfigError, ParserConfig};
use blockmark_syntax::Tokenizer;

pub use attributes::{AttributeError, Attributes, parse_attributes};
pub use markers::{utf8_width, utf16_byte_len};
pub use node::{Block, Freeform, Node, Walk};

use walker::Walker;

/// A configured block parser.
///
/// Holds no per-document state, so one parser can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    tokenizer: Tokenizer,
    default_namespace: String,
}

impl Parser {
    pub fn new(config: &ParserConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(config.delimiter_prefix.as_str()),
            default_namespace: config.default_namespace.clone(),
        })
    }

    /// Build a parser from a TOML config file, falling back to the defaults
    /// when the file does not exist.
    pub fn from_config_file<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config = ParserConfig::load_from_path(config_path)?.unwrap_or_default();
        Self::new(&config)
    }

    /// Parse a document into top-level nodes.
    pub fn parse(&self, document: &str) -> Vec<Node> {
        let mut walker = Walker::new(document, &self.default_namespace);
        for (token, span) in self.tokenizer.tokenize_with_spans(document) {
            walker.push(token, span);
        }
        walker.finish()
    }

    /// Parse UTF-16 text, which may contain unpaired surrogates.
    ///
    /// Each unpaired surrogate is replaced with U+FFFD, so it still occupies
    /// 3 bytes in marker offsets.
    pub fn parse_utf16(&self, document: &[u16]) -> Vec<Node> {
        self.parse(&String::from_utf16_lossy(document))
    }
}

impl Default for Parser {
    fn default() -> Self {
        let config = ParserConfig::default();
        Self {
            tokenizer: Tokenizer::new(config.delimiter_prefix),
            default_namespace: config.default_namespace,
        }
    }
}

/// Parse with the default configuration (`wp` delimiters, `core` namespace).
pub fn parse(document: &str) -> Vec<Node> {
    Parser::default().parse(document)
}

/// [`parse`] for UTF-16 input. See [`Parser::parse_utf16`].
pub fn parse_utf16(document: &[u16]) -> Vec<Node> {
    Parser::default().parse_utf16(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    /// Indented outline of a node sequence for snapshot testing.
    fn outline(nodes: &[Node]) -> String {
        let mut lines = Vec::new();
        for node in nodes {
            match node {
                Node::Freeform(freeform) => {
                    lines.push(format!("freeform {:?}", freeform.inner_content()));
                }
                Node::Block(block) => outline_block(block, 0, &mut lines),
            }
        }
        lines.join("\n")
    }

    fn outline_block(block: &Block, indent: usize, lines: &mut Vec<String>) {
        let prefix = "  ".repeat(indent);
        lines.push(format!(
            "{prefix}block {} {} markers={:?} content={:?}",
            block.name(),
            serde_json::to_string(block.attributes()).unwrap(),
            block.block_markers(),
            block.inner_content(),
        ));
        for child in block.inner_blocks() {
            outline_block(child, indent + 1, lines);
        }
    }

    #[test]
    fn snapshot_more_tag() {
        let nodes = parse("<!-- wp:core/more --><!--more--><!-- /wp:core/more -->");
        assert_snapshot!(outline(&nodes), @r#"block core/more {} markers=[] content="<!--more-->""#);
    }

    #[test]
    fn snapshot_nested_document() {
        let input = concat!(
            "<h1>Title</h1>\n",
            "<!-- wp:columns {\"count\":2} -->\n",
            "<div class=\"cols\">",
            "<!-- wp:column -->\n<p>€ left</p>\n<!-- /wp:column -->",
            "<!-- wp:column {\"width\":\"50%\"} --><!-- wp:image {\"id\":7,\"alt\":\"\"} /--><!-- /wp:column -->",
            "</div>\n",
            "<!-- /wp:columns -->\n",
            "<!-- wp:my/bus { \"is\": \"fast\" } /-->",
        );
        assert_snapshot!(outline(&parse(input)), @r#"
        freeform "<h1>Title</h1>\n"
        block core/columns {"count":2} markers=[19, 19] content="\n<div class=\"cols\"></div>\n"
          block core/column {} markers=[] content="\n<p>€ left</p>\n"
          block core/column {"width":"50%"} markers=[0] content=""
            block core/image {"id":7,"alt":""} markers=[] content=""
        freeform "\n"
        block my/bus {"is":"fast"} markers=[] content=""
        "#);
    }

    #[test]
    fn snapshot_broken_markup() {
        let input = "<!-- wp:quote -->a<!-- /wp:para --><!-- wp:list {oops} -->b";
        assert_snapshot!(outline(&parse(input)), @r#"
        block core/quote {} markers=[18] content="a<!-- /wp:para -->"
          block core/list {} markers=[] content="b"
        "#);
    }

    #[test]
    fn custom_config() {
        let parser = Parser::new(&ParserConfig {
            delimiter_prefix: "blk".to_string(),
            default_namespace: "acme".to_string(),
        })
        .unwrap();

        let nodes = parser.parse("<!-- blk:note -->x<!-- /blk:acme/note --><!-- wp:a /-->");
        assert_snapshot!(outline(&nodes), @r#"
        block acme/note {} markers=[] content="x"
        freeform "<!-- wp:a /-->"
        "#);
    }

    #[test]
    fn config_file_sets_prefix_and_namespace() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_file = temp_dir.path().join("blockmark.toml");
        std::fs::write(
            &config_file,
            "delimiter_prefix = \"blk\"\ndefault_namespace = \"acme\"\n",
        )
        .unwrap();

        let parser = Parser::from_config_file(&config_file).unwrap();
        let nodes = parser.parse("<!-- blk:note /-->");
        assert_snapshot!(outline(&nodes), @"block acme/note {} markers=[] content=\"\"");
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let parser = Parser::from_config_file(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(parser, Parser::default());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ParserConfig {
            default_namespace: "Nope".to_string(),
            ..ParserConfig::default()
        };
        assert!(matches!(
            Parser::new(&config),
            Err(ConfigError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn parser_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
        assert_send_sync::<Node>();

        let parser = Parser::default();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let parser = &parser;
                    scope.spawn(move || parser.parse(&format!("<!-- wp:n {{\"i\":{i}}} /-->")))
                })
                .collect();
            for handle in handles {
                let nodes = handle.join().unwrap();
                assert_eq!(nodes.len(), 1);
                assert!(nodes[0].as_block().is_some());
            }
        });
    }
}
