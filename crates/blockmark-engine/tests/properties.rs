//! Property-based tests for the block parser.
//!
//! Generated names, attributes and text check that:
//! 1. Void and empty forms of a block parse identically
//! 2. Text before the first opener comes back verbatim as freeform
//! 3. Every block has one marker per inner block, in order, on a char boundary
//! 4. Arbitrary input never panics

use blockmark_engine::{Block, Node, parse};
use proptest::prelude::*;

/// A block name, with or without a namespace.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("([a-z][a-z0-9_-]{0,8}/)?[a-z][a-z0-9_-]{0,8}")
        .expect("valid regex")
}

/// An attribute payload: nothing, a small JSON object, or garbage in braces.
fn attributes_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::collection::vec(("[a-z]{1,6}", any::<i32>()), 0..4).prop_map(|pairs| {
            let fields: Vec<_> = pairs
                .iter()
                .map(|(key, value)| format!("\"{key}\":{value}"))
                .collect();
            Some(format!("{{{}}}", fields.join(",")))
        }),
        "[a-z ]{0,10}".prop_map(|junk| Some(format!("{{{junk}}}"))),
    ]
}

/// Literal text that cannot contain a delimiter.
fn text_strategy() -> impl Strategy<Value = String> {
    "[^<]{0,24}"
}

fn opener(name: &str, attributes: &Option<String>, self_closing: bool) -> String {
    let attributes = attributes
        .as_deref()
        .map(|a| format!("{a} "))
        .unwrap_or_default();
    let slash = if self_closing { "/" } else { "" };
    format!("<!-- wp:{name} {attributes}{slash}-->")
}

/// Random documents built from text, openers and closers.
fn document_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        text_strategy(),
        (name_strategy(), attributes_strategy(), any::<bool>())
            .prop_map(|(name, attributes, void)| opener(&name, &attributes, void)),
        name_strategy().prop_map(|name| format!("<!-- /wp:{name} -->")),
        prop::sample::select(vec!["a", "b", "c"]).prop_map(|n| format!("<!-- wp:{n} -->")),
        prop::sample::select(vec!["a", "b", "c"]).prop_map(|n| format!("<!-- /wp:{n} -->")),
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

fn check_markers(block: &Block) -> Result<(), TestCaseError> {
    for b in block.walk() {
        prop_assert_eq!(b.block_markers().len(), b.inner_blocks().len());
        prop_assert!(b.block_markers().windows(2).all(|w| w[0] <= w[1]));
        for &marker in b.block_markers() {
            prop_assert!(marker <= b.inner_content().len());
            prop_assert!(b.inner_content().is_char_boundary(marker));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn void_form_equals_empty_form(
        name in name_strategy(),
        attributes in attributes_strategy(),
    ) {
        let void = opener(&name, &attributes, true);
        let empty = format!("{}<!-- /wp:{name} -->", opener(&name, &attributes, false));
        prop_assert_eq!(parse(&void), parse(&empty));
    }

    #[test]
    fn leading_text_is_freeform(
        text in "[^<]{1,40}",
        name in name_strategy(),
        rest in document_strategy(),
    ) {
        let document = format!("{text}{}{rest}", opener(&name, &None, true));
        let nodes = parse(&document);
        prop_assert_eq!(
            nodes.first().and_then(Node::as_freeform).map(|f| f.inner_content()),
            Some(text.as_str())
        );
    }

    #[test]
    fn markers_are_consistent(document in document_strategy()) {
        for node in parse(&document) {
            if let Node::Block(block) = node {
                check_markers(&block)?;
            }
        }
    }

    #[test]
    fn never_panics_on_arbitrary_input(document in "(<!-- |/?wp:|[a-z/{}\" -]|-->|/-->|.){0,64}") {
        let _ = parse(&document);
    }
}
