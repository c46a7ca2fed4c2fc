//! Parsed document nodes.
//!
//! A parse yields a sequence of [`Node`]s: blocks interleaved with the
//! freeform text found between them. Nodes are built once by the walker and
//! never mutated afterwards; fields are read through accessors.
//!
//! Blocks always carry markers, freeform text never does. The two are
//! separate types so the difference shows up in the API and in serialized
//! output, where a freeform entry has no `blockMarkers` key at all:
//!
//! ```
//! let nodes = blockmark_engine::parse("HTML soup");
//! let json = serde_json::to_value(&nodes[0]).unwrap();
//! assert!(json.get("blockMarkers").is_none());
//! ```

use serde::Serialize;

use crate::attributes::Attributes;

/// A top-level entry of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Block(Block),
    Freeform(Freeform),
}

impl Node {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Node::Block(block) => Some(block),
            Node::Freeform(_) => None,
        }
    }

    pub fn as_freeform(&self) -> Option<&Freeform> {
        match self {
            Node::Freeform(freeform) => Some(freeform),
            Node::Block(_) => None,
        }
    }

    /// Literal text of this node, without any nested block markup.
    pub fn inner_content(&self) -> &str {
        match self {
            Node::Block(block) => block.inner_content(),
            Node::Freeform(freeform) => freeform.inner_content(),
        }
    }
}

/// A delimited block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    name: String,
    attributes: Attributes,
    inner_blocks: Vec<Block>,
    inner_content: String,
    block_markers: Vec<usize>,
}

impl Block {
    pub(crate) fn new(
        name: String,
        attributes: Attributes,
        inner_blocks: Vec<Block>,
        inner_content: String,
        block_markers: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(inner_blocks.len(), block_markers.len());
        Self {
            name,
            attributes,
            inner_blocks,
            inner_content,
            block_markers,
        }
    }

    /// Fully qualified name, e.g. `core/paragraph`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        self.name.split_once('/').map_or("", |(namespace, _)| namespace)
    }

    pub fn identifier(&self) -> &str {
        self.name
            .split_once('/')
            .map_or(self.name.as_str(), |(_, identifier)| identifier)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn inner_blocks(&self) -> &[Block] {
        &self.inner_blocks
    }

    pub fn inner_content(&self) -> &str {
        &self.inner_content
    }

    /// Byte offsets into [`inner_content`](Self::inner_content), one per
    /// inner block.
    pub fn block_markers(&self) -> &[usize] {
        &self.block_markers
    }

    /// This block and all blocks nested inside it, in document order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

// The derived drop would recurse once per nesting level. Children are
// detached onto a heap stack instead, so each block drops with no children.
impl Drop for Block {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.inner_blocks);
        while let Some(mut block) = pending.pop() {
            pending.append(&mut block.inner_blocks);
        }
    }
}

/// Pre-order traversal over a block subtree. See [`Block::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        self.stack.extend(block.inner_blocks.iter().rev());
        Some(block)
    }
}

/// Literal text outside any block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Freeform {
    inner_content: String,
}

impl Freeform {
    pub(crate) fn new(inner_content: String) -> Self {
        Self { inner_content }
    }

    pub fn inner_content(&self) -> &str {
        &self.inner_content
    }
}
