//! # Document Walker
//!
//! Turns the flat token stream into a block tree. Each open block is a
//! [`Frame`] on an explicit stack, so nesting depth is bounded by memory
//! rather than the call stack.
//!
//! ## Transitions
//!
//! | token            | no open frame              | innermost frame `N` open            |
//! |------------------|----------------------------|-------------------------------------|
//! | text             | extend pending freeform    | append to `N`'s content             |
//! | opener           | push frame                 | push frame                          |
//! | self-closer      | finalize, emit at top      | finalize, adopt as child of `N`     |
//! | closer for `N`   | (n/a)                      | pop `N`, finalize, hand to parent   |
//! | any other closer | literal text               | literal text                        |
//!
//! Adopting a child records a marker *before* the child is appended, and the
//! child's delimiters never reach the parent's content.
//!
//! ## Recovery
//!
//! The walker never fails:
//!
//! - a closer that does not match the innermost open block is kept as text
//! - blocks still open at end of input are closed with what they collected,
//!   innermost first

use std::ops::Range;

use blockmark_syntax::Token;

use crate::attributes::{Attributes, attributes_or_default};
use crate::markers::BlockMarkers;
use crate::node::{Block, Freeform, Node};

/// A block that has been opened but not closed yet.
#[derive(Debug)]
struct Frame {
    name: String,
    attributes: Attributes,
    inner_blocks: Vec<Block>,
    inner_content: String,
    markers: BlockMarkers,
}

impl Frame {
    fn new(name: String, attributes: Attributes) -> Self {
        Self {
            name,
            attributes,
            inner_blocks: Vec::new(),
            inner_content: String::new(),
            markers: BlockMarkers::new(),
        }
    }

    fn adopt(&mut self, child: Block) {
        self.markers.record(&self.inner_content);
        self.inner_blocks.push(child);
    }

    fn finalize(self) -> Block {
        Block::new(
            self.name,
            self.attributes,
            self.inner_blocks,
            self.inner_content,
            self.markers.into_vec(),
        )
    }
}

pub(crate) struct Walker<'a> {
    source: &'a str,
    default_namespace: &'a str,
    stack: Vec<Frame>,
    freeform: String,
    output: Vec<Node>,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(source: &'a str, default_namespace: &'a str) -> Self {
        Self {
            source,
            default_namespace,
            stack: Vec::new(),
            freeform: String::new(),
            output: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, token: Token<'_>, span: Range<usize>) {
        match token {
            Token::Text(text) => self.push_text(text),
            Token::Opener {
                name,
                raw_attributes,
                self_closing,
            } => {
                let name = self.qualify(name);
                log::trace!("open {name} at {span:?}");
                let attributes = attributes_or_default(&name, raw_attributes);
                let frame = Frame::new(name, attributes);
                if self_closing {
                    self.attach(frame.finalize());
                } else {
                    self.stack.push(frame);
                }
            }
            Token::Closer { name } => {
                let name = self.qualify(name);
                if let Some(frame) = self.stack.pop_if(|frame| frame.name == name) {
                    log::trace!("close {name} at {span:?}");
                    self.attach(frame.finalize());
                } else {
                    log::debug!("unmatched closer for {name} at {span:?}, keeping it as text");
                    let source = self.source;
                    self.push_text(&source[span]);
                }
            }
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Node> {
        while let Some(frame) = self.stack.pop() {
            log::debug!("{} is never closed, closing it at end of input", frame.name);
            self.attach(frame.finalize());
        }
        self.flush_freeform();
        self.output
    }

    fn push_text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(frame) => frame.inner_content.push_str(text),
            None => self.freeform.push_str(text),
        }
    }

    fn attach(&mut self, block: Block) {
        match self.stack.last_mut() {
            Some(parent) => parent.adopt(block),
            None => {
                self.flush_freeform();
                self.output.push(Node::Block(block));
            }
        }
    }

    fn flush_freeform(&mut self) {
        if !self.freeform.is_empty() {
            let text = std::mem::take(&mut self.freeform);
            self.output.push(Node::Freeform(Freeform::new(text)));
        }
    }

    fn qualify(&self, name: &str) -> String {
        if name.contains('/') {
            name.to_string()
        } else {
            format!("{}/{name}", self.default_namespace)
        }
    }
}
