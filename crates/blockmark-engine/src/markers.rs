//! # Block Markers
//!
//! A block's `inner_content` has its children's markup cut out. Markers
//! record where each child used to be: `markers[i]` is the UTF-8 byte length
//! of the content accumulated before child `i`'s opening delimiter. A
//! serializer can splice children back in without re-parsing.
//!
//! ```text
//! <!-- wp:block -->aa<!-- wp:void /-->bb<!-- /wp:block -->
//!
//! inner_content = "aabb", markers = [2]
//! ```
//!
//! ## Byte lengths
//!
//! Lengths are UTF-8 encoded byte counts, one code point at a time with no
//! normalization:
//!
//! | code points        | bytes |
//! |--------------------|-------|
//! | U+0000 – U+007F    | 1     |
//! | U+0080 – U+07FF    | 2     |
//! | U+0800 – U+FFFF    | 3     |
//! | U+10000 and above  | 4     |
//!
//! Text arriving as UTF-16 may hold unpaired surrogates. Those count as 3
//! bytes each, the size of the U+FFFD they are replaced with when such text
//! is decoded for parsing.

/// Running byte offsets of a frame's children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMarkers(Vec<usize>);

impl BlockMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a child boundary after `content`, the frame's content so far.
    pub fn record(&mut self, content: &str) {
        let offset = content.len();
        debug_assert!(
            self.0.last().is_none_or(|&last| last <= offset),
            "markers must not go backwards: {:?} then {offset}",
            self.0
        );
        self.0.push(offset);
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

/// UTF-8 encoded width of a single code point.
pub const fn utf8_width(c: char) -> usize {
    match c as u32 {
        0x0000..=0x007F => 1,
        0x0080..=0x07FF => 2,
        0x0800..=0xFFFF => 3,
        _ => 4,
    }
}

/// UTF-8 byte length of UTF-16 text, counting each unpaired surrogate as
/// 3 bytes.
pub fn utf16_byte_len(units: &[u16]) -> usize {
    char::decode_utf16(units.iter().copied())
        .map(|decoded| match decoded {
            Ok(c) => utf8_width(c),
            Err(_) => 3,
        })
        .sum()
}
