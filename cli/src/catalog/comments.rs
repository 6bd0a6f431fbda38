//! # Stylesheet Comment Scanner
//!
//! File: cli/src/catalog/comments.rs
//!
//! ## Overview
//!
//! Style metadata lives in doc-style comment blocks (`/** ... */`). This is
//! not a CSS parser: a block starts at the literal `/**` and ends at the
//! first `*/` after it. Blocks do not nest, and a `*/` inside a CSS string
//! still ends the block. An opener without a matching close ends the scan.
//!
//! ```rust
//! let css = "/** @category Layout */ .a {} /** @name a */";
//! let bodies: Vec<&str> = CommentBlocks::new(css).collect();
//! assert_eq!(bodies, vec![" @category Layout ", " @name a "]);
//! ```
//!

const OPEN: &str = "/**";
const CLOSE: &str = "*/";

/// Iterator over the bodies of `/** ... */` blocks, in file order.
#[derive(Debug, Clone)]
pub struct CommentBlocks<'a> {
    rest: &'a str,
}

impl<'a> CommentBlocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for CommentBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(OPEN)?;
        let after_open = &self.rest[start + OPEN.len()..];
        match after_open.find(CLOSE) {
            Some(end) => {
                self.rest = &after_open[end + CLOSE.len()..];
                Some(&after_open[..end])
            }
            None => {
                self.rest = "";
                None
            }
        }
    }
}

/// Body of the header block: the first block, if only whitespace precedes it.
pub fn header_block(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with(OPEN) {
        return None;
    }
    CommentBlocks::new(trimmed).next()
}
