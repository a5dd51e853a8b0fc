// src/output/mod.rs

//! Accumulates file blocks and delivers the final text.

pub mod file_block;
pub mod writer;

pub use file_block::format_file_block;

use std::io;

/// Ordered file blocks produced by one traversal.
///
/// Each block is a header line, the raw content and a separator line; the
/// result is their plain concatenation.
#[derive(Debug, Default, Clone)]
pub struct OutputBuffer {
    blocks: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats and appends the block for one accepted file.
    pub fn emit(&mut self, display_path: &str, content: io::Result<Vec<u8>>) {
        self.blocks.push(format_file_block(display_path, content));
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Concatenates every block, untrimmed.
    pub fn into_string(self) -> String {
        self.blocks.concat()
    }
}

/// Strips trailing newlines, as done before handing the text to a consumer.
pub fn trim_trailing_newlines(output: &str) -> &str {
    output.trim_end_matches('\n')
}
