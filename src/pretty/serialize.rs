//! Block -> final text. Rows keep their trailing spaces so every line has the block width.

use crate::pretty::block::Block;
use std::io::{self, Write};

/// Rows of the block, top to bottom, all of equal length
pub fn to_lines(block: &Block) -> Vec<String> {
    block.lines().to_vec()
}

/// Rows joined with '\n', no trailing newline
pub fn to_text(block: &Block) -> String {
    block.lines().join("\n")
}

/// Writes every row followed by a newline
pub fn write_block<W: Write>(block: &Block, mut out: W) -> io::Result<()> {
    for line in block.lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
