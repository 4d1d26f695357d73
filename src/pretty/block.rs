//! # Block
//!
//! Immutable rectangular grid of text rows with a baseline row. Every composition
//! returns a new block; inputs are never touched, so blocks can be shared freely.
//!
//! Widths are counted in `char`s. All glyphs used by the printer occupy one column.

use crate::pretty::glyph_tables::{BracketKit, SignKit};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
    baseline: usize,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

impl Block {
    /// Builds a block from raw rows, padding every row with spaces to the widest one.
    pub fn from_lines(lines: Vec<String>, baseline: usize) -> Block {
        let mut lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        let width = lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
        for line in lines.iter_mut() {
            let missing = width - char_len(line);
            line.push_str(&" ".repeat(missing));
        }
        let baseline = baseline.min(lines.len() - 1);
        Block {
            lines,
            width,
            baseline,
        }
    }

    /// One-row block.
    pub fn leaf(text: &str) -> Block {
        Block {
            lines: vec![text.to_string()],
            width: char_len(text),
            baseline: 0,
        }
    }

    /// Block of spaces, baseline on the first row.
    pub fn blank(width: usize, height: usize) -> Block {
        let height = height.max(1);
        Block {
            lines: vec![" ".repeat(width); height],
            width,
            baseline: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }

    /// Rows strictly below the baseline plus the baseline row itself
    fn depth(&self) -> usize {
        self.height() - self.baseline
    }

    /// true when the block is rectangular, non-empty and its baseline is in bounds
    pub fn is_well_formed(&self) -> bool {
        !self.lines.is_empty()
            && self.baseline < self.lines.len()
            && self.lines.iter().all(|l| char_len(l) == self.width)
    }

    /// Same rows, baseline moved to `baseline`.
    pub fn with_baseline(&self, baseline: usize) -> Block {
        debug_assert!(
            baseline < self.height(),
            "baseline {} outside block of height {}",
            baseline,
            self.height()
        );
        Block {
            lines: self.lines.clone(),
            width: self.width,
            baseline: baseline.min(self.height() - 1),
        }
    }

    /// Rows of this block with `above` blank rows on top, filled with blank rows up to `total`.
    fn padded_rows(&self, above: usize, total: usize) -> Vec<String> {
        let blank = " ".repeat(self.width);
        let mut rows = Vec::with_capacity(total);
        rows.extend(std::iter::repeat_n(blank.clone(), above));
        rows.extend(self.lines.iter().cloned());
        let below = total.saturating_sub(rows.len());
        rows.extend(std::iter::repeat_n(blank, below));
        rows
    }

    pub fn pad_top(&self, rows: usize) -> Block {
        Block {
            lines: self.padded_rows(rows, self.height() + rows),
            width: self.width,
            baseline: self.baseline + rows,
        }
    }

    pub fn pad_bottom(&self, rows: usize) -> Block {
        Block {
            lines: self.padded_rows(0, self.height() + rows),
            width: self.width,
            baseline: self.baseline,
        }
    }

    /// Places `other` to the right, `gap` blank columns apart, with both baselines on one row.
    ///
    /// The result baseline is the larger of the two baselines; the shorter side gets
    /// blank rows above (to reach that baseline) and below (to reach the deeper side).
    pub fn hconcat(&self, other: &Block, gap: usize) -> Block {
        let baseline = self.baseline.max(other.baseline);
        let height = baseline + self.depth().max(other.depth());
        let left = self.padded_rows(baseline - self.baseline, height);
        let right = other.padded_rows(baseline - other.baseline, height);
        let spacer = " ".repeat(gap);
        let lines = left
            .iter()
            .zip(right.iter())
            .map(|(l, r)| format!("{}{}{}", l, spacer, r))
            .collect();
        Block {
            lines,
            width: self.width + gap + other.width,
            baseline,
        }
    }

    /// Left-to-right concatenation of several blocks; None for an empty slice.
    pub fn hconcat_all(blocks: &[Block], gap: usize) -> Option<Block> {
        let (first, rest) = blocks.split_first()?;
        Some(
            rest.iter()
                .fold(first.clone(), |acc, block| acc.hconcat(block, gap)),
        )
    }

    /// Widens the block to `target_width` with blank columns, content centered
    /// (an odd leftover column goes to the right).
    pub fn center_over(&self, target_width: usize) -> Block {
        if target_width <= self.width {
            return self.clone();
        }
        let left = (target_width - self.width) / 2;
        let right = target_width - self.width - left;
        let (lpad, rpad) = (" ".repeat(left), " ".repeat(right));
        let lines = self
            .lines
            .iter()
            .map(|l| format!("{}{}{}", lpad, l, rpad))
            .collect();
        Block {
            lines,
            width: target_width,
            baseline: self.baseline,
        }
    }

    /// Puts `top` above `bottom`, both centered over the wider one.
    ///
    /// With a separator a full-width row of that character goes between them and
    /// becomes the baseline (fraction bar); otherwise the baseline is the center row,
    /// the upper one of the two for even heights.
    pub fn vstack(top: &Block, bottom: &Block, separator: Option<char>) -> Block {
        let width = top.width.max(bottom.width);
        let mut lines = top.center_over(width).lines;
        if let Some(sep) = separator {
            lines.push(sep.to_string().repeat(width));
        }
        lines.extend(bottom.center_over(width).lines);
        let baseline = match separator {
            Some(_) => top.height(),
            None => (lines.len() - 1) / 2,
        };
        Block {
            lines,
            width,
            baseline,
        }
    }

    /// A new top row of `ch` across the full width; the baseline follows its row down.
    pub fn overline(&self, ch: char) -> Block {
        let mut lines = Vec::with_capacity(self.height() + 1);
        lines.push(ch.to_string().repeat(self.width));
        lines.extend(self.lines.iter().cloned());
        Block {
            lines,
            width: self.width,
            baseline: self.baseline + 1,
        }
    }

    /// Surrounds the block with brackets as tall as the block. Kits with a middle piece
    /// need an odd height, so an even-height body first gets a blank row below.
    pub fn wrap_brackets(&self, left: &BracketKit, right: &BracketKit) -> Block {
        let needs_middle = left.middle.is_some() || right.middle.is_some();
        let body = if needs_middle && self.height() > 1 && self.height() % 2 == 0 {
            self.pad_bottom(1)
        } else {
            self.clone()
        };
        let height = body.height();
        let lines = left
            .column(height)
            .into_iter()
            .zip(body.lines.iter())
            .zip(right.column(height))
            .map(|((l, row), r)| format!("{}{}{}", l, row, r))
            .collect();
        Block {
            lines,
            width: body.width + 2,
            baseline: body.baseline,
        }
    }

    /// Column of exactly `height` rows drawn from the kit; height 1 uses the one-row glyph.
    /// The baseline is the center row, the upper one for even heights.
    pub fn stretch_sign(kit: &SignKit, height: usize) -> Block {
        if height <= 1 {
            return Block::leaf(kit.single);
        }
        let mut lines = Vec::with_capacity(height);
        lines.push(kit.top.to_string());
        lines.extend(std::iter::repeat_n(kit.extension.to_string(), height - 2));
        lines.push(kit.bottom.to_string());
        Block {
            lines,
            width: 1,
            baseline: (height - 1) / 2,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
