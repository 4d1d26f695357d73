//! # Pretty Printing Module
//!
//! Two-dimensional text rendering of symbolic expressions: fractions stacked over a bar,
//! exponents raised, radicals, integrals and sums drawn with stretched signs, matrices and
//! sequences wrapped in tall brackets. Output is either Unicode (box-drawing glyphs, Greek
//! letters, sub/superscripts) or plain ASCII.
//!
//! ## Modules
//! - [`block`]: the rectangular text block and its composition primitives
//! - [`glyph_tables`]: Greek names, sub/superscript glyphs, bracket and sign kits
//! - [`atom_format`]: leaf formatting and symbol-name post-processing
//! - [`renderer`]: per-node-kind layout strategies and the `PrettyPrinter` facade
//! - [`serialize`]: block to lines / text / writer
//! - [`settings`]: output mode, folding of negative powers, logging; TOML loading
//! - [`pretty_error`]: malformed-tree and settings errors
//!
//! ## Usage
//! ```rust, ignore
//! use RustedSciPretty::symbolic::symbolic_engine::Expr;
//! let x = Expr::symbol("x");
//! let expr = (x.clone() + Expr::Const(1.0)).sqrt() / x;
//! println!("{}", expr.pretty()?);
//! ```
pub mod atom_format;
pub mod block;
pub mod glyph_tables;
pub mod pretty_error;
pub mod renderer;
#[cfg(test)]
mod renderer_tests;
pub mod serialize;
pub mod settings;

pub use renderer::{PrettyPrinter, pretty, upretty};
