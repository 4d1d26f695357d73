//! # Symbolic Module
//!
//! Expression trees for the pretty printer.
//!
//! # Example
//! ```
//! use RustedSciPretty::symbolic::symbolic_engine::Expr;
//! let x = Expr::symbol("x");
//! let y = Expr::symbol("y");
//! let expr = x.clone().pow(Expr::Const(2.0)) + y / x;
//! println!("linear: {}", expr);
//! println!("{}", expr.pretty().unwrap());
//! ```
/// ________________________________________________________________________________________________________________________________
///
/// # Symbolic engine
/// the `Expr` tree, its builders, operator overloading and the `NodeKind` tags used by the renderer
pub mod symbolic_engine;
