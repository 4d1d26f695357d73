//! # Symbolic Engine Module
//!
//! This module provides the symbolic expression tree consumed by the pretty printer.
//! It is deliberately small: expressions are built, combined with the usual operators
//! and handed to [`crate::pretty`] for two-dimensional rendering. Nothing here simplifies
//! or evaluates; the tree is printed exactly as it was built.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Atoms**: `Var(String)`, `Const(f64)`, `Rational(i64, i64)`
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, etc. and generic `Func(name, args)`
//! - **Calculus**: `Sqrt`, `Derivative`, `Limit`, `Integral`, `Sum`
//! - **Containers**: `Matrix`, `List`, `Tuple`, `Set`, `Map`
//!
//! ### `NodeKind` Enum
//! One tag per rendering strategy; `Expr::kind()` maps every variant to exactly one tag.
//!
//! ## Interesting Code Features
//!
//! 1. **Operator Overloading**: `x + y * z` builds the tree directly
//! 2. **Indexed Variable System**: `x5`, `A_2_3` names, printed with subscripts
//! 3. **Non-standard Function Names**: mathematical notation (tg, ctg) instead
//!    of programming conventions (tan, cot) for trigonometric functions

#![allow(non_camel_case_types)]

use nalgebra::DMatrix;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// # Examples
/// ```rust, ignore
/// use symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x", "alpha", "F_beta")
    Var(String),
    /// Numerical constant value, `f64::INFINITY` stands for infinity
    Const(f64),
    /// Exact rational number p/q
    Rational(i64, i64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    sin(Box<Expr>),
    cos(Box<Expr>),
    /// Tangent function: tan(x) - uses mathematical notation 'tg'
    tg(Box<Expr>),
    /// Cotangent function: cot(x) - uses mathematical notation 'ctg'
    ctg(Box<Expr>),
    arcsin(Box<Expr>),
    arccos(Box<Expr>),
    arctg(Box<Expr>),
    arcctg(Box<Expr>),
    /// Application of a named function to an argument list: f(x, y)
    Func(String, Vec<Expr>),
    /// Square root
    Sqrt(Box<Expr>),
    /// Derivative of an expression with respect to (variable, order) pairs
    Derivative(Box<Expr>, Vec<(String, usize)>),
    /// Limit of an expression as a variable approaches a target
    Limit(Box<Expr>, String, Box<Expr>),
    /// Integral over bounds, outermost bound first
    Integral(Box<Expr>, Vec<Bound>),
    /// Summation over bounds, outermost bound first
    Sum(Box<Expr>, Vec<Bound>),
    /// Matrix given row by row
    Matrix(Vec<Vec<Expr>>),
    List(Vec<Expr>),
    Tuple(Vec<Expr>),
    Set(Vec<Expr>),
    /// Mapping of keys to values, in insertion order
    Map(Vec<(Expr, Expr)>),
}

/// Integration or summation variable with optional limits.
#[derive(Clone, Debug, PartialEq)]
pub struct Bound {
    pub var: String,
    pub lower: Option<Expr>,
    pub upper: Option<Expr>,
}

impl Bound {
    /// bound with both limits: var from lower to upper
    pub fn definite(var: &str, lower: Expr, upper: Expr) -> Bound {
        Bound {
            var: var.to_string(),
            lower: Some(lower),
            upper: Some(upper),
        }
    }
    /// bound without limits (indefinite integral)
    pub fn indefinite(var: &str) -> Bound {
        Bound {
            var: var.to_string(),
            lower: None,
            upper: None,
        }
    }
}

/// Syntactic category of a node; each kind has exactly one rendering strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum NodeKind {
    Atom,
    Addition,
    Product,
    Fraction,
    Power,
    Function,
    Radical,
    Derivative,
    Limit,
    Integral,
    Summation,
    Matrix,
    Sequence,
    Mapping,
}

fn write_joined(f: &mut fmt::Formatter, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_bounds(f: &mut fmt::Formatter, bounds: &[Bound]) -> fmt::Result {
    for bound in bounds {
        match (&bound.lower, &bound.upper) {
            (Some(lower), Some(upper)) => write!(f, ", ({}, {}, {})", bound.var, lower, upper)?,
            _ => write!(f, ", {}", bound.var)?,
        }
    }
    Ok(())
}

/// Linear (single-line) rendering used for logging and error messages.
///
/// Converts expressions to human-readable mathematical notation with parentheses
/// for proper precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Rational(p, q) => write!(f, "{}/{}", p, q),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::ctg(expr) => write!(f, "ctg({})", expr),
            Expr::arcsin(expr) => write!(f, "arcsin({})", expr),
            Expr::arccos(expr) => write!(f, "arccos({})", expr),
            Expr::arctg(expr) => write!(f, "arctg({})", expr),
            Expr::arcctg(expr) => write!(f, "arcctg({})", expr),
            Expr::Func(name, args) => {
                write!(f, "{}(", name)?;
                write_joined(f, args)?;
                write!(f, ")")
            }
            Expr::Sqrt(expr) => write!(f, "sqrt({})", expr),
            Expr::Derivative(expr, vars) => {
                write!(f, "Derivative({}", expr)?;
                for (var, order) in vars {
                    write!(f, ", ({}, {})", var, order)?;
                }
                write!(f, ")")
            }
            Expr::Limit(expr, var, target) => write!(f, "Limit({}, {}, {})", expr, var, target),
            Expr::Integral(expr, bounds) => {
                write!(f, "Integral({}", expr)?;
                write_bounds(f, bounds)?;
                write!(f, ")")
            }
            Expr::Sum(expr, bounds) => {
                write!(f, "Sum({}", expr)?;
                write_bounds(f, bounds)?;
                write!(f, ")")
            }
            Expr::Matrix(rows) => {
                write!(f, "Matrix([")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    write_joined(f, row)?;
                    write!(f, "]")?;
                }
                write!(f, "])")
            }
            Expr::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Expr::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Expr::Set(items) => {
                write!(f, "{{")?;
                write_joined(f, items)?;
                write!(f, "}}")
            }
            Expr::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}
impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Add(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expr::Sub(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Mul(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expr::Div(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Whitespace is trimmed and empty names are skipped.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let vars = Expr::Symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        symbols
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| Expr::Var(s.to_string()))
            .collect()
    }

    /// Single symbolic variable
    pub fn symbol(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates exponential function e^(self).
    pub fn exp(self) -> Expr {
        Expr::Exp(self.boxed())
    }

    /// Creates natural logarithm ln(self).
    pub fn ln(self) -> Expr {
        Expr::Ln(self.boxed())
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Square root of self
    pub fn sqrt(self) -> Expr {
        Expr::Sqrt(self.boxed())
    }

    /// Exact rational p/q
    pub fn rational(p: i64, q: i64) -> Expr {
        Expr::Rational(p, q)
    }

    pub fn infinity() -> Expr {
        Expr::Const(f64::INFINITY)
    }

    /// Application of a named function: name(args)
    pub fn func(name: &str, args: Vec<Expr>) -> Expr {
        Expr::Func(name.to_string(), args)
    }

    /// Unevaluated derivative d^n(self)/dvar^n for each (var, n) pair.
    pub fn derivative(self, vars: &[(&str, usize)]) -> Expr {
        let vars = vars
            .iter()
            .map(|(var, order)| (var.to_string(), *order))
            .collect();
        Expr::Derivative(self.boxed(), vars)
    }

    /// Unevaluated limit of self as var -> target
    pub fn limit(self, var: &str, target: Expr) -> Expr {
        Expr::Limit(self.boxed(), var.to_string(), target.boxed())
    }

    /// Unevaluated integral of self; bounds are given outermost first
    pub fn integrate(self, bounds: Vec<Bound>) -> Expr {
        Expr::Integral(self.boxed(), bounds)
    }

    /// Unevaluated sum of self; bounds are given outermost first
    pub fn summation(self, bounds: Vec<Bound>) -> Expr {
        Expr::Sum(self.boxed(), bounds)
    }

    pub fn matrix(rows: Vec<Vec<Expr>>) -> Expr {
        Expr::Matrix(rows)
    }

    /// Matrix node built from a nalgebra matrix of expressions
    pub fn from_dmatrix(matrix: &DMatrix<Expr>) -> Expr {
        let rows = (0..matrix.nrows())
            .map(|i| {
                (0..matrix.ncols())
                    .map(|j| matrix[(i, j)].clone())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        Expr::Matrix(rows)
    }

    pub fn list(items: Vec<Expr>) -> Expr {
        Expr::List(items)
    }

    pub fn tuple(items: Vec<Expr>) -> Expr {
        Expr::Tuple(items)
    }

    pub fn set(items: Vec<Expr>) -> Expr {
        Expr::Set(items)
    }

    pub fn map(pairs: Vec<(Expr, Expr)>) -> Expr {
        Expr::Map(pairs)
    }

    /// true for leaves of the tree: variables and numbers
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Var(_) | Expr::Const(_) | Expr::Rational(_, _))
    }

    /// Name and arguments of a function application, including the built-in functions
    pub fn as_function(&self) -> Option<(&str, Vec<&Expr>)> {
        let (name, arg) = match self {
            Expr::Func(name, args) => return Some((name.as_str(), args.iter().collect())),
            Expr::Ln(arg) => ("ln", arg),
            Expr::sin(arg) => ("sin", arg),
            Expr::cos(arg) => ("cos", arg),
            Expr::tg(arg) => ("tg", arg),
            Expr::ctg(arg) => ("ctg", arg),
            Expr::arcsin(arg) => ("arcsin", arg),
            Expr::arccos(arg) => ("arccos", arg),
            Expr::arctg(arg) => ("arctg", arg),
            Expr::arcctg(arg) => ("arcctg", arg),
            _ => return None,
        };
        Some((name, vec![arg.as_ref()]))
    }

    /// Rendering category of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Var(_) | Expr::Const(_) | Expr::Rational(_, _) => NodeKind::Atom,
            Expr::Add(_, _) | Expr::Sub(_, _) => NodeKind::Addition,
            Expr::Mul(_, _) => NodeKind::Product,
            Expr::Div(_, _) => NodeKind::Fraction,
            Expr::Pow(_, _) | Expr::Exp(_) => NodeKind::Power,
            Expr::Ln(_)
            | Expr::sin(_)
            | Expr::cos(_)
            | Expr::tg(_)
            | Expr::ctg(_)
            | Expr::arcsin(_)
            | Expr::arccos(_)
            | Expr::arctg(_)
            | Expr::arcctg(_)
            | Expr::Func(_, _) => NodeKind::Function,
            Expr::Sqrt(_) => NodeKind::Radical,
            Expr::Derivative(_, _) => NodeKind::Derivative,
            Expr::Limit(_, _, _) => NodeKind::Limit,
            Expr::Integral(_, _) => NodeKind::Integral,
            Expr::Sum(_, _) => NodeKind::Summation,
            Expr::Matrix(_) => NodeKind::Matrix,
            Expr::List(_) | Expr::Tuple(_) | Expr::Set(_) => NodeKind::Sequence,
            Expr::Map(_) => NodeKind::Mapping,
        }
    }

    /// Direct subexpressions, including bound limits, matrix cells and map keys
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Var(_) | Expr::Const(_) | Expr::Rational(_, _) => Vec::new(),
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => vec![lhs.as_ref(), rhs.as_ref()],
            Expr::Exp(arg)
            | Expr::Ln(arg)
            | Expr::sin(arg)
            | Expr::cos(arg)
            | Expr::tg(arg)
            | Expr::ctg(arg)
            | Expr::arcsin(arg)
            | Expr::arccos(arg)
            | Expr::arctg(arg)
            | Expr::arcctg(arg)
            | Expr::Sqrt(arg)
            | Expr::Derivative(arg, _) => vec![arg.as_ref()],
            Expr::Func(_, args) | Expr::List(args) | Expr::Tuple(args) | Expr::Set(args) => {
                args.iter().collect()
            }
            Expr::Limit(arg, _, target) => vec![arg.as_ref(), target.as_ref()],
            Expr::Integral(arg, bounds) | Expr::Sum(arg, bounds) => {
                let mut children = vec![arg.as_ref()];
                for bound in bounds {
                    children.extend(bound.lower.iter());
                    children.extend(bound.upper.iter());
                }
                children
            }
            Expr::Matrix(rows) => rows.iter().flatten().collect(),
            Expr::Map(pairs) => pairs.iter().flat_map(|(k, v)| [k, v]).collect(),
        }
    }

    //__________________________________INDEXED VARIABLES____________________________________

    /// Creates a single indexed variable with format "name + index" (e.g., "x5").
    pub fn IndexedVar(index: usize, var_name: &str) -> Expr {
        let indexed_var_name = format!("{}{}", var_name, index);
        Expr::Var(indexed_var_name)
    }

    /// Creates multiple indexed variables x0, x1, ... and their names
    pub fn IndexedVars(num_vars: usize, var_name: &str) -> (Vec<Expr>, Vec<String>) {
        let vec_of_expr = (0..num_vars)
            .map(|i| Expr::IndexedVar(i, var_name))
            .collect();
        let vec_of_names = (0..num_vars)
            .map(|i| format!("{}{}", var_name, i))
            .collect();
        (vec_of_expr, vec_of_names)
    }

    /// Creates a 2D indexed variable with format "name_row_col" (e.g., "A_2_3").
    pub fn IndexedVar2D(index_row: usize, index_col: usize, var_name: &str) -> Expr {
        let indexed_var_name = format!("{}_{}_{}", var_name, index_row, index_col);
        Expr::Var(indexed_var_name)
    }

    /// Creates a 2D matrix of indexed variables A_0_0, A_0_1, ... and the flat name list
    pub fn IndexedVars2D(
        num_rows: usize,
        num_cols: usize,
        var_name: &str,
    ) -> (Vec<Vec<Expr>>, Vec<String>) {
        let matrix = (0..num_rows)
            .map(|i| {
                (0..num_cols)
                    .map(|j| Expr::IndexedVar2D(i, j, var_name))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let vec_of_names = (0..num_rows)
            .flat_map(|i| (0..num_cols).map(move |j| format!("{}_{}_{}", var_name, i, j)))
            .collect();
        (matrix, vec_of_names)
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y, z) -> creates variables x, y, z
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = $crate::symbolic::symbolic_engine::Expr::Symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}

/// Macro to create a single indexed variable
/// Usage: indexed_var!(5, "x") -> creates x5
#[macro_export]
macro_rules! indexed_var {
    ($index:expr, $name:expr) => {
        $crate::symbolic::symbolic_engine::Expr::IndexedVar($index, $name)
    };
}

/// Macro to create a 2D indexed variable
/// Usage: indexed_var_2d!(2, 3, "A") -> creates A_2_3
#[macro_export]
macro_rules! indexed_var_2d {
    ($row:expr, $col:expr, $name:expr) => {
        $crate::symbolic::symbolic_engine::Expr::IndexedVar2D($row, $col, $name)
    };
}
