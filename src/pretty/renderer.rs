//! # Renderer
//!
//! Recursive dispatch from an [`Expr`] tree to a [`Block`]. Every node kind has exactly one
//! layout strategy, chosen by an exhaustive `match`, so a new expression variant cannot be
//! added without deciding how it is drawn.
//!
//! A tree is validated as a whole before anything is composed: a malformed node
//! (ragged matrix, bound with only one limit, ...) is reported as a [`PrettyError`] and no
//! block is produced at all.
//!
//! ## Example
//! ```rust, ignore
//! let (x, y) = (Expr::symbol("x"), Expr::symbol("y"));
//! let expr = y * x.pow(Expr::Const(-2.0));
//! assert_eq!(expr.pretty().unwrap(), "y \n──\n 2\nx ");
//! ```

use crate::pretty::atom_format::{Atom, AtomFormatter, LinearAtomFormatter, pretty_symbol};
use crate::pretty::block::Block;
use crate::pretty::glyph_tables::{BracketKit, GlyphSet, SignKit};
use crate::pretty::pretty_error::PrettyError;
use crate::pretty::serialize::{to_lines, to_text, write_block};
use crate::pretty::settings::PrettySettings;
use crate::symbolic::symbolic_engine::{Bound, Expr, NodeKind};
use itertools::Itertools;
use log::{debug, error, trace, warn};
use rayon::prelude::*;
use std::borrow::Cow;
use std::io;

/// Name of the layout strategy used for each node kind (shows up in trace logs)
pub fn strategy_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Atom => "leaf",
        NodeKind::Addition => "signed terms",
        NodeKind::Product => "juxtaposed factors",
        NodeKind::Fraction => "stacked fraction",
        NodeKind::Power => "raised exponent",
        NodeKind::Function => "function application",
        NodeKind::Radical => "radical sign",
        NodeKind::Derivative => "derivative operator",
        NodeKind::Limit => "limit operator",
        NodeKind::Integral => "integral signs",
        NodeKind::Summation => "summation signs",
        NodeKind::Matrix => "bracketed grid",
        NodeKind::Sequence => "bracketed sequence",
        NodeKind::Mapping => "braced mapping",
    }
}

//___________________________________VALIDATION____________________________________

fn check_bounds(expr: &Expr, bounds: &[Bound]) -> Result<(), PrettyError> {
    if bounds.is_empty() {
        return Err(PrettyError::MissingBounds {
            kind: expr.kind(),
            node: expr.to_string(),
        });
    }
    match bounds
        .iter()
        .find(|b| b.lower.is_some() != b.upper.is_some())
    {
        Some(bound) => Err(PrettyError::IncompleteBound {
            kind: expr.kind(),
            var: bound.var.clone(),
            node: expr.to_string(),
        }),
        None => Ok(()),
    }
}

fn check_node(expr: &Expr) -> Result<(), PrettyError> {
    match expr {
        Expr::Rational(p, 0) => Err(PrettyError::ZeroDenominator {
            numerator: *p,
            node: expr.to_string(),
        }),
        Expr::Func(name, _) if name.is_empty() => Err(PrettyError::EmptyFunctionName {
            node: expr.to_string(),
        }),
        Expr::Derivative(_, vars) => {
            if vars.is_empty() {
                return Err(PrettyError::EmptyDerivative {
                    node: expr.to_string(),
                });
            }
            match vars.iter().find(|(_, order)| *order == 0) {
                Some((var, _)) => Err(PrettyError::ZeroOrderDerivative {
                    var: var.clone(),
                    node: expr.to_string(),
                }),
                None => Ok(()),
            }
        }
        Expr::Integral(_, bounds) | Expr::Sum(_, bounds) => check_bounds(expr, bounds),
        Expr::Matrix(rows) => {
            let expected = rows.first().map(Vec::len).unwrap_or(0);
            for (row, cells) in rows.iter().enumerate() {
                if cells.is_empty() {
                    return Err(PrettyError::EmptyMatrixRow {
                        row,
                        node: expr.to_string(),
                    });
                }
                if cells.len() != expected {
                    return Err(PrettyError::RaggedMatrix {
                        row,
                        expected,
                        found: cells.len(),
                        node: expr.to_string(),
                    });
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Checks the whole tree; the first malformed node found (parents before children) is returned.
pub fn validate(expr: &Expr) -> Result<(), PrettyError> {
    check_node(expr)?;
    for child in expr.children() {
        validate(child)?;
    }
    Ok(())
}

//___________________________________SIGN HANDLING____________________________________

/// Magnitude of a term with a negative leading numeric coefficient: -3 -> 3, (-1)*x -> x,
/// (-2)*x -> 2*x. None when the term is not negative in that sense, or when the
/// magnitude has no i64 form (i64::MIN), in which case the term prints literally.
fn negative_magnitude(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Const(val) if *val < 0.0 => Some(Expr::Const(-val)),
        Expr::Rational(p, q) if *p != 0 && (*p < 0) != (*q < 0) => {
            Some(Expr::Rational(p.checked_abs()?, q.checked_abs()?))
        }
        Expr::Mul(lhs, rhs) => {
            let magnitude = negative_magnitude(lhs)?;
            if is_one(&magnitude) {
                Some(rhs.as_ref().clone())
            } else {
                Some(Expr::Mul(magnitude.boxed(), rhs.clone()))
            }
        }
        _ => None,
    }
}

fn is_one(expr: &Expr) -> bool {
    matches!(expr, Expr::Const(val) if *val == 1.0) || matches!(expr, Expr::Rational(p, q) if p == q)
}

fn is_numeric(expr: &Expr) -> bool {
    matches!(expr, Expr::Const(_) | Expr::Rational(_, _))
}

/// Terms of a chain of additions/subtractions in order, with their accumulated sign.
fn collect_terms<'a>(expr: &'a Expr, negated: bool, terms: &mut Vec<(bool, &'a Expr)>) {
    match expr {
        Expr::Add(lhs, rhs) => {
            collect_terms(lhs, negated, terms);
            collect_terms(rhs, negated, terms);
        }
        Expr::Sub(lhs, rhs) => {
            collect_terms(lhs, negated, terms);
            collect_terms(rhs, !negated, terms);
        }
        _ => terms.push((negated, expr)),
    }
}

fn collect_factors<'a>(expr: &'a Expr, factors: &mut Vec<&'a Expr>) {
    match expr {
        Expr::Mul(lhs, rhs) => {
            collect_factors(lhs, factors);
            collect_factors(rhs, factors);
        }
        _ => factors.push(expr),
    }
}

/// Bases drawn inside parentheses when raised to a power
fn needs_parens_as_base(base: &Expr) -> bool {
    match base {
        Expr::Const(val) => *val < 0.0,
        Expr::Var(_)
        | Expr::Sqrt(_)
        | Expr::Matrix(_)
        | Expr::List(_)
        | Expr::Tuple(_)
        | Expr::Set(_)
        | Expr::Map(_) => false,
        _ => base.as_function().is_none(),
    }
}

//___________________________________PRINTER____________________________________

/// Two-dimensional printer for expression trees.
///
/// Holds no mutable state, so one printer can render many trees, from many threads.
pub struct PrettyPrinter<F: AtomFormatter = LinearAtomFormatter> {
    settings: PrettySettings,
    glyphs: &'static GlyphSet,
    formatter: F,
}

impl PrettyPrinter<LinearAtomFormatter> {
    pub fn new(settings: PrettySettings) -> Self {
        Self::with_formatter(settings, LinearAtomFormatter)
    }

    pub fn unicode() -> Self {
        Self::new(PrettySettings::unicode())
    }

    pub fn ascii() -> Self {
        Self::new(PrettySettings::ascii())
    }
}

impl Default for PrettyPrinter<LinearAtomFormatter> {
    fn default() -> Self {
        Self::new(PrettySettings::default())
    }
}

impl<F: AtomFormatter> PrettyPrinter<F> {
    /// Printer with a custom linear formatter for leaves and function names
    pub fn with_formatter(settings: PrettySettings, formatter: F) -> Self {
        let glyphs = GlyphSet::for_mode(settings.use_unicode);
        PrettyPrinter {
            settings,
            glyphs,
            formatter,
        }
    }

    pub fn settings(&self) -> &PrettySettings {
        &self.settings
    }

    /// Renders a whole tree. Fails before any composition if any node is malformed.
    pub fn render(&self, expr: &Expr) -> Result<Block, PrettyError> {
        if let Err(e) = validate(expr) {
            warn!("cannot render {}: {}", expr, e);
            return Err(e);
        }
        let block = self.render_node(expr);
        debug!(
            "rendered {} into a {}x{} block, baseline {}",
            expr,
            block.height(),
            block.width(),
            block.baseline()
        );
        Ok(block)
    }

    pub fn pretty_lines(&self, expr: &Expr) -> Result<Vec<String>, PrettyError> {
        Ok(to_lines(&self.render(expr)?))
    }

    pub fn pretty_string(&self, expr: &Expr) -> Result<String, PrettyError> {
        Ok(to_text(&self.render(expr)?))
    }

    fn render_node(&self, expr: &Expr) -> Block {
        trace!(
            "{} node {} -> {}",
            expr.kind(),
            expr,
            strategy_name(expr.kind())
        );
        match expr {
            Expr::Var(name) => Block::leaf(&self.symbol_text(name)),
            Expr::Const(val) => Block::leaf(&self.number_text(*val)),
            Expr::Rational(p, q) => Block::leaf(&self.formatter.format_atom(&Atom::Rational(*p, *q))),
            Expr::Add(_, _) | Expr::Sub(_, _) => self.render_addition(expr),
            Expr::Mul(_, _) => self.render_product(expr),
            Expr::Div(num, den) => self.fraction(&self.render_node(num), &self.render_node(den)),
            Expr::Pow(base, exp) => self.render_power(expr, base, exp),
            Expr::Exp(arg) => self.raise(&Block::leaf("e"), &self.render_node(arg)),
            Expr::Ln(arg) => self.render_function("ln", &[arg.as_ref()]),
            Expr::sin(arg) => self.render_function("sin", &[arg.as_ref()]),
            Expr::cos(arg) => self.render_function("cos", &[arg.as_ref()]),
            Expr::tg(arg) => self.render_function("tg", &[arg.as_ref()]),
            Expr::ctg(arg) => self.render_function("ctg", &[arg.as_ref()]),
            Expr::arcsin(arg) => self.render_function("arcsin", &[arg.as_ref()]),
            Expr::arccos(arg) => self.render_function("arccos", &[arg.as_ref()]),
            Expr::arctg(arg) => self.render_function("arctg", &[arg.as_ref()]),
            Expr::arcctg(arg) => self.render_function("arcctg", &[arg.as_ref()]),
            Expr::Func(name, args) => {
                let args: Vec<&Expr> = args.iter().collect();
                self.render_function(name, &args)
            }
            Expr::Sqrt(arg) => self.render_radical(arg),
            Expr::Derivative(arg, vars) => self.render_derivative(arg, vars),
            Expr::Limit(arg, var, target) => self.render_limit(arg, var, target),
            Expr::Integral(arg, bounds) => self.render_big_operator(arg, bounds, NodeKind::Integral),
            Expr::Sum(arg, bounds) => self.render_big_operator(arg, bounds, NodeKind::Summation),
            Expr::Matrix(rows) => self.render_matrix(rows),
            Expr::List(items) => self.render_sequence(items, &self.glyphs.square),
            Expr::Tuple(items) => self.render_sequence(items, &self.glyphs.parens),
            Expr::Set(items) => self.render_sequence(items, &self.glyphs.curly),
            Expr::Map(pairs) => self.render_mapping(pairs),
        }
    }

    //___________________________________LEAVES____________________________________

    /// Display text of a symbol or function name
    fn symbol_text(&self, name: &str) -> String {
        let linear = self.formatter.format_atom(&Atom::Symbol(name));
        if self.glyphs.unicode {
            pretty_symbol(&linear)
        } else {
            linear
        }
    }

    fn number_text(&self, val: f64) -> String {
        if val.is_infinite() {
            let sign = if val < 0.0 { "-" } else { "" };
            return format!("{}{}", sign, self.glyphs.infinity);
        }
        self.formatter.format_atom(&Atom::Number(val))
    }

    //___________________________________COMPOSITION HELPERS____________________________________

    fn parens(&self, block: &Block) -> Block {
        let (left, right) = &self.glyphs.parens;
        block.wrap_brackets(left, right)
    }

    /// Blocks joined left to right by a text separator on the common baseline
    fn join(&self, blocks: &[Block], separator: &str) -> Block {
        let separator = Block::leaf(separator);
        match blocks.split_first() {
            Some((first, rest)) => rest.iter().fold(first.clone(), |acc, block| {
                acc.hconcat(&separator, 0).hconcat(block, 0)
            }),
            None => Block::leaf(""),
        }
    }

    /// Bracketed body whose baseline is moved to the center row of the brackets
    fn bracketed(&self, body: &Block, kit: &(BracketKit, BracketKit)) -> Block {
        let wrapped = body.wrap_brackets(&kit.0, &kit.1);
        let center = (wrapped.height() - 1) / 2;
        wrapped.with_baseline(center)
    }

    fn empty_brackets(&self, kit: &(BracketKit, BracketKit)) -> Block {
        Block::leaf(&format!("{}{}", kit.0.single, kit.1.single))
    }

    fn fraction(&self, num: &Block, den: &Block) -> Block {
        Block::vstack(num, den, Some(self.glyphs.fraction_bar))
    }

    /// Exponent placed above and to the right of the base; its bottom row sits right
    /// over the base's top row. The result keeps the base's baseline row.
    fn raise(&self, base: &Block, exponent: &Block) -> Block {
        let raised = exponent
            .pad_bottom(base.height())
            .with_baseline(exponent.height() + base.baseline());
        base.hconcat(&raised, 0)
    }

    //___________________________________ADDITION____________________________________

    fn render_addition(&self, expr: &Expr) -> Block {
        let mut terms = Vec::new();
        collect_terms(expr, false, &mut terms);
        let mut result: Option<Block> = None;
        for (negated, term) in terms {
            let (negated, term): (bool, Cow<Expr>) = match negative_magnitude(term) {
                Some(magnitude) => (!negated, Cow::Owned(magnitude)),
                None => (negated, Cow::Borrowed(term)),
            };
            let mut block = self.render_node(&term);
            if term.kind() == NodeKind::Addition {
                block = self.parens(&block);
            }
            result = Some(match result {
                None if negated => Block::leaf("-").hconcat(&block, 0),
                None => block,
                Some(acc) => {
                    let op = if negated { " - " } else { " + " };
                    acc.hconcat(&Block::leaf(op), 0).hconcat(&block, 0)
                }
            });
        }
        result.unwrap_or_else(|| Block::leaf(""))
    }

    //___________________________________PRODUCT____________________________________

    fn render_product(&self, expr: &Expr) -> Block {
        let mut collected = Vec::new();
        collect_factors(expr, &mut collected);
        let single = collected.len() == 1;
        let mut negative = false;
        let mut factors: Vec<Expr> = Vec::with_capacity(collected.len());
        for factor in collected {
            if is_numeric(factor) {
                if let Some(magnitude) = negative_magnitude(factor) {
                    negative = !negative;
                    if !single && is_one(&magnitude) {
                        continue;
                    }
                    factors.push(magnitude);
                    continue;
                }
            }
            factors.push(factor.clone());
        }
        if factors.is_empty() {
            factors.push(Expr::Const(1.0));
        }

        let block = if self.settings.fold_negative_powers {
            let mut numerator = Vec::new();
            let mut denominator = Vec::new();
            for factor in factors {
                match factor {
                    Expr::Pow(base, exp) => match negative_magnitude(&exp) {
                        Some(magnitude) if is_one(&magnitude) => denominator.push(*base),
                        Some(magnitude) => denominator.push(Expr::Pow(base, magnitude.boxed())),
                        None => numerator.push(Expr::Pow(base, exp)),
                    },
                    Expr::Div(num, den) => {
                        if !is_one(&num) {
                            numerator.push(*num);
                        }
                        denominator.push(*den);
                    }
                    other => numerator.push(other),
                }
            }
            if denominator.is_empty() {
                self.juxtapose(&numerator)
            } else {
                if numerator.is_empty() {
                    numerator.push(Expr::Const(1.0));
                }
                self.fraction(&self.juxtapose(&numerator), &self.juxtapose(&denominator))
            }
        } else {
            self.juxtapose(&factors)
        };

        if negative {
            Block::leaf("-").hconcat(&block, 0)
        } else {
            block
        }
    }

    /// Whether writing `left` directly before `right` would misread
    fn needs_explicit_mul(&self, left: &Expr, right: &Expr) -> bool {
        if !self.glyphs.juxtapose {
            return true;
        }
        match (left, right) {
            (_, Expr::Const(_) | Expr::Rational(_, _)) => true,
            (_, Expr::Pow(base, _)) if is_numeric(base) => true,
            (Expr::Var(a), Expr::Var(b)) => {
                self.symbol_text(a).chars().count() > 1 || self.symbol_text(b).chars().count() > 1
            }
            _ => false,
        }
    }

    /// Factors written side by side; additive factors get parentheses when not alone
    fn juxtapose(&self, factors: &[Expr]) -> Block {
        let mut result: Option<Block> = None;
        for (i, factor) in factors.iter().enumerate() {
            let mut block = self.render_node(factor);
            if factors.len() > 1 && factor.kind() == NodeKind::Addition {
                block = self.parens(&block);
            }
            result = Some(match result {
                None => block,
                Some(acc) if self.needs_explicit_mul(&factors[i - 1], factor) => acc
                    .hconcat(&Block::leaf(self.glyphs.times), 0)
                    .hconcat(&block, 0),
                Some(acc) => acc.hconcat(&block, 0),
            });
        }
        result.unwrap_or_else(|| Block::leaf(""))
    }

    //___________________________________POWER____________________________________

    fn render_power(&self, expr: &Expr, base: &Expr, exp: &Expr) -> Block {
        if self.settings.fold_negative_powers && negative_magnitude(exp).is_some() {
            return self.render_product(expr);
        }
        if matches!(exp, Expr::Rational(1, 2)) {
            return self.render_radical(base);
        }
        let exponent = self.render_node(exp);
        if let Some((name, args)) = base.as_function() {
            if exponent.height() == 1 {
                let head = self.raise(&Block::leaf(&self.symbol_text(name)), &exponent);
                return head.hconcat(&self.argument_list(&args), 0);
            }
        }
        let mut base_block = self.render_node(base);
        if needs_parens_as_base(base) {
            base_block = self.parens(&base_block);
        }
        self.raise(&base_block, &exponent)
    }

    //___________________________________FUNCTIONS____________________________________

    fn argument_list(&self, args: &[&Expr]) -> Block {
        let blocks: Vec<Block> = args.iter().map(|arg| self.render_node(arg)).collect();
        self.parens(&self.join(&blocks, ", "))
    }

    fn render_function(&self, name: &str, args: &[&Expr]) -> Block {
        let arguments = self.argument_list(args);
        Block::leaf(&self.symbol_text(name)).hconcat(&arguments, 0)
    }

    //___________________________________RADICAL____________________________________

    fn render_radical(&self, arg: &Expr) -> Block {
        let radicand = self.render_node(arg);
        let sign = Block::stretch_sign(&self.glyphs.radical, radicand.height())
            .with_baseline(radicand.baseline());
        sign.hconcat(&radicand.overline(self.glyphs.overline), 0)
    }

    //___________________________________CALCULUS____________________________________

    fn render_derivative(&self, arg: &Expr, vars: &[(String, usize)]) -> Block {
        let d = if vars.len() > 1 {
            self.glyphs.partial
        } else {
            "d"
        };
        let total = vars
            .iter()
            .fold(0usize, |acc, (_, order)| acc.saturating_add(*order));
        let numerator = if total > 1 {
            self.raise(&Block::leaf(d), &Block::leaf(&total.to_string()))
        } else {
            Block::leaf(d)
        };
        let differentials: Vec<Block> = vars
            .iter()
            .map(|(var, order)| {
                let dv = Block::leaf(&format!("{}{}", d, self.symbol_text(var)));
                if *order > 1 {
                    self.raise(&dv, &Block::leaf(&order.to_string()))
                } else {
                    dv
                }
            })
            .collect();
        let denominator =
            Block::hconcat_all(&differentials, 1).unwrap_or_else(|| Block::leaf(d));
        let operator = self.fraction(&numerator, &denominator);
        let mut argument = self.render_node(arg);
        if !arg.is_atom() {
            argument = self.parens(&argument);
        }
        operator.hconcat(&argument, 0)
    }

    fn render_limit(&self, arg: &Expr, var: &str, target: &Expr) -> Block {
        let approach = Block::leaf(&format!("{}{}", self.symbol_text(var), self.glyphs.arrow))
            .hconcat(&self.render_node(target), 0);
        let width = approach.width().max(3);
        let lim = Block::leaf("lim").center_over(width);
        let operator = Block::vstack(&lim, &approach.center_over(width), None).with_baseline(0);
        let mut body = self.render_node(arg);
        if arg.kind() == NodeKind::Addition {
            body = self.parens(&body);
        }
        operator.hconcat(&body, 0)
    }

    /// One sign column: upper label over the stretched sign over the lower label.
    /// The baseline is the sign row that faces the body's baseline.
    fn bound_column(
        &self,
        bound: &Bound,
        kit: &SignKit,
        sign_height: usize,
        body_baseline: usize,
        kind: NodeKind,
    ) -> Block {
        let sign = Block::stretch_sign(kit, sign_height);
        match (&bound.lower, &bound.upper) {
            (Some(lower), Some(upper)) => {
                let upper = self.render_node(upper);
                let mut lower = self.render_node(lower);
                if kind == NodeKind::Summation {
                    lower = Block::leaf(&format!("{}=", self.symbol_text(&bound.var)))
                        .hconcat(&lower, 0);
                }
                let column = Block::vstack(&Block::vstack(&upper, &sign, None), &lower, None);
                column.with_baseline(upper.height() + 1 + body_baseline)
            }
            _ if kind == NodeKind::Summation => {
                let lower = Block::leaf(&self.symbol_text(&bound.var));
                Block::vstack(&sign, &lower, None).with_baseline(1 + body_baseline)
            }
            _ => sign.with_baseline(1 + body_baseline),
        }
    }

    /// Integral or summation: one sign column per bound (outermost left), then the body,
    /// then for integrals the differentials, innermost first.
    fn render_big_operator(&self, arg: &Expr, bounds: &[Bound], kind: NodeKind) -> Block {
        let kit = match kind {
            NodeKind::Summation => &self.glyphs.summation,
            _ => &self.glyphs.integral,
        };
        let mut body = self.render_node(arg);
        if arg.kind() == NodeKind::Addition {
            body = self.parens(&body);
        }
        let sign_height = body.height() + 2;
        let columns: Vec<Block> = bounds
            .iter()
            .map(|bound| self.bound_column(bound, kit, sign_height, body.baseline(), kind))
            .collect();
        let signs = Block::hconcat_all(&columns, 1)
            .unwrap_or_else(|| Block::stretch_sign(kit, sign_height));
        let result = signs.hconcat(&body, 1);
        if kind != NodeKind::Integral {
            return result;
        }
        let differentials = bounds
            .iter()
            .rev()
            .map(|bound| format!("d{}", self.symbol_text(&bound.var)))
            .join(" ");
        result.hconcat(&Block::leaf(&differentials), 1)
    }

    //___________________________________CONTAINERS____________________________________

    fn render_matrix(&self, rows: &[Vec<Expr>]) -> Block {
        if rows.is_empty() {
            return self.empty_brackets(&self.glyphs.square);
        }
        let cells: Vec<Vec<Block>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| self.render_node(cell)).collect())
            .collect();
        let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
        let widths = (0..columns)
            .map(|j| {
                cells
                    .iter()
                    .filter_map(|row| row.get(j))
                    .map(Block::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect_vec();
        let row_blocks = cells
            .iter()
            .map(|row| {
                let centered = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, width)| cell.center_over(*width))
                    .collect_vec();
                Block::hconcat_all(&centered, 1).unwrap_or_else(|| Block::leaf(""))
            })
            .collect_vec();
        let body = row_blocks
            .iter()
            .skip(1)
            .fold(row_blocks[0].clone(), |acc, row| {
                Block::vstack(&acc, row, Some(' '))
            });
        self.bracketed(&body, &self.glyphs.square)
    }

    fn render_sequence(&self, items: &[Expr], kit: &(BracketKit, BracketKit)) -> Block {
        if items.is_empty() {
            return self.empty_brackets(kit);
        }
        let blocks = items.iter().map(|item| self.render_node(item)).collect_vec();
        self.bracketed(&self.join(&blocks, ", "), kit)
    }

    fn render_mapping(&self, pairs: &[(Expr, Expr)]) -> Block {
        if pairs.is_empty() {
            return self.empty_brackets(&self.glyphs.curly);
        }
        let entries = pairs
            .iter()
            .map(|(key, value)| {
                self.render_node(key)
                    .hconcat(&Block::leaf(": "), 0)
                    .hconcat(&self.render_node(value), 0)
            })
            .collect_vec();
        self.bracketed(&self.join(&entries, ", "), &self.glyphs.curly)
    }
}

impl<F: AtomFormatter + Sync> PrettyPrinter<F> {
    /// Renders independent trees in parallel; results keep the input order.
    pub fn render_batch(&self, exprs: &[Expr]) -> Vec<Result<String, PrettyError>> {
        exprs.par_iter().map(|expr| self.pretty_string(expr)).collect()
    }
}

//___________________________________CONVENIENCE____________________________________

/// Pretty text of an expression in the chosen mode
pub fn pretty(expr: &Expr, use_unicode: bool) -> Result<String, PrettyError> {
    let settings = PrettySettings {
        use_unicode,
        ..PrettySettings::default()
    };
    PrettyPrinter::new(settings).pretty_string(expr)
}

/// Pretty text in Unicode mode
pub fn upretty(expr: &Expr) -> Result<String, PrettyError> {
    pretty(expr, true)
}

impl Expr {
    /// Unicode two-dimensional rendering of the expression
    pub fn pretty(&self) -> Result<String, PrettyError> {
        upretty(self)
    }

    pub fn pretty_ascii(&self) -> Result<String, PrettyError> {
        pretty(self, false)
    }

    /// Prints the Unicode rendering to stdout; failures are logged
    pub fn pprint(&self) {
        let rendered = PrettyPrinter::unicode().render(self);
        match rendered {
            Ok(block) => {
                if let Err(e) = write_block(&block, io::stdout().lock()) {
                    error!("cannot write {} to stdout: {}", self, e);
                }
            }
            Err(e) => error!("{}", e),
        }
    }
}
