//! Leaf formatting: the linear atom-to-string step and the symbol-name post-processing
//! that turns `alpha_1`, `beta12`, `F^+-` into Greek letters with sub/superscripts.

use crate::pretty::glyph_tables::{greek_name_to_glyph, subscript_group, superscript_group};
use regex::Regex;
use std::sync::LazyLock;

/// Borrowed view of a leaf of the expression tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Atom<'a> {
    Symbol(&'a str),
    Number(f64),
    Rational(i64, i64),
}

/// Linear (single-line) formatting of leaves and function names.
pub trait AtomFormatter {
    fn format_atom(&self, atom: &Atom) -> String;
}

/// Plain functions and closures work as formatters
impl<F> AtomFormatter for F
where
    F: Fn(&Atom) -> String,
{
    fn format_atom(&self, atom: &Atom) -> String {
        self(atom)
    }
}

/// Default formatter: names verbatim, integral floats without a fractional part.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearAtomFormatter;

impl AtomFormatter for LinearAtomFormatter {
    fn format_atom(&self, atom: &Atom) -> String {
        match atom {
            Atom::Symbol(name) => name.to_string(),
            Atom::Number(val) => format_number(*val),
            Atom::Rational(p, q) => format!("{}/{}", p, q),
        }
    }
}

/// magnitudes from here on print in exponent form
const EXPONENT_FORM_FROM: f64 = 1e15;

/// 2.0 -> "2", 2.5 -> "2.5", -1e300 -> "-1e300", inf -> "oo"
pub fn format_number(val: f64) -> String {
    if val.is_infinite() {
        return if val > 0.0 { "oo".to_string() } else { "-oo".to_string() };
    }
    if val.abs() >= EXPONENT_FORM_FROM {
        return format!("{:e}", val);
    }
    if val.fract() == 0.0 {
        format!("{}", val as i64)
    } else {
        format!("{}", val)
    }
}

/// name followed by any number of `_sub` / `^sup` groups
static SUFFIX_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([_^])([^_^]*)").expect("static regex"));
/// letters followed by digits, e.g. beta12, Y00
static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z]+)([0-9]+)$").expect("static regex"));

/// Symbol name split into its base and its super/subscript groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolParts {
    pub name: String,
    pub supers: Vec<String>,
    pub subs: Vec<String>,
    /// the untouched suffix text, used when a group cannot be translated
    pub literal_suffix: String,
}

/// Splits `alpha^+_1` into name "alpha", supers ["+"], subs ["1"]; a bare `beta12`
/// becomes name "beta" with subs ["12"].
pub fn split_symbol(symbol: &str) -> SymbolParts {
    let split_at = symbol.find(['_', '^']).unwrap_or(symbol.len());
    let (name, suffix) = symbol.split_at(split_at);
    let mut supers = Vec::new();
    let mut subs = Vec::new();
    for group in SUFFIX_GROUP.captures_iter(suffix) {
        let text = group[2].to_string();
        match &group[1] {
            "^" => supers.push(text),
            _ => subs.push(text),
        }
    }
    let mut parts = SymbolParts {
        name: name.to_string(),
        supers,
        subs,
        literal_suffix: suffix.to_string(),
    };
    if parts.subs.is_empty() {
        if let Some(caps) = TRAILING_DIGITS.captures(name) {
            parts.subs.push(caps[2].to_string());
            parts.name = caps[1].to_string();
            parts.literal_suffix = format!("{}{}", &caps[2], suffix);
        }
    }
    parts
}

/// Unicode display form of a symbol name.
///
/// The base name becomes a Greek glyph when it names one. Super/subscript groups are
/// translated all together or not at all: a single untranslatable group keeps the
/// whole original suffix as literal text.
pub fn pretty_symbol(symbol: &str) -> String {
    let parts = split_symbol(symbol);
    let name = match greek_name_to_glyph(&parts.name) {
        Some(glyph) => glyph.to_string(),
        None => parts.name.clone(),
    };
    if parts.supers.is_empty() && parts.subs.is_empty() {
        return format!("{}{}", name, parts.literal_suffix);
    }
    let supers: Option<Vec<String>> = parts.supers.iter().map(|s| superscript_group(s)).collect();
    let subs: Option<Vec<String>> = parts.subs.iter().map(|s| subscript_group(s)).collect();
    match (supers, subs) {
        (Some(supers), Some(subs)) => format!("{}{}{}", name, supers.join(" "), subs.join(" ")),
        _ => format!("{}{}", name, parts.literal_suffix),
    }
}
