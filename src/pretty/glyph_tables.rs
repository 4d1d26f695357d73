//! Static glyph data: Greek names, sub/superscript forms and the drawing kits
//! (brackets, stretchable signs) for the Unicode and ASCII modes.
//!
//! All tables are read-only and initialized once per process, so they can be
//! shared between rendering threads without locking.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Greek letters addressable by their full English name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
pub enum GreekLetter {
    #[strum(serialize = "alpha")]
    Alpha,
    #[strum(serialize = "beta")]
    Beta,
    #[strum(serialize = "gamma")]
    Gamma,
    #[strum(serialize = "delta")]
    Delta,
    #[strum(serialize = "epsilon")]
    Epsilon,
    #[strum(serialize = "zeta")]
    Zeta,
    #[strum(serialize = "eta")]
    Eta,
    #[strum(serialize = "theta")]
    Theta,
    #[strum(serialize = "iota")]
    Iota,
    #[strum(serialize = "kappa")]
    Kappa,
    #[strum(to_string = "lambda", serialize = "lamda")]
    Lambda,
    #[strum(serialize = "mu")]
    Mu,
    #[strum(serialize = "nu")]
    Nu,
    #[strum(serialize = "xi")]
    Xi,
    #[strum(serialize = "omicron")]
    Omicron,
    #[strum(serialize = "pi")]
    Pi,
    #[strum(serialize = "rho")]
    Rho,
    #[strum(serialize = "sigma")]
    Sigma,
    #[strum(serialize = "tau")]
    Tau,
    #[strum(serialize = "upsilon")]
    Upsilon,
    #[strum(serialize = "phi")]
    Phi,
    #[strum(serialize = "chi")]
    Chi,
    #[strum(serialize = "psi")]
    Psi,
    #[strum(serialize = "omega")]
    Omega,
    #[strum(serialize = "Alpha")]
    CapitalAlpha,
    #[strum(serialize = "Beta")]
    CapitalBeta,
    #[strum(serialize = "Gamma")]
    CapitalGamma,
    #[strum(serialize = "Delta")]
    CapitalDelta,
    #[strum(serialize = "Epsilon")]
    CapitalEpsilon,
    #[strum(serialize = "Zeta")]
    CapitalZeta,
    #[strum(serialize = "Eta")]
    CapitalEta,
    #[strum(serialize = "Theta")]
    CapitalTheta,
    #[strum(serialize = "Iota")]
    CapitalIota,
    #[strum(serialize = "Kappa")]
    CapitalKappa,
    #[strum(to_string = "Lambda", serialize = "Lamda")]
    CapitalLambda,
    #[strum(serialize = "Mu")]
    CapitalMu,
    #[strum(serialize = "Nu")]
    CapitalNu,
    #[strum(serialize = "Xi")]
    CapitalXi,
    #[strum(serialize = "Omicron")]
    CapitalOmicron,
    #[strum(serialize = "Pi")]
    CapitalPi,
    #[strum(serialize = "Rho")]
    CapitalRho,
    #[strum(serialize = "Sigma")]
    CapitalSigma,
    #[strum(serialize = "Tau")]
    CapitalTau,
    #[strum(serialize = "Upsilon")]
    CapitalUpsilon,
    #[strum(serialize = "Phi")]
    CapitalPhi,
    #[strum(serialize = "Chi")]
    CapitalChi,
    #[strum(serialize = "Psi")]
    CapitalPsi,
    #[strum(serialize = "Omega")]
    CapitalOmega,
}

impl GreekLetter {
    pub fn glyph(self) -> char {
        use GreekLetter::*;
        match self {
            Alpha => 'α',
            Beta => 'β',
            Gamma => 'γ',
            Delta => 'δ',
            Epsilon => 'ε',
            Zeta => 'ζ',
            Eta => 'η',
            Theta => 'θ',
            Iota => 'ι',
            Kappa => 'κ',
            Lambda => 'λ',
            Mu => 'μ',
            Nu => 'ν',
            Xi => 'ξ',
            Omicron => 'ο',
            Pi => 'π',
            Rho => 'ρ',
            Sigma => 'σ',
            Tau => 'τ',
            Upsilon => 'υ',
            Phi => 'φ',
            Chi => 'χ',
            Psi => 'ψ',
            Omega => 'ω',
            CapitalAlpha => 'Α',
            CapitalBeta => 'Β',
            CapitalGamma => 'Γ',
            CapitalDelta => 'Δ',
            CapitalEpsilon => 'Ε',
            CapitalZeta => 'Ζ',
            CapitalEta => 'Η',
            CapitalTheta => 'Θ',
            CapitalIota => 'Ι',
            CapitalKappa => 'Κ',
            CapitalLambda => 'Λ',
            CapitalMu => 'Μ',
            CapitalNu => 'Ν',
            CapitalXi => 'Ξ',
            CapitalOmicron => 'Ο',
            CapitalPi => 'Π',
            CapitalRho => 'Ρ',
            CapitalSigma => 'Σ',
            CapitalTau => 'Τ',
            CapitalUpsilon => 'Υ',
            CapitalPhi => 'Φ',
            CapitalChi => 'Χ',
            CapitalPsi => 'Ψ',
            CapitalOmega => 'Ω',
        }
    }
}

/// name -> glyph, keyed by the canonical name of every letter
static GREEK_GLYPHS: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    GreekLetter::iter()
        .map(|letter| (<&'static str>::from(letter), letter.glyph()))
        .collect()
});

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// The only letters that have a modifier-letter subscript form.
static SUBSCRIPT_LETTERS: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    HashMap::from([
        ("a", 'ₐ'),
        ("e", 'ₑ'),
        ("i", 'ᵢ'),
        ("o", 'ₒ'),
        ("r", 'ᵣ'),
        ("u", 'ᵤ'),
        ("v", 'ᵥ'),
        ("x", 'ₓ'),
        ("beta", 'ᵦ'),
        ("gamma", 'ᵧ'),
        ("rho", 'ᵨ'),
        ("phi", 'ᵩ'),
        ("chi", 'ᵪ'),
        ("β", 'ᵦ'),
        ("γ", 'ᵧ'),
        ("ρ", 'ᵨ'),
        ("φ", 'ᵩ'),
        ("χ", 'ᵪ'),
    ])
});

/// Glyph of a Greek letter given by name ("alpha", "Gamma", "lamda").
pub fn greek_name_to_glyph(name: &str) -> Option<char> {
    if let Some(glyph) = GREEK_GLYPHS.get(name) {
        return Some(*glyph);
    }
    // aliases (lamda) resolve through strum's FromStr
    GreekLetter::from_str(name).ok().map(GreekLetter::glyph)
}

/// Subscript form of a decimal digit; `digit` must be in 0..=9.
pub fn digit_to_subscript(digit: u32) -> char {
    SUBSCRIPT_DIGITS[digit as usize]
}

/// Superscript form of a decimal digit; `digit` must be in 0..=9.
pub fn digit_to_superscript(digit: u32) -> char {
    SUPERSCRIPT_DIGITS[digit as usize]
}

/// Subscript form of a whitelisted letter, by Latin letter, Greek name or Greek glyph.
pub fn letter_to_subscript(letter: &str) -> Option<char> {
    SUBSCRIPT_LETTERS.get(letter).copied()
}

pub fn superscript_sign(sign: char) -> Option<char> {
    match sign {
        '+' => Some('⁺'),
        '-' => Some('⁻'),
        _ => None,
    }
}

/// Subscript form of a whole group ("12", "beta", "ae"), or None if any character lacks one.
pub fn subscript_group(group: &str) -> Option<String> {
    if group.is_empty() {
        return None;
    }
    if let Some(glyph) = letter_to_subscript(group) {
        return Some(glyph.to_string());
    }
    group
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => Some(digit_to_subscript(d)),
            None => letter_to_subscript(c.encode_utf8(&mut [0u8; 4])),
        })
        .collect()
}

/// Superscript form of a whole group ("+-", "2"), or None if any character lacks one.
pub fn superscript_group(group: &str) -> Option<String> {
    if group.is_empty() {
        return None;
    }
    group
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => Some(digit_to_superscript(d)),
            None => superscript_sign(c),
        })
        .collect()
}

//___________________________________DRAWING KITS____________________________________

/// One side of a stretchable bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BracketKit {
    /// glyph used when the body is one row high
    pub single: char,
    pub top: char,
    pub extension: char,
    /// centre piece, curly braces only
    pub middle: Option<char>,
    pub bottom: char,
}

impl BracketKit {
    /// Column of exactly `height` glyphs; `height` must be odd when a middle piece exists.
    pub fn column(&self, height: usize) -> Vec<char> {
        if height <= 1 {
            return vec![self.single];
        }
        let center = (height - 1) / 2;
        (0..height)
            .map(|row| {
                if row == 0 {
                    self.top
                } else if row == height - 1 {
                    self.bottom
                } else {
                    match self.middle {
                        Some(middle) if row == center => middle,
                        _ => self.extension,
                    }
                }
            })
            .collect()
    }
}

/// Stretch glyph kit for tall one-column signs (radical, integral, summation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignKit {
    /// glyph used for a one-row sign; may be wider than one column
    pub single: &'static str,
    pub top: char,
    pub extension: char,
    pub bottom: char,
}

/// Every drawing character that differs between Unicode and ASCII output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    pub unicode: bool,
    pub fraction_bar: char,
    pub overline: char,
    /// explicit multiplication sign
    pub times: &'static str,
    /// whether unambiguous products are written by juxtaposition
    pub juxtapose: bool,
    pub infinity: &'static str,
    pub arrow: &'static str,
    pub partial: &'static str,
    pub radical: SignKit,
    pub integral: SignKit,
    pub summation: SignKit,
    pub parens: (BracketKit, BracketKit),
    pub square: (BracketKit, BracketKit),
    pub curly: (BracketKit, BracketKit),
}

pub static UNICODE_GLYPHS: GlyphSet = GlyphSet {
    unicode: true,
    fraction_bar: '─',
    overline: '⎽',
    times: "⋅",
    juxtapose: true,
    infinity: "∞",
    arrow: "->",
    partial: "∂",
    radical: SignKit {
        single: "√",
        top: '│',
        extension: '│',
        bottom: '⎷',
    },
    integral: SignKit {
        single: "∫",
        top: '⌠',
        extension: '⎮',
        bottom: '⌡',
    },
    summation: SignKit {
        single: "∑",
        top: '⎲',
        extension: '│',
        bottom: '⎳',
    },
    parens: (
        BracketKit {
            single: '(',
            top: '⎛',
            extension: '⎜',
            middle: None,
            bottom: '⎝',
        },
        BracketKit {
            single: ')',
            top: '⎞',
            extension: '⎟',
            middle: None,
            bottom: '⎠',
        },
    ),
    square: (
        BracketKit {
            single: '[',
            top: '⎡',
            extension: '⎢',
            middle: None,
            bottom: '⎣',
        },
        BracketKit {
            single: ']',
            top: '⎤',
            extension: '⎥',
            middle: None,
            bottom: '⎦',
        },
    ),
    curly: (
        BracketKit {
            single: '{',
            top: '⎧',
            extension: '⎪',
            middle: Some('⎨'),
            bottom: '⎩',
        },
        BracketKit {
            single: '}',
            top: '⎫',
            extension: '⎪',
            middle: Some('⎬'),
            bottom: '⎭',
        },
    ),
};

pub static ASCII_GLYPHS: GlyphSet = GlyphSet {
    unicode: false,
    fraction_bar: '-',
    overline: '_',
    times: "*",
    juxtapose: false,
    infinity: "oo",
    arrow: "->",
    partial: "d",
    radical: SignKit {
        single: "\\/",
        top: '|',
        extension: '|',
        bottom: 'V',
    },
    integral: SignKit {
        single: "S",
        top: '/',
        extension: '|',
        bottom: '/',
    },
    summation: SignKit {
        single: "Sum",
        top: '\\',
        extension: '>',
        bottom: '/',
    },
    parens: (
        BracketKit {
            single: '(',
            top: '/',
            extension: '|',
            middle: None,
            bottom: '\\',
        },
        BracketKit {
            single: ')',
            top: '\\',
            extension: '|',
            middle: None,
            bottom: '/',
        },
    ),
    square: (
        BracketKit {
            single: '[',
            top: '[',
            extension: '[',
            middle: None,
            bottom: '[',
        },
        BracketKit {
            single: ']',
            top: ']',
            extension: ']',
            middle: None,
            bottom: ']',
        },
    ),
    curly: (
        BracketKit {
            single: '{',
            top: '/',
            extension: '|',
            middle: Some('<'),
            bottom: '\\',
        },
        BracketKit {
            single: '}',
            top: '\\',
            extension: '|',
            middle: Some('>'),
            bottom: '/',
        },
    ),
};

impl GlyphSet {
    pub fn for_mode(use_unicode: bool) -> &'static GlyphSet {
        if use_unicode {
            &UNICODE_GLYPHS
        } else {
            &ASCII_GLYPHS
        }
    }
}
