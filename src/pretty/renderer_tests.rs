use crate::Utils::logger::init_test_logger;
use crate::pretty::atom_format::{Atom, AtomFormatter, LinearAtomFormatter};
use crate::pretty::block::Block;
use crate::pretty::pretty_error::PrettyError;
use crate::pretty::renderer::{PrettyPrinter, pretty, strategy_name, upretty, validate};
use crate::pretty::settings::PrettySettings;
use crate::symbolic::symbolic_engine::{Bound, Expr, NodeKind};
use crate::symbols;
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn ulines(expr: &Expr) -> Vec<String> {
        PrettyPrinter::unicode().pretty_lines(expr).unwrap()
    }

    fn alines(expr: &Expr) -> Vec<String> {
        PrettyPrinter::ascii().pretty_lines(expr).unwrap()
    }

    fn var(name: &str) -> Expr {
        Expr::symbol(name)
    }

    fn c(val: f64) -> Expr {
        Expr::Const(val)
    }

    /// left-aligned and padded with spaces to `width` chars
    fn pad(text: &str, width: usize) -> String {
        format!("{:<width$}", text, width = width)
    }

    fn assert_shape(block: &Block) {
        assert!(block.is_well_formed(), "{:?}", block);
        assert!(block.baseline() < block.height());
    }

    //___________________________________ATOMS____________________________________

    #[test]
    fn test_atoms() {
        assert_eq!(ulines(&var("x")), vec!["x"]);
        assert_eq!(ulines(&c(2.0)), vec!["2"]);
        assert_eq!(ulines(&c(-2.5)), vec!["-2.5"]);
        assert_eq!(ulines(&Expr::rational(3, 4)), vec!["3/4"]);
        assert_eq!(ulines(&Expr::infinity()), vec!["∞"]);
        assert_eq!(ulines(&c(f64::NEG_INFINITY)), vec!["-∞"]);
        assert_eq!(alines(&Expr::infinity()), vec!["oo"]);
    }

    #[test]
    fn test_symbol_glyphs() {
        assert_eq!(upretty(&var("F_beta")).unwrap(), "Fᵦ");
        assert_eq!(upretty(&var("F_q")).unwrap(), "F_q");
        assert_eq!(upretty(&var("alpha^+_1")).unwrap(), "α⁺₁");
        assert_eq!(upretty(&Expr::IndexedVar(12, "beta")).unwrap(), "β₁₂");
        assert_eq!(upretty(&Expr::IndexedVar2D(2, 3, "A")).unwrap(), "A₂ ₃");
        // ASCII mode keeps names verbatim
        assert_eq!(pretty(&var("F_beta"), false).unwrap(), "F_beta");
    }

    //___________________________________ADDITION____________________________________

    #[test]
    fn test_addition_signs() {
        let (x, y) = symbols!(x, y);
        assert_eq!(ulines(&(x.clone() + y.clone())), vec!["x + y"]);
        assert_eq!(ulines(&(x.clone() - y.clone())), vec!["x - y"]);
        assert_eq!(ulines(&(-x.clone() + y.clone())), vec!["-x + y"]);
        assert_eq!(ulines(&(x.clone() + c(-2.0) * y.clone())), vec!["x - 2y"]);
        assert_eq!(ulines(&(x.clone() - c(-3.0))), vec!["x + 3"]);
        assert_eq!(
            ulines(&(x.clone() - (y.clone() - c(1.0)))),
            vec!["x - y + 1"]
        );
        assert_eq!(ulines(&(x + -(y + c(1.0)))), vec!["x - (y + 1)"]);
    }

    #[test]
    fn test_addition_with_fraction() {
        let (x, y) = symbols!(x, y);
        assert_eq!(ulines(&(x + c(1.0) / y)), vec!["    1", "x + ─", "    y"]);
    }

    //___________________________________PRODUCTS____________________________________

    #[test]
    fn test_fraction_from_negative_power() {
        let (x, y) = symbols!(x, y);
        let expr = y * x.pow(c(-2.0));
        assert_eq!(ulines(&expr), vec!["y ", "──", " 2", "x "]);
        assert_eq!(upretty(&expr).unwrap(), "y \n──\n 2\nx ");
        assert_eq!(alines(&expr), vec!["y ", "--", " 2", "x "]);
    }

    #[test]
    fn test_fraction_with_rational_exponents() {
        let (x, y) = symbols!(x, y);
        let expr = y.pow(Expr::rational(3, 2)) * x.pow(Expr::rational(-5, 2));
        assert_eq!(ulines(&expr), vec![" 3/2", "y   ", "────", " 5/2", "x   "]);
    }

    #[test]
    fn test_juxtaposition() {
        let (x, y) = symbols!(x, y);
        assert_eq!(ulines(&(c(2.0) * x.clone())), vec!["2x"]);
        assert_eq!(ulines(&(x.clone() * c(2.0))), vec!["x⋅2"]);
        assert_eq!(ulines(&(x.clone() * y.clone())), vec!["xy"]);
        assert_eq!(ulines(&(var("alpha") * var("beta"))), vec!["αβ"]);
        assert_eq!(ulines(&(var("ab") * x.clone())), vec!["ab⋅x"]);
        assert_eq!(ulines(&(c(2.0) * (x.clone() + c(1.0)))), vec!["2(x + 1)"]);
        assert_eq!(ulines(&(-x.clone() * y.clone())), vec!["-xy"]);
        assert_eq!(alines(&(x.clone() * y)), vec!["x*y"]);
        assert_eq!(alines(&(c(2.0) * x)), vec!["2*x"]);
    }

    #[test]
    fn test_product_with_division_factor() {
        let (x, y) = symbols!(x, y);
        assert_eq!(
            ulines(&(x.clone() * (c(1.0) / y.clone()))),
            vec!["x", "─", "y"]
        );
        let unfolded = PrettyPrinter::new(PrettySettings {
            fold_negative_powers: false,
            ..PrettySettings::default()
        });
        assert_eq!(
            unfolded.pretty_lines(&(y * x.pow(c(-1.0)))).unwrap(),
            vec!["  -1", "yx  "]
        );
    }

    //___________________________________POWERS____________________________________

    #[test]
    fn test_powers() {
        let x = var("x");
        assert_eq!(ulines(&x.clone().pow(c(2.0))), vec![" 2", "x "]);
        assert_eq!(
            ulines(&(x.clone() + c(1.0)).pow(c(2.0))),
            vec!["       2", "(x + 1) "]
        );
        assert_eq!(ulines(&x.clone().pow(c(-1.0))), vec!["1", "─", "x"]);
        assert_eq!(ulines(&c(-2.0).pow(x.clone())), vec!["    x", "(-2) "]);
        assert_eq!(ulines(&x.clone().exp()), vec![" x", "e "]);
        assert_eq!(
            ulines(&x.clone().pow(c(1.0) / var("y"))),
            vec![" 1", " ─", " y", "x "]
        );
        assert_eq!(alines(&x.pow(c(2.0))), vec![" 2", "x "]);
    }

    #[test]
    fn test_function_power() {
        let expr = Expr::sin(var("theta").boxed()).pow(c(2.0));
        assert_eq!(ulines(&expr), vec!["   2   ", "sin (θ)"]);
        let ratio = expr / Expr::cos(var("phi").boxed()).pow(c(2.0));
        assert_eq!(
            ulines(&ratio),
            vec!["   2   ", "sin (θ)", "───────", "   2   ", "cos (φ)"]
        );
    }

    #[test]
    fn test_ratio_of_function_powers() {
        let x = var("x");
        let expr = Expr::sin(x.clone().boxed()).pow(c(3.0))
            / Expr::func("tan", vec![x]).pow(c(2.0));
        assert_eq!(
            ulines(&expr),
            vec!["   3   ", "sin (x)", "───────", "   2   ", "tan (x)"]
        );
    }

    #[test]
    fn test_half_power_is_radical() {
        let x = var("x");
        assert_eq!(
            ulines(&x.clone().pow(Expr::rational(1, 2))),
            ulines(&x.sqrt())
        );
    }

    //___________________________________FUNCTIONS____________________________________

    #[test]
    fn test_function_application() {
        let (x, y) = symbols!(x, y);
        assert_eq!(ulines(&x.clone().ln()), vec!["ln(x)"]);
        assert_eq!(ulines(&Expr::func("f", vec![])), vec!["f()"]);
        assert_eq!(ulines(&Expr::func("beta", vec![var("alpha")])), vec!["β(α)"]);
        let expr = Expr::func("f", vec![x / (y.clone() + c(1.0)), y]);
        assert_eq!(
            ulines(&expr),
            vec![" ⎛  x     ⎞", "f⎜─────, y⎟", " ⎝y + 1   ⎠"]
        );
    }

    //___________________________________RADICALS____________________________________

    #[test]
    fn test_radicals() {
        let x = var("x");
        assert_eq!(ulines(&(x.clone() + c(1.0)).sqrt()), vec![" ⎽⎽⎽⎽⎽", "√x + 1"]);
        let block = PrettyPrinter::unicode()
            .render(&(c(1.0) / x.clone()).sqrt())
            .unwrap();
        assert_eq!(block.lines().to_vec(), vec![" ⎽", "│1", "│─", "⎷x"]);
        assert_eq!(block.baseline(), 2);
        assert_eq!(alines(&x.sqrt()), vec!["  _", "\\/x"]);
    }

    //___________________________________CALCULUS____________________________________

    #[test]
    fn test_derivative() {
        let expr = Expr::func("beta", vec![var("alpha")]).derivative(&[("alpha", 1)]);
        assert_eq!(ulines(&expr), vec!["d       ", "──(β(α))", "dα      "]);

        let second = var("f").derivative(&[("x", 2)]);
        assert_eq!(ulines(&second), vec![" 2  ", "d   ", "───f", "  2 ", "dx  "]);

        let mixed = var("f").derivative(&[("x", 1), ("y", 1)]);
        assert_eq!(
            ulines(&mixed),
            vec!["  2   ", " ∂    ", "─────f", "∂x ∂y "]
        );
        let block = PrettyPrinter::unicode().render(&mixed).unwrap();
        assert_eq!(block.baseline(), 2);
        // no partial sign in ASCII
        assert_eq!(alines(&mixed)[3], "dx dy ");
    }

    #[test]
    fn test_limits() {
        let x = var("x");
        assert_eq!(
            ulines(&x.clone().limit("x", Expr::infinity())),
            vec!["lim x", "x->∞ "]
        );
        assert_eq!(
            ulines(&x.clone().pow(c(2.0)).limit("x", c(0.0))),
            vec!["     2", "lim x ", "x->0  "]
        );
        assert_eq!(
            ulines(&(c(1.0) / x.clone()).limit("x", c(0.0))),
            vec!["    1", "lim ─", "x->0x"]
        );
        assert_eq!(
            alines(&x.limit("x", Expr::infinity())),
            vec![" lim x", "x->oo "]
        );
    }

    #[test]
    fn test_indefinite_integral() {
        let expr = var("x").integrate(vec![Bound::indefinite("x")]);
        assert_eq!(ulines(&expr), vec!["⌠     ", "⎮ x dx", "⌡     "]);
    }

    #[test]
    fn test_double_integral_ordering() {
        let integrand = Expr::sin(var("theta").boxed()) / Expr::cos(var("phi").boxed());
        let expr = integrand.integrate(vec![
            Bound::definite("phi", c(0.0), c(2.0) * var("pi")),
            Bound::definite("theta", c(0.0), var("pi")),
        ]);
        let expected = vec![
            pad("2π π", 17),
            pad("⌠  ⌠", 17),
            pad("⎮  ⎮ sin(θ)", 17),
            "⎮  ⎮ ────── dθ dφ".to_string(),
            pad("⎮  ⎮ cos(φ)", 17),
            pad("⌡  ⌡", 17),
            pad("0  0", 17),
        ];
        assert_eq!(ulines(&expr), expected);
        let block = PrettyPrinter::unicode().render(&expr).unwrap();
        assert_eq!(block.baseline(), 3);
    }

    #[test]
    fn test_summation() {
        let expr = var("k").summation(vec![Bound::definite("k", c(1.0), var("n"))]);
        assert_eq!(
            ulines(&expr),
            vec![" n   ", " ⎲   ", " │  k", " ⎳   ", "k=1  "]
        );
        let sum_of_sum = (var("x") + var("y")).summation(vec![Bound::indefinite("i")]);
        let lines = ulines(&sum_of_sum);
        assert_eq!(lines[1], "│ (x + y)");
        assert!(!lines.iter().any(|l| l.contains('d')));
    }

    //___________________________________CONTAINERS____________________________________

    #[test]
    fn test_matrix() {
        let (x, y) = symbols!(x, y);
        let expr = Expr::matrix(vec![
            vec![x.clone().pow(c(2.0)) + c(1.0), c(1.0)],
            vec![y.clone(), x + y],
        ]);
        let block = PrettyPrinter::unicode().render(&expr).unwrap();
        assert_eq!(
            block.lines().to_vec(),
            vec![
                "⎡ 2          ⎤",
                "⎢x  + 1   1  ⎥",
                "⎢            ⎥",
                "⎣  y    x + y⎦",
            ]
        );
        assert_eq!(block.baseline(), 1);
    }

    #[test]
    fn test_matrix_bracket_symmetry() {
        let (cells, _) = Expr::IndexedVars2D(3, 2, "a");
        let mut cells = cells;
        cells[1][1] = c(1.0) / var("x");
        let block = PrettyPrinter::unicode().render(&Expr::matrix(cells)).unwrap();
        let left: String = block.lines().iter().filter_map(|l| l.chars().next()).collect();
        let right: String = block.lines().iter().filter_map(|l| l.chars().last()).collect();
        assert_eq!(left.chars().count(), block.height());
        assert_eq!(right.chars().count(), block.height());
        assert!(left.starts_with('⎡') && left.ends_with('⎣'));
        assert!(right.starts_with('⎤') && right.ends_with('⎦'));
        assert_eq!(block.baseline(), (block.height() - 1) / 2);
    }

    #[test]
    fn test_matrix_ascii_and_empty() {
        let row = Expr::matrix(vec![vec![c(1.0), c(2.0)]]);
        assert_eq!(alines(&row), vec!["[1 2]"]);
        let column = Expr::matrix(vec![vec![c(1.0) / var("x")]]);
        assert_eq!(alines(&column), vec!["[1]", "[-]", "[x]"]);
        assert_eq!(ulines(&Expr::matrix(vec![])), vec!["[]"]);
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(upretty(&Expr::list(vec![])).unwrap(), "[]");
        assert_eq!(upretty(&Expr::tuple(vec![])).unwrap(), "()");
        assert_eq!(upretty(&Expr::set(vec![])).unwrap(), "{}");
        assert_eq!(upretty(&Expr::map(vec![])).unwrap(), "{}");
        assert_eq!(pretty(&Expr::map(vec![]), false).unwrap(), "{}");
    }

    #[test]
    fn test_list_and_tuple() {
        let (x, y) = symbols!(x, y);
        let items = vec![x.clone().pow(c(2.0)), c(1.0) / x.clone(), x.clone(), y.clone()];
        assert_eq!(
            ulines(&Expr::list(items.clone())),
            vec!["⎡ 2  1      ⎤", "⎢x , ─, x, y⎥", "⎣    x      ⎦"]
        );
        assert_eq!(
            ulines(&Expr::tuple(items)),
            vec!["⎛ 2  1      ⎞", "⎜x , ─, x, y⎟", "⎝    x      ⎠"]
        );
        let square = x.pow(c(2.0));
        assert_eq!(ulines(&Expr::list(vec![square.clone()])), vec!["⎡ 2⎤", "⎣x ⎦"]);
        assert_eq!(ulines(&Expr::tuple(vec![square])), vec!["⎛ 2⎞", "⎝x ⎠"]);
        assert_eq!(ulines(&Expr::set(vec![y.clone(), c(2.0) * y])), vec!["{y, 2y}"]);
    }

    #[test]
    fn test_five_row_sequences() {
        let (x, y) = symbols!(x, y);
        let ratio = Expr::sin(var("theta").boxed()).pow(c(2.0))
            / Expr::cos(var("phi").boxed()).pow(c(2.0));
        let items = vec![x.clone().pow(c(2.0)), c(1.0) / x.clone(), x, y, ratio];
        assert_eq!(
            ulines(&Expr::list(items.clone())),
            vec![
                "⎡                2   ⎤",
                "⎢ 2  1        sin (θ)⎥",
                "⎢x , ─, x, y, ───────⎥",
                "⎢    x           2   ⎥",
                "⎣             cos (φ)⎦",
            ]
        );
        assert_eq!(
            ulines(&Expr::tuple(items)),
            vec![
                "⎛                2   ⎞",
                "⎜ 2  1        sin (θ)⎟",
                "⎜x , ─, x, y, ───────⎟",
                "⎜    x           2   ⎟",
                "⎝             cos (φ)⎠",
            ]
        );
    }

    #[test]
    fn test_mappings() {
        let (x, y) = symbols!(x, y);
        let one = Expr::map(vec![(x.clone(), Expr::sin(x.clone().boxed()))]);
        assert_eq!(ulines(&one), vec!["{x: sin(x)}"]);

        let two = Expr::map(vec![
            (c(1.0) / x.clone(), c(1.0) / y),
            (x.clone(), Expr::sin(x.clone().boxed()).pow(c(2.0))),
        ]);
        assert_eq!(
            ulines(&two),
            vec!["⎧1  1        2   ⎫", "⎨─: ─, x: sin (x)⎬", "⎩x  y            ⎭"]
        );

        let even = Expr::map(vec![(x.pow(c(2.0)), c(1.0))]);
        let block = PrettyPrinter::unicode().render(&even).unwrap();
        assert_eq!(block.lines().to_vec(), vec!["⎧ 2   ⎫", "⎨x : 1⎬", "⎩     ⎭"]);
        assert_eq!(block.baseline(), 1);
    }

    //___________________________________ERRORS____________________________________

    #[test]
    fn test_malformed_matrices() {
        init_test_logger();
        let printer = PrettyPrinter::unicode();
        let ragged = Expr::matrix(vec![vec![c(1.0), c(2.0)], vec![c(3.0)]]);
        match printer.render(&ragged) {
            Err(PrettyError::RaggedMatrix {
                row,
                expected,
                found,
                ..
            }) => assert_eq!((row, expected, found), (1, 2, 1)),
            other => panic!("ragged matrix rendered: {:?}", other),
        }
        let empty_row = Expr::matrix(vec![vec![]]);
        let err = printer.render(&empty_row).unwrap_err();
        assert!(matches!(err, PrettyError::EmptyMatrixRow { row: 0, .. }));
        assert_eq!(err.node_kind(), Some(NodeKind::Matrix));
    }

    #[test]
    fn test_malformed_calculus_nodes() {
        let x = var("x");
        let cases = vec![
            (x.clone().integrate(vec![]), NodeKind::Integral),
            (x.clone().summation(vec![]), NodeKind::Summation),
            (
                x.clone().integrate(vec![Bound {
                    var: "x".to_string(),
                    lower: Some(c(0.0)),
                    upper: None,
                }]),
                NodeKind::Integral,
            ),
            (x.clone().derivative(&[]), NodeKind::Derivative),
            (x.clone().derivative(&[("x", 0)]), NodeKind::Derivative),
            (Expr::rational(1, 0), NodeKind::Atom),
            (Expr::func("", vec![x.clone()]), NodeKind::Function),
        ];
        for (expr, kind) in cases {
            let err = upretty(&expr).unwrap_err();
            assert_eq!(err.node_kind(), Some(kind), "{}", err);
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_extreme_rationals_print_literally() {
        let x = var("x");
        assert_eq!(
            upretty(&(x.clone() + Expr::rational(i64::MIN, 1))).unwrap(),
            "x + -9223372036854775808/1"
        );
        assert_eq!(
            upretty(&(x + Expr::rational(3, i64::MIN))).unwrap(),
            "x + 3/-9223372036854775808"
        );
        assert_eq!(
            upretty(&Expr::rational(i64::MIN, 1)).unwrap(),
            "-9223372036854775808/1"
        );
    }

    #[test]
    fn test_zero_denominator_names_the_node() {
        match upretty(&(var("x") + Expr::rational(1, 0))) {
            Err(PrettyError::ZeroDenominator { numerator, node }) => {
                assert_eq!(numerator, 1);
                assert_eq!(node, "1/0");
            }
            other => panic!("zero denominator rendered: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_child_fails_whole_tree() {
        let bad = Expr::matrix(vec![vec![c(1.0)], vec![]]);
        let tree = Expr::list(vec![var("x"), var("y") + bad]);
        assert!(validate(&tree).is_err());
        assert!(matches!(
            upretty(&tree),
            Err(PrettyError::EmptyMatrixRow { row: 1, .. })
        ));
    }

    //___________________________________WHOLE-RENDERER PROPERTIES____________________________________

    fn sample_of(kind: NodeKind) -> Expr {
        let (x, y) = symbols!(x, y);
        match kind {
            NodeKind::Atom => var("alpha_1"),
            NodeKind::Addition => x - y * c(3.0),
            NodeKind::Product => c(-2.0) * x * y.pow(c(-3.0)),
            NodeKind::Fraction => (x + c(1.0)) / (y - c(1.0)),
            NodeKind::Power => x.pow(y / c(2.0)),
            NodeKind::Function => Expr::func("f", vec![x / y.clone(), y]),
            NodeKind::Radical => (x / y).sqrt(),
            NodeKind::Derivative => Expr::func("g", vec![x]).derivative(&[("x", 2), ("y", 1)]),
            NodeKind::Limit => (c(1.0) / x).limit("x", c(1.0) / y),
            NodeKind::Integral => (x / y.clone()).integrate(vec![
                Bound::definite("x", c(0.0), c(1.0) / y),
                Bound::indefinite("y"),
            ]),
            NodeKind::Summation => x.pow(var("k")).summation(vec![Bound::definite(
                "k",
                c(0.0),
                Expr::infinity(),
            )]),
            NodeKind::Matrix => Expr::matrix(vec![vec![x, c(1.0) / y], vec![c(0.0), c(1.0)]]),
            NodeKind::Sequence => Expr::set(vec![x / y.clone(), y.pow(c(2.0))]),
            NodeKind::Mapping => Expr::map(vec![
                (x.clone().pow(c(3.0)), y.clone()),
                (y, c(1.0) / x),
            ]),
        }
    }

    #[test]
    fn test_every_node_kind_renders_well_formed() {
        init_test_logger();
        let mut strategies = HashSet::new();
        for kind in NodeKind::iter() {
            let expr = sample_of(kind);
            assert_eq!(expr.kind(), kind);
            for printer in [PrettyPrinter::unicode(), PrettyPrinter::ascii()] {
                let block = printer.render(&expr).unwrap();
                assert_shape(&block);
            }
            strategies.insert(strategy_name(kind));
        }
        assert_eq!(strategies.len(), NodeKind::iter().count());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let printer = PrettyPrinter::unicode();
        for kind in NodeKind::iter() {
            let expr = sample_of(kind);
            assert_eq!(printer.pretty_lines(&expr), printer.pretty_lines(&expr));
        }
    }

    #[test]
    fn test_parallel_rendering() {
        let printer = PrettyPrinter::unicode();
        let exprs: Vec<Expr> = NodeKind::iter().map(sample_of).collect();
        let sequential: Vec<String> = exprs
            .iter()
            .map(|e| printer.pretty_string(e).unwrap())
            .collect();
        let shared = &printer;
        let threaded: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = exprs
                .iter()
                .map(|e| s.spawn(move || shared.pretty_string(e).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(sequential, threaded);
        let batch: Vec<String> = printer
            .render_batch(&exprs)
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(sequential, batch);
    }

    #[test]
    fn test_batch_keeps_errors_in_place() {
        let printer = PrettyPrinter::ascii();
        let exprs = vec![var("x"), Expr::rational(1, 0), var("y")];
        let results = printer.render_batch(&exprs);
        assert_eq!(results[0].as_deref(), Ok("x"));
        assert!(matches!(results[1], Err(PrettyError::ZeroDenominator { numerator: 1, .. })));
        assert_eq!(results[2].as_deref(), Ok("y"));
    }

    fn shout(atom: &Atom) -> String {
        match atom {
            Atom::Symbol(name) => name.to_uppercase(),
            other => LinearAtomFormatter.format_atom(other),
        }
    }

    #[test]
    fn test_custom_atom_formatter() {
        let printer = PrettyPrinter::with_formatter(PrettySettings::ascii(), shout);
        let expr = Expr::func("f", vec![var("x") + c(2.0)]);
        assert_eq!(printer.pretty_string(&expr).unwrap(), "F(X + 2)");
        let batch = printer.render_batch(&[var("y")]);
        assert_eq!(batch[0].as_deref(), Ok("Y"));
    }

    #[test]
    fn test_printer_from_toml_settings() {
        let settings = PrettySettings::from_toml_str("use_unicode = false").unwrap();
        let printer = PrettyPrinter::new(settings);
        assert!(!printer.settings().use_unicode);
        assert_eq!(
            printer.pretty_lines(&var("x").sqrt()).unwrap(),
            vec!["  _", "\\/x"]
        );
    }

    #[test]
    fn test_expr_convenience_methods() {
        let expr = var("x") / var("y");
        assert_eq!(expr.pretty().unwrap(), "x\n─\ny");
        assert_eq!(expr.pretty_ascii().unwrap(), "x\n-\ny");
        expr.pprint();
    }
}
