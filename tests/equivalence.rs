//! End-to-end tests for equivalence checking.

use expr_equiv::{check_equivalence, Checker, CheckerConfig, Error};

// ─── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn single_variable() {
    assert_eq!(check_equivalence("a == 1", "a == 1"), Ok(true));
}

#[test]
fn two_variables_reordered() {
    assert_eq!(check_equivalence("a == 1 && b == 1", "b == 1 && a == 1"), Ok(true));
}

#[test]
fn three_variables_regrouped() {
    assert_eq!(
        check_equivalence("(a == 1 || b == 1) && c == 0", "c == 0 && (b == 1 || a == 1)"),
        Ok(true)
    );
}

#[test]
fn same_variables_different_meaning() {
    assert_eq!(
        check_equivalence(
            "(a == 1 || b == 1) && (c == 0 || a == 1)",
            "(a == 0 || c == 0) && (b == 1 || a == 1)"
        ),
        Ok(false)
    );
}

#[test]
fn different_variable_count() {
    assert_eq!(
        check_equivalence("a == 1", "a == 1 || b == 0"),
        Err(Error::ParameterCountMismatch {
            params1: vec!["a".to_string()],
            params2: vec!["a".to_string(), "b".to_string()],
        })
    );
}

#[test]
fn malformed_comparator() {
    assert!(matches!(check_equivalence("a === 1", "a == 1"), Err(Error::Format { .. })));
    assert!(matches!(check_equivalence("a == 1", "a === 1"), Err(Error::Format { .. })));
}

// ─── More rule shapes ──────────────────────────────────────────────────────────

#[test]
fn precedence_without_brackets() {
    let cases = [
        ("a == 1 && b == 1 && c == 0", "b == 1 && a == 1 && c == 0", true),
        ("a == 1 || b == 1 || c == 0", "b == 1 || a == 1 || c == 0", true),
        ("a == 1 || b == 1 && c == 0", "c == 0 &&  b == 1 || a == 1", true),
        ("a == 1 || (b == 1 && c == 0)", "(c == 0 &&  b == 1) || a == 1", true),
        ("a == 1 || b == 1 && c == 0", "(a == 1 || b == 1) && c == 0", false),
    ];
    for (expr1, expr2, expected) in cases {
        assert_eq!(check_equivalence(expr1, expr2), Ok(expected), "{} vs {}", expr1, expr2);
    }
}

#[test]
fn distributivity() {
    assert_eq!(
        check_equivalence(
            "(a == 1 || b == 1 ) && (c == 0 || a == 1)",
            "(a == 1 || c == 0 ) && (b == 1 || a == 1)"
        ),
        Ok(true)
    );
    assert_eq!(
        check_equivalence("a == 1 && (b == 1 || c == 1)", "(a == 1 && b == 1) || (a == 1 && c == 1)"),
        Ok(true)
    );
}

#[test]
fn nested_brackets() {
    assert_eq!(
        check_equivalence(
            "((foo == 1 && (bar == 1 || baz == 0)) || boo == 0)",
            "((baz == 0 || bar == 1) && foo == 1) || boo == 0"
        ),
        Ok(true)
    );
}

#[test]
fn comparators_against_binary_literals() {
    // Over {0, 1}: `!= 0` is `== 1`, `>= 1` is `== 1`, `<= 0` is `== 0`.
    assert_eq!(check_equivalence("a != 0", "a == 1"), Ok(true));
    assert_eq!(check_equivalence("a >= 1 && b <= 0", "b == 0 && a == 1"), Ok(true));
    assert_eq!(check_equivalence("a >= 0", "a <= 1"), Ok(true));
    assert_eq!(check_equivalence("a != 1", "a == 1"), Ok(false));
}

#[test]
fn repeated_variable_counts_once() {
    let cmp = Checker::default()
        .compare("a == 1 || (a == 0 && b == 1)", "b == 1 || a == 1")
        .unwrap();
    assert!(cmp.equivalent);
    assert_eq!(cmp.variables, vec!["a", "b"]);
    assert_eq!(cmp.evaluated, 4);
}

#[test]
fn different_variable_identity() {
    assert!(matches!(
        check_equivalence("a == 1 && b == 1", "a == 1 && c == 1"),
        Err(Error::ParameterSetMismatch { .. })
    ));
}

#[test]
fn unsupported_operators() {
    assert!(matches!(
        check_equivalence("boo > 1 || foo == 0", "foo > 1 || boo == 0"),
        Err(Error::Format { .. })
    ));
    assert!(matches!(
        check_equivalence("a == 0 &&& b == 1", "b == 1 && a == 0"),
        Err(Error::Combinator { .. })
    ));
    assert!(matches!(
        check_equivalence("a == 1 ^ b == 1", "b == 1 ^ a == 1"),
        Err(Error::InvalidCharacter { character: '^', .. })
    ));
}

#[test]
fn bare_variables_rejected() {
    for (x, y) in [
        ("a == 1 || b", "a == 1 || b == 1"),
        ("a && b == 1", "b == 1 && a == 1"),
        ("a == 1 || a == 0 || b", "a == 1 || a == 0 || b == 1"),
    ] {
        assert!(matches!(check_equivalence(x, y), Err(Error::Format { .. })), "{} vs {}", x, y);
        assert!(matches!(check_equivalence(y, x), Err(Error::Format { .. })), "{} vs {}", y, x);
    }
}

#[test]
fn pathological_nesting() {
    let deep = format!("{}a == 1{}", "(".repeat(2000), ")".repeat(2000));
    assert!(matches!(check_equivalence(&deep, &deep), Err(Error::Compile(_))));

    let wide = vec!["a == 1 || b == 0"; 2000].join(" || ");
    assert_eq!(check_equivalence(&wide, "b == 0 || a == 1"), Ok(true));
}

// ─── Properties ────────────────────────────────────────────────────────────────

const RULES: [&str; 6] = [
    "a == 1",
    "a == 1 && b == 0",
    "a == 1 || b == 0 && c == 1",
    "(a == 1 || b == 0) && c == 1",
    "(a != 0 && (b >= 1 || c <= 0)) || d == 1",
    "x.y == 1 || z-w == 0",
];

#[test]
fn reflexivity() {
    for rule in RULES {
        assert_eq!(check_equivalence(rule, rule), Ok(true), "{}", rule);
    }
}

#[test]
fn symmetry() {
    let pairs = [
        ("a == 1 && b == 1", "b == 1 && a == 1"),
        ("a == 1 && b == 1", "a == 1 || b == 1"),
        ("a == 1 || b == 0 && c == 1", "(a == 1 || b == 0) && c == 1"),
        ("(a == 1 || b == 1) && c == 0", "c == 0 && (b == 1 || a == 1)"),
    ];
    for (x, y) in pairs {
        assert_eq!(check_equivalence(x, y), check_equivalence(y, x), "{} vs {}", x, y);
    }
}

#[test]
fn mismatch_is_always_an_error() {
    for (x, y) in [("a == 1", "b == 1"), ("a == 1", "a == 1 && b == 1"), ("a == 1 && b == 1", "c == 1")] {
        let result = check_equivalence(x, y);
        assert!(
            matches!(
                result,
                Err(Error::ParameterCountMismatch { .. }) | Err(Error::ParameterSetMismatch { .. })
            ),
            "{} vs {}: {:?}",
            x,
            y,
            result
        );
    }
}

#[test]
fn exhaustive_enumeration() {
    let names = ["a", "b", "c", "d", "e"];
    let conj = names.map(|n| format!("{} == 1", n)).join(" && ");
    let reversed = names.iter().rev().map(|n| format!("{} == 1", n)).collect::<Vec<_>>().join(" && ");

    let cmp = Checker::default().compare(&conj, &reversed).unwrap();
    assert!(cmp.equivalent);
    assert_eq!(cmp.evaluated, 32);

    // Differs from the conjunction on exactly one assignment: all zeros.
    let almost = format!("{} || (a == 0 && b == 0 && c == 0 && d == 0 && e == 0)", conj);
    let cmp = Checker::default().compare(&conj, &almost).unwrap();
    assert!(!cmp.equivalent);
    assert_eq!(cmp.evaluated, 32);
    assert_eq!(cmp.agreeing, 31);
    assert_eq!(
        cmp.counterexample.unwrap().to_string(),
        "{a = 0, b = 0, c = 0, d = 0, e = 0}"
    );
}

#[test]
fn variable_limit() {
    let checker = Checker::new(CheckerConfig {
        max_variables: Some(3),
        ..CheckerConfig::default()
    });
    assert!(matches!(
        checker.check(RULES[4], RULES[4]),
        Err(Error::TooManyVariables { count: 4, limit: 3 })
    ));
    assert_eq!(checker.check(RULES[3], RULES[2]), Ok(false));
}
