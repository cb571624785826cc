use std::fs;

use exprtree::{
    BuildError, Error, EvalError, Session, balanced, build, evaluate, strip_whitespace,
    traverse_inorder, traverse_postorder, traverse_preorder, validate,
};
use rstest::rstest;
use walkdir::WalkDir;

/// Expected outcome of a fixture line.
#[derive(Debug)]
enum Expected {
    Value(f64),
    Failure(String),
}

#[test]
fn fixture_cases_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in parse_cases(&content) {
            count += 1;
            let outcome = Session::new().submit(&expression).map(|report| report.outcome);

            match (&expected, outcome) {
                (Expected::Value(v), Ok(Ok(actual))) => {
                    assert!((v - actual).abs() < 1e-9,
                            "{path:?}: {expression} gave {actual}, expected {v}");
                },
                (Expected::Failure(kind), Ok(Err(e))) => {
                    assert_eq!(&format!("{e:?}"), kind, "{path:?}: {expression}");
                },
                (Expected::Failure(kind), Err(Error::Build(e))) => {
                    assert!(format!("{e:?}").starts_with(kind.as_str()),
                            "{path:?}: {expression} failed with {e:?}, expected {kind}");
                },
                (expected, outcome) => {
                    panic!("{path:?}: {expression} gave {outcome:?}, expected {expected:?}")
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_cases(content: &str) -> Vec<(String, Expected)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (expression, expected) =
                   line.split_once("=>").unwrap_or_else(|| panic!("Malformed case line: {line}"));
               let expected = expected.trim();
               let expected = match expected.strip_prefix('!') {
                   Some(kind) => Expected::Failure(kind.to_string()),
                   None => Expected::Value(expected.parse()
                                                   .unwrap_or_else(|_| {
                                                       panic!("Bad expected value: {expected}")
                                                   })),
               };
               (expression.trim().to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: f64) {
    let tree = build(src).unwrap_or_else(|e| panic!("{src} failed to build: {e}"));
    assert_eq!(evaluate(&tree), Ok(expected), "{src}");
}

fn assert_malformed(src: &str) {
    match build(src) {
        Err(BuildError::MalformedExpression { .. }) => {},
        other => panic!("{src} should be malformed, got {other:?}"),
    }
}

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[rstest]
#[case("2+3*4", 14.0)]
#[case("2-3+4", 3.0)]
#[case("8/4*2", 4.0)]
#[case("1+2*3*4-5/5", 24.0)]
#[case("9-2*3+8/4", 5.0)]
fn precedence_matches_conventional_arithmetic(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    let grouped = evaluate(&build("(2+3)*4").unwrap()).unwrap();
    let plain = evaluate(&build("2+3*4").unwrap()).unwrap();
    assert_ne!(grouped, plain);
}

#[rstest]
#[case("(1+2)", true)]
#[case("(1+2", false)]
#[case("1+2)", false)]
#[case(")(", false)]
#[case("((1)+(2))", true)]
fn balance_detection(#[case] src: &str, #[case] expected: bool) {
    assert_eq!(balanced(src), expected);
}

#[test]
fn division_by_zero_builds_but_fails_to_evaluate() {
    let tree = build("5/0").unwrap();
    assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));
}

#[test]
fn exponentiation_is_left_associative() {
    assert_value("2^3^2", 64.0);
}

#[test]
fn traversals_of_precedence_example() {
    let tree = build("2+3*4").unwrap();
    assert_eq!(tokens(&traverse_preorder(&tree)), ["+", "2.0", "*", "3.0", "4.0"]);
    assert_eq!(tokens(&traverse_inorder(&tree)), ["2.0", "+", "3.0", "*", "4.0"]);
    assert_eq!(tokens(&traverse_postorder(&tree)), ["2.0", "3.0", "4.0", "*", "+"]);
}

#[rstest]
#[case("+5")]
#[case("5+")]
#[case("-5")]
#[case("3*-2")]
#[case("(+)")]
fn malformed_input(#[case] src: &str) {
    assert_malformed(src);
}

#[test]
fn building_twice_gives_equal_independent_trees() {
    let first = build("(1.5+2)^2/3").unwrap();
    let second = build("(1.5+2)^2/3").unwrap();

    assert_eq!(first, second);
    assert!(!std::ptr::eq(first.root().unwrap(), second.root().unwrap()));
    drop(first);
    assert_eq!(evaluate(&second).unwrap(), 3.5_f64.powi(2) / 3.0);
}

#[test]
fn validation_gates() {
    assert!(validate("(1 + 2.5) * 3 ^ 2 / 4 - 1"));
    assert!(!validate("1 + a"));
    assert!(!validate(""));
    assert_eq!(strip_whitespace(" 1 +  2 "), "1+2");
}

#[test]
fn tree_walk_matches_structure() {
    let tree = build("(4-1)/3").unwrap();
    let root = tree.root().unwrap();

    assert_eq!(root.label(), "/");
    let left = root.left().unwrap();
    assert_eq!(left.label(), "-");
    assert!(left.left().unwrap().is_leaf());
    assert_eq!(root.right().unwrap().label(), "3.0");
    assert_eq!(tree.depth(), 3);
}

#[test]
fn long_left_folded_chain() {
    const LINKS: usize = 300_000;
    let expression = format!("1{}", "+1".repeat(LINKS));

    let tree = build(&expression).unwrap();
    assert_eq!(tree.depth(), LINKS + 1);
    assert_eq!(evaluate(&tree).unwrap(), 300_001.0);
    assert_eq!(tokens(&traverse_postorder(&tree)).len(), 2 * LINKS + 1);

    let copy = tree.clone();
    assert_eq!(copy, tree);
    drop(tree);
    drop(copy);

    let mut session = Session::new();
    let report = session.submit(&expression).unwrap();
    assert_eq!(report.outcome, Ok(300_001.0));
    assert!(report.preorder.starts_with("+  +  +"));
    assert!(matches!(session.render(), Err(Error::TooDeepToDraw { .. })));

    // The session stays usable after the deep tree is replaced.
    let report = session.submit("2^10").unwrap();
    assert_eq!(report.outcome, Ok(1024.0));
}
