//! Property-based tests for the strcalc language.
//!
//! Programs are generated together with the bytes they must evaluate to, so
//! each property can be checked against an independent model of the language.
//! Every compound operand is parenthesized and repeat counts are single
//! literals, which keeps generated programs clear of the two-token `^`
//! lookahead and keeps results small.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use strcalc::{evaluate_source, interpreter::evaluator::core::Context, parse_source};

/// A program's source text paired with its expected value.
#[derive(Debug, Clone)]
struct Program {
    source:   String,
    expected: Vec<u8>,
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,4}").expect("valid regex")
}

fn program_strategy() -> impl Strategy<Value = Program> {
    let leaf = literal_strategy().prop_map(|s| Program { expected: s.clone().into_bytes(),
                                                         source:   s, });

    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| {
                    let mut expected = a.expected.clone();
                    expected.extend_from_slice(&b.expected);
                    Program { source: format!("({}).({})", a.source, b.source),
                              expected }
                }),
                (inner, 0usize..4).prop_map(|(a, n)| {
                    Program { source:   format!("({})^{n}", a.source),
                              expected: a.expected.repeat(n), }
                }),
            ]
        })
}

fn eval(source: &str) -> Vec<u8> {
    evaluate_source(source.as_bytes(), &Context::new()).unwrap()
                                                      .into_bytes()
}

/// Surrounds every operator and parenthesis with `pad`.
fn pad_operators(source: &str, pad: &str) -> String {
    source.chars()
          .map(|c| {
              if matches!(c, '(' | ')' | '.' | '^') {
                  format!("{pad}{c}{pad}")
              } else {
                  c.to_string()
              }
          })
          .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// A lone literal evaluates to itself.
    #[test]
    fn prop_literal_identity(s in literal_strategy()) {
        prop_assert_eq!(eval(&s), s.into_bytes());
    }

    /// Generated programs evaluate to the value of the model.
    #[test]
    fn prop_matches_model(p in program_strategy()) {
        prop_assert_eq!(eval(&p.source), p.expected);
    }

    /// `a.b` is the concatenation of the values of `a` and `b`.
    #[test]
    fn prop_concat_concatenates(a in program_strategy(), b in program_strategy()) {
        let joined = eval(&format!("({}).({})", a.source, b.source));
        let mut expected = eval(&a.source);
        expected.extend(eval(&b.source));
        prop_assert_eq!(joined, expected);
    }

    /// Concatenation is associative in its output.
    #[test]
    fn prop_concat_associative(a in program_strategy(),
                               b in program_strategy(),
                               c in program_strategy()) {
        let left = eval(&format!("(({}).({})).({})", a.source, b.source, c.source));
        let right = eval(&format!("({}).(({}).({}))", a.source, b.source, c.source));
        prop_assert_eq!(left, right);
    }

    /// `a^n` is `n` copies of the value of `a`; `a^0` is empty.
    #[test]
    fn prop_repeat_copies(a in program_strategy(), n in 0usize..6) {
        let repeated = eval(&format!("({})^{n}", a.source));
        prop_assert_eq!(repeated, eval(&a.source).repeat(n));
        let zero = eval(&format!("({})^0", a.source));
        prop_assert!(zero.is_empty());
    }

    /// Wrapping a program in parentheses changes neither its tree nor its value.
    #[test]
    fn prop_parentheses_transparent(p in program_strategy()) {
        let wrapped = format!("({})", p.source);
        prop_assert_eq!(parse_source(wrapped.as_bytes()).unwrap(),
                        parse_source(p.source.as_bytes()).unwrap());
        prop_assert_eq!(eval(&wrapped), p.expected);
    }

    /// Whitespace between tokens changes nothing.
    #[test]
    fn prop_whitespace_insensitive(p in program_strategy(),
                                   pad in prop::string::string_regex("[ \t\r\n\x08\x0B]{0,3}").expect("valid regex")) {
        let padded = pad_operators(&p.source, &pad);
        prop_assert_eq!(parse_source(padded.as_bytes()).unwrap(),
                        parse_source(p.source.as_bytes()).unwrap());
        prop_assert_eq!(eval(&padded), p.expected);
    }

    /// Unrecognized characters between tokens are dropped without changing the tree.
    #[test]
    fn prop_unrecognized_skipped(p in program_strategy(),
                                 junk in prop::string::string_regex("[#@!a-z]{0,2}").expect("valid regex")) {
        let noisy = pad_operators(&p.source, &junk);
        prop_assert_eq!(parse_source(noisy.as_bytes()).unwrap(),
                        parse_source(p.source.as_bytes()).unwrap());
    }
}

#[test]
fn unclosed_group_is_rejected() {
    assert!(parse_source(b"(1.2").is_err());
    assert!(parse_source(b"^3").is_err());
}
