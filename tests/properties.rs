//! Property-based tests for the arithmetic, the per-line cycle and number output

use proptest::prelude::*;
use rust_dmr_calc::interpreter::{self, Step};
use rust_dmr_calc::operations::{self, Error};
use rust_dmr_calc::printer::pr_number;
use rust_dmr_calc::types::{Number, Operands};

/// Ordinary values mixed with signed zeroes, infinities and NaN.
fn number() -> impl Strategy<Value = Number> {
    prop_oneof![
        4 => any::<Number>(),
        1 => prop::sample::select(vec![
            0.0,
            -0.0,
            Number::INFINITY,
            Number::NEG_INFINITY,
            Number::NAN,
            Number::MAX,
            Number::MIN_POSITIVE,
        ]),
    ]
}

fn same(x: Number, y: Number) -> bool {
    x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan())
}

fn run(name: &str, a: Number, b: Number) -> operations::Result {
    operations::resolve(name)
        .expect("operation should resolve")
        .apply(Operands::new(a, b))
}

#[test]
fn test_arithmetic_matches_native_operators() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(number(), number()), |(a, b)| {
            let native = [("add", a + b), ("sub", a - b), ("mul", a * b)];
            for &(name, expected) in native.iter() {
                match run(name, a, b) {
                    Ok(value) => prop_assert!(same(value, expected), "{} {} {}", name, a, b),
                    Err(e) => prop_assert!(false, "{} {} {} failed: {}", name, a, b, e),
                }
            }

            match run("div", a, b) {
                Ok(value) => {
                    prop_assert!(b != 0.0);
                    prop_assert!(same(value, a / b), "div {} {}", a, b);
                }
                Err(e) => {
                    prop_assert_eq!(e, Error::DivisionByZero);
                    prop_assert!(b == 0.0);
                }
            }

            Ok(())
        })
        .unwrap();
}

#[test]
fn test_division_by_either_zero_is_an_error() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(number(), any::<bool>()), |(a, negative)| {
            let zero = if negative { -0.0 } else { 0.0 };
            prop_assert_eq!(run("div", a, zero), Err(Error::DivisionByZero));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_same_line_gives_same_step() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let command = prop::sample::select(vec!["add", "sub", "mul", "div", "exit", "foo"]);
    let line = (command, number(), number())
        .prop_map(|(command, a, b)| format!("{} {} {}", command, pr_number(a), pr_number(b)));

    runner
        .run(&line, |line| {
            prop_assert_eq!(interpreter::rep(&line), interpreter::rep(&line));
            Ok(())
        })
        .unwrap();

    runner
        .run(&any::<String>(), |line| {
            prop_assert_eq!(interpreter::rep(&line), interpreter::rep(&line));
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_arbitrary_lines_never_end_the_session_unless_exit() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |line| {
            let first = line.split_whitespace().next();
            match interpreter::rep(&line) {
                Step::Exit => prop_assert_eq!(first, Some("exit")),
                Step::Continue(text) => prop_assert!(!text.is_empty()),
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_printed_numbers_read_back() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&number(), |value| {
            let printed = pr_number(value);
            let read: Number = printed.parse().expect("printed number should parse");
            prop_assert!(same(read, value), "{:?} printed as {}", value, printed);
            Ok(())
        })
        .unwrap();
}
