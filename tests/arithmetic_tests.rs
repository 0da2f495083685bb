use proptest::prelude::*;
use regcalc::interpreter::arithmetic::{calculate, ArithmeticError, Operator};
use regcalc::interpreter::engine::{Interpreter, InterpreterConfig};
use regcalc::terminal::MockTerminal;

fn operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
    ]
}

proptest! {
    // Small operands and short queues keep every fold inside i64
    #[test]
    fn drain_matches_left_fold(steps in prop::collection::vec((operator(), -100i64..100), 0..6)) {
        let mut interpreter =
            Interpreter::with_output(InterpreterConfig::default(), MockTerminal::new());
        for (op, n) in &steps {
            interpreter.execute_line(&format!("acc {} {}", op, n));
        }
        interpreter.execute_line("print acc");

        let expected = steps
            .iter()
            .try_fold(0i64, |acc, (op, n)| calculate(acc, op.name(), *n))
            .expect("small operands cannot overflow");

        if steps.is_empty() {
            // A register that was never defined cannot be printed
            prop_assert!(interpreter.terminal().get_output().is_empty());
        } else {
            prop_assert_eq!(interpreter.terminal().get_output(), vec![expected.to_string()]);
            prop_assert!(interpreter.terminal().get_diagnostics().is_empty());
        }
    }

    #[test]
    fn unknown_operator_passes_left_through(left in any::<i64>(), right in any::<i64>()) {
        prop_assert_eq!(
            calculate(left, "divide", right),
            Err(ArithmeticError::InvalidOperator("divide".to_string()))
        );
    }
}

#[test]
fn test_divide_is_reported_and_ignored() {
    let mut interpreter =
        Interpreter::with_output(InterpreterConfig::default(), MockTerminal::new());
    interpreter.run(["n add 10", "n divide 3", "print n"]);

    assert_eq!(interpreter.terminal().get_output(), vec!["10"]);
    let diagnostics = interpreter.terminal().get_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].contains("divide"));
}

#[test]
fn test_subtract_order() {
    assert_eq!(calculate(3, "subtract", 10), Ok(-7));

    let mut interpreter =
        Interpreter::with_output(InterpreterConfig::default(), MockTerminal::new());
    interpreter.run(["x add 3", "y add 10", "x subtract y", "print x"]);
    assert_eq!(interpreter.terminal().get_output(), vec!["-7"]);
}
