use crate::{ConfigHandle, Configuration, EvalError, Evaluator, Operation};
use expect_test::expect;

fn eval(input: &str) -> Result<i64, EvalError> {
    Evaluator::new().evaluate(input, &Configuration::default())
}

#[test]
fn test_blank_input_is_zero() {
    for input in ["", " ", "  \t ", "\n"] {
        assert_eq!(eval(input), Ok(0), "input {input:?}");
    }
}

#[test]
fn test_single_number() {
    assert_eq!(eval("20"), Ok(20));
}

#[test]
fn test_two_numbers() {
    assert_eq!(eval("1,500"), Ok(501));
}

#[test]
fn test_many_numbers() {
    assert_eq!(eval("1,2,3,4,5,6,7,8,9,10,11,12"), Ok(78));
}

#[test]
fn test_newline_delimiter() {
    assert_eq!(eval("1\n2,3"), Ok(6));
}

#[test]
fn test_invalid_number_is_zero() {
    assert_eq!(eval("5,tytyt"), Ok(5));
}

#[test]
fn test_custom_single_char_delimiter() {
    assert_eq!(eval("//#\n2#5"), Ok(7));
}

#[test]
fn test_custom_comma_delimiter_with_invalid_values() {
    assert_eq!(eval("//,\n2,ff,100"), Ok(102));
}

#[test]
fn test_custom_multi_char_delimiter() {
    assert_eq!(eval("//[***]\n11***22***33"), Ok(66));
}

#[test]
fn test_multiple_bracketed_delimiters() {
    assert_eq!(eval("//[*][!!][r9r]\n11r9r22*hh*33!!44"), Ok(110));
}

#[test]
fn test_unterminated_header_degrades_to_zero_token() {
    // The whole input is payload: "//;1" coerces to 0, then 2.
    assert_eq!(eval("//;1,2"), Ok(2));
}

#[test]
fn test_upper_bound_filter() {
    assert_eq!(eval("2,1001,6"), Ok(8));
    assert_eq!(eval("2,1000,6"), Ok(1008));
}

#[test]
fn test_negative_rejected() {
    let err = eval("4,-3").unwrap_err();
    expect![["Negatives not allowed: -3"]].assert_eq(&err.to_string());
}

#[test]
fn test_all_negatives_reported_in_order() {
    let err = eval("1,-2,3,-4").unwrap_err();
    expect![["Negatives not allowed: -2, -4"]].assert_eq(&err.to_string());
}

#[test]
fn test_negative_above_bound_still_rejected() {
    // -5 is above the bound and would be filtered, but validation sees it first.
    let config = Configuration::default().with_upper_bound(-10);
    let err = Evaluator::new().evaluate("1,-5", &config).unwrap_err();
    assert_eq!(err, EvalError::NegativeValues(vec![-5]));
}

#[test]
fn test_negatives_allowed_when_configured() {
    let config = Configuration::default().with_deny_negatives(false);
    assert_eq!(Evaluator::new().evaluate("4,-3", &config), Ok(1));
}

#[test]
fn test_difference_and_quotient() {
    let evaluator = Evaluator::new();
    let difference = Configuration::default()
        .with_delimiters([","])
        .with_operation(Operation::Difference);
    assert_eq!(evaluator.evaluate("10,2,3", &difference), Ok(5));

    let quotient = Configuration::default()
        .with_delimiters([","])
        .with_operation(Operation::Quotient);
    assert_eq!(evaluator.evaluate("20,2,2", &quotient), Ok(5));
}

#[test]
fn test_division_by_zero() {
    let config = Configuration::default().with_operation(Operation::Quotient);
    let err = Evaluator::new().evaluate("10,0", &config).unwrap_err();
    assert!(matches!(err, EvalError::DivisionByZero { dividend: 10 }));
}

#[test]
fn test_product_of_empty_is_zero() {
    let config = Configuration::default().with_operation(Operation::Product);
    assert_eq!(Evaluator::new().evaluate("5000,2000", &config), Ok(0));
}

#[test]
fn test_product_overflow_at_default_bound() {
    let config = Configuration::default().with_operation(Operation::Product);
    let err = Evaluator::new()
        .evaluate_traced("1000,1000,1000,1000,1000,1000,1000", &config)
        .unwrap_err();
    assert_eq!(err, EvalError::Overflow { operation: Operation::Product });
    expect![["Arithmetic operation resulted in an overflow (product fold)"]]
        .assert_eq(&err.to_string());
}

#[test]
fn test_trace_rendering() {
    let config = Configuration::default().with_operation(Operation::Product);
    let evaluation = Evaluator::new()
        .evaluate_traced("2,5000,3\n4", &config)
        .unwrap();
    expect![["2 * 3 * 4 = 24"]].assert_eq(&evaluation.to_string());

    let empty = Evaluator::new().evaluate_traced("", &config).unwrap();
    expect![["0 = 0"]].assert_eq(&empty.to_string());
}

#[test]
fn test_idempotent() {
    let evaluator = Evaluator::new();
    let config = Configuration::default();
    let input = "//[;;]\n1;;2,3";
    assert_eq!(
        evaluator.evaluate(input, &config),
        evaluator.evaluate(input, &config)
    );
}

#[test]
fn test_header_delimiters_do_not_leak_between_calls() {
    let evaluator = Evaluator::new();
    let config = Configuration::default();
    assert_eq!(evaluator.evaluate("//;\n1;2", &config), Ok(3));
    // Without a header `;` is not a delimiter, so "1;2" is malformed.
    assert_eq!(evaluator.evaluate("1;2", &config), Ok(0));
    assert_eq!(config.delimiters, vec![",", "\n"]);
}

#[test]
fn test_operation_parsing() {
    assert_eq!("+".parse::<Operation>(), Ok(Operation::Sum));
    assert_eq!("*".parse::<Operation>(), Ok(Operation::Product));
    assert_eq!("-".parse::<Operation>(), Ok(Operation::Difference));
    assert_eq!("Quotient".parse::<Operation>(), Ok(Operation::Quotient));
    assert!("%".parse::<Operation>().is_err());
    assert!("modulo".parse::<Operation>().is_err());
}

#[test]
fn test_configuration_deserialize_defaults() {
    let config: Configuration = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Configuration::default());

    let config: Configuration =
        serde_json::from_str(r#"{"operation":"/","upperBound":50,"delimiters":[";"]}"#).unwrap();
    assert_eq!(config.operation, Operation::Quotient);
    assert_eq!(config.upper_bound, 50);
    assert_eq!(config.delimiters, vec![";"]);
    assert!(config.deny_negatives);
}

#[test]
fn test_configuration_rejects_unknown_operation() {
    let result = serde_json::from_str::<Configuration>(r#"{"operation":"%"}"#);
    assert!(result.is_err());
}

#[test]
fn test_sanitized_drops_empty_delimiters() {
    let config = Configuration::default()
        .with_delimiters(["", ";", ""])
        .sanitized();
    assert_eq!(config.delimiters, vec![";"]);
}

#[test]
fn test_handle_snapshot_is_stable_across_publish() {
    let handle = ConfigHandle::new(Configuration::default());
    let before = handle.snapshot();
    handle.publish(Configuration::default().with_operation(Operation::Product));

    assert_eq!(before.operation, Operation::Sum);
    assert_eq!(handle.snapshot().operation, Operation::Product);
    assert_eq!(Evaluator::new().evaluate_with("2,3", &handle), Ok(6));
}

#[test]
fn test_evaluator_shared_across_threads() {
    let evaluator = Evaluator::new();
    let config = std::sync::Arc::new(Configuration::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let config = config.clone();
            std::thread::spawn(move || evaluator.evaluate(&format!("{i},1"), &config))
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), Ok(i as i64 + 1));
    }
}
