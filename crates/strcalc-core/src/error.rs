use crate::config::Operation;
use thiserror::Error;

/// Failures raised while evaluating an input string.
///
/// Malformed tokens and unterminated headers are not errors; they degrade to
/// zero-valued tokens instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// One or more negative values were parsed while negatives are denied.
    /// Holds every offending value in input order.
    #[error("Negatives not allowed: {}", join_values(.0))]
    NegativeValues(Vec<i64>),
    /// A zero divisor was reached during a quotient fold.
    #[error("Attempted to divide by zero (dividend {dividend})")]
    DivisionByZero { dividend: i64 },
    /// A fold step left the `i64` range.
    #[error("Arithmetic operation resulted in an overflow ({} fold)", .operation.name())]
    Overflow { operation: Operation },
}

/// Failures raised while building a [`Configuration`](crate::Configuration).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown operation `{0}`, expected one of + * - / or sum, product, difference, quotient")]
    UnknownOperation(String),
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
