use crate::config::Operation;
use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The folded result.
    pub value: i64,
    /// Values that survived the upper-bound filter, in input order.
    pub operands: Vec<i64>,
    pub operation: Operation,
}

impl Evaluation {
    /// Renders the operands joined by the operation symbol, or `"0"` when
    /// nothing was reduced.
    pub fn trace(&self) -> String {
        if self.operands.is_empty() {
            return "0".to_string();
        }
        let separator = format!(" {} ", self.operation.symbol());
        self.operands
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.trace(), self.value)
    }
}

/// Drops values above `upper_bound` and folds the rest with `operation`.
///
/// The fold is seeded with the first kept value. An empty filtered list yields
/// `0` for every operation. A zero divisor aborts a quotient fold at the step
/// where it is met. A step that leaves the `i64` range fails with
/// [`EvalError::Overflow`].
pub fn reduce(
    numbers: &[i64],
    upper_bound: i64,
    operation: Operation,
) -> Result<Evaluation, EvalError> {
    let operands: Vec<i64> = numbers
        .iter()
        .copied()
        .filter(|n| *n <= upper_bound)
        .collect();

    let value = match operands.split_first() {
        None => 0,
        Some((&first, rest)) => rest
            .iter()
            .try_fold(first, |acc, &n| apply(operation, acc, n))?,
    };

    Ok(Evaluation {
        value,
        operands,
        operation,
    })
}

fn apply(operation: Operation, acc: i64, n: i64) -> Result<i64, EvalError> {
    let result = match operation {
        Operation::Sum => acc.checked_add(n),
        Operation::Product => acc.checked_mul(n),
        Operation::Difference => acc.checked_sub(n),
        Operation::Quotient => {
            if n == 0 {
                return Err(EvalError::DivisionByZero { dividend: acc });
            }
            acc.checked_div(n)
        }
    };
    result.ok_or(EvalError::Overflow { operation })
}
