use crate::error::EvalError;

/// Converts a token to an integer.
///
/// Surrounding whitespace is trimmed; anything that does not parse as an
/// `i64` (including empty tokens and out-of-range digits) becomes `0`.
pub fn coerce(token: &str) -> i64 {
    token.trim().parse().unwrap_or(0)
}

/// Coerces every token, preserving count and order.
pub fn coerce_all(tokens: &[&str]) -> Vec<i64> {
    tokens.iter().map(|t| coerce(t)).collect()
}

/// Rejects negative values when `deny_negatives` is set.
///
/// Runs over the full list before any upper-bound filtering, and reports
/// every negative in its original order.
pub fn validate(numbers: &[i64], deny_negatives: bool) -> Result<(), EvalError> {
    if !deny_negatives {
        return Ok(());
    }
    let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
    if negatives.is_empty() {
        Ok(())
    } else {
        Err(EvalError::NegativeValues(negatives))
    }
}
