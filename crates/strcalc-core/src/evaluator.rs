use crate::coerce::{coerce_all, validate};
use crate::config::{ConfigHandle, Configuration};
use crate::error::EvalError;
use crate::header;
use crate::reduce::{reduce, Evaluation};
use crate::tokenizer::tokenize;

/// Runs the header → tokenize → coerce/validate → reduce pipeline.
///
/// `Evaluator` carries no state, so a single instance can be shared freely
/// between threads. Each call works against the one [`Configuration`] it is
/// handed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `input` and returns only the folded value.
    pub fn evaluate(&self, input: &str, config: &Configuration) -> Result<i64, EvalError> {
        self.evaluate_traced(input, config).map(|eval| eval.value)
    }

    /// Evaluates `input` and returns the value with the operands that
    /// produced it.
    ///
    /// Blank input (empty or whitespace only) short-circuits to `0` before any
    /// stage runs.
    pub fn evaluate_traced(
        &self,
        input: &str,
        config: &Configuration,
    ) -> Result<Evaluation, EvalError> {
        if input.trim().is_empty() {
            return Ok(Evaluation {
                value: 0,
                operands: Vec::new(),
                operation: config.operation,
            });
        }

        let (delimiters, payload) = header::extract(input, &config.delimiters);
        let tokens = tokenize(payload, &delimiters);
        log::debug!("Split payload into {} token(s)", tokens.len());

        let numbers = coerce_all(&tokens);
        validate(&numbers, config.deny_negatives)?;

        let evaluation = reduce(&numbers, config.upper_bound, config.operation)?;
        log::debug!("Evaluated {}", evaluation);
        Ok(evaluation)
    }

    /// Evaluates against the snapshot currently published on `handle`.
    ///
    /// The snapshot is read once; a concurrent publish does not affect this
    /// call.
    pub fn evaluate_with(&self, input: &str, handle: &ConfigHandle) -> Result<i64, EvalError> {
        let snapshot = handle.snapshot();
        self.evaluate(input, &snapshot)
    }

    /// Traced variant of [`Evaluator::evaluate_with`].
    pub fn evaluate_traced_with(
        &self,
        input: &str,
        handle: &ConfigHandle,
    ) -> Result<Evaluation, EvalError> {
        let snapshot = handle.snapshot();
        self.evaluate_traced(input, &snapshot)
    }
}
