//! # strcalc core
//!
//! Evaluates a delimited string of integers down to a single value.
//!
//! ## Overview
//!
//! An input such as `"//[***]\n11***22***33"` goes through four stages, each
//! consuming the full output of the previous one:
//!
//! - **Header extraction**: an optional `//...\n` prefix declares extra delimiters
//! - **Tokenization**: the payload is split on every active delimiter
//! - **Coercion and validation**: tokens become integers, negatives are rejected
//! - **Reduction**: values above the upper bound are dropped, the rest are folded
//!
//! ## Architecture
//!
//! ```text
//!   raw input
//!       │
//!       ▼
//! ┌──────────────┐  (delimiters, payload)  ┌───────────┐
//! │ header       │ ──────────────────────► │ tokenizer │
//! └──────────────┘                         └───────────┘
//!                                                │ Vec<&str>
//!                                                ▼
//! ┌──────────────┐        Vec<i64>         ┌───────────┐
//! │ reduce       │ ◄────────────────────── │ coerce    │
//! └──────────────┘                         └───────────┘
//!       │
//!       ▼
//!   Evaluation
//! ```
//!
//! The entry point is [`Evaluator`](evaluator::Evaluator). It holds no state of
//! its own; every call receives a [`Configuration`](config::Configuration)
//! snapshot that stays fixed for the whole pipeline.
//!
//! ## Examples
//!
//! ### Sum with a custom delimiter
//!
//! ```
//! use strcalc_core::{Configuration, Evaluator};
//!
//! let config = Configuration::default();
//! let total = Evaluator::new().evaluate("//[***]\n11***22***33", &config)?;
//! assert_eq!(total, 66);
//! # Ok::<(), strcalc_core::EvalError>(())
//! ```
//!
//! ### Traced quotient
//!
//! ```
//! use strcalc_core::{Configuration, Evaluator, Operation};
//!
//! let config = Configuration::default()
//!     .with_delimiters([","])
//!     .with_operation(Operation::Quotient);
//! let evaluation = Evaluator::new().evaluate_traced("20,2,2", &config)?;
//! assert_eq!(evaluation.to_string(), "20 / 2 / 2 = 5");
//! # Ok::<(), strcalc_core::EvalError>(())
//! ```
//!
//! ### Hot-reloadable settings
//!
//! ```
//! use strcalc_core::{ConfigHandle, Configuration, Evaluator};
//!
//! let handle = ConfigHandle::new(Configuration::default());
//! let evaluator = Evaluator::new();
//! assert_eq!(evaluator.evaluate_with("2,1001", &handle)?, 2);
//!
//! handle.publish(Configuration::default().with_upper_bound(5000));
//! assert_eq!(evaluator.evaluate_with("2,1001", &handle)?, 1003);
//! # Ok::<(), strcalc_core::EvalError>(())
//! ```

/// Settings model and snapshot publishing.
pub mod config;
/// Token to integer coercion and negative-value validation.
pub mod coerce;
/// Error taxonomy.
pub mod error;
/// Pipeline entry point.
pub mod evaluator;
/// Custom delimiter header parsing.
pub mod header;
/// Upper-bound filtering and folding.
pub mod reduce;
/// Literal multi-delimiter splitting.
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use config::{ConfigHandle, Configuration, Operation};
pub use error::{ConfigError, EvalError};
pub use evaluator::Evaluator;
pub use reduce::Evaluation;
