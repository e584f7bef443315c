use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

/// Delimiters active when the settings leave them unset.
pub const DEFAULT_DELIMITERS: [&str; 2] = [",", "\n"];
/// Values strictly above this are excluded from the reduction by default.
pub const DEFAULT_UPPER_BOUND: i64 = 1000;

/// The binary operation used to fold the filtered values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operation {
    #[default]
    Sum,
    Product,
    Difference,
    Quotient,
}

impl Operation {
    /// The character used to render this operation in traces.
    pub fn symbol(self) -> char {
        match self {
            Operation::Sum => '+',
            Operation::Product => '*',
            Operation::Difference => '-',
            Operation::Quotient => '/',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Product => "product",
            Operation::Difference => "difference",
            Operation::Quotient => "quotient",
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = ConfigError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operation::Sum),
            '*' => Ok(Operation::Product),
            '-' => Ok(Operation::Difference),
            '/' => Ok(Operation::Quotient),
            other => Err(ConfigError::UnknownOperation(other.to_string())),
        }
    }
}

impl FromStr for Operation {
    type Err = ConfigError;

    /// Accepts either the display symbol (`+`) or the lowercase name (`sum`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Operation::try_from(c);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "sum" => Ok(Operation::Sum),
            "product" => Ok(Operation::Product),
            "difference" => Ok(Operation::Difference),
            "quotient" => Ok(Operation::Quotient),
            _ => Err(ConfigError::UnknownOperation(s.to_string())),
        }
    }
}

impl TryFrom<String> for Operation {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operation> for String {
    fn from(op: Operation) -> Self {
        op.symbol().to_string()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable settings snapshot consumed by one evaluation call.
///
/// Every field is optional when deserialised; missing keys take the defaults
/// (`","` and `"\n"` delimiters, negatives denied, upper bound 1000, sum).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    pub delimiters: Vec<String>,
    pub deny_negatives: bool,
    pub upper_bound: i64,
    pub operation: Operation,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            deny_negatives: true,
            upper_bound: DEFAULT_UPPER_BOUND,
            operation: Operation::Sum,
        }
    }
}

impl Configuration {
    pub fn with_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_deny_negatives(mut self, deny: bool) -> Self {
        self.deny_negatives = deny;
        self
    }

    pub fn with_upper_bound(mut self, upper_bound: i64) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    /// Drops empty delimiter strings, which can never match anything useful.
    pub fn sanitized(mut self) -> Self {
        let before = self.delimiters.len();
        self.delimiters.retain(|d| !d.is_empty());
        let dropped = before - self.delimiters.len();
        if dropped > 0 {
            log::warn!("Ignoring {} empty delimiter(s) in settings", dropped);
        }
        self
    }
}

/// Publishes [`Configuration`] snapshots to concurrent readers.
///
/// Readers take an `Arc` once per call and keep observing that snapshot even
/// if a newer one is published meanwhile.
#[derive(Debug, Default)]
pub struct ConfigHandle {
    current: RwLock<Arc<Configuration>>,
}

impl ConfigHandle {
    pub fn new(config: Configuration) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Returns the snapshot currently published.
    pub fn snapshot(&self) -> Arc<Configuration> {
        // A poisoned lock still guards a fully-written Arc.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replaces the published snapshot. In-flight readers are unaffected.
    pub fn publish(&self, config: Configuration) {
        let next = Arc::new(config);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}
