//! Actions accepted by the reducer counter.

use std::fmt;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// Any other discriminant. Reduces to the identity transition.
    Unrecognized(String),
}

impl CounterIntent {
    /// Map a discriminant string to an intent. Matching is exact.
    pub fn from_name(name: &str) -> Self {
        match name {
            "increment" => CounterIntent::Increment,
            "decrement" => CounterIntent::Decrement,
            other => CounterIntent::Unrecognized(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CounterIntent::Increment => "increment",
            CounterIntent::Decrement => "decrement",
            CounterIntent::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for CounterIntent {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for CounterIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Intent for CounterIntent {}
