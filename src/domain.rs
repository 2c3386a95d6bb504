//! Core domain types: operations and fruit transactions.

use std::{fmt, str::FromStr};

use derive_more::Display;

/// The kinds of inventory change the shop understands.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sets the remaining stock of a fruit.
    #[display("b")]
    Balance,
    /// Stock delivered by a supplier.
    #[display("s")]
    Supply,
    /// Stock bought by a customer.
    #[display("p")]
    Purchase,
    /// Stock brought back by a customer.
    #[display("r")]
    Return,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown operation code: {0:?}")]
pub struct ParseOperationError(String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts the one-letter code (`b`, `s`, `p`, `r`) or the lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "b" | "balance" => Ok(Operation::Balance),
            "s" | "supply" => Ok(Operation::Supply),
            "p" | "purchase" => Ok(Operation::Purchase),
            "r" | "return" => Ok(Operation::Return),
            other => Err(ParseOperationError(other.to_owned())),
        }
    }
}

/// A requested inventory change. The fruit name may be absent and the quantity
/// may be zero or negative; handlers validate both before touching storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitTransaction {
    operation: Operation,
    fruit: Option<String>,
    quantity: i64,
}

impl FruitTransaction {
    pub fn new(operation: Operation, fruit: impl Into<String>, quantity: i64) -> Self {
        Self {
            operation,
            fruit: Some(fruit.into()),
            quantity,
        }
    }
    /// A transaction that carries no fruit name at all.
    pub fn without_fruit(operation: Operation, quantity: i64) -> Self {
        Self {
            operation,
            fruit: None,
            quantity,
        }
    }
    pub fn operation(&self) -> Operation {
        self.operation
    }
    pub fn fruit(&self) -> Option<&str> {
        self.fruit.as_deref()
    }
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl fmt::Display for FruitTransaction {
    /// Renders as `<code> <fruit> <quantity>`, e.g. `p apple 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fruit = self.fruit().unwrap_or("<none>");
        write!(f, "{} {} {}", self.operation, fruit, self.quantity)
    }
}
