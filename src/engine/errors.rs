/// Broad classes of rejection, mirroring how callers usually react to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The transaction itself was absent.
    NullArgument,
    /// The transaction was present but its contents were unacceptable.
    InvalidArgument,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("Transaction is absent")]
    MissingTransaction,
    #[error("Fruit name is absent or empty")]
    MissingFruitName,
    #[error("Fruit {0:?} is not in storage")]
    UnknownFruit(String),
    #[error("Quantity for fruit {fruit:?} is negative: {quantity}")]
    NegativeQuantity { fruit: String, quantity: i64 },
    #[error("Insufficient stock of {fruit:?}: requested {requested}, available {available}")]
    InsufficientStock {
        fruit: String,
        requested: u64,
        available: u64,
    },
    #[error("Quantity of {0:?} would overflow")]
    QuantityOverflow(String),
}

impl OperationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OperationError::MissingTransaction => ErrorKind::NullArgument,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
