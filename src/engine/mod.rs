//! Stateful fruit shop.
//!
//! Owns the stock table and routes each transaction to the handler for its
//! operation kind.

use tracing::warn;

use crate::{
    domain::{FruitTransaction, Operation},
    engine::errors::OperationError,
};
pub use handlers::{
    BalanceOperation, OperationHandler, PurchaseOperation, ReturnOperation, SupplyOperation,
};
pub use types::Storage;

pub mod errors;
mod handlers;
mod types;

pub struct FruitShop {
    storage: Storage,
}

impl Default for FruitShop {
    fn default() -> Self {
        Self::new()
    }
}

impl FruitShop {
    pub fn new() -> Self {
        Self::with_storage(Storage::new())
    }
    pub fn with_storage(storage: Storage) -> Self {
        Self { storage }
    }
    pub fn storage(&self) -> &Storage {
        &self.storage
    }
    pub fn into_storage(self) -> Storage {
        self.storage
    }
}

/// Operation strategy: the handler responsible for each kind of transaction.
pub fn handler_for(operation: Operation) -> &'static dyn OperationHandler {
    match operation {
        Operation::Balance => &BalanceOperation,
        Operation::Supply => &SupplyOperation,
        Operation::Purchase => &PurchaseOperation,
        Operation::Return => &ReturnOperation,
    }
}

impl FruitShop {
    pub fn process_transaction(
        &mut self,
        transaction: &FruitTransaction,
    ) -> Result<(), OperationError> {
        let handler = handler_for(transaction.operation());
        handler
            .transaction(Some(transaction), &mut self.storage)
            .inspect_err(|e| warn!(operation = %transaction.operation(), "Transaction rejected: {e}"))
    }
}
