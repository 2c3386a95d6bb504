//! One handler per operation kind.
//!
//! Every handler validates the whole request before it reads or writes storage,
//! so a rejected transaction never leaves a partial change behind.

use tracing::debug;

use crate::{
    domain::FruitTransaction,
    engine::{errors::OperationError, types::Storage},
};

/// Applies a single kind of transaction to the stock table.
pub trait OperationHandler {
    fn transaction(
        &self,
        request: Option<&FruitTransaction>,
        storage: &mut Storage,
    ) -> Result<(), OperationError>;
}

/// Checks shared by every operation: the request exists, names a fruit, and
/// carries a non-negative quantity.
fn validate(request: Option<&FruitTransaction>) -> Result<(&str, u64), OperationError> {
    let request = request.ok_or(OperationError::MissingTransaction)?;
    let fruit = request
        .fruit()
        .filter(|fruit| !fruit.is_empty())
        .ok_or(OperationError::MissingFruitName)?;
    let quantity =
        u64::try_from(request.quantity()).map_err(|_| OperationError::NegativeQuantity {
            fruit: fruit.to_owned(),
            quantity: request.quantity(),
        })?;
    Ok((fruit, quantity))
}

fn known_quantity(storage: &Storage, fruit: &str) -> Result<u64, OperationError> {
    storage
        .quantity(fruit)
        .ok_or_else(|| OperationError::UnknownFruit(fruit.to_owned()))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BalanceOperation;

impl OperationHandler for BalanceOperation {
    fn transaction(
        &self,
        request: Option<&FruitTransaction>,
        storage: &mut Storage,
    ) -> Result<(), OperationError> {
        let (fruit, quantity) = validate(request)?;
        storage.set_quantity(fruit, quantity);
        debug!(fruit, quantity, "balance recorded");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SupplyOperation;

impl OperationHandler for SupplyOperation {
    fn transaction(
        &self,
        request: Option<&FruitTransaction>,
        storage: &mut Storage,
    ) -> Result<(), OperationError> {
        let (fruit, quantity) = validate(request)?;
        // Unknown fruit starts from an empty shelf.
        let current = storage.quantity(fruit).unwrap_or(0);
        let updated = current
            .checked_add(quantity)
            .ok_or_else(|| OperationError::QuantityOverflow(fruit.to_owned()))?;
        storage.set_quantity(fruit, updated);
        debug!(fruit, quantity, updated, "supply applied");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PurchaseOperation;

impl OperationHandler for PurchaseOperation {
    fn transaction(
        &self,
        request: Option<&FruitTransaction>,
        storage: &mut Storage,
    ) -> Result<(), OperationError> {
        let (fruit, quantity) = validate(request)?;
        let available = known_quantity(storage, fruit)?;
        let remaining =
            available
                .checked_sub(quantity)
                .ok_or_else(|| OperationError::InsufficientStock {
                    fruit: fruit.to_owned(),
                    requested: quantity,
                    available,
                })?;
        storage.set_quantity(fruit, remaining);
        debug!(fruit, quantity, remaining, "purchase applied");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnOperation;

impl OperationHandler for ReturnOperation {
    fn transaction(
        &self,
        request: Option<&FruitTransaction>,
        storage: &mut Storage,
    ) -> Result<(), OperationError> {
        let (fruit, quantity) = validate(request)?;
        // Only fruit the shop has stocked can come back.
        let current = known_quantity(storage, fruit)?;
        let updated = current
            .checked_add(quantity)
            .ok_or_else(|| OperationError::QuantityOverflow(fruit.to_owned()))?;
        storage.set_quantity(fruit, updated);
        debug!(fruit, quantity, updated, "return applied");
        Ok(())
    }
}
