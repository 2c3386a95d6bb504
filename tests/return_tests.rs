mod common;

use common::{fruits, stock, storage};
use fruit_shop::domain::{FruitTransaction, Operation};
use fruit_shop::engine::{
    OperationHandler, ReturnOperation,
    errors::{ErrorKind, OperationError},
};

#[test]
fn return_increases_quantity() {
    let mut storage = storage();
    let transaction = FruitTransaction::new(Operation::Return, "apple", 2);

    ReturnOperation
        .transaction(Some(&transaction), &mut storage)
        .unwrap();

    assert_eq!(storage.fruits(), &fruits(&[("apple", 12), ("banana", 5)]));
}

#[test]
fn return_of_unknown_fruit_is_rejected() {
    let mut storage = storage();
    let transaction = FruitTransaction::new(Operation::Return, "orange", 2);

    let err = ReturnOperation
        .transaction(Some(&transaction), &mut storage)
        .unwrap_err();

    assert_eq!(err, OperationError::UnknownFruit("orange".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(storage, common::storage());
}

#[test]
fn absent_return_is_a_null_argument() {
    let mut storage = storage();

    let err = ReturnOperation.transaction(None, &mut storage).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NullArgument);
}

#[test]
fn return_overflow_is_rejected() {
    let mut storage = stock(&[("apple", u64::MAX)]);
    let transaction = FruitTransaction::new(Operation::Return, "apple", 1);

    let err = ReturnOperation
        .transaction(Some(&transaction), &mut storage)
        .unwrap_err();

    assert_eq!(err, OperationError::QuantityOverflow("apple".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(storage.quantity("apple"), Some(u64::MAX));
}

#[test]
fn return_of_negative_quantity_is_rejected() {
    let mut storage = storage();
    let transaction = FruitTransaction::new(Operation::Return, "banana", -3);

    let err = ReturnOperation
        .transaction(Some(&transaction), &mut storage)
        .unwrap_err();

    assert_eq!(
        err,
        OperationError::NegativeQuantity {
            fruit: "banana".to_string(),
            quantity: -3,
        }
    );
    assert_eq!(storage, common::storage());
}

#[test]
fn return_without_fruit_name_is_rejected() {
    let mut storage = storage();

    let empty = ReturnOperation
        .transaction(
            Some(&FruitTransaction::new(Operation::Return, "", 1)),
            &mut storage,
        )
        .unwrap_err();
    let absent = ReturnOperation
        .transaction(
            Some(&FruitTransaction::without_fruit(Operation::Return, 1)),
            &mut storage,
        )
        .unwrap_err();

    assert_eq!(empty, OperationError::MissingFruitName);
    assert_eq!(absent, OperationError::MissingFruitName);
    assert_eq!(storage, common::storage());
}
