use std::collections::HashMap;

use fruit_shop::engine::Storage;

/// Fresh stock used by most tests: apple 10, banana 5.
#[allow(dead_code)]
pub fn storage() -> Storage {
    let mut storage = Storage::new();
    storage.set_fruits(fruits(&[("apple", 10), ("banana", 5)]));
    storage
}

pub fn stock(rows: &[(&str, u64)]) -> Storage {
    rows.iter()
        .map(|(fruit, quantity)| (fruit.to_string(), *quantity))
        .collect()
}

pub fn fruits(rows: &[(&str, u64)]) -> HashMap<String, u64> {
    stock(rows).into()
}
