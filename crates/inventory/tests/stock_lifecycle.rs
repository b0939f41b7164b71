//! Black-box tests of the public inventory API.

use stockroom_inventory::{
    DomainError, FileStorage, Journal, LoadOutcome, Quantity, RemoveOutcome, Severity, StockStore,
    load, save,
};

fn names(store: &StockStore, threshold: u64) -> Vec<String> {
    store
        .check_low_items(threshold)
        .into_iter()
        .map(|name| name.into_inner())
        .collect()
}

#[test]
fn low_stock_example() {
    let mut store = StockStore::new();
    store.add("apple", 10, None).unwrap();
    store.add("banana", 5, None).unwrap();
    store.add("orange", 3, None).unwrap();

    assert_eq!(names(&store, 5), vec!["orange".to_string()]);
}

#[test]
fn demonstration_sequence_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("inventory.json"));
    let mut store = StockStore::new();
    let mut journal = Journal::new();

    assert_eq!(load(&mut store, &storage).unwrap(), LoadOutcome::NotFound);

    for (item, qty) in [("apple", 10), ("banana", 5), ("orange", 3), ("grape", 15)] {
        store.add(item, qty, Some(&mut journal)).unwrap();
    }
    assert_eq!(journal.len(), 4);
    assert!(journal.iter().all(|r| r.severity == Severity::Info));

    assert_eq!(
        store.remove("apple", 3).unwrap(),
        RemoveOutcome::Decremented(Quantity::new(7))
    );
    assert_eq!(
        store.remove("orange", 1).unwrap(),
        RemoveOutcome::Decremented(Quantity::new(2))
    );
    assert_eq!(store.remove("grape", 15).unwrap(), RemoveOutcome::Depleted);
    assert_eq!(
        store.remove("non_existent_item", 1).unwrap_err(),
        DomainError::not_found("non_existent_item")
    );

    assert_eq!(store.get_quantity("apple"), Quantity::new(7));
    assert_eq!(store.get_quantity("grape"), Quantity::ZERO);
    assert_eq!(store.low_stock_items().len(), 1);
    assert_eq!(names(&store, 5), vec!["orange".to_string()]);

    save(&store, &storage).unwrap();

    let mut reloaded = StockStore::new();
    assert_eq!(
        load(&mut reloaded, &storage).unwrap(),
        LoadOutcome::Loaded { items: 3 }
    );
    assert_eq!(reloaded, store);
    assert!(reloaded.report().to_string().contains("apple -> 7"));
}
