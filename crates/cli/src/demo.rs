//! The demonstration sequence run by the `stockroom` binary.
//!
//! Domain and persistence failures are logged by the inventory itself; the
//! sequence carries on past them. Only failures writing to `out` abort.

use std::io::Write;

use stockroom_inventory::{FileStorage, ItemName, Journal, StockStore, Storage, load, save};

use crate::config::Config;

pub fn run<W: Write>(config: &Config, out: W) -> anyhow::Result<StockStore> {
    let storage = FileStorage::new(&config.data_file);
    run_with(config, &storage, out)
}

pub fn run_with<S, W>(config: &Config, storage: &S, mut out: W) -> anyhow::Result<StockStore>
where
    S: Storage + ?Sized,
    W: Write,
{
    tracing::info!("Starting inventory system");

    let mut store = StockStore::new();
    let mut journal = Journal::new();

    let _ = load(&mut store, storage);

    for (item, qty) in [("apple", 10), ("banana", 5), ("orange", 3), ("grape", 15)] {
        let _ = store.add(item, qty, Some(&mut journal));
    }

    for (item, qty) in [("apple", 3), ("orange", 1), ("grape", 15), ("non_existent_item", 1)] {
        let _ = store.remove(item, qty);
    }

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(out, "Grape stock: {}", store.get_quantity("grape"))?;

    let low: Vec<String> = store
        .check_low_items(config.low_stock_threshold)
        .into_iter()
        .map(ItemName::into_inner)
        .collect();
    writeln!(out, "Low items: {low:?}")?;

    let _ = save(&store, storage);

    store.write_report(&mut out)?;

    let _ = load(&mut store, storage);
    writeln!(out, "Data loaded back from file:")?;
    store.write_report(&mut out)?;

    writeln!(out, "Stock additions ({}):", journal.len())?;
    for record in journal.iter() {
        writeln!(out, "{record}")?;
    }

    tracing::info!("Inventory system operations completed");
    Ok(store)
}
