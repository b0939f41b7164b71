//! The Stock Store: authoritative item -> quantity mapping.
//!
//! Invariants:
//! - names are unique and non-empty (`ItemName`)
//! - every stored quantity is >= 1; an item that reaches 0 is dropped
//! - iteration follows insertion order

use std::collections::HashMap;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockroom_core::{DomainError, DomainResult};

use crate::item::{ItemName, Quantity};
use crate::journal::{Journal, Severity, emit};

/// Items strictly below this count are reported as low stock by default.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Result of a successful `StockStore::remove`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stock was reduced and the item is still tracked.
    Decremented(Quantity),
    /// Stock reached zero and the item was dropped from the store.
    Depleted,
}

#[derive(Debug, Clone, Default)]
pub struct StockStore {
    quantities: HashMap<ItemName, Quantity>,
    order: Vec<ItemName>,
}

impl PartialEq for StockStore {
    fn eq(&self, other: &Self) -> bool {
        self.quantities == other.quantities
    }
}

impl Eq for StockStore {}

impl StockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `item`, inserting it if absent.
    ///
    /// Returns the new on-hand quantity. Invalid input is logged at error
    /// severity and leaves the store untouched.
    pub fn add(
        &mut self,
        item: &str,
        quantity: i64,
        mut journal: Option<&mut Journal>,
    ) -> DomainResult<Quantity> {
        let validated = ItemName::new(item)
            .and_then(|name| Ok((name, Quantity::try_from(quantity)?)));
        let (name, quantity) = match validated {
            Ok(v) => v,
            Err(err) => {
                emit(journal, Severity::Error, err.to_string());
                return Err(err);
            }
        };

        let current = self.get_quantity(name.as_str());
        let Some(updated) = current.checked_add(quantity) else {
            let err = DomainError::validation(format!(
                "adding {quantity} to '{name}' would overflow the stock count"
            ));
            emit(journal.as_deref_mut(), Severity::Error, err.to_string());
            return Err(err);
        };

        let message = format!("Added {quantity} of {name}");
        self.put(name, updated);
        emit(journal, Severity::Info, message);
        Ok(updated)
    }

    /// Remove `quantity` units of `item`. All-or-nothing.
    pub fn remove(&mut self, item: &str, quantity: i64) -> DomainResult<RemoveOutcome> {
        let Some(available) = self.quantities.get(item).copied() else {
            let err = DomainError::not_found(item);
            emit(None, Severity::Warning, format!("Item '{item}' not found in inventory"));
            return Err(err);
        };

        let quantity = match Quantity::try_from(quantity) {
            Ok(q) => q,
            Err(err) => {
                emit(None, Severity::Error, err.to_string());
                return Err(err);
            }
        };

        let Some(remaining) = available.checked_sub(quantity) else {
            let err = DomainError::insufficient_stock(item, quantity.get(), available.get());
            emit(None, Severity::Warning, err.to_string());
            return Err(err);
        };

        if remaining.is_zero() {
            self.quantities.remove(item);
            self.order.retain(|name| name.as_str() != item);
            emit(
                None,
                Severity::Info,
                format!("Item '{item}' removed (quantity <= 0)"),
            );
            Ok(RemoveOutcome::Depleted)
        } else {
            if let Some(slot) = self.quantities.get_mut(item) {
                *slot = remaining;
            }
            emit(None, Severity::Info, format!("Removed {quantity} of '{item}'"));
            Ok(RemoveOutcome::Decremented(remaining))
        }
    }

    /// Current quantity of `item`, or zero when it is not tracked.
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.quantities.get(item).copied().unwrap_or(Quantity::ZERO)
    }

    /// Names of items whose quantity is strictly below `threshold`, in insertion order.
    pub fn check_low_items(&self, threshold: u64) -> Vec<ItemName> {
        self.iter()
            .filter(|(_, quantity)| quantity.get() < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn low_stock_items(&self) -> Vec<ItemName> {
        self.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.order
            .iter()
            .map(|name| (name, self.get_quantity(name.as_str())))
    }

    pub fn item_names(&self) -> impl Iterator<Item = &ItemName> {
        self.order.iter()
    }

    /// Clear the store, then populate it from `entries`.
    ///
    /// Zero quantities are skipped; a repeated name keeps its first position
    /// and its last quantity.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = (ItemName, Quantity)>) {
        self.quantities.clear();
        self.order.clear();
        for (name, quantity) in entries {
            if quantity.is_zero() {
                tracing::debug!(item = %name, "skipping zero-quantity entry");
                continue;
            }
            self.put(name, quantity);
        }
    }

    fn put(&mut self, name: ItemName, quantity: Quantity) {
        if quantity.is_zero() {
            return;
        }
        if !self.quantities.contains_key(name.as_str()) {
            self.order.push(name.clone());
        }
        self.quantities.insert(name, quantity);
    }
}

impl Serialize for StockStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, quantity) in self.iter() {
            map.serialize_entry(name, &quantity)?;
        }
        map.end()
    }
}

struct StockStoreVisitor;

impl<'de> Visitor<'de> for StockStoreVisitor {
    type Value = StockStore;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a JSON object mapping item names to non-negative integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, quantity)) = access.next_entry::<ItemName, Quantity>()? {
            entries.push((name, quantity));
        }
        let mut store = StockStore::new();
        store.replace_all(entries);
        Ok(store)
    }
}

impl<'de> Deserialize<'de> for StockStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StockStoreVisitor)
    }
}
