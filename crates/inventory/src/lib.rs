//! Inventory domain module.
//!
//! An in-memory item -> quantity store with validated mutations, low-stock
//! queries, JSON persistence and a printable report. State is an explicit
//! [`StockStore`] value owned by the caller; nothing is process-global.

pub mod item;
pub mod journal;
pub mod persistence;
pub mod report;
pub mod store;

pub use item::{ItemName, Quantity};
pub use journal::{Journal, LogRecord, Severity};
pub use persistence::{
    DEFAULT_DATA_FILE, FileStorage, InMemoryStorage, LoadOutcome, PersistenceError, Storage, load,
    save,
};
pub use report::StockReport;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, RemoveOutcome, StockStore};
pub use stockroom_core::{DomainError, DomainResult};
