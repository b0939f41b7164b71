//! Human-readable stock listing.

use std::io::{self, Write};

use crate::store::StockStore;

const RULE_WIDTH: usize = 40;

/// Borrowed view of a store that renders as a report via `Display`.
#[derive(Debug, Clone, Copy)]
pub struct StockReport<'a> {
    store: &'a StockStore,
}

impl core::fmt::Display for StockReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Items Report")?;
        writeln!(f, "{rule}")?;
        if self.store.is_empty() {
            writeln!(f, "No items in inventory")?;
        } else {
            for (name, quantity) in self.store.iter() {
                writeln!(f, "{name} -> {quantity}")?;
            }
        }
        writeln!(f, "{rule}")?;
        writeln!(f)
    }
}

impl StockStore {
    pub fn report(&self) -> StockReport<'_> {
        StockReport { store: self }
    }

    pub fn write_report<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self.report())
    }

    /// Print the report to stdout.
    pub fn print_report(&self) -> io::Result<()> {
        self.write_report(io::stdout().lock())
    }
}
