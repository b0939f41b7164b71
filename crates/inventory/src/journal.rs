//! Structured log records for inventory activity.
//!
//! Every record is also forwarded to `tracing` at the matching level; the
//! `Journal` is an optional caller-owned copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    pub fn now(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl core::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.timestamp.to_rfc3339(),
            self.severity,
            self.message
        )
    }
}

/// Append-only collector of `LogRecord`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    records: Vec<LogRecord>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Send a record to the tracing sink and, if supplied, to `journal`.
pub(crate) fn emit(journal: Option<&mut Journal>, severity: Severity, message: String) {
    match severity {
        Severity::Info => tracing::info!("{message}"),
        Severity::Warning => tracing::warn!("{message}"),
        Severity::Error => tracing::error!("{message}"),
    }

    if let Some(journal) = journal {
        journal.record(LogRecord::now(severity, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_appends_when_journal_supplied() {
        let mut journal = Journal::new();
        emit(Some(&mut journal), Severity::Info, "Added 3 of pear".to_string());
        emit(None, Severity::Warning, "dropped".to_string());

        assert_eq!(journal.len(), 1);
        let record = &journal.records()[0];
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.message, "Added 3 of pear");
        assert!(record.to_string().ends_with(" - INFO - Added 3 of pear"));
    }

    #[test]
    fn severity_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }
}
