//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing items, stock shortfalls). Persistence failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty item name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The target of an operation is not tracked.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// A removal asked for more than is on hand.
    #[error("cannot remove {requested} of '{item}'. Only {available} in stock.")]
    InsufficientStock {
        item: String,
        requested: u64,
        available: u64,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn insufficient_stock(item: impl Into<String>, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_item() {
        assert_eq!(
            DomainError::not_found("pear").to_string(),
            "item 'pear' not found in inventory"
        );
        assert_eq!(
            DomainError::insufficient_stock("apple", 20, 15).to_string(),
            "cannot remove 20 of 'apple'. Only 15 in stock."
        );
    }

    #[test]
    fn validation_wraps_message() {
        let err = DomainError::validation("quantity must be a non-negative integer");
        assert_eq!(
            err,
            DomainError::Validation("quantity must be a non-negative integer".to_string())
        );
        assert!(err.to_string().starts_with("validation failed: "));
    }
}
