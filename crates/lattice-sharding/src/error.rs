//! Error types for document id generation and shard resolution.

use thiserror::Error;

/// Errors raised while computing a row's document id or routing value.
///
/// All failures are synchronous and surface at the `advance`/`encode` call
/// for the offending row. Nothing is retried here; rejecting the row or
/// failing the batch is an ingest-pipeline decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShardingError {
    /// A primary key column produced an explicit NULL for the current row.
    #[error("A primary key value must not be NULL")]
    NullPrimaryKeyValue,

    /// Fewer values were supplied than declared primary key columns.
    ///
    /// Distinct from [`ShardingError::NullPrimaryKeyValue`]: this means the
    /// value is absent entirely, not present-but-null.
    #[error("missing primary key value: expected {expected} value(s), got {actual}")]
    MissingPrimaryKeyValue { expected: usize, actual: usize },

    /// A value destined for the length-prefixed composite record exceeds
    /// the single-byte length limit. Never truncated.
    #[error("primary key value of {length} bytes exceeds the {limit}-byte field limit")]
    PrimaryKeyValueTooLong { length: usize, limit: usize },

    /// A resolver was wired to an input slot that does not exist in the
    /// compiled input set.
    #[error("input slot {slot} is out of range for {inputs} compiled input(s)")]
    InvalidInputSlot { slot: usize, inputs: usize },

    /// The number of primary key slots does not match the number of
    /// declared primary key columns.
    #[error("{columns} primary key column(s) wired to {slots} input slot(s)")]
    PrimaryKeySlotMismatch { columns: usize, slots: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_value_message() {
        assert_eq!(
            ShardingError::NullPrimaryKeyValue.to_string(),
            "A primary key value must not be NULL"
        );
    }

    #[test]
    fn test_missing_value_message() {
        let err = ShardingError::MissingPrimaryKeyValue { expected: 2, actual: 0 };
        assert_eq!(
            err.to_string(),
            "missing primary key value: expected 2 value(s), got 0"
        );
    }

    #[test]
    fn test_missing_and_null_are_distinct() {
        let missing = ShardingError::MissingPrimaryKeyValue { expected: 1, actual: 0 };
        assert_ne!(missing, ShardingError::NullPrimaryKeyValue);
    }
}
