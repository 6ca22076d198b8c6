//! Type-safe wrapper for column identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for column identifiers.
///
/// Ensures column names cannot be accidentally used where table names or
/// user identifiers are expected. Ordering of `ColumnIdent` lists is
/// significant at the call sites that take them (primary key declaration
/// order is part of the document-id encoding contract).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIdent(String);

impl ColumnIdent {
    /// Creates a new ColumnIdent from a string.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the column name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnIdent {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_ident_new() {
        let column = ColumnIdent::new("user_id");
        assert_eq!(column.as_str(), "user_id");
    }

    #[test]
    fn test_column_ident_display() {
        let column = ColumnIdent::new("name");
        assert_eq!(format!("{}", column), "name");
    }

    #[test]
    fn test_column_ident_equality() {
        assert_eq!(ColumnIdent::new("id"), ColumnIdent::from("id"));
        assert_ne!(ColumnIdent::new("id"), ColumnIdent::new("name"));
    }

    #[test]
    fn test_column_ident_serialization() {
        let column = ColumnIdent::new("id");
        let json = serde_json::to_string(&column).unwrap();
        let deserialized: ColumnIdent = serde_json::from_str(&json).unwrap();
        assert_eq!(column, deserialized);
    }
}
