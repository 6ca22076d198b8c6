//! Raw byte-string value for a single column of a single row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw byte-string value produced by row value extraction.
///
/// Encoding layers (document-id generation, routing) operate on the raw
/// bytes; text conversion happens only at the public boundaries via
/// [`Datum::to_display_string`]. This keeps lossy encoding assumptions out
/// of binary record layouts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Datum(Vec<u8>);

impl Datum {
    /// Creates a new Datum from raw bytes.
    #[inline]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the byte length of the value.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the value has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the Datum, returning the underlying bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Converts the value to a display string.
    ///
    /// This is the single byte-to-string conversion used at the public
    /// boundaries (routing values, single-key passthrough document ids).
    /// Invalid UTF-8 sequences are replaced, never dropped.
    pub fn to_display_string(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for Datum {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display as UTF-8 when possible, fall back to hex
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "{}", hex::encode(&self.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datum_from_str() {
        let value = Datum::from("foo");
        assert_eq!(value.as_bytes(), b"foo");
        assert_eq!(value.len(), 3);
        assert!(!value.is_empty());
    }

    #[test]
    fn test_datum_empty() {
        let value = Datum::new(Vec::new());
        assert!(value.is_empty());
        assert_eq!(value.len(), 0);
    }

    #[test]
    fn test_datum_to_display_string() {
        assert_eq!(Datum::from("hello").to_display_string(), "hello");
    }

    #[test]
    fn test_datum_to_display_string_invalid_utf8() {
        let value = Datum::new(vec![0xFF, 0xFE]);
        // Lossy conversion replaces invalid sequences instead of failing
        assert_eq!(value.to_display_string(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_datum_display_hex_fallback() {
        let value = Datum::new(vec![0xFF, 0xFE, 0xFD]);
        assert_eq!(format!("{}", value), "fffefd");
    }

    #[test]
    fn test_datum_into_bytes_roundtrip() {
        let value = Datum::new(vec![1u8, 2, 3]);
        assert_eq!(value.clone().into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_datum_serialization() {
        let value = Datum::from("row456");
        let json = serde_json::to_string(&value).unwrap();
        let deserialized: Datum = serde_json::from_str(&json).unwrap();
        assert_eq!(value, deserialized);
    }
}
