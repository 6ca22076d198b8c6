//! # lattice-commons
//!
//! Shared types and conversion helpers for LatticeDB crates.
//!
//! This crate provides the foundational value model used by the ingest and
//! sharding layers (lattice-sharding and friends). It deliberately stays
//! small: type-safe identifier wrappers and the raw byte-string value type
//! that row extraction produces.
//!
//! ## Type-Safe Wrappers
//!
//! - `ColumnIdent`: column identifier wrapper (schema-level, declaration
//!   order is significant wherever a list of these appears)
//! - `Datum`: raw byte-string value for a single column of a single row
//!
//! ## Example Usage
//!
//! ```rust
//! use lattice_commons::{ColumnIdent, Datum};
//!
//! let column = ColumnIdent::new("id");
//! let value = Datum::from("1");
//!
//! assert_eq!(column.as_str(), "id");
//! assert_eq!(value.as_bytes(), b"1");
//! ```

pub mod models;

pub use models::{ColumnIdent, Datum};
