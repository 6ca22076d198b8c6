//! # lattice-sharding
//!
//! Document identity and shard routing for LatticeDB tables.
//!
//! Every row written into a sharded table needs two derived values:
//!
//! - a **document id** — the storage engine's primary/lookup key
//! - a **routing value** — the string the placement layer uses to pick the
//!   owning shard
//!
//! This crate computes both. It performs no I/O and does not decide how a
//! routing value maps to a physical shard; that mapping belongs to the
//! placement layer consuming the routing string.
//!
//! ## Architecture
//!
//! ```text
//! ingest pipeline (one worker per shard writer)
//!     ↓ one RowShardResolver per worker
//! RowShardResolver (advance / id / routing)
//!     ↓
//! DocIdGenerator (compile-once encoding strategy)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lattice_commons::{ColumnIdent, Datum};
//! use lattice_sharding::DocIdGenerator;
//!
//! let pk_columns = vec![ColumnIdent::new("id"), ColumnIdent::new("name")];
//! let generator = DocIdGenerator::compile(&pk_columns, None);
//!
//! let id = generator
//!     .encode(&[Some(Datum::from("1")), Some(Datum::from("foo"))])
//!     .unwrap();
//! assert_eq!(id, "AgExA2Zvbw==");
//! ```

pub mod doc_id;
pub mod error;
pub mod resolver;
pub mod row_input;

pub use doc_id::DocIdGenerator;
pub use error::ShardingError;
pub use resolver::RowShardResolver;
pub use row_input::{FnRowInput, RowInput};
