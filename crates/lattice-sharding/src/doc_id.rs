//! Document id generation for sharded tables.
//!
//! A table's primary key declaration fixes one of three encoding strategies
//! at compile time:
//!
//! - **AutoGenerated**: no declared primary key. Every row gets a fresh
//!   unique token; two calls never compare equal.
//! - **SingleKey**: exactly one primary key column that is also the
//!   clustering column. The document id is the value's text, verbatim, so
//!   it doubles as a direct lookup key without decoding.
//! - **Composite**: everything else. A versioned binary record of
//!   length-prefixed fields, represented as standard padded base64. When a
//!   clustering column appears among the primary key columns its value is
//!   emitted first; the remaining values follow in declaration order.
//!
//! The composite record layout is a stability contract: format version byte
//! `2`, then per field a 1-byte length followed by that many raw bytes.
//! Field values are capped at 255 bytes; longer values are a hard error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lattice_commons::{ColumnIdent, Datum};
use log::debug;
use uuid::Uuid;

use crate::error::ShardingError;

/// Composite record format version.
const FORMAT_VERSION: u8 = 2;

/// Maximum byte length of a single length-prefixed field.
const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// Encoding strategy, selected once from the static schema shape.
#[derive(Debug, Clone, PartialEq, Eq)]
enum IdStrategy {
    /// No declared primary key: generate a unique token per row.
    AutoGenerated,
    /// Sole primary key column doubles as the clustering column: the value
    /// text is the document id.
    SingleKey,
    /// Length-prefixed binary record, base64-encoded.
    Composite {
        num_keys: usize,
        /// Position of the clustering column within the primary key
        /// declaration, when it appears there. That field is emitted first.
        clustered_position: Option<usize>,
    },
}

/// Generates document ids for rows of a single table.
///
/// Compiled once per table schema; immutable afterwards. `encode` touches
/// no shared mutable state, so a compiled generator may be shared read-only
/// across concurrent resolvers.
#[derive(Debug, Clone)]
pub struct DocIdGenerator {
    strategy: IdStrategy,
}

impl DocIdGenerator {
    /// Compiles the encoding strategy for a table's primary key declaration.
    ///
    /// `pk_columns` is the ordered primary key declaration; order is part
    /// of the encoding contract. `clustered_by` is the optional clustering
    /// column, which may or may not coincide with a primary key column.
    pub fn compile(pk_columns: &[ColumnIdent], clustered_by: Option<&ColumnIdent>) -> Self {
        let strategy = if pk_columns.is_empty() {
            IdStrategy::AutoGenerated
        } else if pk_columns.len() == 1 && clustered_by == Some(&pk_columns[0]) {
            IdStrategy::SingleKey
        } else {
            IdStrategy::Composite {
                num_keys: pk_columns.len(),
                clustered_position: clustered_by
                    .and_then(|clustered| pk_columns.iter().position(|pk| pk == clustered)),
            }
        };
        debug!(
            "compiled {:?} document id strategy for {} primary key column(s)",
            strategy,
            pk_columns.len()
        );
        Self { strategy }
    }

    /// Encodes one row's primary key values into its document id.
    ///
    /// `pk_values` must be ordered exactly like the `pk_columns` the
    /// generator was compiled with. A `None` entry is an explicit NULL and
    /// fails with [`ShardingError::NullPrimaryKeyValue`]; a sequence
    /// shorter than the declaration fails with
    /// [`ShardingError::MissingPrimaryKeyValue`]. Validation happens before
    /// any record bytes are written.
    pub fn encode(&self, pk_values: &[Option<Datum>]) -> Result<String, ShardingError> {
        match &self.strategy {
            IdStrategy::AutoGenerated => Ok(Uuid::new_v4().to_string()),
            IdStrategy::SingleKey => {
                let value = required_value(pk_values, 0, 1)?;
                Ok(value.to_display_string())
            }
            IdStrategy::Composite { num_keys, clustered_position } => {
                encode_composite(pk_values, *num_keys, *clustered_position)
            }
        }
    }
}

fn required_value<'a>(
    values: &'a [Option<Datum>],
    index: usize,
    expected: usize,
) -> Result<&'a Datum, ShardingError> {
    match values.get(index) {
        Some(Some(value)) => Ok(value),
        Some(None) => Err(ShardingError::NullPrimaryKeyValue),
        None => Err(ShardingError::MissingPrimaryKeyValue {
            expected,
            actual: values.len(),
        }),
    }
}

fn encode_composite(
    values: &[Option<Datum>],
    num_keys: usize,
    clustered_position: Option<usize>,
) -> Result<String, ShardingError> {
    // Validate every field before writing any record bytes, so a bad row
    // never leaves a half-built record behind.
    let mut fields: Vec<&Datum> = Vec::with_capacity(num_keys);
    for index in 0..num_keys {
        let value = required_value(values, index, num_keys)?;
        if value.len() > MAX_FIELD_LEN {
            return Err(ShardingError::PrimaryKeyValueTooLong {
                length: value.len(),
                limit: MAX_FIELD_LEN,
            });
        }
        fields.push(value);
    }

    let record_len = 1 + fields.iter().map(|v| 1 + v.len()).sum::<usize>();
    let mut record = Vec::with_capacity(record_len);
    record.push(FORMAT_VERSION);

    // Clustered field first, then the rest in declaration order.
    if let Some(position) = clustered_position {
        write_field(&mut record, fields[position]);
    }
    for (index, value) in fields.iter().enumerate() {
        if Some(index) == clustered_position {
            continue;
        }
        write_field(&mut record, value);
    }

    Ok(STANDARD.encode(&record))
}

fn write_field(record: &mut Vec<u8>, value: &Datum) {
    record.push(value.len() as u8);
    record.extend_from_slice(value.as_bytes());
}
