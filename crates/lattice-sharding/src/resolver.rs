//! Per-batch row shard resolution.
//!
//! A [`RowShardResolver`] is built once per insert/copy statement, bound to
//! a fixed schema, and then driven row by row: `advance(row)`, then read
//! `id()` and `routing()`, then `advance` again. The two result fields are
//! overwritten in place on every call, so the resolver is deliberately not
//! safe for concurrent use — give each ingest worker its own instance and
//! share only the compiled [`DocIdGenerator`] if anything.

use lattice_commons::{ColumnIdent, Datum};
use log::debug;

use crate::doc_id::DocIdGenerator;
use crate::error::ShardingError;
use crate::row_input::RowInput;

/// Computes document id and routing value for each row of an ingest batch.
///
/// The compiled extractor set is supplied as `inputs`; each distinct
/// expression appears once. `pk_slots` maps every primary key column (in
/// declaration order) to its input, and `routing_slot` names the routing
/// expression, if any. Slot sharing is what makes a clustering column that
/// also routes evaluate once per row instead of twice.
///
/// Not thread-safe: `advance` mutates the result fields without
/// synchronization. One resolver per worker.
pub struct RowShardResolver<R> {
    inputs: Vec<Box<dyn RowInput<R>>>,
    pk_slots: Vec<usize>,
    routing_slot: Option<usize>,
    id_generator: DocIdGenerator,
    id: Option<String>,
    routing: Option<String>,
    advanced: bool,
}

impl<R> RowShardResolver<R> {
    /// Creates a resolver for a table's primary key and routing declaration.
    ///
    /// Fails if `pk_slots` does not line up with `pk_columns`, or if any
    /// slot points outside the compiled input set.
    pub fn new(
        pk_columns: &[ColumnIdent],
        clustered_by: Option<&ColumnIdent>,
        inputs: Vec<Box<dyn RowInput<R>>>,
        pk_slots: Vec<usize>,
        routing_slot: Option<usize>,
    ) -> Result<Self, ShardingError> {
        if pk_slots.len() != pk_columns.len() {
            return Err(ShardingError::PrimaryKeySlotMismatch {
                columns: pk_columns.len(),
                slots: pk_slots.len(),
            });
        }
        for &slot in pk_slots.iter().chain(routing_slot.iter()) {
            if slot >= inputs.len() {
                return Err(ShardingError::InvalidInputSlot {
                    slot,
                    inputs: inputs.len(),
                });
            }
        }

        debug!(
            "row shard resolver over {} input(s): {} primary key column(s), routing {}",
            inputs.len(),
            pk_columns.len(),
            if routing_slot.is_some() { "enabled" } else { "disabled" }
        );

        Ok(Self {
            inputs,
            pk_slots,
            routing_slot,
            id_generator: DocIdGenerator::compile(pk_columns, clustered_by),
            id: None,
            routing: None,
            advanced: false,
        })
    }

    /// Advances to the next row: binds every compiled input once, computes
    /// the document id and routing value, and stores both as current state.
    ///
    /// On failure the previous row's results stay readable; nothing is
    /// committed for the offending row.
    pub fn advance(&mut self, row: &R) -> Result<(), ShardingError> {
        for input in self.inputs.iter_mut() {
            input.bind(row);
        }

        let pk_values = self.collect_pk_values();
        let id = self.id_generator.encode(&pk_values)?;
        let routing = self
            .routing_slot
            .and_then(|slot| self.inputs[slot].value())
            .map(|value| value.to_display_string());

        self.id = Some(id);
        self.routing = routing;
        self.advanced = true;
        Ok(())
    }

    /// Returns the document id computed by the last successful [`advance`].
    ///
    /// # Panics
    /// Panics if no row has been advanced yet; reading results without a
    /// bound row is a contract violation, never a stale default.
    ///
    /// [`advance`]: RowShardResolver::advance
    pub fn id(&self) -> &str {
        match &self.id {
            Some(id) => id,
            None => panic!("RowShardResolver::id() called before the first advance()"),
        }
    }

    /// Returns the routing value computed by the last successful
    /// [`advance`], or `None` when no routing expression is configured or
    /// the routing value was NULL for that row.
    ///
    /// # Panics
    /// Panics if no row has been advanced yet.
    ///
    /// [`advance`]: RowShardResolver::advance
    pub fn routing(&self) -> Option<&str> {
        assert!(
            self.advanced,
            "RowShardResolver::routing() called before the first advance()"
        );
        self.routing.as_deref()
    }

    fn collect_pk_values(&self) -> Vec<Option<Datum>> {
        if self.pk_slots.is_empty() {
            // No primary key declared; skip the per-row collection entirely.
            return Vec::new();
        }
        self.pk_slots
            .iter()
            .map(|&slot| self.inputs[slot].value())
            .collect()
    }
}
