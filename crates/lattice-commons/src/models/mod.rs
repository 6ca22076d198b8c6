//! Shared model types.

mod column_ident;
mod datum;

pub use column_ident::ColumnIdent;
pub use datum::Datum;
