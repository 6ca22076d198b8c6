//! Row value extraction seam.
//!
//! The expression layer that turns a declared column (or computed
//! expression) into per-row values lives outside this crate. It is injected
//! through [`RowInput`]: a compiled extractor that is bound to one row at a
//! time and then read. The resolver drives every input exactly once per
//! row, so an expression shared between primary key and routing roles is
//! evaluated once, not twice.

use lattice_commons::Datum;

/// A compiled per-row value extractor.
///
/// Contract: `bind` is called once per row, before any `value` read for
/// that row. `value` returns the extracted byte-string, or `None` for a
/// NULL/absent value.
///
/// ## Type Parameters
/// - `R`: the row type the surrounding ingest pipeline produces
pub trait RowInput<R> {
    /// Binds the input to the next row.
    fn bind(&mut self, row: &R);

    /// Returns the extracted value for the currently bound row.
    fn value(&self) -> Option<Datum>;
}

/// Function-based row input.
///
/// Allows using closures as extractors without a manual trait
/// implementation; the closure is evaluated at bind time and the result is
/// held until the next row.
pub struct FnRowInput<R, F>
where
    F: Fn(&R) -> Option<Datum>,
{
    func: F,
    current: Option<Datum>,
    _phantom: std::marker::PhantomData<R>,
}

impl<R, F> FnRowInput<R, F>
where
    F: Fn(&R) -> Option<Datum>,
{
    /// Creates a new function-based row input.
    pub fn new(func: F) -> Self {
        Self {
            func,
            current: None,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<R, F> RowInput<R> for FnRowInput<R, F>
where
    F: Fn(&R) -> Option<Datum>,
{
    fn bind(&mut self, row: &R) {
        self.current = (self.func)(row);
    }

    fn value(&self) -> Option<Datum> {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_row_input_evaluates_at_bind_time() {
        let mut input = FnRowInput::new(|row: &Vec<&str>| row.first().map(|s| Datum::from(*s)));

        input.bind(&vec!["a"]);
        assert_eq!(input.value(), Some(Datum::from("a")));

        input.bind(&vec!["b"]);
        assert_eq!(input.value(), Some(Datum::from("b")));
    }

    #[test]
    fn test_fn_row_input_null_value() {
        let mut input = FnRowInput::new(|_: &()| None);
        input.bind(&());
        assert_eq!(input.value(), None);
    }

    #[test]
    fn test_fn_row_input_unbound_reads_none() {
        let input = FnRowInput::new(|_: &()| Some(Datum::from("x")));
        assert_eq!(input.value(), None);
    }
}
