use crate::obj::cell::Cell;
use crate::obj::slice::Slice;
use crate::obj::status_rs::Status;
use bytes::Bytes;
use std::sync::Arc;

/// Per-cell decision handed back to the scan loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnCode {
    /// Keep the cell and carry on with normal processing.
    Include,
    /// Drop the cell and move on to the next one. Never ends the scan.
    Skip,
}

/// A predicate pushed down into the scan on the storage side.
///
/// Implementations are evaluated concurrently by independent scan threads
/// and must not mutate shared state from `filter_cell`.
pub trait Filter: Send + Sync {
    /// Type tag the receiving side uses to find the matching parse function.
    fn name(&self) -> &'static str;

    fn filter_cell(&self, cell: &Cell) -> ReturnCode;

    /// The configuration payload shipped alongside `name()`.
    fn to_byte_array(&self) -> Bytes;

    /// Whether the scan can stop early. No more cells will be offered once
    /// this returns true.
    fn filter_all_remaining(&self) -> bool {
        false
    }
}

/// Rebuilds a filter from the payload produced by its `to_byte_array`.
pub type ParseFn = fn(&Slice) -> Result<Arc<dyn Filter>, Status>;
