//! Structured grid change notifications.
//!
//! Every public edit operation emits exactly one [`GridChange`] describing the structural
//! change, plus one raw-text notification carrying the buffer content from the tracked
//! header length onward — for collaborators that mirror the raw document outside the
//! grid. Both fire synchronously at the end of the operation, after the buffer splice and
//! the re-parse request; the engine does not wait for or depend on consumption.

use crate::grid::Region;

/// A structural change to the grid, emitted once per edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridChange {
    /// One or more cell values changed in place.
    CellsChanged {
        /// Region containing the changed cells.
        region: Region,
        /// First changed row.
        row: usize,
        /// First changed column.
        column: usize,
        /// Number of changed rows.
        row_span: usize,
        /// Number of changed columns.
        column_span: usize,
    },
    /// Rows were inserted.
    RowsInserted {
        /// Region the rows were inserted into.
        region: Region,
        /// Index of the first inserted row.
        index: usize,
        /// Number of inserted rows.
        span: usize,
    },
    /// Rows were removed.
    RowsRemoved {
        /// Region the rows were removed from.
        region: Region,
        /// Index of the first removed row.
        index: usize,
        /// Number of removed rows.
        span: usize,
    },
    /// Columns were inserted.
    ColumnsInserted {
        /// Region the columns were inserted into.
        region: Region,
        /// Index of the first inserted column.
        index: usize,
        /// Number of inserted columns.
        span: usize,
    },
    /// Columns were removed.
    ColumnsRemoved {
        /// Region the columns were removed from.
        region: Region,
        /// Index of the first removed column.
        index: usize,
        /// Number of removed columns.
        span: usize,
    },
}

/// Callback invoked with each structural grid change.
pub type GridChangeCallback = Box<dyn FnMut(&GridChange) + Send>;

/// Callback invoked after each edit with the raw buffer tail, from the tracked header
/// length onward.
pub type RawTextCallback = Box<dyn FnMut(&str) + Send>;
