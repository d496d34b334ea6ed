//! Grid data-model capability contract.
//!
//! A grid-rendering frontend drives the engine through [`GridModel`]: counts and cell reads
//! for painting, plus a single mutation entry point. Coordinates are addressed per
//! [`Region`], with the header row and the row-number column kept outside the body grid.

/// The sub-grid a coordinate addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Data cells below the header row.
    Body,
    /// The header row of column labels.
    ColumnHeader,
    /// The reserved row-number column.
    RowHeader,
    /// The corner cell above the row header.
    Corner,
}

/// The value kind a cell reports through [`GridModel::metadata`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Plain text; the engine never interprets cell values.
    Text,
}

/// Per-cell metadata descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetadata {
    /// Value kind of the cell.
    pub kind: CellKind,
}

impl CellMetadata {
    /// The constant descriptor reported for every coordinate.
    pub const TEXT: CellMetadata = CellMetadata {
        kind: CellKind::Text,
    };
}

/// Data-model capability set expected by a grid-rendering frontend.
pub trait GridModel {
    /// Number of rows in `region`.
    fn row_count(&self, region: Region) -> usize;

    /// Number of columns in `region`.
    fn column_count(&self, region: Region) -> usize;

    /// Metadata descriptor for a cell.
    ///
    /// Constant in this engine, for all in-range and out-of-range coordinates.
    fn metadata(&self, region: Region, row: usize, column: usize) -> CellMetadata;

    /// Cell value as text.
    fn data(&self, region: Region, row: usize, column: usize) -> String;

    /// Replace a cell value. Returns `true` when the edit was applied.
    fn set_data(&mut self, region: Region, row: usize, column: usize, value: &str) -> bool;
}
