//! Offset geometry for cell coordinates.
//!
//! Pure functions translating a logical cell coordinate into exact character offsets into
//! the raw buffer, computed against the counts and offsets of the last completed parse.
//!
//! Coordinates here live in geometry space: `row` counts the header row as 0 with body
//! rows from 1, and `column` 0 is the reserved row-header position with data columns from
//! 1. The public editing entry points convert zero-based body coordinates by adding 1 to
//! each before calling in.
//!
//! The classification predicates route every boundary case: a caller that resolves a span
//! through [`is_trim_operation`]/[`is_extension_operation`] before taking
//! [`first_index`]/[`last_index`] never computes a negative offset or one past the buffer
//! end — [`row_end`]'s fallback to the live buffer length covers the last row, and
//! [`last_index`] falls back to [`row_end`] for the row-header and last columns.

use crate::grid::Region;
use crate::model::DsvModel;

/// A cell coordinate in geometry space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCoords {
    /// Parsed row index; 0 is the header row, body rows follow.
    pub row: usize,
    /// Geometry column; 0 is the reserved row-header position, data columns follow.
    pub column: usize,
}

impl CellCoords {
    /// Create a coordinate pair.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Offset of the start of the cell at `coords`.
pub fn first_index(model: &DsvModel, coords: CellCoords) -> usize {
    model.offset_index(coords.row, coords.column.saturating_sub(1))
}

/// Offset just past the end of the cell's text at `coords`.
///
/// For an interior column this is the position just before the delimiter that follows the
/// cell; for the row-header and last columns it is the end of the row.
pub fn last_index(model: &DsvModel, coords: CellCoords) -> usize {
    let columns = model.column_count(Region::Body);
    if 0 < coords.column && coords.column < columns {
        model
            .offset_index(coords.row, coords.column)
            .saturating_sub(model.delimiter_len())
    } else {
        row_end(model, coords.row)
    }
}

/// Offset of the end of `row`'s text, before its row delimiter.
///
/// The last row has no following row start to subtract from; its end is the live buffer
/// length (which includes the document's trailing row delimiter when one is present).
pub fn row_end(model: &DsvModel, row: usize) -> usize {
    if row < model.row_count(Region::Body) {
        model
            .offset_index(row + 1, 0)
            .saturating_sub(model.row_delimiter().char_len())
    } else {
        model.raw_length()
    }
}

/// Whether `coords` addresses the implicit end-of-row or end-of-table position.
///
/// A removal at such a coordinate must consume the delimiter *before* the target span,
/// since there is no trailing delimiter left to consume.
pub fn is_trim_operation(model: &DsvModel, coords: CellCoords) -> bool {
    let rows = model.row_count(Region::Body);
    let columns = model.column_count(Region::Body);
    coords.column == columns || (coords.row == rows && coords.column == 0)
}

/// Whether `coords` lies strictly beyond current bounds, signaling an append rather than
/// an insert-before. Mainly arises when undoing a trim operation.
pub fn is_extension_operation(model: &DsvModel, coords: CellCoords) -> bool {
    let rows = model.row_count(Region::Body);
    let columns = model.column_count(Region::Body);
    coords.column > columns || coords.row > rows
}

/// Row-major predecessor of `coords`, wrapping at row boundaries.
///
/// Column 1 steps back to the previous row's last column; the row-header column steps to
/// the previous row's row-header position, clamping at row 0.
pub fn previous_cell(model: &DsvModel, coords: CellCoords) -> CellCoords {
    match coords.column {
        0 => CellCoords::new(coords.row.saturating_sub(1), 0),
        1 => CellCoords::new(
            coords.row.saturating_sub(1),
            model.column_count(Region::Body),
        ),
        column => CellCoords::new(coords.row, column - 1),
    }
}

/// Row-major successor of `coords`, wrapping at row boundaries.
///
/// The last column steps forward to the next row's column 1; the row-header column steps
/// to the next row's row-header position, clamping at the last row.
pub fn next_cell(model: &DsvModel, coords: CellCoords) -> CellCoords {
    let rows = model.row_count(Region::Body);
    let columns = model.column_count(Region::Body);
    match coords.column {
        0 => CellCoords::new((coords.row + 1).min(rows), 0),
        column if column == columns => CellCoords::new((coords.row + 1).min(rows), 1),
        column => CellCoords::new(coords.row, column + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DsvModelOptions;

    fn model() -> DsvModel {
        DsvModel::new(DsvModelOptions::new("h1,h2\na,b\nc,d\n", ","))
    }

    #[test]
    fn test_first_index() {
        let model = model();
        assert_eq!(first_index(&model, CellCoords::new(1, 1)), 6);
        assert_eq!(first_index(&model, CellCoords::new(1, 2)), 8);
        // The row-header column shares the row start.
        assert_eq!(first_index(&model, CellCoords::new(1, 0)), 6);
    }

    #[test]
    fn test_last_index_interior_column() {
        let model = model();
        assert_eq!(last_index(&model, CellCoords::new(1, 1)), 7);
        assert_eq!(last_index(&model, CellCoords::new(2, 1)), 11);
    }

    #[test]
    fn test_last_index_boundary_columns_fall_back_to_row_end() {
        let model = model();
        assert_eq!(last_index(&model, CellCoords::new(1, 0)), 9);
        assert_eq!(last_index(&model, CellCoords::new(1, 2)), 9);
        assert_eq!(last_index(&model, CellCoords::new(2, 2)), 14);
    }

    #[test]
    fn test_row_end() {
        let model = model();
        assert_eq!(row_end(&model, 0), 5);
        assert_eq!(row_end(&model, 1), 9);
        assert_eq!(row_end(&model, 2), 14);
    }

    #[test]
    fn test_trim_classification() {
        let model = model();
        assert!(is_trim_operation(&model, CellCoords::new(1, 2)));
        assert!(is_trim_operation(&model, CellCoords::new(2, 0)));
        assert!(!is_trim_operation(&model, CellCoords::new(1, 1)));
        assert!(!is_trim_operation(&model, CellCoords::new(1, 0)));
    }

    #[test]
    fn test_extension_classification() {
        let model = model();
        assert!(is_extension_operation(&model, CellCoords::new(3, 1)));
        assert!(is_extension_operation(&model, CellCoords::new(1, 3)));
        assert!(!is_extension_operation(&model, CellCoords::new(2, 2)));
        assert!(!is_extension_operation(&model, CellCoords::new(2, 0)));
    }

    #[test]
    fn test_previous_cell() {
        let model = model();
        assert_eq!(
            previous_cell(&model, CellCoords::new(1, 0)),
            CellCoords::new(0, 0)
        );
        assert_eq!(
            previous_cell(&model, CellCoords::new(0, 0)),
            CellCoords::new(0, 0)
        );
        assert_eq!(
            previous_cell(&model, CellCoords::new(1, 1)),
            CellCoords::new(0, 2)
        );
        assert_eq!(
            previous_cell(&model, CellCoords::new(2, 2)),
            CellCoords::new(2, 1)
        );
    }

    #[test]
    fn test_next_cell() {
        let model = model();
        assert_eq!(next_cell(&model, CellCoords::new(1, 0)), CellCoords::new(2, 0));
        assert_eq!(next_cell(&model, CellCoords::new(2, 0)), CellCoords::new(2, 0));
        assert_eq!(next_cell(&model, CellCoords::new(1, 1)), CellCoords::new(1, 2));
        assert_eq!(next_cell(&model, CellCoords::new(1, 2)), CellCoords::new(2, 1));
        assert_eq!(next_cell(&model, CellCoords::new(2, 2)), CellCoords::new(2, 1));
    }
}
