//! Buffer splice primitives.
//!
//! Two operations built entirely on the geometry resolver: cut a contiguous span out of
//! the raw buffer, and insert text at a computed offset. Neither has structural knowledge
//! of rows or columns beyond the span selection; both mutate synchronously and leave the
//! recorded offset index untouched.
//!
//! The buffer stays syntactically well-formed only if the caller supplies
//! delimiter-inclusive text where required — a blank row must carry its own field
//! delimiters and row delimiter.

use crate::geometry::{
    CellCoords, first_index, is_extension_operation, is_trim_operation, last_index, next_cell,
    previous_cell,
};
use crate::model::DsvModel;

/// Remove a cell's span from the buffer and return the removed text.
///
/// With `keep_cell` the span is exactly the cell's text. Otherwise the span also consumes
/// one delimiter: the one *before* the cell for a trim operation (nothing follows the cell
/// at an end-of-row or end-of-table position), the one *after* it everywhere else.
pub fn slice_out(model: &mut DsvModel, coords: CellCoords, keep_cell: bool) -> String {
    let (start, end) = if keep_cell {
        (first_index(model, coords), last_index(model, coords))
    } else if is_trim_operation(model, coords) {
        let previous = previous_cell(model, coords);
        (last_index(model, previous), last_index(model, coords))
    } else {
        let next = next_cell(model, coords);
        (first_index(model, coords), first_index(model, next))
    };
    model.splice(start..end)
}

/// Splice `value` into the buffer at the cell position `coords`.
///
/// An extension operation appends right after the previous cell's end (any leading
/// delimiter must be embedded in `value` by the caller); everything else inserts before
/// the cell's start.
pub fn insert_at(model: &mut DsvModel, value: &str, coords: CellCoords) {
    let offset = if is_extension_operation(model, coords) {
        last_index(model, previous_cell(model, coords))
    } else {
        first_index(model, coords)
    };
    model.insert(offset, value);
}
