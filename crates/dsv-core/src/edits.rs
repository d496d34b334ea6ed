//! Edit operations over a parsed DSV document.
//!
//! # Overview
//!
//! [`EditableDsvModel`] mutates the single underlying raw buffer in place — cell-by-cell,
//! row-by-row, or column-by-column — instead of re-serializing the whole table on every
//! edit. Each public operation is one synchronous read-modify-write against the buffer
//! (and, for column operations, the tracked header length), followed by exactly one
//! asynchronous re-parse request and one change notification.
//!
//! Geometry for each operation is computed against the counts captured at call time.
//! Callers serialize edits themselves and complete the outstanding re-parse (see
//! [`DsvModel::resolve_parse`]) before issuing a dependent edit; there is no multi-writer
//! path in this design and no lock.
//!
//! Column operations iterate the body rows from last to first: inserting into or removing
//! from row *N* must not shift the recorded offsets still to be used for rows above it in
//! the same pass.
//!
//! # Example
//!
//! ```rust
//! use dsv_core::{DsvModelOptions, EditableDsvModel};
//!
//! let mut table =
//!     EditableDsvModel::from_options(DsvModelOptions::new("h1,h2\na,b\nc,d\n", ","));
//! assert_eq!(table.header_length(), 6);
//!
//! table.set_data(0, 1, "X").unwrap();
//! assert_eq!(table.model().raw_data(), "h1,h2\na,X\nc,d\n");
//!
//! table.resolve_parse();
//! table.add_row(1).unwrap();
//! assert_eq!(table.model().raw_data(), "h1,h2\na,X\n,\nc,d\n");
//! ```

use crate::change::{GridChange, GridChangeCallback, RawTextCallback};
use crate::geometry::CellCoords;
use crate::grid::{CellMetadata, GridModel, Region};
use crate::labels::column_label;
use crate::model::{DsvModel, DsvModelOptions};
use crate::splice;

/// Errors returned by the edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// Cell coordinate outside the body region.
    InvalidCell {
        /// Body row index.
        row: usize,
        /// Body column index.
        column: usize,
    },
    /// Row index outside the editable range.
    InvalidRow(usize),
    /// Column index outside the editable range.
    InvalidColumn(usize),
    /// The final remaining column cannot be removed.
    LastColumn,
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::InvalidCell { row, column } => {
                write!(f, "Invalid cell: row {}, column {}", row, column)
            }
            EditError::InvalidRow(row) => {
                write!(f, "Invalid row: {}", row)
            }
            EditError::InvalidColumn(column) => {
                write!(f, "Invalid column: {}", column)
            }
            EditError::LastColumn => {
                write!(f, "The final remaining column cannot be removed")
            }
        }
    }
}

impl std::error::Error for EditError {}

/// An editable DSV document: a parsed view plus the tracked header length and the change
/// notification channels.
///
/// The header length is the character offset at which the header row's text (plus its row
/// delimiter) ends and the body begins. It is mutated only by the column operations; the
/// exact arithmetic there is what keeps every later body slice consistent.
pub struct EditableDsvModel {
    model: DsvModel,
    header_length: usize,
    change_callbacks: Vec<GridChangeCallback>,
    raw_callbacks: Vec<RawTextCallback>,
}

impl EditableDsvModel {
    /// Wrap a parsed model with a known initial header length (the character length of
    /// the header row's text plus its row delimiter).
    pub fn new(options: DsvModelOptions, header_length: usize) -> Self {
        Self {
            model: DsvModel::new(options),
            header_length,
            change_callbacks: Vec::new(),
            raw_callbacks: Vec::new(),
        }
    }

    /// Wrap a parsed model, deriving the initial header length from the parsed header
    /// row: the first body row's start when one exists, the whole buffer otherwise.
    pub fn from_options(options: DsvModelOptions) -> Self {
        let model = DsvModel::new(options);
        let header_length = if model.row_count(Region::Body) > 0 {
            model.offset_index(1, 0)
        } else {
            model.raw_length()
        };
        Self {
            model,
            header_length,
            change_callbacks: Vec::new(),
            raw_callbacks: Vec::new(),
        }
    }

    /// Read access to the underlying parsed view.
    pub fn model(&self) -> &DsvModel {
        &self.model
    }

    /// Mutable access to the underlying parsed view.
    pub fn model_mut(&mut self) -> &mut DsvModel {
        &mut self.model
    }

    /// Offset at which the header row (plus its row delimiter) ends and the body begins.
    pub fn header_length(&self) -> usize {
        self.header_length
    }

    /// Complete the outstanding re-parse request, if any.
    pub fn resolve_parse(&mut self) -> bool {
        self.model.resolve_parse()
    }

    /// Subscribe to structural grid changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&GridChange) + Send + 'static,
    {
        self.change_callbacks.push(Box::new(callback));
    }

    /// Subscribe to the raw-text mirror notifications: the buffer content from the header
    /// length onward, emitted after every edit.
    pub fn subscribe_raw<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.raw_callbacks.push(Box::new(callback));
    }

    /// Replace the value of body cell `(row, column)`.
    ///
    /// Exact value replacement regardless of old/new length. `value` is spliced verbatim
    /// and must not itself contain unescaped delimiter or row-delimiter sequences.
    pub fn set_data(&mut self, row: usize, column: usize, value: &str) -> Result<(), EditError> {
        let rows = self.model.row_count(Region::Body);
        let columns = self.model.column_count(Region::Body);
        if row >= rows || column >= columns {
            return Err(EditError::InvalidCell { row, column });
        }
        let coords = CellCoords::new(row + 1, column + 1);
        splice::slice_out(&mut self.model, coords, true);
        splice::insert_at(&mut self.model, value, coords);
        self.model.parse_async();
        self.emit(GridChange::CellsChanged {
            region: Region::Body,
            row,
            column,
            row_span: 1,
            column_span: 1,
        });
        Ok(())
    }

    /// Insert a blank row before body row `row`.
    ///
    /// `row == row_count` appends after the last row; `row == row_count + 1` appends in
    /// the delimiter-led form, for buffers whose last row lost its trailing row delimiter
    /// to an earlier trim removal.
    pub fn add_row(&mut self, row: usize) -> Result<(), EditError> {
        let rows = self.model.row_count(Region::Body);
        if row > rows + 1 {
            return Err(EditError::InvalidRow(row));
        }
        let new_row = blank_row(&self.model, row);
        splice::insert_at(&mut self.model, &new_row, CellCoords::new(row + 1, 0));
        self.model.parse_async();
        self.emit(GridChange::RowsInserted {
            region: Region::Body,
            index: row,
            span: 1,
        });
        Ok(())
    }

    /// Insert an empty column before body column `column`, labeling it with the next
    /// spreadsheet-style letter after the current column count.
    ///
    /// `column == column_count` appends after the last column. The new label itself is
    /// always spliced onto the end of the header row.
    pub fn add_column(&mut self, column: usize) -> Result<(), EditError> {
        let columns = self.model.column_count(Region::Body);
        if column > columns {
            return Err(EditError::InvalidColumn(column));
        }
        let rows = self.model.row_count(Region::Body);
        let delimiter = self.model.delimiter().to_string();
        for row in (1..=rows).rev() {
            splice::insert_at(&mut self.model, &delimiter, CellCoords::new(row, column + 1));
        }
        let label = column_label(columns + 1);
        let splice_point = self
            .header_length
            .saturating_sub(self.model.row_delimiter().char_len());
        let entry = format!("{}{}", delimiter, label);
        self.model.insert(splice_point, &entry);
        self.header_length += self.model.delimiter_len() + label.chars().count();
        self.model.header_mut().push(label);
        self.model.parse_async();
        self.emit(GridChange::ColumnsInserted {
            region: Region::Body,
            index: column,
            span: 1,
        });
        Ok(())
    }

    /// Remove body row `row`.
    pub fn remove_row(&mut self, row: usize) -> Result<(), EditError> {
        let rows = self.model.row_count(Region::Body);
        if row >= rows {
            return Err(EditError::InvalidRow(row));
        }
        splice::slice_out(&mut self.model, CellCoords::new(row + 1, 0), false);
        self.model.parse_async();
        self.emit(GridChange::RowsRemoved {
            region: Region::Body,
            index: row,
            span: 1,
        });
        Ok(())
    }

    /// Remove body column `column`, dropping the last header label.
    pub fn remove_column(&mut self, column: usize) -> Result<(), EditError> {
        let columns = self.model.column_count(Region::Body);
        if column >= columns {
            return Err(EditError::InvalidColumn(column));
        }
        if columns == 1 {
            return Err(EditError::LastColumn);
        }
        let rows = self.model.row_count(Region::Body);
        for row in (1..=rows).rev() {
            splice::slice_out(&mut self.model, CellCoords::new(row, column + 1), false);
        }
        // Replace everything from the last header delimiter through the header length
        // with a bare row delimiter, shedding the last label.
        let header_text = self.model.raw_slice(0..self.header_length);
        let Some(byte_index) = header_text.rfind(self.model.delimiter()) else {
            return Err(EditError::LastColumn);
        };
        let label_start = header_text[..byte_index].chars().count();
        let removed = self.model.splice(label_start..self.header_length);
        let row_delimiter = self.model.row_delimiter();
        self.model.insert(label_start, row_delimiter.as_str());
        self.header_length = self
            .header_length
            .saturating_sub(removed.chars().count().saturating_sub(row_delimiter.char_len()));
        self.model.header_mut().pop();
        self.model.parse_async();
        self.emit(GridChange::ColumnsRemoved {
            region: Region::Body,
            index: column,
            span: 1,
        });
        Ok(())
    }

    /// Fire both notification channels, once each.
    fn emit(&mut self, change: GridChange) {
        for callback in &mut self.change_callbacks {
            callback(&change);
        }
        let tail = self.model.raw_tail(self.header_length);
        for callback in &mut self.raw_callbacks {
            callback(&tail);
        }
    }
}

impl GridModel for EditableDsvModel {
    fn row_count(&self, region: Region) -> usize {
        self.model.row_count(region)
    }

    fn column_count(&self, region: Region) -> usize {
        self.model.column_count(region)
    }

    fn metadata(&self, _region: Region, _row: usize, _column: usize) -> CellMetadata {
        CellMetadata::TEXT
    }

    fn data(&self, region: Region, row: usize, column: usize) -> String {
        self.model.data(region, row, column)
    }

    fn set_data(&mut self, region: Region, row: usize, column: usize, value: &str) -> bool {
        region == Region::Body && EditableDsvModel::set_data(self, row, column, value).is_ok()
    }
}

/// Text for a blank row of the current column count.
///
/// Inserted before an existing row the text is self-terminated; appended past the last row
/// it is delimiter-led instead, landing after the last row's existing terminator.
fn blank_row(model: &DsvModel, row: usize) -> String {
    let rows = model.row_count(Region::Body);
    let columns = model.column_count(Region::Body);
    let delimiters = model.delimiter().repeat(columns.saturating_sub(1));
    if row > rows {
        format!("{}{}", model.row_delimiter().as_str(), delimiters)
    } else {
        format!("{}{}", delimiters, model.row_delimiter().as_str())
    }
}
