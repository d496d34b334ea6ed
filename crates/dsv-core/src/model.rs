//! Parsed view over the raw DSV buffer.
//!
//! # Overview
//!
//! [`DsvModel`] owns the document as a single text buffer (a rope addressed in character
//! offsets) together with a derived offset index mapping `(row, column)` to the starting
//! offset of each field. Row 0 of the index is the header row; body rows follow.
//!
//! The index is a snapshot: splicing the buffer does not move the recorded offsets.
//! Editing layers rely on that staleness contract — they compute a batch of splices
//! against the pre-edit index, then request a re-parse. [`DsvModel::parse_async`] marks
//! the index stale and returns immediately; [`DsvModel::resolve_parse`] completes the
//! outstanding request and rebuilds the index from the mutated buffer.
//!
//! # Example
//!
//! ```rust
//! use dsv_core::{DsvModel, DsvModelOptions, Region};
//!
//! let model = DsvModel::new(DsvModelOptions::new("h1,h2\na,b\nc,d\n", ","));
//! assert_eq!(model.row_count(Region::Body), 2);
//! assert_eq!(model.column_count(Region::Body), 2);
//! assert_eq!(model.data(Region::Body, 0, 1), "b");
//! assert_eq!(model.offset_index(1, 0), 6);
//! ```

use crate::grid::Region;
use crate::row_delimiter::RowDelimiter;
use ropey::Rope;
use std::ops::Range;

/// Construction options for a [`DsvModel`].
#[derive(Debug, Clone)]
pub struct DsvModelOptions {
    /// Initial document text.
    pub data: String,
    /// Field delimiter separating values within a row.
    pub delimiter: String,
    /// Row delimiter; detected from `data` when not set explicitly.
    pub row_delimiter: Option<RowDelimiter>,
}

impl DsvModelOptions {
    /// Options for a document with an explicit field delimiter; the row delimiter is
    /// detected from the text.
    pub fn new(data: impl Into<String>, delimiter: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            delimiter: delimiter.into(),
            row_delimiter: None,
        }
    }

    /// Fix the row delimiter instead of detecting it.
    pub fn with_row_delimiter(mut self, row_delimiter: RowDelimiter) -> Self {
        self.row_delimiter = Some(row_delimiter);
        self
    }
}

/// Parsed view: the raw buffer, its delimiters, and the derived offset index.
///
/// The first parsed row is the header row; `Region::Body` counts exclude it. The header
/// labels are re-derived from the header row text on every completed parse, and may also
/// be adjusted directly by editing layers between parses.
#[derive(Debug, Clone)]
pub struct DsvModel {
    raw: Rope,
    delimiter: String,
    row_delimiter: RowDelimiter,
    header: Vec<String>,
    /// Char offset of each field start, per parsed row. Row 0 is the header row.
    offsets: Vec<Vec<usize>>,
    parse_pending: bool,
}

impl DsvModel {
    /// Create a model and perform one synchronous initial parse.
    pub fn new(options: DsvModelOptions) -> Self {
        let row_delimiter = options
            .row_delimiter
            .unwrap_or_else(|| RowDelimiter::detect_in_text(&options.data));
        let mut model = Self {
            raw: Rope::from_str(&options.data),
            delimiter: options.delimiter,
            row_delimiter,
            header: Vec::new(),
            offsets: Vec::new(),
            parse_pending: false,
        };
        model.rebuild_index();
        model
    }

    /// Field delimiter separating values within a row.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Length of the field delimiter in characters.
    pub fn delimiter_len(&self) -> usize {
        self.delimiter.chars().count()
    }

    /// Row delimiter terminating each record.
    pub fn row_delimiter(&self) -> RowDelimiter {
        self.row_delimiter
    }

    /// Header labels as of the last parse (possibly adjusted since by an editing layer).
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Mutable access to the header labels, for editing layers that keep the list in sync
    /// with a header splice ahead of the next parse.
    pub fn header_mut(&mut self) -> &mut Vec<String> {
        &mut self.header
    }

    /// Starting character offset of field `column` in parsed row `row`.
    ///
    /// Row 0 is the header row; body rows follow. Offsets are the ones recorded by the
    /// last completed parse: splices performed since then do not move them. Out-of-range
    /// columns clamp to the row's last field; rows past the parsed set answer with the
    /// live buffer length.
    pub fn offset_index(&self, row: usize, column: usize) -> usize {
        match self.offsets.get(row) {
            Some(fields) => fields
                .get(column)
                .or_else(|| fields.last())
                .copied()
                .unwrap_or(0),
            None => self.raw.len_chars(),
        }
    }

    /// Number of rows in `region`, per the last completed parse.
    pub fn row_count(&self, region: Region) -> usize {
        match region {
            Region::Body => self.offsets.len().saturating_sub(1),
            _ => 1,
        }
    }

    /// Number of columns in `region`, per the last completed parse.
    ///
    /// The body column count is the field count of the header row.
    pub fn column_count(&self, region: Region) -> usize {
        match region {
            Region::Body => self.offsets.first().map(Vec::len).unwrap_or(0),
            _ => 1,
        }
    }

    /// The whole buffer as a `String`.
    pub fn raw_data(&self) -> String {
        self.raw.to_string()
    }

    /// Replace the whole buffer. Marks the offset index stale.
    pub fn set_raw_data(&mut self, data: &str) {
        self.raw = Rope::from_str(data);
        self.parse_pending = true;
    }

    /// Live character length of the buffer. Splices are visible here immediately, unlike
    /// the cached offset index.
    pub fn raw_length(&self) -> usize {
        self.raw.len_chars()
    }

    /// Buffer text in `range` (character offsets), clamped to the buffer end.
    pub fn raw_slice(&self, range: Range<usize>) -> String {
        let len = self.raw.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.raw.slice(start..end).to_string()
    }

    /// Buffer text from the character offset `from` onward.
    pub fn raw_tail(&self, from: usize) -> String {
        self.raw.slice(from.min(self.raw.len_chars())..).to_string()
    }

    /// Remove `range` (character offsets) from the buffer and return the removed text.
    ///
    /// The recorded offset index is left untouched; the caller requests a re-parse with
    /// [`DsvModel::parse_async`] once its batch of splices is complete.
    pub fn splice(&mut self, range: Range<usize>) -> String {
        let len = self.raw.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        let removed = self.raw.slice(start..end).to_string();
        self.raw.remove(start..end);
        removed
    }

    /// Insert `text` at a character offset, clamped to the buffer end.
    pub fn insert(&mut self, offset: usize, text: &str) {
        self.raw.insert(offset.min(self.raw.len_chars()), text);
    }

    /// Cell value as text for the given region.
    ///
    /// `Body` reads between the recorded field boundaries, `ColumnHeader` answers from the
    /// header labels, `RowHeader` reports the 1-based row number.
    pub fn data(&self, region: Region, row: usize, column: usize) -> String {
        match region {
            Region::Body => self.cell_text(row + 1, column),
            Region::ColumnHeader => self.header.get(column).cloned().unwrap_or_default(),
            Region::RowHeader => (row + 1).to_string(),
            Region::Corner => String::new(),
        }
    }

    /// Request an asynchronous re-parse of the mutated buffer.
    ///
    /// Fire-and-forget: counts and offsets keep answering from the pre-edit snapshot
    /// until the request is completed with [`DsvModel::resolve_parse`]. An issued request
    /// always completes.
    pub fn parse_async(&mut self) {
        self.parse_pending = true;
    }

    /// Whether a re-parse request is outstanding.
    pub fn parse_pending(&self) -> bool {
        self.parse_pending
    }

    /// Complete an outstanding re-parse request, rebuilding the offset index and
    /// re-deriving the header labels from the header row text. Returns whether a rebuild
    /// ran.
    pub fn resolve_parse(&mut self) -> bool {
        if !self.parse_pending {
            return false;
        }
        self.rebuild_index();
        self.parse_pending = false;
        true
    }

    /// One forward scan over the buffer recording each row start and each field start.
    fn rebuild_index(&mut self) {
        let chars: Vec<char> = self.raw.chars().collect();
        let delimiter: Vec<char> = self.delimiter.chars().collect();
        let row_delimiter: Vec<char> = self.row_delimiter.as_str().chars().collect();

        let mut offsets: Vec<Vec<usize>> = Vec::new();
        let mut row: Vec<usize> = vec![0];
        let mut i = 0;
        while i < chars.len() {
            if chars[i..].starts_with(&row_delimiter) {
                i += row_delimiter.len();
                offsets.push(std::mem::replace(&mut row, vec![i]));
            } else if !delimiter.is_empty() && chars[i..].starts_with(&delimiter) {
                i += delimiter.len();
                row.push(i);
            } else {
                i += 1;
            }
        }
        // A trailing row delimiter terminates the last row; it does not open an empty one.
        let ended_on_row_delimiter = row.len() == 1 && row.first() == Some(&chars.len());
        if !chars.is_empty() && !ended_on_row_delimiter {
            offsets.push(row);
        }
        self.offsets = offsets;
        let header: Vec<String> = (0..self.offsets.first().map_or(0, Vec::len))
            .map(|column| self.cell_text(0, column))
            .collect();
        self.header = header;
    }

    /// Text between the recorded boundaries of a field, against the live buffer.
    fn cell_text(&self, parsed_row: usize, column: usize) -> String {
        let len = self.raw.len_chars();
        let Some(fields) = self.offsets.get(parsed_row) else {
            return String::new();
        };
        let Some(&start) = fields.get(column) else {
            return String::new();
        };
        let end = if column + 1 < fields.len() {
            fields[column + 1].saturating_sub(self.delimiter_len())
        } else if let Some(next_row) = self.offsets.get(parsed_row + 1) {
            next_row
                .first()
                .copied()
                .unwrap_or(len)
                .saturating_sub(self.row_delimiter.char_len())
        } else {
            len
        };
        let start = start.min(len);
        let end = end.clamp(start, len);
        let text = self.raw.slice(start..end).to_string();
        // The last cell of the last row reaches the buffer end, which may still carry the
        // document's trailing row delimiter.
        match text.strip_suffix(self.row_delimiter.as_str()) {
            Some(stripped) => stripped.to_string(),
            None => text,
        }
    }
}
