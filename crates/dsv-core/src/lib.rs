#![warn(missing_docs)]
//! DSV Core - Headless Delimiter-Separated-Value Editing Engine
//!
//! # Overview
//!
//! `dsv-core` edits a DSV document by mutating its single underlying raw text buffer in
//! place — cell-by-cell, row-by-row, or column-by-column — instead of re-serializing the
//! whole table on every edit. It does not involve rendering, assuming an upper layer
//! provides a grid-based view driven through the [`GridModel`] capability trait.
//!
//! # Core Features
//!
//! - **In-place splicing**: every edit is a minimal-span delete-then-insert on the buffer
//! - **Offset geometry**: cell coordinates resolve to exact character offsets, with the
//!   first/last row and column boundary cases classified explicitly
//! - **Deferred re-parse**: each edit issues one fire-and-forget re-parse request; the
//!   offset index keeps answering pre-edit values until the request is completed
//! - **Header tracking**: the header region length is kept exactly in sync across column
//!   insertion and removal
//! - **Change Notifications**: one structured change event plus one raw-text mirror event
//!   per edit operation
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Edit Operations (EditableDsvModel)         │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Grid Adapter (GridModel trait)             │  ← Frontend contract
//! ├─────────────────────────────────────────────┤
//! │  Splice Engine (slice_out / insert_at)      │  ← Buffer mutation
//! ├─────────────────────────────────────────────┤
//! │  Geometry Resolver (offset math)            │  ← Cell → offset
//! ├─────────────────────────────────────────────┤
//! │  Parsed View (DsvModel, offset index)       │  ← Raw buffer + index
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use dsv_core::{DsvModelOptions, EditableDsvModel};
//!
//! let mut table =
//!     EditableDsvModel::from_options(DsvModelOptions::new("h1,h2\na,b\nc,d\n", ","));
//!
//! // Replace a cell value in place.
//! table.set_data(0, 1, "X").unwrap();
//! assert_eq!(table.model().raw_data(), "h1,h2\na,X\nc,d\n");
//!
//! // Complete the re-parse before a dependent edit.
//! table.resolve_parse();
//! table.add_row(1).unwrap();
//! assert_eq!(table.model().raw_data(), "h1,h2\na,X\n,\nc,d\n");
//! ```
//!
//! ## Subscribing to changes
//!
//! ```rust
//! use dsv_core::{DsvModelOptions, EditableDsvModel};
//!
//! let mut table = EditableDsvModel::from_options(DsvModelOptions::new("h1,h2\na,b\n", ","));
//! table.subscribe(|change| println!("grid changed: {:?}", change));
//! table.set_data(0, 0, "new").unwrap();
//! ```
//!
//! # Module Description
//!
//! - [`model`] - Parsed view: raw buffer, delimiters, and the derived offset index
//! - [`geometry`] - Pure offset math over cell coordinates
//! - [`splice`] - Buffer splice primitives
//! - [`edits`] - The public edit operations and the tracked header length
//! - [`change`] - Change notification types and callback plumbing
//! - [`grid`] - Grid data-model capability contract
//! - [`labels`] - Spreadsheet-style column labels
//! - [`row_delimiter`] - Row delimiter kinds and detection
//!
//! # Contract Notes
//!
//! Single-threaded, cooperative execution: callers serialize edits and complete the
//! outstanding re-parse before issuing a dependent edit. Cell values spliced in must not
//! themselves contain unescaped delimiter or row-delimiter sequences; the engine never
//! validates or interprets them.

pub mod change;
pub mod edits;
pub mod geometry;
pub mod grid;
pub mod labels;
pub mod model;
pub mod row_delimiter;
pub mod splice;

pub use change::{GridChange, GridChangeCallback, RawTextCallback};
pub use edits::{EditError, EditableDsvModel};
pub use geometry::CellCoords;
pub use grid::{CellKind, CellMetadata, GridModel, Region};
pub use labels::column_label;
pub use model::{DsvModel, DsvModelOptions};
pub use row_delimiter::RowDelimiter;
