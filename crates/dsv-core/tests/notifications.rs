//! Change notification stream behavior.
//!
//! Every public operation must fire exactly one structural change and one raw-text mirror
//! notification, synchronously, after the splice and the re-parse request.

use dsv_core::{DsvModelOptions, EditableDsvModel, GridChange, Region};
use std::sync::{Arc, Mutex};

fn table(data: &str) -> EditableDsvModel {
    EditableDsvModel::from_options(DsvModelOptions::new(data, ","))
}

#[test]
fn test_one_change_per_operation() {
    let mut table = table("h1,h2\na,b\nc,d\n");
    let changes: Arc<Mutex<Vec<GridChange>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    table.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    table.set_data(0, 1, "X").unwrap();
    table.resolve_parse();
    table.add_row(1).unwrap();
    table.resolve_parse();
    table.add_column(1).unwrap();
    table.resolve_parse();
    table.remove_row(1).unwrap();
    table.resolve_parse();
    table.remove_column(1).unwrap();
    table.resolve_parse();

    let changes = changes.lock().unwrap();
    assert_eq!(
        *changes,
        [
            GridChange::CellsChanged {
                region: Region::Body,
                row: 0,
                column: 1,
                row_span: 1,
                column_span: 1,
            },
            GridChange::RowsInserted {
                region: Region::Body,
                index: 1,
                span: 1,
            },
            GridChange::ColumnsInserted {
                region: Region::Body,
                index: 1,
                span: 1,
            },
            GridChange::RowsRemoved {
                region: Region::Body,
                index: 1,
                span: 1,
            },
            GridChange::ColumnsRemoved {
                region: Region::Body,
                index: 1,
                span: 1,
            },
        ]
    );
}

#[test]
fn test_raw_mirror_carries_body_tail() {
    let mut table = table("h1,h2\na,b\nc,d\n");
    let tails: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&tails);
    table.subscribe_raw(move |tail| sink.lock().unwrap().push(tail.to_string()));

    table.set_data(0, 1, "X").unwrap();
    table.resolve_parse();
    table.add_row(1).unwrap();

    let tails = tails.lock().unwrap();
    assert_eq!(*tails, ["a,X\nc,d\n", "a,X\n,\nc,d\n"]);
}

#[test]
fn test_failed_edit_emits_nothing() {
    let mut table = table("h1,h2\na,b\n");
    let count = Arc::new(Mutex::new(0usize));
    let changes = Arc::clone(&count);
    let raws = Arc::clone(&count);
    table.subscribe(move |_| *changes.lock().unwrap() += 1);
    table.subscribe_raw(move |_| *raws.lock().unwrap() += 1);

    assert!(table.set_data(9, 9, "x").is_err());
    assert_eq!(*count.lock().unwrap(), 0);

    table.set_data(0, 0, "x").unwrap();
    assert_eq!(*count.lock().unwrap(), 2);
}

#[test]
fn test_notifications_fire_before_parse_resolution() {
    let mut table = table("h1,h2\na,b\n");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    table.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    table.add_row(0).unwrap();
    // The change was emitted while the re-parse request is still outstanding.
    assert!(table.model().parse_pending());
    assert_eq!(seen.lock().unwrap().len(), 1);
}
