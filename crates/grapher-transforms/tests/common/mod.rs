#![allow(dead_code)]

use grapher_coretable::{Cell, Column, ColumnDef, ColumnStore, InvalidCell};
use grapher_transforms::{apply_transforms, TransformReport};

pub fn nums(values: &[f64]) -> Column {
    values.iter().copied().map(Cell::from).collect()
}

pub fn texts(values: &[&str]) -> Column {
    values.iter().copied().map(Cell::from).collect()
}

pub fn invalid(reason: InvalidCell) -> Cell {
    Cell::Invalid(reason)
}

/// A store with `entity`, `day` and `value` columns.
pub fn series(entities: &[&str], days: &[f64], values: Vec<Cell>) -> ColumnStore {
    let mut store = ColumnStore::new();
    store.insert_column("entity", texts(entities)).unwrap();
    store.insert_column("day", nums(days)).unwrap();
    store.insert_column("value", Column::new(values)).unwrap();
    store
}

/// Applies a single directive writing to `out` and returns the resulting column.
pub fn run(store: &mut ColumnStore, directive: &str) -> (Option<Column>, TransformReport) {
    let report = apply_transforms(store, &[ColumnDef::with_transform("out", directive)]);
    (store.get("out").cloned(), report)
}
