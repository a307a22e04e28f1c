use crate::cell::Cell;
use crate::error::{TableError, TableResult};
use std::collections::HashMap;

/// An ordered sequence of cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Column {
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Cell> {
        self.cells.get(row)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl From<Vec<Cell>> for Column {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Column {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl std::ops::Index<usize> for Column {
    type Output = Cell;

    fn index(&self, row: usize) -> &Cell {
        &self.cells[row]
    }
}

/// Slug-keyed columnar table.
///
/// All columns are expected to share one row count and one row ordering (entity, then time). The
/// row count is fixed by the first column added. [`ColumnStore::set`] deliberately does not
/// enforce it: derived columns may legitimately come back shorter (see the rolling average
/// transform), and it is up to consumers to check [`Column::len`] against
/// [`ColumnStore::row_count`]. Loaders should prefer [`ColumnStore::insert_column`], which does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnStore {
    slugs: Vec<String>,
    column_index: HashMap<String, usize>,
    columns: Vec<Column>,
    row_count: Option<usize>,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.row_count.unwrap_or(0)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.column_index.contains_key(slug)
    }

    /// Slugs in insertion order.
    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    pub fn get(&self, slug: &str) -> Option<&Column> {
        let idx = *self.column_index.get(slug)?;
        self.columns.get(idx)
    }

    /// Stores `column` under `slug`, replacing any existing column with that slug.
    pub fn set(&mut self, slug: impl Into<String>, column: Column) {
        let slug = slug.into();
        if self.row_count.is_none() {
            self.row_count = Some(column.len());
        }
        match self.column_index.get(&slug) {
            Some(&idx) => self.columns[idx] = column,
            None => {
                let idx = self.columns.len();
                self.slugs.push(slug.clone());
                self.column_index.insert(slug, idx);
                self.columns.push(column);
            }
        }
    }

    /// Adds a new column, rejecting duplicate slugs and columns whose length differs from the
    /// table's row count.
    pub fn insert_column(&mut self, slug: impl Into<String>, column: Column) -> TableResult<()> {
        let slug = slug.into();
        if self.column_index.contains_key(&slug) {
            return Err(TableError::DuplicateColumn { column: slug });
        }
        if let Some(expected) = self.row_count {
            if column.len() != expected {
                return Err(TableError::ColumnLengthMismatch {
                    column: slug,
                    expected,
                    actual: column.len(),
                });
            }
        }
        self.set(slug, column);
        Ok(())
    }

    pub fn remove(&mut self, slug: &str) -> Option<Column> {
        let idx = self.column_index.remove(slug)?;
        self.slugs.remove(idx);
        let column = self.columns.remove(idx);
        for (pos, slug) in self.slugs.iter().enumerate().skip(idx) {
            if let Some(entry) = self.column_index.get_mut(slug) {
                *entry = pos;
            }
        }
        Some(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.slugs
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }
}

impl<S: Into<String>> FromIterator<(S, Column)> for ColumnStore {
    fn from_iter<I: IntoIterator<Item = (S, Column)>>(iter: I) -> Self {
        let mut store = ColumnStore::new();
        for (slug, column) in iter {
            store.set(slug, column);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvalidCell;

    fn column(values: &[f64]) -> Column {
        values.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut store = ColumnStore::new();
        store.set("a", column(&[1.0, 2.0]));
        store.set("b", column(&[3.0, 4.0]));
        store.set("a", column(&[5.0, 6.0]));

        assert_eq!(store.slugs(), ["a", "b"]);
        assert_eq!(store.get("a"), Some(&column(&[5.0, 6.0])));
        assert_eq!(store.row_count(), 2);
    }

    #[test]
    fn set_accepts_short_columns() {
        let mut store = ColumnStore::new();
        store.set("a", column(&[1.0, 2.0, 3.0]));
        store.set("avg", column(&[2.0]));

        assert_eq!(store.row_count(), 3);
        assert_eq!(store.get("avg").map(Column::len), Some(1));
    }

    #[test]
    fn insert_column_validates_length_and_duplicates() {
        let mut store = ColumnStore::new();
        store.insert_column("a", column(&[1.0, 2.0])).unwrap();

        let err = store.insert_column("a", column(&[1.0, 2.0])).unwrap_err();
        assert!(matches!(err, TableError::DuplicateColumn { .. }));

        let err = store
            .insert_column("b", Column::new(vec![InvalidCell::MissingValue.into()]))
            .unwrap_err();
        assert_eq!(
            err,
            TableError::ColumnLengthMismatch {
                column: "b".to_owned(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn remove_reindexes_later_columns() {
        let mut store: ColumnStore = [
            ("a", column(&[1.0])),
            ("b", column(&[2.0])),
            ("c", column(&[3.0])),
        ]
        .into_iter()
        .collect();

        assert_eq!(store.remove("a"), Some(column(&[1.0])));
        assert_eq!(store.slugs(), ["b", "c"]);
        assert_eq!(store.get("c"), Some(&column(&[3.0])));
        assert!(!store.contains("a"));
    }
}
