use crate::error::{TransformError, TransformResult};
use grapher_coretable::{Cell, Column, ColumnStore};
use std::ops::Range;

pub(crate) fn input<'a>(store: &'a ColumnStore, slug: &str) -> TransformResult<&'a Column> {
    store
        .get(slug)
        .ok_or_else(|| TransformError::UnknownColumn(slug.to_owned()))
}

/// Checks that every input column has the same length as the first and returns that length.
pub(crate) fn aligned_len(columns: &[(&str, &Column)]) -> TransformResult<usize> {
    let Some((_, first)) = columns.first() else {
        return Ok(0);
    };
    let expected = first.len();
    for (slug, column) in columns {
        if column.len() != expected {
            return Err(TransformError::ColumnLengthMismatch {
                column: (*slug).to_owned(),
                expected,
                actual: column.len(),
            });
        }
    }
    Ok(expected)
}

/// Row ranges of contiguous runs of equal entity cells.
///
/// Rows are assumed sorted by entity; an entity that reappears later starts a new run.
pub(crate) fn entity_runs(entities: &Column) -> EntityRuns<'_> {
    EntityRuns {
        cells: entities.cells(),
        start: 0,
    }
}

pub(crate) struct EntityRuns<'a> {
    cells: &'a [Cell],
    start: usize,
}

impl Iterator for EntityRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let first = self.cells.get(self.start)?;
        let len = self.cells[self.start..]
            .iter()
            .take_while(|cell| *cell == first)
            .count();
        let run = self.start..self.start + len;
        self.start = run.end;
        Some(run)
    }
}
