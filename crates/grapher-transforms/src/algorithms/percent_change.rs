use crate::error::TransformResult;
use crate::groups::{aligned_len, input};
use crate::transform::SeriesColumns;
use grapher_coretable::{Cell, Column, ColumnStore, InvalidCell};

/// Percent change of each value against the value `window_size` rows earlier.
///
/// The earlier row is a raw offset into the whole column, not into the entity's rows; the first row
/// of every entity after the first is reported as [`InvalidCell::NoValueToCompareAgainst`]. Assumes
/// one row per time step.
pub(crate) fn percent_change(
    store: &ColumnStore,
    series: &SeriesColumns,
    window_size: usize,
) -> TransformResult<Column> {
    let times = input(store, &series.time)?;
    let entities = input(store, &series.entity)?;
    let values = input(store, &series.value)?;
    aligned_len(&[
        (series.value.as_str(), values),
        (series.time.as_str(), times),
        (series.entity.as_str(), entities),
    ])?;

    let mut tracked = entities.get(0);
    Ok(values
        .iter()
        .zip(entities)
        .enumerate()
        .map(|(row, (current, entity))| {
            if tracked != Some(entity) {
                tracked = Some(entity);
                return Cell::Invalid(InvalidCell::NoValueToCompareAgainst);
            }
            let previous = row.checked_sub(window_size).map(|idx| &values[idx]);
            change(previous, current)
        })
        .collect())
}

fn change(previous: Option<&Cell>, current: &Cell) -> Cell {
    if let Some(reason) = previous.and_then(Cell::invalid_reason).or(current.invalid_reason()) {
        return Cell::Invalid(reason);
    }
    let Some(previous) = previous else {
        return Cell::Invalid(InvalidCell::NoValueToCompareAgainst);
    };
    match (previous.to_number(), current.to_number()) {
        (Ok(p), _) if p == 0.0 => Cell::Invalid(InvalidCell::DivideByZeroError),
        (Ok(p), Ok(c)) => Cell::from_f64(100.0 * (c - p) / p),
        (Err(reason), _) | (_, Err(reason)) => Cell::Invalid(reason),
    }
}
