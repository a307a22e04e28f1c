use crate::error::TransformResult;
use crate::groups::{aligned_len, input};
use grapher_coretable::{Cell, Column, ColumnStore, InvalidCell};

pub(crate) fn divide_by(
    store: &ColumnStore,
    numerator: &str,
    denominator: &str,
) -> TransformResult<Column> {
    let numerators = input(store, numerator)?;
    let denominators = input(store, denominator)?;
    aligned_len(&[(numerator, numerators), (denominator, denominators)])?;

    Ok(numerators
        .iter()
        .zip(denominators)
        .map(|(n, d)| ratio(n, d))
        .collect())
}

pub(crate) fn as_percentage_of(
    store: &ColumnStore,
    numerator: &str,
    denominator: &str,
) -> TransformResult<Column> {
    Ok(divide_by(store, numerator, denominator)?
        .into_cells()
        .into_iter()
        .map(|cell| match cell {
            Cell::Number(n) => Cell::from_f64(100.0 * n),
            other => other,
        })
        .collect())
}

// A zero denominator wins over an invalid numerator; the numerator's reason wins over the
// denominator's.
fn ratio(numerator: &Cell, denominator: &Cell) -> Cell {
    if matches!(denominator, Cell::Number(d) if *d == 0.0) {
        return Cell::Invalid(InvalidCell::DivideByZeroError);
    }
    if let Some(reason) = numerator.invalid_reason().or(denominator.invalid_reason()) {
        return Cell::Invalid(reason);
    }
    match (numerator.to_number(), denominator.to_number()) {
        (Ok(n), Ok(d)) => Cell::from_f64(n / d),
        (Err(reason), _) | (_, Err(reason)) => Cell::Invalid(reason),
    }
}
