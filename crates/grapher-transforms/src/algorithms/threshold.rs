use crate::error::TransformResult;
use crate::groups::{aligned_len, entity_runs, input};
use crate::transform::SeriesColumns;
use grapher_coretable::{Cell, Column, ColumnStore, InvalidCell};

/// For each row, the time at which the row's entity first reached `threshold`.
///
/// Until an entity crosses, each row is checked on its own: an invalid value yields its reason and
/// a value below the threshold yields [`InvalidCell::ValueTooLow`]. Once it has crossed, every
/// later row of that entity repeats the crossing time without looking at its value.
pub(crate) fn time_since_entity_exceeded_threshold(
    store: &ColumnStore,
    series: &SeriesColumns,
    threshold: f64,
) -> TransformResult<Column> {
    let times = input(store, &series.time)?;
    let entities = input(store, &series.entity)?;
    let values = input(store, &series.value)?;
    aligned_len(&[
        (series.value.as_str(), values),
        (series.time.as_str(), times),
        (series.entity.as_str(), entities),
    ])?;

    let mut out = Vec::with_capacity(values.len());
    for run in entity_runs(entities) {
        let mut crossed_at: Option<&Cell> = None;
        for row in run {
            if let Some(time) = crossed_at {
                out.push(time.clone());
                continue;
            }
            let cell = match values[row].to_number() {
                Err(reason) => Cell::Invalid(reason),
                Ok(value) if value < threshold => Cell::Invalid(InvalidCell::ValueTooLow),
                Ok(_) => {
                    crossed_at = Some(&times[row]);
                    times[row].clone()
                }
            };
            out.push(cell);
        }
    }
    Ok(Column::new(out))
}
