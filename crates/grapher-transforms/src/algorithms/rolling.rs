use crate::error::{TransformError, TransformResult};
use crate::groups::{aligned_len, entity_runs, input};
use crate::smoothing::{compute_rolling_average, insert_missing_value_placeholders};
use crate::transform::SeriesColumns;
use grapher_coretable::{Column, ColumnStore};

/// Trailing moving average per entity.
///
/// Each entity's values are first spread over a contiguous integer time axis (missing steps become
/// placeholders), averaged, and then every invalid result is dropped. The output therefore only
/// contains valid averages and is usually shorter than the table; it is not realigned to rows.
pub(crate) fn rolling_average(
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

    let mut out = Vec::with_capacity(values.len());
    for run in entity_runs(entities) {
        let group_times = run
            .clone()
            .map(|row| {
                times[row].as_time().ok_or_else(|| TransformError::InvalidTime {
                    column: series.time.clone(),
                    row,
                    value: times[row].to_string(),
                })
            })
            .collect::<TransformResult<Vec<i64>>>()?;

        let filled = insert_missing_value_placeholders(&values.cells()[run.clone()], &group_times)
            .map_err(|err| TransformError::TimeGapTooLarge {
                column: series.time.clone(),
                row: run.start + err.index,
                gap: err.gap,
            })?;

        out.extend(
            compute_rolling_average(&filled, window_size)
                .into_iter()
                .filter(|cell| cell.is_valid()),
        );
    }
    Ok(Column::new(out))
}
