//! Gap filling and moving averages over a single entity's time series.

use grapher_coretable::{Cell, InvalidCell};

/// Largest number of cells a gap-filled series may hold once a gap has been filled.
pub const MAX_GAP_FILL: u64 = 1_000_000;

/// Filling the gap before `index` would grow the series past [`MAX_GAP_FILL`] cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GapTooLarge {
    /// Index (into the input) of the value after the gap.
    pub index: usize,
    pub gap: u64,
}

/// Expands `values` so that each integer step between `times[0]` and the last time has one cell,
/// inserting [`InvalidCell::MissingValuePlaceholder`] for steps without a value.
///
/// Times are expected to increase. A time that does not move forward from the previous one is
/// appended as-is without placeholders. The limit applies to the filled series as a whole, so many
/// small gaps are rejected as soon as their placeholders add up past it.
pub fn insert_missing_value_placeholders(
    values: &[Cell],
    times: &[i64],
) -> Result<Vec<Cell>, GapTooLarge> {
    let mut out = Vec::with_capacity(values.len());
    let Some(&first) = times.first() else {
        return Ok(out);
    };

    let mut expected = first;
    for (index, (value, &time)) in values.iter().zip(times).enumerate() {
        if time > expected {
            let gap = time.abs_diff(expected);
            if out.len() as u64 + gap > MAX_GAP_FILL {
                return Err(GapTooLarge { index, gap });
            }
            out.extend(
                std::iter::repeat(Cell::Invalid(InvalidCell::MissingValuePlaceholder))
                    .take(gap as usize),
            );
        }
        out.push(value.clone());
        expected = time.saturating_add(1);
    }
    Ok(out)
}

/// Trailing moving average of `cells` over `window_size` positions.
///
/// Invalid cells keep their reason in the output and text becomes
/// [`InvalidCell::TypeMismatch`]. Every valid number is replaced by the mean of the valid numbers
/// among itself and the `window_size - 1` positions before it.
pub fn compute_rolling_average(cells: &[Cell], window_size: usize) -> Vec<Cell> {
    let before = window_size.max(1) - 1;

    cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if let Err(reason) = cell.to_number() {
                return Cell::Invalid(reason);
            }
            let start = idx.saturating_sub(before);

            let (sum, count) = cells[start..=idx]
                .iter()
                .filter_map(Cell::as_number)
                .fold((0.0, 0usize), |(sum, count), n| (sum + n, count + 1));
            Cell::from_f64(sum / count as f64)
        })
        .collect()
}
