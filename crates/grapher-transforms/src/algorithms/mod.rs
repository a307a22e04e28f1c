//! Transform algorithms.
//!
//! Every algorithm reads its input columns from the store and returns a fresh column. Inputs that
//! describe entity/time series must be sorted by entity, then time; the algorithms rely on that
//! order and never re-sort.

mod percent_change;
mod ratio;
mod rolling;
mod threshold;

pub(crate) use percent_change::percent_change;
pub(crate) use ratio::{as_percentage_of, divide_by};
pub(crate) use rolling::rolling_average;
pub(crate) use threshold::time_since_entity_exceeded_threshold;
