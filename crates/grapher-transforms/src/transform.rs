use crate::algorithms;
use crate::error::TransformResult;
use crate::registry::TransformKind;
use grapher_coretable::{Column, ColumnSlug, ColumnStore};

/// Columns describing an entity/time series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesColumns {
    pub time: ColumnSlug,
    pub entity: ColumnSlug,
    pub value: ColumnSlug,
}

impl SeriesColumns {
    pub fn new(time: ColumnSlug, entity: ColumnSlug, value: ColumnSlug) -> Self {
        Self {
            time,
            entity,
            value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatioParams {
    pub numerator: ColumnSlug,
    pub denominator: ColumnSlug,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdParams {
    pub series: SeriesColumns,
    pub threshold: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowParams {
    pub series: SeriesColumns,
    pub window_size: usize,
}

/// A transform with validated, typed parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
    AsPercentageOf(RatioParams),
    TimeSinceEntityExceededThreshold(ThresholdParams),
    DivideBy(RatioParams),
    RollingAverage(WindowParams),
    PercentChange(WindowParams),
}

impl Transform {
    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::AsPercentageOf(_) => TransformKind::AsPercentageOf,
            Transform::TimeSinceEntityExceededThreshold(_) => {
                TransformKind::TimeSinceEntityExceededThreshold
            }
            Transform::DivideBy(_) => TransformKind::DivideBy,
            Transform::RollingAverage(_) => TransformKind::RollingAverage,
            Transform::PercentChange(_) => TransformKind::PercentChange,
        }
    }

    /// Slugs of the columns this transform reads.
    pub fn input_columns(&self) -> Vec<&str> {
        match self {
            Transform::AsPercentageOf(p) | Transform::DivideBy(p) => {
                vec![p.numerator.as_str(), p.denominator.as_str()]
            }
            Transform::TimeSinceEntityExceededThreshold(ThresholdParams { series, .. })
            | Transform::RollingAverage(WindowParams { series, .. })
            | Transform::PercentChange(WindowParams { series, .. }) => vec![
                series.time.as_str(),
                series.entity.as_str(),
                series.value.as_str(),
            ],
        }
    }

    /// Computes the derived column. The store is only read.
    pub fn apply(&self, store: &ColumnStore) -> TransformResult<Column> {
        match self {
            Transform::AsPercentageOf(p) => {
                algorithms::as_percentage_of(store, &p.numerator, &p.denominator)
            }
            Transform::DivideBy(p) => algorithms::divide_by(store, &p.numerator, &p.denominator),
            Transform::TimeSinceEntityExceededThreshold(p) => {
                algorithms::time_since_entity_exceeded_threshold(store, &p.series, p.threshold)
            }
            Transform::RollingAverage(p) => {
                algorithms::rolling_average(store, &p.series, p.window_size)
            }
            Transform::PercentChange(p) => {
                algorithms::percent_change(store, &p.series, p.window_size)
            }
        }
    }
}

impl std::str::FromStr for Transform {
    type Err = crate::error::TransformError;

    fn from_str(directive: &str) -> Result<Self, Self::Err> {
        crate::directive::Directive::parse(directive)?.bind()
    }
}
