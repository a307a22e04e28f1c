//! The fixed catalog of transforms a directive can name.

use crate::error::{TransformError, TransformResult};
use crate::transform::{RatioParams, SeriesColumns, ThresholdParams, Transform, WindowParams};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    AsPercentageOf,
    TimeSinceEntityExceededThreshold,
    DivideBy,
    RollingAverage,
    PercentChange,
}

impl TransformKind {
    /// Every registered transform, in catalog order.
    pub const ALL: [TransformKind; 5] = [
        TransformKind::AsPercentageOf,
        TransformKind::TimeSinceEntityExceededThreshold,
        TransformKind::DivideBy,
        TransformKind::RollingAverage,
        TransformKind::PercentChange,
    ];

    /// Directive name of the transform. Names are case-sensitive.
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::AsPercentageOf => "asPercentageOf",
            TransformKind::TimeSinceEntityExceededThreshold => "timeSinceEntityExceededThreshold",
            TransformKind::DivideBy => "divideBy",
            TransformKind::RollingAverage => "rollingAverage",
            TransformKind::PercentChange => "percentChange",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(TransformKind::name)
    }

    /// Positional parameter names, space separated.
    pub fn signature(self) -> &'static str {
        match self {
            TransformKind::AsPercentageOf | TransformKind::DivideBy => "numerator denominator",
            TransformKind::TimeSinceEntityExceededThreshold => "time entity column threshold",
            TransformKind::RollingAverage | TransformKind::PercentChange => {
                "time entity column windowSize"
            }
        }
    }

    fn arity(self) -> usize {
        self.signature().split(' ').count()
    }

    /// Validates positional parameters and builds the typed transform.
    pub fn bind<S: AsRef<str>>(self, params: &[S]) -> TransformResult<Transform> {
        if params.len() != self.arity() {
            return Err(TransformError::Arity {
                transform: self.name(),
                signature: self.signature(),
                expected: self.arity(),
                actual: params.len(),
            });
        }
        let p = |idx: usize| params[idx].as_ref().to_owned();

        Ok(match self {
            TransformKind::AsPercentageOf => Transform::AsPercentageOf(RatioParams {
                numerator: p(0),
                denominator: p(1),
            }),
            TransformKind::DivideBy => Transform::DivideBy(RatioParams {
                numerator: p(0),
                denominator: p(1),
            }),
            TransformKind::TimeSinceEntityExceededThreshold => {
                Transform::TimeSinceEntityExceededThreshold(ThresholdParams {
                    series: SeriesColumns::new(p(0), p(1), p(2)),
                    threshold: self.parse_threshold(params[3].as_ref())?,
                })
            }
            TransformKind::RollingAverage => Transform::RollingAverage(WindowParams {
                series: SeriesColumns::new(p(0), p(1), p(2)),
                window_size: self.parse_window_size(params[3].as_ref())?,
            }),
            TransformKind::PercentChange => Transform::PercentChange(WindowParams {
                series: SeriesColumns::new(p(0), p(1), p(2)),
                window_size: self.parse_window_size(params[3].as_ref())?,
            }),
        })
    }

    fn parse_threshold(self, raw: &str) -> TransformResult<f64> {
        match raw.parse::<f64>() {
            Ok(threshold) if threshold.is_finite() => Ok(threshold),
            _ => Err(TransformError::InvalidParameter {
                transform: self.name(),
                parameter: "threshold",
                value: raw.to_owned(),
                reason: "expected a finite number",
            }),
        }
    }

    fn parse_window_size(self, raw: &str) -> TransformResult<usize> {
        match raw.parse::<usize>() {
            Ok(window) if window >= 1 => Ok(window),
            _ => Err(TransformError::InvalidParameter {
                transform: self.name(),
                parameter: "windowSize",
                value: raw.to_owned(),
                reason: "expected a positive integer",
            }),
        }
    }
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
