use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Reason attached to a cell that does not hold a usable value.
///
/// Invalid cells are first-class outputs: a transform that divides by zero produces
/// [`InvalidCell::DivideByZeroError`] rather than failing, and downstream consumers decide how to
/// render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidCell {
    /// The source had no value (or it could not be parsed).
    MissingValue,
    /// Inserted for a time step that had no row at all.
    MissingValuePlaceholder,
    /// A number failed a threshold comparison.
    ValueTooLow,
    /// The denominator was exactly zero.
    DivideByZeroError,
    /// There was no earlier valid value to compare against.
    NoValueToCompareAgainst,
    /// The source number was NaN or infinite.
    NaNButShouldBeNumber,
    /// A valid but non-numeric value was used where a number is required.
    TypeMismatch,
}

impl InvalidCell {
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidCell::MissingValue => "MissingValue",
            InvalidCell::MissingValuePlaceholder => "MissingValuePlaceholder",
            InvalidCell::ValueTooLow => "ValueTooLow",
            InvalidCell::DivideByZeroError => "DivideByZeroError",
            InvalidCell::NoValueToCompareAgainst => "NoValueToCompareAgainst",
            InvalidCell::NaNButShouldBeNumber => "NaNButShouldBeNumber",
            InvalidCell::TypeMismatch => "TypeMismatch",
        }
    }
}

impl fmt::Display for InvalidCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single value in a [`Column`](crate::Column).
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(Arc<str>),
    Invalid(InvalidCell),
}

impl Cell {
    /// Builds a number cell, mapping NaN and infinities to
    /// [`InvalidCell::NaNButShouldBeNumber`].
    pub fn from_f64(n: f64) -> Self {
        if n.is_finite() {
            Cell::Number(n)
        } else {
            Cell::Invalid(InvalidCell::NaNButShouldBeNumber)
        }
    }

    /// Interprets a raw source string the way a loader would: blank input is missing, anything
    /// that parses as a finite number is a number, everything else is text. Words such as `NaN`
    /// or `inf` stay text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Invalid(InvalidCell::MissingValue);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(Arc::from(raw)),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Cell::Invalid(_))
    }

    pub fn invalid_reason(&self) -> Option<InvalidCell> {
        match self {
            Cell::Invalid(reason) => Some(*reason),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of a cell for arithmetic: invalid cells keep their reason and text becomes
    /// [`InvalidCell::TypeMismatch`].
    pub fn to_number(&self) -> Result<f64, InvalidCell> {
        match self {
            Cell::Number(n) => Ok(*n),
            Cell::Text(_) => Err(InvalidCell::TypeMismatch),
            Cell::Invalid(reason) => Err(*reason),
        }
    }

    /// Integer time value. Fractional numbers are not times.
    pub fn as_time(&self) -> Option<i64> {
        let n = self.as_number()?;
        if n.fract() != 0.0 || n < i64::MIN as f64 || n > i64::MAX as f64 {
            return None;
        }
        Some(n as i64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::from_f64(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(Arc::from(value))
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(Arc::from(value))
    }
}

impl From<InvalidCell> for Cell {
    fn from(value: InvalidCell) -> Self {
        Cell::Invalid(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Invalid(reason) => write!(f, "<{reason}>"),
        }
    }
}
