//! Derived columns for grapher tables.
//!
//! Column definitions may carry a transform directive such as `"percentChange day entity cases 7"`.
//! [`apply_transforms`] parses every directive into a typed [`Transform`], orders the definitions
//! so that a column is computed before anything that reads it, and writes each result into the
//! [`ColumnStore`](grapher_coretable::ColumnStore). Results use
//! [`InvalidCell`](grapher_coretable::InvalidCell) reasons (divide by zero, value too low, ...)
//! instead of failing; configuration problems are reported per definition and never abort the
//! batch.

#![forbid(unsafe_code)]

mod algorithms;
mod directive;
mod engine;
mod error;
mod groups;
mod registry;
mod schedule;
pub mod smoothing;
mod transform;

pub use crate::directive::Directive;
pub use crate::engine::{apply_transforms, Diagnostic, TransformReport};
pub use crate::error::{TransformError, TransformResult};
pub use crate::registry::TransformKind;
pub use crate::transform::{RatioParams, SeriesColumns, ThresholdParams, Transform, WindowParams};
