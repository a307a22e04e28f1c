//! Column store and invalid-cell model for grapher tables.
//!
//! A [`ColumnStore`] holds slug-keyed [`Column`]s of [`Cell`]s. Cells that carry no usable value
//! are [`Cell::Invalid`] with a specific [`InvalidCell`] reason, so "missing", "divide by zero" and
//! friends never masquerade as zero or empty text.

#![forbid(unsafe_code)]

mod cell;
mod def;
mod error;
mod store;

pub use crate::cell::{Cell, InvalidCell};
pub use crate::def::{ColumnDef, ColumnSlug};
pub use crate::error::{TableError, TableResult};
pub use crate::store::{Column, ColumnStore};
