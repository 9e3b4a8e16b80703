//! Semantic containers for parsed tables.
//!
//! This module defines the canonical data structures produced by the text
//! parsers and consumed by the diff engine: a [`Row`] is an ordered mapping
//! from column name to cell value, and a [`Table`] is the header plus an
//! ordered sequence of rows. Both CSV and TSV inputs normalize to these
//! structures before diff operations.

mod row;
mod table;

pub use row::*;
pub use table::*;
