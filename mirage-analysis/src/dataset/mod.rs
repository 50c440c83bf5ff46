//! Column-oriented dataset model consumed by the ground-truth engine.

pub mod types;

pub use types::{Column, ColumnValues, Dataset};
