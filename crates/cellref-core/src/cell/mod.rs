//! Cell addressing primitives
//!
//! This module contains:
//! - [`CellPosition`] - A 1-based (row, column) pair
//! - [`column_index`] / [`column_letters`] - Column letter conversion

mod column;
mod position;

pub use column::{column_index, column_letters};
pub use position::CellPosition;
