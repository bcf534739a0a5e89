//! # cellref-core
//!
//! Core addressing types for the cellref conversion library.
//!
//! This crate provides the primitives the converters are built on:
//! - [`CellPosition`] - A 1-based row/column pair, used as anchor and result
//! - [`column_index`] - Column letters to a 1-based index (`"AA"` → 27)
//! - [`column_letters`] - The inverse (`27` → `"AA"`)
//!
//! ## Example
//!
//! ```rust
//! use cellref_core::{column_index, column_letters, CellPosition};
//!
//! assert_eq!(column_index("C").unwrap(), 3);
//! assert_eq!(column_letters(3).unwrap(), "C");
//! assert_eq!(CellPosition::new(2, 3).to_a1_string().unwrap(), "C2");
//! ```

pub mod cell;
pub mod error;

// Re-exports for convenience
pub use cell::{column_index, column_letters, CellPosition};
pub use error::{Error, Result};
