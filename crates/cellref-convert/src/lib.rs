//! # cellref-convert
//!
//! Conversion between A1 and R1C1 cell reference notation.
//!
//! This crate provides:
//! - Single reference conversion in both directions
//! - Formula rewriting from embedded R1C1 references to A1
//! - Typed R1C1 / A1 reference parsing
//! - An observer hook for tracing formula conversion
//!
//! All operations are pure functions of their arguments and can be called
//! from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use cellref_convert::{convert_formula_to_a1, convert_to_a1, convert_to_r1c1};
//! use cellref_core::CellPosition;
//!
//! assert_eq!(convert_to_a1("R[-1]C[2]", CellPosition::new(10, 5)).unwrap(), "G9");
//! assert_eq!(convert_to_r1c1("$B$7", Some(7), Some(2)).unwrap(), "RC");
//! assert_eq!(
//!     convert_formula_to_a1("=R1C1+\"R2C2\"", CellPosition::default()).unwrap(),
//!     "=A1+\"R2C2\""
//! );
//! ```

pub mod address;
pub mod error;
pub mod formula;
pub mod observer;
pub mod reference;

pub use address::{convert_to_a1, convert_to_r1c1};
pub use error::{ConvertError, ConvertResult, Notation};
pub use formula::{
    convert_formula_to_a1, convert_formula_to_a1_with, find_references, join_segments,
    split_segments, Dialect, ReferenceMatch, Segment,
};
pub use observer::{ConversionObserver, LogObserver};
pub use reference::{parse_a1, AxisRef, R1C1Reference};
