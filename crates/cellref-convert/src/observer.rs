//! Diagnostic hook for formula conversion

use crate::formula::Dialect;

/// Receives the intermediate values of a formula conversion
///
/// All methods default to doing nothing. `()` is the silent observer used
/// by [`convert_formula_to_a1`](crate::convert_formula_to_a1).
pub trait ConversionObserver {
    /// Called once with the untouched input formula
    fn formula_received(&mut self, _dialect: Dialect, _formula: &str) {}

    /// Called for each rewritten reference, rightmost first within a segment
    fn reference_converted(&mut self, _r1c1: &str, _a1: &str) {}

    /// Called once with the fully converted formula
    fn formula_converted(&mut self, _formula: &str) {}
}

impl ConversionObserver for () {}

/// Forwards conversion events to the `log` facade at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ConversionObserver for LogObserver {
    fn formula_received(&mut self, dialect: Dialect, formula: &str) {
        log::debug!(target: "cellref::formula", "{dialect:?} formula value is {formula}");
    }

    fn reference_converted(&mut self, r1c1: &str, a1: &str) {
        log::debug!(target: "cellref::formula", "{r1c1} -> {a1}");
    }

    fn formula_converted(&mut self, formula: &str) {
        log::debug!(target: "cellref::formula", "A1 formula value is {formula}");
    }
}
