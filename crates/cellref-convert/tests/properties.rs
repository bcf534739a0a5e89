// Property-based tests for reference and formula conversion.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use cellref_convert::{
    convert_formula_to_a1, convert_to_a1, convert_to_r1c1, find_references, split_segments,
    Segment,
};
use cellref_core::{column_letters, CellPosition};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Any position the A1 grammar can express (3 letters, 7 digits)
fn arb_position() -> impl Strategy<Value = CellPosition> {
    (1u32..=9_999_999, 1u32..=18_278).prop_map(|(row, col)| CellPosition::new(row, col))
}

/// A1 text for a position, with `$` anchors sprinkled in
fn arb_a1() -> impl Strategy<Value = (CellPosition, String)> {
    (arb_position(), any::<bool>(), any::<bool>()).prop_map(|(pos, col_abs, row_abs)| {
        let letters = column_letters(pos.col).unwrap();
        let text = format!(
            "{}{}{}{}",
            if col_abs { "$" } else { "" },
            letters,
            if row_abs { "$" } else { "" },
            pos.row
        );
        (pos, text)
    })
}

/// Formula pieces, joined with operators so references never touch
fn arb_formula() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("R1C1".to_string()),
        Just("RC".to_string()),
        Just("R[1]C[-1]".to_string()),
        Just("rc[1]".to_string()),
        Just("\"".to_string()),
        Just("\"R2C2\"".to_string()),
        Just("SUM(".to_string()),
        Just(")".to_string()),
        Just("A1".to_string()),
        Just("2.5".to_string()),
        r"[a-z ]{0,6}",
    ];
    prop::collection::vec(piece, 0..12).prop_map(|pieces| format!("={}", pieces.join("+")))
}

fn arb_anchor() -> impl Strategy<Value = CellPosition> {
    (2u32..=500, 2u32..=500).prop_map(|(row, col)| CellPosition::new(row, col))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn a1_round_trips_through_relative_r1c1(
        (pos, a1) in arb_a1(),
        anchor in arb_position(),
    ) {
        let r1c1 = convert_to_r1c1(&a1, Some(anchor.row), Some(anchor.col)).unwrap();
        let back = convert_to_a1(&r1c1, anchor).unwrap();
        prop_assert_eq!(back, pos.to_a1_string().unwrap());
    }

    #[test]
    fn a1_round_trips_through_absolute_r1c1((pos, a1) in arb_a1()) {
        let r1c1 = convert_to_r1c1(&a1, None, None).unwrap();
        prop_assert_eq!(&r1c1, &pos.to_string());
        let back = convert_to_a1(&r1c1, CellPosition::default()).unwrap();
        prop_assert_eq!(back, pos.to_a1_string().unwrap());
    }

    #[test]
    fn formula_keeps_quote_count(formula in arb_formula(), anchor in arb_anchor()) {
        let converted = convert_formula_to_a1(&formula, anchor).unwrap();
        prop_assert_eq!(
            converted.matches('"').count(),
            formula.matches('"').count()
        );
    }

    #[test]
    fn formula_conversion_is_idempotent(formula in arb_formula(), anchor in arb_anchor()) {
        let once = convert_formula_to_a1(&formula, anchor).unwrap();
        // Output columns such as 471 ("RC") can read as R1C1 again
        prop_assume!(split_segments(&once).iter().all(|segment| match segment {
            Segment::Unquoted(text) => find_references(text).is_empty(),
            Segment::Quoted(_) => true,
        }));
        let twice = convert_formula_to_a1(&once, anchor).unwrap();
        prop_assert_eq!(twice, once);
    }
}
