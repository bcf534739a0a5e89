//! Formula rewriting
//!
//! A formula is split on `"` into alternating unquoted and quoted segments.
//! Only unquoted segments are rewritten; string literals are copied through
//! byte for byte and the segments are joined back with `"`.

use crate::address::convert_to_a1;
use crate::error::ConvertResult;
use crate::observer::ConversionObserver;
use cellref_core::CellPosition;
use lazy_regex::regex;
use std::borrow::Cow;

const QUOTE: char = '"';

/// Formula dialect, chosen from the formula prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// OpenDocument formula (`of:=[.A1]+[.B2]`)
    ///
    /// References are already A1-style inside `[.` `]` markers. Conversion
    /// just strips the prefix and the markers.
    OpenFormula,
    /// Formula with embedded R1C1 references (the default)
    R1C1,
}

impl Dialect {
    /// Prefix marking an OpenDocument formula (case-sensitive)
    pub const OPEN_FORMULA_PREFIX: &'static str = "of:";

    /// Detect the dialect of a formula
    pub fn detect(formula: &str) -> Self {
        if formula.starts_with(Self::OPEN_FORMULA_PREFIX) {
            Dialect::OpenFormula
        } else {
            Dialect::R1C1
        }
    }
}

/// A run of formula text between quote characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Formula code, subject to rewriting
    Unquoted(&'a str),
    /// Contents of a string literal, left verbatim
    Quoted(&'a str),
}

impl<'a> Segment<'a> {
    /// The segment text, without the surrounding quotes
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Unquoted(text) | Segment::Quoted(text) => text,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, Segment::Quoted(_))
    }
}

/// Split a formula on `"` into alternating segments
///
/// The first segment is always unquoted (possibly empty). A formula with
/// `n` quote characters yields `n + 1` segments.
pub fn split_segments(formula: &str) -> Vec<Segment<'_>> {
    formula
        .split(QUOTE)
        .enumerate()
        .map(|(i, text)| {
            if i % 2 == 0 {
                Segment::Unquoted(text)
            } else {
                Segment::Quoted(text)
            }
        })
        .collect()
}

/// Join segments back into a formula, inverse of [`split_segments`]
pub fn join_segments(segments: &[Segment<'_>]) -> String {
    let texts: Vec<&str> = segments.iter().map(Segment::text).collect();
    join_on_quotes(&texts)
}

fn join_on_quotes<S: AsRef<str>>(parts: &[S]) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push(QUOTE);
        }
        joined.push_str(part.as_ref());
    }
    joined
}

/// An R1C1 reference found inside a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceMatch<'a> {
    /// Byte offset of the match within the segment
    pub start: usize,
    /// The matched reference text
    pub text: &'a str,
}

impl ReferenceMatch<'_> {
    /// Byte offset one past the end of the match
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Find every R1C1 reference in a piece of unquoted formula text
///
/// Matches are returned left to right and never overlap. A candidate that
/// is glued to an identifier character on either side, or directly followed
/// by `(`, is part of a name (`SEARCH(`, `ARC1`) and is skipped.
///
/// This is deliberately stricter than a plain scan for the R1C1 grammar,
/// which would also rewrite the `RC` inside `SEARCH(`.
pub fn find_references(segment: &str) -> Vec<ReferenceMatch<'_>> {
    let re = regex!(r"(?i)R(\[(?:-?[0-9]+)?\]|[0-9]*)C(\[(?:-?[0-9]+)?\]|[0-9]*)");

    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(m) = re.find_at(segment, pos) {
        if is_standalone(segment, &m) {
            log::trace!("R1C1 reference '{}' at offset {}", m.as_str(), m.start());
            found.push(ReferenceMatch {
                start: m.start(),
                text: m.as_str(),
            });
            pos = m.end();
        } else {
            // Matches start with an ASCII `R`, so +1 stays on a char boundary
            pos = m.start() + 1;
        }
    }
    found
}

fn is_standalone(segment: &str, m: &regex::Match<'_>) -> bool {
    let bytes = segment.as_bytes();
    let before = m.start().checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(m.end()).copied();

    !before.is_some_and(is_identifier_byte)
        && !after.is_some_and(|b| is_identifier_byte(b) || b == b'(')
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Rewrite every R1C1 reference in one unquoted segment
///
/// Offsets are collected first and replacements applied right to left, so
/// a replacement never shifts a match that is still pending.
fn rewrite_references<'a, O>(
    segment: &'a str,
    anchor: CellPosition,
    observer: &mut O,
) -> ConvertResult<Cow<'a, str>>
where
    O: ConversionObserver + ?Sized,
{
    let matches = find_references(segment);
    if matches.is_empty() {
        return Ok(Cow::Borrowed(segment));
    }

    let mut rewritten = segment.to_string();
    for found in matches.iter().rev() {
        let a1 = convert_to_a1(found.text, anchor)?;
        observer.reference_converted(found.text, &a1);
        rewritten.replace_range(found.start..found.end(), &a1);
    }
    Ok(Cow::Owned(rewritten))
}

/// Remove OpenDocument reference markers: `[.`, then `.`, then `]`
fn strip_open_formula_markers(segment: &str) -> String {
    segment.replace("[.", "").replace('.', "").replace(']', "")
}

/// Convert a formula with embedded R1C1 references to A1 notation
///
/// Text inside string literals is never touched. The first invalid
/// reference aborts the conversion with its error.
///
/// # Example
/// ```rust
/// use cellref_convert::convert_formula_to_a1;
/// use cellref_core::CellPosition;
///
/// let a1 = convert_formula_to_a1("=R1C1+\"R2C2\"", CellPosition::default()).unwrap();
/// assert_eq!(a1, "=A1+\"R2C2\"");
///
/// let a1 = convert_formula_to_a1("=SUM(R[-2]C:R[-1]C)", CellPosition::new(3, 2)).unwrap();
/// assert_eq!(a1, "=SUM(B1:B2)");
/// ```
pub fn convert_formula_to_a1(formula: &str, anchor: CellPosition) -> ConvertResult<String> {
    convert_formula_to_a1_with(formula, anchor, &mut ())
}

/// Like [`convert_formula_to_a1`], reporting progress to `observer`
pub fn convert_formula_to_a1_with<O>(
    formula: &str,
    anchor: CellPosition,
    observer: &mut O,
) -> ConvertResult<String>
where
    O: ConversionObserver + ?Sized,
{
    let dialect = Dialect::detect(formula);
    observer.formula_received(dialect, formula);

    let body = match dialect {
        Dialect::OpenFormula => formula
            .strip_prefix(Dialect::OPEN_FORMULA_PREFIX)
            .unwrap_or(formula),
        Dialect::R1C1 => formula,
    };

    let segments = split_segments(body);
    let mut rewritten: Vec<Cow<'_, str>> = Vec::with_capacity(segments.len());
    for segment in &segments {
        let text = match (dialect, *segment) {
            (_, Segment::Quoted(text)) => Cow::Borrowed(text),
            (Dialect::OpenFormula, Segment::Unquoted(text)) => {
                Cow::Owned(strip_open_formula_markers(text))
            }
            (Dialect::R1C1, Segment::Unquoted(text)) => {
                rewrite_references(text, anchor, observer)?
            }
        };
        rewritten.push(text);
    }

    let converted = join_on_quotes(&rewritten);
    observer.formula_converted(&converted);
    Ok(converted)
}
