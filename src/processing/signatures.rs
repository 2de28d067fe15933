//! The static signature table: the memoized fast path of digit recognition.
//!
//! Each digit has one canonical template describing its left-most alignment,
//! given as the three sampled scan lines of the glyph. For a zero the full
//! glyph and its sampled rows (marked) look like:
//!
//! ```text
//! 0000000000000000
//! 0001111111110000  <- top
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000  <- middle
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000
//! 0011000000011000  <- low
//! 0001111111110000
//! 0000000000000000
//! ```
//!
//! Digits may be rendered up to two pixels right of the canonical position,
//! so every template is also registered shifted right by one and two pixels.
//! A lookup hit never engages the fallback classifier or telemetry.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::GLYPH_WIDTH;

/// Number of horizontal alignments registered per template: the canonical
/// position plus right shifts of one and two pixels.
pub const SHIFT_OFFSETS: usize = 3;

/// Canonical (top, middle, low) row templates, indexed by digit value.
const DIGIT_TEMPLATES: [[&str; 3]; 10] = [
    ["0001111111110000", "0011000000011000", "0011000000011000"], // 0
    ["0011111100000000", "0000001100000000", "0000001100011000"], // 1
    ["0011111111110000", "0000000000011000", "0011000000000000"], // 2
    ["0011111111110000", "0000000000011000", "0000000000011000"], // 3
    ["0001100000000000", "0001100000110000", "0000000000110000"], // 4
    ["0001111111110000", "0001100000000000", "0000000000110000"], // 5
    ["0011100000000000", "0011000000000000", "0011000000011000"], // 6
    ["0011111111111000", "0000000000011000", "0000001100000000"], // 7
    ["0000111111100000", "0000110001100000", "0011000000011000"], // 8
    ["0011111111111000", "0011000000011000", "0000000000011000"], // 9
];

/// The three scan-line templates for `digit`, left-most alignment.
pub fn template_rows(digit: u8) -> [&'static str; 3] {
    DIGIT_TEMPLATES[digit as usize]
}

/// Shifts a '1'/'0' row string right by `offset`, padding with '0'.
fn shift_signature(row: &str, offset: usize) -> String {
    format!("{}{}", "0".repeat(offset), &row[..GLYPH_WIDTH - offset])
}

fn build_signature_table() -> HashMap<String, u8> {
    let mut table = HashMap::new();
    for (digit, rows) in DIGIT_TEMPLATES.iter().enumerate() {
        for offset in 0..SHIFT_OFFSETS {
            let signature: String =
                rows.iter().map(|row| shift_signature(row, offset)).collect();
            if let Some(previous) = table.insert(signature.clone(), digit as u8) {
                // The templates are required to stay collision-free across
                // all registered shifts; a clash here is a configuration
                // error no runtime handling can repair.
                panic!(
                    "signature table collision: {} maps to both {} and {}",
                    signature, previous, digit
                );
            }
        }
    }
    table
}

lazy_static! {
    static ref SIGNATURE_TABLE: HashMap<String, u8> = build_signature_table();
}

/// Exact-match lookup of a 48-character signature.
pub fn lookup(signature: &str) -> Option<u8> {
    SIGNATURE_TABLE.get(signature).copied()
}

/// Number of registered signatures. Exposed for construction checks.
pub fn table_len() -> usize {
    SIGNATURE_TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_holds_every_template_and_shift() {
        assert_eq!(table_len(), DIGIT_TEMPLATES.len() * SHIFT_OFFSETS);
    }

    #[test]
    fn test_every_digit_resolves_at_all_offsets() {
        for digit in 0..10u8 {
            let rows = template_rows(digit);
            for offset in 0..SHIFT_OFFSETS {
                let signature: String =
                    rows.iter().map(|row| shift_signature(row, offset)).collect();
                assert_eq!(
                    lookup(&signature),
                    Some(digit),
                    "digit {} at offset {}",
                    digit,
                    offset
                );
            }
        }
    }

    #[test]
    fn test_unknown_signature_misses() {
        assert_eq!(lookup(&"1".repeat(48)), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_shift_signature_pads_left() {
        assert_eq!(shift_signature("0011111100000000", 2), "0000111111000000");
        assert_eq!(shift_signature("0011111100000000", 0), "0011111100000000");
    }
}
