//! Field sequence assembly: drives one field's digit slots through the fast
//! path and, when needed, the fallback classifier.
//!
//! Per-position failures never abort the rest of the sequence; every slot is
//! processed so an aggregate error can report all problematic positions at
//! once.

use log::{debug, warn};

use crate::models::{Field, NewSignature};
use crate::processing::{fallback, pixels, signatures};
use crate::utils::{PositionCause, PositionError, SequenceError};

/// Result of running one field's coordinate keys.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceOutcome {
    pub field: Field,
    /// Recognized digits in key order. Failed positions contribute nothing,
    /// so this is only the field's value when `errors` is empty.
    pub digits: String,
    pub errors: Vec<PositionError>,
    /// Signatures resolved by the fallback classifier, for table promotion.
    pub new_signatures: Vec<NewSignature>,
}

impl SequenceOutcome {
    pub fn into_sequence_error(self) -> Option<SequenceError> {
        if self.errors.is_empty() {
            return None;
        }
        Some(SequenceError {
            field: self.field,
            positions: self.errors,
        })
    }
}

/// Recognizes every digit slot of `field` from the red-channel intensity
/// array of a card image.
pub fn recognize_field(field: Field, red: &[u8]) -> SequenceOutcome {
    let mut outcome = SequenceOutcome {
        field,
        digits: String::with_capacity(field.keys().len()),
        errors: Vec::new(),
        new_signatures: Vec::new(),
    };

    for &key in field.keys() {
        let (x, y) = key.anchor();
        let rows = match pixels::sample_triple(x, y, red) {
            Ok(rows) => rows,
            Err(err) => {
                warn!("{:?}: sampling failed: {}", key, err);
                outcome.errors.push(PositionError {
                    key,
                    rows: None,
                    cause: PositionCause::Sampling(err),
                });
                continue;
            }
        };

        let signature = rows.signature();
        if let Some(digit) = signatures::lookup(&signature) {
            debug!("{:?}: signature table hit: {}", key, digit);
            outcome.digits.push(digit_char(digit));
            continue;
        }

        warn!("{:?}: signature not in table, engaging fallback classifier", key);
        match fallback::interpret(&rows) {
            Ok(digit) => {
                outcome.digits.push(digit_char(digit));
                outcome.new_signatures.push(NewSignature { signature, digit });
            }
            Err(cause) => {
                warn!("{:?}: fallback failed: {}", key, cause);
                outcome.errors.push(PositionError {
                    key,
                    rows: Some(rows),
                    cause,
                });
            }
        }
    }

    outcome
}

fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoordinateKey, CARD_IMAGE_WIDTH, LOW_LINE_OFFSET, MIDDLE_LINE_OFFSET};
    use crate::processing::signatures::template_rows;

    const CARD_IMAGE_HEIGHT: usize = 315;

    fn blank_card() -> Vec<u8> {
        vec![255u8; CARD_IMAGE_WIDTH * CARD_IMAGE_HEIGHT]
    }

    fn stamp_rows(red: &mut [u8], key: CoordinateKey, rows: [&str; 3]) {
        let (x, y) = key.anchor();
        let lines = [y, y + MIDDLE_LINE_OFFSET, y + LOW_LINE_OFFSET];
        for (line, bits) in lines.into_iter().zip(rows) {
            for (i, c) in bits.chars().enumerate() {
                red[line * CARD_IMAGE_WIDTH + x + i] = if c == '1' { 131 } else { 255 };
            }
        }
    }

    fn stamp_digit(red: &mut [u8], key: CoordinateKey, digit: u8) {
        stamp_rows(red, key, template_rows(digit));
    }

    #[test]
    fn test_field_resolves_through_the_fast_path() {
        let mut red = blank_card();
        stamp_digit(&mut red, CoordinateKey::Month0, 0);
        stamp_digit(&mut red, CoordinateKey::Month1, 5);

        let outcome = recognize_field(Field::Month, &red);
        assert_eq!(outcome.digits, "05");
        assert!(outcome.errors.is_empty());
        assert!(outcome.new_signatures.is_empty());
    }

    #[test]
    fn test_fallback_digit_is_reported_as_new_signature() {
        let mut red = blank_card();
        // A 1 with a slightly wider top bar: classifiable, but not in the
        // static table.
        stamp_rows(
            &mut red,
            CoordinateKey::Cvv0,
            ["0011111110000000", "0000001100000000", "0000001100011000"],
        );
        stamp_digit(&mut red, CoordinateKey::Cvv1, 2);
        stamp_digit(&mut red, CoordinateKey::Cvv2, 3);

        let outcome = recognize_field(Field::Cvv, &red);
        assert_eq!(outcome.digits, "123");
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.new_signatures.len(), 1);
        assert_eq!(outcome.new_signatures[0].digit, 1);
        assert!(outcome.new_signatures[0].signature.starts_with("0011111110000000"));
    }

    #[test]
    fn test_failed_position_does_not_abort_the_sequence() {
        let mut red = blank_card();
        stamp_digit(&mut red, CoordinateKey::Year0, 2);
        // Year1 stays blank: its rows carry no signal at all.

        let outcome = recognize_field(Field::Year, &red);
        assert_eq!(outcome.digits, "2");
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].key, CoordinateKey::Year1);
        assert!(outcome.errors[0].rows.is_some());
        assert!(matches!(
            outcome.errors[0].cause,
            PositionCause::Sampling(_)
        ));

        let err = outcome.into_sequence_error().unwrap();
        assert_eq!(err.field, Field::Year);
        assert_eq!(err.positions.len(), 1);
    }

    #[test]
    fn test_out_of_bounds_image_fails_every_position() {
        // Far too little pixel data for any anchor.
        let red = vec![255u8; CARD_IMAGE_WIDTH * 10];
        let outcome = recognize_field(Field::Month, &red);
        assert!(outcome.digits.is_empty());
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors.iter().all(|e| e.rows.is_none()));
    }
}
