use std::collections::HashSet;
use std::path::Path;

use log::info;

use crate::models::{CardData, Field, NewSignature};
use crate::processing::{pixels, recognize_field, SequenceOutcome};
use crate::telemetry::TelemetrySink;
use crate::utils::RecognitionError;
use crate::validation::{format_pan, PanValidator};

/// Orchestrates a full card recognition: all four field sequences, error
/// aggregation, Luhn validation and telemetry.
pub struct CardReader<'a> {
    telemetry: &'a dyn TelemetrySink,
}

impl<'a> CardReader<'a> {
    pub fn new(telemetry: &'a dyn TelemetrySink) -> Self {
        CardReader { telemetry }
    }

    /// Recognizes all card fields from a red-channel intensity array.
    ///
    /// Returns the complete, Luhn-valid result, or a single aggregate error
    /// enumerating every failed position. Partial results are never
    /// returned: a failure in any field fails the whole recognition.
    pub fn recognize(&self, red: &[u8]) -> Result<CardData, RecognitionError> {
        let pan = recognize_field(Field::Pan, red);
        let month = recognize_field(Field::Month, red);
        let year = recognize_field(Field::Year, red);
        let cvv = recognize_field(Field::Cvv, red);

        let new_signatures = collect_new_signatures(&[&pan, &month, &year, &cvv]);

        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in [pan, month, year, cvv] {
            if outcome.errors.is_empty() {
                values.push(outcome.digits);
            } else if let Some(err) = outcome.into_sequence_error() {
                errors.push(err);
            }
        }

        if !errors.is_empty() {
            let error = RecognitionError::FailedInterpretation { fields: errors };
            self.telemetry.recognition_failed(&error);
            return Err(error);
        }

        let mut values = values.into_iter();
        let card = CardData {
            pan: values.next().unwrap_or_default(),
            exp_month: values.next().unwrap_or_default(),
            exp_year: values.next().unwrap_or_default(),
            cvv: values.next().unwrap_or_default(),
        };

        if !PanValidator::validate(&card.pan) {
            let error = RecognitionError::InvalidPan {
                pan: format_pan(&card.pan),
            };
            self.telemetry.recognition_failed(&error);
            return Err(error);
        }

        for observation in &new_signatures {
            self.telemetry.new_signature(observation);
        }
        info!(
            "card recognized; {} new signature(s) observed",
            new_signatures.len()
        );

        Ok(card)
    }

    /// Convenience entry point: decodes an image file, reduces it to its
    /// red channel and recognizes it.
    pub fn recognize_file<P: AsRef<Path>>(&self, path: P) -> Result<CardData, RecognitionError> {
        let img = image::open(path.as_ref())
            .map_err(|e| RecognitionError::ImageProcessing(e.to_string()))?;
        let rgba = img.to_rgba8();
        let red = pixels::red_channel(rgba.as_raw());
        self.recognize(&red)
    }
}

/// Deduplicates fallback observations by (signature, digit) so a novel
/// glyph appearing in several positions raises a single event.
fn collect_new_signatures(outcomes: &[&SequenceOutcome]) -> Vec<NewSignature> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for outcome in outcomes {
        for observation in &outcome.new_signatures {
            if seen.insert(observation.clone()) {
                unique.push(observation.clone());
            }
        }
    }
    unique
}
