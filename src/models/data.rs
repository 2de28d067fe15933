use serde::Serialize;
use std::fmt;

/// Red-channel intensity below this value counts as a positive signal.
/// Intensities on rendered cards range from roughly 130 to 255; most dark
/// digit pixels land at 131, so halfway between the extremes is a safe cut.
pub const SIGNAL_THRESHOLD: u8 = 193;

/// Width in pixels of one sampled digit glyph.
pub const GLYPH_WIDTH: usize = 16;

/// Minimum number of positive signals a row must carry before any of the
/// classifiers will look at it. Below this the sample window is misaligned
/// or blank, not a digit shape.
pub const MINIMUM_ROW_SIGNAL: usize = 2;

/// Binary classification of one pixel's red-channel intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Positive,
    Negative,
}

impl Signal {
    pub fn from_intensity(intensity: u8) -> Self {
        if intensity < SIGNAL_THRESHOLD {
            Signal::Positive
        } else {
            Signal::Negative
        }
    }

    pub fn is_positive(self) -> bool {
        self == Signal::Positive
    }

    pub fn as_char(self) -> char {
        match self {
            Signal::Positive => '1',
            Signal::Negative => '0',
        }
    }
}

/// One horizontal scan line of a sampled digit: 16 signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row(pub [Signal; GLYPH_WIDTH]);

impl Row {
    /// Parses a row from a '1'/'0' string. Panics on malformed input, so it
    /// is only used for the static digit templates and in tests.
    pub fn from_bits(bits: &str) -> Self {
        assert_eq!(bits.len(), GLYPH_WIDTH, "row template must be {} chars", GLYPH_WIDTH);
        let mut signals = [Signal::Negative; GLYPH_WIDTH];
        for (i, c) in bits.chars().enumerate() {
            signals[i] = match c {
                '1' => Signal::Positive,
                '0' => Signal::Negative,
                other => panic!("row template may only contain '0' and '1', found {:?}", other),
            };
        }
        Row(signals)
    }

    pub fn iter(&self) -> impl Iterator<Item = Signal> + '_ {
        self.0.iter().copied()
    }

    pub fn positive_count(&self) -> usize {
        self.iter().filter(|s| s.is_positive()).count()
    }

    /// Returns the row shifted `offset` positions to the right, padding the
    /// left edge with negative signals and truncating back to 16 signals.
    pub fn shifted(&self, offset: usize) -> Row {
        let mut signals = [Signal::Negative; GLYPH_WIDTH];
        for i in offset..GLYPH_WIDTH {
            signals[i] = self.0[i - offset];
        }
        Row(signals)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for signal in self.iter() {
            write!(f, "{}", signal.as_char())?;
        }
        Ok(())
    }
}

/// The three scan lines captured for one digit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleTriple {
    pub top: Row,
    pub middle: Row,
    pub low: Row,
}

impl SampleTriple {
    /// Serializes the triple into the 48-character lookup key used by the
    /// signature table.
    pub fn signature(&self) -> String {
        format!("{}{}{}", self.top, self.middle, self.low)
    }

    pub fn shifted(&self, offset: usize) -> SampleTriple {
        SampleTriple {
            top: self.top.shifted(offset),
            middle: self.middle.shifted(offset),
            low: self.low.shifted(offset),
        }
    }
}

impl fmt::Display for SampleTriple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.top, self.middle, self.low)
    }
}

/// Zone activity summary for one row. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMetrics {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
    pub total: usize,
}

/// Width classification of a digit's top scan line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopClass {
    Thin,
    Medium,
    Wide,
}

/// Zone classification of a digit's middle scan line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiddleClass {
    Left,
    Right,
    Middle,
    LeftAndRight,
    /// The tight pulse pair produced by the waist of an eight.
    Eight,
}

/// Zone classification of a digit's low scan line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LowClass {
    Left,
    Right,
    Middle,
    LeftAndRight,
    MiddleAndRight,
    Wide,
}

/// A signature that missed the static table but was resolved by the
/// fallback classifier. Reported through telemetry so the table can be
/// extended offline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewSignature {
    pub signature: String,
    pub digit: u8,
}

/// The complete, validated recognition result for one card image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardData {
    pub pan: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvv: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_thresholding() {
        assert_eq!(Signal::from_intensity(131), Signal::Positive);
        assert_eq!(Signal::from_intensity(192), Signal::Positive);
        assert_eq!(Signal::from_intensity(193), Signal::Negative);
        assert_eq!(Signal::from_intensity(255), Signal::Negative);
    }

    #[test]
    fn test_row_round_trip() {
        let row = Row::from_bits("0011000000011000");
        assert_eq!(row.to_string(), "0011000000011000");
        assert_eq!(row.positive_count(), 4);
    }

    #[test]
    fn test_shift_zero_is_identity() {
        let row = Row::from_bits("0001111111110000");
        assert_eq!(row.shifted(0), row);
    }

    #[test]
    fn test_shift_pads_left_and_truncates() {
        let row = Row::from_bits("0011111111111000");
        assert_eq!(row.shifted(1).to_string(), "0001111111111100");
        assert_eq!(row.shifted(2).to_string(), "0000111111111110");
    }

    #[test]
    fn test_signature_concatenates_rows() {
        let triple = SampleTriple {
            top: Row::from_bits("0001111111110000"),
            middle: Row::from_bits("0011000000011000"),
            low: Row::from_bits("0011000000011000"),
        };
        assert_eq!(
            triple.signature(),
            "000111111111000000110000000110000011000000011000"
        );
    }
}
