use thiserror::Error;

use crate::models::{CoordinateKey, Field, LowClass, MiddleClass, Row, SampleTriple, TopClass};

/// A sample window that is unusable as-is. These are alignment or rendering
/// problems, not near-misses, so they are never retried at other offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("signal for row was unexpectedly low: {total}\n{row}")]
    LowSignal { row: Row, total: usize },

    #[error("signal was detected in the row but did not classify as left, middle, or right\n{row}")]
    UnclassifiedSignal { row: Row },

    #[error("unexpected results for middle row evaluation\n{row}\nleft: {left}, middle: {middle}, right: {right}")]
    InconclusiveMiddleRow {
        row: Row,
        left: bool,
        middle: bool,
        right: bool,
    },

    #[error("signal for middle row was unexpectedly high: {total}\n{row}")]
    MiddleRowHighSignal { row: Row, total: usize },

    #[error("sample window at ({x}, {y}) reaches past the end of the pixel data ({len} bytes)")]
    OutOfBounds { x: usize, y: usize, len: usize },
}

/// One shift offset's trip through the digit decision table that ended in a
/// mismatch. Accumulated across offsets, never surfaced on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptError {
    pub offset: usize,
    /// The digit the low-row (or low/top) classification pointed at, when
    /// the table got far enough to anticipate one.
    pub expected: Option<u8>,
    pub low: LowClass,
    pub top: TopClass,
    pub middle: MiddleClass,
}

impl std::fmt::Display for AttemptError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.expected {
            Some(digit) => write!(f, "offset {}: row results anticipate {}, however ", self.offset, digit)?,
            None => write!(f, "offset {}: results are entirely inconclusive, ", self.offset)?,
        }
        write!(f, "low: {:?}, top: {:?}, middle: {:?}", self.low, self.top, self.middle)
    }
}

impl std::error::Error for AttemptError {}

/// All three shift offsets were tried and every attempt mismatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("signature interpretation failed after {} offset attempts", .attempts.len())]
pub struct InterpretationError {
    pub attempts: Vec<AttemptError>,
}

/// Why a single digit position could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionCause {
    #[error(transparent)]
    Sampling(#[from] SampleError),
    #[error(transparent)]
    Interpretation(#[from] InterpretationError),
}

/// A digit position that failed, with enough context to diagnose the miss
/// or to seed a new signature table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{key:?}: {cause}")]
pub struct PositionError {
    pub key: CoordinateKey,
    /// The raw sampled rows. Absent only when sampling itself went out of
    /// bounds and no rows could be read.
    pub rows: Option<SampleTriple>,
    pub cause: PositionCause,
}

/// Every failed position of one field sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field: {} position(s) failed", .field.name(), .positions.len())]
pub struct SequenceError {
    pub field: Field,
    pub positions: Vec<PositionError>,
}

/// Top-level recognition failure. The caller receives either a complete,
/// Luhn-valid result or exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("card recognition failed in {} field(s)", .fields.len())]
    FailedInterpretation { fields: Vec<SequenceError> },

    #[error("recognized digits do not form a valid PAN: {pan}")]
    InvalidPan { pan: String },

    #[error("image processing error: {0}")]
    ImageProcessing(String),
}
