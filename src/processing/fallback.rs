//! The fallback heuristic classifier: the slow path taken when a sampled
//! signature is not in the static table.
//!
//! Each of the three sampled rows is classified independently (top by width,
//! middle and low by zone activity) and the three classifications are
//! combined through a fixed-priority decision table keyed on the low row.
//! Because a digit may be rendered up to two pixels right of its anchor,
//! a decision-table mismatch is retried with the rows shifted right by one
//! and then two pixels before the position is given up as uninterpretable.
//!
//! Row-level sample errors (low signal, unclassifiable zones, an overfull
//! middle row) are never retried: shifting cannot repair a window that is
//! not looking at a digit.

use crate::models::{
    LowClass, MiddleClass, Row, SampleTriple, TopClass, MINIMUM_ROW_SIGNAL,
};
use crate::processing::metrics::row_metrics;
use crate::processing::signatures::SHIFT_OFFSETS;
use crate::utils::{AttemptError, InterpretationError, PositionCause, SampleError};

const TOP_THIN_THRESHOLD: usize = 4;
const TOP_WIDE_THRESHOLD: usize = 7;
const MIDDLE_MAXIMUM_SIGNAL: usize = 6;
/// Maximum run of negative signals between the two strokes of an eight's
/// waist for the pulse pair to count as an eight pattern.
const MIDDLE_MAX_EIGHT_GAP: usize = 5;

/// Attempts to resolve a sample triple into a digit, retrying the decision
/// table at right shifts 0, 1 and 2. Returns the digit, or the cause that
/// ends the position: an unusable sample, or an interpretation failure
/// wrapping every offset's mismatch.
pub fn interpret(rows: &SampleTriple) -> Result<u8, PositionCause> {
    let mut attempts = Vec::with_capacity(SHIFT_OFFSETS);
    for offset in 0..SHIFT_OFFSETS {
        match classify_at(rows, offset) {
            Ok(digit) => return Ok(digit),
            Err(FallbackError::Sample(err)) => return Err(PositionCause::Sampling(err)),
            Err(FallbackError::Attempt(err)) => attempts.push(err),
        }
    }
    Err(PositionCause::Interpretation(InterpretationError { attempts }))
}

enum FallbackError {
    Sample(SampleError),
    Attempt(AttemptError),
}

impl From<SampleError> for FallbackError {
    fn from(err: SampleError) -> Self {
        FallbackError::Sample(err)
    }
}

fn classify_at(rows: &SampleTriple, offset: usize) -> Result<u8, FallbackError> {
    let shifted = rows.shifted(offset);
    let top = classify_top(&shifted.top)?;
    let middle = classify_middle(&shifted.middle)?;
    let low = classify_low(&shifted.low)?;
    decide(low, top, middle, offset).map_err(FallbackError::Attempt)
}

/// Width classification of the top row. The top stroke is the most
/// size-distinctive part of these glyphs: a 4 or 6 starts with a short
/// stub, a 1 with a medium bar, and everything else spans the glyph.
fn classify_top(row: &Row) -> Result<TopClass, SampleError> {
    let total = row.positive_count();
    if total < MINIMUM_ROW_SIGNAL {
        return Err(SampleError::LowSignal { row: *row, total });
    }
    if total < TOP_THIN_THRESHOLD {
        return Ok(TopClass::Thin);
    }
    if total > TOP_WIDE_THRESHOLD {
        return Ok(TopClass::Wide);
    }
    Ok(TopClass::Medium)
}

/// Scans for the waist of an eight: two positive signals separated by at
/// least one and fewer than five negative signals. Adjacent positives are
/// one stroke, not a pulse pair, and do not qualify.
fn has_eight_pattern(row: &Row) -> bool {
    let mut gap: Option<usize> = None;
    for signal in row.iter() {
        if !signal.is_positive() {
            if let Some(g) = gap.as_mut() {
                *g += 1;
            }
            continue;
        }
        if matches!(gap, Some(g) if g > 0 && g < MIDDLE_MAX_EIGHT_GAP) {
            return true;
        }
        gap = Some(0);
    }
    false
}

fn classify_middle(row: &Row) -> Result<MiddleClass, SampleError> {
    if has_eight_pattern(row) {
        return Ok(MiddleClass::Eight);
    }

    let metrics = row_metrics(row)?;
    if metrics.total > MIDDLE_MAXIMUM_SIGNAL {
        return Err(SampleError::MiddleRowHighSignal {
            row: *row,
            total: metrics.total,
        });
    }

    if metrics.middle {
        // A 5 rendered shifted right bleeds its left stroke into the middle
        // zone; a sparse left+middle row is still a left result.
        if metrics.left && !metrics.right && metrics.total < 4 {
            return Ok(MiddleClass::Left);
        }
        if metrics.left || metrics.right {
            return Err(SampleError::InconclusiveMiddleRow {
                row: *row,
                left: metrics.left,
                middle: metrics.middle,
                right: metrics.right,
            });
        }
        return Ok(MiddleClass::Middle);
    }

    if metrics.left {
        if metrics.right {
            return Ok(MiddleClass::LeftAndRight);
        }
        return Ok(MiddleClass::Left);
    }
    if metrics.right {
        return Ok(MiddleClass::Right);
    }
    Err(SampleError::UnclassifiedSignal { row: *row })
}

fn classify_low(row: &Row) -> Result<LowClass, SampleError> {
    let metrics = row_metrics(row)?;

    if metrics.left && metrics.middle && metrics.right {
        return Ok(LowClass::Wide);
    }
    if metrics.right {
        if metrics.left {
            return Ok(LowClass::LeftAndRight);
        }
        if metrics.middle {
            return Ok(LowClass::MiddleAndRight);
        }
        return Ok(LowClass::Right);
    }
    if metrics.left {
        return Ok(LowClass::Left);
    }
    if metrics.middle {
        return Ok(LowClass::Middle);
    }
    Err(SampleError::UnclassifiedSignal { row: *row })
}

/// The digit decision table. The low row narrows the candidates and the
/// top/middle classifications must confirm the expectation; any mismatch
/// is an attempt failure carrying what was actually observed.
fn decide(
    low: LowClass,
    top: TopClass,
    middle: MiddleClass,
    offset: usize,
) -> Result<u8, AttemptError> {
    let mismatch = |expected: Option<u8>| AttemptError {
        offset,
        expected,
        low,
        top,
        middle,
    };

    match low {
        // Only a 6 is this wide at the low scan line.
        LowClass::Wide => {
            if top != TopClass::Thin || middle != MiddleClass::Left {
                return Err(mismatch(Some(6)));
            }
            Ok(6)
        }
        LowClass::MiddleAndRight => {
            if top != TopClass::Medium || middle != MiddleClass::Middle {
                return Err(mismatch(Some(1)));
            }
            Ok(1)
        }
        LowClass::Middle => {
            if top != TopClass::Wide || middle != MiddleClass::Right {
                return Err(mismatch(Some(7)));
            }
            Ok(7)
        }
        LowClass::Left => {
            if top != TopClass::Wide || middle != MiddleClass::Right {
                return Err(mismatch(Some(2)));
            }
            Ok(2)
        }
        // 6, 8 and 0 all land left-and-right down here.
        LowClass::LeftAndRight => {
            if top == TopClass::Medium {
                if middle != MiddleClass::Eight {
                    return Err(mismatch(Some(8)));
                }
                return Ok(8);
            }
            if middle == MiddleClass::Left {
                // Only a 6 has nothing but a left stroke at the middle line.
                if top != TopClass::Thin {
                    return Err(mismatch(Some(6)));
                }
                return Ok(6);
            }
            if top != TopClass::Wide || middle != MiddleClass::LeftAndRight {
                return Err(mismatch(Some(0)));
            }
            Ok(0)
        }
        // 3, 4, 5 and 9 all finish with a lone right stroke.
        LowClass::Right => {
            if middle == MiddleClass::Right {
                if top != TopClass::Wide {
                    return Err(mismatch(Some(3)));
                }
                return Ok(3);
            }
            if middle == MiddleClass::Left {
                if top != TopClass::Wide {
                    return Err(mismatch(Some(5)));
                }
                return Ok(5);
            }
            if top == TopClass::Thin {
                if middle != MiddleClass::LeftAndRight {
                    return Err(mismatch(Some(4)));
                }
                return Ok(4);
            }
            if top == TopClass::Wide {
                if middle != MiddleClass::LeftAndRight {
                    return Err(mismatch(Some(9)));
                }
                return Ok(9);
            }
            Err(mismatch(None))
        }
    }
}
