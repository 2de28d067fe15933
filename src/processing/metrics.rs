//! Row metrics: zone activity used by the heuristic classifiers.

use crate::models::{Row, RowMetrics, MINIMUM_ROW_SIGNAL};
use crate::utils::SampleError;

/// Last index (exclusive) of the left zone.
const ROW_LEFT_INDEX: usize = 6;
/// Last index (inclusive) of the middle zone; everything beyond is right.
const ROW_RIGHT_INDEX: usize = 9;

/// Classifies each positive signal of a row into the left, middle or right
/// zone in a single pass. Rows with fewer than two positive signals are
/// rejected: they indicate a sampling or alignment problem rather than a
/// valid digit shape.
pub fn row_metrics(row: &Row) -> Result<RowMetrics, SampleError> {
    let mut metrics = RowMetrics {
        left: false,
        middle: false,
        right: false,
        total: 0,
    };

    for (i, signal) in row.iter().enumerate() {
        if !signal.is_positive() {
            continue;
        }
        if i < ROW_LEFT_INDEX {
            metrics.left = true;
        } else if i > ROW_RIGHT_INDEX {
            metrics.right = true;
        } else {
            metrics.middle = true;
        }
        metrics.total += 1;
    }

    if metrics.total < MINIMUM_ROW_SIGNAL {
        return Err(SampleError::LowSignal {
            row: *row,
            total: metrics.total,
        });
    }
    Ok(metrics)
}
