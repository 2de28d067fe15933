//! Pixel preprocessing: red-channel extraction and sample window capture.
//!
//! The card digits are rendered in greyscale, so the red, green and blue
//! channels carry identical values. Keeping only the red channel quarters
//! the data without losing information, and everything downstream indexes
//! the result as a plain `y * width + x` intensity array.

use crate::models::{
    Row, SampleTriple, Signal, CARD_IMAGE_WIDTH, GLYPH_WIDTH, LOW_LINE_OFFSET,
    MIDDLE_LINE_OFFSET,
};
use crate::utils::SampleError;

/// Reduces a decoded RGBA buffer (4 bytes per pixel) to its red channel.
pub fn red_channel(rgba: &[u8]) -> Vec<u8> {
    rgba.iter().step_by(4).copied().collect()
}

/// Captures the three sample rows for the digit slot anchored at (x, y).
///
/// Rows are read at scan lines y, y+4 and y+13, each 16 pixels wide, and
/// thresholded into signals. Fails if any row would read past the end of
/// the intensity data.
pub fn sample_triple(x: usize, y: usize, red: &[u8]) -> Result<SampleTriple, SampleError> {
    Ok(SampleTriple {
        top: read_row(x, y, red)?,
        middle: read_row(x, y + MIDDLE_LINE_OFFSET, red)?,
        low: read_row(x, y + LOW_LINE_OFFSET, red)?,
    })
}

fn read_row(x: usize, y: usize, red: &[u8]) -> Result<Row, SampleError> {
    let start = y * CARD_IMAGE_WIDTH + x;
    let end = start + GLYPH_WIDTH;
    if end > red.len() {
        return Err(SampleError::OutOfBounds { x, y, len: red.len() });
    }

    let mut signals = [Signal::Negative; GLYPH_WIDTH];
    for (signal, &intensity) in signals.iter_mut().zip(&red[start..end]) {
        *signal = Signal::from_intensity(intensity);
    }
    Ok(Row(signals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_channel_keeps_every_fourth_byte() {
        let rgba = [10u8, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
        assert_eq!(red_channel(&rgba), vec![10, 50, 90]);
    }

    #[test]
    fn test_sample_triple_thresholds_rows() {
        // A minimal buffer: two dark pixels at the anchor of each scan line.
        let mut red = vec![255u8; CARD_IMAGE_WIDTH * 20];
        for line in [3, 3 + MIDDLE_LINE_OFFSET, 3 + LOW_LINE_OFFSET] {
            red[line * CARD_IMAGE_WIDTH + 5] = 131;
            red[line * CARD_IMAGE_WIDTH + 6] = 131;
        }

        let triple = sample_triple(5, 3, &red).unwrap();
        assert_eq!(triple.top.to_string(), "1100000000000000");
        assert_eq!(triple.middle.to_string(), "1100000000000000");
        assert_eq!(triple.low.to_string(), "1100000000000000");
    }

    #[test]
    fn test_sample_triple_out_of_bounds() {
        let red = vec![255u8; CARD_IMAGE_WIDTH * 10];
        let err = sample_triple(5, 3, &red).unwrap_err();
        assert!(matches!(err, SampleError::OutOfBounds { x: 5, .. }));
    }
}
