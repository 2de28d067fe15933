pub mod coords;
pub mod data;

pub use coords::{CoordinateKey, Field, CARD_IMAGE_WIDTH, LOW_LINE_OFFSET, MIDDLE_LINE_OFFSET};
pub use data::{
    CardData, LowClass, MiddleClass, NewSignature, Row, RowMetrics, SampleTriple, Signal,
    TopClass, GLYPH_WIDTH, MINIMUM_ROW_SIGNAL, SIGNAL_THRESHOLD,
};
