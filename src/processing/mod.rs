pub mod fallback;
pub mod metrics;
pub mod pixels;
pub mod sequence;
pub mod signatures;

pub use sequence::{recognize_field, SequenceOutcome};
