pub mod error;

pub use error::{
    AttemptError, InterpretationError, PositionCause, PositionError, RecognitionError,
    SampleError, SequenceError,
};
