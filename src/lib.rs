pub mod card_reader;
pub mod models;
pub mod processing;
pub mod telemetry;
pub mod utils;
pub mod validation;

pub use card_reader::CardReader;
