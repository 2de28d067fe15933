pub mod expiry;
pub mod luhn;

pub use expiry::{ExpiryCheck, ExpiryValidator};
pub use luhn::{format_pan, PanValidator};
