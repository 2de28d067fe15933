//! PAN validation: the Luhn checksum over the assembled 16-digit string.

pub struct PanValidator;

impl PanValidator {
    /// Standard Luhn check. Empty strings and non-digit characters fail
    /// outright, which also covers sequences that lost positions during
    /// recognition.
    pub fn validate(pan: &str) -> bool {
        if pan.is_empty() {
            return false;
        }

        let mut sum = 0u32;
        for (i, c) in pan.chars().rev().enumerate() {
            let digit = match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            };
            let term = if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            };
            sum += term;
        }
        sum % 10 == 0
    }
}

/// Renders a PAN in the familiar 4-4-4-4 grouping for reports and error
/// messages.
pub fn format_pan(pan: &str) -> String {
    pan.as_bytes()
        .chunks(4)
        .map(|group| std::str::from_utf8(group).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}
