//! Expiry plausibility check. Advisory only: recognition success never
//! depends on it, but the CLI report flags values that cannot be a real
//! card expiry (a misread "13" month, a year decades out).

use chrono::{Datelike, Local};

/// How many years past the current one an expiry year may plausibly reach.
const MAX_YEARS_AHEAD: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryCheck {
    pub plausible: bool,
    pub issues: Vec<String>,
}

pub struct ExpiryValidator;

impl ExpiryValidator {
    pub fn validate(month: &str, year: &str) -> ExpiryCheck {
        Self::validate_at(month, year, Local::now().year())
    }

    fn validate_at(month: &str, year: &str, current_year: i32) -> ExpiryCheck {
        let mut issues = Vec::new();

        match month.parse::<u32>() {
            Ok(m) if (1..=12).contains(&m) => {}
            Ok(m) => issues.push(format!("month {:02} is out of range", m)),
            Err(_) => issues.push(format!("month {:?} is not numeric", month)),
        }

        match year.parse::<i32>() {
            Ok(y) => {
                let full_year = 2000 + y;
                if full_year < current_year || full_year > current_year + MAX_YEARS_AHEAD {
                    issues.push(format!("year 20{:02} is implausible for a live card", y));
                }
            }
            Err(_) => issues.push(format!("year {:?} is not numeric", year)),
        }

        ExpiryCheck {
            plausible: issues.is_empty(),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_expiry() {
        let check = ExpiryValidator::validate_at("05", "27", 2026);
        assert!(check.plausible);
        assert!(check.issues.is_empty());
    }

    #[test]
    fn test_month_out_of_range() {
        let check = ExpiryValidator::validate_at("13", "27", 2026);
        assert!(!check.plausible);
        assert!(check.issues[0].contains("month 13"));
    }

    #[test]
    fn test_year_in_the_past() {
        let check = ExpiryValidator::validate_at("05", "19", 2026);
        assert!(!check.plausible);
    }

    #[test]
    fn test_non_numeric_fields() {
        let check = ExpiryValidator::validate_at("ab", "cd", 2026);
        assert_eq!(check.issues.len(), 2);
    }
}
