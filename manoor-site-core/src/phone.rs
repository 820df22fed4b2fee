//! Phone number normalization for the registration form

use std::fmt;

use thiserror::Error;

/// Digit count of a Malian subscriber number
pub const MALI_PHONE_DIGITS: usize = 8;

/// Phone validation error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone number must contain {expected} digits, got {actual}")]
    WrongDigitCount { expected: usize, actual: usize },
}

/// A phone number reduced to its ASCII digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Strip everything but `0-9` from `raw` and require exactly `expected` digits.
    pub fn parse(raw: &str, expected: usize) -> Result<Self, PhoneError> {
        let digits = normalize_digits(raw);
        let actual = digits.len();
        if actual != expected {
            return Err(PhoneError::WrongDigitCount { expected, actual });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep only ASCII digits. Non-ASCII digits (e.g. Arabic-Indic) are dropped too.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number_passes() {
        let phone = PhoneNumber::parse("70123456", MALI_PHONE_DIGITS).unwrap();
        assert_eq!(phone.as_str(), "70123456");
    }

    #[test]
    fn test_separators_are_stripped() {
        let phone = PhoneNumber::parse("70-12-34-56", MALI_PHONE_DIGITS).unwrap();
        assert_eq!(phone.to_string(), "70123456");

        let phone = PhoneNumber::parse(" 70 12 34 56 ", MALI_PHONE_DIGITS).unwrap();
        assert_eq!(phone.as_str(), "70123456");
    }

    #[test]
    fn test_wrong_lengths_are_rejected() {
        for (raw, actual) in [("701234", 6), ("701234567", 9), ("", 0), ("abc", 0)] {
            assert_eq!(
                PhoneNumber::parse(raw, MALI_PHONE_DIGITS),
                Err(PhoneError::WrongDigitCount {
                    expected: MALI_PHONE_DIGITS,
                    actual
                }),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_country_prefix_counts_as_digits() {
        // +223 is not stripped: the gate only counts digits
        assert!(PhoneNumber::parse("+223 70 12 34 56", MALI_PHONE_DIGITS).is_err());
    }

    #[test]
    fn test_non_ascii_digits_are_dropped() {
        assert_eq!(normalize_digits("٧٠12"), "12");
    }
}
