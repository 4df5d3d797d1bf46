use crate::core::tables::MAX_DIGITS;
use crate::utils::error::{FormatErrorKind, NumeralError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects empty or whitespace-only caller input.
pub fn validate_source(source: &str) -> Result<()> {
    if source.trim().is_empty() {
        return Err(NumeralError::invalid_argument(
            "source cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Checks a sign-free, zero-trimmed digit string before it reaches the realizer.
///
/// Length is checked first, then every character must be an ASCII digit.
pub fn validate_digit_sequence(digits: &str) -> Result<()> {
    if digits.is_empty() {
        return Err(NumeralError::format(digits, FormatErrorKind::Empty));
    }

    let length = digits.chars().count();
    if length > MAX_DIGITS {
        return Err(NumeralError::format(
            digits,
            FormatErrorKind::TooLong {
                length,
                max: MAX_DIGITS,
            },
        ));
    }

    if let Some((position, character)) = digits.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(NumeralError::format(
            digits,
            FormatErrorKind::NonDigit {
                character,
                position,
            },
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NumeralError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(NumeralError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source() {
        assert!(validate_source("12").is_ok());
        assert!(validate_source(" -3 ").is_ok());
        assert!(validate_source("").unwrap_err().is_invalid_argument());
        assert!(validate_source(" \t\n").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_digit_sequence() {
        assert!(validate_digit_sequence("0").is_ok());
        assert!(validate_digit_sequence("1234567890").is_ok());
        assert!(validate_digit_sequence("").is_err());
        assert!(validate_digit_sequence("12.5").is_err());
        assert!(validate_digit_sequence("١٢").is_err());
    }

    #[test]
    fn test_non_digit_position_is_reported() {
        match validate_digit_sequence("12-4") {
            Err(NumeralError::FormatError { kind, .. }) => assert_eq!(
                kind,
                FormatErrorKind::NonDigit {
                    character: '-',
                    position: 2
                }
            ),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_length_boundary() {
        let max = "9".repeat(MAX_DIGITS);
        assert!(validate_digit_sequence(&max).is_ok());

        let too_long = "9".repeat(MAX_DIGITS + 1);
        match validate_digit_sequence(&too_long) {
            Err(NumeralError::FormatError { kind, .. }) => assert_eq!(
                kind,
                FormatErrorKind::TooLong {
                    length: MAX_DIGITS + 1,
                    max: MAX_DIGITS
                }
            ),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }
}
