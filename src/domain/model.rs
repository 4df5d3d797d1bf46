use crate::utils::error::{FormatErrorKind, NumeralError, Result};
use crate::utils::validation::validate_digit_sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leading sign recorded by the preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    #[default]
    Unsigned,
    Negative,
    Positive,
}

impl Sign {
    pub fn from_leading(c: char) -> Option<Self> {
        match c {
            '-' => Some(Sign::Negative),
            '+' => Some(Sign::Positive),
            _ => None,
        }
    }

    /// Word emitted in front of the magnitude, including its trailing space.
    pub fn prefix(&self) -> &'static str {
        match self {
            Sign::Unsigned => "",
            Sign::Negative => "negative ",
            Sign::Positive => "positive ",
        }
    }
}

/// Role of a digit inside its 3-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Hundreds digit.
    MostSignificant,
    /// Tens digit.
    MidPoint,
    /// Ones digit.
    LeastSignificant,
}

/// Validated, sign-free, zero-trimmed run of ASCII digits.
///
/// Only [`DigitSequence::parse`] builds one, so every value held here
/// satisfies the length and character rules the realizer relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence(String);

impl DigitSequence {
    /// Fails on anything the preprocessor would not produce: non-digits,
    /// too many digits, or a leading zero in front of other digits.
    pub fn parse(digits: &str) -> Result<Self> {
        validate_digit_sequence(digits)?;
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(NumeralError::format(digits, FormatErrorKind::LeadingZero));
        }
        Ok(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the digit at `index`, or `None` past either end.
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.0.as_bytes().get(index).map(|b| b - b'0')
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output of the shared preprocessing and validation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedNumeral {
    pub sign: Sign,
    pub digits: DigitSequence,
}

/// Whether "and" joins the tens and ones to what precedes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjunctionStyle {
    /// "one hundred twenty"
    #[default]
    American,
    /// "one hundred and twenty"
    British,
}

impl FromStr for ConjunctionStyle {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" => Ok(ConjunctionStyle::American),
            "british" => Ok(ConjunctionStyle::British),
            other => Err(NumeralError::InvalidConfigValueError {
                field: "conversion.conjunction".to_string(),
                value: other.to_string(),
                reason: "Valid styles: american, british".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorOptions {
    pub conjunction: ConjunctionStyle,
}

impl GeneratorOptions {
    pub fn british() -> Self {
        Self {
            conjunction: ConjunctionStyle::British,
        }
    }

    pub fn uses_conjunction(&self) -> bool {
        self.conjunction == ConjunctionStyle::British
    }
}

/// One batch entry: the source text and either its spelling or the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub source: String,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.text.is_some()
    }
}
