use crate::domain::model::Sign;

/// Trims whitespace, splits off a leading `+`/`-` and drops insignificant
/// leading zeros, always keeping the final character ("000" → "0").
///
/// Callers reject empty input first; the returned digits are not validated.
pub fn preprocess(source: &str) -> (Sign, &str) {
    let trimmed = source.trim();

    let (sign, rest) = match trimmed.chars().next().and_then(Sign::from_leading) {
        Some(sign) => (sign, &trimmed[1..]),
        None => (Sign::Unsigned, trimmed),
    };

    (sign, strip_leading_zeros(rest))
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() && !digits.is_empty() {
        // all zeros: the last one stays
        &digits[digits.len() - 1..]
    } else {
        stripped
    }
}
