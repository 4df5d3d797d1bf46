use crate::core::tables::{morph, TEEN, TY};
use crate::domain::model::{DigitSequence, Placement};
use std::borrow::Cow;

/// A digit together with the one or two digits immediately before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitContext {
    pub index: usize,
    pub value: u8,
    /// Tens digit when `value` is a ones digit.
    pub previous: Option<u8>,
    /// Hundreds digit when `value` is a ones digit.
    pub before_previous: Option<u8>,
}

impl DigitContext {
    pub fn at(digits: &DigitSequence, index: usize) -> Self {
        Self {
            index,
            value: digits.digit(index).unwrap_or(0),
            previous: index.checked_sub(1).and_then(|i| digits.digit(i)),
            before_previous: index.checked_sub(2).and_then(|i| digits.digit(i)),
        }
    }

    /// True when this digit and the two before it are all zero or absent.
    pub fn closes_empty_group(&self) -> bool {
        self.value == 0 && self.previous.unwrap_or(0) == 0 && self.before_previous.unwrap_or(0) == 0
    }
}

/// Resolves the raw word stem for one digit, or `None` when the digit is silent.
pub fn resolve_base(placement: Placement, ctx: &DigitContext) -> Option<Cow<'static, str>> {
    match placement {
        Placement::MostSignificant => hundreds_stem(ctx.value),
        Placement::MidPoint => tens_stem(ctx.value),
        Placement::LeastSignificant => ones_stem(ctx.value, ctx.previous),
    }
}

fn hundreds_stem(value: u8) -> Option<Cow<'static, str>> {
    if value == 0 {
        return None;
    }
    Some(Cow::Borrowed(morph(value).base))
}

// 0 and 1 are silent here; the ones digit spells the teens.
fn tens_stem(value: u8) -> Option<Cow<'static, str>> {
    if value < 2 {
        return None;
    }
    let entry = morph(value);
    let stem = entry.modifier.or(entry.affix).unwrap_or(entry.base);
    Some(Cow::Owned(format!("{}{}", stem, TY)))
}

fn ones_stem(value: u8, tens: Option<u8>) -> Option<Cow<'static, str>> {
    match tens {
        Some(1) => Some(teen_stem(value)),
        Some(_) if value == 0 => None,
        _ => Some(Cow::Borrowed(morph(value).base)),
    }
}

fn teen_stem(value: u8) -> Cow<'static, str> {
    match value {
        0..=2 => Cow::Borrowed(morph(10 + value).base),
        _ => {
            let entry = morph(value);
            Cow::Owned(format!("{}{}", entry.affix.unwrap_or(entry.base), TEEN))
        }
    }
}
