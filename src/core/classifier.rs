//! Positional arithmetic for a digit at index `i` of a string of length `len`.
//!
//! Every function here is pure, so digits can be classified independently
//! and in any order.

use crate::domain::model::Placement;

/// Where a digit sits: its 3-digit group and its role inside that group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRole {
    pub group: usize,
    pub placement: Placement,
}

/// Right-to-left, 0-based position.
pub fn inverted_position(index: usize, len: usize) -> usize {
    (len - 1) - index
}

/// Group number counted from the least significant end.
pub fn group_of(index: usize, len: usize) -> usize {
    inverted_position(index, len) / 3
}

pub fn placement_of(index: usize, len: usize) -> Placement {
    let remaining = len - index;
    if remaining % 3 == 0 {
        Placement::MostSignificant
    } else if (remaining + 1) % 3 == 0 {
        Placement::MidPoint
    } else {
        Placement::LeastSignificant
    }
}

pub fn classify(index: usize, len: usize) -> DigitRole {
    debug_assert!(index < len, "digit index {} out of range {}", index, len);
    DigitRole {
        group: group_of(index, len),
        placement: placement_of(index, len),
    }
}
