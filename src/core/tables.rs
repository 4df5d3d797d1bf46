//! Static morphology and scale tables shared by every conversion.

/// Word stems for one digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorphEntry {
    pub base: &'static str,
    /// Consonant-cluster stem used before "-ty" and "-teen" (three → thir).
    pub affix: Option<&'static str>,
    /// Stem used before "-ty" only (four → for).
    pub modifier: Option<&'static str>,
}

const fn entry(base: &'static str) -> MorphEntry {
    MorphEntry {
        base,
        affix: None,
        modifier: None,
    }
}

const fn with_affix(base: &'static str, affix: &'static str) -> MorphEntry {
    MorphEntry {
        base,
        affix: Some(affix),
        modifier: None,
    }
}

const fn with_modifier(base: &'static str, modifier: &'static str) -> MorphEntry {
    MorphEntry {
        base,
        affix: None,
        modifier: Some(modifier),
    }
}

pub const TY: &str = "ty";
pub const TEEN: &str = "teen";

/// Indexed by value 0–12; 10, 11 and 12 are the irregular teen forms.
pub static MORPHOLOGY: [MorphEntry; 13] = [
    entry("zero"),
    entry("one"),
    with_affix("two", "twen"),
    with_affix("three", "thir"),
    with_modifier("four", "for"),
    with_affix("five", "fif"),
    entry("six"),
    entry("seven"),
    with_affix("eight", "eigh"),
    entry("nine"),
    entry("ten"),
    entry("eleven"),
    entry("twelve"),
];

/// Short-scale group names. Index 0 labels the hundreds digit, index `n`
/// (n ≥ 1) labels the group worth 10^(3n).
pub static SCALE: [&str; 43] = [
    "hundred",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "trevigintillion",
    "quattuorvigintillion",
    "quinvigintillion",
    "sexvigintillion",
    "septenvigintillion",
    "octovigintillion",
    "novemvigintillion",
    "trigintillion",
    "untrigintillion",
    "duotrigintillion",
    "tretrigintillion",
    "quattuortrigintillion",
    "quintrigintillion",
    "sextrigintillion",
    "septentrigintillion",
    "octotrigintillion",
    "novemtrigintillion",
    "quadragintillion",
    "unquadragintillion",
];

/// Longest digit string the scale table can name.
pub const MAX_DIGITS: usize = SCALE.len() * 3;

pub fn morph(value: u8) -> &'static MorphEntry {
    &MORPHOLOGY[value as usize]
}

/// Panics when `group` is beyond the table; validated input never gets there.
pub fn scale(group: usize) -> &'static str {
    SCALE[group]
}
