use crate::core::classifier::classify;
use crate::core::lexicalizer::{resolve_base, DigitContext};
use crate::core::morphologizer::{inflect, Joint, Word};
use crate::core::tables::scale;
use crate::domain::model::{GeneratorOptions, Placement, PreparedNumeral};

/// Append-only text assembled during one conversion.
#[derive(Debug, Default)]
struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    fn push(&mut self, word: &Word) {
        match word.joint {
            Joint::Hyphenated => self.text.push('-'),
            Joint::Spaced if !self.text.is_empty() => self.text.push(' '),
            Joint::Spaced => {}
        }
        self.text.push_str(&word.text);
    }

    fn finish(self) -> String {
        self.text
    }
}

/// Spells a validated numeral, scanning its digits left to right once.
///
/// Each step looks only at the current digit, the two before it and its
/// position, so there is no parse state to carry between digits.
pub fn realize(numeral: &PreparedNumeral, options: &GeneratorOptions) -> String {
    let digits = &numeral.digits;
    let len = digits.len();
    let mut buffer = OutputBuffer::default();

    for index in 0..len {
        let role = classify(index, len);
        let ctx = DigitContext::at(digits, index);
        let word = resolve_base(role.placement, &ctx)
            .map(|stem| inflect(role.placement, stem, &ctx, options));

        tracing::trace!(
            index,
            digit = ctx.value,
            group = role.group,
            placement = ?role.placement,
            word = word.as_ref().map(|w| w.text.as_str()),
            "classified digit"
        );

        let closes_group = role.placement == Placement::LeastSignificant && role.group > 0;
        if closes_group && !ctx.closes_empty_group() {
            let label = scale(role.group);
            let word = match word {
                Some(word) => word.labelled(label),
                None => Word::spaced(label.to_string()),
            };
            buffer.push(&word);
        } else if let Some(word) = word {
            buffer.push(&word);
        }
    }

    format!("{}{}", numeral.sign.prefix(), buffer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DigitSequence, Sign};

    fn spell(digits: &str) -> String {
        spell_with(digits, GeneratorOptions::default())
    }

    fn spell_with(digits: &str, options: GeneratorOptions) -> String {
        let numeral = PreparedNumeral {
            sign: Sign::Unsigned,
            digits: DigitSequence::parse(digits).unwrap(),
        };
        realize(&numeral, &options)
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(spell("0"), "zero");
        assert_eq!(spell("9"), "nine");
        assert_eq!(spell("10"), "ten");
        assert_eq!(spell("15"), "fifteen");
        assert_eq!(spell("20"), "twenty");
        assert_eq!(spell("42"), "forty-two");
        assert_eq!(spell("99"), "ninety-nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell("100"), "one hundred");
        assert_eq!(spell("101"), "one hundred one");
        assert_eq!(spell("113"), "one hundred thirteen");
        assert_eq!(spell("120"), "one hundred twenty");
        assert_eq!(spell("999"), "nine hundred ninety-nine");
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(spell("1000"), "one thousand");
        assert_eq!(spell("1001"), "one thousand one");
        assert_eq!(spell("20000"), "twenty thousand");
        assert_eq!(spell("42000"), "forty-two thousand");
        assert_eq!(spell("100000"), "one hundred thousand");
        assert_eq!(spell("1000000"), "one million");
        assert_eq!(spell("1000100"), "one million one hundred");
        assert_eq!(
            spell("1234567"),
            "one million two hundred thirty-four thousand five hundred sixty-seven"
        );
    }

    #[test]
    fn test_empty_inner_groups_are_skipped() {
        assert_eq!(spell("5000000017"), "five billion seventeen");
        assert_eq!(spell("2000003000"), "two billion three thousand");
    }

    #[test]
    fn test_british_conjunction() {
        let british = GeneratorOptions::british();
        assert_eq!(spell_with("120", british), "one hundred and twenty");
        assert_eq!(spell_with("125", british), "one hundred and twenty-five");
        assert_eq!(spell_with("115", british), "one hundred and fifteen");
        assert_eq!(spell_with("1001", british), "one thousand and one");
        assert_eq!(spell_with("101000", british), "one hundred and one thousand");
        assert_eq!(spell_with("42", british), "forty-two");
        assert_eq!(spell_with("15", british), "fifteen");
    }

    #[test]
    fn test_sign_prefix() {
        let numeral = PreparedNumeral {
            sign: Sign::Negative,
            digits: DigitSequence::parse("120").unwrap(),
        };
        assert_eq!(
            realize(&numeral, &GeneratorOptions::default()),
            "negative one hundred twenty"
        );
    }
}
