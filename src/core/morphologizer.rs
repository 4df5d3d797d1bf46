use crate::core::lexicalizer::DigitContext;
use crate::core::tables::scale;
use crate::domain::model::{GeneratorOptions, Placement};
use std::borrow::Cow;

const AND: &str = "and ";

/// How a word attaches to the text already emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    Spaced,
    /// Joined to the tens word with a hyphen: "forty-two".
    Hyphenated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub joint: Joint,
}

impl Word {
    pub fn spaced(text: String) -> Self {
        Self {
            text,
            joint: Joint::Spaced,
        }
    }

    /// Appends a scale name ("thousand", "million", ...) to this word.
    pub fn labelled(self, label: &str) -> Self {
        Self {
            text: format!("{} {}", self.text, label),
            joint: self.joint,
        }
    }
}

/// Applies the suffix, hyphen and "and" rules to a resolved stem.
pub fn inflect(
    placement: Placement,
    stem: Cow<'static, str>,
    ctx: &DigitContext,
    options: &GeneratorOptions,
) -> Word {
    match placement {
        Placement::MostSignificant => Word::spaced(format!("{} {}", stem, scale(0))),
        Placement::MidPoint => {
            if options.uses_conjunction() && ctx.index > 0 {
                Word::spaced(format!("{}{}", AND, stem))
            } else {
                Word::spaced(stem.into_owned())
            }
        }
        Placement::LeastSignificant => match ctx.previous {
            Some(tens) if tens <= 1 && ctx.before_previous.is_some() => {
                if options.uses_conjunction() {
                    Word::spaced(format!("{}{}", AND, stem))
                } else {
                    Word::spaced(stem.into_owned())
                }
            }
            Some(tens) if tens > 1 => Word {
                text: stem.into_owned(),
                joint: Joint::Hyphenated,
            },
            _ => Word::spaced(stem.into_owned()),
        },
    }
}
