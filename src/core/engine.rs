use crate::core::preprocess::preprocess;
use crate::core::realizer::realize;
use crate::domain::model::{Conversion, DigitSequence, GeneratorOptions, PreparedNumeral};
use crate::domain::ports::TextGenerator;
use crate::utils::error::Result;
use crate::utils::validation::validate_source;

/// Converts integer literals such as `"-120"` into English cardinal words.
///
/// The engine holds only its options; the morphology and scale tables are
/// process-wide statics, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralText {
    options: GeneratorOptions,
}

impl NumeralText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Preprocessing and validation shared by [`generate_text`](Self::generate_text)
    /// and [`can_generate`](Self::can_generate).
    pub fn prepare(&self, source: &str) -> Result<PreparedNumeral> {
        validate_source(source)?;
        let trimmed = source.trim();
        let (sign, digits) = preprocess(source);
        // digits is a suffix of trimmed; sign and zeros are single-byte
        let offset = trimmed.len() - digits.len();
        let digits = DigitSequence::parse(digits)
            .map_err(|e| e.within_source(trimmed, offset))
            .inspect_err(|e| {
                tracing::debug!("Rejected numeral {:?}: {}", source, e);
            })?;
        tracing::debug!(sign = ?sign, digits = digits.len(), "Prepared numeral");
        Ok(PreparedNumeral { sign, digits })
    }

    pub fn generate_text(&self, source: &str) -> Result<String> {
        let numeral = self.prepare(source)?;
        Ok(realize(&numeral, &self.options))
    }

    pub fn can_generate(&self, source: &str) -> bool {
        self.prepare(source).is_ok()
    }

    /// Converts every source, recording failures instead of stopping at them.
    pub fn generate_batch<I, S>(&self, sources: I) -> Vec<Conversion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let conversions: Vec<Conversion> = sources
            .into_iter()
            .map(|source| {
                let source = source.as_ref();
                match self.generate_text(source) {
                    Ok(text) => Conversion {
                        source: source.to_string(),
                        text: Some(text),
                        error: None,
                    },
                    Err(e) => Conversion {
                        source: source.to_string(),
                        text: None,
                        error: Some(e.to_string()),
                    },
                }
            })
            .collect();

        let failed = conversions.iter().filter(|c| !c.is_ok()).count();
        tracing::debug!(
            "Converted {} numerals ({} failed)",
            conversions.len(),
            failed
        );
        conversions
    }
}

impl TextGenerator for NumeralText {
    fn generate_text(&self, source: &str) -> Result<String> {
        NumeralText::generate_text(self, source)
    }

    fn can_generate(&self, source: &str) -> bool {
        NumeralText::can_generate(self, source)
    }
}
