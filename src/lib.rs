pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use crate::core::engine::NumeralText;
pub use crate::core::tables::MAX_DIGITS;
pub use domain::model::{ConjunctionStyle, Conversion, GeneratorOptions, Sign};
pub use domain::ports::TextGenerator;
pub use utils::error::{FormatErrorKind, NumeralError, Result};

/// Spells `source` in English using American style ("one hundred twenty").
pub fn generate_text(source: &str) -> Result<String> {
    NumeralText::new().generate_text(source)
}

/// Whether [`generate_text`] would succeed for `source`.
pub fn can_generate(source: &str) -> bool {
    NumeralText::new().can_generate(source)
}
