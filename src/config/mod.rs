pub mod cli;
pub mod toml_config;

use crate::domain::model::GeneratorOptions;
use crate::utils::error::{NumeralError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[cfg(feature = "cli")]
use crate::domain::model::ConjunctionStyle;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(NumeralError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "numeral-text")]
#[command(about = "Spell integer literals as English cardinal numbers")]
pub struct CliConfig {
    /// Numerals to convert; when none are given they are read from --input or stdin
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// File with one numeral per line ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use British conjunctions ("one hundred and twenty")
    #[arg(long)]
    pub british: bool,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only report whether each numeral can be converted
    #[arg(long)]
    pub check: bool,

    /// Keep converting after a malformed numeral
    #[arg(long)]
    pub skip_invalid: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after command-line flags are laid over the file config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub options: GeneratorOptions,
    pub format: OutputFormat,
    pub skip_invalid: bool,
    pub include_source: bool,
    pub check: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_deref()
            .map(|path| TomlConfig::from_file(path))
            .transpose()
    }

    pub fn resolve(&self, file: Option<&TomlConfig>) -> Settings {
        let mut options = file.map(TomlConfig::generator_options).unwrap_or_default();
        if self.british {
            options.conjunction = ConjunctionStyle::British;
        }

        Settings {
            options,
            format: self
                .format
                .or_else(|| file.map(TomlConfig::output_format))
                .unwrap_or_default(),
            skip_invalid: self.skip_invalid || file.is_some_and(TomlConfig::skip_invalid),
            include_source: file.is_some_and(TomlConfig::include_source),
            check: self.check,
            verbose: self.verbose || file.is_some_and(TomlConfig::verbose),
            json_logs: file.is_some_and(TomlConfig::json_logs),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_non_empty_string("input", input)?;
            if !self.numbers.is_empty() {
                return Err(NumeralError::ConfigValidationError {
                    field: "input".to_string(),
                    message: "Pass numerals as arguments or through --input, not both".to_string(),
                });
            }
        }
        if let Some(config) = &self.config {
            validate_non_empty_string("config", config)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_positional() {
        let config = CliConfig::parse_from(["numeral-text", "-120", "+7", "--british"]);
        assert_eq!(config.numbers, vec!["-120", "+7"]);
        assert!(config.british);
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str("[output]\nformat = \"csv\"\ninclude_source = true\n").unwrap();
        let config = CliConfig::parse_from(["numeral-text", "--format", "json", "5"]);
        let settings = config.resolve(Some(&file));
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.include_source);
        assert_eq!(settings.options.conjunction, ConjunctionStyle::American);
    }

    #[test]
    fn test_resolve_without_file() {
        let config = CliConfig::parse_from(["numeral-text", "--british", "5"]);
        let settings = config.resolve(None);
        assert_eq!(settings.options, GeneratorOptions::british());
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_input_and_positionals_conflict() {
        let config = CliConfig::parse_from(["numeral-text", "--input", "nums.txt", "5"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
