use crate::config::OutputFormat;
use crate::domain::model::Conversion;
use crate::utils::error::{NumeralError, Result};

/// Renders a batch of conversions in the requested output format.
pub fn render(conversions: &[Conversion], format: OutputFormat, include_source: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(conversions, include_source)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversions)?),
        OutputFormat::Csv => render_csv(conversions),
    }
}

/// One `source<TAB>true|false` line per numeral.
pub fn render_check(results: &[(String, bool)]) -> String {
    results
        .iter()
        .map(|(source, ok)| format!("{}\t{}", source, ok))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_text(conversions: &[Conversion], include_source: bool) -> String {
    conversions
        .iter()
        .map(|c| {
            let body = match (&c.text, &c.error) {
                (Some(text), _) => text.clone(),
                (None, Some(error)) => format!("error: {}", error),
                (None, None) => String::new(),
            };
            if include_source {
                format!("{}\t{}", c.source, body)
            } else {
                body
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_csv(conversions: &[Conversion]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["source", "text", "error"])?;
    for c in conversions {
        writer.write_record([
            c.source.as_str(),
            c.text.as_deref().unwrap_or(""),
            c.error.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NumeralError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| NumeralError::IoError(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Conversion> {
        vec![
            Conversion {
                source: "42".to_string(),
                text: Some("forty-two".to_string()),
                error: None,
            },
            Conversion {
                source: "4x".to_string(),
                text: None,
                error: Some("bad".to_string()),
            },
        ]
    }

    #[test]
    fn test_render_text() {
        let out = render(&sample(), OutputFormat::Text, false).unwrap();
        assert_eq!(out, "forty-two\nerror: bad");

        let out = render(&sample(), OutputFormat::Text, true).unwrap();
        assert_eq!(out, "42\tforty-two\n4x\terror: bad");
    }

    #[test]
    fn test_render_csv() {
        let out = render(&sample(), OutputFormat::Csv, false).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["source,text,error", "42,forty-two,", "4x,,bad"]);
    }

    #[test]
    fn test_render_json() {
        let out = render(&sample(), OutputFormat::Json, false).unwrap();
        let parsed: Vec<Conversion> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_render_check() {
        let results = vec![("1".to_string(), true), ("x".to_string(), false)];
        assert_eq!(render_check(&results), "1\ttrue\nx\tfalse");
    }
}
