use crate::utils::error::Result;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Where the command-line tool reads numerals from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalInput {
    Arguments(Vec<String>),
    File(String),
    Stdin,
}

impl LocalInput {
    pub fn new(numbers: Vec<String>, input: Option<String>) -> Self {
        match input {
            Some(path) if path != "-" => LocalInput::File(path),
            Some(_) => LocalInput::Stdin,
            None if numbers.is_empty() => LocalInput::Stdin,
            None => LocalInput::Arguments(numbers),
        }
    }

    /// Collects the numerals, one per line for file and stdin input.
    /// Blank lines are skipped.
    pub fn read_numerals(&self) -> Result<Vec<String>> {
        match self {
            LocalInput::Arguments(numbers) => Ok(numbers.clone()),
            LocalInput::File(path) => {
                let content = fs::read_to_string(Path::new(path))?;
                Ok(non_blank_lines(content.lines()))
            }
            LocalInput::Stdin => {
                let lines = io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?;
                Ok(non_blank_lines(lines.iter().map(String::as_str)))
            }
        }
    }
}

fn non_blank_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_input_selection() {
        assert_eq!(
            LocalInput::new(vec!["5".to_string()], None),
            LocalInput::Arguments(vec!["5".to_string()])
        );
        assert_eq!(LocalInput::new(vec![], None), LocalInput::Stdin);
        assert_eq!(LocalInput::new(vec![], Some("-".to_string())), LocalInput::Stdin);
        assert_eq!(
            LocalInput::new(vec![], Some("nums.txt".to_string())),
            LocalInput::File("nums.txt".to_string())
        );
    }

    #[test]
    fn test_read_file_skips_blank_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"12\n\n  \n-7\n").unwrap();

        let input = LocalInput::File(temp_file.path().to_str().unwrap().to_string());
        assert_eq!(input.read_numerals().unwrap(), vec!["12", "-7"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let input = LocalInput::File("/nonexistent/numerals.txt".to_string());
        assert!(matches!(
            input.read_numerals(),
            Err(crate::utils::error::NumeralError::IoError(_))
        ));
    }
}
