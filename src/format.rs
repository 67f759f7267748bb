//! Formatting utilities for the m365 CLI client.
//!
//! This module renders command payloads in the supported output modes:
//! JSON, a column-aligned text table and CSV. Payloads are plain
//! `serde_json::Value`s; commands that return nested maps are expected to
//! flatten them into a list of records before asking for text or CSV.

use serde_json::Value;
use std::str::FromStr;
use strum::EnumIter;

pub const JSON: &str = "json";
pub const TEXT: &str = "text";
pub const CSV: &str = "csv";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    /// Error specific to CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Error when converting bytes to UTF-8 string
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),

    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
}

#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct OutputFormatOptions {
    pub with_headers: bool,
    pub pretty: bool,
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    /// JSON (JavaScript Object Notation) format
    Json(OutputFormatOptions),
    /// Human readable table
    Text(OutputFormatOptions),
    /// CSV (Comma-Separated Values) format
    Csv(OutputFormatOptions),
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![JSON, TEXT, CSV]
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        match normalized_format.as_str() {
            JSON => Ok(OutputFormat::Json(options)),
            TEXT => Ok(OutputFormat::Text(options)),
            CSV => Ok(OutputFormat::Csv(options)),
            _ => Err(FormattingError::UnsupportedOutputFormat(normalized_format)),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json(_))
    }

}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    /// Formats the OutputFormat enum as a string for display purposes
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Json(_) => write!(f, "{}", JSON),
            OutputFormat::Text(_) => write!(f, "{}", TEXT),
            OutputFormat::Csv(_) => write!(f, "{}", CSV),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    /// Parses a string into an OutputFormat enum variant
    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

/// Renders a payload in the requested output mode.
pub fn render(value: &Value, format: &OutputFormat) -> Result<String, FormattingError> {
    match format {
        OutputFormat::Json(options) => {
            if options.pretty {
                Ok(serde_json::to_string_pretty(value)?)
            } else {
                Ok(serde_json::to_string(value)?)
            }
        }
        OutputFormat::Text(_) => Ok(render_text(value)),
        OutputFormat::Csv(options) => render_csv(value, options.with_headers),
    }
}

/// Scalar cell content: strings without quotes, nested values as compact JSON.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Column names in first-seen order across all records.
fn columns(records: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

fn render_text(value: &Value) -> String {
    match value {
        Value::Array(records) if records.iter().all(Value::is_object) && !records.is_empty() => {
            let columns = columns(records);
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|record| {
                    columns
                        .iter()
                        .map(|c| record.get(c).map(cell).unwrap_or_default())
                        .collect()
                })
                .collect();

            let widths: Vec<usize> = columns
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    rows.iter()
                        .map(|r| r[i].chars().count())
                        .chain(std::iter::once(c.chars().count()))
                        .max()
                        .unwrap_or(0)
                })
                .collect();

            let line = |cells: &[String]| -> String {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| format!("{:<width$}", c, width = *w))
                    .collect::<Vec<_>>()
                    .join("  ")
                    .trim_end()
                    .to_string()
            };

            let mut out = vec![line(&columns)];
            out.push(
                widths
                    .iter()
                    .map(|w| "-".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("  "),
            );
            out.extend(rows.iter().map(|r| line(r)));
            out.join("\n")
        }
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join("\n"),
        Value::Object(map) => {
            let width = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
            map.iter()
                .map(|(k, v)| format!("{:<width$}: {}", k, cell(v), width = width))
                .collect::<Vec<_>>()
                .join("\n")
        }
        other => cell(other),
    }
}

fn render_csv(value: &Value, with_headers: bool) -> Result<String, FormattingError> {
    let records: Vec<Value> = match value {
        Value::Array(items) => items.clone(),
        Value::Null => Vec::new(),
        other => vec![other.clone()],
    };

    let columns = columns(&records);
    let mut wtr = csv::Writer::from_writer(vec![]);

    if with_headers && !columns.is_empty() {
        wtr.write_record(&columns)?;
    }

    for record in &records {
        if record.is_object() {
            let row: Vec<String> = columns
                .iter()
                .map(|c| record.get(c).map(cell).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        } else {
            wtr.write_record([cell(record)])?;
        }
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn checklist_records() -> Value {
        json!([
            { "id": "00000000-0000-0000-0000-000000000000", "title": "Buy milk", "isChecked": false }
        ])
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::names(), vec!["json", "text", "csv"]);
        assert!(OutputFormat::from_str("TEXT").is_ok());
        assert!(matches!(
            OutputFormat::from_str("md"),
            Err(FormattingError::UnsupportedOutputFormat(_))
        ));
    }

    #[test]
    fn test_render_json_is_value_as_is() {
        let value = json!({ "a": { "title": "x" } });
        let output = render(&value, &OutputFormat::default()).unwrap();
        assert_eq!(output, r#"{"a":{"title":"x"}}"#);
    }

    #[test]
    fn test_render_text_table() {
        let output = render(
            &checklist_records(),
            &OutputFormat::Text(OutputFormatOptions::default()),
        )
        .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("title"));
        assert!(lines[0].contains("isChecked"));
        assert!(lines[2].contains("Buy milk"));
        assert!(lines[2].ends_with("false"));
    }

    #[test]
    fn test_render_text_object() {
        let output = render(
            &json!({ "graph_url": "https://graph.microsoft.com/", "timeout": 60 }),
            &OutputFormat::Text(OutputFormatOptions::default()),
        )
        .unwrap();
        assert!(output.contains("graph_url: https://graph.microsoft.com/"));
        assert!(output.contains("timeout  : 60"));
    }

    #[test]
    fn test_render_csv_with_headers() {
        let options = OutputFormatOptions {
            with_headers: true,
            pretty: false,
        };
        let output = render(&checklist_records(), &OutputFormat::Csv(options)).unwrap();
        assert_eq!(
            output,
            "id,title,isChecked\n00000000-0000-0000-0000-000000000000,Buy milk,false\n"
        );
    }
}
