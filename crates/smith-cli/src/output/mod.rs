use std::path::Path;

use serde::Serialize;
use smith_core::Method;

use crate::cli::OutputFormat;
use crate::pipeline::GenerationOutput;

pub mod table;

/// A record that can be shown as one table row.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// One line of a method listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRow {
    pub test: String,
    pub signature: String,
    pub shape: String,
    pub visibility: String,
    pub is_static: bool,
}

impl From<&Method> for MethodRow {
    fn from(method: &Method) -> Self {
        Self {
            test: format!("test_{}", method.rendered_name),
            signature: method.display_signature(),
            shape: method.shape().to_string(),
            visibility: method.visibility.to_string(),
            is_static: method.is_static,
        }
    }
}

impl Tabular for MethodRow {
    const HEADERS: &'static [&'static str] = &["test", "signature", "shape", "visibility"];

    fn cells(&self) -> Vec<String> {
        let visibility = if self.is_static {
            format!("{} static", self.visibility)
        } else {
            self.visibility.clone()
        };
        vec![
            self.test.clone(),
            self.signature.clone(),
            self.shape.clone(),
            visibility,
        ]
    }
}

/// What `generate` reports after writing a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub class: String,
    pub destination: String,
    pub tests: Vec<String>,
    pub warnings: Vec<String>,
}

impl GenerationSummary {
    #[must_use]
    pub fn new(output: &GenerationOutput, destination: &Path) -> Self {
        Self {
            class: output.class_name.clone(),
            destination: destination.display().to_string(),
            tests: output.tests.clone(),
            warnings: output.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Tabular for GenerationSummary {
    const HEADERS: &'static [&'static str] = &["class", "destination", "tests", "warnings"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.class.clone(),
            self.destination.clone(),
            self.tests.len().to_string(),
            self.warnings.len().to_string(),
        ]
    }
}

#[must_use]
pub fn method_rows(methods: &[Method]) -> Vec<MethodRow> {
    methods.iter().map(MethodRow::from).collect()
}

/// Render rows as an aligned table or a pretty JSON array.
///
/// # Errors
/// Fails only if JSON serialization fails.
pub fn render<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Table if rows.is_empty() => Ok(String::from("(no methods)")),
        OutputFormat::Table => {
            let cells = rows.iter().map(Tabular::cells).collect::<Vec<_>>();
            Ok(table::render_table(T::HEADERS, &cells, terminal_width()))
        }
    }
}

/// Render a single record: a JSON object, or a one-row table.
///
/// # Errors
/// Fails only if JSON serialization fails.
pub fn render_record<T: Serialize + Tabular>(
    record: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Table => render(std::slice::from_ref(record), format),
    }
}

/// Print rows to stdout.
pub fn output<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(rows, format)?);
    Ok(())
}

fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
}
