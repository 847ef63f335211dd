//! Question converter
//!
//! Runs one conversion from start to finish:
//! load → validate → clean → split answers → serialize → report.
//!
//! Progress lines meant for the user go to the `report` writer passed to
//! [`Converter::run`]. Everything else is logged through `tracing`.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use super::answers::split_answers;
use super::clean::clean;
use super::config::ConverterConfig;
use crate::error::ConvertError;
use crate::export::serialize;
use crate::import::CsvLoader;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of records written
    pub records: usize,
    /// File the records were written to
    pub output: PathBuf,
}

/// Converts a question CSV into a JSON array.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter after validating its configuration.
    pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run the full pipeline, writing the column diagnostic and the success
    /// message to `report`.
    ///
    /// On a missing required column the run stops before the output file is
    /// touched.
    pub fn run<W: Write>(&self, report: &mut W) -> Result<ConversionSummary, ConvertError> {
        let config = &self.config;
        info!(
            "Converting {} to {}",
            config.input.display(),
            config.output.display()
        );

        let raw = CsvLoader::new().read(&config.input)?;
        writeln!(
            report,
            "DEBUG: Columns found in CSV file: {}",
            format_column_list(&raw.headers)
        )
        .map_err(|e| ConvertError::Report(e.to_string()))?;

        let table = raw.into_source_table()?;
        debug!("Loaded {} records", table.len());

        let dataset = split_answers(clean(table));

        serialize(&dataset, &config.output)?;
        writeln!(
            report,
            "{} generated successfully!",
            config.output.display()
        )
        .map_err(|e| ConvertError::Report(e.to_string()))?;

        Ok(ConversionSummary {
            records: dataset.len(),
            output: config.output.clone(),
        })
    }
}

/// Render column names as a bracketed list of quoted names, e.g.
/// `['id', 'question']`. A name is double-quoted only when it contains a
/// single quote and no double quote.
fn format_column_list(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| quote_column(c)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_column(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for ch in name.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Convert `input` to `output` with default settings.
pub fn convert_file(
    input: impl Into<PathBuf>,
    output: impl Into<PathBuf>,
) -> Result<ConversionSummary, ConvertError> {
    let converter = Converter::new(ConverterConfig {
        input: input.into(),
        output: output.into(),
    })?;
    converter.run(&mut std::io::sink())
}
