//! Convert command handler

use std::io::Write;
use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::convert::{ConversionSummary, Converter, ConverterConfig};

/// Arguments for a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Overrides the configured input file
    pub input: Option<PathBuf>,
    /// Overrides the configured output file
    pub output: Option<PathBuf>,
    /// Optional TOML configuration file
    pub config: Option<PathBuf>,
}

/// Build the effective configuration: defaults, then the config file, then
/// positional arguments.
pub fn resolve_config(args: &ConvertArgs) -> Result<ConverterConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::default(),
    };
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }

    if config.input == config.output {
        return Err(CliError::InvalidArgument(format!(
            "input and output must be different files (both are {})",
            config.input.display()
        )));
    }
    Ok(config)
}

/// Handle the convert command, writing user-facing lines to `report`.
pub fn handle_convert<W: Write>(
    args: &ConvertArgs,
    report: &mut W,
) -> Result<ConversionSummary, CliError> {
    let config = resolve_config(args)?;
    let converter = Converter::new(config)?;
    Ok(converter.run(report)?)
}
