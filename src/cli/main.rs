//! CLI binary entry point for questions-converter

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use questions_converter::cli::commands::convert::{ConvertArgs, handle_convert};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "questions-converter")]
#[command(about = "Convert a CSV of reading-comprehension questions into a JSON array")]
#[command(version)]
struct Cli {
    /// Input CSV file (default: questions.csv)
    input: Option<PathBuf>,
    /// Output JSON file (default: questions.json)
    output: Option<PathBuf>,
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_directive = if verbose {
        "questions_converter=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let args = ConvertArgs {
        input: cli.input,
        output: cli.output,
        config: cli.config,
    };

    let stdout = std::io::stdout();
    if let Err(e) = handle_convert(&args, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
