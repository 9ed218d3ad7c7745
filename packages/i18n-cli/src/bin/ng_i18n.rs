/**
 * Angular I18n CLI - ng-i18n
 *
 * Applies a translation to a template fixture and prints the translated
 * structure
 */
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::Level;

use angular_core::I18nConfig;
use angular_i18n_cli::{format_report, run, Fixture};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ng-i18n", version, about = "Apply a translation to a template fixture")]
struct Cli {
    /// JSON fixture: tokens, placeholder maps, creation instructions, bindings
    fixture: PathBuf,

    /// JSON runtime configuration
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log build and reconcile details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = execute(&cli) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => I18nConfig::from_file(path)?,
        None => I18nConfig::default(),
    };
    let fixture = Fixture::from_file(&cli.fixture)?;
    let report = run(&fixture, &config)?;

    match cli.format {
        OutputFormat::Text => print!("{}", format_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
