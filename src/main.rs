use bytesize::ByteSize;
use clap::Parser;
use docscan::config::Config;
use docscan::error::ConfigError;
use docscan::report::{read_scan_directory, Scanner};
use docscan::search::{parse_terms, ContextWidth, SearchMode, SearchRequest};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Search PDF, DOCX, XLSX/XLS and text files for one or more terms
#[derive(Parser, Debug)]
#[command(name = "docscan", version)]
struct Cli {
    /// Directory whose files are scanned (subdirectories are not entered)
    #[arg(required_unless_present = "write_config")]
    directory: Option<PathBuf>,

    /// Search terms separated by ';'
    #[arg(short, long, required_unless_present = "write_config")]
    terms: Option<String>,

    /// Characters of context around each match; 0 prints exact occurrences only
    #[arg(short, long, allow_hyphen_values = true, conflicts_with = "count_only")]
    context: Option<String>,

    /// Only report how many times each term occurs per location
    #[arg(long)]
    count_only: bool,

    /// Write the report to a file (e.g. search_report.txt) instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a default configuration file (to --config or the default location) and exit
    #[arg(long)]
    write_config: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn write_config(path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path().ok_or(ConfigError::NoConfigDir)?,
    };
    if Config::create_default_at(&path)? {
        tracing::info!(path = %path.display(), "default configuration written");
    } else {
        tracing::warn!(path = %path.display(), "configuration file already exists");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if cli.write_config {
        return write_config(cli.config.as_deref());
    }
    let (Some(directory), Some(raw_terms)) = (&cli.directory, &cli.terms) else {
        return Err("a directory and --terms are required".into());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let terms = parse_terms(raw_terms);
    if terms.is_empty() {
        return Err("at least one search term is required".into());
    }

    let mode = if cli.count_only {
        SearchMode::CountOnly
    } else {
        SearchMode::Context(ContextWidth::resolve(
            cli.context.as_deref(),
            config.context_policy(),
        ))
    };

    // Bound the work up front; the scan itself has no timeout
    let total: u64 = read_scan_directory(directory)?
        .iter()
        .map(|entry| entry.size)
        .sum();
    if total > config.limits.max_total_bytes {
        return Err(format!(
            "input too large ({} > {})",
            ByteSize(total),
            ByteSize(config.limits.max_total_bytes)
        )
        .into());
    }

    let request = SearchRequest::new(terms, mode);
    let report = Scanner::default().scan_directory(directory, &request)?;
    let text = report.to_string();

    match &cli.output {
        Some(path) => {
            fs::write(path, &text)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
