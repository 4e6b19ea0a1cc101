//! quill: highlight search results from the command line
//!
//! Commands:
//! - highlight: read a JSON array of result strings and print highlighted fragments
//! - search: look a query up in a local text corpus, then highlight the hits
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quill_core::types::{AppConfig, MatchMode, Query, read_results};
use quill_search::{Corpus, Highlighter};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Highlight query matches in search results", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to quill.toml (defaults are used when absent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ModeArgs {
    /// Query to highlight
    #[arg(short, long)]
    query: String,

    /// Match the whole query as a single phrase
    #[arg(short, long)]
    exact: bool,

    /// Match words by edit distance (takes precedence over --exact)
    #[arg(short, long)]
    fuzzy: bool,
}

impl ModeArgs {
    fn mode(&self) -> MatchMode {
        MatchMode {
            exact: self.exact,
            fuzzy: self.fuzzy,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight a JSON array of result strings
    Highlight {
        #[command(flatten)]
        mode: ModeArgs,

        /// JSON file with the results, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        results: String,
    },

    /// Search a text corpus and highlight the hits
    Search {
        #[command(flatten)]
        mode: ModeArgs,

        /// Corpus text file
        #[arg(short = 'C', long)]
        corpus: PathBuf,

        /// Print the raw result windows without highlighting
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = load_config(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Highlight { mode, results } => {
            let results = load_results(&results)?;
            Highlighter::new(config.highlight).highlight(&results, &mode.query, mode.mode())
        }
        Commands::Search { mode, corpus, raw } => search(&config, &mode, &corpus, raw)?,
    };

    if output.is_empty() {
        info!("no matching results");
    }

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

/// Logs go to stderr so stdout stays pure JSON. `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let config = AppConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let errors = config.validate();
    if errors.is_empty() {
        return Ok(config);
    }
    for error in &errors {
        warn!(%error, "invalid config value, using default");
    }
    Ok(config.with_defaults_for_invalid())
}

fn load_results(source: &str) -> Result<Vec<String>> {
    let reader: Box<dyn Read> = if source == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(source).with_context(|| format!("Failed to open {source}"))?;
        Box::new(BufReader::new(file))
    };

    let results = read_results(reader).context("Failed to read results")?;
    debug!(count = results.len(), "read results");
    Ok(results)
}

fn search(config: &AppConfig, args: &ModeArgs, path: &Path, raw: bool) -> Result<Vec<String>> {
    let corpus = Corpus::load(path)
        .with_context(|| format!("Failed to load corpus from {}", path.display()))?;

    let mode = args.mode();
    let terms = Query::new(args.query.as_str()).terms_for(mode.strategy());

    let results = if mode.fuzzy {
        corpus.search_fuzzy(&terms, &config.corpus)
    } else {
        corpus.search(&terms, &config.corpus)
    };
    debug!(count = results.len(), strategy = %mode.strategy(), "corpus search finished");

    if raw {
        return Ok(results);
    }

    Ok(Highlighter::new(config.highlight.clone()).highlight(&results, &args.query, mode))
}
