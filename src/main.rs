//! websearch CLI - query a configured search backend from the terminal.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::time::timeout;
use tracing_subscriber::EnvFilter;

use websearch::{Registry, ResultRecord, SearchConfig, SearchQuery};

/// websearch - pluggable web search CLI
#[derive(Parser)]
#[command(name = "websearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search using the configured backend
    Search(SearchArgs),

    /// List available search engines
    Engines,
}

#[derive(Parser)]
struct SearchArgs {
    /// Search keyword
    keyword: String,

    /// Engine to use (overrides SEARCH_ENGINE)
    /// Available: baidu, bing, serper
    #[arg(short, long)]
    engine: Option<String>,

    /// Maximum number of results (overrides MAX_RESULTS)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Whole-search timeout in seconds
    #[arg(short, long, default_value = "30")]
    timeout: u64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Log per-page pagination progress
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Engines => list_engines(),
    }
}

fn list_engines() -> Result<()> {
    println!("Available search engines:\n");
    println!("  Scraping:");
    println!("    baidu    - Baidu (百度) web search");
    println!("    bing     - Bing web search");
    println!();
    println!("  API:");
    println!("    serper   - Google via the Serper API (requires SERPER_API_KEY)");
    println!();
    println!("Usage: websearch search \"keyword\" -e baidu");
    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let mut config = SearchConfig::from_env();
    if let Some(engine) = args.engine {
        config.engine = engine;
    }
    if let Some(limit) = args.limit {
        config.max_results = limit;
    }

    let registry = Registry::from_config(&config)?;
    let backend = registry.select(&config.engine)?;

    let query = SearchQuery::new(&args.keyword)
        .with_limit(config.max_results)
        .with_debug(args.debug);

    let results = match timeout(Duration::from_secs(args.timeout), backend.search(&query)).await {
        Ok(results) => results,
        Err(_) => anyhow::bail!("search timed out after {}s", args.timeout),
    };

    match args.format {
        OutputFormat::Text => {
            println!(
                "\nSearch results for \"{}\" via {} ({} results):\n",
                args.keyword,
                backend.name(),
                results.len()
            );

            for (i, record) in results.iter().enumerate() {
                println!("{}. {}", i + 1, record.title);
                println!("   URL: {}", record.link);
                if !record.content.is_empty() {
                    println!("   {}", display_snippet(record));
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Compact => {
            for record in &results {
                println!("{}\t{}", record.title, record.link);
            }
        }
    }

    Ok(())
}

fn display_snippet(record: &ResultRecord) -> String {
    const DISPLAY_LEN: usize = 150;
    if record.content.chars().count() > DISPLAY_LEN {
        let truncated: String = record.content.chars().take(DISPLAY_LEN).collect();
        format!("{truncated}...")
    } else {
        record.content.clone()
    }
}
