use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shakesearch::config::ServiceConfig;
use shakesearch::index::stats;
use shakesearch::output;
use shakesearch::server::{self, protocol, SearchMode, SearchService};
use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "shakesearch")]
#[command(about = "Search the complete works of Shakespeare")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Complete-works text file
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Quote CSV file
    #[arg(long, global = true)]
    quotes: Option<PathBuf>,

    /// Treat the first CSV row as a header
    #[arg(long, global = true)]
    quotes_header: bool,

    /// HTTP port
    #[arg(short, long, env = "PORT", global = true)]
    port: Option<u16>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<IpAddr>,

        /// Directory of static files served at /
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Run a single query and print the results
    Search {
        /// Search query
        query: String,

        /// Which source to search: quotes, context, or all
        #[arg(short, long, default_value = "quotes")]
        mode: SearchMode,

        /// Print the JSON response body instead of formatted results
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show corpus and quote statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let mut config = ServiceConfig::load(cli.config.as_deref())?;
    if let Some(corpus) = cli.corpus {
        config.corpus_path = corpus;
    }
    if let Some(quotes) = cli.quotes {
        config.quotes_path = quotes;
    }
    if cli.quotes_header {
        config.quotes_has_header = true;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    match cli.command {
        Some(Commands::Serve { bind, static_dir }) => {
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }
            run_server(config).await?;
        }
        Some(Commands::Search {
            query,
            mode,
            json,
            no_color,
        }) => {
            run_search(&config, &query, mode, json, !no_color)?;
        }
        Some(Commands::Stats) => {
            let start = Instant::now();
            let service = load_service(&config)?;
            stats::show_stats(service.indexer(), service.matcher(), start.elapsed());
        }
        None => {
            run_server(config).await?;
        }
    }

    Ok(())
}

fn load_service(config: &ServiceConfig) -> Result<SearchService> {
    SearchService::load(config).context("Failed to load search sources")
}

async fn run_server(config: ServiceConfig) -> Result<()> {
    let service = Arc::new(load_service(&config)?);
    server::serve(&config, service).await
}

fn run_search(
    config: &ServiceConfig,
    query: &str,
    mode: SearchMode,
    json: bool,
    color: bool,
) -> Result<()> {
    if query.is_empty() {
        anyhow::bail!("{}", protocol::MISSING_QUERY_MESSAGE);
    }

    let service = load_service(config)?;
    let results = service.search(mode, query);

    if json {
        let body = protocol::encode_results(&results).context("Failed to encode results")?;
        std::io::stdout().write_all(&body)?;
    } else {
        output::print_results(&results, query, color)?;
    }

    Ok(())
}
