use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use pubmed_paper_fetcher::{ClientConfig, Output, PubMedClient};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "pubmed-paper-fetcher",
    version,
    about = "Fetch PubMed articles with specific metadata",
    long_about = "Search PubMed and list, for each article, the authors affiliated with \
                  pharmaceutical or biotech companies"
)]
struct Cli {
    /// PubMed search query (quote multi-word queries)
    query: String,

    /// Output filename (CSV format); prints to the console when omitted
    #[arg(long, value_name = "FILE")]
    for_file: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "pubmed-paper-fetcher")]
    tool: String,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new().with_tool(&self.tool);

        if let Some(ref key) = self.api_key {
            config = config.with_api_key(key);
        }

        if let Some(ref email) = self.email {
            config = config.with_email(email);
        }

        config
    }
}

// Errors are reported, not propagated: the exit status stays 0.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "pubmed_paper_fetcher=debug,warn"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(EnvFilter::new(filter))
        .init();

    if let Err(err) = execute(&cli, cli.client_config()).await {
        // Nothing useful is left to do if stderr itself is gone
        let _ = report_error(&err, cli.debug, &mut io::stderr());
    }
}

async fn execute(cli: &Cli, config: ClientConfig) -> Result<()> {
    let client = PubMedClient::with_config(config).context("Failed to create HTTP client")?;

    let output = Output::from(cli.for_file.as_deref().map(Path::new));
    let mut stdout = io::stdout();

    pubmed_paper_fetcher::run(&client, &cli.query, output, &mut stdout)
        .await
        .with_context(|| format!("Query {:?} failed", cli.query))?;

    Ok(())
}

/// Print the error chain on one line; `debug` adds the full report
fn report_error<W: Write>(err: &anyhow::Error, debug: bool, out: &mut W) -> io::Result<()> {
    writeln!(out, "❌ Error: {:#}", err)?;
    if debug {
        writeln!(out, "{:?}", err)?;
    }
    Ok(())
}
