use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use gosearch::client::PKG_GO_DEV;
use gosearch::colors::{ColorChoice, init_colors};
use gosearch::{PkgGoDev, extract_packages, render_results};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;

#[derive(Parser)]
#[command(name = "gosearch")]
#[command(author, version, about = "Search pkg.go.dev for Go packages", long_about = None)]
struct Cli {
    /// Search query (multiple words are joined with spaces)
    query: Vec<String>,

    /// Max number of results to display
    #[arg(short, long, default_value_t = 10)]
    limit: u32,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Origin serving the search page
    #[arg(long, hide = true, default_value = PKG_GO_DEV)]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    init_colors(cli.color);

    if cli.query.is_empty() {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let query = cli.query.join(" ");
    let client = PkgGoDev::with_base_url(&cli.base_url)?;
    let url = client.search_url(&query, cli.limit)?;

    println!("{}", format!("Searching pkg.go.dev for: {}", query).bright_black());
    println!("{}", format!("Request URL: {}", url).bright_black());
    println!();

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());
    let spinner = if is_tty {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        pb.set_message("Fetching results...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let body = client.fetch(&url).await;
    spinner.finish_and_clear();
    let body = body.with_context(|| format!("Failed to search pkg.go.dev for '{}'", query))?;

    let records = extract_packages(&body).context("Failed to parse search results")?;
    tracing::info!("Found {} result(s)", records.len());

    let mut stdout = std::io::stdout().lock();
    render_results(&mut stdout, &records)?;
    stdout.flush()?;

    Ok(())
}
