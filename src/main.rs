use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, error::ErrorKind};
use indicatif::ProgressBar;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tmsearch::{
    FacetCategory, PageLocation, SearchBackend, SearchClient, SearchConfig, SearchParams,
    Selection, StatusFilter,
    formatters::{OutputFormat, write_outcome},
    interactive_ratatui::{
        ClipboardService, DisplayMode, FacetDisplayPolicy, InteractiveSearch, UiConfig,
        ui::app_state::AppState,
    },
    logging::{self, LogTarget},
    search::{DEFAULT_ENDPOINT, DEFAULT_ORIGIN},
};
use tracing::info;
use url::Url;

#[derive(Parser)]
#[command(
    name = "tmsearch",
    version,
    about = "Search US trademarks from the terminal, filtered by status, owner, law firm and attorney",
    long_about = None
)]
struct Cli {
    /// Start from a location such as http://localhost:3000/search?query=nike&status=pending
    #[arg(long)]
    url: Option<String>,

    /// Search query (overrides the query in --url)
    #[arg(short, long)]
    query: Option<String>,

    /// Status filter: registered, pending, abandoned, others (overrides --url)
    #[arg(short, long)]
    status: Option<StatusFilter>,

    /// Search API endpoint
    #[arg(long, env = "TMSEARCH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Origin used for share links
    #[arg(long, env = "TMSEARCH_ORIGIN", default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// How selected facet entries are listed
    #[arg(long, value_enum, default_value = "selected-only")]
    facet_display: FacetDisplayPolicy,

    /// Initial result layout
    #[arg(long, value_enum, default_value = "list")]
    display: DisplayMode,

    /// Run one search, print the results and exit
    #[arg(short, long)]
    print: bool,

    /// Output format for --print
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Only include this owner (repeatable, --print only)
    #[arg(long = "owner")]
    owners: Vec<String>,

    /// Only include this law firm (repeatable, --print only)
    #[arg(long = "law-firm")]
    law_firms: Vec<String>,

    /// Only include this attorney (repeatable, --print only)
    #[arg(long = "attorney")]
    attorneys: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn selection(&self) -> Selection {
        let mut selection = Selection::new();
        for (category, keys) in [
            (FacetCategory::Owners, &self.owners),
            (FacetCategory::LawFirms, &self.law_firms),
            (FacetCategory::Attorneys, &self.attorneys),
        ] {
            for key in keys {
                if !selection.contains(category, key) {
                    selection.toggle(category, key);
                }
            }
        }
        selection
    }

    /// Location the session starts from: --url, then --query/--status on top
    fn startup_location(&self, origin: &Url) -> Result<PageLocation> {
        let base = match &self.url {
            Some(url) => {
                PageLocation::parse(url).with_context(|| format!("Invalid --url: {url}"))?
            }
            None => PageLocation::for_search(origin, "", StatusFilter::All),
        };

        if self.query.is_none() && self.status.is_none() {
            return Ok(base);
        }

        let query = self.query.clone().unwrap_or_else(|| base.query());
        let status = self.status.unwrap_or_else(|| base.status());
        Ok(PageLocation::for_search(origin, &query, status))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(
        cli.verbose,
        LogTarget::for_mode(!cli.print, cli.log_file.clone()),
    )?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = SearchConfig::new(&cli.endpoint, &cli.origin, cli.timeout_secs)?;
    let location = cli.startup_location(&config.origin)?;
    info!(endpoint = %config.endpoint, location = %location, "tmsearch starting");

    let client = SearchClient::new(config.clone()).context("Failed to build HTTP client")?;

    if cli.print {
        return run_print(&cli, &client, &location);
    }

    let state = AppState::new(
        config.origin.clone(),
        UiConfig {
            facet_policy: cli.facet_display,
            display_mode: cli.display,
        },
    );
    let mut interactive =
        InteractiveSearch::new(state, Arc::new(client), Box::new(ClipboardService::new()));
    interactive.run(location)
}

fn run_print(cli: &Cli, client: &SearchClient, location: &PageLocation) -> Result<()> {
    let params = SearchParams::new(location.query(), location.status(), cli.selection());
    if !params.is_searchable() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "--print needs a non-empty query (use --query or --url)",
            )
            .exit();
    }

    let spinner = io::stderr().is_terminal().then(|| {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Searching for \"{}\"...", params.query));
        spinner
    });

    let start = Instant::now();
    let result = client.search(&params);
    let duration = start.elapsed();

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = result.map_err(|e| anyhow!(e.user_message()))?;
    info!(hits = outcome.hits.len(), "search finished in {}ms", duration.as_millis());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_outcome(&mut handle, cli.format, &outcome, duration, !cli.no_color)?;

    if cli.format == OutputFormat::Text && !outcome.hits.is_empty() {
        eprintln!("⏱️  Search completed in {}ms", duration.as_millis());
    }

    Ok(())
}
