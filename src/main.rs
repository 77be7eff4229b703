use clap::Parser;
use job_scraper::{
    BrowserFetcher, CardPolicy, CrawlPipeline, FetchMode, Fetcher, HttpFetcher, Result,
    ScrapeConfig, SearchQuery,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "job_scraper",
    about = "Scrape job listings from ZipRecruiter, SimplyHired, Monster and Indeed into a CSV file",
    version
)]
struct Cli {
    /// Job title to search for.
    #[arg(long, default_value = "data analyst")]
    position: String,

    /// Where the job should be.
    #[arg(long, default_value = "New York")]
    location: String,

    /// CSV file to write (overwritten).
    #[arg(short, long, default_value = "jobs.csv")]
    output: PathBuf,

    /// How pages are loaded.
    #[arg(long, value_enum, default_value_t = FetchMode::Browser)]
    fetcher: FetchMode,

    /// Seconds to wait after opening a page in the browser.
    #[arg(long, default_value_t = 15)]
    wait_secs: u64,

    /// Run the browser without a window.
    #[arg(long)]
    headless: bool,

    /// Drop listings that have no title instead of writing "Not listed".
    #[arg(long)]
    require_title: bool,

    /// Directory for cookie files and failure snapshots.
    #[arg(long, default_value = ".")]
    state_dir: PathBuf,

    /// Do not load or save cookies.
    #[arg(long)]
    no_session: bool,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_config(&self) -> ScrapeConfig {
        let mut config = ScrapeConfig {
            output: self.output.clone(),
            fetch_mode: self.fetcher,
            state_dir: self.state_dir.clone(),
            persist_sessions: !self.no_session,
            card_policy: if self.require_title {
                CardPolicy::RequireTitle
            } else {
                CardPolicy::Lenient
            },
            ..Default::default()
        };
        config.browser.headless = self.headless;
        config.browser.settle_wait = Duration::from_secs(self.wait_secs);
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.to_config();
    let fetcher: Arc<dyn Fetcher> = match config.fetch_mode {
        FetchMode::Browser => {
            Arc::new(BrowserFetcher::new(config.browser.clone()).with_snapshots(&config.state_dir))
        }
        FetchMode::Http => Arc::new(HttpFetcher::new(&config.http)?),
    };

    let query = SearchQuery::new(&cli.position, &cli.location);
    let outcome = CrawlPipeline::standard(&config, fetcher)?
        .crawl(&query)?
        .save(&config.output)?;

    println!("{}", outcome);
    Ok(())
}
