use crate::models::Source;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// How pages are obtained. Chosen per deployment, never switched mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FetchMode {
    /// Drive a real Chromium session (cookies, CAPTCHA wait, scrolling).
    #[default]
    Browser,
    /// One plain GET per source.
    Http,
}

/// What to do with a card whose title cannot be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPolicy {
    /// Title falls back to "Not listed" like every other field.
    #[default]
    Lenient,
    /// Drop the card without emitting a record.
    RequireTitle,
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub user_agent: String,
    pub window_size: (u32, u32),
    /// Fixed wait after navigation, long enough to click through a CAPTCHA.
    pub settle_wait: Duration,
    /// Extra wait after scrolling, picked uniformly from this range (ms).
    pub scroll_wait_ms: (u64, u64),
    pub timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            window_size: (1920, 1080),
            settle_wait: Duration::from_secs(15),
            scroll_wait_ms: (2000, 3000),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// Candidate pre-request delays (ms); one is chosen at random per request.
    pub delays_ms: Vec<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            delays_ms: vec![1000, 1500, 2000],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub output: PathBuf,
    pub fetch_mode: FetchMode,
    /// Directory for cookie files and failure snapshots.
    pub state_dir: PathBuf,
    pub persist_sessions: bool,
    pub card_policy: CardPolicy,
    pub browser: BrowserConfig,
    pub http: HttpConfig,
}

impl ScrapeConfig {
    pub fn cookie_file(&self, source: Source) -> PathBuf {
        self.state_dir.join(source.cookie_file_name())
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("jobs.csv"),
            fetch_mode: FetchMode::default(),
            state_dir: PathBuf::from("."),
            persist_sessions: true,
            card_policy: CardPolicy::default(),
            browser: BrowserConfig::default(),
            http: HttpConfig::default(),
        }
    }
}
