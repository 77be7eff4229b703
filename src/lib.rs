pub mod board;
pub mod clients;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod fetchers;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod utils;
pub mod writer;

pub use board::{JobBoard, JobFieldExtractor};
pub use clients::{IndeedClient, MonsterClient, SimplyHiredClient, ZipRecruiterClient};
pub use config::{BrowserConfig, CardPolicy, FetchMode, HttpConfig, ScrapeConfig};
pub use error::Error;
pub use fetcher::{FetchRequest, Fetcher};
pub use fetchers::{BrowserFetcher, HttpFetcher};
pub use models::{JobRecord, NOT_LISTED, SearchQuery, Source};
pub use pipeline::{BoardCrawler, CrawlPipeline, Crawler, PipelineWithJobs};
pub use session::{SessionStore, StoredCookie};
pub use writer::{SaveOutcome, save_to_csv};

pub type Result<T> = std::result::Result<T, Error>;
