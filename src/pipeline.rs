use crate::Result;
use crate::board::JobBoard;
use crate::clients::boards_by_priority;
use crate::config::{CardPolicy, ScrapeConfig};
use crate::fetcher::{FetchRequest, Fetcher};
use crate::models::{JobRecord, SearchQuery, Source};
use crate::session::SessionStore;
use crate::writer::{SaveOutcome, save_to_csv};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// One attempt at one source.
pub trait Crawler {
    fn source(&self) -> Source;

    fn start_crawl(&self, query: &SearchQuery) -> Result<Vec<JobRecord>>;
}

/// Fetches a board's search page and extracts its cards.
pub struct BoardCrawler {
    board: Box<dyn JobBoard>,
    fetcher: Arc<dyn Fetcher>,
    session: Option<SessionStore>,
    policy: CardPolicy,
}

impl BoardCrawler {
    pub fn new(board: Box<dyn JobBoard>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            board,
            fetcher,
            session: None,
            policy: CardPolicy::default(),
        }
    }

    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_policy(mut self, policy: CardPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Crawler for BoardCrawler {
    fn source(&self) -> Source {
        self.board.source()
    }

    fn start_crawl(&self, query: &SearchQuery) -> Result<Vec<JobRecord>> {
        let url = self.board.search_url(query);
        info!(source = %self.source(), %url, "requesting");

        let html = self.fetcher.fetch(&FetchRequest {
            source: self.source(),
            url: &url,
            session: self.session.as_ref(),
        })?;

        let jobs = self.board.extract_with(&html, self.policy);
        info!(source = %self.source(), count = jobs.len(), "cards extracted");
        Ok(jobs)
    }
}

/// Tries sources in order and keeps the first non-empty result.
pub struct CrawlPipeline {
    crawlers: Vec<Box<dyn Crawler>>,
}

#[must_use = "pipeline must end with .save() to write the results"]
pub struct PipelineWithJobs {
    jobs: Vec<JobRecord>,
}

impl CrawlPipeline {
    pub fn new() -> Self {
        Self {
            crawlers: Vec::new(),
        }
    }

    /// Every board in priority order, sharing one fetcher.
    pub fn standard(config: &ScrapeConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        let pipeline = boards_by_priority()?
            .into_iter()
            .map(|board| {
                let source = board.source();
                let crawler = BoardCrawler::new(board, Arc::clone(&fetcher))
                    .with_policy(config.card_policy);
                if config.persist_sessions {
                    crawler.with_session(SessionStore::new(config.cookie_file(source)))
                } else {
                    crawler
                }
            })
            .fold(Self::new(), |pipeline, crawler| pipeline.then(crawler));
        Ok(pipeline)
    }

    /// Appends a lower-priority source.
    pub fn then(mut self, crawler: impl Crawler + 'static) -> Self {
        self.crawlers.push(Box::new(crawler));
        self
    }

    pub fn sources(&self) -> Vec<Source> {
        self.crawlers.iter().map(|crawler| crawler.source()).collect()
    }

    /// Runs the fallback chain. A source whose fetch fails counts as empty
    /// unless the failure is fatal, which aborts the chain.
    pub fn run(&self, query: &SearchQuery) -> Result<Vec<JobRecord>> {
        for (attempt, crawler) in self.crawlers.iter().enumerate() {
            let source = crawler.source();
            if attempt == 0 {
                info!(
                    %source,
                    position = %query.position,
                    location = %query.location,
                    "trying first source"
                );
            } else {
                info!(%source, "falling back");
            }

            match crawler.start_crawl(query) {
                Ok(jobs) if !jobs.is_empty() => {
                    info!(%source, count = jobs.len(), "source returned jobs");
                    return Ok(jobs);
                }
                Ok(_) => warn!(%source, "no jobs found"),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => warn!(%source, "fetch failed: {}", e),
            }
        }

        warn!("every source came back empty");
        Ok(Vec::new())
    }

    pub fn crawl(self, query: &SearchQuery) -> Result<PipelineWithJobs> {
        let jobs = self.run(query)?;
        Ok(PipelineWithJobs { jobs })
    }
}

impl Default for CrawlPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineWithJobs {
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn save(self, path: impl AsRef<Path>) -> Result<SaveOutcome> {
        save_to_csv(&self.jobs, path.as_ref())
    }
}
