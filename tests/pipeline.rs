//! Fallback chain behaviour, with stub sources and a canned-HTML fetcher.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use job_scraper::{
    BoardCrawler, CrawlPipeline, Crawler, Error, FetchRequest, Fetcher, IndeedClient, JobRecord,
    MonsterClient, Result, SaveOutcome, SearchQuery, Source, ZipRecruiterClient,
};

// ─────────────────────── helpers ───────────────────────

/// A source that returns a fixed number of records and counts its calls.
struct StubCrawler {
    source: Source,
    yields: usize,
    calls: Rc<Cell<usize>>,
}

impl StubCrawler {
    fn new(source: Source, yields: usize) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let stub = Self {
            source,
            yields,
            calls: Rc::clone(&calls),
        };
        (stub, calls)
    }
}

impl Crawler for StubCrawler {
    fn source(&self) -> Source {
        self.source
    }

    fn start_crawl(&self, query: &SearchQuery) -> Result<Vec<JobRecord>> {
        self.calls.set(self.calls.get() + 1);
        Ok((0..self.yields)
            .map(|i| {
                JobRecord::new(
                    self.source,
                    Some(format!("{} #{}", query.position, i)),
                    Some("Synthetic Co".to_string()),
                    Some(query.location.clone()),
                    None,
                    Some(format!("{}/job/{}", self.source.origin(), i)),
                )
            })
            .collect())
    }
}

/// A source whose fetch always fails.
struct FailingCrawler {
    source: Source,
    fatal: bool,
}

impl Crawler for FailingCrawler {
    fn source(&self) -> Source {
        self.source
    }

    fn start_crawl(&self, _query: &SearchQuery) -> Result<Vec<JobRecord>> {
        if self.fatal {
            Err(Error::Launch("chrome not found".to_string()))
        } else {
            Err(Error::Browser("navigation timed out".to_string()))
        }
    }
}

/// Serves canned HTML per source and records the URLs requested.
#[derive(Default)]
struct CannedFetcher {
    pages: HashMap<Source, String>,
    requested: Mutex<Vec<String>>,
}

impl Fetcher for CannedFetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<String> {
        self.requested.lock().unwrap().push(request.url.to_string());
        self.pages
            .get(&request.source)
            .cloned()
            .ok_or_else(|| Error::Browser(format!("{} blocked the request", request.source)))
    }
}

fn query() -> SearchQuery {
    SearchQuery::new("data analyst", "New York")
}

// ─────────────────────── fallback chain ───────────────────────

#[test]
fn first_non_empty_source_wins() {
    let (a, a_calls) = StubCrawler::new(Source::ZipRecruiter, 2);
    let (b, b_calls) = StubCrawler::new(Source::SimplyHired, 5);
    let (c, c_calls) = StubCrawler::new(Source::Monster, 5);

    let jobs = CrawlPipeline::new().then(a).then(b).then(c).run(&query()).unwrap();

    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|job| job.source() == Source::ZipRecruiter));
    assert_eq!(a_calls.get(), 1);
    assert_eq!(b_calls.get(), 0);
    assert_eq!(c_calls.get(), 0);
}

#[test]
fn empty_sources_fall_through_to_the_next() {
    let (a, a_calls) = StubCrawler::new(Source::ZipRecruiter, 0);
    let (b, b_calls) = StubCrawler::new(Source::SimplyHired, 3);
    let (c, c_calls) = StubCrawler::new(Source::Monster, 1);

    let jobs = CrawlPipeline::new().then(a).then(b).then(c).run(&query()).unwrap();

    assert_eq!(jobs.len(), 3);
    assert!(jobs.iter().all(|job| job.source() == Source::SimplyHired));
    assert_eq!((a_calls.get(), b_calls.get(), c_calls.get()), (1, 1, 0));
}

#[test]
fn all_empty_sources_give_empty_output_and_no_file() {
    let (a, a_calls) = StubCrawler::new(Source::ZipRecruiter, 0);
    let (b, b_calls) = StubCrawler::new(Source::SimplyHired, 0);
    let (c, c_calls) = StubCrawler::new(Source::Monster, 0);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("jobs.csv");

    let result = CrawlPipeline::new().then(a).then(b).then(c).crawl(&query()).unwrap();
    assert!(result.jobs().is_empty());

    let outcome = result.save(&output).unwrap();
    assert_eq!(outcome, SaveOutcome::NoRecords);
    assert_eq!(outcome.to_string(), "No jobs found to save");
    assert!(!output.exists());
    assert_eq!((a_calls.get(), b_calls.get(), c_calls.get()), (1, 1, 1));
}

#[test]
fn failed_fetch_counts_as_empty_source() {
    let (b, b_calls) = StubCrawler::new(Source::Monster, 1);

    let jobs = CrawlPipeline::new()
        .then(FailingCrawler {
            source: Source::ZipRecruiter,
            fatal: false,
        })
        .then(b)
        .run(&query())
        .unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].source(), Source::Monster);
    assert_eq!(b_calls.get(), 1);
}

#[test]
fn fatal_error_stops_the_chain() {
    let (b, b_calls) = StubCrawler::new(Source::Monster, 1);

    let err = CrawlPipeline::new()
        .then(FailingCrawler {
            source: Source::ZipRecruiter,
            fatal: true,
        })
        .then(b)
        .run(&query())
        .unwrap_err();

    assert!(matches!(err, Error::Launch(_)));
    assert_eq!(b_calls.get(), 0);
}

#[test]
fn empty_pipeline_returns_nothing() {
    assert!(CrawlPipeline::new().run(&query()).unwrap().is_empty());
}

// ─────────────────────── board crawlers ───────────────────────

const MONSTER_PAGE: &str = r#"
    <html><body>
      <div class="job-card">
        <h2 class="job-title">Data Analyst II</h2>
        <span class="company-name">Proseware</span>
        <span class="location">Queens, NY</span>
        <a class="job-link" href="/job-openings/data-analyst-ii--77">Apply</a>
      </div>
      <div class="job-card">
        <h2 class="job-title">Junior Data Analyst</h2>
        <span class="company-name">Proseware</span>
        <span class="location">New York, NY</span>
        <span class="salary">$60,000</span>
        <a class="job-link" href="/job-openings/junior-data-analyst--78">Apply</a>
      </div>
    </body></html>
"#;

#[test]
fn board_crawlers_fall_back_past_blocked_and_empty_pages() {
    let fetcher = Arc::new(CannedFetcher {
        pages: HashMap::from([
            (Source::Monster, MONSTER_PAGE.to_string()),
            (
                Source::Indeed,
                "<html><body><h1>Checking your browser</h1></body></html>".to_string(),
            ),
        ]),
        ..Default::default()
    });
    let shared: Arc<dyn Fetcher> = fetcher.clone();

    let jobs = CrawlPipeline::new()
        .then(BoardCrawler::new(
            Box::new(ZipRecruiterClient::new().unwrap()),
            Arc::clone(&shared),
        ))
        .then(BoardCrawler::new(
            Box::new(IndeedClient::new().unwrap()),
            Arc::clone(&shared),
        ))
        .then(BoardCrawler::new(
            Box::new(MonsterClient::new().unwrap()),
            Arc::clone(&shared),
        ))
        .run(&query())
        .unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title(), "Data Analyst II");
    assert_eq!(jobs[0].salary(), "Not listed");
    assert_eq!(
        jobs[1].link(),
        "https://www.monster.com/job-openings/junior-data-analyst--78"
    );

    let requested = fetcher.requested.lock().unwrap();
    assert_eq!(
        *requested,
        vec![
            "https://www.ziprecruiter.com/jobs-search?search=data-analyst&location=New-York",
            "https://www.indeed.com/jobs?q=data+analyst&l=New+York",
            "https://www.monster.com/jobs/search?q=data-analyst&where=New-York",
        ]
    );
}

#[test]
fn standard_pipeline_uses_fixed_priority() {
    let config = job_scraper::ScrapeConfig::default();
    let fetcher: Arc<dyn Fetcher> = Arc::new(CannedFetcher::default());

    let pipeline = CrawlPipeline::standard(&config, fetcher).unwrap();

    assert_eq!(
        pipeline.sources(),
        vec![
            Source::ZipRecruiter,
            Source::SimplyHired,
            Source::Monster,
            Source::Indeed
        ]
    );
}
