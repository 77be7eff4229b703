use crate::config::BrowserConfig;
use crate::fetcher::{FetchRequest, Fetcher};
use crate::models::Source;
use crate::session::{SessionStore, StoredCookie};
use crate::utils::jitter_delay;
use crate::{Error, Result};
use headless_chrome::protocol::cdp::Network::{Cookie, CookieParam};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Loads pages in a real Chromium window, one browser per fetch.
///
/// The window stays visible by default so a person can clear a CAPTCHA
/// during the settle wait.
pub struct BrowserFetcher {
    config: BrowserConfig,
    snapshot_dir: Option<PathBuf>,
}

impl BrowserFetcher {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            snapshot_dir: None,
        }
    }

    /// Write the page HTML to `<dir>/<source>_error.html` when a fetch fails.
    pub fn with_snapshots(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = Some(dir.into());
        self
    }

    fn create_browser(&self) -> Result<Browser> {
        let user_agent = format!("--user-agent={}", self.config.user_agent);
        let args = vec![
            OsStr::new(&user_agent),
            OsStr::new("--disable-blink-features=AutomationControlled"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--disable-extensions"),
            OsStr::new("--start-maximized"),
        ];

        Browser::new(LaunchOptions {
            headless: self.config.headless,
            sandbox: false,
            ignore_certificate_errors: true,
            window_size: Some(self.config.window_size),
            idle_browser_timeout: idle_timeout(&self.config),
            args,
            ..Default::default()
        })
        .map_err(|e| Error::Launch(e.to_string()))
    }

    fn load_page(&self, tab: &Arc<Tab>, request: &FetchRequest) -> Result<String> {
        if let Some(session) = request.session {
            self.restore_session(tab, request.source, session)?;
        }

        tab.navigate_to(request.url).map_err(browser_error)?;
        tab.wait_until_navigated().map_err(browser_error)?;

        info!(
            source = %request.source,
            wait_secs = self.config.settle_wait.as_secs(),
            "waiting for the page to settle; solve any CAPTCHA in the browser window"
        );
        std::thread::sleep(self.config.settle_wait);

        self.scroll_down(tab)?;
        let html = tab.get_content().map_err(browser_error)?;

        if let Some(session) = request.session {
            self.save_session(tab, request.source, session);
        }

        Ok(html)
    }

    fn restore_session(
        &self,
        tab: &Arc<Tab>,
        source: Source,
        session: &SessionStore,
    ) -> Result<()> {
        let cookies = match session.load() {
            Ok(cookies) => cookies,
            Err(e) => {
                warn!(
                    %source,
                    path = %session.path().display(),
                    "ignoring unreadable cookie file: {}", e
                );
                return Ok(());
            }
        };
        if cookies.is_empty() {
            return Ok(());
        }

        info!(%source, count = cookies.len(), "restoring saved cookies");
        tab.navigate_to(source.origin()).map_err(browser_error)?;
        tab.wait_until_navigated().map_err(browser_error)?;

        let params: Vec<CookieParam> = cookies.iter().filter_map(to_cookie_param).collect();
        if let Err(e) = tab.set_cookies(params) {
            warn!(%source, "could not restore cookies: {}", e);
            return Ok(());
        }
        tab.reload(false, None).map_err(browser_error)?;
        Ok(())
    }

    fn save_session(&self, tab: &Arc<Tab>, source: Source, session: &SessionStore) {
        let cookies = match tab.get_cookies() {
            Ok(cookies) => cookies,
            Err(e) => {
                warn!(%source, "could not read cookies: {}", e);
                return;
            }
        };
        let stored: Vec<StoredCookie> = cookies.iter().map(StoredCookie::from).collect();

        match session.store(&stored) {
            Ok(()) => debug!(
                %source,
                count = stored.len(),
                path = %session.path().display(),
                "cookies saved"
            ),
            Err(e) => warn!(
                %source,
                path = %session.path().display(),
                "could not save cookies: {}", e
            ),
        }
    }

    fn scroll_down(&self, tab: &Arc<Tab>) -> Result<()> {
        tab.evaluate("window.scrollTo(0, document.body.scrollHeight)", false)
            .map_err(browser_error)?;
        jitter_delay(self.config.scroll_wait_ms);
        Ok(())
    }

    fn save_snapshot(&self, tab: &Arc<Tab>, source: Source) {
        let Some(dir) = &self.snapshot_dir else {
            return;
        };
        let path = dir.join(source.snapshot_file_name());

        let written = tab
            .get_content()
            .map_err(browser_error)
            .and_then(|html| fs::write(&path, html).map_err(Error::from));
        match written {
            Ok(()) => info!(%source, path = %path.display(), "saved page source"),
            Err(e) => warn!(%source, "could not save page source: {}", e),
        }
    }
}

impl Fetcher for BrowserFetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<String> {
        let browser = self.create_browser()?;
        let tab = browser.new_tab().map_err(browser_error)?;
        tab.set_default_timeout(self.config.timeout);

        self.load_page(&tab, request)
            .inspect_err(|_| self.save_snapshot(&tab, request.source))
    }
}

impl From<&Cookie> for StoredCookie {
    fn from(cookie: &Cookie) -> Self {
        Self {
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain: cookie.domain.clone(),
            path: cookie.path.clone(),
            secure: cookie.secure,
            http_only: cookie.http_only,
            expires: (!cookie.session && cookie.expires > 0.0).then_some(cookie.expires),
        }
    }
}

/// The stored shape uses the protocol's field names, so a JSON hop converts it.
fn to_cookie_param(cookie: &StoredCookie) -> Option<CookieParam> {
    serde_json::to_value(cookie)
        .and_then(serde_json::from_value)
        .inspect_err(|e| debug!(name = %cookie.name, "skipping cookie: {}", e))
        .ok()
}

/// The driver drops a silent connection after this long, so it must outlast
/// the settle wait plus the scroll pause.
fn idle_timeout(config: &BrowserConfig) -> Duration {
    let busy = config.settle_wait
        + Duration::from_millis(config.scroll_wait_ms.1)
        + Duration::from_secs(30);
    config.timeout.max(busy)
}

fn browser_error(e: impl Display) -> Error {
    Error::Browser(e.to_string())
}
