use crate::Result;
use crate::models::Source;
use crate::session::SessionStore;

/// One page load for one source.
pub struct FetchRequest<'a> {
    pub source: Source,
    pub url: &'a str,
    /// Cookies to restore before, and persist after, the page load.
    pub session: Option<&'a SessionStore>,
}

/// Turns a search URL into raw HTML.
pub trait Fetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<String>;
}
