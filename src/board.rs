use crate::config::CardPolicy;
use crate::models::{JobRecord, SearchQuery, Source};
use crate::utils::{join_terms, normalize_text};
use crate::{Error, Result};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Per-field lookups inside one listing card. `None` means the field is not listed.
pub trait JobFieldExtractor {
    fn extract_title(&self, card: &ElementRef) -> Option<String>;

    fn extract_company(&self, card: &ElementRef) -> Option<String>;

    fn extract_location(&self, card: &ElementRef) -> Option<String>;

    fn extract_salary(&self, card: &ElementRef) -> Option<String>;

    fn extract_link(&self, card: &ElementRef) -> Option<String>;
}

/// A job board: how to query it and how to read its result cards.
pub trait JobBoard: JobFieldExtractor {
    fn source(&self) -> Source;

    /// Replaces whitespace inside search terms in the query URL.
    fn separator(&self) -> char;

    fn card_selector(&self) -> &Selector;

    /// Builds the search URL from already-joined terms.
    fn build_url(&self, position: &str, location: &str) -> String;

    fn search_url(&self, query: &SearchQuery) -> String {
        let separator = self.separator();
        self.build_url(
            &join_terms(&query.position, separator),
            &join_terms(&query.location, separator),
        )
    }

    fn extract(&self, html: &str) -> Vec<JobRecord> {
        self.extract_with(html, CardPolicy::default())
    }

    fn extract_with(&self, html: &str, policy: CardPolicy) -> Vec<JobRecord> {
        let document = Html::parse_document(html);

        document
            .select(self.card_selector())
            .filter_map(|card| {
                let job = self.parse_card(&card);
                if policy == CardPolicy::RequireTitle && !job.has_title() {
                    debug!(source = %self.source(), "dropping card without a title");
                    return None;
                }
                Some(job)
            })
            .collect()
    }

    fn parse_card(&self, card: &ElementRef) -> JobRecord {
        JobRecord::new(
            self.source(),
            self.extract_title(card),
            self.extract_company(card),
            self.extract_location(card),
            self.extract_salary(card),
            self.extract_link(card),
        )
    }
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Normalized text of the first match under `card`, if any and non-blank.
pub fn first_text(card: &ElementRef, selector: &Selector) -> Option<String> {
    let element = card.select(selector).next()?;
    let text = normalize_text(&element.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

pub fn first_attr(card: &ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()?
        .value()
        .attr(attr)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Resolves `href` against the board origin. Absolute hrefs pass through.
pub fn absolute_link(origin: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    Url::parse(origin)
        .and_then(|base| base.join(href))
        .ok()
        .map(|url| url.to_string())
}
