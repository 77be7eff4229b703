use crate::Result;
use crate::board::{JobBoard, JobFieldExtractor, absolute_link, first_attr, first_text, selector};
use crate::models::Source;
use scraper::{ElementRef, Selector};

pub struct SimplyHiredClient {
    card: Selector,
    /// Title anchor; also carries the listing href.
    title: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
}

impl SimplyHiredClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            card: selector("li.job-listing")?,
            title: selector("a.card-link")?,
            company: selector("span.jobposting-company")?,
            location: selector("span.jobposting-location")?,
            salary: selector("span.jobposting-salary")?,
        })
    }
}

impl JobBoard for SimplyHiredClient {
    fn source(&self) -> Source {
        Source::SimplyHired
    }

    fn separator(&self) -> char {
        '+'
    }

    fn card_selector(&self) -> &Selector {
        &self.card
    }

    fn build_url(&self, position: &str, location: &str) -> String {
        format!("{}/search?q={}&l={}", self.source().origin(), position, location)
    }
}

impl JobFieldExtractor for SimplyHiredClient {
    fn extract_title(&self, card: &ElementRef) -> Option<String> {
        first_text(card, &self.title)
    }

    fn extract_company(&self, card: &ElementRef) -> Option<String> {
        first_text(card, &self.company)
    }

    fn extract_location(&self, card: &ElementRef) -> Option<String> {
        first_text(card, &self.location)
    }

    fn extract_salary(&self, card: &ElementRef) -> Option<String> {
        first_text(card, &self.salary)
    }

    fn extract_link(&self, card: &ElementRef) -> Option<String> {
        let href = first_attr(card, &self.title, "href")?;
        absolute_link(self.source().origin(), &href)
    }
}
