use crate::Result;
use crate::board::{JobBoard, JobFieldExtractor, absolute_link, first_attr, first_text, selector};
use crate::models::Source;
use scraper::{ElementRef, Selector};

pub struct IndeedClient {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
    link: Selector,
}

impl IndeedClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            card: selector("div.job_seen_beacon")?,
            title: selector("h2.jobTitle")?,
            company: selector(r#"span[data-testid="company-name"]"#)?,
            location: selector(r#"div[data-testid="text-location"]"#)?,
            salary: selector("div.metadata.salary-snippet-container")?,
            // hrefs are site-relative (/rc/clk?jk=...)
            link: selector("a[href]")?,
        })
    }
}

impl JobBoard for IndeedClient {
    fn source(&self) -> Source {
        Source::Indeed
    }

    fn separator(&self) -> char {
        '+'
    }

    fn card_selector(&self) -> &Selector {
        &self.card
    }

    fn build_url(&self, position: &str, location: &str) -> String {
        format!("{}/jobs?q={}&l={}", self.source().origin(), position, location)
    }
}

impl JobFieldExtractor for IndeedClient {
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
        let href = first_attr(card, &self.link, "href")?;
        absolute_link(self.source().origin(), &href)
    }
}
