use crate::Result;
use crate::board::{JobBoard, JobFieldExtractor, absolute_link, first_attr, first_text, selector};
use crate::models::Source;
use scraper::{ElementRef, Selector};

pub struct MonsterClient {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
    link: Selector,
}

impl MonsterClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            card: selector("div.job-card")?,
            title: selector("h2.job-title")?,
            company: selector("span.company-name")?,
            location: selector("span.location")?,
            salary: selector("span.salary")?,
            link: selector("a.job-link")?,
        })
    }
}

impl JobBoard for MonsterClient {
    fn source(&self) -> Source {
        Source::Monster
    }

    fn separator(&self) -> char {
        '-'
    }

    fn card_selector(&self) -> &Selector {
        &self.card
    }

    fn build_url(&self, position: &str, location: &str) -> String {
        format!(
            "{}/jobs/search?q={}&where={}",
            self.source().origin(),
            position,
            location
        )
    }
}

impl JobFieldExtractor for MonsterClient {
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
