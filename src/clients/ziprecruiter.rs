use crate::Result;
use crate::board::{JobBoard, JobFieldExtractor, absolute_link, first_attr, first_text, selector};
use crate::models::Source;
use scraper::{ElementRef, Selector};

pub struct ZipRecruiterClient {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
    link: Selector,
}

impl ZipRecruiterClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            card: selector("article.job_result")?,
            title: selector("h2.job_title")?,
            company: selector("span.company_name")?,
            location: selector("span.job_location")?,
            salary: selector("span.job_salary")?,
            link: selector("a.job_link")?,
        })
    }
}

impl JobBoard for ZipRecruiterClient {
    fn source(&self) -> Source {
        Source::ZipRecruiter
    }

    fn separator(&self) -> char {
        '-'
    }

    fn card_selector(&self) -> &Selector {
        &self.card
    }

    fn build_url(&self, position: &str, location: &str) -> String {
        format!(
            "{}/jobs-search?search={}&location={}",
            self.source().origin(),
            position,
            location
        )
    }
}

impl JobFieldExtractor for ZipRecruiterClient {
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
