use serde::{Serialize, Serializer};
use std::fmt;

/// Rendered in place of any field the card did not provide.
pub const NOT_LISTED: &str = "Not listed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    Indeed,
    ZipRecruiter,
    SimplyHired,
    Monster,
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Indeed => "Indeed",
            Self::ZipRecruiter => "ZipRecruiter",
            Self::SimplyHired => "SimplyHired",
            Self::Monster => "Monster",
        }
    }

    /// Lowercase identifier used for per-source state files.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Indeed => "indeed",
            Self::ZipRecruiter => "ziprecruiter",
            Self::SimplyHired => "simplyhired",
            Self::Monster => "monster",
        }
    }

    pub fn cookie_file_name(&self) -> String {
        format!("{}_cookies.json", self.slug())
    }

    pub fn snapshot_file_name(&self) -> String {
        format!("{}_error.html", self.slug())
    }

    pub fn origin(&self) -> &'static str {
        match self {
            Self::Indeed => "https://www.indeed.com",
            Self::ZipRecruiter => "https://www.ziprecruiter.com",
            Self::SimplyHired => "https://www.simplyhired.com",
            Self::Monster => "https://www.monster.com",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One job listing. Missing fields stay `None` and render as [`NOT_LISTED`].
///
/// Column order of the serialized form is the field order below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    #[serde(serialize_with = "listed")]
    title: Option<String>,
    #[serde(serialize_with = "listed")]
    company: Option<String>,
    #[serde(serialize_with = "listed")]
    location: Option<String>,
    #[serde(serialize_with = "listed")]
    salary: Option<String>,
    #[serde(serialize_with = "listed")]
    link: Option<String>,
    source: Source,
}

impl JobRecord {
    pub fn new(
        source: Source,
        title: Option<String>,
        company: Option<String>,
        location: Option<String>,
        salary: Option<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            title: non_empty(title),
            company: non_empty(company),
            location: non_empty(location),
            salary: non_empty(salary),
            link: non_empty(link),
            source,
        }
    }

    pub fn title(&self) -> &str {
        or_not_listed(&self.title)
    }

    pub fn company(&self) -> &str {
        or_not_listed(&self.company)
    }

    pub fn location(&self) -> &str {
        or_not_listed(&self.location)
    }

    pub fn salary(&self) -> &str {
        or_not_listed(&self.salary)
    }

    pub fn link(&self) -> &str {
        or_not_listed(&self.link)
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_not_listed(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_LISTED)
}

fn listed<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(or_not_listed(value))
}

/// Free-text search terms shared by every source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub position: String,
    pub location: String,
}

impl SearchQuery {
    pub fn new(position: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            location: location.into(),
        }
    }
}
