use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The browser engine could not be started. Aborts the whole run.
    #[error("browser unavailable: {0}")]
    Launch(String),

    #[error("browser error: {0}")]
    Browser(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("session file error: {0}")]
    Session(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Fatal errors stop the fallback chain instead of counting as an empty source.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Launch(_) | Self::Selector { .. })
    }
}
