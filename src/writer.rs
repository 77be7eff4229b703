use crate::{JobRecord, Result};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { count: usize, path: PathBuf },
    /// Nothing to write; any existing file is left untouched.
    NoRecords,
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written { count, path } => {
                write!(f, "Saved {} jobs to {}", count, path.display())
            }
            Self::NoRecords => f.write_str("No jobs found to save"),
        }
    }
}

/// Writes one header row and one row per job, replacing `file_path`.
pub fn save_to_csv(jobs: &[JobRecord], file_path: &Path) -> Result<SaveOutcome> {
    if jobs.is_empty() {
        return Ok(SaveOutcome::NoRecords);
    }

    let file = File::create(file_path)?;
    let mut writer = csv::Writer::from_writer(file);

    for job in jobs {
        writer.serialize(job)?;
    }

    writer.flush()?;
    info!(count = jobs.len(), path = %file_path.display(), "csv written");

    Ok(SaveOutcome::Written {
        count: jobs.len(),
        path: file_path.to_path_buf(),
    })
}
