//! Per-file outcomes and the batch summary built from them.

use std::path::PathBuf;

use crate::error::Error;

/// Result of normalizing one file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was rewritten; `thumbnail` is the content size before padding.
    Normalized {
        file_name: String,
        thumbnail: (u32, u32),
    },
    /// The file was skipped and left as it was, unless the failure happened
    /// while writing.
    Failed { file_name: String, error: Error },
}

impl FileOutcome {
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Normalized { file_name, .. } | Self::Failed { file_name, .. } => file_name,
        }
    }

    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        matches!(self, Self::Normalized { .. })
    }
}

/// Everything one `normalize_directory` run did.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub directory: PathBuf,
    /// Set when the directory did not exist; no files were looked at.
    pub directory_missing: bool,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    #[must_use]
    pub fn normalized(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_normalized()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.normalized()
    }

    /// True when the directory existed and every file succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.directory_missing && self.failed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let report = BatchReport {
            directory: PathBuf::from("img"),
            directory_missing: false,
            outcomes: vec![
                FileOutcome::Normalized {
                    file_name: "a.png".to_string(),
                    thumbnail: (10, 10),
                },
                FileOutcome::Failed {
                    file_name: "b.png".to_string(),
                    error: Error::InvalidParameter {
                        name: "x".to_string(),
                        reason: "y".to_string(),
                    },
                },
            ],
        };

        assert_eq!(report.normalized(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.outcomes[1].file_name(), "b.png");
    }

    #[test]
    fn test_missing_directory_is_not_clean() {
        let report = BatchReport {
            directory_missing: true,
            ..BatchReport::default()
        };
        assert!(!report.is_clean());
        assert_eq!(report.failed(), 0);
    }
}
