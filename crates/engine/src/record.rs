use crate::error::Result;
use std::path::PathBuf;

/// One selected file: its full path and either its text or why it could not be read.
#[derive(Debug)]
pub struct FileRecord {
    pub path: PathBuf,
    pub content: Result<String>,
}

impl FileRecord {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.content.is_err()
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files whose name matched and were reported.
    pub files: usize,
    /// Of those, how many were reported with an error instead of content.
    pub errors: usize,
}

impl ScanSummary {
    pub(crate) fn record(&mut self, record: &FileRecord) {
        self.files += 1;
        if record.is_error() {
            self.errors += 1;
        }
    }
}
