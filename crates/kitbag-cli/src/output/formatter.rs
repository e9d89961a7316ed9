//! Output formatter trait for CLI results.

use anyhow::Result;
use kitbag_core::ArchiveSummary;
use kitbag_core::FileEntry;
use kitbag_core::GeneratedKey;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format a generated key
    fn format_key(&self, key: &GeneratedKey) -> Result<()>;

    /// Announce a directory whose files follow
    fn format_directory(&self, dir: &Path);

    /// Report one archived file
    fn format_file(&self, entry: &FileEntry);

    /// Format the archiving summary
    fn format_archive_result(&self, summary: &ArchiveSummary) -> Result<()>;

    /// Format the error that ended `operation`
    fn format_error(&self, operation: &str, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Warning,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn warning(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Warning,
            data: None,
            error: Some(message.into()),
        }
    }
}
