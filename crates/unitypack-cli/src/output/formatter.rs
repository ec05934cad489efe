//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use unitypack_core::UnpackReport;
use unitypack_core::UnpackResult;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format resolved input and output paths (verbose mode)
    fn format_paths(&self, input: &Path, output_dir: &Path);

    /// Format the result of unpacking to disk
    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()>;

    /// Format the tree a dry run would produce
    fn format_dry_run(&self, input: &Path, result: &UnpackResult) -> Result<()>;

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
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }

    pub fn warning(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Warning,
            data: Some(data),
        }
    }
}
