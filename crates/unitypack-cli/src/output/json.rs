//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use unitypack_core::UnpackReport;
use unitypack_core::UnpackResult;

pub struct JsonFormatter;

#[derive(Serialize)]
struct UnpackOutput {
    files_restored: usize,
    meta_files_restored: usize,
    groups_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl From<&UnpackReport> for UnpackOutput {
    fn from(report: &UnpackReport) -> Self {
        Self {
            files_restored: report.files_restored,
            meta_files_restored: report.meta_files_restored,
            groups_skipped: report.groups_skipped,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

#[derive(Serialize)]
struct DryRunFile<'a> {
    path: &'a str,
    size: usize,
    is_meta_file: bool,
}

#[derive(Serialize)]
struct DryRunOutput<'a> {
    input: String,
    file_count: usize,
    structure: &'a [String],
    files: Vec<DryRunFile<'a>>,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn dry_run_output<'a>(input: &Path, result: &'a UnpackResult) -> DryRunOutput<'a> {
        DryRunOutput {
            input: input.display().to_string(),
            file_count: result.file_count,
            structure: &result.structure,
            files: result
                .files
                .iter()
                .map(|f| DryRunFile {
                    path: &f.path,
                    size: f.content.len(),
                    is_meta_file: f.is_meta_file,
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_paths(&self, _input: &Path, _output_dir: &Path) {
        // Paths are implied by the invocation; nothing to add to the document
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        let output = JsonOutput::success("unpack", UnpackOutput::from(report));
        Self::output(&output)
    }

    fn format_dry_run(&self, input: &Path, result: &UnpackResult) -> Result<()> {
        let output = JsonOutput::success("dry-run", Self::dry_run_output(input, result));
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData<'a> {
            message: &'a str,
        }

        // Warnings go to stderr so stdout stays a single document
        let output = JsonOutput::warning("warning", WarningData { message });
        if let Ok(json) = serde_json::to_string(&output) {
            let _ = writeln!(io::stderr(), "{json}");
        }
    }
}
