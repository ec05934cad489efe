//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use unitypack_core::UnpackReport;
use unitypack_core::UnpackResult;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn success_line(&self, message: &str) -> String {
        if self.use_colors {
            format!("{} {message}", style("✓").green().bold())
        } else {
            format!("✓ {message}")
        }
    }

    fn write_warnings(&self, warnings: &[String]) {
        if warnings.is_empty() {
            return;
        }

        let _ = self.term.write_line("");
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{}", style("Warnings:").yellow().bold()));
        } else {
            let _ = self.term.write_line("Warnings:");
        }
        for warning in warnings {
            let _ = self.term.write_line(&format!("  - {warning}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_paths(&self, input: &Path, output_dir: &Path) {
        if !self.verbose || self.quiet {
            return;
        }

        let _ = self
            .term
            .write_line(&format!("Input file: {}", input.display()));
        let _ = self
            .term
            .write_line(&format!("Output directory: {}", output_dir.display()));
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self
            .term
            .write_line(&self.success_line("Unity package unpacked successfully"));

        let _ = self.term.write_line(&format!(
            "  Files restored:   {}",
            Self::format_number(report.files_restored)
        ));
        let _ = self.term.write_line(&format!(
            "  Meta files:       {}",
            Self::format_number(report.meta_files_restored)
        ));
        let _ = self.term.write_line(&format!(
            "  Total size:       {}",
            Self::format_size(report.bytes_written)
        ));

        if report.groups_skipped > 0 {
            let _ = self.term.write_line(&format!(
                "  Skipped folders:  {}",
                Self::format_number(report.groups_skipped)
            ));
        }

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration:         {:?}", report.duration));
        }

        self.write_warnings(&report.warnings);

        Ok(())
    }

    fn format_dry_run(&self, input: &Path, result: &UnpackResult) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self
            .term
            .write_line(&format!("Dry run: {} (nothing written)", input.display()));

        if !result.structure.is_empty() {
            let _ = self.term.write_line("");
            let _ = self.term.write_line("Directories:");
            for dir in &result.structure {
                let _ = self.term.write_line(&format!("  {dir}/"));
            }
        }

        if !result.files.is_empty() {
            let _ = self.term.write_line("");
            let _ = self.term.write_line("Files:");
            for file in &result.files {
                let size = Self::format_size(file.content.len() as u64);
                if self.use_colors && file.is_meta_file {
                    let _ = self.term.write_line(&format!(
                        "  {:>10}  {}",
                        size,
                        style(&file.path).dim()
                    ));
                } else {
                    let _ = self
                        .term
                        .write_line(&format!("  {:>10}  {}", size, file.path));
                }
            }
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} assets, {} meta files",
            Self::format_number(result.file_count),
            Self::format_number(result.files.len() - result.file_count)
        ));

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("Warning:").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("Warning: {message}"));
        }
    }
}
