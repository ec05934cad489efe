//! CLI argument parsing using clap.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "unity-unpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the .unitypackage file to unpack
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    pub input: Option<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Fail on identifier folders that have no pathname member
    #[arg(long)]
    pub strict: bool,

    /// Show the reconstructed tree without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Directory in which the temporary scratch area is created
    #[arg(long, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum, exclusive = true)]
    pub completions: Option<Shell>,
}
