//! Example: Listing and unpacking a Unity package with unitypack-core
//!
//! Run with: `cargo run --example inspect_package -- <FILE.unitypackage>`

use unitypack_core::UnpackConfig;
use unitypack_core::unpack_bytes;
use unitypack_core::unpack_package;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(input) = std::env::args().nth(1) else {
        eprintln!("usage: inspect_package <FILE.unitypackage>");
        std::process::exit(2);
    };

    // Example 1: In-memory listing, nothing is written
    println!("Example 1: In-memory listing");
    let bytes = std::fs::read(&input)?;
    let result = unpack_bytes(&bytes)?;
    for dir in &result.structure {
        println!("  {dir}/");
    }
    for file in result.assets() {
        println!("  {} ({} bytes)", file.path, file.content.len());
    }

    // Example 2: Reconstruction on disk, strict about orphaned folders
    println!("\nExample 2: Unpack to disk");
    let output = tempfile::tempdir()?;
    let config = UnpackConfig::default().with_strict(true);
    let report = unpack_package(&input, output.path(), &config)?;
    println!(
        "  Restored {} files and {} sidecars in {:?}",
        report.files_restored, report.meta_files_restored, report.duration
    );

    Ok(())
}
