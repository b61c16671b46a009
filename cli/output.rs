use codebundle_core::{BundleSummary, ResponseFile};
use colored::*;
use std::path::Path;

pub fn print_bundle_summary(summary: &BundleSummary, quiet: bool) {
    if !summary.skipped.is_empty() && !quiet {
        eprintln!(
            "\n{}",
            "⚠️ Warning: Some files could not be read and were skipped:".yellow()
        );
        for path in &summary.skipped {
            eprintln!(" - {}", path.display());
        }
        eprintln!("---");
    }
    if quiet {
        return;
    }
    println!(
        "{} Bundle created: {} ({} files, {} bytes)",
        "✅".green(),
        summary.output.display().to_string().blue(),
        summary.files_written.to_string().cyan(),
        summary.bytes_written.to_string().cyan()
    );
}

pub fn print_rsp_saved(path: &Path, rsp: &ResponseFile, quiet: bool) {
    if quiet {
        return;
    }
    println!(
        "{} Response file saved to: {}",
        "✅".green(),
        path.display().to_string().blue()
    );
    println!("   {}", rsp.to_command_line().dimmed());
    println!(
        "   Replay it with: {}",
        format!("codebundle @{}", path.display()).cyan()
    );
}
