//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod find;
pub mod hex_utils;
pub mod relocate;
pub mod replace;

use std::path::Path;

use anyhow::{Context, Result};
use rompatch_core::PatchReport;

/// Print replaced offsets and optionally save the report
pub(crate) fn finish_report(report: &PatchReport, path: Option<&Path>) -> Result<()> {
    if report.match_count == 0 {
        println!("No matches found, ROM written back unchanged");
    } else {
        println!("Replaced {} occurrence(s):", report.match_count);
        for offset in &report.offsets {
            println!("  {}", offset);
        }
    }

    if let Some(path) = path {
        report
            .save(path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
