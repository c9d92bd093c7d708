//! Replace command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use rompatch_core::{PatchConfig, Patcher, RomFile, parse_pattern};

use super::finish_report;

/// Run the replace command
pub fn run(
    rom: &Path,
    pattern: &str,
    replacement: &str,
    config: PatchConfig,
    report_path: Option<&Path>,
) -> Result<()> {
    let pattern = parse_pattern(pattern).context("Failed to parse search pattern")?;
    let replacement = parse_pattern(replacement).context("Failed to parse replacement")?;

    let patcher = Patcher::new(RomFile::new(rom), config);
    let report = patcher
        .replace(&pattern, &replacement)
        .with_context(|| format!("Failed to patch {}", rom.display()))?;

    finish_report(&report, report_path)
}
