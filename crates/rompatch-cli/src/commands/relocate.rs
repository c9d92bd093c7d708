//! Relocate command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use rompatch_core::{PatchConfig, Patcher, PointerBase, RomFile};
use tracing::info;

use super::finish_report;
use super::hex_utils::parse_hex_offset;

/// Run the relocate command
pub fn run(
    rom: &Path,
    old: &str,
    new: &str,
    base: Option<&str>,
    mut config: PatchConfig,
    report_path: Option<&Path>,
) -> Result<()> {
    let old_offset = parse_hex_offset(old)?;
    let new_offset = parse_hex_offset(new)?;
    if let Some(base) = base {
        config.pointer_base = PointerBase(parse_hex_offset(base)?);
    }

    info!(
        "Relocating 0x{:X} -> 0x{:X} (base 0x{:X})",
        old_offset,
        new_offset,
        config.pointer_base.value()
    );

    let patcher = Patcher::new(RomFile::new(rom), config);
    let report = patcher
        .relocate(old_offset, new_offset)
        .with_context(|| format!("Failed to relocate pointers in {}", rom.display()))?;

    finish_report(&report, report_path)
}
