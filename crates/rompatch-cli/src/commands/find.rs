//! Find command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use rompatch_core::{PatchConfig, Patcher, RomFile, format_pattern, parse_pattern};

use super::hex_utils::{format_hex_offset, parse_hex_offset};

/// Run the find command
pub fn run(rom: &Path, pattern: &str, start: &str, config: PatchConfig) -> Result<()> {
    let pattern = parse_pattern(pattern).context("Failed to parse search pattern")?;
    let start = parse_hex_offset(start)? as usize;

    println!("{}", search_banner(rom, &pattern, start));

    let patcher = Patcher::new(RomFile::new(rom), config);
    let result = patcher
        .find(&pattern, start)
        .with_context(|| format!("Failed to search {}", rom.display()))?;

    match result {
        Some(offset) => println!("Found at {}", format_hex_offset(offset)),
        None => println!("Not found"),
    }

    Ok(())
}

/// Single-byte searches always cover the whole image, so no start is shown
fn search_banner(rom: &Path, pattern: &[u8], start: usize) -> String {
    let mut banner = format!("Searching {} for {}", rom.display(), format_pattern(pattern));
    if pattern.len() > 1 {
        banner.push_str(&format!(" from {}", format_hex_offset(start)));
    }
    banner
}
