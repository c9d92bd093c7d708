use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::scan::{MatchList, format_pattern};

/// Summary of one patch session, saved as JSON for later inspection
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub operation: String,
    pub pattern: String,
    pub replacement: String,
    pub match_count: usize,
    /// Offsets in hex string format
    pub offsets: Vec<String>,
}

impl PatchReport {
    pub fn new(operation: &str, pattern: &[u8], replacement: &[u8], matches: &MatchList) -> Self {
        Self {
            operation: operation.to_string(),
            pattern: format_pattern(pattern),
            replacement: format_pattern(replacement),
            match_count: matches.len(),
            offsets: matches.iter().map(|o| format!("0x{:X}", o)).collect(),
        }
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
