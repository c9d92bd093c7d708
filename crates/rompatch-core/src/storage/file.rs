use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::RomStorage;
use crate::error::Result;

/// ROM image backed by a file on disk
#[derive(Debug, Clone)]
pub struct RomFile {
    path: PathBuf,
}

impl RomFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RomStorage for RomFile {
    fn load(&self) -> Result<Vec<u8>> {
        let buffer = fs::read(&self.path)?;
        debug!("Loaded {} bytes from {}", buffer.len(), self.path.display());
        Ok(buffer)
    }

    fn store(&self, buffer: &[u8]) -> Result<()> {
        fs::write(&self.path, buffer)?;
        debug!("Wrote {} bytes to {}", buffer.len(), self.path.display());
        Ok(())
    }
}
