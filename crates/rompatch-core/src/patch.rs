//! Load, patch and store a ROM image in one session

use tracing::{debug, info};

use crate::config::PatchConfig;
use crate::error::{Error, Result};
use crate::pointer::relocate_pointer;
use crate::report::PatchReport;
use crate::scan::{find_and_replace_all, search};
use crate::storage::RomStorage;

pub struct Patcher<S: RomStorage> {
    storage: S,
    config: PatchConfig,
}

impl<S: RomStorage> Patcher<S> {
    pub fn new(storage: S, config: PatchConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Search the image without modifying it
    pub fn find(&self, pattern: &[u8], start: usize) -> Result<Option<usize>> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        let buffer = self.storage.load()?;
        Ok(search(&buffer, pattern, start))
    }

    /// Replace every occurrence of `pattern` and write the image back.
    ///
    /// The image is stored even when nothing matched. On error nothing is
    /// written.
    pub fn replace(&self, pattern: &[u8], replacement: &[u8]) -> Result<PatchReport> {
        let matches = self.session(|buffer| find_and_replace_all(buffer, pattern, replacement))?;
        info!("Patch session finished: {} replacement(s)", matches.len());
        Ok(PatchReport::new("replace", pattern, replacement, &matches))
    }

    /// Repoint every pointer to `old_offset` at `new_offset`
    pub fn relocate(&self, old_offset: u32, new_offset: u32) -> Result<PatchReport> {
        let base = self.config.pointer_base;
        let relocation =
            self.session(|buffer| relocate_pointer(buffer, old_offset, new_offset, base))?;
        info!(
            "Patch session finished: {} pointer(s) relocated",
            relocation.matches.len()
        );
        Ok(PatchReport::new(
            "relocate",
            &relocation.old_pointer,
            &relocation.new_pointer,
            &relocation.matches,
        ))
    }

    fn session<T, F>(&self, patch: F) -> Result<T>
    where
        F: FnOnce(&mut [u8]) -> Result<T>,
    {
        let mut buffer = self.storage.load()?;
        debug!("Patch session started on {} bytes", buffer.len());

        let outcome = patch(&mut buffer)?;
        self.storage.store(&buffer)?;
        Ok(outcome)
    }
}
