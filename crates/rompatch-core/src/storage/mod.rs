mod file;

#[cfg(test)]
pub mod mock;

pub use file::RomFile;

#[cfg(test)]
pub use mock::MockStorage;

use crate::error::Result;

/// Load/store pair wrapped around a patch session
pub trait RomStorage {
    /// Read the whole image into memory
    fn load(&self) -> Result<Vec<u8>>;

    /// Write the (possibly modified) image back
    fn store(&self, buffer: &[u8]) -> Result<()>;
}
