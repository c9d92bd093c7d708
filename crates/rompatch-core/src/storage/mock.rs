//! In-memory storage for tests

use std::cell::{Cell, RefCell};

use super::RomStorage;
use crate::error::Result;

#[derive(Debug)]
pub struct MockStorage {
    buffer: RefCell<Vec<u8>>,
    stores: Cell<usize>,
}

impl MockStorage {
    pub fn new(buffer: Vec<u8>) -> Self {
        Self {
            buffer: RefCell::new(buffer),
            stores: Cell::new(0),
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        self.buffer.borrow().clone()
    }

    /// Number of times `store` has been called
    pub fn store_count(&self) -> usize {
        self.stores.get()
    }
}

impl RomStorage for MockStorage {
    fn load(&self) -> Result<Vec<u8>> {
        Ok(self.buffer.borrow().clone())
    }

    fn store(&self, buffer: &[u8]) -> Result<()> {
        *self.buffer.borrow_mut() = buffer.to_vec();
        self.stores.set(self.stores.get() + 1);
        Ok(())
    }
}
