use std::cell::RefCell;

use eyre::Result;

use super::StorageSlot;

/// In-memory slot for tests and ephemeral sessions. Can be pre-seeded
/// with an arbitrary payload, including a deliberately corrupt one.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: RefCell<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: &str) -> Self {
        MemorySlot {
            payload: RefCell::new(Some(payload.to_string())),
        }
    }

    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl StorageSlot for MemorySlot {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn store(&self, payload: &str) -> Result<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
