pub mod file_slot;
pub mod memory_slot;

use std::rc::Rc;

use eyre::Result;

/// One durable string-keyed slot, the moral equivalent of the browser
/// localStorage entry the web client wrote its notification set to.
///
/// `load` returns `Ok(None)` when the slot has never been written;
/// callers decide what an unparseable payload means.
pub trait StorageSlot {
    fn load(&self) -> Result<Option<String>>;
    fn store(&self, payload: &str) -> Result<()>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for Rc<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn store(&self, payload: &str) -> Result<()> {
        (**self).store(payload)
    }
}
