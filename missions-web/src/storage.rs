//! localStorage-backed implementation of the engine's storage seam.

use missions_game::{Slot, SlotStore};
use thiserror::Error;

/// Raised when localStorage itself is unusable (private browsing, quota,
/// detached window). Missing keys are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("browser storage failure: {0}")]
pub struct StorageError(pub String);

#[cfg(target_arch = "wasm32")]
fn storage_error(value: &wasm_bindgen::JsValue) -> StorageError {
    StorageError(crate::dom::js_error_message(value))
}

/// Two-slot store over the browser's `localStorage`.
///
/// Off wasm (server-side rendering tests) it is inert: reads see nothing
/// and writes vanish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl SlotStore for BrowserStore {
    type Error = StorageError;

    #[cfg(target_arch = "wasm32")]
    fn read(&self, slot: Slot) -> Result<Option<String>, Self::Error> {
        let storage = crate::dom::local_storage().map_err(|e| storage_error(&e))?;
        storage.get_item(slot.key()).map_err(|e| storage_error(&e))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read(&self, _slot: Slot) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    #[cfg(target_arch = "wasm32")]
    fn write(&self, slot: Slot, payload: &str) -> Result<(), Self::Error> {
        let storage = crate::dom::local_storage().map_err(|e| storage_error(&e))?;
        storage
            .set_item(slot.key(), payload)
            .map_err(|e| storage_error(&e))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _slot: Slot, _payload: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
