//! The text-field surface as seen by widgets.
//!
//! Widgets only need value and disabled-flag access; keeping that behind a
//! trait lets tests count writes and lets hosts back fields with their own
//! storage.

use crate::id::InputId;

/// Read/write access to text field state.
///
/// Object-safe, so it can be used as `&mut dyn InputStore`.
pub trait InputStore {
    fn has(&self, id: InputId) -> bool;

    /// Returns the stored value for this field, if any.
    fn get(&self, id: InputId) -> Option<&str>;

    /// Overwrite the field's value.
    fn set(&mut self, id: InputId, value: String);

    /// Insert an entry with `initial` if none exists yet.
    fn ensure_initial(&mut self, id: InputId, initial: String);

    fn is_disabled(&self, id: InputId) -> bool;

    /// Returns `true` if the flag actually changed.
    fn set_disabled(&mut self, id: InputId, disabled: bool) -> bool;

    /// Monotonic revision counter for the field's value.
    fn value_revision(&self, id: InputId) -> u64;
}

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn has(&self, id: InputId) -> bool {
        crate::store::InputValueStore::has(self, id)
    }

    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn set(&mut self, id: InputId, value: String) {
        crate::store::InputValueStore::set(self, id, value)
    }

    #[inline]
    fn ensure_initial(&mut self, id: InputId, initial: String) {
        crate::store::InputValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn is_disabled(&self, id: InputId) -> bool {
        crate::store::InputValueStore::is_disabled(self, id)
    }

    #[inline]
    fn set_disabled(&mut self, id: InputId, disabled: bool) -> bool {
        crate::store::InputValueStore::set_disabled(self, id, disabled)
    }

    #[inline]
    fn value_revision(&self, id: InputId) -> u64 {
        crate::store::InputValueStore::value_revision(self, id)
    }
}
