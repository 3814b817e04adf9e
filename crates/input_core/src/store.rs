//! Central store for text field values, carets and disabled flags.
//!
//! The store knows nothing about layout or events. Hosts translate key
//! presses into the editing calls below and read values back for painting.

use crate::id::InputId;
use crate::state::InputState;
use crate::text::{clamp_to_char_boundary, filter_single_line, prev_cursor_boundary};
use std::collections::HashMap;

/// Text field state keyed by [`InputId`].
///
/// ```
/// use input_core::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "#ff00".to_string());
/// store.insert_text(id, "00");
///
/// assert_eq!(store.get(id), Some("#ff0000"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns the stored value for this field, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    pub fn caret(&self, id: InputId) -> Option<usize> {
        self.values.get(&id).map(|s| s.caret)
    }

    /// Monotonic revision counter for the field's value; 0 for unknown fields.
    pub fn value_revision(&self, id: InputId) -> u64 {
        self.values.get(&id).map_or(0, |s| s.value_rev)
    }

    /// Overwrite the value. The caret moves to the end; the disabled flag is kept.
    pub fn set(&mut self, id: InputId, value: String) {
        let st = self.values.entry(id).or_default();
        st.caret = value.len();
        st.value = value;
        mark_text_dirty(st);
    }

    /// Insert an entry with `initial` if none exists yet.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.values
            .entry(id)
            .or_insert_with(|| InputState::with_value(initial));
    }

    pub fn is_disabled(&self, id: InputId) -> bool {
        self.values.get(&id).is_some_and(|s| s.disabled)
    }

    /// Returns `true` if the flag actually changed.
    pub fn set_disabled(&mut self, id: InputId, disabled: bool) -> bool {
        let st = self.values.entry(id).or_default();
        let changed = st.disabled != disabled;
        st.disabled = disabled;
        changed
    }

    /// Type `s` at the caret. Newlines are stripped; disabled fields ignore input.
    pub fn insert_text(&mut self, id: InputId, s: &str) {
        let st = self.values.entry(id).or_default();
        if st.disabled {
            return;
        }
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }

        let caret = clamp_to_char_boundary(&st.value, st.caret);
        st.value.insert_str(caret, &s);
        st.caret = caret + s.len();
        mark_text_dirty(st);
    }

    /// Delete the char before the caret. Disabled fields ignore input.
    pub fn backspace(&mut self, id: InputId) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        if st.disabled {
            return;
        }

        let caret = clamp_to_char_boundary(&st.value, st.caret);
        if caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&st.value, caret);
        st.value.drain(prev..caret);
        st.caret = prev;
        mark_text_dirty(st);
    }

    /// Place the caret at byte index `caret`, clamped to a char boundary.
    pub fn set_caret(&mut self, id: InputId, caret: usize) {
        if let Some(st) = self.values.get_mut(&id) {
            st.caret = clamp_to_char_boundary(&st.value, caret);
        }
    }
}

fn mark_text_dirty(st: &mut InputState) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
