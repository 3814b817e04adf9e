//! # input_core
//!
//! UI-agnostic state for single-line text fields:
//! - [`InputId`]: opaque key for a field
//! - [`InputValueStore`]: values, carets, revisions and disabled flags
//! - [`InputStore`]: the trait widgets program against
//!
//! No event handling lives here. Widgets decide when to read and write; the
//! store only guarantees UTF-8-safe edits.

mod id;
mod state;
mod store;
mod text;
mod traits;

pub use id::InputId;
pub use store::InputValueStore;
pub use text::{clamp_to_char_boundary, filter_single_line, prev_cursor_boundary};
pub use traits::InputStore;
