//! # colorpicker
//!
//! Widget-side state for a colorpicker bound to a text field:
//! - [`ColorPicker`]: the widget (owns color, options, field store, listeners)
//! - [`InputHandler`]: two-way sync between the field text and the color
//! - [`ColorHandler`]: current color plus invalid-input/fallback policy
//! - [`PickerOptions`]: configuration, loadable from TOML
//!
//! Notifications leave through a [`bus::Bus`] sender as [`bus::PickerEvent`]s.

mod color_handler;
mod host;
mod input;
mod options;
mod picker;

pub use color_handler::{ColorHandler, ColorState};
pub use host::{EventAlias, LastEvent, PickerHost};
pub use input::{ElementData, InputHandler, NAMESPACE, SeedValue, seed_fields_from_dom};
pub use options::{OptionsError, PickerOptions};
pub use picker::ColorPicker;
