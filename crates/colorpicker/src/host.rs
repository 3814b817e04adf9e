//! What the input synchronizer needs from the widget that owns it.

use crate::options::PickerOptions;
use bus::{DomEvent, Listeners, PickerEvent};
use color::Color;
use core_types::WidgetId;
use input_core::InputStore;
use std::fmt;

/// Kind of the most recent user interaction with the text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventAlias {
    InputChange,
    InputKeyup,
}

impl EventAlias {
    pub fn as_str(self) -> &'static str {
        match self {
            EventAlias::InputChange => "input.change",
            EventAlias::InputKeyup => "input.keyup",
        }
    }
}

impl fmt::Display for EventAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The last user-originated event, shared between the widget and its input
/// handler. Always replaced as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastEvent {
    pub alias: Option<EventAlias>,
    pub event: Option<DomEvent>,
}

impl LastEvent {
    pub fn new(alias: EventAlias, event: DomEvent) -> Self {
        Self {
            alias: Some(alias),
            event: Some(event),
        }
    }

    pub fn is(&self, alias: EventAlias) -> bool {
        self.alias == Some(alias)
    }
}

/// Widget-side contract consumed by [`InputHandler`](crate::InputHandler).
///
/// `set_value` may call back into the input handler (to refresh the field),
/// so handlers are `Copy` and take the host by `&mut` instead of being
/// borrowed out of it.
pub trait PickerHost {
    type Fields: InputStore;

    fn widget_id(&self) -> WidgetId;

    fn options(&self) -> &PickerOptions;

    /// Current color, if the widget holds a valid one.
    fn color(&self) -> Option<&Color>;

    /// Current color rendered in the widget format, or `None` when there is
    /// no valid color.
    fn safe_color_string(&self) -> Option<String>;

    fn is_invalid_color(&self) -> bool;

    /// Normalize a raw color string through the color model.
    fn resolve_color(&self, raw: &str) -> String;

    /// Widget-level color setter (the User -> Model entry point).
    fn set_value(&mut self, raw: &str);

    fn last_event(&self) -> &LastEvent;

    fn last_event_mut(&mut self) -> &mut LastEvent;

    fn fields(&self) -> &Self::Fields;

    fn fields_mut(&mut self) -> &mut Self::Fields;

    fn listeners_mut(&mut self) -> &mut Listeners;

    fn emit(&mut self, event: PickerEvent);
}
