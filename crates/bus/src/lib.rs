use color::Color;
use core_types::{DomEventKind, WidgetId};
use input_core::InputId;
use std::sync::mpsc::{Receiver, Sender, channel};

mod listeners;

pub use listeners::Listeners;

/// A DOM event delivered by the host to a widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: DomEventKind,
    pub target: InputId,
    /// Key name for keyup events, when the host knows it.
    pub key: Option<String>,
}

impl DomEvent {
    pub fn change(target: InputId) -> Self {
        Self {
            kind: DomEventKind::Change,
            target,
            key: None,
        }
    }

    pub fn keyup(target: InputId, key: impl Into<String>) -> Self {
        Self {
            kind: DomEventKind::Keyup,
            target,
            key: Some(key.into()),
        }
    }
}

/// Notifications a picker emits for the rest of the page.
#[derive(Clone, Debug, PartialEq)]
pub enum PickerEvent {
    Create {
        widget: WidgetId,
        color: Option<Color>,
    },
    /// The widget's color was replaced.
    Change {
        widget: WidgetId,
        color: Option<Color>,
        value: String,
    },
    /// The picker rewrote its text field.
    InputChange {
        widget: WidgetId,
        color: Option<Color>,
        value: String,
    },
    Enable {
        widget: WidgetId,
    },
    Disable {
        widget: WidgetId,
    },
    Destroy {
        widget: WidgetId,
    },
}

impl PickerEvent {
    pub fn widget(&self) -> WidgetId {
        match self {
            PickerEvent::Create { widget, .. }
            | PickerEvent::Change { widget, .. }
            | PickerEvent::InputChange { widget, .. }
            | PickerEvent::Enable { widget }
            | PickerEvent::Disable { widget }
            | PickerEvent::Destroy { widget } => *widget,
        }
    }
}

pub struct Bus {
    pub evt_tx: Sender<PickerEvent>, // shareable with every widget on the page
    pub evt_rx: Receiver<PickerEvent>,
}

impl Bus {
    pub fn new() -> Self {
        let (evt_tx, evt_rx) = channel();
        Self { evt_tx, evt_rx }
    }

    /// Everything emitted so far, without blocking.
    pub fn drain(&self) -> Vec<PickerEvent> {
        self.evt_rx.try_iter().collect()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
