//! Keeps the widget's text field and its color in sync.
//!
//! User -> Model: change/keyup events read the field and hand differing text
//! to [`PickerHost::set_value`]. Model -> User: [`InputHandler::update`]
//! writes the formatted color back, except while the user is typing an
//! invalid value and the widget has not opted into auto-correction.

mod seed;

pub use seed::{ElementData, SeedValue, seed_fields_from_dom};

use crate::host::{EventAlias, LastEvent, PickerHost};
use crate::options::PickerOptions;
use bus::{DomEvent, PickerEvent};
use core_types::DomEventKind;
use html::{Id, Node, find_node_by_id, query_selector};
use input_core::{InputId, InputStore};
use seed::{pick_seed, seed_candidates};

/// Listener namespace owned by the input handler.
pub const NAMESPACE: &str = "colorpicker-input";

/// The widget's binding to its (optional) text field.
///
/// Whether a field exists is decided once, in [`InputHandler::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputHandler {
    field: Option<InputId>,
}

impl InputHandler {
    /// Locate the field for the widget rooted at `element`: the element itself
    /// if it is an `<input>`, else the first match of `options.input` inside it.
    pub fn resolve(dom: &Node, element: Id, options: &PickerOptions) -> Self {
        Self {
            field: Self::resolve_node(dom, element, options).map(|n| InputId::from(n.id())),
        }
    }

    fn resolve_node<'a>(dom: &'a Node, element: Id, options: &PickerOptions) -> Option<&'a Node> {
        let Some(el) = find_node_by_id(dom, element) else {
            log::debug!(target: "colorpicker.input", "widget element {element:?} not in document");
            return None;
        };
        if el.is_element_named("input") {
            return Some(el);
        }
        let selector = options.input.trim();
        if selector.is_empty() {
            return None;
        }
        query_selector(el, selector)
    }

    /// Write the initial text into the field, picked from (in order) its
    /// current value, its `color` data entry and its `data-color` attribute.
    ///
    /// Colors are rendered through [`Self::get_formatted_color`]; other
    /// non-text data is dropped in favour of the empty string.
    pub fn init_value<H: PickerHost>(&self, host: &mut H, dom: &Node, data: &ElementData) {
        let Some(id) = self.field else {
            return;
        };
        let Some(node) = html::Id::try_from(id)
            .ok()
            .and_then(|dom_id| find_node_by_id(dom, dom_id))
        else {
            return;
        };

        let value = match pick_seed(seed_candidates(node, host.fields(), data)) {
            None => String::new(),
            Some(SeedValue::Text(s)) => s,
            Some(SeedValue::Color(c)) => {
                let format = host.options().format.unwrap_or(c.source);
                self.get_formatted_color(host, Some(&c.to_string_in(format)))
            }
            Some(SeedValue::Other) => {
                log::debug!(target: "colorpicker.input", "ignoring non-text seed for {id:?}");
                String::new()
            }
        };

        host.fields_mut().set(id, value);
    }

    pub fn field(&self) -> Option<InputId> {
        self.field
    }

    pub fn has_input(&self) -> bool {
        self.field.is_some()
    }

    pub fn bind<H: PickerHost>(&self, host: &mut H) {
        let Some(id) = self.field else {
            return;
        };
        let listeners = host.listeners_mut();
        listeners.subscribe(id, DomEventKind::Change, NAMESPACE);
        listeners.subscribe(id, DomEventKind::Keyup, NAMESPACE);
    }

    pub fn unbind<H: PickerHost>(&self, host: &mut H) {
        if let Some(id) = self.field {
            host.listeners_mut().unsubscribe_namespace(id, NAMESPACE);
        }
    }

    /// Raw field text; `None` when there is no field.
    pub fn get_value<H: PickerHost>(&self, host: &H) -> Option<String> {
        let id = self.field?;
        Some(host.fields().get(id).unwrap_or("").to_string())
    }

    /// Write `candidate` into the field and announce it, unless the field
    /// already shows exactly that text.
    pub fn set_value<H: PickerHost>(&self, host: &mut H, candidate: &str) {
        let Some(id) = self.field else {
            return;
        };
        if host.fields().get(id).unwrap_or("") == candidate {
            log::trace!(target: "colorpicker.input", "field already shows {candidate:?}");
            return;
        }

        host.fields_mut().set(id, candidate.to_string());
        let event = PickerEvent::InputChange {
            widget: host.widget_id(),
            color: host.color().copied(),
            value: candidate.to_string(),
        };
        host.emit(event);
    }

    /// `raw` (or the widget's current color when `raw` is empty) resolved
    /// through the color model, without a leading `#` if the widget hides it.
    pub fn get_formatted_color<H: PickerHost>(&self, host: &H, raw: Option<&str>) -> String {
        let raw = match raw.filter(|s| !s.is_empty()) {
            Some(raw) => raw.to_string(),
            None => match host.safe_color_string() {
                Some(s) if !s.is_empty() => s,
                _ => return String::new(),
            },
        };

        let resolved = host.resolve_color(&raw);
        if host.options().use_hash_prefix {
            resolved
        } else {
            resolved.trim_start_matches('#').to_string()
        }
    }

    pub fn is_disabled<H: PickerHost>(&self, host: &H) -> bool {
        self.field.is_some_and(|id| host.fields().is_disabled(id))
    }

    pub fn disable<H: PickerHost>(&self, host: &mut H) {
        if let Some(id) = self.field {
            host.fields_mut().set_disabled(id, true);
        }
    }

    pub fn enable<H: PickerHost>(&self, host: &mut H) {
        if let Some(id) = self.field {
            host.fields_mut().set_disabled(id, false);
        }
    }

    /// Push the widget's color into the field.
    ///
    /// Skipped when auto-fallback is off and either the color is invalid or
    /// the user is mid-typing (last event was a keyup).
    pub fn update<H: PickerHost>(&self, host: &mut H) {
        if !self.has_input() {
            return;
        }
        if !host.options().auto_input_fallback
            && (host.is_invalid_color() || host.last_event().is(EventAlias::InputKeyup))
        {
            log::debug!(
                target: "colorpicker.input",
                "field update suppressed (invalid={}, last={:?})",
                host.is_invalid_color(),
                host.last_event().alias
            );
            return;
        }

        let formatted = self.get_formatted_color(host, None);
        self.set_value(host, &formatted);
    }

    pub fn on_change<H: PickerHost>(&self, host: &mut H, event: DomEvent) {
        self.on_user_event(host, EventAlias::InputChange, event);
    }

    pub fn on_keyup<H: PickerHost>(&self, host: &mut H, event: DomEvent) {
        self.on_user_event(host, EventAlias::InputKeyup, event);
    }

    fn on_user_event<H: PickerHost>(&self, host: &mut H, alias: EventAlias, event: DomEvent) {
        if !self.has_input() {
            return;
        }
        *host.last_event_mut() = LastEvent::new(alias, event);

        let Some(value) = self.get_value(host) else {
            return;
        };
        if value != self.get_formatted_color(host, None) {
            log::debug!(target: "colorpicker.input", "{alias}: forwarding {value:?}");
            host.set_value(&value);
        }
    }
}
