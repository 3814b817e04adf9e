use crate::color_handler::ColorHandler;
use crate::host::{LastEvent, PickerHost};
use crate::input::{ElementData, InputHandler, NAMESPACE};
use crate::options::PickerOptions;
use bus::{DomEvent, Listeners, PickerEvent};
use color::Color;
use core_types::{DomEventKind, WidgetId};
use html::{Id, Node};
use input_core::{InputStore, InputValueStore};
use std::sync::mpsc::Sender;

/// A colorpicker attached to one element of a document.
///
/// The picker owns its field store so that widget-level color changes can
/// refresh the field in the same call.
pub struct ColorPicker<S: InputStore = InputValueStore> {
    id: WidgetId,
    options: PickerOptions,
    colors: ColorHandler,
    last_event: LastEvent,
    input: InputHandler,
    fields: S,
    listeners: Listeners,
    events: Sender<PickerEvent>,
    disabled: bool,
}

impl<S: InputStore> ColorPicker<S> {
    /// Build a picker for `element`.
    ///
    /// `fields` should already hold the document's field values (see
    /// [`seed_fields_from_dom`](crate::seed_fields_from_dom)). The initial
    /// color is `options.color`, else the field's seeded text.
    pub fn new(
        id: WidgetId,
        dom: &Node,
        element: Id,
        data: &ElementData,
        options: PickerOptions,
        fields: S,
        events: Sender<PickerEvent>,
    ) -> Self {
        let input = InputHandler::resolve(dom, element, &options);
        let colors = ColorHandler::new(options.format, options.fallback_color.clone());
        let mut picker = Self {
            id,
            options,
            colors,
            last_event: LastEvent::default(),
            input,
            fields,
            listeners: Listeners::new(),
            events,
            disabled: false,
        };

        input.init_value(&mut picker, dom, data);

        let initial = picker
            .options
            .color
            .clone()
            .or_else(|| input.get_value(&picker).filter(|v| !v.is_empty()));
        if let Some(raw) = initial {
            picker.colors.create_color(&raw, true);
        }

        input.bind(&mut picker);
        log::debug!(
            target: "colorpicker",
            "created {id:?} (field: {:?}, color: {:?})",
            input.field(),
            picker.colors.color_string()
        );
        picker.emit(PickerEvent::Create {
            widget: id,
            color: picker.colors.color().copied(),
        });
        picker.update();
        picker
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn colors(&self) -> &ColorHandler {
        &self.colors
    }

    pub fn fields(&self) -> &S {
        &self.fields
    }

    /// Direct access for hosts that apply keystrokes to the field.
    pub fn fields_mut(&mut self) -> &mut S {
        &mut self.fields
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Replace the color with `raw`, announce it and refresh the field.
    ///
    /// Ignored while disabled, when `raw` names the current color, or when
    /// both `raw` and the current color are empty.
    pub fn set_value(&mut self, raw: &str) {
        if self.disabled {
            return;
        }
        if self.colors.is_same(raw) || (raw.is_empty() && !self.colors.has_color()) {
            return;
        }

        if raw.is_empty() {
            self.colors.clear();
        } else {
            self.colors.create_color(raw, self.options.auto_input_fallback);
        }
        self.emit(PickerEvent::Change {
            widget: self.id,
            color: self.colors.color().copied(),
            value: raw.to_string(),
        });
        self.update();
    }

    pub fn color(&self) -> Option<&Color> {
        self.colors.color()
    }

    /// Refresh every part of the widget from the current color.
    pub fn update(&mut self) {
        let input = self.input;
        input.update(self);
    }

    /// Route a DOM event from the host. Only events the input handler is
    /// subscribed to reach it, and nothing gets through while disabled.
    pub fn handle_event(&mut self, event: DomEvent) {
        if self.input.field() != Some(event.target)
            || !self
                .listeners
                .is_subscribed(event.target, event.kind, NAMESPACE)
        {
            log::trace!(target: "colorpicker", "{:?} on {:?} has no listener", event.kind, event.target);
            return;
        }
        if self.disabled || self.input.is_disabled(self) {
            log::debug!(target: "colorpicker", "dropping {:?} on disabled field", event.kind);
            return;
        }

        let input = self.input;
        match event.kind {
            DomEventKind::Change => input.on_change(self, event),
            DomEventKind::Keyup => input.on_keyup(self, event),
        }
    }

    pub fn disable(&mut self) {
        if self.disabled {
            return;
        }
        self.disabled = true;
        let input = self.input;
        input.disable(self);
        self.emit(PickerEvent::Disable { widget: self.id });
    }

    pub fn enable(&mut self) {
        if !self.disabled {
            return;
        }
        self.disabled = false;
        let input = self.input;
        input.enable(self);
        self.emit(PickerEvent::Enable { widget: self.id });
    }

    /// Detach from the field. The picker stays usable but no longer hears
    /// field events.
    pub fn destroy(&mut self) {
        let input = self.input;
        input.unbind(self);
        self.emit(PickerEvent::Destroy { widget: self.id });
    }
}

impl<S: InputStore> PickerHost for ColorPicker<S> {
    type Fields = S;

    fn widget_id(&self) -> WidgetId {
        self.id
    }

    fn options(&self) -> &PickerOptions {
        &self.options
    }

    fn color(&self) -> Option<&Color> {
        self.colors.color()
    }

    fn safe_color_string(&self) -> Option<String> {
        self.colors.color_string()
    }

    fn is_invalid_color(&self) -> bool {
        self.colors.is_invalid_color()
    }

    fn resolve_color(&self, raw: &str) -> String {
        self.colors.resolve_color(raw)
    }

    fn set_value(&mut self, raw: &str) {
        ColorPicker::set_value(self, raw)
    }

    fn last_event(&self) -> &LastEvent {
        &self.last_event
    }

    fn last_event_mut(&mut self) -> &mut LastEvent {
        &mut self.last_event
    }

    fn fields(&self) -> &S {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut S {
        &mut self.fields
    }

    fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    fn emit(&mut self, event: PickerEvent) {
        let _ = self.events.send(event);
    }
}
