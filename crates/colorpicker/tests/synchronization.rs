use bus::{Bus, DomEvent, PickerEvent};
use color::{Color, ColorFormat};
use colorpicker::{
    ColorPicker, ElementData, EventAlias, PickerHost, PickerOptions, SeedValue,
    seed_fields_from_dom,
};
use core_types::WidgetId;
use html::{Id, Node};
use input_core::{InputId, InputValueStore};

const WIDGET: WidgetId = WidgetId(7);
const FIELD: InputId = InputId::from_raw(2);

fn elem(id: u32, name: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect(),
        children,
    }
}

/// `<div id=1 class="colorpicker"><input id=2 ...></div>`
fn page(input_attrs: &[(&str, &str)]) -> Node {
    Node::Document {
        id: Id(0),
        children: vec![elem(
            1,
            "div",
            &[("class", "colorpicker")],
            vec![elem(2, "input", input_attrs, Vec::new())],
        )],
    }
}

fn mount(dom: &Node, element: Id, options: PickerOptions, bus: &Bus) -> ColorPicker {
    let mut fields = InputValueStore::new();
    seed_fields_from_dom(&mut fields, dom);
    ColorPicker::new(
        WIDGET,
        dom,
        element,
        &ElementData::new(),
        options,
        fields,
        bus.evt_tx.clone(),
    )
}

fn strict() -> PickerOptions {
    PickerOptions {
        auto_input_fallback: false,
        ..PickerOptions::default()
    }
}

/// Replace the field text the way a user would, then fire keyup.
fn type_text(picker: &mut ColorPicker, text: &str) {
    picker.fields_mut().set(FIELD, String::new());
    for ch in text.chars() {
        picker.fields_mut().insert_text(FIELD, &ch.to_string());
        picker.handle_event(DomEvent::keyup(FIELD, ch.to_string()));
    }
}

fn input_changes(events: &[PickerEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            PickerEvent::InputChange { value, .. } => Some(value.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn data_color_seeds_field_and_initial_color() {
    let bus = Bus::new();
    let dom = page(&[("data-color", "#123456")]);
    let picker = mount(&dom, Id(1), PickerOptions::default(), &bus);

    assert_eq!(picker.fields().get(FIELD), Some("#123456"));
    assert_eq!(picker.color(), Some(&Color::rgb(0x12, 0x34, 0x56)));

    let events = bus.drain();
    assert_eq!(
        events,
        vec![PickerEvent::Create {
            widget: WIDGET,
            color: Some(Color::rgb(0x12, 0x34, 0x56)),
        }]
    );
}

#[test]
fn configured_color_overrides_field_text() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let options = PickerOptions {
        color: Some("rgb(255, 0, 0)".to_string()),
        ..PickerOptions::default()
    };
    let picker = mount(&dom, Id(1), options, &bus);

    assert_eq!(picker.fields().get(FIELD), Some("rgb(255, 0, 0)"));
    assert_eq!(input_changes(&bus.drain()), vec!["rgb(255, 0, 0)"]);
}

#[test]
fn typing_is_not_clobbered_without_auto_fallback() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let mut picker = mount(&dom, Id(1), strict(), &bus);
    bus.drain();

    type_text(&mut picker, "#12ab5");
    assert_eq!(picker.fields().get(FIELD), Some("#12ab5"));
    assert!(picker.colors().is_invalid_color());
    assert_eq!(picker.last_event().alias, Some(EventAlias::InputKeyup));

    type_text(&mut picker, "#12ab56");
    assert_eq!(picker.color(), Some(&Color::rgb(0x12, 0xab, 0x56)));

    picker.handle_event(DomEvent::change(FIELD));
    assert_eq!(picker.fields().get(FIELD), Some("#12ab56"));
    assert_eq!(picker.last_event().alias, Some(EventAlias::InputChange));

    // The picker never wrote the field while the user typed.
    assert!(input_changes(&bus.drain()).is_empty());
}

#[test]
fn commit_reformats_after_typing_in_another_syntax() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let options = PickerOptions {
        format: Some(ColorFormat::Hex),
        ..strict()
    };
    let mut picker = mount(&dom, Id(1), options, &bus);
    bus.drain();

    type_text(&mut picker, "rgb(0, 0, 255)");
    assert_eq!(picker.fields().get(FIELD), Some("rgb(0, 0, 255)"));

    // The color already matches, so commit alone does not rewrite the field;
    // an explicit refresh after the change does.
    picker.handle_event(DomEvent::change(FIELD));
    picker.update();
    assert_eq!(picker.fields().get(FIELD), Some("#0000ff"));
    assert_eq!(input_changes(&bus.drain()), vec!["#0000ff"]);
}

#[test]
fn auto_fallback_replaces_invalid_input_immediately() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let mut picker = mount(&dom, Id(1), PickerOptions::default(), &bus);
    bus.drain();

    picker.fields_mut().set(FIELD, "#12".to_string());
    picker.handle_event(DomEvent::keyup(FIELD, "2"));

    assert_eq!(picker.fields().get(FIELD), Some("#123456"));
    let events = bus.drain();
    assert!(matches!(
        events.first(),
        Some(PickerEvent::Change { value, .. }) if value == "#12"
    ));
    assert_eq!(input_changes(&events), vec!["#123456"]);
}

#[test]
fn configured_fallback_color_is_used_for_invalid_input() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let options = PickerOptions {
        fallback_color: Some("#ffffff".to_string()),
        ..PickerOptions::default()
    };
    let mut picker = mount(&dom, Id(1), options, &bus);

    picker.fields_mut().set(FIELD, "nonsense".to_string());
    picker.handle_event(DomEvent::change(FIELD));
    assert_eq!(picker.fields().get(FIELD), Some("#ffffff"));
}

#[test]
fn element_can_be_the_input_itself() {
    let bus = Bus::new();
    let dom = Node::Document {
        id: Id(0),
        children: vec![elem(5, "input", &[], Vec::new())],
    };
    let options = PickerOptions {
        color: Some("#FF0000".to_string()),
        use_hash_prefix: false,
        ..PickerOptions::default()
    };
    let picker = mount(&dom, Id(5), options, &bus);

    assert_eq!(picker.input().field(), Some(InputId::from_raw(5)));
    assert_eq!(picker.fields().get(InputId::from_raw(5)), Some("ff0000"));
}

#[test]
fn typed_color_data_seeds_the_field() {
    let bus = Bus::new();
    let dom = page(&[]);
    let mut fields = InputValueStore::new();
    seed_fields_from_dom(&mut fields, &dom);
    let mut data = ElementData::new();
    data.insert(Id(2), "color", SeedValue::Color(Color::rgb(0, 128, 0).with_alpha(0.5)));
    let options = PickerOptions {
        format: Some(ColorFormat::Rgb),
        ..PickerOptions::default()
    };

    let picker = ColorPicker::new(WIDGET, &dom, Id(1), &data, options, fields, bus.evt_tx.clone());
    assert_eq!(picker.fields().get(FIELD), Some("rgba(0, 128, 0, 0.5)"));
}

#[test]
fn widget_without_field_still_tracks_color() {
    let bus = Bus::new();
    let dom = Node::Document {
        id: Id(0),
        children: vec![elem(1, "div", &[], Vec::new())],
    };
    let mut picker = mount(&dom, Id(1), PickerOptions::default(), &bus);
    assert!(!picker.input().has_input());
    assert_eq!(picker.input().get_value(&picker), None);

    picker.set_value("blue");
    picker.handle_event(DomEvent::change(FIELD));
    picker.disable();
    picker.enable();

    assert_eq!(picker.color(), Some(&Color::parse("blue").expect("named color")));
    assert!(picker.listeners().is_empty());
    let events = bus.drain();
    assert!(input_changes(&events).is_empty());
    assert!(events.iter().all(|e| e.widget() == WIDGET));
}

#[test]
fn disabled_picker_ignores_field_events_and_color_changes() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let mut picker = mount(&dom, Id(1), PickerOptions::default(), &bus);
    bus.drain();

    picker.disable();
    assert!(picker.is_disabled());
    assert!(picker.fields().is_disabled(FIELD));

    picker.fields_mut().set(FIELD, "#000000".to_string());
    picker.handle_event(DomEvent::change(FIELD));
    picker.set_value("#ffffff");
    assert_eq!(picker.color(), Some(&Color::rgb(0x12, 0x34, 0x56)));
    assert_eq!(picker.last_event().alias, None);

    picker.enable();
    picker.handle_event(DomEvent::change(FIELD));
    assert_eq!(picker.color(), Some(&Color::rgb(0, 0, 0)));

    let events = bus.drain();
    assert_eq!(events.first(), Some(&PickerEvent::Disable { widget: WIDGET }));
    assert!(events.contains(&PickerEvent::Enable { widget: WIDGET }));
}

#[test]
fn destroy_unbinds_field_events() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let mut picker = mount(&dom, Id(1), PickerOptions::default(), &bus);

    picker.destroy();
    picker.fields_mut().set(FIELD, "#000000".to_string());
    picker.handle_event(DomEvent::change(FIELD));

    assert_eq!(picker.color(), Some(&Color::rgb(0x12, 0x34, 0x56)));
    assert!(picker.listeners().is_empty());
    assert_eq!(bus.drain().last(), Some(&PickerEvent::Destroy { widget: WIDGET }));
}

#[test]
fn events_for_other_fields_are_ignored() {
    let bus = Bus::new();
    let dom = page(&[("value", "#123456")]);
    let mut picker = mount(&dom, Id(1), PickerOptions::default(), &bus);
    bus.drain();

    picker.handle_event(DomEvent::change(InputId::from_raw(99)));
    assert_eq!(picker.last_event().alias, None);
    assert!(bus.drain().is_empty());
}
