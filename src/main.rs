//! Headless walk-through of a picker session: seed a field, type into it,
//! commit, and print what the widget announced along the way.

use bus::{Bus, DomEvent, PickerEvent};
use colorpicker::{ColorPicker, ElementData, PickerHost, PickerOptions, seed_fields_from_dom};
use core_types::WidgetId;
use html::{Id, Node, assign_node_ids, query_selector};
use input_core::{InputId, InputValueStore};
use std::path::Path;
use std::process::ExitCode;

fn element(name: &str, attributes: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect(),
        children,
    }
}

fn describe(event: &PickerEvent) -> String {
    let show = |c: &Option<color::Color>| c.map_or_else(|| "-".to_string(), |c| c.to_string());
    match event {
        PickerEvent::Create { color: c, .. } => format!("create        color={}", show(c)),
        PickerEvent::Change { color: c, value, .. } => {
            format!("change        value={value:?} color={}", show(c))
        }
        PickerEvent::InputChange { value, .. } => format!("input.change  value={value:?}"),
        PickerEvent::Enable { .. } => "enable".to_string(),
        PickerEvent::Disable { .. } => "disable".to_string(),
        PickerEvent::Destroy { .. } => "destroy".to_string(),
    }
}

fn flush(bus: &Bus) {
    for event in bus.drain() {
        println!("  [{:?}] {}", event.widget(), describe(&event));
    }
}

/// Options used when no file is given. Auto-fallback is off so a color can
/// be typed one key at a time without the widget reverting each prefix.
fn demo_options() -> PickerOptions {
    PickerOptions {
        auto_input_fallback: false,
        ..PickerOptions::default()
    }
}

fn page() -> Node {
    let mut dom = Node::Document {
        id: Id(0),
        children: vec![element(
            "div",
            &[("class", "colorpicker")],
            vec![element("input", &[("type", "text"), ("data-color", "#3366cc")], Vec::new())],
        )],
    };
    assign_node_ids(&mut dom);
    dom
}

fn mount(dom: &Node, options: PickerOptions, bus: &Bus) -> Option<ColorPicker> {
    let root = query_selector(dom, ".colorpicker")?.id();
    let mut fields = InputValueStore::new();
    seed_fields_from_dom(&mut fields, dom);
    Some(ColorPicker::new(
        WidgetId(1),
        dom,
        root,
        &ElementData::new(),
        options,
        fields,
        bus.evt_tx.clone(),
    ))
}

/// Jump to the end of the field and backspace until it is empty.
fn erase(picker: &mut ColorPicker, field: InputId) {
    picker.fields_mut().set_caret(field, usize::MAX);
    while picker.fields().caret(field).is_some_and(|caret| caret > 0) {
        picker.fields_mut().backspace(field);
        picker.handle_event(DomEvent::keyup(field, "Backspace"));
    }
}

fn type_key(picker: &mut ColorPicker, field: InputId, ch: char) {
    picker.fields_mut().insert_text(field, &ch.to_string());
    picker.handle_event(DomEvent::keyup(field, ch.to_string()));
}

fn main() -> ExitCode {
    let options = match std::env::args().nth(1) {
        Some(path) => match PickerOptions::from_toml_file(Path::new(&path)) {
            Ok(options) => options,
            Err(err) => {
                eprintln!("picker: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => demo_options(),
    };

    let bus = Bus::new();
    let dom = page();
    let Some(mut picker) = mount(&dom, options, &bus) else {
        eprintln!("picker: no .colorpicker element");
        return ExitCode::FAILURE;
    };

    flush(&bus);
    let Some(field) = picker.input().field() else {
        println!("no text field; nothing to type into");
        return ExitCode::SUCCESS;
    };
    println!("mounted: field={:?}", picker.fields().get(field).unwrap_or(""));

    println!("erasing:");
    erase(&mut picker, field);
    flush(&bus);

    println!("typing \"#ff8800\":");
    for ch in "#ff8800".chars() {
        type_key(&mut picker, field, ch);
        println!(
            "  after {ch:?}: field={:?} alias={}",
            picker.fields().get(field).unwrap_or(""),
            picker
                .last_event()
                .alias
                .map_or("-", |a| a.as_str())
        );
    }
    flush(&bus);

    println!("commit:");
    picker.handle_event(DomEvent::change(field));
    flush(&bus);

    println!(
        "final: field={:?} color={}",
        picker.fields().get(field).unwrap_or(""),
        picker
            .safe_color_string()
            .unwrap_or_else(|| "invalid".to_string())
    );
    picker.destroy();
    flush(&bus);
    ExitCode::SUCCESS
}
