use color::Color;
use html::{Id, Node, attr, has_attr};
use input_core::{InputId, InputStore};
use std::collections::HashMap;

/// A value a host attached to an element out of band (not an attribute).
#[derive(Clone, Debug, PartialEq)]
pub enum SeedValue {
    Text(String),
    Color(Color),
    /// Anything else; never usable as field text.
    Other,
}

impl SeedValue {
    fn is_empty(&self) -> bool {
        matches!(self, SeedValue::Text(s) if s.is_empty())
    }
}

/// Per-element typed data, keyed by element id and name.
#[derive(Clone, Debug, Default)]
pub struct ElementData {
    entries: HashMap<Id, HashMap<String, SeedValue>>,
}

impl ElementData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: Id, key: &str, value: SeedValue) {
        self.entries
            .entry(id)
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn get(&self, id: Id, key: &str) -> Option<&SeedValue> {
        self.entries.get(&id)?.get(key)
    }
}

/// Initial text candidates for a field, highest priority first: the field's
/// current value, its `color` data entry, its `data-color` attribute.
pub(crate) fn seed_candidates(
    field: &Node,
    fields: &impl InputStore,
    data: &ElementData,
) -> [Option<SeedValue>; 3] {
    let id = field.id();
    [
        fields
            .get(InputId::from(id))
            .map(|v| SeedValue::Text(v.to_string())),
        data.get(id, "color").cloned(),
        attr(field, "data-color").map(|v| SeedValue::Text(v.to_string())),
    ]
}

/// First non-empty candidate, if any.
pub(crate) fn pick_seed(candidates: [Option<SeedValue>; 3]) -> Option<SeedValue> {
    candidates.into_iter().flatten().find(|c| !c.is_empty())
}

/// Register every text `<input>` in `dom` with `store`, taking the initial
/// value from the `value` attribute and the disabled flag from `disabled`.
/// Fields the store already knows keep their state.
pub fn seed_fields_from_dom(store: &mut impl InputStore, dom: &Node) {
    fn is_text_input(node: &Node) -> bool {
        if !node.is_element_named("input") {
            return false;
        }
        match attr(node, "type").map(str::trim).filter(|t| !t.is_empty()) {
            None => true, // missing type defaults to text
            Some(t) => t.eq_ignore_ascii_case("text") || t.eq_ignore_ascii_case("color"),
        }
    }

    fn walk(store: &mut impl InputStore, node: &Node) {
        if is_text_input(node) {
            let id = InputId::from(node.id());
            if !store.has(id) {
                store.ensure_initial(id, attr(node, "value").unwrap_or("").to_string());
                if has_attr(node, "disabled") {
                    store.set_disabled(id, true);
                }
            }
            return;
        }
        for c in node.children() {
            walk(store, c);
        }
    }

    walk(store, dom);
}
