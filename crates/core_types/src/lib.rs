/// Identifies one picker instance on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

/// DOM event kinds a text field can deliver to a widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomEventKind {
    /// The value was committed (blur or Enter).
    Change,
    /// A key was released while the field had focus.
    Keyup,
}
