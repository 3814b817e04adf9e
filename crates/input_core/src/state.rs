//! Per-field state stored in the [`InputValueStore`](crate::InputValueStore).

#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    pub value: String,

    /// Bumped on every text change; lets observers detect writes cheaply.
    pub value_rev: u64,

    /// Caret as a byte index into `value`, always on a char boundary.
    pub caret: usize,

    pub disabled: bool,
}

impl InputState {
    pub fn with_value(value: String) -> Self {
        let caret = value.len();
        Self {
            value,
            caret,
            ..Self::default()
        }
    }
}
