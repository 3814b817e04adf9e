//! Holds the widget's current color and decides what invalid input turns into.

use color::{Color, ColorFormat};

#[derive(Clone, Debug, PartialEq)]
pub enum ColorState {
    Empty,
    Valid(Color),
    /// Last assignment did not parse and no fallback was applied.
    Invalid { raw: String },
}

#[derive(Clone, Debug)]
pub struct ColorHandler {
    state: ColorState,
    format: Option<ColorFormat>,
    fallback: Option<String>,
}

impl ColorHandler {
    pub fn new(format: Option<ColorFormat>, fallback: Option<String>) -> Self {
        Self {
            state: ColorState::Empty,
            format,
            fallback,
        }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn color(&self) -> Option<&Color> {
        match &self.state {
            ColorState::Valid(c) => Some(c),
            _ => None,
        }
    }

    pub fn has_color(&self) -> bool {
        !matches!(self.state, ColorState::Empty)
    }

    pub fn is_invalid_color(&self) -> bool {
        !matches!(self.state, ColorState::Valid(_))
    }

    /// The current color as text, `None` unless valid.
    pub fn color_string(&self) -> Option<String> {
        let c = self.color()?;
        Some(c.to_string_in(self.format.unwrap_or(c.source)))
    }

    pub fn resolve_color(&self, raw: &str) -> String {
        color::resolve_color(raw, self.format)
    }

    pub fn clear(&mut self) {
        self.state = ColorState::Empty;
    }

    /// Replace the color with `raw`. Unparsable input becomes the fallback
    /// color when `fallback_on_invalid` is set, otherwise an invalid state.
    pub fn create_color(&mut self, raw: &str, fallback_on_invalid: bool) {
        self.state = match Color::parse(raw) {
            Ok(c) => ColorState::Valid(c),
            Err(err) if fallback_on_invalid => {
                log::debug!(target: "colorpicker.color", "{err}; using fallback color");
                ColorState::Valid(self.fallback_color())
            }
            Err(err) => {
                log::debug!(target: "colorpicker.color", "{err}; keeping invalid input");
                ColorState::Invalid {
                    raw: raw.to_string(),
                }
            }
        };
    }

    /// The configured fallback, else the previous valid color, else black.
    pub fn fallback_color(&self) -> Color {
        if let Some(raw) = self.fallback.as_deref() {
            match Color::parse(raw) {
                Ok(c) => return c,
                Err(err) => {
                    log::warn!(target: "colorpicker.color", "fallback color {raw:?} is invalid: {err}");
                }
            }
        }
        self.color().copied().unwrap_or(Color::rgb(0, 0, 0))
    }

    /// `true` if `raw` parses to the color already held.
    pub fn is_same(&self, raw: &str) -> bool {
        match (self.color(), Color::parse(raw)) {
            (Some(current), Ok(next)) => current.same_color(&next),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_without_fallback_marks_invalid() {
        let mut ch = ColorHandler::new(None, None);
        ch.create_color("#12", false);
        assert_eq!(
            ch.state(),
            &ColorState::Invalid {
                raw: "#12".to_string()
            }
        );
        assert!(ch.is_invalid_color());
        assert!(ch.has_color());
        assert_eq!(ch.color_string(), None);
    }

    #[test]
    fn invalid_input_with_fallback_uses_configured_color() {
        let mut ch = ColorHandler::new(None, Some("#00ff00".to_string()));
        ch.create_color("nope", true);
        assert!(!ch.is_invalid_color());
        assert_eq!(ch.color_string().as_deref(), Some("#00ff00"));
    }

    #[test]
    fn bad_fallback_keeps_previous_color_then_black() {
        let mut ch = ColorHandler::new(None, Some("not a color".to_string()));
        ch.create_color("nope", true);
        assert_eq!(ch.color_string().as_deref(), Some("#000000"));

        ch.create_color("rgb(1, 2, 3)", true);
        ch.create_color("nope", true);
        assert_eq!(ch.color_string().as_deref(), Some("rgb(1, 2, 3)"));
    }

    #[test]
    fn configured_format_wins_over_source_syntax() {
        let mut ch = ColorHandler::new(Some(ColorFormat::Hex), None);
        ch.create_color("rgb(255, 0, 0)", false);
        assert_eq!(ch.color_string().as_deref(), Some("#ff0000"));
        assert_eq!(ch.resolve_color("red"), "#ff0000");
    }

    #[test]
    fn same_color_comparison_ignores_syntax() {
        let mut ch = ColorHandler::new(None, None);
        ch.create_color("#ff0000", false);
        assert!(ch.is_same("red"));
        assert!(!ch.is_same("blue"));
        assert!(!ch.is_same("garbage"));
    }
}
