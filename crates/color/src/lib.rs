//! Color values as the picker sees them.
//!
//! A [`Color`] remembers which syntax it was parsed from so that a widget
//! without a fixed output format can echo colors back the way the user typed
//! them.

mod convert;
mod format;
mod named;
mod parse;

pub use format::ColorFormat;
pub use parse::ColorParseError;

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f32,
    /// Syntax the color was parsed from; `Hex` for constructed colors.
    pub source: ColorFormat,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: 1.0,
            source: ColorFormat::Hex,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        parse::parse_color(value)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Same channels and (to 8-bit precision) same alpha, whatever the syntax.
    pub fn same_color(&self, other: &Color) -> bool {
        (self.r, self.g, self.b) == (other.r, other.g, other.b)
            && (self.a - other.a).abs() < 1.0 / 255.0
    }

    /// Render in `format`.
    pub fn to_string_in(&self, format: ColorFormat) -> String {
        format::render(self, format)
    }
}

impl fmt::Display for Color {
    /// Renders in the color's source format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_in(self.source))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Normalize a raw color string.
///
/// Parsable input is re-rendered in `format`, or in its own syntax when
/// `format` is `None`. Anything else comes back unchanged, so half-typed
/// values survive a round trip.
pub fn resolve_color(raw: &str, format: Option<ColorFormat>) -> String {
    match Color::parse(raw) {
        Ok(color) => color.to_string_in(format.unwrap_or(color.source)),
        Err(_) => raw.to_string(),
    }
}
