use crate::Color;
use crate::convert::rgb_to_hsl;
use crate::named::name_for;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual color syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#rrggbb`, or `#rrggbbaa` when translucent.
    Hex,
    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`.
    Rgb,
    /// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)`.
    Hsl,
    /// CSS keyword; colors without an exact keyword fall back to hex.
    Named,
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Named => "named",
        })
    }
}

pub(crate) fn render(c: &Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => {
            if alpha_byte(c.a) == u8::MAX {
                format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
            } else {
                format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, alpha_byte(c.a))
            }
        }
        ColorFormat::Rgb => {
            if alpha_hundredths(c.a) == 100 {
                format!("rgb({}, {}, {})", c.r, c.g, c.b)
            } else {
                format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, fmt_alpha(c.a))
            }
        }
        ColorFormat::Hsl => {
            let (h, s, l) = rgb_to_hsl(c.r, c.g, c.b);
            let (h, s, l) = (h.round() as u16 % 360, (s * 100.0).round(), (l * 100.0).round());
            if alpha_hundredths(c.a) == 100 {
                format!("hsl({h}, {s}%, {l}%)")
            } else {
                format!("hsla({h}, {s}%, {l}%, {})", fmt_alpha(c.a))
            }
        }
        ColorFormat::Named => match name_for(c) {
            Some(name) => name.to_string(),
            None => render(c, ColorFormat::Hex),
        },
    }
}

fn alpha_byte(a: f32) -> u8 {
    (a.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Alpha as printed by the functional syntaxes, in hundredths.
fn alpha_hundredths(a: f32) -> u8 {
    (a.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Alpha with at most two decimals and no trailing zeros.
fn fmt_alpha(a: f32) -> String {
    let s = format!("{:.2}", f32::from(alpha_hundredths(a)) / 100.0);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
