use crate::{Color, ColorFormat};

/// CSS basic color keywords.
const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("silver", (192, 192, 192)),
    ("gray", (128, 128, 128)),
    ("white", (255, 255, 255)),
    ("maroon", (128, 0, 0)),
    ("red", (255, 0, 0)),
    ("purple", (128, 0, 128)),
    ("fuchsia", (255, 0, 255)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("olive", (128, 128, 0)),
    ("yellow", (255, 255, 0)),
    ("navy", (0, 0, 128)),
    ("blue", (0, 0, 255)),
    ("teal", (0, 128, 128)),
    ("aqua", (0, 255, 255)),
    ("orange", (255, 165, 0)),
];

/// Aliases accepted on input but never produced on output.
const ALIASES: &[(&str, &str)] = &[("grey", "gray"), ("magenta", "fuchsia"), ("cyan", "aqua")];

pub(crate) fn lookup(name: &str) -> Option<Color> {
    if name == "transparent" {
        return Some(Color {
            a: 0.0,
            source: ColorFormat::Named,
            ..Color::rgb(0, 0, 0)
        });
    }

    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical);

    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, (r, g, b))| Color {
            source: ColorFormat::Named,
            ..Color::rgb(r, g, b)
        })
}

pub(crate) fn name_for(c: &Color) -> Option<&'static str> {
    if c.a == 0.0 && (c.r, c.g, c.b) == (0, 0, 0) {
        return Some("transparent");
    }
    if !c.is_opaque() {
        return None;
    }
    NAMED
        .iter()
        .find(|(_, rgb)| *rgb == (c.r, c.g, c.b))
        .map(|(n, _)| *n)
}
