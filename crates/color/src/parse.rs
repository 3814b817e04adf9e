use crate::convert::hsl_to_rgb;
use crate::named::lookup;
use crate::{Color, ColorFormat};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("unrecognized color syntax: {0:?}")]
    UnknownSyntax(String),
    #[error("invalid {function}() component: {component:?}")]
    InvalidComponent {
        function: &'static str,
        component: String,
    },
    #[error("{function}() takes 3 or 4 components, got {count}")]
    Arity { function: &'static str, count: usize },
}

pub(crate) fn parse_color(value: &str) -> Result<Color, ColorParseError> {
    let s = value.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(args) = function_args(&s, "rgba").or_else(|| function_args(&s, "rgb")) {
        return parse_rgb(args);
    }
    if let Some(args) = function_args(&s, "hsla").or_else(|| function_args(&s, "hsl")) {
        return parse_hsl(args);
    }
    if let Some(c) = lookup(&s) {
        return Ok(c);
    }

    let hex = s.strip_prefix('#').unwrap_or(&s);
    parse_hex(hex).ok_or_else(|| ColorParseError::UnknownSyntax(value.trim().to_string()))
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(args: &str) -> Vec<&str> {
    args.split(',').map(str::trim).collect()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (r, g, b, a) = match hex.len() {
        3 | 4 => {
            let a = if hex.len() == 4 { digit(3)? * 17 } else { 255 };
            (digit(0)? * 17, digit(1)? * 17, digit(2)? * 17, a)
        }
        6 | 8 => {
            let a = if hex.len() == 8 { pair(6)? } else { 255 };
            (pair(0)?, pair(2)?, pair(4)?, a)
        }
        _ => return None,
    };

    Some(Color {
        a: f32::from(a) / 255.0,
        ..Color::rgb(r, g, b)
    })
}

fn invalid(function: &'static str, component: &str) -> ColorParseError {
    ColorParseError::InvalidComponent {
        function,
        component: component.to_string(),
    }
}

fn parse_rgb(args: &str) -> Result<Color, ColorParseError> {
    let parts = split_args(args);
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorParseError::Arity {
            function: "rgb",
            count: parts.len(),
        });
    }

    let channel = |p: &str| -> Result<u8, ColorParseError> {
        let v = match p.strip_suffix('%') {
            Some(pct) => pct.trim().parse::<f32>().map(|v| v * 2.55),
            None => p.parse::<f32>(),
        }
        .map_err(|_| invalid("rgb", p))?;
        if !v.is_finite() {
            return Err(invalid("rgb", p));
        }
        Ok(v.round().clamp(0.0, 255.0) as u8)
    };

    let a = match parts.get(3) {
        Some(p) => parse_alpha("rgb", p)?,
        None => 1.0,
    };

    Ok(Color {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a,
        source: ColorFormat::Rgb,
    })
}

fn parse_hsl(args: &str) -> Result<Color, ColorParseError> {
    let parts = split_args(args);
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorParseError::Arity {
            function: "hsl",
            count: parts.len(),
        });
    }

    let hue = parts[0].strip_suffix("deg").unwrap_or(parts[0]).trim();
    let h = hue
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid("hsl", parts[0]))?;

    let percent = |p: &str| -> Result<f32, ColorParseError> {
        p.strip_suffix('%')
            .and_then(|v| v.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .map(|v| (v / 100.0).clamp(0.0, 1.0))
            .ok_or_else(|| invalid("hsl", p))
    };

    let (r, g, b) = hsl_to_rgb(h, percent(parts[1])?, percent(parts[2])?);
    let a = match parts.get(3) {
        Some(p) => parse_alpha("hsl", p)?,
        None => 1.0,
    };

    Ok(Color {
        r,
        g,
        b,
        a,
        source: ColorFormat::Hsl,
    })
}

fn parse_alpha(function: &'static str, p: &str) -> Result<f32, ColorParseError> {
    let v = match p.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f32>().map(|v| v / 100.0),
        None => p.parse::<f32>(),
    }
    .map_err(|_| invalid(function, p))?;
    if !v.is_finite() {
        return Err(invalid(function, p));
    }
    Ok(v.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_color("#123456").map(|c| (c.r, c.g, c.b)), Ok((0x12, 0x34, 0x56)));
        assert_eq!(parse_color("ff0000").map(|c| (c.r, c.g, c.b)), Ok((255, 0, 0)));
        assert_eq!(parse_color(" #FA0 ").map(|c| (c.r, c.g, c.b)), Ok((255, 170, 0)));

        let c = parse_color("#0000ff80").expect("8-digit hex");
        assert_eq!((c.b, c.source), (255, ColorFormat::Hex));
        assert!((c.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parses_functional_syntax() {
        let c = parse_color("rgba(10, 20, 30, 50%)").expect("rgba");
        assert_eq!((c.r, c.g, c.b, c.a, c.source), (10, 20, 30, 0.5, ColorFormat::Rgb));

        let c = parse_color("rgb(100%, 0%, 0%)").expect("percent rgb");
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));

        let c = parse_color("hsl(120deg, 100%, 25%)").expect("hsl");
        assert_eq!((c.r, c.g, c.b, c.source), (0, 128, 0, ColorFormat::Hsl));
    }

    #[test]
    fn parses_keywords() {
        let c = parse_color("Grey").expect("alias");
        assert_eq!((c.r, c.g, c.b, c.source), (128, 128, 128, ColorFormat::Named));
        assert_eq!(parse_color("transparent").map(|c| c.a), Ok(0.0));
    }

    #[test]
    fn reports_errors() {
        assert_eq!(parse_color("  "), Err(ColorParseError::Empty));
        assert_eq!(
            parse_color("#12345"),
            Err(ColorParseError::UnknownSyntax("#12345".to_string()))
        );
        assert_eq!(
            parse_color("rgb(1, 2)"),
            Err(ColorParseError::Arity {
                function: "rgb",
                count: 2
            })
        );
        assert!(matches!(
            parse_color("hsl(0, 50, 50%)"),
            Err(ColorParseError::InvalidComponent { function: "hsl", .. })
        ));
        assert!(parse_color("nothex").is_err());
    }
}
