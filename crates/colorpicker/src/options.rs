//! Widget options, loadable from TOML.
//!
//! Keys use the widget's camelCase option names:
//!
//! ```toml
//! input = "> input"
//! format = "rgb"
//! useHashPrefix = false
//! autoInputFallback = false
//! fallbackColor = "#000000"
//! ```

use color::ColorFormat;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read options file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PickerOptions {
    /// Initial color. When unset the field's seeded text is used.
    pub color: Option<String>,
    /// Output format; `None` (or `"auto"`) echoes the syntax of the current color.
    #[serde(deserialize_with = "de_format")]
    pub format: Option<ColorFormat>,
    /// Used instead of invalid input when `auto_input_fallback` is on.
    pub fallback_color: Option<String>,
    /// Selector for the text field inside the widget's element.
    pub input: String,
    /// Keep the leading `#` on hex output.
    pub use_hash_prefix: bool,
    /// Replace invalid input with the fallback color right away, even while
    /// the user is typing.
    pub auto_input_fallback: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            color: None,
            format: None,
            fallback_color: None,
            input: "> input".to_string(),
            use_hash_prefix: true,
            auto_input_fallback: true,
        }
    }
}

impl PickerOptions {
    pub fn from_toml_str(s: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

fn de_format<'de, D>(de: D) -> Result<Option<ColorFormat>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Format(ColorFormat),
        Other(String),
    }

    match Option::<Raw>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Format(f)) => Ok(Some(f)),
        Some(Raw::Other(s)) if s.eq_ignore_ascii_case("auto") => Ok(None),
        Some(Raw::Other(s)) => Err(serde::de::Error::custom(format!(
            "unknown color format {s:?}, expected auto, hex, rgb, hsl or named"
        ))),
    }
}
