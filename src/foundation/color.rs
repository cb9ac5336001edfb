use crate::foundation::error::{FlexError, FlexResult};
use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl Rgba {
    /// Build a color from normalized components.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque green, the inpaint fallback color.
    pub fn green() -> Self {
        Self::rgba(0.0, 1.0, 0.0, 1.0)
    }

    /// Components as an `[r, g, b, a]` array.
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Decode a color from a dynamic value; only strings are accepted.
    pub fn from_value(value: &serde_json::Value) -> FlexResult<Self> {
        match value.as_str() {
            Some(s) => parse_color(s),
            None => Err(FlexError::malformed_color(format!(
                "color must be a string, got {value}"
            ))),
        }
    }
}

impl std::str::FromStr for Rgba {
    type Err = FlexError;

    fn from_str(s: &str) -> FlexResult<Self> {
        parse_color(s)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Literal(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Literal(s) => parse_color(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
        }
    }
}

/// Parse a color literal into normalized RGBA.
///
/// Accepted forms (surrounding whitespace ignored):
/// - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (case-insensitive hex)
/// - `r,g,b` or `r,g,b,a` with each component in `[0, 255]`; alpha defaults to opaque
pub fn parse_color(s: &str) -> FlexResult<Rgba> {
    let s = s.trim();

    if let Some(body) = s.strip_prefix('#') {
        return parse_hex(s, body);
    }
    if s.contains(',') {
        return parse_components(s);
    }
    Err(FlexError::malformed_color(format!(
        "unsupported color format \"{s}\""
    )))
}

fn parse_hex(literal: &str, body: &str) -> FlexResult<Rgba> {
    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FlexError::malformed_color(format!(
            "invalid hex color \"{literal}\""
        )));
    }

    // Body is ASCII from here on, so byte slicing is safe.
    fn nibble(body: &str, i: usize) -> f64 {
        let v = u8::from_str_radix(&body[i..i + 1], 16).unwrap_or(0);
        f64::from(v * 17) / 255.0
    }

    fn byte(body: &str, i: usize) -> f64 {
        let v = u8::from_str_radix(&body[i..i + 2], 16).unwrap_or(0);
        f64::from(v) / 255.0
    }

    let color = match body.len() {
        3 => Rgba::rgba(nibble(body, 0), nibble(body, 1), nibble(body, 2), 1.0),
        4 => Rgba::rgba(
            nibble(body, 0),
            nibble(body, 1),
            nibble(body, 2),
            nibble(body, 3),
        ),
        6 => Rgba::rgba(byte(body, 0), byte(body, 2), byte(body, 4), 1.0),
        8 => Rgba::rgba(byte(body, 0), byte(body, 2), byte(body, 4), byte(body, 6)),
        _ => {
            return Err(FlexError::malformed_color(format!(
                "invalid hex color length \"{literal}\" (expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA)"
            )));
        }
    };
    Ok(color)
}

fn parse_components(literal: &str) -> FlexResult<Rgba> {
    let parts: Vec<&str> = literal.split(',').map(str::trim).collect();
    if !matches!(parts.len(), 3 | 4) {
        return Err(FlexError::malformed_color(format!(
            "rgb color must have 3 or 4 values, got {} in \"{literal}\"",
            parts.len()
        )));
    }

    let mut values = [0.0f64, 0.0, 0.0, 255.0];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let v = part
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .ok_or_else(|| {
                FlexError::malformed_color(format!("invalid rgb value \"{part}\" in \"{literal}\""))
            })?;
        if !(0.0..=255.0).contains(&v) {
            return Err(FlexError::malformed_color(format!(
                "rgb values must be between 0 and 255: \"{literal}\""
            )));
        }
        *slot = v;
    }

    Ok(Rgba::rgba(
        values[0] / 255.0,
        values[1] / 255.0,
        values[2] / 255.0,
        values[3] / 255.0,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
