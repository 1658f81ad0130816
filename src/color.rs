//! RGBA colors and parsing of CSS-style color strings (named, `#rrggbb`,
//! `rgb(..)` and `rgba(..)`).

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color. Alpha is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const GOLD: Rgba = Rgba::rgb(255, 215, 0);
    pub const CYAN: Rgba = Rgba::rgb(0, 255, 255);
    pub const LIMEGREEN: Rgba = Rgba::rgb(50, 205, 50);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Alpha as a byte, rounded.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// CSS notation, `#rrggbb` when opaque and `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a color string. Returns `None` for anything unrecognized.
pub fn parse_color(val: &str) -> Option<Rgba> {
    let val = val.trim();
    let lower = val.to_ascii_lowercase();
    if let Some(inner) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();
        return match parts.as_slice() {
            [r, g, b] => Some(Rgba::rgb(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?)),
            [r, g, b, a] => Some(Rgba::rgba(
                r.parse().ok()?,
                g.parse().ok()?,
                b.parse().ok()?,
                a.parse::<f32>().ok()?.clamp(0.0, 1.0),
            )),
            _ => None,
        };
    }
    if let Some(hex) = lower.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            return Some(Rgba::rgb(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            ));
        }
        return None;
    }
    let named = match lower.as_str() {
        "white" => Rgba::WHITE,
        "black" => Rgba::rgb(0, 0, 0),
        "red" => Rgba::rgb(255, 0, 0),
        "green" => Rgba::rgb(0, 128, 0),
        "blue" => Rgba::rgb(0, 0, 255),
        "yellow" => Rgba::rgb(255, 255, 0),
        "orange" => Rgba::rgb(255, 165, 0),
        "gold" => Rgba::GOLD,
        "cyan" | "aqua" => Rgba::CYAN,
        "magenta" | "fuchsia" => Rgba::rgb(255, 0, 255),
        "limegreen" => Rgba::LIMEGREEN,
        "lime" => Rgba::rgb(0, 255, 0),
        "lightblue" => Rgba::rgb(173, 216, 230),
        "gray" | "grey" => Rgba::rgb(128, 128, 128),
        "lightgray" | "lightgrey" => Rgba::rgb(211, 211, 211),
        "silver" => Rgba::rgb(192, 192, 192),
        "purple" => Rgba::rgb(128, 0, 128),
        "pink" => Rgba::rgb(255, 192, 203),
        "navy" => Rgba::rgb(0, 0, 128),
        "teal" => Rgba::rgb(0, 128, 128),
        "transparent" => Rgba::TRANSPARENT,
        _ => return None,
    };
    Some(named)
}
