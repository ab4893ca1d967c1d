// File: crates/chart-core/src/theme.rs
// Summary: Color tokens and the fixed two-stop gradient palette.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGB color. Serializes as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self { c.to_hex() }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::parse_hex(&s).ok_or_else(|| format!("not a #rrggbb color: {s:?}"))
    }
}

/// Start (top) and end (bottom) colors of a vertical gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientPair {
    pub start: Rgb,
    pub end: Rgb,
}

/// Symbolic palette entry selected by the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Cyan,
    Purple,
    Blue,
    Green,
    #[default]
    Red,
}

const PALETTE: [(ColorToken, GradientPair); 5] = [
    (ColorToken::Cyan, GradientPair { start: Rgb::from_hex(0x06b6d4), end: Rgb::from_hex(0x0891b2) }),
    (ColorToken::Purple, GradientPair { start: Rgb::from_hex(0xa855f7), end: Rgb::from_hex(0x7c3aed) }),
    (ColorToken::Blue, GradientPair { start: Rgb::from_hex(0x3b82f6), end: Rgb::from_hex(0x2563eb) }),
    (ColorToken::Green, GradientPair { start: Rgb::from_hex(0x10b981), end: Rgb::from_hex(0x059669) }),
    (ColorToken::Red, GradientPair { start: Rgb::from_hex(0xef4444), end: Rgb::from_hex(0xdc2626) }),
];

impl ColorToken {
    pub const ALL: [ColorToken; 5] =
        [ColorToken::Cyan, ColorToken::Purple, ColorToken::Blue, ColorToken::Green, ColorToken::Red];

    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Cyan => "cyan",
            ColorToken::Purple => "purple",
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
        }
    }

    /// Find a token by name, falling back to red for anything unknown.
    pub fn parse_lossy(name: &str) -> ColorToken {
        let name = name.trim();
        match ColorToken::ALL.into_iter().find(|t| t.name().eq_ignore_ascii_case(name)) {
            Some(t) => t,
            None => {
                tracing::debug!(token = name, "unknown color token, using red");
                ColorToken::default()
            }
        }
    }

    pub fn gradient(self) -> GradientPair {
        PALETTE
            .iter()
            .find(|(t, _)| *t == self)
            .map(|(_, g)| *g)
            .unwrap_or(PALETTE[PALETTE.len() - 1].1)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ColorToken {
    fn from(name: &str) -> Self { ColorToken::parse_lossy(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_hex_round_trip() {
        let c = Rgb::from_hex(0x06b6d4);
        assert_eq!(c, Rgb::new(6, 182, 212));
        assert_eq!(c.to_hex(), "#06b6d4");
    }

    #[test]
    fn rgb_parse_hex() {
        assert_eq!(Rgb::parse_hex("#EF4444"), Some(Rgb::new(0xef, 0x44, 0x44)));
        assert_eq!(Rgb::parse_hex("0891b2"), Some(Rgb::new(0x08, 0x91, 0xb2)));
        assert_eq!(Rgb::parse_hex("#fff"), None);
        assert_eq!(Rgb::parse_hex("#gg0000"), None);
    }

    #[test]
    fn rgb_lerp_endpoints() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 255, 255);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn every_token_has_a_palette_entry() {
        for t in ColorToken::ALL {
            assert_eq!(ColorToken::parse_lossy(t.name()), t);
            assert!(PALETTE.iter().any(|(p, _)| *p == t));
        }
    }

    #[test]
    fn unknown_token_falls_back_to_red() {
        let t = ColorToken::parse_lossy("magenta");
        assert_eq!(t, ColorToken::Red);
        assert_eq!(t.gradient(), ColorToken::Red.gradient());
        assert_eq!(ColorToken::from("CYAN"), ColorToken::Cyan);
    }
}
