//! sRGB colors and perceived brightness.

use std::fmt;
use std::str::FromStr;

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness as weighted luma:
    /// `0.299 R + 0.587 G + 0.114 B`, in `0.0..=255.0`.
    #[must_use]
    pub fn luma(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error parsing an `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #rrggbb")]
pub struct ParseColorError(String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError(s.to_owned()))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_owned()));
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(ParseColorError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_round_trip() {
        let color: Rgb = "#00dd00".parse().unwrap();
        assert_eq!(color, Rgb::new(0, 0xdd, 0));
        assert_eq!(color.to_string(), "#00dd00");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("00dd00".parse::<Rgb>().is_err());
        assert!("#00dd0".parse::<Rgb>().is_err());
        assert!("#00dd0g".parse::<Rgb>().is_err());
        assert!("#00dd00ff".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(Rgb::new(0, 0, 0).luma(), 0.0);
        assert!((Rgb::new(255, 255, 255).luma() - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_luma_weights_green_heaviest() {
        let red = Rgb::new(200, 0, 0).luma();
        let green = Rgb::new(0, 200, 0).luma();
        let blue = Rgb::new(0, 0, 200).luma();
        assert!(green > red);
        assert!(red > blue);
    }
}
