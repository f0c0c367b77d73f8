//! RGB color value used by the shading parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// RGB color with channels in `[0, 1]`.
///
/// Parameter colors are authored in sRGB (as hex codes); [`Rgb::to_linear`]
/// converts them before any blending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_srgb8([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
    }

    pub fn from_srgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        )
    }

    /// Quantize to 8 bits per channel (clamping out-of-range channels)
    pub fn to_srgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// sRGB-encoded → linear light
    pub fn to_linear(self) -> Self {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Linear light → sRGB-encoded
    pub fn to_srgb(self) -> Self {
        fn channel(c: f32) -> f32 {
            if c <= 0.003_130_8 {
                c * 12.92
            } else {
                1.055 * c.powf(1.0 / 2.4) - 0.055
            }
        }
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Linear interpolation, exact at both ends (`t = 0` → `self`, `t = 1` → `other`)
    pub fn mix(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self::new(
            self.r * s + other.r * t,
            self.g * s + other.g * t,
            self.b * s + other.b * t,
        )
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .or_else(|| s.trim().strip_prefix("0x"))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_srgb8();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let c: Rgb = "#8888ff".parse().unwrap();
        assert_eq!(c.to_srgb8(), [0x88, 0x88, 0xff]);
        assert_eq!(c, Rgb::from_hex(0x8888ff));

        let c: Rgb = "0x0000ff".parse().unwrap();
        assert_eq!(c, Rgb::new(0.0, 0.0, 1.0));

        assert!("8888ff".parse::<Rgb>().is_err());
        assert!("#88f".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("#+fffff".parse::<Rgb>().is_err());
        assert!("0x-00000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Rgb::from_hex(0x186691).to_string(), "#186691");
    }

    #[test]
    fn test_mix_endpoints_exact() {
        let a = Rgb::new(0.1, 0.3, 0.7);
        let b = Rgb::new(0.9, 0.2, 0.05);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn test_linear_conversion() {
        assert_eq!(Rgb::BLACK.to_linear(), Rgb::BLACK);
        assert!((Rgb::new(1.0, 1.0, 1.0).to_linear().g - 1.0).abs() < 1e-6);

        // Mid grey is darker in linear light
        let grey = Rgb::new(0.5, 0.5, 0.5).to_linear();
        assert!((grey.r - 0.214).abs() < 1e-3);

        let back = grey.to_srgb();
        assert!((back.r - 0.5).abs() < 1e-4);
    }
}
