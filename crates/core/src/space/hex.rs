//! Packed 24-bit `0xRRGGBB` colors.

use super::{Cmy, Cmyk, CieLab, CieLch, Hsl, Hsv, Rgb, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::ColorError;
use crate::model::Model;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Largest packed value.
const MAX_PACKED: u32 = 0xFF_FF_FF;

/// A color packed as `0xRRGGBB`.
///
/// Serializes as a `"#RRGGBB"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex(u32);

impl Hex {
    /// Creates a hex color from a packed value.
    ///
    /// Returns `ColorError::OutOfRange` if `value` exceeds `0xFFFFFF`.
    pub fn new(value: u32) -> Result<Self, ColorError> {
        if value > MAX_PACKED {
            return Err(ColorError::OutOfRange {
                field: "hex",
                value: f64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Packs a value that is known to fit in 24 bits.
    pub(crate) fn from_packed(value: u32) -> Self {
        Self(value & MAX_PACKED)
    }

    /// The packed `0xRRGGBB` value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

fn hex_to_rgb(c: &Hex) -> Rgb {
    let [_, r, g, b] = c.0.to_be_bytes();
    Rgb::clipped(f64::from(r), f64::from(g), f64::from(b))
}

/// Direct edge: RGB. Every other model goes through RGB.
impl ColorModel for Hex {
    fn model(&self) -> Model {
        Model::Hex
    }

    fn to_hex(&self) -> Hex {
        *self
    }

    fn to_rgb(&self) -> Rgb {
        hex_to_rgb(self)
    }

    fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }

    fn to_yxy(&self) -> Yxy {
        self.to_rgb().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        self.to_rgb().to_cielab()
    }

    fn to_cielch(&self) -> CieLch {
        self.to_rgb().to_cielch()
    }

    fn to_cmy(&self) -> Cmy {
        self.to_rgb().to_cmy()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_hex()
    }

    fn to_url_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

/// Parses `"#RRGGBB"`, `"RRGGBB"`, or the three-digit shorthand `"#RGB"`,
/// case-insensitively.
impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = || ColorError::invalid_string(Model::Hex, s);
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(fail());
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => return Err(fail()),
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| fail())?;
        Hex::new(value)
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{self}"))
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_values_above_24_bits() {
        assert!(Hex::new(0x1_00_00_00).is_err());
        assert_eq!(Hex::new(0xFF_FF_FF).unwrap().value(), 0xFFFFFF);
    }

    #[test]
    fn unpacks_to_rgb() {
        let rgb = Hex::new(0x804020).unwrap().to_rgb();
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (0x80, 0x40, 0x20));
    }

    #[test]
    fn parse_blue_with_hash() {
        let rgb = "#0000FF".parse::<Hex>().unwrap().to_rgb();
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (0, 0, 255));
    }

    #[test]
    fn parse_is_case_insensitive_and_hash_optional() {
        assert_eq!("c0ffee".parse::<Hex>().unwrap().value(), 0xC0FFEE);
        assert_eq!("#C0FFEE".parse::<Hex>().unwrap().value(), 0xC0FFEE);
    }

    #[test]
    fn parse_expands_shorthand() {
        assert_eq!("#f0a".parse::<Hex>().unwrap().value(), 0xFF00AA);
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in ["", "#", "#gggggg", "#ff00ff00", "#ffff", "#+fffff"] {
            let err = bad.parse::<Hex>().unwrap_err();
            assert_eq!(err.input(), bad);
        }
    }

    #[test]
    fn renders_uppercase_padded() {
        let c = Hex::new(0x00FF0A).unwrap();
        assert_eq!(c.to_string(), "00FF0A");
        assert_eq!(c.to_url_string(), "00FF0A");
        assert_eq!(c.to_css_string(), "rgb(0, 255, 10)");
    }

    #[test]
    fn serializes_as_hash_string() {
        let json = serde_json::to_string(&Hex::new(0xFF0000).unwrap()).unwrap();
        assert_eq!(json, "\"#FF0000\"");
        let back: Hex = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), 0xFF0000);
    }

    #[test]
    fn deserialize_rejects_invalid_string() {
        let r: Result<Hex, _> = serde_json::from_str("\"not-a-color\"");
        assert!(r.is_err());
    }
}
