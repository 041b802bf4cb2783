//! HSV: hue in degrees, saturation and value in percent.

use super::{fixed, wrap_hue, Cmy, Cmyk, CieLab, CieLch, Hex, Hsl, Rgb, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_range, ColorError};
use crate::model::Model;
use crate::parse::{self, Token, DEGREE_PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An HSV color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HsvFields")]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

#[derive(Deserialize)]
struct HsvFields {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl TryFrom<HsvFields> for Hsv {
    type Error = ColorError;

    fn try_from(f: HsvFields) -> Result<Self, Self::Error> {
        Hsv::new(f.hue, f.saturation, f.value)
    }
}

impl Hsv {
    /// Creates an HSV color.
    ///
    /// Returns `ColorError::OutOfRange` if hue is outside [0, 360] or
    /// saturation or value is outside [0, 100].
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self, ColorError> {
        Ok(Self {
            hue: check_range("hue", hue, 0.0, 360.0)?,
            saturation: check_range("saturation", saturation, 0.0, 100.0)?,
            value: check_range("value", value, 0.0, 100.0)?,
        })
    }

    pub(crate) fn from_raw(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Hue angle in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

fn hsv_to_rgb(c: &Hsv) -> Rgb {
    let s = c.saturation / 100.0;
    let v = c.value / 100.0;
    if s == 0.0 {
        return Rgb::clipped(v * 255.0, v * 255.0, v * 255.0);
    }

    let h = wrap_hue(c.hue) / 60.0;
    let sextant = h.floor();
    let f = h - sextant;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sextant as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::clipped(r * 255.0, g * 255.0, b * 255.0)
}

/// Direct edge: RGB. CIELCh goes through CIELab, CMYK through CMY, and
/// everything else through RGB.
impl ColorModel for Hsv {
    fn model(&self) -> Model {
        Model::Hsv
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        hsv_to_rgb(self)
    }

    fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }

    fn to_yxy(&self) -> Yxy {
        self.to_xyz().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        self.to_rgb().to_cielab()
    }

    fn to_cielch(&self) -> CieLch {
        self.to_cielab().to_cielch()
    }

    fn to_cmy(&self) -> Cmy {
        self.to_rgb().to_cmy()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_cmy().to_cmyk()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_hsv()
    }

    fn to_url_string(&self) -> String {
        format!(
            "{}_{}_{}",
            fixed(self.hue, 0),
            fixed(self.saturation, 0),
            fixed(self.value, 0)
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            fixed(self.hue, 0),
            fixed(self.saturation, 0),
            fixed(self.value, 0)
        )
    }
}

/// Parses `"h, s, v"` or `"hsv(h, s, v)"`; degree and percent signs are
/// ignored and components may be fractional.
impl FromStr for Hsv {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [h, sat, v] = parse::components(s, Model::Hsv, "hsv", &DEGREE_PERCENT, Token::Number)?;
        Hsv::new(h, sat, v).map_err(parse::reject(Model::Hsv, s))
    }
}
