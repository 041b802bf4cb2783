//! HSL: hue in degrees, saturation and lightness in percent.

use super::{fixed, wrap_hue, Cmy, Cmyk, CieLab, CieLch, Hex, Hsv, Rgb, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_range, ColorError};
use crate::model::Model;
use crate::parse::{self, Token, DEGREE_PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An HSL color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HslFields")]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

#[derive(Deserialize)]
struct HslFields {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl TryFrom<HslFields> for Hsl {
    type Error = ColorError;

    fn try_from(f: HslFields) -> Result<Self, Self::Error> {
        Hsl::new(f.hue, f.saturation, f.lightness)
    }
}

impl Hsl {
    /// Creates an HSL color.
    ///
    /// Returns `ColorError::OutOfRange` if hue is outside [0, 360] or
    /// saturation or lightness is outside [0, 100]. A hue of exactly 360 is
    /// accepted and treated as 0 by conversions.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self, ColorError> {
        Ok(Self {
            hue: check_range("hue", hue, 0.0, 360.0)?,
            saturation: check_range("saturation", saturation, 0.0, 100.0)?,
            lightness: check_range("lightness", lightness, 0.0, 100.0)?,
        })
    }

    pub(crate) fn from_raw(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue angle in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }
}

/// Sextant reconstruction. `v` is the brightest channel, `m` the darkest,
/// and the sextant's rising or falling channel interpolates between them.
fn hsl_to_rgb(c: &Hsl) -> Rgb {
    let s = c.saturation / 100.0;
    let l = c.lightness / 100.0;
    let v = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };

    if v <= 0.0 {
        return Rgb::clipped(0.0, 0.0, 0.0);
    }

    let m = l + l - v;
    let sv = (v - m) / v;
    let h = wrap_hue(c.hue) / 60.0;
    let sextant = h.floor();
    let vsf = v * sv * (h - sextant);
    let mid1 = m + vsf;
    let mid2 = v - vsf;

    let (r, g, b) = match sextant as u8 {
        0 => (v, mid1, m),
        1 => (mid2, v, m),
        2 => (m, v, mid1),
        3 => (m, mid2, v),
        4 => (mid1, m, v),
        _ => (v, m, mid2),
    };
    Rgb::clipped(r * 255.0, g * 255.0, b * 255.0)
}

/// Direct edge: RGB. CIELCh goes through CIELab, CMYK through CMY, and
/// everything else through RGB.
impl ColorModel for Hsl {
    fn model(&self) -> Model {
        Model::Hsl
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(self)
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
        *self
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_hsl()
    }

    fn to_css_string(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            fixed(self.hue, 0),
            fixed(self.saturation, 0),
            fixed(self.lightness, 0)
        )
    }

    fn to_url_string(&self) -> String {
        format!(
            "{}_{}_{}",
            fixed(self.hue, 0),
            fixed(self.saturation, 0),
            fixed(self.lightness, 0)
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°, {}%, {}%",
            fixed(self.hue, 0),
            fixed(self.saturation, 0),
            fixed(self.lightness, 0)
        )
    }
}

/// Parses `"h, s, l"` or `"hsl(h°, s%, l%)"` with integer components.
impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [h, sat, l] = parse::components(s, Model::Hsl, "hsl", &DEGREE_PERCENT, Token::Integer)?;
        Hsl::new(h, sat, l).map_err(parse::reject(Model::Hsl, s))
    }
}
