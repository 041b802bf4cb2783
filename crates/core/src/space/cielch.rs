//! CIE LCh(ab): the cylindrical form of CIELab.

use super::{fixed, wrap_hue, Cmy, Cmyk, CieLab, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_finite, check_range, ColorError};
use crate::model::Model;
use crate::parse::{self, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CIELCh color. Hue is always kept in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CieLchFields")]
pub struct CieLch {
    lightness: f64,
    chroma: f64,
    hue: f64,
}

#[derive(Deserialize)]
struct CieLchFields {
    lightness: f64,
    chroma: f64,
    hue: f64,
}

impl TryFrom<CieLchFields> for CieLch {
    type Error = ColorError;

    fn try_from(f: CieLchFields) -> Result<Self, Self::Error> {
        CieLch::new(f.lightness, f.chroma, f.hue)
    }
}

impl CieLch {
    /// Creates a CIELCh color, wrapping `hue` into [0, 360).
    ///
    /// Returns `ColorError::OutOfRange` if lightness is outside [0, 100],
    /// chroma is negative, or any component is not finite.
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Result<Self, ColorError> {
        Ok(Self::from_raw(
            check_range("lightness", lightness, 0.0, 100.0)?,
            check_range("chroma", chroma, 0.0, f64::INFINITY)?,
            check_finite("hue", hue)?,
        ))
    }

    /// Builds a color from conversion output. The hue is still wrapped.
    pub(crate) fn from_raw(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue: wrap_hue(hue),
        }
    }

    /// Returns a copy with a different hue, wrapped into [0, 360).
    pub(crate) fn with_hue(self, hue: f64) -> Self {
        Self::from_raw(self.lightness, self.chroma, hue)
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Hue angle in degrees, in [0, 360).
    pub fn hue(&self) -> f64 {
        self.hue
    }
}

fn cielch_to_cielab(c: &CieLch) -> CieLab {
    let radians = c.hue.to_radians();
    CieLab::from_raw(c.lightness, radians.cos() * c.chroma, radians.sin() * c.chroma)
}

/// Direct edge: CIELab. Every other model goes through CIELab.
impl ColorModel for CieLch {
    fn model(&self) -> Model {
        Model::CieLch
    }

    fn to_hex(&self) -> Hex {
        self.to_cielab().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_cielab().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_cielab().to_xyz()
    }

    fn to_yxy(&self) -> Yxy {
        self.to_cielab().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        cielch_to_cielab(self)
    }

    fn to_cielch(&self) -> CieLch {
        *self
    }

    fn to_cmy(&self) -> Cmy {
        self.to_cielab().to_cmy()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_cielab().to_cmyk()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_cielab().to_hsl()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_cielab().to_hsv()
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_cielch()
    }

    fn to_url_string(&self) -> String {
        format!(
            "{}_{}_{}",
            fixed(self.lightness, 0),
            fixed(self.chroma, 3),
            fixed(self.hue, 3)
        )
    }
}

impl fmt::Display for CieLch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            fixed(self.lightness, 0),
            fixed(self.chroma, 3),
            fixed(self.hue, 3)
        )
    }
}

/// Parses `"L, C, h"` or `"cielch(L, C, h)"`; lightness must be in [0, 100].
impl FromStr for CieLch {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [l, c, h] = parse::components(s, Model::CieLch, "cielch", &[], Token::Number)?;
        CieLch::new(l, c, h).map_err(parse::reject(Model::CieLch, s))
    }
}
