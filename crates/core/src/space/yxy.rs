//! CIE xyY: luminance plus chromaticity coordinates.

use super::{Cmy, Cmyk, CieLab, CieLch, Hex, Hsl, Hsv, Rgb, Xyz};
use crate::convert::ColorModel;
use crate::error::{check_finite, ColorError};
use crate::model::Model;
use crate::parse::{self, Token, DEGREE_PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Yxy color: luminance `Y` and chromaticity `x`, `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "YxyFields")]
pub struct Yxy {
    luminance: f64,
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct YxyFields {
    luminance: f64,
    x: f64,
    y: f64,
}

impl TryFrom<YxyFields> for Yxy {
    type Error = ColorError;

    fn try_from(f: YxyFields) -> Result<Self, Self::Error> {
        Yxy::new(f.luminance, f.x, f.y)
    }
}

impl Yxy {
    /// Creates a Yxy color. Components must be finite.
    pub fn new(luminance: f64, x: f64, y: f64) -> Result<Self, ColorError> {
        Ok(Self {
            luminance: check_finite("Y", luminance)?,
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
        })
    }

    pub(crate) fn from_raw(luminance: f64, x: f64, y: f64) -> Self {
        Self { luminance, x, y }
    }

    /// The luminance `Y`.
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    /// The chromaticity coordinate `x`.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The chromaticity coordinate `y`.
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Zero luminance maps to black regardless of chromaticity, as does a zero
/// (or vanishing) `y`, which has no finite tristimulus.
fn yxy_to_xyz(c: &Yxy) -> Xyz {
    if c.luminance == 0.0 {
        return Xyz::from_raw(0.0, 0.0, 0.0);
    }
    let scale = c.luminance / c.y;
    let (x, z) = (c.x * scale, (1.0 - c.x - c.y) * scale);
    if !(x.is_finite() && z.is_finite()) {
        log::trace!("yxy chromaticity y = {} has no finite XYZ, using black", c.y);
        return Xyz::from_raw(0.0, 0.0, 0.0);
    }
    Xyz::from_raw(x, c.luminance, z)
}

/// Direct edge: XYZ. Every other model goes through XYZ.
impl ColorModel for Yxy {
    fn model(&self) -> Model {
        Model::Yxy
    }

    fn to_hex(&self) -> Hex {
        self.to_xyz().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        yxy_to_xyz(self)
    }

    fn to_yxy(&self) -> Yxy {
        *self
    }

    fn to_cielab(&self) -> CieLab {
        self.to_xyz().to_cielab()
    }

    fn to_cielch(&self) -> CieLch {
        self.to_xyz().to_cielch()
    }

    fn to_cmy(&self) -> Cmy {
        self.to_xyz().to_cmy()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_xyz().to_cmyk()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_xyz().to_hsl()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_xyz().to_hsv()
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_yxy()
    }

    fn to_url_string(&self) -> String {
        format!("{:.4}_{:.4}_{:.4}", self.luminance, self.x, self.y)
    }
}

impl fmt::Display for Yxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}, {:.4}", self.luminance, self.x, self.y)
    }
}

/// Parses `"Y, x, y"` or `"yxy(Y, x, y)"`; stray degree and percent signs
/// are ignored.
impl FromStr for Yxy {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [luminance, x, y] =
            parse::components(s, Model::Yxy, "yxy", &DEGREE_PERCENT, Token::Number)?;
        Yxy::new(luminance, x, y).map_err(parse::reject(Model::Yxy, s))
    }
}
