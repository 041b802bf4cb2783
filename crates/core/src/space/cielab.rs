//! CIE L*a*b* under the D65 reference white.

use super::xyz::{LAB_EPSILON, LAB_KAPPA, LAB_OFFSET, REF_WHITE};
use super::{fixed, Cmy, Cmyk, CieLch, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_finite, check_range, ColorError};
use crate::model::Model;
use crate::parse::{self, Token};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A CIELab color.
///
/// Lightness is nominally in [0, 100]; `a` and `b` are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CieLabFields")]
pub struct CieLab {
    lightness: f64,
    a: f64,
    b: f64,
}

#[derive(Deserialize)]
struct CieLabFields {
    lightness: f64,
    a: f64,
    b: f64,
}

impl TryFrom<CieLabFields> for CieLab {
    type Error = ColorError;

    fn try_from(f: CieLabFields) -> Result<Self, Self::Error> {
        CieLab::new(f.lightness, f.a, f.b)
    }
}

impl CieLab {
    /// Creates a CIELab color.
    ///
    /// Returns `ColorError::OutOfRange` if lightness is outside [0, 100] or
    /// any component is not finite.
    pub fn new(lightness: f64, a: f64, b: f64) -> Result<Self, ColorError> {
        Ok(Self {
            lightness: check_range("lightness", lightness, 0.0, 100.0)?,
            a: check_finite("a", a)?,
            b: check_finite("b", b)?,
        })
    }

    pub(crate) fn from_raw(lightness: f64, a: f64, b: f64) -> Self {
        Self { lightness, a, b }
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// The green–red axis.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The blue–yellow axis.
    pub fn b(&self) -> f64 {
        self.b
    }
}

/// Inverse of the CIELab companding function.
fn lab_f_inverse(t: f64) -> f64 {
    let cubed = t.powi(3);
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA
    }
}

fn cielab_to_xyz(c: &CieLab) -> Xyz {
    let fy = (c.lightness + 16.0) / 116.0;
    let fx = c.a / 500.0 + fy;
    let fz = fy - c.b / 200.0;
    Xyz::from_raw(
        REF_WHITE[0] * lab_f_inverse(fx),
        REF_WHITE[1] * lab_f_inverse(fy),
        REF_WHITE[2] * lab_f_inverse(fz),
    )
}

/// Polar form. A non-positive angle from `atan2` is measured back from 360.
fn cielab_to_cielch(c: &CieLab) -> CieLch {
    let angle = c.b.atan2(c.a);
    let hue = if angle > 0.0 {
        angle / PI * 180.0
    } else {
        360.0 - angle.abs() / PI * 180.0
    };
    let chroma = (c.a.powi(2) + c.b.powi(2)).sqrt();
    CieLch::from_raw(c.lightness, chroma, hue)
}

/// Direct edges: XYZ, CIELCh. RGB goes through XYZ; Hex, HSL, HSV, CMY and
/// CMYK go through RGB; Yxy goes through XYZ.
impl ColorModel for CieLab {
    fn model(&self) -> Model {
        Model::CieLab
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        cielab_to_xyz(self)
    }

    fn to_yxy(&self) -> Yxy {
        self.to_xyz().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        *self
    }

    fn to_cielch(&self) -> CieLch {
        cielab_to_cielch(self)
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
        other.to_cielab()
    }

    fn to_url_string(&self) -> String {
        format!(
            "{}_{}_{}",
            fixed(self.lightness, 0),
            fixed(self.a, 3),
            fixed(self.b, 3)
        )
    }
}

impl fmt::Display for CieLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            fixed(self.lightness, 0),
            fixed(self.a, 3),
            fixed(self.b, 3)
        )
    }
}

/// Parses `"L, a, b"` or `"cielab(L, a, b)"`; lightness must be in [0, 100].
impl FromStr for CieLab {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [l, a, b] = parse::components(s, Model::CieLab, "cielab", &[], Token::Number)?;
        CieLab::new(l, a, b).map_err(parse::reject(Model::CieLab, s))
    }
}
