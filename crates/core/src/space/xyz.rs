//! CIE 1931 XYZ tristimulus values, scaled so that Y = 100 for white.

use super::{Cmy, Cmyk, CieLab, CieLch, Hex, Hsl, Hsv, Rgb, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_finite, ColorError};
use crate::model::Model;
use crate::parse::{self, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// D65 reference white, 2° observer.
pub(crate) const REF_WHITE: [f64; 3] = [95.047, 100.000, 108.883];

/// Ratio below which CIELab uses its linear segment, (6/29)^3.
pub(crate) const LAB_EPSILON: f64 = 0.008856;

/// Slope of the CIELab linear segment.
pub(crate) const LAB_KAPPA: f64 = 7.787;

/// Offset of the CIELab linear segment.
pub(crate) const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Linear value above which sRGB companding uses the power curve.
const SRGB_GAMMA_THRESHOLD: f64 = 0.0031308;

/// XYZ-to-sRGB matrix (D65), rows R, G, B.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// A CIE XYZ color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "XyzFields")]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Deserialize)]
struct XyzFields {
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<XyzFields> for Xyz {
    type Error = ColorError;

    fn try_from(f: XyzFields) -> Result<Self, Self::Error> {
        Xyz::new(f.x, f.y, f.z)
    }
}

impl Xyz {
    /// Creates an XYZ color. Components are unbounded but must be finite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, ColorError> {
        Ok(Self {
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
            z: check_finite("z", z)?,
        })
    }

    pub(crate) fn from_raw(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

/// Applies sRGB gamma to a linear channel.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c > SRGB_GAMMA_THRESHOLD {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * c
    }
}

/// CIELab companding function f(t).
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA * t + LAB_OFFSET
    }
}

/// Inverse sRGB matrix and gamma. Out-of-gamut channels are clipped.
fn xyz_to_rgb(c: &Xyz) -> Rgb {
    let (x, y, z) = (c.x / 100.0, c.y / 100.0, c.z / 100.0);
    let [r, g, b] = XYZ_TO_RGB
        .map(|row| linear_component_to_srgb(x * row[0] + y * row[1] + z * row[2]) * 255.0);
    Rgb::clipped(r, g, b)
}

/// Chromaticity coordinates; black maps to (0, 0).
fn xyz_to_yxy(c: &Xyz) -> Yxy {
    let sum = c.x + c.y + c.z;
    if sum == 0.0 {
        return Yxy::from_raw(c.y, 0.0, 0.0);
    }
    Yxy::from_raw(c.y, c.x / sum, c.y / sum)
}

fn xyz_to_cielab(c: &Xyz) -> CieLab {
    let [fx, fy, fz] = [c.x / REF_WHITE[0], c.y / REF_WHITE[1], c.z / REF_WHITE[2]].map(lab_f);
    CieLab::from_raw(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Direct edges: RGB, Yxy, CIELab. Hex, HSL, HSV, CMY and CMYK go through
/// RGB; CIELCh goes through CIELab.
impl ColorModel for Xyz {
    fn model(&self) -> Model {
        Model::Xyz
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        xyz_to_rgb(self)
    }

    fn to_xyz(&self) -> Xyz {
        *self
    }

    fn to_yxy(&self) -> Yxy {
        xyz_to_yxy(self)
    }

    fn to_cielab(&self) -> CieLab {
        xyz_to_cielab(self)
    }

    fn to_cielch(&self) -> CieLch {
        self.to_cielab().to_cielch()
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
        other.to_xyz()
    }

    fn to_url_string(&self) -> String {
        format!("{:.4}_{:.4}_{:.4}", self.x, self.y, self.z)
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}, {:.4}", self.x, self.y, self.z)
    }
}

/// Parses `"x, y, z"` or `"xyz(x, y, z)"` with arbitrary finite numbers.
impl FromStr for Xyz {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, z] = parse::components(s, Model::Xyz, "xyz", &[], Token::Number)?;
        Xyz::new(x, y, z).map_err(parse::reject(Model::Xyz, s))
    }
}
