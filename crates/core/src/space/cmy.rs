//! Subtractive CMY with components in [0, 1].

use super::{Cmyk, CieLab, CieLch, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_range, ColorError};
use crate::model::Model;
use crate::parse::{self, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CMY color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CmyFields")]
pub struct Cmy {
    cyan: f64,
    magenta: f64,
    yellow: f64,
}

#[derive(Deserialize)]
struct CmyFields {
    cyan: f64,
    magenta: f64,
    yellow: f64,
}

impl TryFrom<CmyFields> for Cmy {
    type Error = ColorError;

    fn try_from(f: CmyFields) -> Result<Self, Self::Error> {
        Cmy::new(f.cyan, f.magenta, f.yellow)
    }
}

impl Cmy {
    /// Creates a CMY color.
    ///
    /// Returns `ColorError::OutOfRange` if any component is outside [0, 1].
    pub fn new(cyan: f64, magenta: f64, yellow: f64) -> Result<Self, ColorError> {
        Ok(Self {
            cyan: check_range("cyan", cyan, 0.0, 1.0)?,
            magenta: check_range("magenta", magenta, 0.0, 1.0)?,
            yellow: check_range("yellow", yellow, 0.0, 1.0)?,
        })
    }

    pub(crate) fn from_raw(cyan: f64, magenta: f64, yellow: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
        }
    }

    pub fn cyan(&self) -> f64 {
        self.cyan
    }

    pub fn magenta(&self) -> f64 {
        self.magenta
    }

    pub fn yellow(&self) -> f64 {
        self.yellow
    }
}

fn cmy_to_rgb(c: &Cmy) -> Rgb {
    Rgb::clipped(
        (1.0 - c.cyan) * 255.0,
        (1.0 - c.magenta) * 255.0,
        (1.0 - c.yellow) * 255.0,
    )
}

/// Pulls the shared component out as key. Pure black has no chromatic part.
fn cmy_to_cmyk(c: &Cmy) -> Cmyk {
    let key = c.cyan.min(c.magenta).min(c.yellow).min(1.0);
    if key == 1.0 {
        return Cmyk::from_raw(0.0, 0.0, 0.0, key);
    }
    let under = |v: f64| (v - key) / (1.0 - key);
    Cmyk::from_raw(under(c.cyan), under(c.magenta), under(c.yellow), key)
}

/// Direct edges: RGB, CMYK. Every other model goes through RGB.
impl ColorModel for Cmy {
    fn model(&self) -> Model {
        Model::Cmy
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        cmy_to_rgb(self)
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
        *self
    }

    fn to_cmyk(&self) -> Cmyk {
        cmy_to_cmyk(self)
    }

    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_cmy()
    }

    fn to_url_string(&self) -> String {
        format!("{:.4}_{:.4}_{:.4}", self.cyan, self.magenta, self.yellow)
    }
}

impl fmt::Display for Cmy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}, {:.4}", self.cyan, self.magenta, self.yellow)
    }
}

/// Parses `"c, m, y"` or `"cmy(c, m, y)"` with components in [0, 1].
impl FromStr for Cmy {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [c, m, y] = parse::components(s, Model::Cmy, "cmy", &[], Token::Number)?;
        Cmy::new(c, m, y).map_err(parse::reject(Model::Cmy, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let c: Cmy = serde_json::from_str(r#"{"cyan":0.5,"magenta":0,"yellow":1}"#).unwrap();
        assert_eq!(c, Cmy::new(0.5, 0.0, 1.0).unwrap());
        let r = serde_json::from_str::<Cmy>(r#"{"cyan":1.5,"magenta":0,"yellow":0}"#);
        assert!(r.is_err());
    }

    #[test]
    fn new_rejects_components_outside_unit_range() {
        assert!(Cmy::new(1.1, 0.0, 0.0).is_err());
        assert!(Cmy::new(0.0, -0.1, 0.0).is_err());
        assert!(Cmy::new(1.0, 0.0, 0.5).is_ok());
    }

    #[test]
    fn to_rgb_inverts_components() {
        let rgb = Cmy::new(0.0, 1.0, 0.8).unwrap().to_rgb();
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (255, 0, 51));
    }

    #[test]
    fn to_cmyk_extracts_key() {
        let cmyk = Cmy::new(0.5, 0.75, 1.0).unwrap().to_cmyk();
        assert!(approx_eq(cmyk.key(), 0.5));
        assert!(approx_eq(cmyk.cyan(), 0.0));
        assert!(approx_eq(cmyk.magenta(), 0.5));
        assert!(approx_eq(cmyk.yellow(), 1.0));
    }

    #[test]
    fn full_black_zeroes_chromatic_components() {
        let cmyk = Cmy::new(1.0, 1.0, 1.0).unwrap().to_cmyk();
        assert_eq!(
            (cmyk.cyan(), cmyk.magenta(), cmyk.yellow(), cmyk.key()),
            (0.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn cmyk_round_trip() {
        let original = Cmy::new(0.2, 0.4, 0.9).unwrap();
        let back = original.to_cmyk().to_cmy();
        assert!(approx_eq(back.cyan(), 0.2));
        assert!(approx_eq(back.magenta(), 0.4));
        assert!(approx_eq(back.yellow(), 0.9));
    }

    #[test]
    fn renders_four_decimals() {
        let c = Cmy::new(0.0, 1.0, 0.8).unwrap();
        assert_eq!(c.to_string(), "0.0000, 1.0000, 0.8000");
        assert_eq!(c.to_url_string(), "0.0000_1.0000_0.8000");
        assert_eq!(c.to_css_string(), "rgb(255, 0, 51)");
    }

    #[test]
    fn parse_validates_unit_range() {
        let c: Cmy = "cmy(0.1, 0.2, 0.3)".parse().unwrap();
        assert_eq!((c.cyan(), c.magenta(), c.yellow()), (0.1, 0.2, 0.3));
        assert!("cmy(0.1, 0.2, -0.3)".parse::<Cmy>().is_err());
        assert!("cmy(0.1, 0.2, 1.3)".parse::<Cmy>().is_err());
        assert!("cmyk(0.1, 0.2, 0.3)".parse::<Cmy>().is_err());
    }
}
