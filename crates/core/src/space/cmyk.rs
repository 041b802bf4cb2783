//! Subtractive CMYK with components in [0, 1].

use super::{Cmy, CieLab, CieLch, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_range, ColorError};
use crate::model::Model;
use crate::parse::{self, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CMYK color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CmykFields")]
pub struct Cmyk {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

#[derive(Deserialize)]
struct CmykFields {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

impl TryFrom<CmykFields> for Cmyk {
    type Error = ColorError;

    fn try_from(f: CmykFields) -> Result<Self, Self::Error> {
        Cmyk::new(f.cyan, f.magenta, f.yellow, f.key)
    }
}

impl Cmyk {
    /// Creates a CMYK color.
    ///
    /// Returns `ColorError::OutOfRange` if any component is outside [0, 1].
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Self, ColorError> {
        Ok(Self {
            cyan: check_range("cyan", cyan, 0.0, 1.0)?,
            magenta: check_range("magenta", magenta, 0.0, 1.0)?,
            yellow: check_range("yellow", yellow, 0.0, 1.0)?,
            key: check_range("key", key, 0.0, 1.0)?,
        })
    }

    pub(crate) fn from_raw(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
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

    /// The black component.
    pub fn key(&self) -> f64 {
        self.key
    }
}

fn cmyk_to_cmy(c: &Cmyk) -> Cmy {
    let over = |v: f64| v * (1.0 - c.key) + c.key;
    Cmy::from_raw(over(c.cyan), over(c.magenta), over(c.yellow))
}

/// Direct edge: CMY. Every other model goes through CMY.
impl ColorModel for Cmyk {
    fn model(&self) -> Model {
        Model::Cmyk
    }

    fn to_hex(&self) -> Hex {
        self.to_cmy().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_cmy().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_cmy().to_xyz()
    }

    fn to_yxy(&self) -> Yxy {
        self.to_cmy().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        self.to_cmy().to_cielab()
    }

    fn to_cielch(&self) -> CieLch {
        self.to_cmy().to_cielch()
    }

    fn to_cmy(&self) -> Cmy {
        cmyk_to_cmy(self)
    }

    fn to_cmyk(&self) -> Cmyk {
        *self
    }

    fn to_hsl(&self) -> Hsl {
        self.to_cmy().to_hsl()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_cmy().to_hsv()
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_cmyk()
    }

    fn to_url_string(&self) -> String {
        format!(
            "{:.2}_{:.2}_{:.2}_{:.2}",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}, {:.2}, {:.2}, {:.2}",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

/// Parses `"c, m, y, k"` or `"cmyk(c, m, y, k)"` with components in [0, 1].
impl FromStr for Cmyk {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [c, m, y, k] = parse::components(s, Model::Cmyk, "cmyk", &[], Token::Number)?;
        Cmyk::new(c, m, y, k).map_err(parse::reject(Model::Cmyk, s))
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
        let json = r#"{"cyan":0,"magenta":0.25,"yellow":1,"key":0.5}"#;
        let c: Cmyk = serde_json::from_str(json).unwrap();
        assert_eq!(c, Cmyk::new(0.0, 0.25, 1.0, 0.5).unwrap());
        let json = r#"{"cyan":0,"magenta":0,"yellow":0,"key":-0.1}"#;
        assert!(serde_json::from_str::<Cmyk>(json).is_err());
    }

    #[test]
    fn to_cmy_adds_key_back() {
        let cmy = Cmyk::new(0.0, 0.5, 1.0, 0.5).unwrap().to_cmy();
        assert!(approx_eq(cmy.cyan(), 0.5));
        assert!(approx_eq(cmy.magenta(), 0.75));
        assert!(approx_eq(cmy.yellow(), 1.0));
    }

    #[test]
    fn pure_key_is_black() {
        let rgb = Cmyk::new(0.0, 0.0, 0.0, 1.0).unwrap().to_rgb();
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (0, 0, 0));
    }

    #[test]
    fn red_from_rgb() {
        let cmyk = Rgb::new(255.0, 0.0, 0.0).unwrap().to_cmyk();
        assert_eq!(
            (cmyk.cyan(), cmyk.magenta(), cmyk.yellow(), cmyk.key()),
            (0.0, 1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn renders_two_decimals() {
        let c = Cmyk::new(0.0, 1.0, 1.0, 0.25).unwrap();
        assert_eq!(c.to_string(), "0.00, 1.00, 1.00, 0.25");
        assert_eq!(c.to_url_string(), "0.00_1.00_1.00_0.25");
    }

    #[test]
    fn parse_requires_four_components() {
        let c: Cmyk = "CMYK(0, 0.5, 1, 0.25);".parse().unwrap();
        assert_eq!((c.cyan(), c.magenta(), c.yellow(), c.key()), (0.0, 0.5, 1.0, 0.25));
        assert!("cmyk(0, 0.5, 1)".parse::<Cmyk>().is_err());
        assert!("cmyk(0, 0.5, 1, 2)".parse::<Cmyk>().is_err());
    }
}
