//! The closed set of color models and the self-conversion table.
//!
//! A [`Model`] names one of the ten supported color models. Derived-color
//! operations compute their results in whatever space suits them (CIELCh for
//! hue, HSV for saturation, RGB for blends) and then use [`Model::project`]
//! to hand the result back in the caller's model.

use crate::color::Color;
use crate::convert::ColorModel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten supported color models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    Hex,
    Rgb,
    Xyz,
    Yxy,
    CieLab,
    CieLch,
    Cmy,
    Cmyk,
    Hsl,
    Hsv,
}

impl Model {
    /// All models, in declaration order.
    pub const ALL: [Model; 10] = [
        Model::Hex,
        Model::Rgb,
        Model::Xyz,
        Model::Yxy,
        Model::CieLab,
        Model::CieLch,
        Model::Cmy,
        Model::Cmyk,
        Model::Hsl,
        Model::Hsv,
    ];

    /// Lowercase model name, also used as the parser keyword.
    pub fn name(self) -> &'static str {
        match self {
            Model::Hex => "hex",
            Model::Rgb => "rgb",
            Model::Xyz => "xyz",
            Model::Yxy => "yxy",
            Model::CieLab => "cielab",
            Model::CieLch => "cielch",
            Model::Cmy => "cmy",
            Model::Cmyk => "cmyk",
            Model::Hsl => "hsl",
            Model::Hsv => "hsv",
        }
    }

    /// Converts `color` into this model.
    pub fn project<C: ColorModel + ?Sized>(self, color: &C) -> Color {
        match self {
            Model::Hex => Color::Hex(color.to_hex()),
            Model::Rgb => Color::Rgb(color.to_rgb()),
            Model::Xyz => Color::Xyz(color.to_xyz()),
            Model::Yxy => Color::Yxy(color.to_yxy()),
            Model::CieLab => Color::CieLab(color.to_cielab()),
            Model::CieLch => Color::CieLch(color.to_cielch()),
            Model::Cmy => Color::Cmy(color.to_cmy()),
            Model::Cmyk => Color::Cmyk(color.to_cmyk()),
            Model::Hsl => Color::Hsl(color.to_hsl()),
            Model::Hsv => Color::Hsv(color.to_hsv()),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a model name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color model: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Model::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| UnknownModel(s.to_owned()))
    }
}
