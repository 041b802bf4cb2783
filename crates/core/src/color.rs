//! `Color`: one value of any of the ten models.
//!
//! Use `Color` when the model is only known at runtime, for example after
//! parsing user text or reading a serialized palette. It implements
//! [`ColorModel`] by delegating to the wrapped value, so every conversion and
//! derived operation is available on it directly.

use crate::convert::ColorModel;
use crate::error::ColorError;
use crate::model::Model;
use crate::space::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color in one of the ten supported models.
///
/// Serializes externally tagged by lowercase model name, e.g.
/// `{"hex": "#FF0000"}` or `{"rgb": {"red": 255.0, "green": 0.0, "blue": 0.0}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Hex(Hex),
    Rgb(Rgb),
    Xyz(Xyz),
    Yxy(Yxy),
    CieLab(CieLab),
    CieLch(CieLch),
    Cmy(Cmy),
    Cmyk(Cmyk),
    Hsl(Hsl),
    Hsv(Hsv),
}

/// Applies `$body` to the value inside any variant.
macro_rules! each_variant {
    ($color:expr, $inner:ident => $body:expr) => {
        match $color {
            Color::Hex($inner) => $body,
            Color::Rgb($inner) => $body,
            Color::Xyz($inner) => $body,
            Color::Yxy($inner) => $body,
            Color::CieLab($inner) => $body,
            Color::CieLch($inner) => $body,
            Color::Cmy($inner) => $body,
            Color::Cmyk($inner) => $body,
            Color::Hsl($inner) => $body,
            Color::Hsv($inner) => $body,
        }
    };
}

/// Keyword prefixes tried by [`Color::parse`], longest match first where
/// one keyword extends another.
const KEYWORDS: [(&str, Model); 9] = [
    ("cmyk", Model::Cmyk),
    ("cmy", Model::Cmy),
    ("cielab", Model::CieLab),
    ("cielch", Model::CieLch),
    ("rgb", Model::Rgb),
    ("hsl", Model::Hsl),
    ("hsv", Model::Hsv),
    ("xyz", Model::Xyz),
    ("yxy", Model::Yxy),
];

impl Color {
    /// Converts into `model`. Converting into the current model is a copy.
    pub fn convert(&self, model: Model) -> Color {
        model.project(self)
    }

    /// Parses text in any model, detected from its prefix.
    ///
    /// A leading `#` selects Hex; otherwise the text must start with a model
    /// keyword such as `rgb(` or `cielab(`. The rest is handed to that
    /// model's parser, so the grammar and range rules are the model's own.
    ///
    /// Returns `ColorError::Unrecognized` when no model can be detected and
    /// `ColorError::InvalidString` when the detected model rejects the text.
    pub fn parse(text: &str) -> Result<Color, ColorError> {
        let lower = text.trim_start().to_lowercase();
        if lower.starts_with('#') {
            return Ok(Color::Hex(text.parse()?));
        }

        let model = KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.starts_with(keyword))
            .map(|&(_, model)| model)
            .ok_or_else(|| {
                log::debug!("no color model detected in {text:?}");
                ColorError::Unrecognized {
                    input: text.to_owned(),
                }
            })?;

        Ok(match model {
            Model::Hex => Color::Hex(text.parse()?),
            Model::Rgb => Color::Rgb(text.parse()?),
            Model::Xyz => Color::Xyz(text.parse()?),
            Model::Yxy => Color::Yxy(text.parse()?),
            Model::CieLab => Color::CieLab(text.parse()?),
            Model::CieLch => Color::CieLch(text.parse()?),
            Model::Cmy => Color::Cmy(text.parse()?),
            Model::Cmyk => Color::Cmyk(text.parse()?),
            Model::Hsl => Color::Hsl(text.parse()?),
            Model::Hsv => Color::Hsv(text.parse()?),
        })
    }
}

impl ColorModel for Color {
    fn model(&self) -> Model {
        each_variant!(self, c => c.model())
    }

    fn to_hex(&self) -> Hex {
        each_variant!(self, c => c.to_hex())
    }

    fn to_rgb(&self) -> Rgb {
        each_variant!(self, c => c.to_rgb())
    }

    fn to_xyz(&self) -> Xyz {
        each_variant!(self, c => c.to_xyz())
    }

    fn to_yxy(&self) -> Yxy {
        each_variant!(self, c => c.to_yxy())
    }

    fn to_cielab(&self) -> CieLab {
        each_variant!(self, c => c.to_cielab())
    }

    fn to_cielch(&self) -> CieLch {
        each_variant!(self, c => c.to_cielch())
    }

    fn to_cmy(&self) -> Cmy {
        each_variant!(self, c => c.to_cmy())
    }

    fn to_cmyk(&self) -> Cmyk {
        each_variant!(self, c => c.to_cmyk())
    }

    fn to_hsl(&self) -> Hsl {
        each_variant!(self, c => c.to_hsl())
    }

    fn to_hsv(&self) -> Hsv {
        each_variant!(self, c => c.to_hsv())
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        self.model().project(other)
    }

    fn to_css_string(&self) -> String {
        each_variant!(self, c => c.to_css_string())
    }

    fn to_url_string(&self) -> String {
        each_variant!(self, c => c.to_url_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_variant!(self, c => fmt::Display::fmt(c, f))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Color {
                fn from(c: $variant) -> Self {
                    Color::$variant(c)
                }
            }
        )*
    };
}

impl_from!(Hex, Rgb, Xyz, Yxy, CieLab, CieLch, Cmy, Cmyk, Hsl, Hsv);
