#![deny(unsafe_code)]
//! Scheme registry: maps scheme names to palette generators configured from
//! JSON parameters.
//!
//! This crate sits on top of `tincture-core`, which defines the color types
//! and the harmony operations. Front ends construct a scheme by name with
//! [`SchemeKind::from_name`] and apply it to any base [`Color`].
//!
//! ```
//! use serde_json::json;
//! use tincture_core::Color;
//! use tincture_schemes::{Scheme, SchemeKind};
//!
//! let scheme = SchemeKind::from_name("equal", &json!({"parts": 4}))?;
//! let palette = scheme.generate(&Color::parse("#FF0000")?);
//! assert_eq!(palette.len(), 3);
//! # Ok::<(), tincture_schemes::SchemeError>(())
//! ```

pub mod error;
pub mod harmony;
pub mod palette;
pub mod params;
pub mod scheme;

pub use error::SchemeError;
pub use scheme::Scheme;

use serde_json::Value;
use tincture_core::Color;

/// All available scheme names.
const SCHEME_NAMES: &[&str] = &[
    "complement",
    "analogous",
    "split",
    "equal",
    "rectangle",
    "range",
    "sweetspot",
    "websafe",
    "greyscale",
];

/// Enumeration of all registered schemes.
///
/// Wraps each scheme and delegates `Scheme` trait methods. Use
/// [`SchemeKind::from_name`] for string-based construction.
#[derive(Debug, Clone, Copy)]
pub enum SchemeKind {
    Complement(harmony::Complement),
    Analogous(harmony::Analogous),
    Split(harmony::Split),
    Equal(harmony::Equal),
    Rectangle(harmony::Rectangle),
    Range(palette::Range),
    Sweetspot(palette::Sweetspot),
    Websafe(palette::Websafe),
    Greyscale(palette::Greyscale),
}

impl SchemeKind {
    /// Constructs a scheme by name. Unknown parameter keys are ignored.
    ///
    /// Returns `SchemeError::UnknownScheme` if the name is not recognized,
    /// or the scheme's own error if a required parameter is missing or
    /// invalid.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, SchemeError> {
        let scheme = match name {
            "complement" => SchemeKind::Complement(harmony::Complement),
            "analogous" => SchemeKind::Analogous(harmony::Analogous::from_json(params)),
            "split" => SchemeKind::Split(harmony::Split::from_json(params)),
            "equal" => SchemeKind::Equal(harmony::Equal::from_json(params)),
            "rectangle" => SchemeKind::Rectangle(harmony::Rectangle::from_json(params)),
            "range" => SchemeKind::Range(palette::Range::from_json(params)?),
            "sweetspot" => SchemeKind::Sweetspot(palette::Sweetspot::from_json(params)),
            "websafe" => SchemeKind::Websafe(palette::Websafe),
            "greyscale" => SchemeKind::Greyscale(palette::Greyscale),
            _ => return Err(SchemeError::UnknownScheme(name.to_string())),
        };
        log::debug!("constructed scheme {name} with params {}", scheme.params());
        Ok(scheme)
    }

    /// Returns a slice of all recognized scheme names.
    pub fn list_schemes() -> &'static [&'static str] {
        SCHEME_NAMES
    }
}

impl Scheme for SchemeKind {
    fn generate(&self, base: &Color) -> Vec<Color> {
        match self {
            SchemeKind::Complement(s) => s.generate(base),
            SchemeKind::Analogous(s) => s.generate(base),
            SchemeKind::Split(s) => s.generate(base),
            SchemeKind::Equal(s) => s.generate(base),
            SchemeKind::Rectangle(s) => s.generate(base),
            SchemeKind::Range(s) => s.generate(base),
            SchemeKind::Sweetspot(s) => s.generate(base),
            SchemeKind::Websafe(s) => s.generate(base),
            SchemeKind::Greyscale(s) => s.generate(base),
        }
    }

    fn params(&self) -> Value {
        match self {
            SchemeKind::Complement(s) => s.params(),
            SchemeKind::Analogous(s) => s.params(),
            SchemeKind::Split(s) => s.params(),
            SchemeKind::Equal(s) => s.params(),
            SchemeKind::Rectangle(s) => s.params(),
            SchemeKind::Range(s) => s.params(),
            SchemeKind::Sweetspot(s) => s.params(),
            SchemeKind::Websafe(s) => s.params(),
            SchemeKind::Greyscale(s) => s.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            SchemeKind::Complement(s) => s.param_schema(),
            SchemeKind::Analogous(s) => s.param_schema(),
            SchemeKind::Split(s) => s.param_schema(),
            SchemeKind::Equal(s) => s.param_schema(),
            SchemeKind::Rectangle(s) => s.param_schema(),
            SchemeKind::Range(s) => s.param_schema(),
            SchemeKind::Sweetspot(s) => s.param_schema(),
            SchemeKind::Websafe(s) => s.param_schema(),
            SchemeKind::Greyscale(s) => s.param_schema(),
        }
    }
}
