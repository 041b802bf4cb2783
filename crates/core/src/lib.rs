#![deny(unsafe_code)]
//! Color conversion and palette generation across ten color models.
//!
//! Provides the value types (`Hex`, `Rgb`, `Xyz`, `Yxy`, `CieLab`, `CieLch`,
//! `Cmy`, `Cmyk`, `Hsl`, `Hsv`), the `ColorModel` trait that converts any of
//! them into any other, the runtime-tagged `Color` sum type, per-model string
//! parsers, and derived operations: CIELab distance, nearest-palette matching,
//! websafe snapping, hue/saturation/brightness adjustment, and harmony
//! generators.
//!
//! ```
//! use tincture_core::{ColorModel, Rgb};
//!
//! let red = Rgb::new(255.0, 0.0, 0.0)?;
//! assert_eq!(red.to_hex().to_string(), "FF0000");
//! assert_eq!(red.to_css_string(), "rgb(255, 0, 0)");
//! # Ok::<(), tincture_core::ColorError>(())
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod harmony;
pub mod model;
pub mod ops;
mod parse;
pub mod space;

pub use color::Color;
pub use convert::ColorModel;
pub use error::{ColorError, ErrorKind};
pub use model::{Model, UnknownModel};
pub use space::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
