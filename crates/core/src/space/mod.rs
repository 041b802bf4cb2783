//! The ten color value types and the direct conversion edges between them.
//!
//! Each module holds one model: its value type, validating constructor,
//! accessors, renderers, parser, and the closed-form formulas for the edges
//! that leave it. Conversions without a direct formula follow the canonical
//! path documented on each type's [`ColorModel`](crate::ColorModel) impl.

mod cielab;
mod cielch;
mod cmy;
mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod rgb;
mod xyz;
mod yxy;

pub use cielab::CieLab;
pub use cielch::CieLch;
pub use cmy::Cmy;
pub use cmyk::Cmyk;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;
pub use xyz::Xyz;
pub use yxy::Yxy;

/// Formats `value` with `decimals` places, rounding halves away from zero for
/// whole-number output and never printing a negative zero.
pub(crate) fn fixed(value: f64, decimals: usize) -> String {
    if decimals == 0 {
        format!("{:.0}", value.round() + 0.0)
    } else {
        format!("{:.*}", decimals, value + 0.0)
    }
}

/// Wraps a hue angle into `[0, 360)`.
pub(crate) fn wrap_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(360.0);
    // rem_euclid may round up to the divisor for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}
