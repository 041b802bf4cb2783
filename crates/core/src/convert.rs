//! The `ColorModel` trait shared by every value type and by [`Color`](crate::Color).
//!
//! Each implementor supplies its own conversions along the canonical paths of
//! the conversion graph. The derived operations (distance, matching, hue
//! shifts, harmonies) are default methods that forward to the free functions
//! in [`ops`](crate::ops) and [`harmony`](crate::harmony), so they behave the
//! same for every model.

use crate::error::ColorError;
use crate::model::Model;
use crate::space::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
use crate::{harmony, ops};
use std::fmt::Display;

/// A color expressed in one of the ten supported models.
///
/// Conversions never fail: a valid source value always yields a valid
/// destination value, with channels clipped where a formula lands in RGB.
pub trait ColorModel: Display {
    /// The model this value is expressed in.
    fn model(&self) -> Model;

    fn to_hex(&self) -> Hex;
    fn to_rgb(&self) -> Rgb;
    fn to_xyz(&self) -> Xyz;
    fn to_yxy(&self) -> Yxy;
    fn to_cielab(&self) -> CieLab;
    fn to_cielch(&self) -> CieLch;
    fn to_cmy(&self) -> Cmy;
    fn to_cmyk(&self) -> Cmyk;
    fn to_hsl(&self) -> Hsl;
    fn to_hsv(&self) -> Hsv;

    /// Converts `other` into this value's model.
    ///
    /// This is the self-conversion every derived operation uses to hand its
    /// result back in the caller's model. `c.reproject(&c)` is an equal copy.
    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self
    where
        Self: Sized;

    /// CSS form. Models without a CSS notation render through RGB.
    fn to_css_string(&self) -> String {
        self.to_rgb().to_css_string()
    }

    /// Display form with `_` separators, safe for URLs.
    fn to_url_string(&self) -> String;

    // -- Derived operations --

    /// Euclidean distance to `other` in CIELab.
    fn distance<C: ColorModel + ?Sized>(&self, other: &C) -> f64 {
        ops::distance(self, other)
    }

    /// The palette entry nearest to this color, in this color's model.
    ///
    /// Returns `ColorError::EmptyPalette` if `palette` is empty.
    fn closest_match<C: ColorModel>(&self, palette: &[C]) -> Result<Self, ColorError>
    where
        Self: Sized,
    {
        ops::closest_match(self, palette)
    }

    /// Snaps to the nearest of the 216 websafe colors.
    fn websafe(&self) -> Self
    where
        Self: Sized,
    {
        ops::websafe(self)
    }

    /// Shifts (or, if `absolute`, sets) the CIELCh hue by `degrees`.
    fn adjust_hue(&self, degrees: f64, absolute: bool) -> Self
    where
        Self: Sized,
    {
        ops::hue(self, degrees, absolute)
    }

    /// Shifts (or, if `absolute`, sets) the HSV saturation.
    fn adjust_saturation(&self, delta: f64, absolute: bool) -> Result<Self, ColorError>
    where
        Self: Sized,
    {
        ops::saturation(self, delta, absolute)
    }

    /// Shifts (or, if `absolute`, sets) the CIELab lightness.
    fn adjust_brightness(&self, delta: f64, absolute: bool) -> Result<Self, ColorError>
    where
        Self: Sized,
    {
        ops::brightness(self, delta, absolute)
    }

    fn greyscale(&self) -> Self
    where
        Self: Sized,
    {
        ops::greyscale(self)
    }

    fn is_dark(&self) -> bool {
        ops::is_dark(self)
    }

    /// Black text on light colors, white text on dark ones.
    fn matching_text_color(&self) -> Hex {
        ops::matching_text_color(self)
    }

    fn complement(&self) -> Self
    where
        Self: Sized,
    {
        harmony::complement(self)
    }

    fn analogous(&self, include_self: bool) -> Vec<Self>
    where
        Self: Sized,
    {
        harmony::analogous(self, include_self)
    }

    fn split(&self, include_self: bool) -> Vec<Self>
    where
        Self: Sized,
    {
        harmony::split(self, include_self)
    }

    fn equal(&self, parts: usize, include_self: bool) -> Vec<Self>
    where
        Self: Sized,
    {
        harmony::equal(self, parts, include_self)
    }

    fn rectangle(&self, side_length: f64, include_self: bool) -> Vec<Self>
    where
        Self: Sized,
    {
        harmony::rectangle(self, side_length, include_self)
    }

    /// Gradient from this color towards `to` in RGB.
    fn range<C: ColorModel + ?Sized>(&self, to: &C, steps: usize, include_self: bool) -> Vec<Self>
    where
        Self: Sized,
    {
        harmony::range(self, to, steps, include_self)
    }

    fn sweetspot(&self, include_self: bool) -> Vec<Self>
    where
        Self: Sized,
    {
        harmony::sweetspot(self, include_self)
    }
}
