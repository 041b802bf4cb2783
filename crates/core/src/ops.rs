//! Derived-color operations: distance, nearest match, websafe snapping, and
//! hue, saturation and lightness adjustment.
//!
//! Every function takes a color in any model, works in whichever space the
//! operation is defined in, and returns its result in the input's model.

use crate::convert::ColorModel;
use crate::error::ColorError;
use crate::space::{CieLab, Hex, Hsv, Rgb};

/// Channel values of the websafe palette.
const WEBSAFE_STEP: f64 = 51.0;

/// Euclidean distance between two colors in CIELab.
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: ColorModel + ?Sized,
    B: ColorModel + ?Sized,
{
    let a = a.to_cielab();
    let b = b.to_cielab();
    ((a.lightness() - b.lightness()).powi(2) + (a.a() - b.a()).powi(2) + (a.b() - b.b()).powi(2))
        .sqrt()
}

/// Linear scan for the entry nearest to `color`. Ties keep the earliest.
fn nearest<'a, C, P>(color: &C, first: &'a P, rest: &'a [P]) -> &'a P
where
    C: ColorModel + ?Sized,
    P: ColorModel,
{
    let mut best = first;
    let mut best_distance = distance(color, first);
    for candidate in rest {
        let d = distance(color, candidate);
        if d < best_distance {
            best = candidate;
            best_distance = d;
        }
    }
    best
}

/// Returns the entry of `palette` nearest to `color`, converted into
/// `color`'s model.
///
/// Returns `ColorError::EmptyPalette` if `palette` is empty.
pub fn closest_match<C, P>(color: &C, palette: &[P]) -> Result<C, ColorError>
where
    C: ColorModel,
    P: ColorModel,
{
    let (first, rest) = palette.split_first().ok_or(ColorError::EmptyPalette)?;
    Ok(color.reproject(nearest(color, first, rest)))
}

/// The 216 websafe colors, enumerated red-major then green then blue.
pub fn websafe_palette() -> [Rgb; 216] {
    std::array::from_fn(|i| {
        let level = |n: usize| (n % 6) as f64 * WEBSAFE_STEP;
        Rgb::clipped(level(i / 36), level(i / 6), level(i))
    })
}

/// Snaps `color` to the nearest websafe color.
pub fn websafe<C: ColorModel>(color: &C) -> C {
    let palette = websafe_palette();
    let [first, rest @ ..] = &palette;
    color.reproject(nearest(color, first, rest))
}

/// Shifts the CIELCh hue by `degrees`, or sets it when `absolute`.
///
/// The resulting hue is wrapped into [0, 360) in both directions, so a shift
/// of -30 on a hue of 10 lands on 340.
pub fn hue<C: ColorModel>(color: &C, degrees: f64, absolute: bool) -> C {
    let lch = color.to_cielch();
    let target = if absolute { degrees } else { lch.hue() + degrees };
    color.reproject(&lch.with_hue(target))
}

/// Shifts the HSV saturation by `delta`, or sets it when `absolute`.
///
/// Fails with `ColorError::OutOfRange` if the new saturation leaves [0, 100].
pub fn saturation<C: ColorModel>(color: &C, delta: f64, absolute: bool) -> Result<C, ColorError> {
    let hsv = color.to_hsv();
    let target = if absolute { delta } else { hsv.saturation() + delta };
    let adjusted = Hsv::new(hsv.hue(), target, hsv.value())?;
    Ok(color.reproject(&adjusted))
}

/// Shifts the CIELab lightness by `delta`, or sets it when `absolute`.
///
/// Fails with `ColorError::OutOfRange` if the new lightness leaves [0, 100].
pub fn brightness<C: ColorModel>(color: &C, delta: f64, absolute: bool) -> Result<C, ColorError> {
    let lab = color.to_cielab();
    let target = if absolute { delta } else { lab.lightness() + delta };
    let adjusted = CieLab::new(target, lab.a(), lab.b())?;
    Ok(color.reproject(&adjusted))
}

/// Replaces every channel with the luma `0.3R + 0.59G + 0.11B` of the
/// rounded RGB channels.
pub fn greyscale<C: ColorModel>(color: &C) -> C {
    let rgb = color.to_rgb();
    let luma = f64::from(rgb.red()) * 0.3
        + f64::from(rgb.green()) * 0.59
        + f64::from(rgb.blue()) * 0.11;
    color.reproject(&Rgb::clipped(luma, luma, luma))
}

/// Whether the HSL-style lightness of the color's Hex form is below 50.
pub fn is_dark<C: ColorModel + ?Sized>(color: &C) -> bool {
    let rgb = color.to_hex().to_rgb();
    let [r, g, b] = [rgb.red(), rgb.green(), rgb.blue()].map(|c| f64::from(c) / 255.0);
    let lightness = ((r.max(g).max(b) + r.min(g).min(b)) / 2.0 * 100.0).round();
    lightness < 50.0
}

/// Pure black for light colors, pure white for dark ones.
pub fn matching_text_color<C: ColorModel + ?Sized>(color: &C) -> Hex {
    if is_dark(color) {
        Hex::from_packed(0xFFFFFF)
    } else {
        Hex::from_packed(0x000000)
    }
}
