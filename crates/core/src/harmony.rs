//! Palette generators built on the conversion graph.
//!
//! Hue-based harmonies rotate the CIELCh hue and hold lightness and chroma.
//! `range` blends in RGB and `sweetspot` derives its entries in HSV. Every
//! generator returns its colors in the model of the color it was given.

use crate::convert::ColorModel;
use crate::ops;
use crate::space::{Hsv, Rgb};

/// Upper bound on up-front allocation for caller-sized palettes.
const PREALLOCATE_LIMIT: usize = 256;

/// The color on the opposite side of the CIELCh hue circle.
pub fn complement<C: ColorModel>(color: &C) -> C {
    ops::hue(color, 180.0, false)
}

/// Hues 30 degrees either side: `[-30, self, +30]`.
pub fn analogous<C: ColorModel>(color: &C, include_self: bool) -> Vec<C> {
    flanking(color, 30.0, include_self)
}

/// Split complements at ±150 degrees: `[self, -150, +150]`.
pub fn split<C: ColorModel>(color: &C, include_self: bool) -> Vec<C> {
    let mut palette = Vec::with_capacity(3);
    if include_self {
        palette.push(color.reproject(color));
    }
    palette.push(ops::hue(color, -150.0, false));
    palette.push(ops::hue(color, 150.0, false));
    palette
}

fn flanking<C: ColorModel>(color: &C, offset: f64, include_self: bool) -> Vec<C> {
    let mut palette = Vec::with_capacity(3);
    palette.push(ops::hue(color, -offset, false));
    if include_self {
        palette.push(color.reproject(color));
    }
    palette.push(ops::hue(color, offset, false));
    palette
}

/// Divides the hue circle into `parts` equal wedges starting at the color's
/// hue and returns the other `parts - 1` corners. Fewer than two parts are
/// treated as two.
pub fn equal<C: ColorModel>(color: &C, parts: usize, include_self: bool) -> Vec<C> {
    let parts = parts.max(2);
    let lch = color.to_cielch();
    let wedge = 360.0 / parts as f64;

    let mut palette = Vec::with_capacity(parts.min(PREALLOCATE_LIMIT));
    if include_self {
        palette.push(color.reproject(color));
    }
    for i in 1..parts {
        palette.push(color.reproject(&lch.with_hue(lch.hue() + wedge * i as f64)));
    }
    palette
}

/// The three other corners of a rectangle inscribed in the hue circle whose
/// short side spans `side_length` degrees.
///
/// With `side_length = 120` this is a triad plus the color itself.
pub fn rectangle<C: ColorModel>(color: &C, side_length: f64, include_self: bool) -> Vec<C> {
    let long_side = (360.0 - side_length * 2.0) / 2.0;
    let lch = color.to_cielch();
    let corners = [
        side_length,
        side_length + long_side,
        side_length + long_side + side_length,
    ];

    let mut palette = Vec::with_capacity(4);
    if include_self {
        palette.push(color.reproject(color));
    }
    palette.extend(
        corners
            .iter()
            .map(|offset| color.reproject(&lch.with_hue(lch.hue() + offset))),
    );
    palette
}

/// Linear RGB gradient from `from` towards `to`.
///
/// `steps` counts both endpoints, so `steps - 2` interior colors are
/// produced, each channel floored. With `include_self` the result starts
/// with `from` and ends with `to` converted into `from`'s model.
pub fn range<C, D>(from: &C, to: &D, steps: usize, include_self: bool) -> Vec<C>
where
    C: ColorModel,
    D: ColorModel + ?Sized,
{
    let a = from.to_rgb();
    let b = to.to_rgb();
    let [ar, ag, ab] = [a.red(), a.green(), a.blue()].map(f64::from);
    let [br, bg, bb] = [b.red(), b.green(), b.blue()].map(f64::from);
    let intervals = steps.saturating_sub(1);
    let span = intervals as f64;

    let mut palette = Vec::with_capacity(steps.min(PREALLOCATE_LIMIT));
    if include_self {
        palette.push(from.reproject(from));
    }
    for n in 1..intervals {
        let n = n as f64;
        let blend = |start: f64, end: f64| (start + n * (end - start) / span).floor();
        let step = Rgb::clipped(blend(ar, br), blend(ag, bg), blend(ab, bb));
        palette.push(from.reproject(&step));
    }
    if include_self {
        palette.push(from.reproject(to));
    }
    palette
}

/// A six-color HSV palette around the color: the color itself, a pale
/// brighter tint, a hue rotated by 300 degrees, a dimmed variant of the tint,
/// and two greys half a value-turn apart.
///
/// Entries are ordered `[self, tint, rotated, dimmed, grey, grey]`; `self`
/// is dropped unless `include_self` is set.
pub fn sweetspot<C: ColorModel>(color: &C, include_self: bool) -> Vec<C> {
    let base = color.to_hsv();
    let (hue, saturation, value) = (base.hue(), base.saturation(), base.value());

    let tint = Hsv::from_raw(
        hue,
        (saturation * 0.3).round(),
        (value * 1.3).round().min(100.0),
    );
    let rotated = Hsv::from_raw(
        ((hue + 300.0).trunc() as i64 % 360) as f64,
        saturation,
        value,
    );
    let dimmed = Hsv::from_raw(
        tint.hue(),
        (tint.saturation() * 1.2).round().min(100.0),
        (tint.value() * 0.5).round().min(100.0),
    );
    let grey = Hsv::from_raw(dimmed.hue(), 0.0, wrap_value(dimmed.value()));
    let second_grey = Hsv::from_raw(grey.hue(), grey.saturation(), wrap_value(grey.value()));

    let derived = [tint, rotated, dimmed, grey, second_grey];
    let mut palette = Vec::with_capacity(6);
    if include_self {
        palette.push(color.reproject(&base));
    }
    palette.extend(derived.iter().map(|hsv| color.reproject(hsv)));
    palette
}

/// Adds half a turn of value, wrapping at 100 on whole numbers.
fn wrap_value(value: f64) -> f64 {
    ((value.trunc() as i64 + 50) % 100) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{CieLch, Hex};

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn lch(h: f64) -> CieLch {
        CieLch::new(50.0, 20.0, h).unwrap()
    }

    fn hues(palette: &[CieLch]) -> Vec<f64> {
        palette.iter().map(|c| c.hue()).collect()
    }

    fn assert_hues(palette: &[CieLch], expected: &[f64]) {
        let actual = hues(palette);
        assert_eq!(actual.len(), expected.len(), "hues {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!(approx_eq(*a, *e), "hues {actual:?} expected {expected:?}");
        }
    }

    fn hsv_triple(c: &Hsv) -> (f64, f64, f64) {
        (c.hue(), c.saturation(), c.value())
    }

    // -- Hue harmonies --

    #[test]
    fn complement_is_half_turn() {
        assert!(approx_eq(complement(&lch(10.0)).hue(), 190.0));
        assert!(approx_eq(complement(&lch(270.0)).hue(), 90.0));
    }

    #[test]
    fn analogous_places_self_in_middle() {
        assert_hues(&analogous(&lch(10.0), true), &[340.0, 10.0, 40.0]);
        assert_hues(&analogous(&lch(10.0), false), &[340.0, 40.0]);
    }

    #[test]
    fn split_places_self_first() {
        assert_hues(&split(&lch(100.0), true), &[100.0, 310.0, 250.0]);
        assert_hues(&split(&lch(100.0), false), &[310.0, 250.0]);
    }

    #[test]
    fn equal_divides_circle() {
        assert_hues(&equal(&lch(10.0), 4, false), &[100.0, 190.0, 280.0]);
        assert_hues(&equal(&lch(10.0), 3, true), &[10.0, 130.0, 250.0]);
    }

    #[test]
    fn equal_treats_small_part_counts_as_two() {
        assert_hues(&equal(&lch(10.0), 0, false), &[190.0]);
        assert_hues(&equal(&lch(10.0), 1, false), &[190.0]);
    }

    #[test]
    fn rectangle_corners() {
        assert_hues(&rectangle(&lch(0.0), 60.0, false), &[60.0, 180.0, 240.0]);
        assert_hues(&rectangle(&lch(300.0), 60.0, true), &[300.0, 0.0, 120.0, 180.0]);
    }

    #[test]
    fn rectangle_of_120_is_a_triad() {
        assert_hues(&rectangle(&lch(0.0), 120.0, false), &[120.0, 180.0, 300.0]);
    }

    #[test]
    fn harmonies_hold_lightness_and_chroma() {
        for c in equal(&lch(45.0), 5, false) {
            assert_eq!(c.lightness(), 50.0);
            assert_eq!(c.chroma(), 20.0);
        }
    }

    #[test]
    fn harmonies_keep_callers_model() {
        let red = Rgb::new(255.0, 0.0, 0.0).unwrap();
        let palette: Vec<Rgb> = analogous(&red, true);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[1], red);
    }

    // -- Range --

    #[test]
    fn range_floors_interior_steps() {
        let black = Rgb::new(0.0, 0.0, 0.0).unwrap();
        let white = Rgb::new(255.0, 255.0, 255.0).unwrap();
        let greys: Vec<u8> = range(&black, &white, 5, false).iter().map(|c| c.red()).collect();
        assert_eq!(greys, [63, 127, 191]);
    }

    #[test]
    fn range_with_self_adds_both_ends() {
        let black = Rgb::new(0.0, 0.0, 0.0).unwrap();
        let white = Hex::new(0xFFFFFF).unwrap();
        let palette = range(&black, &white, 3, true);
        let reds: Vec<u8> = palette.iter().map(|c| c.red()).collect();
        assert_eq!(reds, [0, 127, 255]);
    }

    #[test]
    fn short_ranges_have_no_interior() {
        let a = Rgb::new(10.0, 20.0, 30.0).unwrap();
        let b = Rgb::new(200.0, 100.0, 0.0).unwrap();
        for steps in 0..=2 {
            assert!(range(&a, &b, steps, false).is_empty(), "steps {steps}");
        }
        assert_eq!(range(&a, &b, 2, true), vec![a, b]);
    }

    #[test]
    fn range_descends_per_channel() {
        let a = Rgb::new(200.0, 0.0, 100.0).unwrap();
        let b = Rgb::new(0.0, 200.0, 100.0).unwrap();
        let mid = range(&a, &b, 3, false);
        assert_eq!((mid[0].red(), mid[0].green(), mid[0].blue()), (100, 100, 100));
    }

    #[test]
    fn long_palettes_grow_past_preallocation() {
        let black = Rgb::new(0.0, 0.0, 0.0).unwrap();
        let white = Rgb::new(255.0, 255.0, 255.0).unwrap();
        let steps = PREALLOCATE_LIMIT * 4;
        let gradient = range(&black, &white, steps, true);
        assert_eq!(gradient.len(), steps);
        assert_eq!(gradient.last(), Some(&white));
        let base = CieLch::new(50.0, 20.0, 0.0).unwrap();
        assert_eq!(equal(&base, steps, false).len(), steps - 1);
    }

    // -- Sweetspot --

    #[test]
    fn sweetspot_derivation_and_order() {
        let base = Hsv::new(200.0, 50.0, 60.0).unwrap();
        let palette: Vec<_> = sweetspot(&base, true).iter().map(hsv_triple).collect();
        assert_eq!(
            palette,
            [
                (200.0, 50.0, 60.0),
                (200.0, 15.0, 78.0),
                (140.0, 50.0, 60.0),
                (200.0, 18.0, 39.0),
                (200.0, 0.0, 89.0),
                (200.0, 0.0, 39.0),
            ]
        );
    }

    #[test]
    fn sweetspot_without_self_drops_base() {
        let base = Hsv::new(200.0, 50.0, 60.0).unwrap();
        let palette = sweetspot(&base, false);
        assert_eq!(palette.len(), 5);
        assert_eq!(hsv_triple(&palette[0]), (200.0, 15.0, 78.0));
    }

    #[test]
    fn sweetspot_caps_value() {
        let base = Hsv::new(10.0, 100.0, 90.0).unwrap();
        let palette = sweetspot(&base, false);
        // 90 * 1.3 = 117 caps at 100, then the greys wrap 50 -> 0
        assert_eq!(hsv_triple(&palette[0]), (10.0, 30.0, 100.0));
        assert_eq!(hsv_triple(&palette[2]), (10.0, 36.0, 50.0));
        assert_eq!(hsv_triple(&palette[3]), (10.0, 0.0, 0.0));
        assert_eq!(hsv_triple(&palette[4]), (10.0, 0.0, 50.0));
    }

    #[test]
    fn sweetspot_rotation_truncates_hue() {
        let base = Hsv::new(75.5, 40.0, 40.0).unwrap();
        let rotated = sweetspot(&base, false)[1];
        assert_eq!(rotated.hue(), 15.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn complement_is_an_involution(h in 0.0_f64..360.0) {
                let original = lch(h);
                let back = complement(&complement(&original)).hue();
                let diff = (back - h).abs();
                prop_assert!(diff < EPSILON || (360.0 - diff) < EPSILON, "{h} -> {back}");
            }

            #[test]
            fn equal_returns_parts_minus_one(parts in 2usize..24, h in 0.0_f64..360.0) {
                prop_assert_eq!(equal(&lch(h), parts, false).len(), parts - 1);
                prop_assert_eq!(equal(&lch(h), parts, true).len(), parts);
            }

            #[test]
            fn range_length_counts_endpoints(steps in 2usize..40) {
                let a = Rgb::new(0.0, 50.0, 100.0).unwrap();
                let b = Rgb::new(255.0, 10.0, 0.0).unwrap();
                prop_assert_eq!(range(&a, &b, steps, true).len(), steps);
            }
        }
    }
}
