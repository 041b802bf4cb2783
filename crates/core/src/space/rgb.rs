//! sRGB with channels in [0, 255].
//!
//! Channels are stored unrounded so that chained conversions keep their
//! precision; the public channel accessors round half up, which is what Hex
//! packing and text rendering see.

use super::{Cmy, Cmyk, CieLab, CieLch, Hex, Hsl, Hsv, Xyz, Yxy};
use crate::convert::ColorModel;
use crate::error::{check_range, ColorError};
use crate::model::Model;
use crate::parse::{self, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Threshold below which an sRGB channel is on the linear segment.
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// sRGB-to-XYZ matrix (D65), rows X, Y, Z.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// An sRGB color with channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RgbFields")]
pub struct Rgb {
    red: f64,
    green: f64,
    blue: f64,
}

#[derive(Deserialize)]
struct RgbFields {
    red: f64,
    green: f64,
    blue: f64,
}

impl TryFrom<RgbFields> for Rgb {
    type Error = ColorError;

    fn try_from(f: RgbFields) -> Result<Self, Self::Error> {
        Rgb::new(f.red, f.green, f.blue)
    }
}

impl Rgb {
    /// Creates an RGB color.
    ///
    /// Returns `ColorError::OutOfRange` if any channel is outside [0, 255].
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
        Ok(Self {
            red: check_range("red", red, 0.0, 255.0)?,
            green: check_range("green", green, 0.0, 255.0)?,
            blue: check_range("blue", blue, 0.0, 255.0)?,
        })
    }

    /// Builds a color from conversion output, clipping each channel into
    /// [0, 255]. NaN channels become 0.
    pub(crate) fn clipped(red: f64, green: f64, blue: f64) -> Self {
        let clip = |name: &str, c: f64| {
            let clipped = if c.is_nan() { 0.0 } else { c.clamp(0.0, 255.0) };
            if clipped != c {
                log::trace!("clipped {name} channel {c} to {clipped}");
            }
            clipped
        };
        Self {
            red: clip("red", red),
            green: clip("green", green),
            blue: clip("blue", blue),
        }
    }

    /// Red channel, rounded half up.
    pub fn red(&self) -> u8 {
        round_channel(self.red)
    }

    /// Green channel, rounded half up.
    pub fn green(&self) -> u8 {
        round_channel(self.green)
    }

    /// Blue channel, rounded half up.
    pub fn blue(&self) -> u8 {
        round_channel(self.blue)
    }

    /// The unrounded channels as `[red, green, blue]`.
    pub fn components(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Normalized channels in [0, 1].
    fn unit(&self) -> [f64; 3] {
        [self.red / 255.0, self.green / 255.0, self.blue / 255.0]
    }
}

fn round_channel(c: f64) -> u8 {
    (c + 0.5).floor() as u8
}

/// Applies inverse sRGB gamma to a channel in [0, 1].
fn srgb_component_to_linear(c: f64) -> f64 {
    if c > SRGB_LINEAR_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Packs the rounded channels as `0xRRGGBB`.
fn rgb_to_hex(c: &Rgb) -> Hex {
    Hex::from_packed(u32::from(c.red()) << 16 | u32::from(c.green()) << 8 | u32::from(c.blue()))
}

/// Linearizes each channel, scales to [0, 100], and applies the sRGB matrix.
fn rgb_to_xyz(c: &Rgb) -> Xyz {
    let [r, g, b] = c.unit().map(|v| srgb_component_to_linear(v) * 100.0);
    let [x, y, z] = RGB_TO_XYZ.map(|row| r * row[0] + g * row[1] + b * row[2]);
    Xyz::from_raw(x, y, z)
}

/// Hue of the max-channel sextant decomposition, in degrees [0, 360).
fn sextant_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    super::wrap_hue(h * 60.0)
}

fn rgb_to_hsl(c: &Rgb) -> Hsl {
    let [r, g, b] = c.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::from_raw(0.0, 0.0, l * 100.0);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    Hsl::from_raw(sextant_hue(r, g, b, max, delta), s * 100.0, l * 100.0)
}

fn rgb_to_hsv(c: &Rgb) -> Hsv {
    let [r, g, b] = c.unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // delta == 0 also covers black, where max == 0
    if delta == 0.0 {
        return Hsv::from_raw(0.0, 0.0, max * 100.0);
    }

    let s = delta / max;
    Hsv::from_raw(sextant_hue(r, g, b, max, delta), s * 100.0, max * 100.0)
}

fn rgb_to_cmy(c: &Rgb) -> Cmy {
    let [r, g, b] = c.unit();
    Cmy::from_raw(1.0 - r, 1.0 - g, 1.0 - b)
}

/// Direct edges: Hex, XYZ, HSL, HSV, CMY. Yxy goes through XYZ, CIELab
/// through XYZ, CIELCh through CIELab, CMYK through CMY.
impl ColorModel for Rgb {
    fn model(&self) -> Model {
        Model::Rgb
    }

    fn to_hex(&self) -> Hex {
        rgb_to_hex(self)
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_xyz(&self) -> Xyz {
        rgb_to_xyz(self)
    }

    fn to_yxy(&self) -> Yxy {
        self.to_xyz().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        self.to_xyz().to_cielab()
    }

    fn to_cielch(&self) -> CieLch {
        self.to_cielab().to_cielch()
    }

    fn to_cmy(&self) -> Cmy {
        rgb_to_cmy(self)
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_cmy().to_cmyk()
    }

    fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self)
    }

    fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self)
    }

    fn reproject<C: ColorModel + ?Sized>(&self, other: &C) -> Self {
        other.to_rgb()
    }

    fn to_css_string(&self) -> String {
        format!("rgb({}, {}, {})", self.red(), self.green(), self.blue())
    }

    fn to_url_string(&self) -> String {
        format!("{}_{}_{}", self.red(), self.green(), self.blue())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red(), self.green(), self.blue())
    }
}

/// Parses `"r, g, b"` or `"rgb(r, g, b)"` with integer channels in [0, 255].
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = parse::components(s, Model::Rgb, "rgb", &[], Token::Integer)?;
        Rgb::new(r, g, b).map_err(parse::reject(Model::Rgb, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn rgb(r: f64, g: f64, b: f64) -> Rgb {
        Rgb::new(r, g, b).unwrap()
    }

    // -- Construction --

    #[test]
    fn new_rejects_channels_outside_range() {
        assert!(Rgb::new(256.0, 0.0, 0.0).is_err());
        assert!(Rgb::new(0.0, -1.0, 0.0).is_err());
        assert!(Rgb::new(0.0, 0.0, f64::NAN).is_err());
        assert!(Rgb::new(255.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn out_of_range_error_names_the_channel() {
        let err = Rgb::new(0.0, 300.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            ColorError::OutOfRange {
                field: "green",
                value: 300.0
            }
        );
    }

    #[test]
    fn accessors_round_half_up() {
        let c = rgb(10.5, 10.49, 254.5);
        assert_eq!(c.red(), 11);
        assert_eq!(c.green(), 10);
        assert_eq!(c.blue(), 255);
        assert_eq!(c.components(), [10.5, 10.49, 254.5]);
    }

    #[test]
    fn clipped_clamps_and_zeroes_nan() {
        let c = Rgb::clipped(-3.0, 300.0, f64::NAN);
        assert_eq!(c.components(), [0.0, 255.0, 0.0]);
    }

    // -- Direct edges --

    #[test]
    fn red_to_hex() {
        assert_eq!(rgb(255.0, 0.0, 0.0).to_hex().value(), 0xFF0000);
    }

    #[test]
    fn hex_packs_rounded_channels() {
        assert_eq!(rgb(0.4, 127.5, 254.6).to_hex().value(), 0x0080FF);
    }

    #[test]
    fn white_to_xyz_matches_reference_white_luminance() {
        let xyz = rgb(255.0, 255.0, 255.0).to_xyz();
        assert!(approx_eq(xyz.x(), 95.05), "x: {}", xyz.x());
        assert!(approx_eq(xyz.y(), 100.0), "y: {}", xyz.y());
        assert!(approx_eq(xyz.z(), 108.9), "z: {}", xyz.z());
    }

    #[test]
    fn red_to_xyz_is_first_matrix_column() {
        let xyz = rgb(255.0, 0.0, 0.0).to_xyz();
        assert!(approx_eq(xyz.x(), 41.24));
        assert!(approx_eq(xyz.y(), 21.26));
        assert!(approx_eq(xyz.z(), 1.93));
    }

    #[test]
    fn dark_channels_use_linear_segment() {
        // 10/255 = 0.0392 is below the 0.04045 threshold
        let xyz = rgb(10.0, 10.0, 10.0).to_xyz();
        let linear = 10.0 / 255.0 / 12.92 * 100.0;
        assert!(approx_eq(xyz.y(), linear), "y: {}", xyz.y());
    }

    #[test]
    fn white_to_hsl() {
        let hsl = rgb(255.0, 255.0, 255.0).to_hsl();
        assert_eq!(hsl.hue(), 0.0);
        assert_eq!(hsl.saturation(), 0.0);
        assert_eq!(hsl.lightness(), 100.0);
    }

    #[test]
    fn primaries_to_hsl() {
        let red = rgb(255.0, 0.0, 0.0).to_hsl();
        assert_eq!((red.hue(), red.saturation(), red.lightness()), (0.0, 100.0, 50.0));
        let green = rgb(0.0, 255.0, 0.0).to_hsl();
        assert_eq!(green.hue(), 120.0);
        let blue = rgb(0.0, 0.0, 255.0).to_hsl();
        assert_eq!(blue.hue(), 240.0);
    }

    #[test]
    fn magenta_hue_wraps_to_300() {
        let hsv = rgb(255.0, 0.0, 255.0).to_hsv();
        assert!(approx_eq(hsv.hue(), 300.0), "hue: {}", hsv.hue());
    }

    #[test]
    fn light_color_uses_upper_saturation_branch() {
        // l = (1 + 0.6) / 2 = 0.8, s = 0.4 / (2 - 1.6) = 1.0
        let hsl = rgb(255.0, 153.0, 153.0).to_hsl();
        assert!(approx_eq(hsl.lightness(), 80.0));
        assert!(approx_eq(hsl.saturation(), 100.0));
    }

    #[test]
    fn black_to_hsv_is_all_zero() {
        let hsv = rgb(0.0, 0.0, 0.0).to_hsv();
        assert_eq!((hsv.hue(), hsv.saturation(), hsv.value()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn orange_to_hsv() {
        let hsv = rgb(255.0, 128.0, 0.0).to_hsv();
        assert!(approx_eq(hsv.hue(), 128.0 / 255.0 * 60.0));
        assert!(approx_eq(hsv.saturation(), 100.0));
        assert!(approx_eq(hsv.value(), 100.0));
    }

    #[test]
    fn rgb_to_cmy_inverts_channels() {
        let cmy = rgb(255.0, 0.0, 51.0).to_cmy();
        assert!(approx_eq(cmy.cyan(), 0.0));
        assert!(approx_eq(cmy.magenta(), 1.0));
        assert!(approx_eq(cmy.yellow(), 0.8));
    }

    // -- Rendering --

    #[test]
    fn renders_display_css_and_url_forms() {
        let red = rgb(255.0, 0.0, 0.0);
        assert_eq!(red.to_string(), "255, 0, 0");
        assert_eq!(red.to_css_string(), "rgb(255, 0, 0)");
        assert_eq!(red.to_url_string(), "255_0_0");
    }

    // -- Parsing --

    #[test]
    fn parses_bare_and_functional_forms() {
        assert_eq!("12, 34, 56".parse::<Rgb>().unwrap(), rgb(12.0, 34.0, 56.0));
        assert_eq!("rgb(12,34,56)".parse::<Rgb>().unwrap(), rgb(12.0, 34.0, 56.0));
        assert_eq!("RGB( 0 , 0 , 255 );".parse::<Rgb>().unwrap(), rgb(0.0, 0.0, 255.0));
    }

    #[test]
    fn parse_rejects_decimals_and_out_of_range() {
        for bad in ["rgb(1.5, 0, 0)", "rgb(256, 0, 0)", "rgb(-1, 0, 0)", "rgb(1, 2)", "red"] {
            let err = bad.parse::<Rgb>().unwrap_err();
            assert_eq!(err.input(), bad);
        }
    }

    // -- Serde --

    #[test]
    fn json_round_trip() {
        let c = rgb(1.0, 2.5, 3.0);
        let json = serde_json::to_string(&c).unwrap();
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let r: Result<Rgb, _> = serde_json::from_str(r#"{"red":300,"green":0,"blue":0}"#);
        assert!(r.is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip_reproduces_channels(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
                let c = rgb(f64::from(r), f64::from(g), f64::from(b));
                let back = c.to_hex().to_rgb();
                prop_assert_eq!((back.red(), back.green(), back.blue()), (r, g, b));
            }

            #[test]
            fn hsl_components_stay_in_domain(
                r in 0.0_f64..=255.0,
                g in 0.0_f64..=255.0,
                b in 0.0_f64..=255.0,
            ) {
                let hsl = rgb(r, g, b).to_hsl();
                prop_assert!((0.0..360.0).contains(&hsl.hue()), "hue {}", hsl.hue());
                prop_assert!((0.0..=100.0 + 1e-9).contains(&hsl.saturation()));
                prop_assert!((0.0..=100.0).contains(&hsl.lightness()));
            }
        }
    }
}
