//! Hue-circle schemes: complement, analogous, split, equal and rectangle.
//!
//! Each rotates the base color's CIELCh hue while holding its lightness and
//! chroma.

use crate::params::{param_bool, param_f64, param_usize};
use crate::scheme::Scheme;
use serde_json::{json, Value};
use tincture_core::{Color, ColorModel};

/// Default number of wedges for [`Equal`] (a triad).
pub const DEFAULT_PARTS: usize = 3;

/// Largest accepted `parts` for [`Equal`]; larger values are clamped.
pub const MAX_PARTS: usize = 360;

/// Default short side for [`Rectangle`], in degrees.
pub const DEFAULT_SIDE_LENGTH: f64 = 60.0;

fn include_self_schema() -> Value {
    json!({
        "type": "boolean",
        "default": false,
        "description": "Include the base color in the palette"
    })
}

/// The single color opposite the base on the hue circle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complement;

impl Scheme for Complement {
    fn generate(&self, base: &Color) -> Vec<Color> {
        vec![base.complement()]
    }

    fn params(&self) -> Value {
        json!({})
    }

    fn param_schema(&self) -> Value {
        json!({})
    }
}

/// Neighbors 30 degrees either side of the base.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analogous {
    pub include_self: bool,
}

impl Analogous {
    pub fn from_json(params: &Value) -> Self {
        Self {
            include_self: param_bool(params, "include_self", false),
        }
    }
}

impl Scheme for Analogous {
    fn generate(&self, base: &Color) -> Vec<Color> {
        base.analogous(self.include_self)
    }

    fn params(&self) -> Value {
        json!({ "include_self": self.include_self })
    }

    fn param_schema(&self) -> Value {
        json!({ "include_self": include_self_schema() })
    }
}

/// Split complements 150 degrees either side of the base.
#[derive(Debug, Clone, Copy, Default)]
pub struct Split {
    pub include_self: bool,
}

impl Split {
    pub fn from_json(params: &Value) -> Self {
        Self {
            include_self: param_bool(params, "include_self", false),
        }
    }
}

impl Scheme for Split {
    fn generate(&self, base: &Color) -> Vec<Color> {
        base.split(self.include_self)
    }

    fn params(&self) -> Value {
        json!({ "include_self": self.include_self })
    }

    fn param_schema(&self) -> Value {
        json!({ "include_self": include_self_schema() })
    }
}

/// The hue circle divided into `parts` equal wedges.
#[derive(Debug, Clone, Copy)]
pub struct Equal {
    pub parts: usize,
    pub include_self: bool,
}

impl Default for Equal {
    fn default() -> Self {
        Self {
            parts: DEFAULT_PARTS,
            include_self: false,
        }
    }
}

impl Equal {
    pub fn from_json(params: &Value) -> Self {
        Self {
            parts: param_usize(params, "parts", DEFAULT_PARTS).min(MAX_PARTS),
            include_self: param_bool(params, "include_self", false),
        }
    }
}

impl Scheme for Equal {
    fn generate(&self, base: &Color) -> Vec<Color> {
        base.equal(self.parts, self.include_self)
    }

    fn params(&self) -> Value {
        json!({
            "parts": self.parts,
            "include_self": self.include_self,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "parts": {
                "type": "integer",
                "default": DEFAULT_PARTS,
                "min": 2,
                "max": MAX_PARTS,
                "description": "Number of equal hue wedges; values below 2 act as 2"
            },
            "include_self": include_self_schema()
        })
    }
}

/// Four corners of a rectangle inscribed in the hue circle.
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub side_length: f64,
    pub include_self: bool,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            include_self: false,
        }
    }
}

impl Rectangle {
    pub fn from_json(params: &Value) -> Self {
        Self {
            side_length: param_f64(params, "side_length", DEFAULT_SIDE_LENGTH),
            include_self: param_bool(params, "include_self", false),
        }
    }
}

impl Scheme for Rectangle {
    fn generate(&self, base: &Color) -> Vec<Color> {
        base.rectangle(self.side_length, self.include_self)
    }

    fn params(&self) -> Value {
        json!({
            "side_length": self.side_length,
            "include_self": self.include_self,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "side_length": {
                "type": "number",
                "default": DEFAULT_SIDE_LENGTH,
                "min": 0.0,
                "max": 180.0,
                "description": "Hue span of the rectangle's short side, in degrees"
            },
            "include_self": include_self_schema()
        })
    }
}
