//! Non-rotational schemes: RGB gradients, the HSV sweetspot palette, and the
//! single-color websafe and greyscale filters.

use crate::error::SchemeError;
use crate::params::{param_bool, param_color, param_usize};
use crate::scheme::Scheme;
use serde_json::{json, Value};
use tincture_core::{Color, ColorModel};

/// Default gradient length for [`Range`], counting both endpoints.
pub const DEFAULT_STEPS: usize = 5;

/// Largest accepted `steps` for [`Range`]; larger values are clamped.
pub const MAX_STEPS: usize = 1024;

/// An RGB gradient from the base color towards a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub to: Color,
    pub steps: usize,
    pub include_self: bool,
}

impl Range {
    /// Reads `to` (required color text or serialized color), `steps` and
    /// `include_self`.
    ///
    /// Returns `SchemeError::MissingParam` if `to` is absent, and
    /// `SchemeError::Color` or `SchemeError::InvalidParam` if it is invalid.
    pub fn from_json(params: &Value) -> Result<Self, SchemeError> {
        let to = param_color(params, "to")?.ok_or(SchemeError::MissingParam("to"))?;
        Ok(Self {
            to,
            steps: param_usize(params, "steps", DEFAULT_STEPS).min(MAX_STEPS),
            include_self: param_bool(params, "include_self", false),
        })
    }
}

impl Scheme for Range {
    fn generate(&self, base: &Color) -> Vec<Color> {
        base.range(&self.to, self.steps, self.include_self)
    }

    fn params(&self) -> Value {
        json!({
            "to": self.to,
            "steps": self.steps,
            "include_self": self.include_self,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "to": {
                "type": "color",
                "description":
                    "Gradient end color: text in any model's syntax, e.g. \"#FF8800\", \
                     or a serialized color"
            },
            "steps": {
                "type": "integer",
                "default": DEFAULT_STEPS,
                "min": 0,
                "max": MAX_STEPS,
                "description": "Gradient length including both ends; steps - 2 colors lie between"
            },
            "include_self": {
                "type": "boolean",
                "default": false,
                "description": "Include the base and target colors at the ends"
            }
        })
    }
}

/// The five-color HSV sweetspot derivation around the base.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sweetspot {
    pub include_self: bool,
}

impl Sweetspot {
    pub fn from_json(params: &Value) -> Self {
        Self {
            include_self: param_bool(params, "include_self", false),
        }
    }
}

impl Scheme for Sweetspot {
    fn generate(&self, base: &Color) -> Vec<Color> {
        base.sweetspot(self.include_self)
    }

    fn params(&self) -> Value {
        json!({ "include_self": self.include_self })
    }

    fn param_schema(&self) -> Value {
        json!({
            "include_self": {
                "type": "boolean",
                "default": false,
                "description": "Include the base color in the palette"
            }
        })
    }
}

/// The nearest of the 216 websafe colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Websafe;

impl Scheme for Websafe {
    fn generate(&self, base: &Color) -> Vec<Color> {
        vec![base.websafe()]
    }

    fn params(&self) -> Value {
        json!({})
    }

    fn param_schema(&self) -> Value {
        json!({})
    }
}

/// The luma grey of the base.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greyscale;

impl Scheme for Greyscale {
    fn generate(&self, base: &Color) -> Vec<Color> {
        vec![base.greyscale()]
    }

    fn params(&self) -> Value {
        json!({})
    }

    fn param_schema(&self) -> Value {
        json!({})
    }
}
