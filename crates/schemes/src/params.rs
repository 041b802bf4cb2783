//! Helpers for extracting typed scheme parameters from a `serde_json::Value`.
//!
//! Each helper takes a JSON value, a key name, and a default. A missing key or
//! a value of the wrong JSON type yields the default. Only `param_color` can
//! fail: a color that is present but does not parse is an error rather than
//! a silent fallback.

use crate::error::SchemeError;
use serde_json::Value;
use tincture_core::Color;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// JSON integers are accepted and converted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only non-negative integers are accepted.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a color written either in any model's text form, e.g.
/// `"#FF8800"` or `"hsl(30, 100%, 50%)"`, or as a serialized [`Color`]
/// such as `{"cielab": {"lightness": 50.0, "a": 20.0, "b": -10.0}}`.
///
/// Returns `Ok(None)` if the key is missing or holds neither a string nor an
/// object. Text that does not parse fails with `SchemeError::Color`; an
/// object that does not deserialize fails with `SchemeError::InvalidParam`.
pub fn param_color(params: &Value, name: &'static str) -> Result<Option<Color>, SchemeError> {
    match params.get(name) {
        Some(Value::String(text)) => Ok(Some(Color::parse(text)?)),
        Some(value @ Value::Object(_)) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| SchemeError::InvalidParam {
                name,
                reason: e.to_string(),
            }),
        _ => Ok(None),
    }
}
