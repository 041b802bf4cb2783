//! Shared grammar for the per-model string parsers.
//!
//! Every model accepts the same shape: an optional keyword, optional
//! parentheses and semicolons, and a comma-separated list of components.
//! Matching is case-insensitive. What differs per model is the keyword, any
//! extra symbols to discard (degree and percent signs for HSL), the number of
//! components, and whether components must be bare integers.

use crate::error::ColorError;
use crate::model::Model;

/// Tokens removed from every input regardless of model.
const PUNCTUATION: [&str; 3] = ["(", ")", ";"];

/// Degree and percent signs, including the UTF-8 degree sign as it reads
/// after being decoded as Latin-1 (`Â°`, lowercased to `â°`).
pub(crate) const DEGREE_PERCENT: [&str; 3] = ["â°", "°", "%"];

/// How each component token is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// ASCII digits only: no sign, decimal point, or exponent.
    Integer,
    /// A finite decimal number with optional sign, fraction, and exponent.
    Number,
}

impl Token {
    fn read(self, text: &str) -> Option<f64> {
        let accepted = match self {
            Token::Integer => text.bytes().all(|b| b.is_ascii_digit()),
            Token::Number => text
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')),
        };
        if text.is_empty() || !accepted {
            return None;
        }
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Splits `input` into exactly `N` components after stripping `keyword`,
/// punctuation and `extra` symbols.
///
/// Fails with [`ColorError::InvalidString`] carrying the unmodified input.
pub(crate) fn components<const N: usize>(
    input: &str,
    model: Model,
    keyword: &str,
    extra: &[&str],
    token: Token,
) -> Result<[f64; N], ColorError> {
    let mut text = input.to_lowercase().replace(keyword, "");
    for symbol in PUNCTUATION.iter().chain(extra) {
        text = text.replace(symbol, "");
    }

    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ColorError::invalid_string(model, input));
    }

    let mut values = [0.0; N];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = token
            .read(part)
            .ok_or_else(|| ColorError::invalid_string(model, input))?;
    }
    Ok(values)
}

/// Re-labels a constructor's range failure as a parse failure of `input`.
pub(crate) fn reject(model: Model, input: &str) -> impl FnOnce(ColorError) -> ColorError + '_ {
    move |_| ColorError::invalid_string(model, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_keyword_and_parentheses() {
        let v: [f64; 3] =
            components("rgb(1, 2, 3);", Model::Rgb, "rgb", &[], Token::Integer).unwrap();
        assert_eq!(v, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let v: [f64; 3] =
            components("RGB(10,20,30)", Model::Rgb, "rgb", &[], Token::Integer).unwrap();
        assert_eq!(v, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn wrong_count_is_rejected() {
        let r = components::<3>("1, 2", Model::Rgb, "rgb", &[], Token::Integer);
        assert!(r.is_err());
        let r = components::<3>("1, 2, 3, 4", Model::Rgb, "rgb", &[], Token::Integer);
        assert!(r.is_err());
    }

    #[test]
    fn integer_token_rejects_decimals_and_signs() {
        for bad in ["1.5, 2, 3", "-1, 2, 3", "1e2, 2, 3", "+1, 2, 3", ", 2, 3"] {
            assert!(
                components::<3>(bad, Model::Rgb, "rgb", &[], Token::Integer).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn number_token_accepts_sign_fraction_exponent() {
        let v: [f64; 3] =
            components("-1.5, +2e1, .25", Model::CieLab, "cielab", &[], Token::Number).unwrap();
        assert_eq!(v, [-1.5, 20.0, 0.25]);
    }

    #[test]
    fn number_token_rejects_words() {
        for bad in ["inf, 1, 1", "nan, 1, 1", "1, abc, 1", "0x10, 1, 1"] {
            assert!(
                components::<3>(bad, Model::Xyz, "xyz", &[], Token::Number).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn degree_and_percent_symbols_are_stripped() {
        let v: [f64; 3] = components(
            "hsl(120°, 50%, 25%)",
            Model::Hsl,
            "hsl",
            &DEGREE_PERCENT,
            Token::Integer,
        )
        .unwrap();
        assert_eq!(v, [120.0, 50.0, 25.0]);
    }

    #[test]
    fn mangled_degree_sign_is_stripped() {
        let v: [f64; 3] = components(
            "hsl(120Â°, 50%, 25%)",
            Model::Hsl,
            "hsl",
            &DEGREE_PERCENT,
            Token::Integer,
        )
        .unwrap();
        assert_eq!(v, [120.0, 50.0, 25.0]);
    }

    #[test]
    fn error_carries_original_input() {
        let err =
            components::<3>("RGB(1, x, 3)", Model::Rgb, "rgb", &[], Token::Integer).unwrap_err();
        assert_eq!(err.input(), "RGB(1, x, 3)");
    }
}
