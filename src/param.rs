//! Loosely-typed request parameters.
//!
//! Query strings and JSON bodies both deliver values a handler usually wants
//! as a number, but the wire gives no such guarantee. [`Param`] names the
//! three shapes a lookup can take, and [`Param::to_number`] collapses them
//! into an IEEE-754 double the way dynamic web stacks do: anything that does
//! not parse is `NaN`, and the arithmetic carries on.
//!
//! ```rust
//! use entre::Param;
//!
//! assert_eq!(Param::Text("3".into()).to_number().as_f64(), 3.0);
//! assert!(Param::Text("banana".into()).to_number().is_nan());
//! assert!(Param::Missing.to_number().is_nan());
//! ```

use std::ops::Add;

use serde::{Serialize, Serializer};

/// One looked-up request parameter.
///
/// Query parameters are always [`Param::Text`] when present. JSON body
/// parameters keep the distinction the document made: a JSON string is
/// `Text`, a JSON number is `Number`, and anything else (absent key, `null`,
/// arrays, objects, booleans) is [`Param::Missing`].
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    Text(String),
    Number(f64),
    Missing,
}

impl Param {
    /// Coerces the parameter to a double.
    ///
    /// `Text` is trimmed and parsed; parse failures, including the empty
    /// string, yield `NaN`. `Missing` is always `NaN`.
    pub fn to_number(&self) -> Number {
        match self {
            Param::Text(s)   => Number(s.trim().parse().unwrap_or(f64::NAN)),
            Param::Number(n) => Number(*n),
            Param::Missing   => Number(f64::NAN),
        }
    }
}

/// An IEEE-754 double with a defined JSON encoding.
///
/// `NaN` and the infinities have no JSON literal, so [`Number`] encodes
/// every non-finite value as `null` instead of failing the serialization.
/// Finite integral values within `±2^53` encode as JSON integers, everything
/// else as a JSON float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(f64);

impl Number {
    /// Returns the raw double.
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// `true` if the value is `NaN`.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self(n)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        Number(self.0 + rhs.0)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        const SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

        if !self.0.is_finite() {
            serializer.serialize_unit()
        } else if self.0.fract() == 0.0 && self.0.abs() <= SAFE_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_parses_like_a_form_field() {
        assert_eq!(Param::Text("3".into()).to_number(), Number(3.0));
        assert_eq!(Param::Text(" 4.5 ".into()).to_number(), Number(4.5));
        assert_eq!(Param::Text("-2e3".into()).to_number(), Number(-2000.0));
    }

    #[test]
    fn junk_and_absence_coerce_to_nan() {
        assert!(Param::Text("banana".into()).to_number().is_nan());
        assert!(Param::Text("".into()).to_number().is_nan());
        assert!(Param::Text("1,5".into()).to_number().is_nan());
        assert!(Param::Missing.to_number().is_nan());
    }

    #[test]
    fn nan_is_sticky_through_addition() {
        let sum = Param::Missing.to_number() + Param::Text("7".into()).to_number();
        assert!(sum.is_nan());
    }

    #[test]
    fn integral_values_encode_without_a_fraction() {
        assert_eq!(serde_json::to_string(&Number::from(7.0)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Number::from(-0.0)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Number::from(2.5)).unwrap(), "2.5");
    }

    #[test]
    fn non_finite_values_encode_as_null() {
        assert_eq!(serde_json::to_string(&Number::from(f64::NAN)).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Number::from(f64::INFINITY)).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Number::from(f64::NEG_INFINITY)).unwrap(), "null");
    }
}
