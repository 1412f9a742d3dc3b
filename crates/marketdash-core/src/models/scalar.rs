use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A loosely typed scalar field (`500`, `"500"`, `true`).
///
/// Displays the way a browser stringifies it, so `500.0` shows as `500`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Scalar {
    /// Falsy values are `false`, `0` and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Scalar::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Bool(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    return write!(f, "{}", n);
                }
                match n.as_f64() {
                    Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", v as i64),
                    Some(v) => write!(f, "{}", v),
                    None => write!(f, "{}", n),
                }
            }
        }
    }
}

/// Truthy scalar, if any.
pub(crate) fn truthy(value: &Option<Scalar>) -> Option<&Scalar> {
    value.as_ref().filter(|s| s.is_truthy())
}
