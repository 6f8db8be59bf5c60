//! Scalar values carried by elements and attributes.

use std::fmt;

use serde::Serialize;

/// A stringifiable value: the text content of an element or the value of an
/// attribute.
///
/// Scalars represent the *data* a tag carries, not markup. They render
/// through [`Display`](fmt::Display) with no quoting and no escaping.
///
/// # Examples
///
/// ```
/// use sprig_tree::Scalar;
///
/// assert_eq!(Scalar::from(594).to_string(), "594");
/// assert_eq!(Scalar::from("classified").to_string(), "classified");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i8> for Scalar {
    fn from(value: i8) -> Self {
        Self::Int(value.into())
    }
}

impl From<i16> for Scalar {
    fn from(value: i16) -> Self {
        Self::Int(value.into())
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u8> for Scalar {
    fn from(value: u8) -> Self {
        Self::Int(value.into())
    }
}

impl From<u16> for Scalar {
    fn from(value: u16) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
