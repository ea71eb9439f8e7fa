//! Value: dynamically shaped interpolation endpoints.
//!
//! The variant set is closed so shape dispatch stays an exhaustive `match`.
//! Anything the built-in interpolators do not understand travels as
//! [`Value::Custom`] and is left to registered factories.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number as JsonNumber, Value as JsonValue};

use crate::color::{Color, Rgb};
use crate::error::InterpolateError;
use crate::transform::Transform;
use crate::Result;

/// Coarse shape of a [`Value`], used for dispatch and error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    Text,
    Color,
    Array,
    Object,
    Transform,
    Custom,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Color => "color",
            Self::Array => "array",
            Self::Object => "object",
            Self::Transform => "transform",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque payload for application-defined shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomValue {
    /// Application-chosen discriminator that factories match on.
    pub tag: String,
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    Number(f64),

    /// Text; numbers inside it interpolate
    Text(String),

    Color(Color),

    Array(Vec<Value>),

    /// Property bag; key order is preserved
    Object(IndexMap<String, Value>),

    /// Decomposed 2D affine transform
    Transform(Transform),

    Custom(CustomValue),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Color(_) => ValueKind::Color,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Transform(_) => ValueKind::Transform,
            Value::Custom(_) => ValueKind::Custom,
        }
    }

    /// Convenience constructors
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn custom(tag: impl Into<String>, data: JsonValue) -> Self {
        Value::Custom(CustomValue {
            tag: tag.into(),
            data,
        })
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Convert plain JSON into a value: numbers, strings, arrays and objects map
    /// directly, booleans become `1`/`0`. `null` has no interpolable shape.
    ///
    /// Colors and transforms are never inferred from string content; callers
    /// that mean a color must say so by building [`Value::Color`].
    pub fn from_json(json: JsonValue) -> Result<Self> {
        Ok(match json {
            JsonValue::Null => {
                return Err(InterpolateError::InvalidValue {
                    reason: "null has no interpolable shape".to_string(),
                })
            }
            JsonValue::Bool(b) => Value::Number(if b { 1.0 } else { 0.0 }),
            JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::from_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| Ok((k, Value::from_json(v)?)))
                    .collect::<Result<IndexMap<_, _>>>()?,
            ),
        })
    }

    /// Plain JSON form. Colors and transforms render as strings (`#rrggbb`,
    /// `translate(..)rotate(..)skewX(..)scale(..)`); non-finite numbers become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Number(n) => JsonNumber::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::Color(c) => JsonValue::String(c.to_string()),
            Value::Array(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<_, _>>(),
            ),
            Value::Transform(t) => JsonValue::String(t.to_string()),
            Value::Custom(c) => c.data.clone(),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Number(v as f64)
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}

impl From<Rgb> for Value {
    fn from(c: Rgb) -> Self {
        Value::Color(Color::Rgb(c))
    }
}

impl From<Transform> for Value {
    fn from(t: Transform) -> Self {
        Value::Transform(t)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}
