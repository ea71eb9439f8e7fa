//! Array and object interpolators.
//!
//! Children are built through registry dispatch, so nested numbers, strings,
//! colors and custom values all blend with whatever the registry picks for
//! them. Elements present on one side only are carried over unchanged.

use std::fmt;

use indexmap::IndexMap;

use crate::error::InterpolateError;
use crate::interpolator::{Interpolator, ValueInterpolator};
use crate::registry::{registry, InterpolatorRegistry};
use crate::value::{Value, ValueKind};
use crate::Result;

enum Slot {
    Frozen(Value),
    Animated(ValueInterpolator),
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Frozen(v) => f.debug_tuple("Frozen").field(v).finish(),
            Slot::Animated(_) => f.write_str("Animated"),
        }
    }
}

impl Slot {
    #[inline]
    fn at(&self, t: f64) -> Value {
        match self {
            Slot::Frozen(v) => v.clone(),
            Slot::Animated(i) => i.interpolate(t),
        }
    }
}

/// Element-wise interpolator over two arrays.
///
/// The output length is the longer of the two inputs; trailing elements that
/// exist on only one side are copied as-is.
#[derive(Debug)]
pub struct ArrayInterpolator {
    slots: Vec<Slot>,
}

impl ArrayInterpolator {
    pub fn with_registry(a: &[Value], b: &[Value], registry: &InterpolatorRegistry) -> Result<Self> {
        let shared = a.len().min(b.len());
        let mut slots = Vec::with_capacity(a.len().max(b.len()));
        for (x, y) in a.iter().zip(b) {
            slots.push(Slot::Animated(registry.interpolate(x, y)?));
        }
        let longer = if a.len() > b.len() { a } else { b };
        slots.extend(longer[shared..].iter().cloned().map(Slot::Frozen));
        Ok(Self { slots })
    }

    /// Build from two [`Value::Array`] endpoints using the process-wide registry.
    pub fn from_values(a: &Value, b: &Value) -> Result<Self> {
        let (a, b) = (expect_array(a)?, expect_array(b)?);
        Self::with_registry(a, b, &registry())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Interpolator<Value> for ArrayInterpolator {
    fn interpolate(&self, t: f64) -> Value {
        Value::Array(self.slots.iter().map(|s| s.at(t)).collect())
    }
}

/// Key-wise interpolator over two property bags.
///
/// Keys come out in the start object's order followed by keys that only the
/// end object has. Keys missing on either side hold that side's value for
/// every `t`.
#[derive(Debug)]
pub struct ObjectInterpolator {
    slots: IndexMap<String, Slot>,
}

impl ObjectInterpolator {
    pub fn with_registry(
        a: &IndexMap<String, Value>,
        b: &IndexMap<String, Value>,
        registry: &InterpolatorRegistry,
    ) -> Result<Self> {
        let mut slots = IndexMap::with_capacity(a.len() + b.len());
        for (key, x) in a {
            let slot = match b.get(key) {
                Some(y) => Slot::Animated(registry.interpolate(x, y)?),
                None => Slot::Frozen(x.clone()),
            };
            slots.insert(key.clone(), slot);
        }
        for (key, y) in b {
            if !a.contains_key(key) {
                slots.insert(key.clone(), Slot::Frozen(y.clone()));
            }
        }
        Ok(Self { slots })
    }

    /// Build from two [`Value::Object`] endpoints using the process-wide registry.
    pub fn from_values(a: &Value, b: &Value) -> Result<Self> {
        let (a, b) = (expect_object(a)?, expect_object(b)?);
        Self::with_registry(a, b, &registry())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

impl Interpolator<Value> for ObjectInterpolator {
    fn interpolate(&self, t: f64) -> Value {
        Value::Object(
            self.slots
                .iter()
                .map(|(k, s)| (k.clone(), s.at(t)))
                .collect(),
        )
    }
}

fn expect_array(v: &Value) -> Result<&[Value]> {
    v.as_array().ok_or(InterpolateError::ShapeMismatch {
        expected: ValueKind::Array,
        actual: v.kind(),
    })
}

fn expect_object(v: &Value) -> Result<&IndexMap<String, Value>> {
    v.as_object().ok_or(InterpolateError::ShapeMismatch {
        expected: ValueKind::Object,
        actual: v.kind(),
    })
}

/// Interpolate two arrays element-wise.
pub fn interpolate_array(a: &[Value], b: &[Value]) -> Result<ArrayInterpolator> {
    ArrayInterpolator::with_registry(a, b, &registry())
}

/// Interpolate two property bags key-wise.
pub fn interpolate_object(
    a: &IndexMap<String, Value>,
    b: &IndexMap<String, Value>,
) -> Result<ObjectInterpolator> {
    ObjectInterpolator::with_registry(a, b, &registry())
}
