//! Shape-based dispatch over [`Value`] endpoints.
//!
//! [`InterpolatorRegistry::interpolate`] first matches the built-in shapes
//! (number, text, color, array, object, transform). Pairs that no built-in
//! handles are offered to the registered [`InterpolatorFactory`] list in
//! registration order; the first factory that returns `Some` wins.
//!
//! A process-wide registry backs [`interpolate`], [`register`] and the
//! convenience constructors in [`composite`](crate::composite). Registering
//! is expected to happen during start-up, before any dispatch.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, trace, warn};
use once_cell::sync::Lazy;

use crate::color::{Color, HclInterpolator, HslInterpolator, LabInterpolator, RgbInterpolator};
use crate::composite::{ArrayInterpolator, ObjectInterpolator};
use crate::config::{ColorSpace, Config};
use crate::error::InterpolateError;
use crate::interpolator::{Interpolator, ValueInterpolator};
use crate::number::NumberInterpolator;
use crate::string::{format_number, StringInterpolator};
use crate::transform::TransformInterpolator;
use crate::value::Value;
use crate::zoom::{ZoomInterpolator, ZoomView};
use crate::Result;

/// Builds an interpolator for endpoint pairs it understands.
pub trait InterpolatorFactory: Send + Sync {
    /// Name used in logs and diagnostics
    fn name(&self) -> &str;

    /// Return `None` to decline the pair and let the next factory try.
    fn create(&self, a: &Value, b: &Value) -> Option<ValueInterpolator>;
}

struct FnFactory<F> {
    name: String,
    f: F,
}

impl<F> InterpolatorFactory for FnFactory<F>
where
    F: Fn(&Value, &Value) -> Option<ValueInterpolator> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn create(&self, a: &Value, b: &Value) -> Option<ValueInterpolator> {
        (self.f)(a, b)
    }
}

/// Wrap a closure as a named factory.
///
/// ```
/// use vizij_interpolate_core::{factory_fn, InterpolatorRegistry, Value, ValueInterpolator};
///
/// let mut reg = InterpolatorRegistry::new();
/// reg.register(factory_fn("hold", |a: &Value, b: &Value| {
///     match (a, b) {
///         (Value::Custom(_), Value::Custom(_)) => {
///             let (a, b) = (a.clone(), b.clone());
///             let i: ValueInterpolator =
///                 Box::new(move |t: f64| if t < 1.0 { a.clone() } else { b.clone() });
///             Some(i)
///         }
///         _ => None,
///     }
/// }));
/// assert_eq!(reg.names(), vec!["string", "hold"]);
/// ```
pub fn factory_fn<F>(name: impl Into<String>, f: F) -> impl InterpolatorFactory
where
    F: Fn(&Value, &Value) -> Option<ValueInterpolator> + Send + Sync,
{
    FnFactory {
        name: name.into(),
        f,
    }
}

/// Numeric-aware string matching for text endpoints.
///
/// Accepts two texts, or a text and a number (the number is formatted and
/// treated as text), so `"10px"` against `20` still blends.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringFactory;

impl StringFactory {
    fn as_text(v: &Value) -> Option<String> {
        match v {
            Value::Text(s) => Some(s.clone()),
            Value::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }
}

impl InterpolatorFactory for StringFactory {
    fn name(&self) -> &str {
        "string"
    }

    fn create(&self, a: &Value, b: &Value) -> Option<ValueInterpolator> {
        if !matches!(a, Value::Text(_)) && !matches!(b, Value::Text(_)) {
            return None;
        }
        let i = StringInterpolator::new(&Self::as_text(a)?, &Self::as_text(b)?);
        Some(Box::new(move |t: f64| Value::Text(i.interpolate(t))))
    }
}

/// Ordered, append-only list of factories plus dispatch configuration.
///
/// Cloning is cheap; factories are shared.
#[derive(Clone)]
pub struct InterpolatorRegistry {
    config: Config,
    factories: Vec<Arc<dyn InterpolatorFactory>>,
}

impl fmt::Debug for InterpolatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpolatorRegistry")
            .field("config", &self.config)
            .field("factories", &self.names())
            .finish()
    }
}

impl Default for InterpolatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpolatorRegistry {
    /// Registry with default [`Config`] and the built-in [`StringFactory`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            factories: vec![Arc::new(StringFactory)],
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Append a factory. Later factories are consulted after earlier ones.
    pub fn register(&mut self, factory: impl InterpolatorFactory + 'static) {
        self.factories.push(Arc::new(factory));
    }

    /// Number of registered factories (the built-in string factory included).
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Factory names in consultation order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    /// Build an interpolator for two dynamically shaped endpoints.
    pub fn interpolate(&self, a: &Value, b: &Value) -> Result<ValueInterpolator> {
        if let Some(i) = self.builtin(a, b)? {
            trace!("interpolate: built-in {} -> {}", a.kind(), b.kind());
            return Ok(i);
        }
        for factory in &self.factories {
            if let Some(i) = factory.create(a, b) {
                debug!(
                    "interpolate: factory {:?} accepted {} -> {}",
                    factory.name(),
                    a.kind(),
                    b.kind()
                );
                return Ok(i);
            }
        }
        Err(InterpolateError::NoInterpolatorFound {
            start: a.kind(),
            end: b.kind(),
        })
    }

    /// Smooth zoom using the configured `zoom_rho`.
    pub fn zoom(&self, a: ZoomView, b: ZoomView) -> ZoomInterpolator {
        ZoomInterpolator::with_rho(a, b, self.config.zoom_rho)
    }

    fn builtin(&self, a: &Value, b: &Value) -> Result<Option<ValueInterpolator>> {
        let i: ValueInterpolator = match (a, b) {
            (Value::Number(x), Value::Number(y)) => {
                let n = NumberInterpolator::new(*x, *y);
                Box::new(move |t: f64| Value::Number(n.interpolate(t)))
            }
            (Value::Text(x), Value::Text(y)) => {
                let s = StringInterpolator::new(x, y);
                Box::new(move |t: f64| Value::Text(s.interpolate(t)))
            }
            (Value::Color(x), Value::Color(y)) => self.color(*x, *y),
            (Value::Array(x), Value::Array(y)) => {
                let arr = ArrayInterpolator::with_registry(x, y, self)?;
                Box::new(arr)
            }
            (Value::Object(x), Value::Object(y)) => {
                let obj = ObjectInterpolator::with_registry(x, y, self)?;
                Box::new(obj)
            }
            (Value::Transform(x), Value::Transform(y)) => {
                let tr = TransformInterpolator::new(*x, *y);
                Box::new(move |t: f64| Value::Transform(tr.interpolate(t)))
            }
            _ => return Ok(None),
        };
        Ok(Some(i))
    }

    fn color(&self, a: Color, b: Color) -> ValueInterpolator {
        let path = self.config.hue_path;
        match self.config.color_space {
            ColorSpace::Rgb => {
                let i = RgbInterpolator::new(a.to_rgb(), b.to_rgb());
                Box::new(move |t: f64| Value::Color(Color::Rgb(i.interpolate(t))))
            }
            ColorSpace::Hsl => {
                let i = HslInterpolator::with_hue_path(a.to_hsl(), b.to_hsl(), path);
                Box::new(move |t: f64| Value::Color(Color::Hsl(i.interpolate(t))))
            }
            ColorSpace::Lab => {
                let i = LabInterpolator::new(a.to_lab(), b.to_lab());
                Box::new(move |t: f64| Value::Color(Color::Lab(i.interpolate(t))))
            }
            ColorSpace::Hcl => {
                let i = HclInterpolator::with_hue_path(a.to_hcl(), b.to_hcl(), path);
                Box::new(move |t: f64| Value::Color(Color::Hcl(i.interpolate(t))))
            }
        }
    }
}

static GLOBAL: Lazy<RwLock<InterpolatorRegistry>> =
    Lazy::new(|| RwLock::new(InterpolatorRegistry::new()));

static DISPATCHED: AtomicBool = AtomicBool::new(false);

/// Snapshot of the process-wide registry.
///
/// The snapshot does not see factories registered afterwards. Taking one
/// counts as dispatch for the late-registration warning.
pub fn registry() -> InterpolatorRegistry {
    DISPATCHED.store(true, Ordering::Relaxed);
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Append a factory to the process-wide registry.
pub fn register(factory: impl InterpolatorFactory + 'static) {
    if DISPATCHED.load(Ordering::Relaxed) {
        warn!(
            "register: factory {:?} added after dispatch started; earlier interpolators are unaffected",
            factory.name()
        );
    }
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(factory);
}

/// Dispatch through the process-wide registry.
///
/// The lock is held only long enough to copy the factory list, so factories
/// may themselves call back into the registry.
pub fn interpolate(a: &Value, b: &Value) -> Result<ValueInterpolator> {
    registry().interpolate(a, b)
}
