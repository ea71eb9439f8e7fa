//! The [`Interpolator`] trait and boxed aliases.

use crate::value::Value;

/// A pure function from a progress value to a blended value.
///
/// Implementations are immutable once built and may be evaluated any number
/// of times, from any thread, with any `t` (values outside `[0, 1]`
/// extrapolate). Closures `Fn(f64) -> T` are interpolators too.
pub trait Interpolator<T>: Send + Sync {
    fn interpolate(&self, t: f64) -> T;

    /// Evaluate `n` evenly spaced samples over `[0, 1]`.
    ///
    /// `n == 1` yields only the start value; `n == 0` yields nothing.
    fn samples(&self, n: usize) -> Vec<T> {
        match n {
            0 => Vec::new(),
            1 => vec![self.interpolate(0.0)],
            _ => {
                let last = (n - 1) as f64;
                (0..n).map(|i| self.interpolate(i as f64 / last)).collect()
            }
        }
    }
}

impl<T, F> Interpolator<T> for F
where
    F: Fn(f64) -> T + Send + Sync,
{
    #[inline]
    fn interpolate(&self, t: f64) -> T {
        self(t)
    }
}

pub type BoxedInterpolator<T> = Box<dyn Interpolator<T>>;

/// Interpolator over dynamically shaped values, as produced by registry dispatch.
pub type ValueInterpolator = BoxedInterpolator<Value>;
