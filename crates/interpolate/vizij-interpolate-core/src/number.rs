//! Numeric and rounding interpolators.
//!
//! Every numeric width goes through the same `f64` formula; [`RoundTarget`]
//! is the cast policy that turns the blended value back into an integer type.

use std::marker::PhantomData;

use crate::interpolator::Interpolator;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round to nearest with ties toward +∞ (`2.5 -> 3`, `-2.5 -> -2`).
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Primitive numbers that widen to `f64`.
pub trait Numeric: Copy + Send + Sync + 'static {
    fn to_f64(self) -> f64;
}

/// Output policy for [`RoundInterpolator`]: how a rounded `f64` becomes `Self`.
///
/// Results outside the target range are unspecified; the current casts
/// saturate at the type bounds.
pub trait RoundTarget: Numeric {
    fn from_rounded(v: f64) -> Self;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_round_target {
    ($($t:ty),*) => {
        $(
            impl RoundTarget for $t {
                #[inline]
                fn from_rounded(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_numeric!(u8, u16, u32, u64, i8, i16, i32, i64, usize, isize, f32, f64);
impl_round_target!(u8, u16, u32, u64, i8, i16, i32, i64, usize, isize);

impl Numeric for char {
    #[inline]
    fn to_f64(self) -> f64 {
        u32::from(self) as f64
    }
}

impl RoundTarget for char {
    #[inline]
    fn from_rounded(v: f64) -> Self {
        char::from_u32(v as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// `a + t * (b - a)` over `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberInterpolator {
    a: f64,
    b: f64,
}

impl NumberInterpolator {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn start(&self) -> f64 {
        self.a
    }

    pub fn end(&self) -> f64 {
        self.b
    }
}

impl Interpolator<f64> for NumberInterpolator {
    #[inline]
    fn interpolate(&self, t: f64) -> f64 {
        lerp(self.a, self.b, t)
    }
}

/// Interpolate between two numbers of any primitive width, yielding `f64`.
pub fn interpolate_number<N: Numeric>(a: N, b: N) -> NumberInterpolator {
    NumberInterpolator::new(a.to_f64(), b.to_f64())
}

/// Numeric blend rounded half-up and cast to `N`.
#[derive(Debug, Clone, Copy)]
pub struct RoundInterpolator<N> {
    inner: NumberInterpolator,
    _out: PhantomData<fn() -> N>,
}

impl<N: RoundTarget> RoundInterpolator<N> {
    /// Round between floating endpoints, producing values of type `N`.
    pub fn from_f64(a: f64, b: f64) -> Self {
        Self {
            inner: NumberInterpolator::new(a, b),
            _out: PhantomData,
        }
    }
}

impl<N: RoundTarget> Interpolator<N> for RoundInterpolator<N> {
    #[inline]
    fn interpolate(&self, t: f64) -> N {
        N::from_rounded(round_half_up(self.inner.interpolate(t)))
    }
}

/// Interpolate between two integers (or chars), rounding to the same type.
pub fn interpolate_round<N: RoundTarget>(a: N, b: N) -> RoundInterpolator<N> {
    RoundInterpolator::from_f64(a.to_f64(), b.to_f64())
}
