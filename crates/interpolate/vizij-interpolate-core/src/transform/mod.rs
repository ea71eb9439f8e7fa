//! 2D affine transforms in decomposed form.
//!
//! A [`Transform`] is the product `translate · rotate · skewX · scale`.
//! Decomposing a matrix into those four factors lets two transforms blend
//! component-wise instead of matrix-entry-wise, which keeps rotations rigid
//! mid-way.

mod interp;
pub mod parse;

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Vector2};
use serde::{Deserialize, Serialize};

use crate::error::InterpolateError;
use crate::string::format_number;
use crate::value::{Value, ValueKind};
use crate::Result;

pub use interp::{interpolate_transform, TransformInterpolator};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate: [f64; 2],
    /// Degrees
    pub rotate: f64,
    /// Degrees
    pub skew_x: f64,
    pub scale: [f64; 2],
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            translate: [0.0, 0.0],
            rotate: 0.0,
            skew_x: 0.0,
            scale: [1.0, 1.0],
        }
    }

    /// Parse an SVG transform list and decompose the combined matrix.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self::from_matrix(&parse::parse_matrix(input)?))
    }

    /// Decompose an affine matrix (the bottom row is ignored).
    ///
    /// A negative determinant is folded into `scale[0]` and `rotate`.
    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        let mut r0 = Vector2::new(m[(0, 0)], m[(1, 0)]);
        let mut r1 = Vector2::new(m[(0, 1)], m[(1, 1)]);

        let mut kx = normalize(&mut r0);
        let mut kz = r0.dot(&r1);
        r1 -= r0 * kz;
        let ky = normalize(&mut r1);

        if r0.x * r1.y < r1.x * r0.y {
            r0 = -r0;
            kx = -kx;
            kz = -kz;
        }

        let rotate = if kx != 0.0 {
            r0.y.atan2(r0.x)
        } else {
            (-r1.x).atan2(r1.y)
        };
        let skew_x = if ky != 0.0 {
            kz.atan2(ky).to_degrees()
        } else {
            0.0
        };

        Self {
            translate: [m[(0, 2)], m[(1, 2)]],
            rotate: rotate.to_degrees(),
            skew_x,
            scale: [kx, ky],
        }
    }

    /// Recompose into an affine matrix.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        translation(self.translate[0], self.translate[1])
            * rotation(self.rotate)
            * skew_x(self.skew_x)
            * scaling(self.scale[0], self.scale[1])
    }
}

fn normalize(v: &mut Vector2<f64>) -> f64 {
    let k = v.norm();
    if k != 0.0 {
        *v /= k;
    }
    k
}

pub(crate) fn translation(tx: f64, ty: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0)
}

pub(crate) fn rotation(deg: f64) -> Matrix3<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
}

pub(crate) fn skew_x(deg: f64) -> Matrix3<f64> {
    Matrix3::new(1.0, deg.to_radians().tan(), 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
}

pub(crate) fn scaling(kx: f64, ky: f64) -> Matrix3<f64> {
    Matrix3::new(kx, 0.0, 0.0, 0.0, ky, 0.0, 0.0, 0.0, 1.0)
}

impl FromStr for Transform {
    type Err = InterpolateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({},{})rotate({})skewX({})scale({},{})",
            format_number(self.translate[0]),
            format_number(self.translate[1]),
            format_number(self.rotate),
            format_number(self.skew_x),
            format_number(self.scale[0]),
            format_number(self.scale[1]),
        )
    }
}

/// Endpoint accepted by [`interpolate_transform`]: an SVG transform list or a
/// decomposed [`Transform`].
pub trait IntoTransform {
    fn into_transform(self) -> Result<Transform>;
}

impl IntoTransform for Transform {
    fn into_transform(self) -> Result<Transform> {
        Ok(self)
    }
}

impl IntoTransform for &str {
    fn into_transform(self) -> Result<Transform> {
        Transform::parse(self)
    }
}

impl IntoTransform for String {
    fn into_transform(self) -> Result<Transform> {
        Transform::parse(&self)
    }
}

impl IntoTransform for &Value {
    fn into_transform(self) -> Result<Transform> {
        match self {
            Value::Transform(t) => Ok(*t),
            Value::Text(s) => Transform::parse(s),
            other => Err(InterpolateError::ShapeMismatch {
                expected: ValueKind::Transform,
                actual: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matrix_close(a: &Matrix3<f64>, b: &Matrix3<f64>) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9, "{a} != {b}");
        }
    }

    #[test]
    fn identity_display() {
        assert_eq!(
            Transform::identity().to_string(),
            "translate(0,0)rotate(0)skewX(0)scale(1,1)"
        );
    }

    #[test]
    fn decompose_translate_scale() {
        let t: Transform = "translate(10, 20) scale(2)".parse().unwrap();
        assert_eq!(t.translate, [10.0, 20.0]);
        assert_eq!(t.rotate, 0.0);
        assert_eq!(t.skew_x, 0.0);
        assert_eq!(t.scale, [2.0, 2.0]);
    }

    #[test]
    fn recompose_matches_parsed_matrix() {
        for input in [
            "rotate(40)",
            "translate(5,-3) rotate(-120) skewX(20) scale(2,0.5)",
            "matrix(1,2,3,4,5,6)",
            "scale(-1,1)",
            "skewY(30) rotate(10 4 4)",
        ] {
            let m = parse::parse_matrix(input).unwrap();
            let t = Transform::from_matrix(&m);
            assert_matrix_close(&t.to_matrix(), &m);
        }
    }

    #[test]
    fn negative_determinant_folds_into_scale_x() {
        let t = Transform::parse("scale(-1,1)").unwrap();
        assert_eq!(t.scale, [-1.0, 1.0]);
    }

    #[test]
    fn value_endpoint_shapes() {
        let v = Value::text("rotate(30)");
        assert!((v.into_transform().unwrap().rotate - 30.0).abs() < 1e-9);
        let err = (&Value::Number(1.0)).into_transform().unwrap_err();
        assert_eq!(err.category(), "validation");
    }
}
