use crate::interpolator::Interpolator;
use crate::number::lerp;
use crate::Result;

use super::{IntoTransform, Transform};

/// Component-wise blend of two decomposed transforms.
///
/// Rotation and skew take the shorter way around when the endpoints differ
/// by more than 180°, so the end value may come out offset by 360° from the
/// parsed end transform. The matrix is the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformInterpolator {
    a: Transform,
    b: Transform,
}

/// Reduce an angle in degrees into (-180, 180].
fn wrap_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

fn shortest(a: f64, b: f64) -> (f64, f64) {
    let (a, b) = (wrap_degrees(a), wrap_degrees(b));
    if a - b > 180.0 {
        (a, b + 360.0)
    } else if b - a > 180.0 {
        (a + 360.0, b)
    } else {
        (a, b)
    }
}

impl TransformInterpolator {
    pub fn new(mut a: Transform, mut b: Transform) -> Self {
        (a.rotate, b.rotate) = shortest(a.rotate, b.rotate);
        (a.skew_x, b.skew_x) = shortest(a.skew_x, b.skew_x);
        Self { a, b }
    }
}

impl Interpolator<Transform> for TransformInterpolator {
    fn interpolate(&self, t: f64) -> Transform {
        let (a, b) = (&self.a, &self.b);
        Transform {
            translate: [
                lerp(a.translate[0], b.translate[0], t),
                lerp(a.translate[1], b.translate[1], t),
            ],
            rotate: lerp(a.rotate, b.rotate, t),
            skew_x: lerp(a.skew_x, b.skew_x, t),
            scale: [
                lerp(a.scale[0], b.scale[0], t),
                lerp(a.scale[1], b.scale[1], t),
            ],
        }
    }
}

/// Interpolate two transforms given as SVG transform lists or [`Transform`]s.
pub fn interpolate_transform(
    a: impl IntoTransform,
    b: impl IntoTransform,
) -> Result<TransformInterpolator> {
    Ok(TransformInterpolator::new(
        a.into_transform()?,
        b.into_transform()?,
    ))
}
