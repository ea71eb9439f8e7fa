//! Smooth pan-and-zoom between two views.
//!
//! Implements "Smooth and efficient zooming and panning" (van Wijk & Nuij,
//! 2003). A view is `[center_x, center_y, width]`, where `width` is the
//! visible extent. The path zooms out, pans, and zooms back in so that the
//! perceived velocity stays constant; `rho` controls how far it zooms out.

use std::f64::consts::SQRT_2;

use crate::interpolator::Interpolator;

/// `[center_x, center_y, width]`
pub type ZoomView = [f64; 3];

const EPSILON2: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Path {
    /// Pure exponential scale about a fixed center
    Scale,
    Smooth { r0: f64, d1: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomInterpolator {
    start: ZoomView,
    dx: f64,
    dy: f64,
    rho: f64,
    /// Path length in `rho`-scaled units
    s: f64,
    path: Path,
}

impl ZoomInterpolator {
    /// Zoom with the default curvature `rho = √2`.
    pub fn new(a: ZoomView, b: ZoomView) -> Self {
        Self::with_rho(a, b, SQRT_2)
    }

    pub fn with_rho(a: ZoomView, b: ZoomView, rho: f64) -> Self {
        let [ux0, uy0, w0] = a;
        let [ux1, uy1, w1] = b;
        let (dx, dy) = (ux1 - ux0, uy1 - uy0);
        let d2 = dx * dx + dy * dy;
        let rho2 = rho * rho;
        let rho4 = rho2 * rho2;

        if d2 < EPSILON2 {
            return Self {
                start: a,
                dx,
                dy,
                rho,
                s: (w1 / w0).ln() / rho,
                path: Path::Scale,
            };
        }

        let d1 = d2.sqrt();
        let b0 = (w1 * w1 - w0 * w0 + rho4 * d2) / (2.0 * w0 * rho2 * d1);
        let b1 = (w1 * w1 - w0 * w0 - rho4 * d2) / (2.0 * w1 * rho2 * d1);
        let r0 = ((b0 * b0 + 1.0).sqrt() - b0).ln();
        let r1 = ((b1 * b1 + 1.0).sqrt() - b1).ln();

        Self {
            start: a,
            dx,
            dy,
            rho,
            s: (r1 - r0) / rho,
            path: Path::Smooth { r0, d1 },
        }
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Recommended transition length in milliseconds, proportional to the
    /// path length.
    pub fn duration(&self) -> f64 {
        self.s * 1000.0 * self.rho / SQRT_2
    }
}

impl Interpolator<ZoomView> for ZoomInterpolator {
    fn interpolate(&self, t: f64) -> ZoomView {
        let [ux0, uy0, w0] = self.start;
        let s = t * self.s;
        match self.path {
            Path::Scale => [
                ux0 + t * self.dx,
                uy0 + t * self.dy,
                w0 * (self.rho * s).exp(),
            ],
            Path::Smooth { r0, d1 } => {
                let rho2 = self.rho * self.rho;
                let cosh_r0 = r0.cosh();
                let u = w0 / (rho2 * d1) * (cosh_r0 * (self.rho * s + r0).tanh() - r0.sinh());
                [
                    ux0 + u * self.dx,
                    uy0 + u * self.dy,
                    w0 * cosh_r0 / (self.rho * s + r0).cosh(),
                ]
            }
        }
    }
}

/// Interpolate between two views along the smooth zoom path.
pub fn interpolate_zoom(a: ZoomView, b: ZoomView) -> ZoomInterpolator {
    ZoomInterpolator::new(a, b)
}
