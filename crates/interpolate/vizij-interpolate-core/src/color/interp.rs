use crate::config::HuePath;
use crate::interpolator::Interpolator;
use crate::number::lerp;
use crate::Result;

use super::{Hcl, Hsl, IntoColor, Lab, Rgb};

/// Per-channel sRGB blend, rounded and clamped to `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbInterpolator {
    a: [f64; 3],
    b: [f64; 3],
}

impl RgbInterpolator {
    pub fn new(a: Rgb, b: Rgb) -> Self {
        let ch = |c: Rgb| [f64::from(c.r), f64::from(c.g), f64::from(c.b)];
        Self { a: ch(a), b: ch(b) }
    }
}

impl Interpolator<Rgb> for RgbInterpolator {
    fn interpolate(&self, t: f64) -> Rgb {
        Rgb::from_f64(
            lerp(self.a[0], self.b[0], t),
            lerp(self.a[1], self.b[1], t),
            lerp(self.a[2], self.b[2], t),
        )
    }
}

/// Start value and delta for a channel that may be undefined (`NaN`) on one side.
fn span(a: f64, b: f64) -> (f64, f64) {
    let d = b - a;
    if d.is_nan() {
        (if a.is_nan() { b } else { a }, 0.0)
    } else {
        (a, d)
    }
}

/// Like [`span`], for hues in degrees, honoring the configured path.
fn hue_span(a: f64, b: f64, path: HuePath) -> (f64, f64) {
    let norm = |h: f64| if h.is_nan() { h } else { h.rem_euclid(360.0) };
    let (start, mut d) = span(norm(a), norm(b));
    if path == HuePath::Shortest {
        if d > 180.0 {
            d -= 360.0;
        } else if d < -180.0 {
            d += 360.0;
        }
    }
    (start, d)
}

#[inline]
fn hue_at(start: f64, d: f64, t: f64) -> f64 {
    let h = start + d * t;
    if h.is_nan() {
        h
    } else {
        h.rem_euclid(360.0)
    }
}

/// HSL blend. Hue follows the configured [`HuePath`] and is reported in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslInterpolator {
    h: (f64, f64),
    s: (f64, f64),
    l: (f64, f64),
}

impl HslInterpolator {
    pub fn new(a: Hsl, b: Hsl) -> Self {
        Self::with_hue_path(a, b, HuePath::default())
    }

    pub fn with_hue_path(a: Hsl, b: Hsl, path: HuePath) -> Self {
        Self {
            h: hue_span(a.h, b.h, path),
            s: span(a.s, b.s),
            l: (a.l, b.l - a.l),
        }
    }
}

impl Interpolator<Hsl> for HslInterpolator {
    fn interpolate(&self, t: f64) -> Hsl {
        Hsl::new(
            hue_at(self.h.0, self.h.1, t),
            self.s.0 + self.s.1 * t,
            self.l.0 + self.l.1 * t,
        )
    }
}

/// Per-channel CIE Lab blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabInterpolator {
    a: Lab,
    b: Lab,
}

impl LabInterpolator {
    pub fn new(a: Lab, b: Lab) -> Self {
        Self { a, b }
    }
}

impl Interpolator<Lab> for LabInterpolator {
    fn interpolate(&self, t: f64) -> Lab {
        Lab::new(
            lerp(self.a.l, self.b.l, t),
            lerp(self.a.a, self.b.a, t),
            lerp(self.a.b, self.b.b, t),
        )
    }
}

/// HCL blend; hue and chroma behave like HSL hue and saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HclInterpolator {
    h: (f64, f64),
    c: (f64, f64),
    l: (f64, f64),
}

impl HclInterpolator {
    pub fn new(a: Hcl, b: Hcl) -> Self {
        Self::with_hue_path(a, b, HuePath::default())
    }

    pub fn with_hue_path(a: Hcl, b: Hcl, path: HuePath) -> Self {
        Self {
            h: hue_span(a.h, b.h, path),
            c: span(a.c, b.c),
            l: (a.l, b.l - a.l),
        }
    }
}

impl Interpolator<Hcl> for HclInterpolator {
    fn interpolate(&self, t: f64) -> Hcl {
        Hcl::new(
            hue_at(self.h.0, self.h.1, t),
            self.c.0 + self.c.1 * t,
            self.l.0 + self.l.1 * t,
        )
    }
}

/// Interpolate two colors in sRGB. Strings are parsed up front.
pub fn interpolate_rgb(a: impl IntoColor, b: impl IntoColor) -> Result<RgbInterpolator> {
    Ok(RgbInterpolator::new(
        a.into_color()?.to_rgb(),
        b.into_color()?.to_rgb(),
    ))
}

/// Interpolate two colors in HSL along the shorter hue arc.
pub fn interpolate_hsl(a: impl IntoColor, b: impl IntoColor) -> Result<HslInterpolator> {
    Ok(HslInterpolator::new(
        a.into_color()?.to_hsl(),
        b.into_color()?.to_hsl(),
    ))
}

/// Interpolate two colors in CIE Lab.
pub fn interpolate_lab(a: impl IntoColor, b: impl IntoColor) -> Result<LabInterpolator> {
    Ok(LabInterpolator::new(
        a.into_color()?.to_lab(),
        b.into_color()?.to_lab(),
    ))
}

/// Interpolate two colors in HCL along the shorter hue arc.
pub fn interpolate_hcl(a: impl IntoColor, b: impl IntoColor) -> Result<HclInterpolator> {
    Ok(HclInterpolator::new(
        a.into_color()?.to_hcl(),
        b.into_color()?.to_hcl(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InterpolateError;

    #[test]
    fn rgb_endpoints_from_strings() {
        let i = interpolate_rgb("#ff0000", "#0000ff").unwrap();
        assert_eq!(i.interpolate(0.0), Rgb::new(255, 0, 0));
        assert_eq!(i.interpolate(1.0), Rgb::new(0, 0, 255));
        assert_eq!(i.interpolate(0.5), Rgb::new(128, 0, 128));
    }

    #[test]
    fn rgb_clamps_when_extrapolating() {
        let i = interpolate_rgb(Rgb::new(100, 0, 0), Rgb::new(200, 0, 0)).unwrap();
        assert_eq!(i.interpolate(2.0).r, 255);
        assert_eq!(i.interpolate(-2.0).r, 0);
    }

    #[test]
    fn hsl_endpoints_and_shortest_arc() {
        let i = interpolate_hsl("#ff0000", "#0000ff").unwrap();
        let start = i.interpolate(0.0);
        assert_eq!((start.h, start.s, start.l), (0.0, 1.0, 0.5));
        let end = i.interpolate(1.0);
        assert_eq!((end.h, end.s, end.l), (240.0, 1.0, 0.5));
        // 0 -> 240 goes backwards through magenta.
        assert_eq!(i.interpolate(0.5).h, 300.0);
    }

    #[test]
    fn hsl_linear_path() {
        let i = HslInterpolator::with_hue_path(
            Hsl::new(0.0, 1.0, 0.5),
            Hsl::new(240.0, 1.0, 0.5),
            HuePath::Linear,
        );
        assert_eq!(i.interpolate(0.5).h, 120.0);
    }

    #[test]
    fn hsl_undefined_hue_borrows_other_side() {
        let i = interpolate_hsl("grey", "red").unwrap();
        assert_eq!(i.interpolate(0.0).h, 0.0);
        assert_eq!(i.interpolate(0.5).h, 0.0);
    }

    #[test]
    fn lab_and_hcl_endpoints() {
        let lab = interpolate_lab("steelblue", "orange").unwrap();
        assert_eq!(lab.interpolate(0.0).to_rgb(), Rgb::new(70, 130, 180));
        assert_eq!(lab.interpolate(1.0).to_rgb(), Rgb::new(255, 165, 0));

        let hcl = interpolate_hcl("steelblue", "orange").unwrap();
        assert_eq!(hcl.interpolate(0.0).to_rgb(), Rgb::new(70, 130, 180));
        assert_eq!(hcl.interpolate(1.0).to_rgb(), Rgb::new(255, 165, 0));
    }

    #[test]
    fn invalid_color_fails_at_construction() {
        let err = interpolate_rgb("#ff0000", "bogus").unwrap_err();
        assert_eq!(
            err,
            InterpolateError::InvalidColorFormat {
                input: "bogus".to_string()
            }
        );
    }
}
