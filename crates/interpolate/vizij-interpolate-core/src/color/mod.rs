//! Color models, conversions and color interpolators.
//!
//! - [`Rgb`]: 8-bit sRGB channels
//! - [`Hsl`]: hue in degrees, saturation and lightness in `[0, 1]`
//! - [`Lab`] / [`Hcl`]: CIE L*a*b* (D65) and its cylindrical form
//!
//! Achromatic colors have an undefined hue, stored as `NaN`. Grey, black and
//! white also leave HSL saturation undefined at the extremes. Interpolators
//! treat an undefined channel as "borrow the other endpoint".

mod interp;
pub mod parse;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InterpolateError;
use crate::number::round_half_up;
use crate::value::{Value, ValueKind};
use crate::Result;

pub use interp::{
    interpolate_hcl, interpolate_hsl, interpolate_lab, interpolate_rgb, HclInterpolator,
    HslInterpolator, LabInterpolator, RgbInterpolator,
};
pub use parse::parse_color;

// D65 reference white and CIE L*a*b* constants.
const LAB_X: f64 = 0.950470;
const LAB_Y: f64 = 1.0;
const LAB_Z: f64 = 1.088830;
const LAB_T0: f64 = 4.0 / 29.0;
const LAB_T1: f64 = 0.206893034;
const LAB_T2: f64 = 0.008856;
const LAB_K: f64 = 7.787037;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees; `NaN` when undefined.
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hcl {
    /// Hue in degrees; `NaN` when undefined.
    pub h: f64,
    pub c: f64,
    pub l: f64,
}

/// A color in any supported space.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
    Lab(Lab),
    Hcl(Hcl),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB` -> Rgb
    pub const fn from_hex(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Round each channel half-up and clamp into `[0, 255]`.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let d = max - min;
        let l = (max + min) / 2.0;

        if d == 0.0 {
            let s = if l > 0.0 && l < 1.0 { 0.0 } else { f64::NAN };
            return Hsl::new(f64::NAN, s, l);
        }

        let s = if l < 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };
        let h = if r == max {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if g == max {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Hsl::new(h * 60.0, s, l)
    }

    pub fn to_lab(self) -> Lab {
        let r = rgb_xyz(self.r);
        let g = rgb_xyz(self.g);
        let b = rgb_xyz(self.b);
        let x = xyz_lab((0.4124564 * r + 0.3575761 * g + 0.1804375 * b) / LAB_X);
        let y = xyz_lab((0.2126729 * r + 0.7151522 * g + 0.0721750 * b) / LAB_Y);
        let z = xyz_lab((0.0193339 * r + 0.1191920 * g + 0.9503041 * b) / LAB_Z);
        Lab::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }

    pub fn to_hcl(self) -> Hcl {
        self.to_lab().to_hcl()
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = if self.h.is_nan() {
            0.0
        } else {
            self.h.rem_euclid(360.0)
        };
        let s = if self.s.is_nan() {
            0.0
        } else {
            self.s.clamp(0.0, 1.0)
        };
        let l = self.l.clamp(0.0, 1.0);
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        let v = |mut h: f64| -> f64 {
            if h > 360.0 {
                h -= 360.0;
            } else if h < 0.0 {
                h += 360.0;
            }
            let c = if h < 60.0 {
                m1 + (m2 - m1) * h / 60.0
            } else if h < 180.0 {
                m2
            } else if h < 240.0 {
                m1 + (m2 - m1) * (240.0 - h) / 60.0
            } else {
                m1
            };
            c * 255.0
        };
        Rgb::from_f64(v(h + 120.0), v(h), v(h - 120.0))
    }
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    pub fn to_rgb(self) -> Rgb {
        let y = (self.l + 16.0) / 116.0;
        let x = y + self.a / 500.0;
        let z = y - self.b / 200.0;
        let x = lab_xyz(x) * LAB_X;
        let y = lab_xyz(y) * LAB_Y;
        let z = lab_xyz(z) * LAB_Z;
        Rgb::from_f64(
            xyz_rgb(3.2404542 * x - 1.5371385 * y - 0.4985314 * z),
            xyz_rgb(-0.9692660 * x + 1.8760108 * y + 0.0415560 * z),
            xyz_rgb(0.0556434 * x - 0.2040259 * y + 1.0572252 * z),
        )
    }

    pub fn to_hcl(self) -> Hcl {
        if self.a == 0.0 && self.b == 0.0 {
            let c = if self.l > 0.0 && self.l < 100.0 {
                0.0
            } else {
                f64::NAN
            };
            return Hcl::new(f64::NAN, c, self.l);
        }
        let h = self.b.atan2(self.a).to_degrees();
        Hcl::new(
            if h < 0.0 { h + 360.0 } else { h },
            self.a.hypot(self.b),
            self.l,
        )
    }
}

impl Hcl {
    pub const fn new(h: f64, c: f64, l: f64) -> Self {
        Self { h, c, l }
    }

    pub fn to_lab(self) -> Lab {
        let h = if self.h.is_nan() { 0.0 } else { self.h }.to_radians();
        let c = if self.c.is_nan() { 0.0 } else { self.c };
        Lab::new(self.l, h.cos() * c, h.sin() * c)
    }

    pub fn to_rgb(self) -> Rgb {
        self.to_lab().to_rgb()
    }
}

impl Color {
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Rgb(c) => c,
            Color::Hsl(c) => c.to_rgb(),
            Color::Lab(c) => c.to_rgb(),
            Color::Hcl(c) => c.to_rgb(),
        }
    }

    pub fn to_hsl(self) -> Hsl {
        match self {
            Color::Hsl(c) => c,
            other => other.to_rgb().to_hsl(),
        }
    }

    pub fn to_lab(self) -> Lab {
        match self {
            Color::Lab(c) => c,
            Color::Hcl(c) => c.to_lab(),
            other => other.to_rgb().to_lab(),
        }
    }

    pub fn to_hcl(self) -> Hcl {
        match self {
            Color::Hcl(c) => c,
            other => other.to_lab().to_hcl(),
        }
    }
}

#[inline]
fn channel(v: f64) -> u8 {
    let v = round_half_up(v);
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, 255.0) as u8
    }
}

fn rgb_xyz(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn xyz_lab(x: f64) -> f64 {
    if x > LAB_T2 {
        x.cbrt()
    } else {
        LAB_K * x + LAB_T0
    }
}

fn lab_xyz(x: f64) -> f64 {
    if x > LAB_T1 {
        x * x * x
    } else {
        (x - LAB_T0) / LAB_K
    }
}

fn xyz_rgb(r: f64) -> f64 {
    255.0
        * if r <= 0.00304 {
            12.92 * r
        } else {
            1.055 * r.powf(1.0 / 2.4) - 0.055
        }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c)
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Color::Hsl(c)
    }
}

impl From<Lab> for Color {
    fn from(c: Lab) -> Self {
        Color::Lab(c)
    }
}

impl From<Hcl> for Color {
    fn from(c: Hcl) -> Self {
        Color::Hcl(c)
    }
}

impl FromStr for Color {
    type Err = InterpolateError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

// Every space renders as its sRGB hex form.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_rgb().fmt(f)
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_rgb().fmt(f)
    }
}

impl fmt::Display for Hcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_rgb().fmt(f)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_rgb().fmt(f)
    }
}

/// Endpoint accepted by the color interpolators: a color string or a typed color.
pub trait IntoColor {
    fn into_color(self) -> Result<Color>;
}

impl IntoColor for &str {
    fn into_color(self) -> Result<Color> {
        parse_color(self)
    }
}

impl IntoColor for String {
    fn into_color(self) -> Result<Color> {
        parse_color(&self)
    }
}

impl IntoColor for &String {
    fn into_color(self) -> Result<Color> {
        parse_color(self)
    }
}

impl IntoColor for &Value {
    fn into_color(self) -> Result<Color> {
        match self {
            Value::Color(c) => Ok(*c),
            Value::Text(s) => parse_color(s),
            other => Err(InterpolateError::ShapeMismatch {
                expected: ValueKind::Color,
                actual: other.kind(),
            }),
        }
    }
}

macro_rules! impl_into_color {
    ($($t:ty),*) => {
        $(
            impl IntoColor for $t {
                fn into_color(self) -> Result<Color> {
                    Ok(self.into())
                }
            }
        )*
    };
}

impl_into_color!(Color, Rgb, Hsl, Lab, Hcl);
