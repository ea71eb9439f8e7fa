//! Vizij Interpolate Core (engine-agnostic)
//!
//! Builds interpolators between two endpoints of matching shape: numbers,
//! numeric-aware strings, colors (RGB, HSL, Lab, HCL), arrays, property bags,
//! 2D affine transforms and smooth zoom paths. An interpolator is an immutable
//! function of a progress value `t`; `t = 0` yields the start endpoint and
//! `t = 1` the end endpoint. Values outside `[0, 1]` extrapolate.
//!
//! Shape-based dispatch over [`Value`] goes through an [`InterpolatorRegistry`],
//! which falls back to user-registered [`InterpolatorFactory`] instances when
//! no built-in shape applies.
//!
//! ```
//! use vizij_interpolate_core::{interpolate_number, interpolate_string, Interpolator};
//!
//! let n = interpolate_number(10, 20);
//! assert_eq!(n.interpolate(0.25), 12.5);
//!
//! let s = interpolate_string("Saw 10 (movie)", "Saw 20 (movie)");
//! assert_eq!(s.interpolate(0.5), "Saw 15 (movie)");
//! ```

pub mod color;
pub mod composite;
pub mod config;
pub mod error;
pub mod interpolator;
pub mod number;
pub mod registry;
pub mod string;
pub mod transform;
pub mod value;
pub mod zoom;

// Re-exports for consumers (adapters)
pub use color::{
    interpolate_hcl, interpolate_hsl, interpolate_lab, interpolate_rgb, Color, Hcl, Hsl,
    HclInterpolator, HslInterpolator, IntoColor, Lab, LabInterpolator, Rgb, RgbInterpolator,
};
pub use composite::{interpolate_array, interpolate_object, ArrayInterpolator, ObjectInterpolator};
pub use config::{ColorSpace, Config, HuePath};
pub use error::InterpolateError;
pub use interpolator::{BoxedInterpolator, Interpolator, ValueInterpolator};
pub use number::{
    interpolate_number, interpolate_round, NumberInterpolator, Numeric, RoundInterpolator,
    RoundTarget,
};
pub use registry::{
    factory_fn, interpolate, register, registry, InterpolatorFactory, InterpolatorRegistry,
    StringFactory,
};
pub use string::{interpolate_string, StringInterpolator};
pub use transform::{interpolate_transform, IntoTransform, Transform, TransformInterpolator};
pub use value::{CustomValue, Value, ValueKind};
pub use zoom::{interpolate_zoom, ZoomInterpolator, ZoomView};

/// Interpolation result type
pub type Result<T> = core::result::Result<T, InterpolateError>;
