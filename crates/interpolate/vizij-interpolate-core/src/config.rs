//! Registry configuration for vizij-interpolate-core.

use serde::{Deserialize, Serialize};

/// Color space used when the registry dispatches two [`Color`](crate::Color) values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsl,
    Lab,
    Hcl,
}

/// How hue channels travel between two angles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HuePath {
    /// Take the shorter arc; a difference above 180° wraps around.
    #[default]
    Shortest,
    /// Blend raw degrees, so 0 -> 350 sweeps through every hue.
    Linear,
}

/// Configuration for registry dispatch and the zoom path.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_space: ColorSpace,
    pub hue_path: HuePath,
    /// Curvature of the smooth zoom path.
    pub zoom_rho: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_space: ColorSpace::Rgb,
            hue_path: HuePath::Shortest,
            zoom_rho: std::f64::consts::SQRT_2,
        }
    }
}
