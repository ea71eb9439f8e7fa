use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_interpolate_core::{
    self as interp, ArrayInterpolator, Color, Config, InterpolateError, Interpolator,
    InterpolatorRegistry, ObjectInterpolator, Value, ValueInterpolator, ZoomInterpolator,
    ZoomView,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn core_err(e: InterpolateError) -> JsError {
    JsError::new(&format!("{} error: {e}", e.category()))
}

/// Convert a JS endpoint (number, string, array, plain object, boolean) into a core value.
fn value_from_js(v: JsValue, what: &str) -> Result<Value, JsError> {
    let json: JsonValue =
        swb::from_value(v).map_err(|e| JsError::new(&format!("{what} parse error: {e}")))?;
    Value::from_json(json).map_err(core_err)
}

fn value_to_js(v: &Value) -> Result<JsValue, JsError> {
    v.to_json()
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("output error: {e}")))
}

fn zoom_view(v: JsValue, what: &str) -> Result<ZoomView, JsError> {
    swb::from_value(v).map_err(|e| JsError::new(&format!("{what} must be [x, y, width]: {e}")))
}

fn zoom_to_value(z: ZoomView) -> Value {
    Value::Array(z.iter().copied().map(Value::Number).collect())
}

/// An interpolator handed to JavaScript. Call `interpolate(t)` any number of times.
#[wasm_bindgen]
pub struct JsInterpolator {
    inner: ValueInterpolator,
    duration: Option<f64>,
}

impl JsInterpolator {
    fn new(inner: ValueInterpolator) -> Self {
        Self {
            inner,
            duration: None,
        }
    }

    fn zoom(z: ZoomInterpolator) -> Self {
        Self {
            duration: Some(z.duration()),
            inner: Box::new(move |t: f64| zoom_to_value(z.interpolate(t))),
        }
    }
}

#[wasm_bindgen]
impl JsInterpolator {
    /// Evaluate at progress `t`. Colors come back as `#rrggbb` strings and
    /// transforms as `translate(..)rotate(..)skewX(..)scale(..)` strings.
    #[wasm_bindgen]
    pub fn interpolate(&self, t: f64) -> Result<JsValue, JsError> {
        value_to_js(&self.inner.interpolate(t))
    }

    /// `n` evenly spaced samples over `[0, 1]`, as an array.
    #[wasm_bindgen]
    pub fn samples(&self, n: usize) -> Result<JsValue, JsError> {
        value_to_js(&Value::Array(self.inner.samples(n)))
    }

    /// Recommended transition length in ms; only zoom interpolators have one.
    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }
}

#[wasm_bindgen(js_name = interpolateNumber)]
pub fn interpolate_number(a: f64, b: f64) -> JsInterpolator {
    let i = interp::interpolate_number(a, b);
    JsInterpolator::new(Box::new(move |t: f64| Value::Number(i.interpolate(t))))
}

#[wasm_bindgen(js_name = interpolateRound)]
pub fn interpolate_round(a: f64, b: f64) -> JsInterpolator {
    let i: interp::RoundInterpolator<i64> = interp::RoundInterpolator::from_f64(a, b);
    JsInterpolator::new(Box::new(move |t: f64| {
        Value::Number(i.interpolate(t) as f64)
    }))
}

#[wasm_bindgen(js_name = interpolateString)]
pub fn interpolate_string(a: &str, b: &str) -> JsInterpolator {
    let i = interp::interpolate_string(a, b);
    JsInterpolator::new(Box::new(move |t: f64| Value::Text(i.interpolate(t))))
}

#[wasm_bindgen(js_name = interpolateRgb)]
pub fn interpolate_rgb(a: &str, b: &str) -> Result<JsInterpolator, JsError> {
    let i = interp::interpolate_rgb(a, b).map_err(core_err)?;
    Ok(JsInterpolator::new(Box::new(move |t: f64| {
        Value::Color(Color::Rgb(i.interpolate(t)))
    })))
}

#[wasm_bindgen(js_name = interpolateHsl)]
pub fn interpolate_hsl(a: &str, b: &str) -> Result<JsInterpolator, JsError> {
    let i = interp::interpolate_hsl(a, b).map_err(core_err)?;
    Ok(JsInterpolator::new(Box::new(move |t: f64| {
        Value::Color(Color::Hsl(i.interpolate(t)))
    })))
}

#[wasm_bindgen(js_name = interpolateLab)]
pub fn interpolate_lab(a: &str, b: &str) -> Result<JsInterpolator, JsError> {
    let i = interp::interpolate_lab(a, b).map_err(core_err)?;
    Ok(JsInterpolator::new(Box::new(move |t: f64| {
        Value::Color(Color::Lab(i.interpolate(t)))
    })))
}

#[wasm_bindgen(js_name = interpolateHcl)]
pub fn interpolate_hcl(a: &str, b: &str) -> Result<JsInterpolator, JsError> {
    let i = interp::interpolate_hcl(a, b).map_err(core_err)?;
    Ok(JsInterpolator::new(Box::new(move |t: f64| {
        Value::Color(Color::Hcl(i.interpolate(t)))
    })))
}

#[wasm_bindgen(js_name = interpolateArray)]
pub fn interpolate_array(a: JsValue, b: JsValue) -> Result<JsInterpolator, JsError> {
    let a = value_from_js(a, "start")?;
    let b = value_from_js(b, "end")?;
    let i = ArrayInterpolator::from_values(&a, &b).map_err(core_err)?;
    Ok(JsInterpolator::new(Box::new(i)))
}

#[wasm_bindgen(js_name = interpolateObject)]
pub fn interpolate_object(a: JsValue, b: JsValue) -> Result<JsInterpolator, JsError> {
    let a = value_from_js(a, "start")?;
    let b = value_from_js(b, "end")?;
    let i = ObjectInterpolator::from_values(&a, &b).map_err(core_err)?;
    Ok(JsInterpolator::new(Box::new(i)))
}

#[wasm_bindgen(js_name = interpolateTransform)]
pub fn interpolate_transform(a: &str, b: &str) -> Result<JsInterpolator, JsError> {
    let i = interp::interpolate_transform(a, b).map_err(core_err)?;
    Ok(JsInterpolator::new(Box::new(move |t: f64| {
        Value::Transform(i.interpolate(t))
    })))
}

#[wasm_bindgen(js_name = interpolateZoom)]
pub fn interpolate_zoom(a: JsValue, b: JsValue) -> Result<JsInterpolator, JsError> {
    let a = zoom_view(a, "start")?;
    let b = zoom_view(b, "end")?;
    Ok(JsInterpolator::zoom(interp::interpolate_zoom(a, b)))
}

/// Dispatch on the endpoint shapes through the process-wide registry.
#[wasm_bindgen]
pub fn interpolate(a: JsValue, b: JsValue) -> Result<JsInterpolator, JsError> {
    let a = value_from_js(a, "start")?;
    let b = value_from_js(b, "end")?;
    interp::interpolate(&a, &b)
        .map(JsInterpolator::new)
        .map_err(core_err)
}

/// Names of the process-wide registry's factories, in consultation order.
#[wasm_bindgen(js_name = interpolatorNames)]
pub fn interpolator_names() -> Vec<String> {
    interp::registry()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// A registry with its own dispatch configuration.
#[wasm_bindgen]
pub struct VizijInterpolate {
    registry: InterpolatorRegistry,
}

#[wasm_bindgen]
impl VizijInterpolate {
    /// Create a configured context. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new VizijInterpolate({ color_space: "hcl", hue_path: "linear" })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VizijInterpolate, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(VizijInterpolate {
            registry: InterpolatorRegistry::with_config(cfg),
        })
    }

    /// Dispatch on the endpoint shapes using this context's configuration.
    #[wasm_bindgen]
    pub fn interpolate(&self, a: JsValue, b: JsValue) -> Result<JsInterpolator, JsError> {
        let a = value_from_js(a, "start")?;
        let b = value_from_js(b, "end")?;
        self.registry
            .interpolate(&a, &b)
            .map(JsInterpolator::new)
            .map_err(core_err)
    }

    /// Color interpolation in the configured color space.
    #[wasm_bindgen(js_name = interpolateColor)]
    pub fn interpolate_color(&self, a: &str, b: &str) -> Result<JsInterpolator, JsError> {
        let a = Value::Color(a.parse::<Color>().map_err(core_err)?);
        let b = Value::Color(b.parse::<Color>().map_err(core_err)?);
        self.registry
            .interpolate(&a, &b)
            .map(JsInterpolator::new)
            .map_err(core_err)
    }

    /// Smooth zoom using the configured `zoom_rho`.
    #[wasm_bindgen]
    pub fn zoom(&self, a: JsValue, b: JsValue) -> Result<JsInterpolator, JsError> {
        let a = zoom_view(a, "start")?;
        let b = zoom_view(b, "end")?;
        Ok(JsInterpolator::zoom(self.registry.zoom(a, b)))
    }

    /// The active configuration as a plain object.
    #[wasm_bindgen]
    pub fn config(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.registry.config())
            .map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
