#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen as swb;
use vizij_interpolate_wasm::{
    abi_version, interpolate, interpolate_array, interpolate_hsl, interpolate_number,
    interpolate_object, interpolate_rgb, interpolate_round, interpolate_string,
    interpolate_transform, interpolate_zoom, interpolator_names, VizijInterpolate,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn js(v: serde_json::Value) -> JsValue {
    v.serialize(&swb::Serializer::json_compatible()).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn scalar_interpolators() {
    let n = interpolate_number(10.0, 20.0);
    assert_eq!(n.interpolate(0.25).unwrap().as_f64(), Some(12.5));
    assert_eq!(n.duration(), None);

    let r = interpolate_round(10.0, 20.0);
    assert_eq!(r.interpolate(0.25).unwrap().as_f64(), Some(13.0));

    let s = interpolate_string("Saw 10 (movie)", "Saw 20 (movie)");
    assert_eq!(
        s.interpolate(0.5).unwrap().as_string().as_deref(),
        Some("Saw 15 (movie)")
    );
}

#[wasm_bindgen_test]
fn colors_render_as_hex() {
    let rgb = interpolate_rgb("#ff0000", "#0000ff").unwrap();
    assert_eq!(rgb.interpolate(0.5).unwrap().as_string().as_deref(), Some("#800080"));
    let hsl = interpolate_hsl("red", "blue").unwrap();
    assert_eq!(hsl.interpolate(0.5).unwrap().as_string().as_deref(), Some("#ff00ff"));
    assert!(interpolate_rgb("red", "not-a-color").is_err());
}

#[wasm_bindgen_test]
fn array_and_object() {
    let arr = interpolate_array(js(json!([10, 100])), js(json!([20, 200, 2000]))).unwrap();
    let out = Array::from(&arr.interpolate(0.5).unwrap());
    assert_eq!(out.length(), 3);
    approx(out.get(0).as_f64().unwrap(), 15.0, 1e-9);
    approx(out.get(2).as_f64().unwrap(), 2000.0, 1e-9);

    let obj = interpolate_object(js(json!({ "x": 0 })), js(json!({ "x": 10, "y": "a" }))).unwrap();
    let out = Object::from(obj.interpolate(0.5).unwrap());
    let x = Reflect::get(&out, &JsValue::from_str("x")).unwrap();
    approx(x.as_f64().unwrap(), 5.0, 1e-9);
    let y = Reflect::get(&out, &JsValue::from_str("y")).unwrap();
    assert_eq!(y.as_string().as_deref(), Some("a"));

    assert!(interpolate_array(js(json!(1)), js(json!([1]))).is_err());
}

#[wasm_bindgen_test]
fn transform_and_zoom() {
    let tr = interpolate_transform("translate(4,2)", "translate(8,6)").unwrap();
    assert_eq!(
        tr.interpolate(0.5).unwrap().as_string().as_deref(),
        Some("translate(6,4)rotate(0)skewX(0)scale(1,1)")
    );

    let z = interpolate_zoom(js(json!([5, 6, 30])), js(json!([1, 2, 20]))).unwrap();
    let mid = Array::from(&z.interpolate(0.5).unwrap());
    approx(mid.get(0).as_f64().unwrap(), 2.6, 1e-3);
    approx(mid.get(2).as_f64().unwrap(), 25.11414, 1e-3);
    assert!(z.duration().unwrap() > 0.0);
}

#[wasm_bindgen_test]
fn registry_dispatch() {
    assert_eq!(interpolator_names(), vec!["string".to_string()]);
    let px = interpolate(JsValue::from_str("10px"), JsValue::from_str("20px")).unwrap();
    assert_eq!(px.interpolate(0.5).unwrap().as_string().as_deref(), Some("15px"));
    assert!(interpolate(JsValue::from_f64(1.0), JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn configured_context() {
    let ctx = VizijInterpolate::new(js(json!({ "color_space": "hsl" }))).unwrap();
    let c = ctx.interpolate_color("#ff0000", "#0000ff").unwrap();
    assert_eq!(c.interpolate(0.5).unwrap().as_string().as_deref(), Some("#ff00ff"));

    let cfg = Object::from(ctx.config().unwrap());
    let space = Reflect::get(&cfg, &JsValue::from_str("color_space")).unwrap();
    assert_eq!(space.as_string().as_deref(), Some("hsl"));

    assert!(VizijInterpolate::new(JsValue::UNDEFINED).is_ok());
    assert!(VizijInterpolate::new(JsValue::from_f64(3.0)).is_err());
}
