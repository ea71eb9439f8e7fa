use serde_json::{json, Value as JsonValue};
use vizij_interpolate_core::{
    interpolate_hcl, interpolate_hsl, interpolate_lab, interpolate_rgb, interpolate_string,
    interpolate_transform, interpolate_zoom, Color, Interpolator, InterpolatorRegistry,
    RoundInterpolator, Value, ZoomView,
};
use vizij_test_fixtures::{assert_json_close, interpolation, Case};

fn number(v: &JsonValue) -> f64 {
    v.as_f64().expect("numeric endpoint")
}

fn text(v: &JsonValue) -> &str {
    v.as_str().expect("string endpoint")
}

fn view(v: &JsonValue) -> ZoomView {
    serde_json::from_value(v.clone()).expect("zoom view endpoint")
}

fn hex(c: impl Into<Color>) -> JsonValue {
    json!(c.into().to_string())
}

/// Build the case's interpolator and return a sampler producing plain JSON.
fn sampler(case: &Case) -> Box<dyn Fn(f64) -> JsonValue> {
    match case.interpolator.as_str() {
        "number" => {
            let i = vizij_interpolate_core::interpolate_number(number(&case.start), number(&case.end));
            Box::new(move |t| json!(i.interpolate(t)))
        }
        "round" => {
            let i: RoundInterpolator<i64> =
                RoundInterpolator::from_f64(number(&case.start), number(&case.end));
            Box::new(move |t| json!(i.interpolate(t)))
        }
        "string" => {
            let i = interpolate_string(text(&case.start), text(&case.end));
            Box::new(move |t| json!(i.interpolate(t)))
        }
        "rgb" => {
            let i = interpolate_rgb(text(&case.start), text(&case.end)).unwrap();
            Box::new(move |t| hex(i.interpolate(t)))
        }
        "hsl" => {
            let i = interpolate_hsl(text(&case.start), text(&case.end)).unwrap();
            Box::new(move |t| hex(i.interpolate(t)))
        }
        "lab" => {
            let i = interpolate_lab(text(&case.start), text(&case.end)).unwrap();
            Box::new(move |t| hex(i.interpolate(t)))
        }
        "hcl" => {
            let i = interpolate_hcl(text(&case.start), text(&case.end)).unwrap();
            Box::new(move |t| hex(i.interpolate(t)))
        }
        "transform" => {
            let i = interpolate_transform(text(&case.start), text(&case.end)).unwrap();
            Box::new(move |t| serde_json::to_value(i.interpolate(t)).unwrap())
        }
        "zoom" => {
            let i = interpolate_zoom(view(&case.start), view(&case.end));
            Box::new(move |t| json!(i.interpolate(t)))
        }
        "array" | "object" | "value" => {
            let a = Value::from_json(case.start.clone()).unwrap();
            let b = Value::from_json(case.end.clone()).unwrap();
            let i = InterpolatorRegistry::new().interpolate(&a, &b).unwrap();
            Box::new(move |t| i.interpolate(t).to_json())
        }
        other => panic!("case {} names unknown interpolator {other:?}", case.name),
    }
}

#[test]
fn all_fixture_suites() {
    let keys = interpolation::keys();
    assert!(!keys.is_empty());
    for name in keys {
        let suite = interpolation::suite(&name).unwrap();
        for case in &suite.cases {
            let eval = sampler(case);
            let tol = case.tolerance.unwrap_or(1e-9);
            for sample in &case.samples {
                let got = eval(sample.t);
                assert_json_close(&got, &sample.expected, tol);
            }
        }
    }
}
