use approx::assert_abs_diff_eq;
use serde_json::json;
use vizij_interpolate_core::{
    interpolate_array, interpolate_hsl, interpolate_number, interpolate_object,
    interpolate_rgb, interpolate_round, interpolate_string, interpolate_transform,
    interpolate_zoom, Color, Config, HuePath, InterpolateError, Interpolator,
    InterpolatorRegistry, Rgb, Transform, Value, ValueKind,
};

#[test]
fn endpoints_reproduce_for_every_shape() {
    let n = interpolate_number(3.0, -7.0);
    assert_eq!(n.interpolate(0.0), 3.0);
    assert_eq!(n.interpolate(1.0), -7.0);

    let r = interpolate_round(-4i32, 9i32);
    assert_eq!((r.interpolate(0.0), r.interpolate(1.0)), (-4, 9));

    let s = interpolate_string("a1b2", "a5b9");
    assert_eq!(s.interpolate(0.0), "a1b2");
    assert_eq!(s.interpolate(1.0), "a5b9");

    let c = interpolate_rgb("tomato", "#123456").unwrap();
    assert_eq!(c.interpolate(0.0), Rgb::new(255, 99, 71));
    assert_eq!(c.interpolate(1.0), Rgb::new(0x12, 0x34, 0x56));

    let z = interpolate_zoom([0.0, 0.0, 2.0], [8.0, -3.0, 0.5]);
    for (got, want) in z.interpolate(1.0).iter().zip([8.0, -3.0, 0.5]) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-3);
    }
}

#[test]
fn evaluation_is_idempotent() {
    let s = interpolate_string("Saw 10 (movie)", "Saw 20 (movie)");
    let first: Vec<String> = s.samples(11);
    let second: Vec<String> = s.samples(11);
    assert_eq!(first, second);
    assert_eq!(first[5], "Saw 15 (movie)");
}

#[test]
fn hsl_goes_through_magenta() {
    let i = interpolate_hsl("#ff0000", "#0000ff").unwrap();
    assert_eq!(Color::Hsl(i.interpolate(0.5)).to_rgb(), Rgb::new(255, 0, 255));
}

#[test]
fn hsl_linear_hue_through_config() {
    let reg = InterpolatorRegistry::with_config(Config {
        color_space: vizij_interpolate_core::ColorSpace::Hsl,
        hue_path: HuePath::Linear,
        ..Config::default()
    });
    let i = reg
        .interpolate(&Value::from(Rgb::new(255, 0, 0)), &Value::from(Rgb::new(0, 0, 255)))
        .unwrap();
    match i.interpolate(0.5) {
        Value::Color(c) => assert_eq!(c.to_rgb(), Rgb::new(0, 255, 0)),
        other => panic!("expected a color, got {other:?}"),
    }
}

#[test]
fn composites_via_free_functions() {
    let a = vec![Value::Number(10.0), Value::Number(100.0)];
    let b = vec![Value::Number(20.0), Value::Number(200.0), Value::Number(2000.0)];
    let arr = interpolate_array(&a, &b).unwrap();
    assert_eq!(arr.interpolate(0.5).to_json(), json!([15.0, 150.0, 2000.0]));

    let a = Value::from_json(json!({ "fill": "10px", "keep": 1 })).unwrap();
    let b = Value::from_json(json!({ "fill": "30px", "new": "x" })).unwrap();
    let obj = interpolate_object(a.as_object().unwrap(), b.as_object().unwrap()).unwrap();
    assert_eq!(
        obj.interpolate(0.5).to_json(),
        json!({ "fill": "20px", "keep": 1.0, "new": "x" })
    );
}

#[test]
fn transform_display_round_trips() {
    let t = interpolate_transform("translate(4,2)", "translate(8,6)")
        .unwrap()
        .interpolate(0.5);
    assert_eq!(t.to_string(), "translate(6,4)rotate(0)skewX(0)scale(1,1)");
    let back: Transform = t.to_string().parse().unwrap();
    assert_abs_diff_eq!(back.translate[0], 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(back.translate[1], 4.0, epsilon = 1e-12);
}

#[test]
fn construction_errors_are_typed() {
    assert!(matches!(
        interpolate_rgb("nope", "red"),
        Err(InterpolateError::InvalidColorFormat { .. })
    ));
    assert!(matches!(
        interpolate_transform("rotate(", "rotate(1)"),
        Err(InterpolateError::InvalidTransform { .. })
    ));
    assert!(matches!(
        interpolate_rgb(&Value::Number(1.0), "red"),
        Err(InterpolateError::ShapeMismatch {
            expected: ValueKind::Color,
            actual: ValueKind::Number
        })
    ));
}
