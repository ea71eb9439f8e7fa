//! Shared JSON interpolation cases for the Vizij interpolate crates.
//!
//! Suites live under `fixtures/interpolation/` at the workspace root and are
//! indexed by `fixtures/manifest.json`. Each case names the constructor to
//! exercise, its two endpoints and the expected output at a few `t` values.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    interpolation: HashMap<String, String>,
}

/// One file of cases.
#[derive(Debug, Clone, Deserialize)]
pub struct Suite {
    #[serde(default)]
    pub description: Option<String>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub name: String,
    /// Constructor under test: `number`, `round`, `string`, `rgb`, `hsl`,
    /// `lab`, `hcl`, `array`, `object`, `transform`, `zoom` or `value`
    /// (registry dispatch).
    pub interpolator: String,
    pub start: JsonValue,
    pub end: JsonValue,
    #[serde(default)]
    pub tolerance: Option<f64>,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    pub t: f64,
    pub expected: JsonValue,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod interpolation {
    use super::*;

    /// Suite names, sorted.
    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.interpolation.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.interpolation, "interpolation", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.interpolation, "interpolation", name)?;
        super::load_json(rel)
    }

    pub fn suite(name: &str) -> Result<Suite> {
        load(name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.interpolation, "interpolation", name)?;
        Ok(resolve_path(rel))
    }
}

/// Structural JSON comparison with a numeric tolerance.
///
/// Objects compare by key set (order ignored); numbers within `tol`; every
/// other value must be equal.
pub fn json_close(actual: &JsonValue, expected: &JsonValue, tol: f64) -> bool {
    match (actual, expected) {
        (JsonValue::Number(a), JsonValue::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => (a - b).abs() <= tol,
            _ => false,
        },
        (JsonValue::Array(a), JsonValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| json_close(x, y, tol))
        }
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, x)| b.get(k).is_some_and(|y| json_close(x, y, tol)))
        }
        _ => actual == expected,
    }
}

/// Panicking form of [`json_close`] for tests.
#[track_caller]
pub fn assert_json_close(actual: &JsonValue, expected: &JsonValue, tol: f64) {
    assert!(
        json_close(actual, expected, tol),
        "JSON mismatch (tol {tol}):\n  actual:   {actual}\n  expected: {expected}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_manifest_entry_loads() {
        for name in interpolation::keys() {
            let suite = interpolation::suite(&name)
                .unwrap_or_else(|e| panic!("suite {name} failed to load: {e:#}"));
            assert!(!suite.cases.is_empty(), "suite {name} has no cases");
        }
    }

    #[test]
    fn unknown_suite_is_an_error() {
        assert!(interpolation::json("does-not-exist").is_err());
    }

    #[test]
    fn close_compares_structurally() {
        assert!(json_close(&json!([1.0, "a"]), &json!([1.0000001, "a"]), 1e-6));
        assert!(!json_close(&json!([1.0]), &json!([1.0, 2.0]), 1e-6));
        assert!(json_close(&json!({ "b": 1, "a": 2 }), &json!({ "a": 2, "b": 1 }), 0.0));
        assert!(!json_close(&json!("x"), &json!("y"), 1.0));
    }
}
