//! SVG transform-list parser.
//!
//! Grammar (whitespace and commas are interchangeable separators):
//!
//! ```text
//! list     := (function sep*)*
//! function := name '(' number (sep* number)* ')'
//! name     := matrix | translate | scale | rotate | skewX | skewY
//! ```
//!
//! Functions compose left to right, so `translate(10) scale(2)` scales first
//! and then translates. An empty list is the identity.

use nalgebra::Matrix3;

use crate::error::InterpolateError;
use crate::string::match_number;
use crate::Result;

use super::{rotation, scaling, skew_x, translation};

/// Parse a transform list into its combined affine matrix.
pub fn parse_matrix(input: &str) -> Result<Matrix3<f64>> {
    let bytes = input.as_bytes();
    let mut m = Matrix3::identity();
    let mut i = skip_separators(bytes, 0);

    while i < bytes.len() {
        let name_start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
            i += 1;
        }
        if i == name_start {
            return Err(InterpolateError::invalid_transform(
                input,
                format!("expected a transform function at offset {name_start}"),
            ));
        }
        let name = &input[name_start..i];

        i = skip_whitespace(bytes, i);
        if bytes.get(i) != Some(&b'(') {
            return Err(InterpolateError::invalid_transform(
                input,
                format!("expected '(' after {name}"),
            ));
        }
        i += 1;

        let mut args = Vec::with_capacity(6);
        loop {
            i = skip_separators(bytes, i);
            match bytes.get(i) {
                Some(b')') => {
                    i += 1;
                    break;
                }
                None => {
                    return Err(InterpolateError::invalid_transform(
                        input,
                        format!("unclosed {name}("),
                    ))
                }
                Some(_) => {
                    let end = match_number(bytes, i).ok_or_else(|| {
                        InterpolateError::invalid_transform(
                            input,
                            format!("invalid argument to {name} at offset {i}"),
                        )
                    })?;
                    let n = input[i..end].parse::<f64>().map_err(|_| {
                        InterpolateError::invalid_transform(
                            input,
                            format!("invalid number {:?}", &input[i..end]),
                        )
                    })?;
                    args.push(n);
                    i = end;
                }
            }
        }

        m *= function_matrix(input, name, &args)?;
        i = skip_separators(bytes, i);
    }

    Ok(m)
}

fn function_matrix(input: &str, name: &str, args: &[f64]) -> Result<Matrix3<f64>> {
    let m = match (name, args) {
        ("matrix", &[a, b, c, d, e, f]) => Matrix3::new(a, c, e, b, d, f, 0.0, 0.0, 1.0),
        ("translate", &[tx]) => translation(tx, 0.0),
        ("translate", &[tx, ty]) => translation(tx, ty),
        ("scale", &[k]) => scaling(k, k),
        ("scale", &[kx, ky]) => scaling(kx, ky),
        ("rotate", &[deg]) => rotation(deg),
        ("rotate", &[deg, cx, cy]) => translation(cx, cy) * rotation(deg) * translation(-cx, -cy),
        ("skewX", &[deg]) => skew_x(deg),
        ("skewY", &[deg]) => {
            let mut m = Matrix3::identity();
            m[(1, 0)] = deg.to_radians().tan();
            m
        }
        ("matrix" | "translate" | "scale" | "rotate" | "skewX" | "skewY", _) => {
            return Err(InterpolateError::invalid_transform(
                input,
                format!("{name} does not take {} arguments", args.len()),
            ))
        }
        _ => {
            return Err(InterpolateError::invalid_transform(
                input,
                format!("unknown transform function {name:?}"),
            ))
        }
    };
    Ok(m)
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn skip_separators(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b',') {
        i += 1;
    }
    i
}
