//! Interpolation of numbers embedded in text.
//!
//! Both strings are scanned for numbers matching
//! `[-+]?(\d+\.?\d*|\.?\d+)([eE][-+]?\d+)?`. Numbers are paired in order of
//! appearance; each differing pair is blended, everything else is copied from
//! the end string. Text between numbers is expected to agree between the two
//! endpoints; when it does not, the end string's text wins.

use std::ops::Range;

use log::debug;

use crate::interpolator::Interpolator;
use crate::number::{lerp, NumberInterpolator};

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Number(NumberInterpolator),
}

/// Interpolator over the numbers found in two strings.
#[derive(Debug, Clone, PartialEq)]
pub struct StringInterpolator {
    segments: Vec<Segment>,
}

impl StringInterpolator {
    pub fn new(a: &str, b: &str) -> Self {
        let mut segments: Vec<Segment> = Vec::new();
        let mut a_pos = 0usize;
        let mut b_pos = 0usize;
        let mut text_mismatch = false;

        while let (Some(am), Some(bm)) = (find_number(a, a_pos), find_number(b, b_pos)) {
            if a[a_pos..am.start] != b[b_pos..bm.start] {
                text_mismatch = true;
            }
            if bm.start > b_pos {
                push_text(&mut segments, &b[b_pos..bm.start]);
            }
            let (a_num, b_num) = (&a[am.clone()], &b[bm.clone()]);
            if a_num == b_num {
                push_text(&mut segments, b_num);
            } else {
                segments.push(Segment::Number(NumberInterpolator::new(
                    parse_number(a_num),
                    parse_number(b_num),
                )));
            }
            a_pos = am.end;
            b_pos = bm.end;
        }

        if b_pos < b.len() {
            push_text(&mut segments, &b[b_pos..]);
        }

        if text_mismatch {
            debug!("interpolate_string: static text differs between {a:?} and {b:?}; using end text");
        }

        Self { segments }
    }

    /// Number of numeric pairs that actually animate.
    pub fn animated_len(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Number(_)))
            .count()
    }
}

impl Interpolator<String> for StringInterpolator {
    fn interpolate(&self, t: f64) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Number(n) => {
                    out.push_str(&format_number(lerp(n.start(), n.end(), t)));
                }
            }
        }
        out
    }
}

/// Interpolate the numbers embedded in `a` and `b`.
pub fn interpolate_string(a: &str, b: &str) -> StringInterpolator {
    StringInterpolator::new(a, b)
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Text(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

/// Format like JavaScript's `Number#toString`: integral values print without
/// a fractional part, `-0` prints `0`, and magnitudes outside `[1e-6, 1e21)`
/// use exponent notation with an explicit sign (`5e+21`, `1.5e-7`).
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let text = if v > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        let exp = format!("{v:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        format!("{v}")
    }
}

fn parse_number(s: &str) -> f64 {
    // "5." and ".5" are valid for f64::from_str; a bare sign never reaches here.
    s.parse().unwrap_or(f64::NAN)
}

/// Find the leftmost number at or after `from`.
fn find_number(s: &str, from: usize) -> Option<Range<usize>> {
    let bytes = s.as_bytes();
    (from..bytes.len()).find_map(|start| match_number(bytes, start).map(|end| start..end))
}

fn digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Match a number starting exactly at `start`, returning its end offset.
pub(crate) fn match_number(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits(bytes, i);
    let mut end = if int_end > i {
        // \d+\.?\d*
        if bytes.get(int_end) == Some(&b'.') {
            digits(bytes, int_end + 1)
        } else {
            int_end
        }
    } else if bytes.get(i) == Some(&b'.') {
        // \.?\d+
        let frac_end = digits(bytes, i + 1);
        if frac_end == i + 1 {
            return None;
        }
        frac_end
    } else {
        return None;
    };

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits(bytes, j);
        if exp_end > j {
            end = exp_end;
        }
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_numbers() {
        assert_eq!(find_number("Saw 10 (movie)", 0), Some(4..6));
        assert_eq!(find_number("a -1.5e3b", 0), Some(2..8));
        assert_eq!(find_number("x.5y", 0), Some(1..3));
        assert_eq!(find_number("7.", 0), Some(0..2));
        assert_eq!(find_number("no digits - . e", 0), None);
        assert_eq!(find_number("1e", 0), Some(0..1));
    }

    #[test]
    fn interpolates_embedded_number() {
        let i = interpolate_string("Saw 10 (movie)", "Saw 20 (movie)");
        assert_eq!(i.interpolate(0.0), "Saw 10 (movie)");
        assert_eq!(i.interpolate(0.5), "Saw 15 (movie)");
        assert_eq!(i.interpolate(1.0), "Saw 20 (movie)");
        assert_eq!(i.animated_len(), 1);
    }

    #[test]
    fn equal_numbers_are_static() {
        let i = interpolate_string("translate(10,5)", "translate(20,5)");
        assert_eq!(i.animated_len(), 1);
        assert_eq!(i.interpolate(0.5), "translate(15,5)");
    }

    #[test]
    fn units_and_fractions() {
        let i = interpolate_string("10px", "20px");
        assert_eq!(i.interpolate(0.5), "15px");
        let f = interpolate_string("0.5em", "1.5em");
        assert_eq!(f.interpolate(0.25), "0.75em");
    }

    #[test]
    fn trailing_numbers_only_in_end_are_static() {
        let i = interpolate_string("1 apples", "3 apples 4 pears");
        assert_eq!(i.interpolate(0.5), "2 apples 4 pears");
        assert_eq!(i.interpolate(1.0), "3 apples 4 pears");
    }

    #[test]
    fn trailing_numbers_only_in_start_are_dropped() {
        let i = interpolate_string("1 2 3", "5");
        assert_eq!(i.interpolate(0.5), "3");
        assert_eq!(i.interpolate(1.0), "5");
    }

    #[test]
    fn no_numbers_yields_end_text() {
        let i = interpolate_string("foo", "bar");
        assert_eq!(i.interpolate(0.0), "bar");
        assert_eq!(i.interpolate(0.7), "bar");
    }

    #[test]
    fn format_like_javascript() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
        assert_eq!(format_number(1e21), "1e+21");
    }

    #[test]
    fn huge_values_use_exponent_notation() {
        let i = interpolate_string("0px", "1e22px");
        assert_eq!(i.interpolate(0.5), "5e+21px");
    }
}
