//! HAST node definitions
//!
//! This crate defines the tree that hastscript produces:
//! - `Node`: root, element and text variants
//! - `Properties`: insertion-ordered property map of an element
//! - `PropertyValue`: the scalar or list values a property can hold
//!
//! All types serialize to the HAST JSON shape
//! (`{"type": "element", "tagName": "div", "properties": {}, "children": []}`).

pub mod node;
pub mod properties;

pub use node::*;
pub use properties::*;

/// Render a number the way a host string conversion does: integral values
/// have no fractional part, non-finite values are spelled out, and
/// magnitudes of `1e21` and above or below `1e-6` use exponent form
/// (`1e+21`, `1.5e-7`).
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n < 0.0 {
        format!("-{}", format_positive(-n))
    } else {
        format_positive(n)
    }
}

/// Shortest round-trip digits of `n`, placed by its decimal exponent.
fn format_positive(n: f64) -> String {
    // `{:e}` gives the shortest round-trip digits: `1.2345e3`, `1e-7`.
    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let length = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    if length <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - length) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(3.0), "3");
        assert_eq!(number_to_string(0.7), "0.7");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(123.456), "123.456");
        assert_eq!(number_to_string(-42.0), "-42");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(-2.5e300), "-2.5e+300");
    }

    #[test]
    fn test_exponent_thresholds() {
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(123e18), "123000000000000000000");
        assert_eq!(number_to_string(1e-6), "0.000001");
        assert_eq!(number_to_string(0.00001234), "0.00001234");
    }
}
