//! Label and value formatting for the metadata panel.

use serde_json::Value;

/// Fraction digits kept when formatting non-integer numbers.
const MAX_FRACTION_DIGITS: usize = 3;

/// `per_capita_waste_kg` -> `PER CAPITA WASTE KG`
pub fn format_key(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Format an attribute value for display.
///
/// Numbers get en-US thousands separators, strings are shown as-is and
/// nested values as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                group_thousands(&i.unsigned_abs().to_string(), i < 0)
            } else if let Some(u) = n.as_u64() {
                group_thousands(&u.to_string(), false)
            } else {
                n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
            }
        }
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Format a float with grouping and at most three fraction digits.
///
/// `1234567.891` -> `1,234,567.891`, `0.12345` -> `0.123`, `2.50` -> `2.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let (int_part, frac_part) = round_half_away(value.abs());
    let frac_part = frac_part.trim_end_matches('0');
    // -0.0001 rounds to zero and is shown unsigned
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());

    let mut out = group_thousands(&int_part, negative);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Round a non-negative finite value to [`MAX_FRACTION_DIGITS`], ties away
/// from zero, on its shortest decimal representation: `0.0625` -> `0.063`.
fn round_half_away(value: f64) -> (String, String) {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if frac_part.len() <= MAX_FRACTION_DIGITS {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[MAX_FRACTION_DIGITS] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..MAX_FRACTION_DIGITS].bytes())
        .collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - MAX_FRACTION_DIGITS;
    let int_digits = digits[..split].iter().map(|&d| d as char).collect();
    let frac_digits = digits[split..].iter().map(|&d| d as char).collect();
    (int_digits, frac_digits)
}

fn group_thousands(digits: &str, negative: bool) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_key() {
        assert_eq!(format_key("total_plastic_waste_mt"), "TOTAL PLASTIC WASTE MT");
        assert_eq!(format_key("main_sources"), "MAIN SOURCES");
        assert_eq!(format_key("region"), "REGION");
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_value(&json!(0)), "0");
        assert_eq!(format_value(&json!(999)), "999");
        assert_eq!(format_value(&json!(1000)), "1,000");
        assert_eq!(format_value(&json!(1234567)), "1,234,567");
        assert_eq!(format_value(&json!(-1234567)), "-1,234,567");
        assert_eq!(format_value(&json!(u64::MAX)), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_floats() {
        assert_eq!(format_number(59.08), "59.08");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.12345), "0.123");
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-9876.54321), "-9,876.543");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_number(0.0625), "0.063");
        assert_eq!(format_number(1.0625), "1.063");
        assert_eq!(format_number(1234.4375), "1,234.438");
        assert_eq!(format_number(-0.0625), "-0.063");
        assert_eq!(format_number(0.1235), "0.124");
        assert_eq!(format_number(999.9995), "1,000");
        assert_eq!(format_number(0.0004), "0");
        assert_eq!(format_value(&json!(2.0625)), "2.063");
    }

    #[test]
    fn test_format_other_values() {
        assert_eq!(format_value(&json!("Very_High")), "Very_High");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&Value::Null), "null");
        assert_eq!(format_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}
