use crate::units::types::Unit;

/// Format a converted value as "<original> <source> = <converted> <target>".
///
/// `original` is the text exactly as the user typed it.
pub fn format_result(original: &str, source: Unit, converted: f64, target: Unit) -> String {
    format!(
        "{} {} = {} {}",
        original,
        source,
        format_number(converted),
        target
    )
}

/// Render a number the way the app has always displayed it.
///
/// Uses the shortest digit string that round-trips to the same `f64`, written in
/// plain decimal notation when the decimal exponent is within `[-7, 21)` and as
/// `d.ddde±x` outside it (`1000`, `0.000621371`, `6.2137e-7`, `1e+21`).
/// Negative zero is shown as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{}{}", sign, layout_digits(&digits, exponent))
}

/// Shortest round-trip significant digits of a positive finite value and the
/// decimal exponent of the first digit (`1234.5` -> `("12345", 3)`)
fn shortest_digits(value: f64) -> (String, i32) {
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn layout_digits(digits: &str, exponent: i32) -> String {
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, (n - 1).abs())
        }
    }
}
