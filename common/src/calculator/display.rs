const ROUNDING_SCALE: f64 = 100_000_000.0;

/// Rounds to 8 decimal places to hide binary floating point noise.
pub fn round_result(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / ROUNDING_SCALE;
    // Avoid showing "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

pub fn format_result(value: f64) -> String {
    format!("{}", round_result(value))
}

/// Groups the integer part with commas and keeps the fractional digits as typed,
/// so "1234567.50" shows as "1,234,567.50" and "12." keeps its trailing point.
pub fn display_number(operand: &str) -> String {
    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return operand.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}
