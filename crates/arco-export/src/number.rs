//! Numeric rendering shared by the LP and MPS writers.
//!
//! Solvers parse these files with C-style readers, so values are rendered
//! with the general (`%G`) notation: fixed or scientific depending on the
//! decimal exponent, trailing zeros removed, upper-case `E` exponent with at
//! least two digits.

/// Significant digits used for LP coefficients and bounds (exact round trip).
pub const LP_PRECISION: usize = 17;
/// Significant digits used for free MPS values.
pub const FREE_MPS_PRECISION: usize = 16;
/// Field width of a free MPS value.
pub const FREE_MPS_VALUE_WIDTH: usize = 21;
/// Field width (and starting precision) of a fixed MPS value.
pub const FIXED_MPS_VALUE_WIDTH: usize = 12;

/// Render `value` in general notation with `precision` significant digits.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-INF".to_string()
        } else {
            "INF".to_string()
        };
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent >= -4 && exponent < precision as i32 {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        let mut fixed = format!("{value:.decimals$}");
        strip_fraction_zeros(&mut fixed);
        fixed
    } else {
        let mut rendered = mantissa.to_string();
        strip_fraction_zeros(&mut rendered);
        let sign = if exponent < 0 { '-' } else { '+' };
        rendered.push('E');
        rendered.push(sign);
        rendered.push_str(&format!("{:02}", exponent.unsigned_abs()));
        rendered
    }
}

/// Like [`format_general`] but always carries a sign.
pub fn format_signed(value: f64, precision: usize) -> String {
    let rendered = format_general(value, precision);
    if rendered.starts_with('-') {
        rendered
    } else {
        format!("+{rendered}")
    }
}

/// LP bound or right-hand side.
pub fn lp_number(value: f64) -> String {
    format_general(value, LP_PRECISION)
}

/// LP coefficient, always signed.
pub fn lp_coefficient(value: f64) -> String {
    format_signed(value, LP_PRECISION)
}

/// Integral LP bound rendered without a decimal point.
pub fn lp_integral(value: f64) -> String {
    format!("{value:.0}")
}

/// Fixed MPS value: the largest precision whose rendering fits the field.
pub fn fixed_mps_value(value: f64) -> String {
    let mut precision = FIXED_MPS_VALUE_WIDTH;
    let mut rendered = format_general(value, precision);
    while rendered.chars().count() > FIXED_MPS_VALUE_WIDTH && precision > 1 {
        precision -= 1;
        rendered = format_general(value, precision);
    }
    rendered
}

/// Free MPS value, right-aligned in its field.
pub fn free_mps_value(value: f64) -> String {
    format!(
        "{:>width$}",
        format_general(value, FREE_MPS_PRECISION),
        width = FREE_MPS_VALUE_WIDTH
    )
}

fn strip_fraction_zeros(rendered: &mut String) {
    if !rendered.contains('.') {
        return;
    }
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
}
