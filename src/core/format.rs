// Municode - core/format.rs
//
// Fixed-decimal display formatting for metric values.
//
// Rounding follows the published dashboard: the exact binary value is
// rounded at the requested digit, ties going away from zero. A value
// stored just below a tie (1.045 is really 1.04499...) rounds down.
// Rust's `{:.N}` alone rounds ties to even, so it is not used directly.

use crate::util::constants::NO_DATA_PLACEHOLDER;

/// Fractional digits needed to print any finite f64 exactly (2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Format with exactly `decimals` fractional digits.
///
/// A result that rounds to zero is printed without a minus sign.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Exact expansion of |value|: no rounding happens at this precision.
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5');

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

    let is_zero = digits.iter().all(|&d| d == b'0');
    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| d as char));
    }
    out
}

/// Format an average, or the no-data placeholder when there is none.
pub fn format_average(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format_fixed(v, decimals),
        _ => NO_DATA_PLACEHOLDER.to_string(),
    }
}
