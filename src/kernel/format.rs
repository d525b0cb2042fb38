//! Two-decimal display formatting.
//!
//! `{:.2}` rounds the exact binary value, which makes ties depend on representation error.
//! Rounding is applied to the shortest round-trip decimal form instead, half away from zero,
//! so `0.125` always shows as `0.13`.

pub const DECIMALS: usize = 2;
pub const PLACEHOLDER: &str = "—";

pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // `Display` for f64 never switches to exponent notation.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let mut frac = frac_part.bytes().map(|b| b - b'0');
    for _ in 0..DECIMALS {
        digits.push(frac.next().unwrap_or(0));
    }
    if frac.next().is_some_and(|d| d >= 5) {
        round_up(&mut digits);
    }

    let split = digits.len() - DECIMALS;
    let mut out = String::with_capacity(digits.len() + 2);
    let is_zero = digits.iter().all(|d| *d == 0);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    out.push('.');
    out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    out
}

fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/format.rs"]
mod tests;
