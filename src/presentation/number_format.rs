// src/presentation/number_format.rs
//
// Display helpers for integers far outside f64's exact range. All rounding is
// done on integers (round half up) so the printed digits are exact.

use num::{BigInt, BigUint, Integer, Signed, Zero};

/// Normalised scientific form `mantissa × 10^exponent` with 1 <= mantissa < 10.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scientific {
    pub mantissa: String,
    pub exponent: i64,
}

impl std::fmt::Display for Scientific {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} × 10^{}", self.mantissa, self.exponent)
    }
}

fn ten_pow(k: u64) -> BigUint {
    num::pow(BigUint::from(10u32), k as usize)
}

fn round_half_up(numerator: &BigUint, denominator: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    (numerator * &two + denominator) / (denominator * &two)
}

/// Renders `value / 10^decimals` with exactly `decimals` fractional digits.
fn render_fixed(value: &BigUint, decimals: usize) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let (whole, fraction) = value.div_rem(&ten_pow(decimals as u64));
    format!("{}.{:0>width$}", whole, fraction.to_string(), width = decimals)
}

/// Scientific form of the rational `numerator / denominator`.
///
/// Returns `None` when either side is zero.
pub fn scientific_ratio(numerator: &BigUint, denominator: &BigUint, decimals: usize) -> Option<Scientific> {
    if numerator.is_zero() || denominator.is_zero() {
        return None;
    }

    // floor(log10(n/d)) is either len(n) - len(d) or one less
    let mut exponent = numerator.to_string().len() as i64 - denominator.to_string().len() as i64;
    let scaled = |exponent: i64| -> (BigUint, BigUint) {
        let shift = ten_pow(exponent.unsigned_abs());
        if exponent >= 0 {
            (numerator.clone(), denominator * shift)
        } else {
            (numerator * shift, denominator.clone())
        }
    };

    let (n, d) = scaled(exponent);
    if n < d {
        exponent -= 1;
    }
    let (n, d) = scaled(exponent);

    let unit = ten_pow(decimals as u64);
    let mut digits = round_half_up(&(n * &unit), &d);
    // 9.995 rounds to 10.00
    if digits >= &unit * BigUint::from(10u32) {
        digits /= BigUint::from(10u32);
        exponent += 1;
    }

    Some(Scientific {
        mantissa: render_fixed(&digits, decimals),
        exponent,
    })
}

/// Scientific form of a positive integer, `None` for zero.
pub fn format_scientific(n: &BigUint, decimals: usize) -> Option<Scientific> {
    scientific_ratio(n, &BigUint::from(1u32), decimals)
}

/// `numerator / denominator` as a fixed-point decimal with `decimals` fractional digits.
pub fn format_fixed_ratio(numerator: &BigUint, denominator: &BigUint, decimals: usize) -> String {
    if denominator.is_zero() {
        return "0".to_string();
    }
    let scaled = numerator * ten_pow(decimals as u64);
    render_fixed(&round_half_up(&scaled, denominator), decimals)
}

/// Comma-separated thousands, e.g. `1234567` → `"1,234,567"`.
pub fn group_thousands<N: Into<BigInt>>(n: N) -> String {
    let n: BigInt = n.into();
    let digits = n.magnitude().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n.is_negative() {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `"<grouped> (≈ <mantissa> × 10^<exponent>)"` with a two-decimal mantissa.
///
/// Non-positive input has no scientific form; the parenthesised part is then
/// the literal `0`.
pub fn format_large_number<N: Into<BigInt>>(n: N) -> String {
    format_large_number_with_precision(n, 2)
}

pub fn format_large_number_with_precision<N: Into<BigInt>>(n: N, decimals: usize) -> String {
    let n: BigInt = n.into();
    let scientific = if n.is_positive() {
        format_scientific(n.magnitude(), decimals)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "0".to_string())
    } else {
        "0".to_string()
    };
    format!("{} (≈ {})", group_thousands(n), scientific)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::constants::monster_order;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_format_thousand() {
        assert_eq!(format_large_number(1000), "1,000 (≈ 1.00 × 10^3)");
    }

    #[test]
    fn test_format_single_digit() {
        assert_eq!(format_large_number(7), "7 (≈ 7.00 × 10^0)");
    }

    #[test]
    fn test_format_monster_order() {
        let formatted = format_large_number(monster_order().clone());
        assert!(formatted.starts_with("808,017,424,794,512,875,886,459,904,961,710,757,005,754,368,000,000,000"));
        assert!(formatted.ends_with("(≈ 8.08 × 10^53)"));
    }

    #[test]
    fn test_non_positive_fallback() {
        assert_eq!(format_large_number(0), "0 (≈ 0)");
        assert_eq!(format_large_number(-1000), "-1,000 (≈ 0)");
    }

    #[test]
    fn test_mantissa_rounding_carries_into_exponent() {
        let s = format_scientific(&BigUint::from(99960u32), 2).unwrap();
        assert_eq!(s.mantissa, "1.00");
        assert_eq!(s.exponent, 5);
    }

    #[test]
    fn test_scientific_ratio_below_one() {
        // 1/8 = 1.25 × 10^-1
        let s = scientific_ratio(&BigUint::from(1u32), &BigUint::from(8u32), 2).unwrap();
        assert_eq!(s.to_string(), "1.25 × 10^-1");
        assert!(scientific_ratio(&BigUint::zero(), &BigUint::from(8u32), 2).is_none());
    }

    #[test]
    fn test_fixed_ratio() {
        assert_eq!(format_fixed_ratio(&BigUint::from(1u32), &BigUint::from(3u32), 4), "0.3333");
        assert_eq!(format_fixed_ratio(&BigUint::from(2u32), &BigUint::from(3u32), 4), "0.6667");
        assert_eq!(format_fixed_ratio(&BigUint::from(5u32), &BigUint::from(1u32), 0), "5");
    }
}
