use crate::prelude::*;

/// Implied decimal places of a display amount.
pub const DECIMALS: usize = 18;

/// Converts a non-negative decimal string into base units, `floor(amount * 10^18)`.
///
/// Digits past the 18th fractional place are dropped, not rounded: `"0.0000000000000000019"`
/// scales to `1`. Accepted syntax is ASCII digits with at most one `.`, which must be followed
/// by at least one digit (`".5"` is fine, `"1."` is not). Signs, exponents and whitespace are
/// rejected.
pub fn scale_amount(amount: &str) -> Result<U256, InvalidAmount> {
    if amount.is_empty() {
        return Err(InvalidAmount::Empty);
    }
    if amount.starts_with('-') {
        return Err(InvalidAmount::Negative {
            bad_value: amount.to_owned(),
        });
    }

    let malformed = || InvalidAmount::Malformed {
        bad_value: amount.to_owned(),
    };
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let (whole, fraction) = match amount.split_once('.') {
        None => (amount, ""),
        Some((_, "")) => return Err(malformed()),
        Some((whole, fraction)) => (whole, fraction),
    };
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(malformed());
    }

    let kept = &fraction[..fraction.len().min(DECIMALS)];
    if kept.len() < fraction.len() {
        trace!(
            "Truncating {} fractional digits of {amount}",
            fraction.len() - kept.len()
        );
    }
    let digits = format!("{whole}{kept:0<width$}", width = DECIMALS);
    U256::from_dec_str(&digits).map_err(|_| InvalidAmount::Overflow {
        bad_value: amount.to_owned(),
    })
}
