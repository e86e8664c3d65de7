//! Fixed-point parsing of fiat amounts.
//!
//! Fiat values carry four fractional digits and must fit a signed 64-bit
//! count of smallest units, the precision wallets use for fiat balances.

use rust_decimal::Decimal;

use crate::errors::RateParseError;

/// Number of fractional digits kept for a fiat amount.
pub const SMALLEST_UNIT_EXPONENT: u32 = 4;

/// Largest number of integer digits a smallest-unit count can carry
/// (`i64::MAX` has 19 digits, four of which are fractional).
const MAX_INTEGER_DIGITS: i64 = 19 - SMALLEST_UNIT_EXPONENT as i64;

/// Parses `text` as a fiat amount, truncating digits beyond
/// [`SMALLEST_UNIT_EXPONENT`] toward zero.
///
/// Accepts plain (`"123.45"`, `"-1.5"`) and scientific (`"1.5E+3"`)
/// notation. Truncation happens on the digits themselves, so no input is
/// ever rounded up. Text that is not a number yields
/// [`RateParseError::Invalid`]; a number whose smallest-unit count exceeds
/// `i64` yields [`RateParseError::Overflow`]. Numbers too small to reach the
/// fourth fractional digit parse as zero.
pub fn parse_fiat_inexact(text: &str) -> Result<Decimal, RateParseError> {
    let literal = DecimalLiteral::split(text).ok_or_else(|| RateParseError::Invalid {
        value: text.to_string(),
    })?;
    let overflow = || RateParseError::Overflow {
        value: text.to_string(),
    };

    // All significant digits, with the position of the decimal point in them
    let digits = format!("{}{}", literal.int_part, literal.frac_part);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let exponent = match literal.exponent.parse::<i64>() {
        Ok(exponent) => exponent,
        // Too many exponent digits for i64: infinitesimal or huge
        Err(_) if literal.exponent.starts_with('-') => return Ok(Decimal::ZERO),
        Err(_) => return Err(overflow()),
    };
    let point = (literal.int_part.len() as i64 - leading_zeros).saturating_add(exponent);

    if point > MAX_INTEGER_DIGITS {
        return Err(overflow());
    }
    if point < -(SMALLEST_UNIT_EXPONENT as i64) {
        return Ok(Decimal::ZERO);
    }

    let (int_digits, frac_digits) = if point <= 0 {
        let padding = "0".repeat(point.unsigned_abs() as usize);
        (String::new(), format!("{}{}", padding, significant))
    } else if point as usize >= significant.len() {
        let padding = "0".repeat(point as usize - significant.len());
        (format!("{}{}", significant, padding), String::new())
    } else {
        let (int_digits, frac_digits) = significant.split_at(point as usize);
        (int_digits.to_string(), frac_digits.to_string())
    };

    let scale = frac_digits.len().min(SMALLEST_UNIT_EXPONENT as usize);
    let sign = if literal.negative { "-" } else { "" };

    // The full smallest-unit count must fit i64
    let padded = format!(
        "{}{}{:0<width$}",
        sign,
        int_digits,
        &frac_digits[..scale],
        width = SMALLEST_UNIT_EXPONENT as usize
    );
    padded.parse::<i64>().map_err(|_| overflow())?;

    let units = format!("{}{}{}", sign, int_digits, &frac_digits[..scale])
        .parse::<i64>()
        .map_err(|_| overflow())?;

    Ok(Decimal::new(units, scale as u32))
}

/// Parts of `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one
/// mantissa digit.
struct DecimalLiteral<'a> {
    negative: bool,
    int_part: &'a str,
    frac_part: &'a str,
    exponent: &'a str,
}

impl<'a> DecimalLiteral<'a> {
    fn split(text: &'a str) -> Option<Self> {
        let negative = text.starts_with('-');
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (unsigned, None),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part)
        {
            return None;
        }

        let exponent = match exponent {
            Some(exponent) => {
                let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
                if digits.is_empty() || !all_digits(digits) {
                    return None;
                }
                exponent
            }
            None => "0",
        };

        Some(Self {
            negative,
            int_part,
            frac_part,
            exponent,
        })
    }
}
