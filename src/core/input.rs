use rust_decimal::Decimal;

use super::error::NumberWordsError;

/// A value that should be written out in words.
///
/// Integers, decimals, floats and strings all convert into this type, so the
/// word functions accept `21`, `dec!(21.5)`, `21.0_f64` and `"21"` alike.
/// Fractional parts are truncated toward zero.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// A machine integer.
    Integer(i128),
    /// An exact decimal, e.g. an invoice amount.
    Decimal(Decimal),
    /// A binary float.
    Float(f64),
    /// Text that may or may not hold a number.
    Text(String),
}

impl NumberInput {
    /// Resolve the input to an integer, truncating any fraction.
    ///
    /// Numeric strings may carry surrounding whitespace, a sign, a decimal
    /// fraction (`"21.5"`) or an exponent (`"1e3"`).
    pub fn to_integer(&self) -> Result<i128, NumberWordsError> {
        match self {
            NumberInput::Integer(n) => Ok(*n),
            NumberInput::Decimal(d) => decimal_to_integer(*d),
            NumberInput::Float(f) => float_to_integer(*f),
            NumberInput::Text(s) => parse_numeric(s),
        }
    }
}

fn decimal_to_integer(d: Decimal) -> Result<i128, NumberWordsError> {
    let t = d.trunc();
    // 96-bit mantissa, always fits
    Ok(t.mantissa() / 10_i128.pow(t.scale()))
}

fn float_to_integer(f: f64) -> Result<i128, NumberWordsError> {
    if !f.is_finite() {
        return Err(NumberWordsError::NotANumber {
            input: f.to_string(),
        });
    }
    let t = f.trunc();
    if t.abs() >= 1e30 {
        return Err(NumberWordsError::TooLarge);
    }
    Ok(t as i128)
}

fn parse_numeric(raw: &str) -> Result<i128, NumberWordsError> {
    let s = raw.trim();
    if !looks_numeric(s) {
        return Err(NumberWordsError::NotANumber { input: raw.into() });
    }

    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // All mantissa digits as one integer, shifted by the exponent minus the
    // number of fraction digits.
    let digits: String = int_part.chars().chain(frac_part.chars()).collect();
    let digits = digits.trim_start_matches('0');
    let shift = exponent.map_or(0, parse_exponent) - frac_part.len() as i64;

    let magnitude = if digits.is_empty() {
        0
    } else if shift >= 0 {
        let base = digits
            .parse::<i128>()
            .map_err(|_| NumberWordsError::TooLarge)?;
        u32::try_from(shift)
            .ok()
            .and_then(|shift| 10_i128.checked_pow(shift))
            .and_then(|factor| base.checked_mul(factor))
            .ok_or(NumberWordsError::TooLarge)?
    } else {
        let drop = shift.unsigned_abs() as usize;
        if drop >= digits.len() {
            0
        } else {
            digits[..digits.len() - drop]
                .parse::<i128>()
                .map_err(|_| NumberWordsError::TooLarge)?
        }
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Exponents beyond ±10^9 saturate; they are out of range either way.
fn parse_exponent(e: &str) -> i64 {
    let (negative, digits) = match e.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, e.strip_prefix('+').unwrap_or(e)),
    };
    let value = digits.parse::<i64>().unwrap_or(i64::MAX).min(1_000_000_000);
    if negative { -value } else { value }
}

/// Shape check: `[+-]? digits [. digits]? ([eE] [+-]? digits)?`, where at
/// least one digit appears before the exponent.
fn looks_numeric(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !digits(int_part) || !digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(e) => {
            let e = e.strip_prefix(['+', '-']).unwrap_or(e);
            !e.is_empty() && digits(e)
        }
    }
}

macro_rules! integer_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberInput {
                fn from(n: $t) -> Self {
                    NumberInput::Integer(n as i128)
                }
            }
        )*
    };
}

integer_input!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);

impl From<Decimal> for NumberInput {
    fn from(d: Decimal) -> Self {
        NumberInput::Decimal(d)
    }
}

impl From<f64> for NumberInput {
    fn from(f: f64) -> Self {
        NumberInput::Float(f)
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        NumberInput::Text(s.into())
    }
}

impl From<String> for NumberInput {
    fn from(s: String) -> Self {
        NumberInput::Text(s)
    }
}

impl From<&String> for NumberInput {
    fn from(s: &String) -> Self {
        NumberInput::Text(s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(s: &str) -> Result<i128, NumberWordsError> {
        NumberInput::from(s).to_integer()
    }

    #[test]
    fn plain_integers() {
        assert_eq!(parse("21"), Ok(21));
        assert_eq!(parse("-21"), Ok(-21));
        assert_eq!(parse("+7"), Ok(7));
        assert_eq!(parse("  42 \n"), Ok(42));
        assert_eq!(parse("007"), Ok(7));
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        assert_eq!(parse("21.9"), Ok(21));
        assert_eq!(parse("-5.5"), Ok(-5));
        assert_eq!(parse(".5"), Ok(0));
        assert_eq!(parse("3."), Ok(3));
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(parse("1e3"), Ok(1000));
        assert_eq!(parse("2.5E6"), Ok(2_500_000));
        assert_eq!(parse("-1e2"), Ok(-100));
    }

    #[test]
    fn rejects_non_numeric() {
        for s in ["", " ", "abc", "12abc", "0x1A", "1,5", "--1", ".", "e5", "1e", "1.2.3"] {
            assert!(
                matches!(parse(s), Err(NumberWordsError::NotANumber { .. })),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn huge_integer_string_is_too_large() {
        let s = "9".repeat(60);
        assert_eq!(parse(&s), Err(NumberWordsError::TooLarge));
    }

    #[test]
    fn decimal_input() {
        assert_eq!(NumberInput::from(dec!(1234.99)).to_integer(), Ok(1234));
        assert_eq!(NumberInput::from(dec!(-0.5)).to_integer(), Ok(0));
    }

    #[test]
    fn float_input() {
        assert_eq!(NumberInput::from(21.7_f64).to_integer(), Ok(21));
        assert!(matches!(
            NumberInput::from(f64::NAN).to_integer(),
            Err(NumberWordsError::NotANumber { .. })
        ));
        assert!(matches!(
            NumberInput::from(f64::INFINITY).to_integer(),
            Err(NumberWordsError::NotANumber { .. })
        ));
    }
}
