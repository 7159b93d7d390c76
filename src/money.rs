use std::fmt;
use std::iter::Sum;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::{BudgeterError, Result};

pub const CURRENCY: &str = "$";
pub const THOUSANDS: &str = ",";
const POINT: char = '.';

/// A signed count of cents (1/100th of a dollar).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Parse a currency string shaped like `[-][$]X[,XXX][.XX]`.
    ///
    /// Only the first `$` and the first `,` are removed, so `1,000,000` is
    /// rejected. A single fractional digit is read as tenths (`5.3` is 530
    /// cents) and an empty dollar part is zero (`.50` is 50 cents). An empty
    /// or all-whitespace string is zero, but a sign or `$` with no digits
    /// after it (`-`, `$`, `$-`) is malformed.
    pub fn parse(raw: &str) -> Result<Cents> {
        let malformed = || BudgeterError::MalformedCurrency {
            input: raw.to_string(),
        };

        let stripped = raw.trim().replacen(CURRENCY, "", 1).replacen(THOUSANDS, "", 1);
        let s = stripped.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if s.is_empty() {
            return if raw.trim().is_empty() {
                Ok(Cents::ZERO)
            } else {
                Err(malformed())
            };
        }

        let (dollars, pennies) = match s.split_once(POINT) {
            Some((_, frac)) if frac.contains(POINT) => return Err(malformed()),
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };

        let dollars = if dollars.is_empty() {
            0
        } else {
            parse_digits(dollars).ok_or_else(malformed)?
        };
        let pennies = match pennies {
            None => 0,
            Some(frac) if frac.len() == 1 => parse_digits(frac).ok_or_else(malformed)? * 10,
            Some(frac) if frac.len() == 2 => parse_digits(frac).ok_or_else(malformed)?,
            Some(_) => return Err(malformed()),
        };

        let magnitude = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(pennies))
            .ok_or_else(malformed)?;
        Ok(Cents(if negative { -magnitude } else { magnitude }))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_sub(self, other: Cents) -> Option<Cents> {
        self.0.checked_sub(other.0).map(Cents)
    }

    /// Dollar and cent components of the magnitude.
    pub(crate) fn split(self) -> (u64, u64) {
        let abs = self.0.unsigned_abs();
        (abs / 100, abs % 100)
    }
}

fn parse_digits(s: &str) -> Option<i64> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let (dollars, pennies) = self.split();
        write!(f, "{sign}{CURRENCY}{dollars}.{pennies:02}")
    }
}

impl FromStr for Cents {
    type Err = BudgeterError;

    fn from_str(s: &str) -> Result<Self> {
        Cents::parse(s)
    }
}

impl Neg for Cents {
    type Output = Cents;

    fn neg(self) -> Cents {
        Cents(self.0.saturating_neg())
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        Cents(iter.fold(0i64, |acc, c| acc.saturating_add(c.0)))
    }
}
