use crate::error::Error;
use crate::low_level::{mul_assign_small, LIMB_DIGITS, POW10};
use crate::BigInt;
use std::fmt;
use std::str::FromStr;

fn limb_digit_length(limb: u64) -> usize {
    limb.checked_ilog10().map_or(1, |log| log as usize + 1)
}

impl BigInt {
    /// Number of decimal digits in `|self|`. Zero has one digit.
    pub fn digit_length(&self) -> usize {
        match self.digits.last() {
            None => 1,
            Some(&top) => (self.digits.len() - 1) * LIMB_DIGITS + limb_digit_length(top),
        }
    }

    /// Returns `self * 10^k`.
    pub fn mul_pow10(&self, k: usize) -> BigInt {
        if self.is_zero() {
            return BigInt::ZERO;
        }
        let mut digits = vec![0; k / LIMB_DIGITS];
        digits.extend_from_slice(&self.digits);
        let carry = mul_assign_small(&mut digits[k / LIMB_DIGITS..], POW10[k % LIMB_DIGITS]);
        if carry != 0 {
            digits.push(carry);
        }
        BigInt {
            digits,
            negative: self.negative,
        }
    }

    /// Splits at the `m`-th decimal digit from the right, returning `(high, low)` with
    /// `self == high * 10^m + low` and `|low| < 10^m`.
    ///
    /// Both halves carry the sign of `self`.
    pub fn split_at_digit(&self, m: usize) -> (BigInt, BigInt) {
        let limb = m / LIMB_DIGITS;
        if limb >= self.digits.len() {
            return (BigInt::ZERO, self.clone());
        }
        let (low_digits, high_digits) = self.digits.split_at(limb);
        let mut low = low_digits.to_vec();
        let high = match m % LIMB_DIGITS {
            0 => high_digits.to_vec(),
            shift => {
                let divisor = POW10[shift];
                let carry_in = POW10[LIMB_DIGITS - shift];
                low.push(high_digits[0] % divisor);
                high_digits
                    .windows(2)
                    .map(|window| window[0] / divisor + (window[1] % divisor) * carry_in)
                    .chain(high_digits.last().map(|&last| last / divisor))
                    .collect()
            }
        };
        let negative = self.negative;
        (
            BigInt {
                digits: high,
                negative,
            }
            .normalize(),
            BigInt {
                digits: low,
                negative,
            }
            .normalize(),
        )
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.digit_length());
        match self.digits.split_last() {
            None => out.push('0'),
            Some((top, rest)) => {
                out.push_str(&top.to_string());
                for limb in rest.iter().rev() {
                    out.push_str(&format!("{:018}", limb));
                }
            }
        }
        f.pad_integral(!self.negative, "", &out)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (negative, body, offset) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..], 1),
            Some(b'+') => (false, &s[1..], 1),
            _ => (false, s, 0),
        };
        if body.is_empty() {
            return Err(Error::EmptyDecimal);
        }
        if let Some((position, found)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(Error::InvalidDecimalDigit {
                position: position + offset,
                found,
            });
        }
        // Limbs are read from the least significant end of the string.
        let bytes = body.as_bytes();
        let digits = bytes
            .rchunks(LIMB_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
            })
            .collect();
        Ok(BigInt { digits, negative }.normalize())
    }
}
