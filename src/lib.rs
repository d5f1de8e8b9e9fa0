//! Base-10 Karatsuba multiplication.
//!
//! [`BigInt`] stores its magnitude as decimal limbs (18 digits per `u64`), so splitting an
//! operand at a decimal-digit boundary and scaling by powers of ten never needs a division of
//! the whole number. [`karatsuba_mul`] is the entry point; [`schoolbook_mul`] is the quadratic
//! primitive it bottoms out in.
use std::cmp::Ordering;
use std::ops::Mul;

pub mod addsub;
pub mod decimal;
pub mod error;
pub mod karatsuba;
mod low_level;
pub mod schoolbook_mul;
#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use karatsuba::{karatsuba_mul, Karatsuba};
pub use schoolbook_mul::schoolbook_mul;

use low_level::RADIX;

/// A signed arbitrary-precision integer.
///
/// Always normalized: no most-significant zero limbs, and zero is never negative. Derived
/// equality is therefore numeric equality.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BigInt {
    negative: bool,
    // Little-endian, each limb < 10^18.
    digits: Vec<u64>,
}
impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("digits", &format!("{:?}", &self.digits))
            .finish()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign_cmp = other.negative.cmp(&self.negative);
        if sign_cmp != Ordering::Equal {
            return sign_cmp;
        }
        if self.negative {
            other.cmp_abs(self)
        } else {
            self.cmp_abs(other)
        }
    }
}

impl BigInt {
    pub const ZERO: BigInt = BigInt {
        digits: Vec::new(),
        negative: false,
    };
    fn cmp_abs(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
    fn normalize_in_place(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.negative = false;
        }
    }
    fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }
    fn neg_in_place(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    fn from_u64(x: u64) -> Self {
        BigInt::from(x as u128)
    }
}

impl From<u64> for BigInt {
    fn from(x: u64) -> Self {
        BigInt::from_u64(x)
    }
}

impl From<u128> for BigInt {
    fn from(mut x: u128) -> Self {
        let mut digits = Vec::new();
        while x != 0 {
            digits.push((x % RADIX as u128) as u64);
            x /= RADIX as u128;
        }
        BigInt {
            digits,
            negative: false,
        }
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &'b BigInt) -> BigInt {
        schoolbook_mul(self, other)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        schoolbook_mul(&self, &other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_u128() {
        let x = BigInt::from(123_456_789_012_345_678_901_234_567_890u128);
        assert_eq!(x.digits, vec![345_678_901_234_567_890, 123_456_789_012]);
        assert_eq!(BigInt::from(0u64), BigInt::ZERO);
        assert_eq!(BigInt::from(RADIX).digits, vec![0, 1]);
        assert_eq!(BigInt::from_u64(u64::MAX), BigInt::from(u64::MAX as u128));
    }
    proptest! {
        #[test]
        fn test_ord_matches_u64(a in any::<u64>(), b in any::<u64>()) {
            let expected = a.cmp(&b);
            assert_eq!(BigInt::from(a).cmp(&BigInt::from(b)), expected);
        }
    }
    proptest! {
        #[test]
        fn test_ord_sign(a in any_bigint(0..10)) {
            prop_assume!(!a.is_zero());
            let neg = -a.clone();
            assert_eq!(neg < a, !a.is_negative());
            assert_eq!(neg.cmp(&BigInt::ZERO), BigInt::ZERO.cmp(&a));
        }
    }
}
