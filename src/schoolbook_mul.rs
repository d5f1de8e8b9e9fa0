use crate::low_level::{add_to_digits, split_wide};
use crate::BigInt;

/// Quadratic limb-by-limb multiplication. This is the primitive behind `&a * &b`.
pub fn schoolbook_mul(l: &BigInt, r: &BigInt) -> BigInt {
    if l.is_zero() || r.is_zero() {
        return BigInt::ZERO;
    }
    let mut digits = vec![0; l.digits.len() + r.digits.len()];
    for (i, &l_digit) in l.digits.iter().enumerate() {
        // Each step stays below RADIX^2, so the carry always fits in one limb.
        let mut carry = 0u64;
        for (&r_digit, digit) in r.digits.iter().zip(digits[i..].iter_mut()) {
            let prod = (l_digit as u128) * (r_digit as u128) + *digit as u128 + carry as u128;
            let (low, high) = split_wide(prod);
            *digit = low;
            carry = high;
        }
        if carry != 0 {
            add_to_digits(carry, &mut digits[i + r.digits.len()..]);
        }
    }
    let negative = l.negative ^ r.negative;
    BigInt { digits, negative }.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::low_level::RADIX;
    use crate::test_utils::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mul_small(a in any::<u64>(), b in any::<u64>()) {
            let prod = schoolbook_mul(&BigInt::from(a), &BigInt::from(b));
            assert_eq!(prod, BigInt::from(a as u128 * b as u128));
       }
    }
    proptest! {
        #[test]
        fn mul_zero(a in any_bigint(0..20)) {
            let prod = schoolbook_mul(&BigInt::ZERO, &a);
            assert_eq!(prod, BigInt::ZERO);
        }
    }
    proptest! {
        #[test]
        fn mul_identity(a in any_bigint(0..20)) {
            let one = BigInt::from(1u64);
            let prod = schoolbook_mul(&one, &a);
            assert_eq!(prod, a);
        }
    }
    proptest! {
        #[test]
        fn mul_sign(a in any_bigint(0..20), b in any_bigint(0..20)) {
            let prod = schoolbook_mul(&a, &b);
            assert_eq!(prod, -schoolbook_mul(&-&a, &b));
            assert_eq!(prod, schoolbook_mul(&-&a, &-&b));
        }
    }
    proptest! {
        #[test]
        fn distributive(a in any_bigint(0..20),b in any_bigint(0..20),c in any_bigint(0..20)) {
            let sum_last = schoolbook_mul(&a, &c)+ schoolbook_mul(&b, &c);
            let sum_first = schoolbook_mul(&(a.clone() + b), &c);
            assert_eq!(sum_first, sum_last);
        }
    }
    proptest! {
        #[test]
        fn matches_num_bigint(a in decimal_string(1..200), b in decimal_string(1..200)) {
            let prod = schoolbook_mul(&a.parse().unwrap(), &b.parse().unwrap());
            assert_eq!(prod.to_string(), reference_product(&a, &b));
        }
    }
    #[test]
    fn hardcoded() {
        // (10^18 - 1)^2 = 10^36 - 2 * 10^18 + 1
        let a = BigInt {
            digits: vec![RADIX - 1],
            negative: false,
        };
        let prod = schoolbook_mul(&a, &a);
        let c = BigInt {
            digits: vec![1, RADIX - 2],
            negative: false,
        };
        assert_eq!(prod, c);
    }
}
