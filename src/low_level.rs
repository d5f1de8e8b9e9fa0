// Limbs are little-endian u64s holding 18 decimal digits each. Every helper here assumes its
// inputs are already reduced below RADIX.

pub const LIMB_DIGITS: usize = 18;
pub const RADIX: u64 = 1_000_000_000_000_000_000;

// POW10[k] = 10^k for k in 0..=LIMB_DIGITS
pub const POW10: [u64; LIMB_DIGITS + 1] = {
    let mut table = [1u64; LIMB_DIGITS + 1];
    let mut i = 1;
    while i <= LIMB_DIGITS {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

// Splits a double-width value into (low limb, high part).
pub fn split_wide(x: u128) -> (u64, u64) {
    ((x % RADIX as u128) as u64, (x / RADIX as u128) as u64)
}

pub fn add_to_digits(x: u64, digits: &mut [u64]) {
    let sum = digits[0] + x;
    if sum >= RADIX {
        digits[0] = sum - RADIX;
        add_to_digits(1, &mut digits[1..]);
    } else {
        digits[0] = sum;
    }
}

pub fn sub_from_digits(x: u64, digits: &mut [u64]) {
    if digits[0] >= x {
        digits[0] -= x;
    } else {
        digits[0] = digits[0] + RADIX - x;
        sub_from_digits(1, &mut digits[1..]);
    }
}

pub fn add_assign_digits(target: &mut Vec<u64>, other: &[u64]) {
    let target_len = std::cmp::max(target.len(), other.len()) + 1;
    target.resize(target_len, 0);
    add_assign_digits_slice(&mut *target, other);
}

// Precondition: target.len() > other.len(), or the sum fits in target.
pub fn add_assign_digits_slice(target: &mut [u64], other: &[u64]) {
    let mut carry = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sum = *target_digit + other_digit + carry as u64;
        carry = sum >= RADIX;
        *target_digit = if carry { sum - RADIX } else { sum };
    }
    if carry {
        add_to_digits(1, &mut target[other.len()..]);
    }
}

// Precondition: target >= other
pub fn sub_assign_digits(target: &mut [u64], other: &[u64]) {
    let mut borrow = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sub = other_digit + borrow as u64;
        borrow = *target_digit < sub;
        *target_digit = if borrow {
            *target_digit + RADIX - sub
        } else {
            *target_digit - sub
        };
    }
    if borrow {
        sub_from_digits(1, &mut target[other.len()..]);
    }
}

// Precondition: target <= other. Leaves other - target in target.
pub fn sub_assign_digits_reverse(target: &mut Vec<u64>, other: &[u64]) {
    target.resize(other.len(), 0);
    let mut borrow = false;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sub = *target_digit + borrow as u64;
        borrow = other_digit < sub;
        *target_digit = if borrow {
            other_digit + RADIX - sub
        } else {
            other_digit - sub
        };
    }
    assert!(!borrow);
}

// Multiplies every limb by `factor` (<= RADIX), returning the carry out of the top limb.
pub fn mul_assign_small(digits: &mut [u64], factor: u64) -> u64 {
    let mut carry = 0;
    for digit in digits.iter_mut() {
        let (low, high) = split_wide(*digit as u128 * factor as u128 + carry as u128);
        *digit = low;
        carry = high;
    }
    carry
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pow10_table() {
        assert_eq!(POW10[0], 1);
        assert_eq!(POW10[LIMB_DIGITS], RADIX);
    }
    #[test]
    fn test_carry_ripples() {
        let mut digits = vec![RADIX - 1, RADIX - 1, 0];
        add_to_digits(1, &mut digits);
        assert_eq!(digits, vec![0, 0, 1]);
        sub_from_digits(1, &mut digits);
        assert_eq!(digits, vec![RADIX - 1, RADIX - 1, 0]);
    }
    proptest! {
        #[test]
        fn test_add_then_sub(a in 0..RADIX, b in 0..RADIX, c in 0..RADIX, d in 0..RADIX) {
            let mut target = vec![a, b];
            add_assign_digits(&mut target, &[c, d]);
            sub_assign_digits(&mut target, &[c, d]);
            assert_eq!(&target[..2], &[a, b]);
            assert!(target[2..].iter().all(|&x| x == 0));
        }
    }
    proptest! {
        #[test]
        fn test_sub_reverse(a in 0..RADIX, b in 0..RADIX) {
            let (small, big) = if a <= b { (a, b) } else { (b, a) };
            let mut target = vec![small];
            sub_assign_digits_reverse(&mut target, &[big, 1]);
            assert_eq!(target[0] as u128 + target[1] as u128 * RADIX as u128,
                       RADIX as u128 + big as u128 - small as u128);
        }
    }
    proptest! {
        #[test]
        fn test_mul_assign_small(a in 0..RADIX, k in 0..=LIMB_DIGITS) {
            let mut digits = vec![a];
            let carry = mul_assign_small(&mut digits, POW10[k]);
            let expected = a as u128 * POW10[k] as u128;
            assert_eq!(digits[0] as u128 + carry as u128 * RADIX as u128, expected);
        }
    }
}
