use crate::low_level::{add_assign_digits, sub_assign_digits, sub_assign_digits_reverse};
use crate::BigInt;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

impl BigInt {
    // self += (-1)^other_negative * other_digits
    fn add_assign_signed(&mut self, other_digits: &[u64], other_negative: bool) {
        if other_digits.is_empty() {
            return;
        }
        if self.negative == other_negative || self.is_zero() {
            self.negative = other_negative;
            add_assign_digits(&mut self.digits, other_digits);
        } else {
            let other_len = other_digits.len();
            let cmp = self
                .digits
                .len()
                .cmp(&other_len)
                .then_with(|| self.digits.iter().rev().cmp(other_digits.iter().rev()));
            match cmp {
                Ordering::Greater => sub_assign_digits(&mut self.digits, other_digits),
                Ordering::Equal => {
                    *self = BigInt::ZERO;
                    return;
                }
                Ordering::Less => {
                    sub_assign_digits_reverse(&mut self.digits, other_digits);
                    self.negative = other_negative;
                }
            }
        }
        self.normalize_in_place();
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, mut other: Self) {
        // Reuse whichever allocation is already larger.
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        self.add_assign_signed(&other.digits, other.negative);
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &'a Self) {
        self.add_assign_signed(&other.digits, other.negative);
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, other: Self) {
        *self += -other;
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &'a Self) {
        self.add_assign_signed(&other.digits, !other.negative);
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.neg_in_place();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign:ident) => {
        impl $imp for BigInt {
            type Output = BigInt;

            fn $method(mut self, other: BigInt) -> BigInt {
                self.$assign(other);
                self
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            fn $method(mut self, other: &'a BigInt) -> BigInt {
                self.$assign(other);
                self
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            fn $method(self, other: &'b BigInt) -> BigInt {
                let mut out = self.clone();
                out.$assign(other);
                out
            }
        }
    };
}

forward_binop!(Add, add, add_assign);
forward_binop!(Sub, sub, sub_assign);

impl<'a> Add<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, mut other: BigInt) -> BigInt {
        other += self;
        other
    }
}

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, mut other: BigInt) -> BigInt {
        other -= self;
        -other
    }
}
