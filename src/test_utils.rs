use crate::low_level::RADIX;
use crate::BigInt;
use proptest::prelude::*;
pub fn any_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    (
        proptest::collection::vec(0..RADIX, range),
        any::<bool>(),
    )
        .prop_map(|(digits, negative)| BigInt { digits, negative }.normalize())
}
pub fn nonnegative_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(0..RADIX, range).prop_map(|digits| {
        BigInt {
            digits,
            negative: false,
        }
        .normalize()
    })
}
// Leading zeros are allowed.
pub fn decimal_string(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}
pub fn reference_product(a: &str, b: &str) -> String {
    let a: num_bigint::BigInt = a.parse().unwrap();
    let b: num_bigint::BigInt = b.parse().unwrap();
    (a * b).to_string()
}
