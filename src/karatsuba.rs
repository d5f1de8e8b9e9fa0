use crate::error::Error;
use crate::BigInt;
use tracing::{debug, instrument};

/// Digit count at or below which operands are multiplied directly.
///
/// This is also the smallest usable threshold: with `n = 3` the `(p + q)(r + s)` product would
/// recurse with a hint of `m + 1 = 3` again.
pub const BASE_CASE_DIGITS: usize = 3;

/// Multiplies two non-negative integers using the default [`Karatsuba`] configuration.
///
/// `digit_hint` must be at least the larger operand's decimal digit length; `None` computes it.
pub fn karatsuba_mul(a: &BigInt, b: &BigInt, digit_hint: Option<usize>) -> Result<BigInt, Error> {
    Karatsuba::new().multiply(a, b, digit_hint)
}

/// Base-10 Karatsuba multiplier.
///
/// Each level splits both operands at `m = (n + 1) / 2` decimal digits into `high * 10^m + low`
/// and recombines three half-size products:
///
/// ```text
/// a * b = pr * 10^(2m) + ((p + q)(r + s) - pr - qs) * 10^m + qs
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Karatsuba {
    base_case_digits: usize,
    parallel_min_digits: Option<usize>,
}

impl Default for Karatsuba {
    fn default() -> Self {
        Karatsuba::new()
    }
}

impl Karatsuba {
    pub const fn new() -> Self {
        Karatsuba {
            base_case_digits: BASE_CASE_DIGITS,
            parallel_min_digits: None,
        }
    }

    pub fn with_base_case_digits(self, digits: usize) -> Result<Self, Error> {
        if digits < BASE_CASE_DIGITS {
            return Err(Error::InvalidBaseCase {
                digits,
                min: BASE_CASE_DIGITS,
            });
        }
        Ok(Karatsuba {
            base_case_digits: digits,
            ..self
        })
    }

    /// Computes the three sub-products on the rayon pool whenever the current digit count is at
    /// least `digits`.
    #[cfg(feature = "parallel")]
    pub fn with_parallel_min_digits(self, digits: usize) -> Self {
        Karatsuba {
            parallel_min_digits: Some(digits),
            ..self
        }
    }

    pub fn base_case_digits(&self) -> usize {
        self.base_case_digits
    }

    /// Returns `a * b`.
    ///
    /// Fails if either operand is negative, or if `digit_hint` is smaller than the larger
    /// operand's digit length.
    #[instrument(
        skip_all,
        name = "karatsuba::multiply",
        level = "debug",
        fields(n = tracing::field::Empty)
    )]
    pub fn multiply(
        &self,
        a: &BigInt,
        b: &BigInt,
        digit_hint: Option<usize>,
    ) -> Result<BigInt, Error> {
        for (name, operand) in [("a", a), ("b", b)] {
            if operand.is_negative() {
                debug!(operand = name, "rejecting negative operand");
                return Err(Error::InvalidOperand { name });
            }
        }
        let required = std::cmp::max(a.digit_length(), b.digit_length());
        let n = match digit_hint {
            Some(hint) if hint < required => {
                debug!(hint, required, "rejecting digit hint below operand length");
                return Err(Error::InvalidDigitHint { hint, required });
            }
            _ => required,
        };
        // Any accepted hint is an upper bound, so recursing on the tight one gives the same
        // product without splitting runs of leading zeros.
        tracing::Span::current().record("n", &n);
        Ok(self.mul_digits(a, b, n))
    }

    // Precondition: a, b >= 0 and both have at most n digits.
    fn mul_digits(&self, a: &BigInt, b: &BigInt, n: usize) -> BigInt {
        if n <= self.base_case_digits {
            return a * b;
        }
        let m = n / 2 + n % 2;
        let (p, q) = a.split_at_digit(m);
        let (r, s) = b.split_at_digit(m);
        // p + q and r + s may carry into an (m + 1)-th digit.
        let (pr, qs, y) = join3(
            self.parallel_min_digits.map_or(false, |min| n >= min),
            || self.mul_digits(&p, &r, m),
            || self.mul_digits(&q, &s, m),
            || self.mul_digits(&(&p + &q), &(&r + &s), m + 1),
        );
        let cross = y - &pr - &qs;
        pr.mul_pow10(2 * m) + cross.mul_pow10(m) + qs
    }
}

#[cfg(feature = "parallel")]
fn join3<A, B, C, RA, RB, RC>(parallel: bool, a: A, b: B, c: C) -> (RA, RB, RC)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    C: FnOnce() -> RC + Send,
    RA: Send,
    RB: Send,
    RC: Send,
{
    if parallel {
        let (ra, (rb, rc)) = rayon::join(a, || rayon::join(b, c));
        (ra, rb, rc)
    } else {
        (a(), b(), c())
    }
}

#[cfg(not(feature = "parallel"))]
fn join3<A, B, C, RA, RB, RC>(_parallel: bool, a: A, b: B, c: C) -> (RA, RB, RC)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
    C: FnOnce() -> RC,
{
    (a(), b(), c())
}
