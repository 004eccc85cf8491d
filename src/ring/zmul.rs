//! zmul.rs - Exact integer multiplier over Z[X]/(X^N + 1)

use num_bigint::prime::probably_prime;
use num_bigint::BigInt;
use num_traits::One;

use super::is_power_of_two;
use super::ntt::Multiplier;
use super::polynomial::Polynomial;
use super::roots::PRIMALITY_ROUNDS;
use crate::error::{validate, Result};

/// Multiplier for the integer ring `Z[X]/(X^n + 1)`
///
/// Picks, per call, a prime exceeding the coefficient bound of the product
/// and delegates to the NTT multiplier; the symmetric representative
/// modulo that prime is the exact integer result.
#[derive(Debug, Clone)]
pub struct ZMultiplier {
    n: usize,
}

fn is_probable_prime(x: &BigInt) -> bool {
    match x.to_biguint() {
        Some(unsigned) => probably_prime(&unsigned, PRIMALITY_ROUNDS),
        None => false,
    }
}

impl ZMultiplier {
    /// Creates a multiplier for `Z[X]/(X^n + 1)`
    ///
    /// Rejects `n` that is not a power of two.
    pub fn new(n: usize) -> Result<Self> {
        validate::parameter(is_power_of_two(n), "n", "must be a power of two")?;
        Ok(Self { n })
    }

    /// Returns the ring dimension `N`
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Exact product of `x` and `y` in `Z[X]/(X^n + 1)`
    ///
    /// The negacyclic product has coefficients bounded by
    /// `n * |x|_inf * |y|_inf` in absolute value, so the candidate prime
    /// starts at `2n * |x|_inf * |y|_inf + 1` and steps by `2n` until it
    /// passes Miller-Rabin. Stepping by `2n` keeps every candidate
    /// congruent to `1 (mod 2n)`, which is exactly the NTT precondition.
    ///
    /// # Panics
    ///
    /// Panics when the operands do not both have the multiplier's
    /// dimension.
    pub fn mul(&self, x: &Polynomial, y: &Polynomial) -> Result<Polynomial> {
        assert_eq!(
            x.deg(),
            y.deg(),
            "asymmetric multiplication call: {} vs {}",
            x.deg(),
            y.deg()
        );
        assert_eq!(
            x.deg(),
            self.n,
            "multiplication expects dimension {}, got {}",
            self.n,
            x.deg()
        );
        let step = BigInt::from(2 * self.n);
        let mut prime = &step * x.norm_infinity() * y.norm_infinity() + BigInt::one();
        while !is_probable_prime(&prime) {
            prime += &step;
        }
        let multiplier = Multiplier::new(self.n, &prime)?;
        Ok(multiplier.mul(x, y))
    }
}
