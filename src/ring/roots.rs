//! roots.rs - Roots of unity and NTT-friendly prime search

use num_bigint::prime::probably_prime;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::One;

use super::residue;
use crate::error::{Error, Result};

/// Miller-Rabin rounds used for every probabilistic primality check.
pub(crate) const PRIMALITY_ROUNDS: usize = 32;

/// Finds a primitive `m`-th root of unity modulo `q`
///
/// Returns `g` with `g^m ≡ 1 (mod q)` and `g^(m/2) ≢ 1 (mod q)`. Candidates
/// are random field elements raised to `(q-1)/m`, retried until the
/// half-order check passes; roughly half of all candidates succeed, so the
/// expected number of rounds is two.
///
/// The search is randomized with a non-cryptographic generator; roots of
/// unity are public parameters.
///
/// Preconditions: `q` is prime, `m` is even and divides `q - 1`. On inputs
/// violating these the search may never terminate.
pub fn find_primitive_root_of_unity(m: usize, q: &BigInt) -> BigInt {
    let one = BigInt::one();
    let exponent = (q - &one) / BigInt::from(m);
    let half_order = BigInt::from(m / 2);
    let lower = BigInt::from(2);
    let mut rng = rand::thread_rng();
    loop {
        let base = rng.gen_bigint_range(&lower, q);
        let candidate = base.modpow(&exponent, q);
        if candidate.modpow(&half_order, q) != one {
            return candidate;
        }
    }
}

/// Samples a probable prime of at least `bit_len` bits with `q ≡ 1 (mod n)`
///
/// The candidate starts at `n * 2^(bit_len - bitlen(n)) + 1` and steps by
/// `n` until it passes Miller-Rabin, so the congruence holds by
/// construction. This prime is not sampled with a cryptographic generator
/// and MUST NOT be used as a secret value.
pub fn rlwe_prime(bit_len: usize, n: usize) -> Result<BigInt> {
    if n == 0 {
        return Err(Error::param("n", "must be positive"));
    }
    let n_bits = (usize::BITS - n.leading_zeros()) as usize;
    let shift = bit_len
        .checked_sub(n_bits)
        .ok_or_else(|| Error::param("bit_len", "smaller than the bit length of n"))?;
    let step = BigUint::from(n);
    let mut prime = (BigUint::one() << shift) * &step + BigUint::one();
    while !probably_prime(&prime, PRIMALITY_ROUNDS) {
        prime += &step;
    }
    Ok(BigInt::from(prime))
}

/// Tabulates `g^bitrev(i, log2 n) mod q` for `i` in `[0, n)`
///
/// The butterflies consume the table as `roots[m + i]`, which is why the
/// powers are stored in bit-reversed order.
pub(crate) fn roots_of_unity_bit_reverse(n: usize, g: &BigInt, q: &BigInt) -> Vec<BigInt> {
    let log_n = n.trailing_zeros();
    let mut table = vec![BigInt::one(); n];
    let mut power = BigInt::one();
    for i in 0..n {
        table[bit_reverse(i, log_n)] = power.clone();
        power = residue(&(&power * g), q);
    }
    table
}

/// Reverses the low `bits` bits of `i`
fn bit_reverse(i: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - bits)
}
