//! Negacyclic ring arithmetic
//!
//! Containers and multipliers for the rings `Z[X]/(X^N + 1)`,
//! `Z_p[X]/(X^N + 1)` and `Z_pq[X]/(X^N + 1)`, together with the number
//! theory and sampling routines they depend on.

use num_bigint::BigInt;
use num_traits::Signed;

pub mod crt;
pub mod karatsuba;
pub mod ntt;
pub mod polynomial;
pub mod roots;
pub mod sampling;
pub mod vector;
pub mod zmul;

/// Check if `n` is a power of two
pub(crate) fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Non-negative residue of `c` modulo `q > 0`
pub(crate) fn residue(c: &BigInt, q: &BigInt) -> BigInt {
    let r = c % q;
    if r.is_negative() {
        r + q
    } else {
        r
    }
}
