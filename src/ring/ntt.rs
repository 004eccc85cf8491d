//! ntt.rs - Negative-wrapped Number-Theoretic Transform multiplier
//!
//! Forward transform is Cooley-Tukey decimation-in-time, inverse is
//! Gentleman-Sande decimation-in-frequency. Both twiddle tables hold powers
//! of a primitive `2N`-th root of unity in bit-reversed order, which folds
//! the negacyclic twist into the butterflies.
//!
//! See Longa & Naehrig, "Speeding up the Number Theoretic Transform for
//! Faster Ideal Lattice-Based Cryptography".

use num_bigint::prime::probably_prime;
use num_bigint::{BigInt, ModInverse};
use num_traits::{One, Signed};

use super::polynomial::Polynomial;
use super::roots::{find_primitive_root_of_unity, roots_of_unity_bit_reverse, PRIMALITY_ROUNDS};
use super::{is_power_of_two, residue};
use crate::error::{validate, Error, Result};

/// Multiplier for a negacyclic ring with a prime modulus
///
/// Immutable after construction: the twiddle tables are computed once per
/// `(N, q)` pair and shared read-only, so a multiplier can serve concurrent
/// `mul` calls on disjoint polynomials.
#[derive(Debug, Clone)]
pub struct Multiplier {
    n: usize,
    modulus: BigInt,
    n_inv: BigInt,
    roots: Vec<BigInt>,
    inv_roots: Vec<BigInt>,
}

/// Modular addition of residues in `[0, q)`
#[inline]
fn add_mod(u: &BigInt, v: &BigInt, q: &BigInt) -> BigInt {
    let t = u + v;
    if &t >= q {
        t - q
    } else {
        t
    }
}

/// Modular subtraction of residues in `[0, q)`
#[inline]
fn sub_mod(u: &BigInt, v: &BigInt, q: &BigInt) -> BigInt {
    let t = u - v;
    if t.is_negative() {
        t + q
    } else {
        t
    }
}

impl Multiplier {
    /// Creates a multiplier for `Z_q[X]/(X^n + 1)`
    ///
    /// Rejects `n` that is not a power of two, composite `q`, and `q` not
    /// congruent to `1 (mod 2n)`; the last condition is what guarantees a
    /// primitive `2n`-th root of unity exists.
    pub fn new(n: usize, modulus: &BigInt) -> Result<Self> {
        validate::parameter(is_power_of_two(n), "n", "must be a power of two")?;
        let unsigned = modulus
            .to_biguint()
            .ok_or_else(|| Error::param("modulus", "must be positive"))?;
        validate::parameter(
            probably_prime(&unsigned, PRIMALITY_ROUNDS),
            "modulus",
            "must be prime",
        )?;
        validate::parameter(
            modulus % BigInt::from(2 * n) == BigInt::one(),
            "modulus",
            "must satisfy q = 1 mod 2n",
        )?;

        let n_big = BigInt::from(n);
        let n_inv = (&n_big)
            .mod_inverse(modulus)
            .ok_or_else(|| Error::param("n", "not invertible modulo q"))?;

        let g = find_primitive_root_of_unity(2 * n, modulus);
        let g_inv = (&g)
            .mod_inverse(modulus)
            .ok_or_else(|| Error::param("modulus", "root of unity not invertible"))?;

        Ok(Self {
            n,
            modulus: modulus.clone(),
            n_inv,
            roots: roots_of_unity_bit_reverse(n, &g, modulus),
            inv_roots: roots_of_unity_bit_reverse(n, &g_inv, modulus),
        })
    }

    /// Returns the ring dimension `N`
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns the prime modulus `q`
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// In-place forward transform; output is in bit-reversed order
    ///
    /// Coefficients are first normalized into `[0, q)`, so arbitrary
    /// integer inputs yield the transform of their residue class. All
    /// intermediate values stay within `[0, q)`.
    ///
    /// # Panics
    ///
    /// Panics when `a` does not have the multiplier's dimension.
    pub fn ntt(&self, a: &mut Polynomial) {
        assert_eq!(
            a.deg(),
            self.n,
            "transform expects dimension {}, got {}",
            self.n,
            a.deg()
        );
        let q = &self.modulus;
        for c in a.coeffs.iter_mut() {
            *c = residue(c, q);
        }

        let mut t = self.n;
        let mut m = 1;
        while m < self.n {
            t /= 2;
            for i in 0..m {
                let s = &self.roots[m + i];
                let j1 = 2 * i * t;
                for j in j1..j1 + t {
                    let u = a.coeffs[j].clone();
                    let v = (&a.coeffs[j + t] * s) % q;
                    a.coeffs[j] = add_mod(&u, &v, q);
                    a.coeffs[j + t] = sub_mod(&u, &v, q);
                }
            }
            m *= 2;
        }
    }

    /// In-place inverse transform; undoes `ntt` including the bit-reversal
    ///
    /// The Gentleman-Sande butterfly applies the twiddle after the
    /// subtraction, and the final pass scales by `n^-1 mod q`.
    ///
    /// # Panics
    ///
    /// Panics when `a` does not have the multiplier's dimension.
    pub fn intt(&self, a: &mut Polynomial) {
        assert_eq!(
            a.deg(),
            self.n,
            "transform expects dimension {}, got {}",
            self.n,
            a.deg()
        );
        let q = &self.modulus;
        for c in a.coeffs.iter_mut() {
            *c = residue(c, q);
        }

        let mut t = 1;
        let mut m = self.n;
        while m > 1 {
            let h = m / 2;
            let mut j1 = 0;
            for i in 0..h {
                let s = &self.inv_roots[h + i];
                for j in j1..j1 + t {
                    let u = a.coeffs[j].clone();
                    let v = a.coeffs[j + t].clone();
                    a.coeffs[j] = add_mod(&u, &v, q);
                    a.coeffs[j + t] = (sub_mod(&u, &v, q) * s) % q;
                }
                j1 += 2 * t;
            }
            t *= 2;
            m = h;
        }

        for c in a.coeffs.iter_mut() {
            *c = (&*c * &self.n_inv) % q;
        }
    }

    /// Element-wise product modulo `q`
    ///
    /// # Panics
    ///
    /// Panics when the operand lengths differ.
    pub fn hadamard(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        assert_eq!(
            a.deg(),
            b.deg(),
            "asymmetric multiplication call: {} vs {}",
            a.deg(),
            b.deg()
        );
        let q = &self.modulus;
        let coeffs = a
            .coeffs
            .iter()
            .zip(&b.coeffs)
            .map(|(x, y)| residue(&(x * y), q))
            .collect();
        Polynomial::from_coeffs(coeffs)
    }

    /// Product of `x` and `y` in `Z_q[X]/(X^n + 1)`, in symmetric form
    ///
    /// The inputs are never mutated: the in-place transforms run on deep
    /// copies. Safe to call with `x` and `y` aliased.
    ///
    /// # Panics
    ///
    /// Panics when the operands do not both have the multiplier's
    /// dimension.
    pub fn mul(&self, x: &Polynomial, y: &Polynomial) -> Polynomial {
        assert_eq!(
            x.deg(),
            y.deg(),
            "asymmetric multiplication call: {} vs {}",
            x.deg(),
            y.deg()
        );
        let mut a = x.clone();
        let mut b = y.clone();
        self.ntt(&mut a);
        self.ntt(&mut b);
        let mut c = self.hadamard(&a, &b);
        self.intt(&mut c);
        c.reduce_mod(&self.modulus);
        c
    }
}
