//! crt.rs - Composite-modulus multiplier via the Chinese Remainder Theorem

use num_bigint::prime::probably_prime;
use num_bigint::{BigInt, ModInverse};

use super::ntt::Multiplier;
use super::polynomial::Polynomial;
use super::roots::PRIMALITY_ROUNDS;
use super::{is_power_of_two, residue};
use crate::error::{validate, Error, Result};

/// Multiplier for a negacyclic ring modulo a product of two primes
///
/// Runs the prime-field multiplier under `p` and under `q` and recombines
/// each coefficient with one Garner step into `Z_pq`.
#[derive(Debug, Clone)]
pub struct CrtMultiplier {
    pq: BigInt,
    p_inv_q: BigInt,
    multiplier_p: Multiplier,
    multiplier_q: Multiplier,
}

impl CrtMultiplier {
    /// Creates a multiplier for `Z_pq[X]/(X^n + 1)`
    ///
    /// Rejects `n` that is not a power of two, composite `p` or `q`, and
    /// `p = q`. The `≡ 1 (mod 2n)` condition is not re-checked here; the
    /// inner prime-field multipliers enforce it.
    pub fn new(n: usize, p: &BigInt, q: &BigInt) -> Result<Self> {
        validate::parameter(is_power_of_two(n), "n", "must be a power of two")?;
        for (name, modulus) in [("p", p), ("q", q)] {
            let unsigned = modulus
                .to_biguint()
                .ok_or_else(|| Error::param(name, "must be positive"))?;
            if !probably_prime(&unsigned, PRIMALITY_ROUNDS) {
                return Err(Error::param(name, "must be prime"));
            }
        }
        validate::parameter(p != q, "q", "moduli must be distinct primes")?;
        let p_inv_q = p
            .mod_inverse(q)
            .ok_or_else(|| Error::param("p", "not invertible modulo q"))?;
        Ok(Self {
            pq: p * q,
            p_inv_q,
            multiplier_p: Multiplier::new(n, p)?,
            multiplier_q: Multiplier::new(n, q)?,
        })
    }

    /// Returns the ring dimension `N`
    pub fn dim(&self) -> usize {
        self.multiplier_p.dim()
    }

    /// Returns the composite modulus `p * q`
    pub fn modulus(&self) -> &BigInt {
        &self.pq
    }

    /// Product of `x` and `y` in `Z_pq[X]/(X^n + 1)`, in symmetric form
    ///
    /// For residues `a = [xy]_p` and `b = [xy]_q`, each coefficient is
    /// lifted as `z = a + p * ((b - a) * p^-1 mod q)`, which satisfies
    /// `z ≡ a (mod p)` and `z ≡ b (mod q)`.
    ///
    /// # Panics
    ///
    /// Panics when the operands do not both have the multiplier's
    /// dimension.
    pub fn mul(&self, x: &Polynomial, y: &Polynomial) -> Polynomial {
        let a = self.multiplier_p.mul(x, y);
        let b = self.multiplier_q.mul(x, y);
        let p = self.multiplier_p.modulus();
        let q = self.multiplier_q.modulus();

        let coeffs = a
            .coeffs
            .iter()
            .zip(&b.coeffs)
            .map(|(ai, bi)| {
                let garner = residue(&((bi - ai) * &self.p_inv_q), q);
                ai + p * garner
            })
            .collect();
        let mut z = Polynomial::from_coeffs(coeffs);
        z.reduce_mod(&self.pq);
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::karatsuba::karatsuba;
    use crate::ring::ntt::tests::random_element;
    use crate::ring::roots::rlwe_prime;
    use num_traits::Zero;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_constructor_rejections() {
        let p = BigInt::from(12289);
        let q = BigInt::from(40961);
        assert!(CrtMultiplier::new(1000, &p, &q).is_err());
        assert!(CrtMultiplier::new(1024, &p, &p).is_err());
        assert!(CrtMultiplier::new(1024, &BigInt::from(12288), &q).is_err());
        assert!(CrtMultiplier::new(1024, &p, &BigInt::from(-7)).is_err());
    }

    #[test]
    fn test_crt_lift_matches_karatsuba() {
        let n = 1 << 10;
        let p = rlwe_prime(100, 2 * n).unwrap();
        let q = rlwe_prime(200, 2 * n).unwrap();
        let m = CrtMultiplier::new(n, &p, &q).unwrap();
        assert_eq!(m.modulus(), &(&p * &q));

        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let x = random_element(n, m.modulus(), &mut rng);
        let y = random_element(n, m.modulus(), &mut rng);

        let mut reference = karatsuba(&x, &y);
        reference.reduce_mod(m.modulus());
        let lifted = m.mul(&x, &y);
        assert_eq!(lifted, reference);
    }

    #[test]
    fn test_crt_residues_agree_with_prime_fields() {
        // 12289 and 40961 are both 1 mod 2048.
        let n = 1024;
        let p = BigInt::from(12289);
        let q = BigInt::from(40961);
        let m = CrtMultiplier::new(n, &p, &q).unwrap();

        let mut rng = ChaCha20Rng::seed_from_u64(22);
        let x = random_element(n, m.modulus(), &mut rng);
        let y = random_element(n, m.modulus(), &mut rng);

        let lifted = m.mul(&x, &y);
        let under_p = Multiplier::new(n, &p).unwrap().mul(&x, &y);
        let under_q = Multiplier::new(n, &q).unwrap().mul(&x, &y);
        for i in 0..n {
            assert!(((&lifted.coeffs[i] - &under_p.coeffs[i]) % &p).is_zero());
            assert!(((&lifted.coeffs[i] - &under_q.coeffs[i]) % &q).is_zero());
        }
    }
}
