//! karatsuba.rs - Reference negacyclic multiplier

use num_bigint::BigInt;
use num_traits::Zero;

use super::is_power_of_two;
use super::polynomial::Polynomial;

/// Negacyclic product of `x` and `y` computed by recursive Karatsuba
///
/// Exact over `Z`, so it serves as the reference for the transform-based
/// multipliers. Costs `O(N^log2 3)`; callers on a hot path should prefer a
/// `Multiplier` or `ZMultiplier`.
///
/// # Panics
///
/// Panics when the operand lengths differ or are not a power of two.
pub fn karatsuba(x: &Polynomial, y: &Polynomial) -> Polynomial {
    assert_eq!(
        x.deg(),
        y.deg(),
        "asymmetric multiplication call: {} vs {}",
        x.deg(),
        y.deg()
    );
    assert!(
        is_power_of_two(x.deg()),
        "karatsuba requires a power-of-two dimension"
    );
    let n = x.deg();
    let conv = karatsuba_rec(&x.coeffs, &y.coeffs);
    // Fold the length-2N convolution back through X^N = -1.
    let coeffs = (0..n).map(|i| &conv[i] - &conv[i + n]).collect();
    Polynomial::from_coeffs(coeffs)
}

/// Full linear convolution of two equal-length slices, returned with
/// length `2l` (the top entry is always zero)
fn karatsuba_rec(x: &[BigInt], y: &[BigInt]) -> Vec<BigInt> {
    let l = x.len();
    if l == 1 {
        return vec![&x[0] * &y[0], BigInt::zero()];
    }
    let half = l / 2;
    let (x_lo, x_hi) = x.split_at(half);
    let (y_lo, y_hi) = y.split_at(half);

    let x_sum: Vec<BigInt> = x_lo.iter().zip(x_hi).map(|(a, b)| a + b).collect();
    let y_sum: Vec<BigInt> = y_lo.iter().zip(y_hi).map(|(a, b)| a + b).collect();

    let z0 = karatsuba_rec(x_lo, y_lo);
    let z1 = karatsuba_rec(&x_sum, &y_sum);
    let z2 = karatsuba_rec(x_hi, y_hi);

    let mut out = vec![BigInt::zero(); 2 * l];
    for i in 0..l {
        out[i] += &z0[i];
        out[i + l] += &z2[i];
        // Cross term z1 - z0 - z2 lands at offset l/2.
        out[i + half] += &z1[i] - &z0[i] - &z2[i];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::ntt::tests::{naive_mul, random_element};
    use crate::ring::roots::rlwe_prime;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_karatsuba_matches_naive_convolution() {
        let n = 256;
        let q = rlwe_prime(15, 2 * n).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let x = random_element(n, &q, &mut rng);
        let y = random_element(n, &q, &mut rng);

        let mut karat = karatsuba(&x, &y);
        karat.reduce_mod(&q);
        let naive = naive_mul(&x, &y, &q);
        assert_eq!(karat, naive);
    }

    #[test]
    fn test_karatsuba_exact_over_z() {
        // Signed inputs, no modulus anywhere: the convolution is exact.
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let n = 64;
        let x = Polynomial::from_coeffs(
            (0..n).map(|_| BigInt::from(rng.gen_range(-1000i64..1000))).collect(),
        );
        let y = Polynomial::from_coeffs(
            (0..n).map(|_| BigInt::from(rng.gen_range(-1000i64..1000))).collect(),
        );

        let karat = karatsuba(&x, &y);
        let mut schoolbook = Polynomial::zero(n).unwrap();
        for (i, xc) in x.coeffs.iter().enumerate() {
            for (j, yc) in y.coeffs.iter().enumerate() {
                let prod = xc * yc;
                if i + j < n {
                    schoolbook.coeffs[i + j] += prod;
                } else {
                    schoolbook.coeffs[i + j - n] -= prod;
                }
            }
        }
        assert_eq!(karat, schoolbook);
    }

    #[test]
    fn test_karatsuba_dimension_one() {
        let x = Polynomial::from_coeffs(vec![BigInt::from(-3)]);
        let y = Polynomial::from_coeffs(vec![BigInt::from(7)]);
        assert_eq!(karatsuba(&x, &y).coeffs, vec![BigInt::from(-21)]);
    }

    #[test]
    #[should_panic(expected = "asymmetric multiplication call")]
    fn test_karatsuba_shape_mismatch() {
        let x = Polynomial::zero(4).unwrap();
        let y = Polynomial::zero(8).unwrap();
        karatsuba(&x, &y);
    }

    #[test]
    #[should_panic(expected = "power-of-two")]
    fn test_karatsuba_rejects_odd_dimension() {
        let x = Polynomial::from_coeffs(vec![BigInt::zero(); 6]);
        let y = Polynomial::from_coeffs(vec![BigInt::zero(); 6]);
        karatsuba(&x, &y);
    }
}
