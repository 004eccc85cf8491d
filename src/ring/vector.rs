//! vector.rs - Small-coefficient ring elements

use num_bigint::BigInt;
use zeroize::Zeroize;

use super::polynomial::Polynomial;

/// A ring element with machine-sized coefficients
///
/// Used as the lightweight operand for ternary secrets and sparse noise,
/// where full arbitrary-precision coefficients would be wasted.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Vector {
    /// Coefficients of the vector, constant term first
    pub coeffs: Vec<i64>,
}

impl Vector {
    /// Creates a zero vector of the given length
    pub fn zero(len: usize) -> Self {
        Self {
            coeffs: vec![0; len],
        }
    }

    /// Wraps an existing coefficient sequence
    pub fn from_coeffs(coeffs: Vec<i64>) -> Self {
        Self { coeffs }
    }

    /// Returns the length of the vector
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true when the vector has no coefficients
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Widens every entry into an arbitrary-precision coefficient
    pub fn to_polynomial(&self) -> Polynomial {
        Polynomial::from_coeffs(self.coeffs.iter().map(|&c| BigInt::from(c)).collect())
    }

    /// Returns the number of non-zero coordinates
    pub fn hamming_weight(&self) -> usize {
        self.coeffs.iter().filter(|&&c| c != 0).count()
    }

    /// Negacyclic product of two small-coefficient vectors
    ///
    /// Accumulates in machine integers, which is safe for the ternary
    /// operands this type is meant for, and widens only the result.
    ///
    /// # Panics
    ///
    /// Panics when the operand lengths differ.
    pub fn mul_simple(&self, other: &Vector) -> Polynomial {
        assert_eq!(
            self.len(),
            other.len(),
            "incompatible multiplication: {} vs {}",
            self.len(),
            other.len()
        );
        let dim = self.len();
        let mut acc = vec![0i64; dim];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                let index = i + j;
                if index < dim {
                    acc[index] += a * b;
                } else {
                    acc[index - dim] -= a * b;
                }
            }
        }
        Vector::from_coeffs(acc).to_polynomial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_polynomial() {
        let v = Vector::from_coeffs(vec![1, -1, 0, 7]);
        let p = v.to_polynomial();
        assert_eq!(p.deg(), 4);
        assert_eq!(p.coeffs[3], BigInt::from(7));
        assert_eq!(p.coeffs[1], BigInt::from(-1));
    }

    #[test]
    fn test_hamming_weight() {
        assert_eq!(Vector::zero(16).hamming_weight(), 0);
        let v = Vector::from_coeffs(vec![1, 0, -1, 0, 1, 0, 0, 0]);
        assert_eq!(v.hamming_weight(), 3);
    }

    #[test]
    fn test_mul_simple_negacyclic_fold() {
        // (1 + X^3) * (1 + X) in Z[X]/(X^4+1):
        // 1 + X + X^3 + X^4 = X + X^3
        let a = Vector::from_coeffs(vec![1, 0, 0, 1]);
        let b = Vector::from_coeffs(vec![1, 1, 0, 0]);
        let p = a.mul_simple(&b);
        let expected: Vec<i64> = vec![0, 1, 0, 1];
        for (c, e) in p.coeffs.iter().zip(expected) {
            assert_eq!(*c, BigInt::from(e));
        }
    }

    #[test]
    fn test_mul_simple_matches_polynomial_path() {
        let a = Vector::from_coeffs(vec![1, -1, 0, 1, 0, 0, -1, 1]);
        let b = Vector::from_coeffs(vec![0, 1, 1, 0, -1, 0, 1, 0]);
        let via_vectors = a.mul_simple(&b);
        let via_polynomial = a.to_polynomial().mul_simple(&b);
        assert_eq!(via_vectors, via_polynomial);
    }

    #[test]
    #[should_panic(expected = "incompatible multiplication")]
    fn test_mul_simple_shape_mismatch() {
        let a = Vector::zero(4);
        let b = Vector::zero(8);
        a.mul_simple(&b);
    }
}
