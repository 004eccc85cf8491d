//! polynomial.rs - Arbitrary-precision polynomial container

use core::fmt;
use core::ops::{Add, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use zeroize::Zeroize;

use super::vector::Vector;
use super::{is_power_of_two, residue};
use crate::error::{validate, Error, Result};

/// A polynomial in a negacyclic ring `Z[X]/(X^N + 1)`
///
/// The length of `coeffs` is the ring dimension `N` and never changes after
/// construction. `coeffs[i]` is the coefficient of `X^i`.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    /// Coefficients of the polynomial, constant term first
    pub coeffs: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a zero polynomial of the given ring dimension
    ///
    /// Rejects dimensions that are not a power of two; the negacyclic
    /// multipliers are only defined for those.
    pub fn zero(degree: usize) -> Result<Self> {
        validate::parameter(is_power_of_two(degree), "degree", "must be a power of two")?;
        Ok(Self {
            coeffs: vec![BigInt::zero(); degree],
        })
    }

    /// Wraps an existing coefficient sequence
    pub fn from_coeffs(coeffs: Vec<BigInt>) -> Self {
        Self { coeffs }
    }

    /// Returns the ring dimension `N`
    ///
    /// By convention this is the coefficient count, not the algebraic
    /// degree; the zero polynomial of dimension `N` reports `N`.
    pub fn deg(&self) -> usize {
        self.coeffs.len()
    }

    /// Reduces every coefficient into the symmetric interval `(-q/2, q/2]`
    ///
    /// Takes the non-negative residue first, then recenters.
    pub fn reduce_mod(&mut self, q: &BigInt) {
        let half: BigInt = q >> 1usize;
        for c in self.coeffs.iter_mut() {
            let mut r = residue(c, q);
            if r > half {
                r -= q;
            }
            *c = r;
        }
    }

    /// Computes `round(c_i / scale)` for every coefficient, rounding halves
    /// away from zero. Rejects `scale = 0`.
    pub fn scale_nearest(&self, scale: &BigInt) -> Result<Polynomial> {
        if scale.is_zero() {
            return Err(Error::param("scale", "division by zero"));
        }
        let scale_abs = scale.abs();
        let mut coeffs = Vec::with_capacity(self.deg());
        for c in &self.coeffs {
            let mut quo = c / scale;
            let rem = c % scale;
            if (rem.abs() << 1usize) >= scale_abs {
                if c.is_negative() == scale.is_negative() {
                    quo += BigInt::from(1);
                } else {
                    quo -= BigInt::from(1);
                }
            }
            coeffs.push(quo);
        }
        Ok(Polynomial { coeffs })
    }

    /// Negates every coefficient in place
    pub fn negate(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = -&*c;
        }
    }

    /// Multiplies every coefficient by `scalar` in place
    pub fn scale(&mut self, scalar: &BigInt) {
        for c in self.coeffs.iter_mut() {
            *c = &*c * scalar;
        }
    }

    /// Returns the infinity norm, `max_i |c_i|`
    pub fn norm_infinity(&self) -> BigInt {
        let mut norm = BigInt::zero();
        for c in &self.coeffs {
            let abs = c.abs();
            if abs > norm {
                norm = abs;
            }
        }
        norm
    }

    /// Negacyclic product with a small-coefficient vector
    ///
    /// Schoolbook convolution folded at the length-`N` boundary, with fast
    /// paths for the ternary entries `0` and `±1`. Cheaper than widening
    /// `v` and going through a transform when `v` is sparse or ternary.
    ///
    /// # Panics
    ///
    /// Panics when the operand lengths differ.
    pub fn mul_simple(&self, v: &Vector) -> Polynomial {
        assert_eq!(
            self.deg(),
            v.len(),
            "incompatible multiplication: {} vs {}",
            self.deg(),
            v.len()
        );
        let dim = self.deg();
        let mut coeffs = vec![BigInt::zero(); dim];
        for (i, &vc) in v.coeffs.iter().enumerate() {
            if vc == 0 {
                continue;
            }
            for (j, pc) in self.coeffs.iter().enumerate() {
                let term = match vc {
                    1 => pc.clone(),
                    -1 => -pc,
                    _ => pc * BigInt::from(vc),
                };
                let index = i + j;
                if index < dim {
                    coeffs[index] += term;
                } else {
                    coeffs[index - dim] -= term;
                }
            }
        }
        Polynomial { coeffs }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for c in &self.coeffs {
            write!(f, "{} ", c)?;
        }
        write!(f, "]")
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Polynomial {
        assert_eq!(
            self.deg(),
            other.deg(),
            "incompatible addition: {} vs {}",
            self.deg(),
            other.deg()
        );
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a + b)
            .collect();
        Polynomial { coeffs }
    }
}

impl Add<&Vector> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Vector) -> Polynomial {
        assert_eq!(
            self.deg(),
            other.len(),
            "incompatible addition: {} vs {}",
            self.deg(),
            other.len()
        );
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, &b)| a + BigInt::from(b))
            .collect();
        Polynomial { coeffs }
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Polynomial {
        assert_eq!(
            self.deg(),
            other.deg(),
            "incompatible subtraction: {} vs {}",
            self.deg(),
            other.deg()
        );
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| a - b)
            .collect();
        Polynomial { coeffs }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let coeffs = self.coeffs.iter().map(|c| -c).collect();
        Polynomial { coeffs }
    }
}
