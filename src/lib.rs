//! Arithmetic in negacyclic polynomial rings for ring-LWE lattice cryptography
//!
//! This crate implements exact arithmetic in the rings `R = Z[X]/(X^N + 1)`,
//! `R_p = Z_p[X]/(X^N + 1)` and `R_pq = Z_pq[X]/(X^N + 1)`, for `N` a power
//! of two and primes `p, q ≡ 1 (mod 2N)`. Coefficients are
//! arbitrary-precision signed integers throughout.
//!
//! Multiplication in `R_p` uses a negative-wrapped Number-Theoretic
//! Transform with cached twiddle tables, multiplication in `R_pq` lifts two
//! prime-field products through the Chinese Remainder Theorem, and
//! multiplication in `R` derives an NTT-friendly prime large enough to
//! recover the exact integer result. A Karatsuba path is kept as a
//! reference multiplier.
//!
//! # Example
//!
//! ```
//! use negacyclic::{Multiplier, Polynomial};
//! use num_bigint::BigInt;
//!
//! let q = BigInt::from(12289);
//! let m = Multiplier::new(1024, &q).unwrap();
//! let x = Polynomial::zero(1024).unwrap();
//! let product = m.mul(&x, &x);
//! assert_eq!(product, x);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Ring arithmetic
pub mod ring;
pub use ring::crt::CrtMultiplier;
pub use ring::karatsuba::karatsuba;
pub use ring::ntt::Multiplier;
pub use ring::polynomial::Polynomial;
pub use ring::roots::{find_primitive_root_of_unity, rlwe_prime};
pub use ring::sampling::{dg, hwt, uniform_mod, zo, zo_naive};
pub use ring::vector::Vector;
pub use ring::zmul::ZMultiplier;
