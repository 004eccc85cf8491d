//! sampling.rs - Coefficient samplers for ring-LWE keys and noise
//!
//! Everything here draws from a caller-supplied cryptographic generator
//! and reports entropy failures instead of masking them. The public
//! parameter searches (`rlwe_prime`, root finding) live in `roots` and are
//! deliberately non-cryptographic.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::{CryptoRng, Rng, RngCore};
use rand_distr::StandardNormal;

use super::polynomial::Polynomial;
use super::vector::Vector;
use crate::error::{validate, Error, Result};

fn entropy_err(source: &'static str, err: rand::Error) -> Error {
    Error::Entropy {
        source,
        details: err.to_string(),
    }
}

/// Uniform index in `[0, bound)` by rejection over 64-bit draws
fn sample_index<R: RngCore + CryptoRng>(
    bound: usize,
    source: &'static str,
    rng: &mut R,
) -> Result<usize> {
    let bound = bound as u64;
    let zone = u64::MAX - u64::MAX % bound;
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| entropy_err(source, e))?;
        let x = u64::from_le_bytes(buf);
        if x < zone {
            return Ok((x % bound) as usize);
        }
    }
}

/// Samples a polynomial with coefficients uniform in `[0, q)`
///
/// Rejection sampling over big-endian byte draws of `bits(q)` bits; the
/// acceptance rate is at least one half per coefficient.
pub fn uniform_mod<R: RngCore + CryptoRng>(
    deg: usize,
    q: &BigInt,
    rng: &mut R,
) -> Result<Polynomial> {
    let unsigned = q
        .to_biguint()
        .filter(|u| !u.is_zero())
        .ok_or_else(|| Error::param("q", "modulus must be positive"))?;
    let bits = unsigned.bits() as usize;
    let nbytes = bits.div_ceil(8);
    let mask = 0xFFu8 >> (nbytes * 8 - bits);

    let mut out = Polynomial::zero(deg)?;
    let mut buf = vec![0u8; nbytes];
    for c in out.coeffs.iter_mut() {
        loop {
            rng.try_fill_bytes(&mut buf)
                .map_err(|e| entropy_err("uniform_mod", e))?;
            buf[0] &= mask;
            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < unsigned {
                *c = BigInt::from(candidate);
                break;
            }
        }
    }
    Ok(out)
}

/// Samples a uniform `{0, ±1}` vector with Hamming weight exactly `hamming`
///
/// Rejects positions already taken, so every support set of size `hamming`
/// is equally likely; each non-zero entry gets a fair sign.
pub fn hwt<R: RngCore + CryptoRng>(dim: usize, hamming: usize, rng: &mut R) -> Result<Vector> {
    validate::parameter(hamming <= dim, "hamming", "impossible hamming weight")?;
    let mut out = Vector::zero(dim);
    let mut placed = 0;
    while placed < hamming {
        let index = sample_index(dim, "hwt", rng)?;
        if out.coeffs[index] != 0 {
            continue;
        }
        let mut coin = [0u8; 1];
        rng.try_fill_bytes(&mut coin)
            .map_err(|e| entropy_err("hwt", e))?;
        out.coeffs[index] = if coin[0] & 1 == 0 { 1 } else { -1 };
        placed += 1;
    }
    Ok(out)
}

/// Samples a `{0, ±1}` vector where each entry is `+1`, `0` or `-1` with
/// probability `rho/2`, `1 - rho` and `rho/2`
///
/// The two-bits-per-entry layout realizes `rho = 1/2` exactly; any other
/// density is rejected. Use [`zo_naive`] for general `rho`.
pub fn zo<R: RngCore + CryptoRng>(dim: usize, rho: f64, rng: &mut R) -> Result<Vector> {
    if rho != 0.5 {
        return Err(Error::param("rho", "two-bit layout supports rho = 1/2 only; use zo_naive"));
    }
    let mut out = Vector::zero(dim);
    let mut bytes = vec![0u8; dim.div_ceil(4)];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| entropy_err("zo", e))?;

    let mut index = 0;
    'fill: for byte in bytes {
        let mut b = byte;
        for _ in 0..4 {
            if index >= dim {
                break 'fill;
            }
            match b & 0x03 {
                0x01 => out.coeffs[index] = 1,
                0x02 => out.coeffs[index] = -1,
                _ => {}
            }
            index += 1;
            b >>= 2;
        }
    }
    Ok(out)
}

/// General-density variant of [`zo`]
///
/// Places `floor(rho * dim)` entries of each sign at uniform free
/// positions. Densities that cannot fit are rejected.
pub fn zo_naive<R: RngCore + CryptoRng>(dim: usize, rho: f64, rng: &mut R) -> Result<Vector> {
    if !(0.0..=1.0).contains(&rho) {
        return Err(Error::param("rho", "must lie in [0, 1]"));
    }
    let per_sign = (rho * dim as f64) as usize;
    if 2 * per_sign > dim {
        return Err(Error::param("rho", "too dense for the requested dimension"));
    }
    let mut out = Vector::zero(dim);
    for sign in [1i64, -1] {
        let mut placed = 0;
        while placed < per_sign {
            let index = sample_index(dim, "zo_naive", rng)?;
            if out.coeffs[index] != 0 {
                continue;
            }
            out.coeffs[index] = sign;
            placed += 1;
        }
    }
    Ok(out)
}

/// Samples a vector whose entries are rounded draws from the Gaussian of
/// mean 0 and variance `sigma`
pub fn dg<R: RngCore + CryptoRng>(dim: usize, sigma: f64, rng: &mut R) -> Result<Vector> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(Error::param("sigma", "must be a non-negative finite variance"));
    }
    let spread = sigma.sqrt();
    let mut out = Vector::zero(dim);
    for c in out.coeffs.iter_mut() {
        let z: f64 = rng.sample(StandardNormal);
        *c = (z * spread).round() as i64;
    }
    Ok(out)
}
