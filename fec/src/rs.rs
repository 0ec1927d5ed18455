//! Systematic, erasure-only Reed–Solomon codec over [`crate::gf`].
//!
//! Codewords are plain byte sequences in wire order: position `i` of a
//! length-`n` codeword is the coefficient of `x^(n-1-i)` in the codeword
//! polynomial. This lines up with the "data first, parity last" layout a
//! caller actually transmits.

use crate::gf::{self, FecError, Result, GENERATOR};

/// Systematic encode: `data` (length `k`) followed by `nsym` parity bytes.
///
/// Parity is `data(x)·x^nsym mod g(x)`, computed by synthetic division in
/// place — the classic in-place long-division trick for systematic RS.
pub fn encode(data: &[u8], nsym: usize) -> Vec<u8> {
    if nsym == 0 {
        return data.to_vec();
    }
    let mut gen = gf::generator_poly(nsym);
    gen.reverse(); // now MSB-first: gen[0] == 1 (leading/highest-degree coefficient)

    let mut buf = vec![0u8; data.len() + nsym];
    buf[..data.len()].copy_from_slice(data);
    for i in 0..data.len() {
        let coef = buf[i];
        if coef != 0 {
            for (j, &gj) in gen.iter().enumerate().skip(1) {
                buf[i + j] ^= gf::mul(gj, coef);
            }
        }
    }

    let mut out = Vec::with_capacity(data.len() + nsym);
    out.extend_from_slice(data);
    out.extend_from_slice(&buf[data.len()..]);
    out
}

fn poly_eval_codeword(codeword: &[u8], x: u8) -> u8 {
    let mut y = 0u8;
    for &c in codeword {
        y = gf::mul(y, x) ^ c;
    }
    y
}

fn syndromes(codeword: &[u8], nsym: usize) -> Vec<u8> {
    (0..nsym)
        .map(|j| poly_eval_codeword(codeword, gf::pow(GENERATOR, j as u32)))
        .collect()
}

/// Erasure-only decode. `received[i] == None` marks position `i` as erased.
/// Returns the first `k` bytes of the corrected codeword.
pub fn decode(received: &[Option<u8>], k: usize, nsym: usize) -> Result<Vec<u8>> {
    let n = received.len();
    debug_assert_eq!(n, k + nsym, "codeword length must equal k + nsym");

    let erased_positions: Vec<usize> = received
        .iter()
        .enumerate()
        .filter_map(|(i, v)| if v.is_none() { Some(i) } else { None })
        .collect();

    if erased_positions.len() > nsym {
        log::warn!(
            "rs decode: {} erasures exceed parity budget {}",
            erased_positions.len(),
            nsym
        );
        return Err(FecError::TooManyErasures {
            erasures: erased_positions.len(),
            budget: nsym,
        });
    }

    let mut codeword: Vec<u8> = received.iter().map(|v| v.unwrap_or(0)).collect();

    let s = syndromes(&codeword, nsym);
    if erased_positions.is_empty() || s.iter().all(|&x| x == 0) {
        return Ok(codeword[..k].to_vec());
    }

    // Sequence position i holds coefficient of x^(n-1-i).
    let erased_degrees: Vec<usize> = erased_positions.iter().map(|&i| n - 1 - i).collect();

    // Λ(x) = ∏ (1 + α^{p_i} x), low-degree-first.
    let mut lambda = vec![1u8];
    for &p in &erased_degrees {
        let root = gf::pow(GENERATOR, p as u32);
        lambda = gf::poly_mul(&lambda, &[1, root]);
    }

    // Ω(x) = S(x)·Λ(x) mod x^v
    let v = erased_degrees.len();
    let omega: Vec<u8> = gf::poly_mul(&s, &lambda).into_iter().take(v).collect();

    // Λ'(x): formal derivative, keep only odd-degree terms (char. 2).
    let mut lambda_prime = vec![0u8; lambda.len().saturating_sub(1)];
    for i in 0..lambda_prime.len() {
        if (i + 1) % 2 == 1 {
            lambda_prime[i] = lambda[i + 1];
        }
    }

    for (&i_seq, &p) in erased_positions.iter().zip(erased_degrees.iter()) {
        let x_i = gf::pow(GENERATOR, p as u32);
        let x_i_inv = gf::inverse(x_i)?;
        let omega_eval = gf::poly_eval(&omega, x_i_inv);
        let lambda_prime_eval = gf::poly_eval(&lambda_prime, x_i_inv);
        if lambda_prime_eval == 0 {
            log::warn!("rs decode: zero derivative at locator root, codeword is malformed");
            return Err(FecError::Uncorrectable);
        }
        let e_i = gf::mul(x_i, gf::div(omega_eval, lambda_prime_eval)?);
        codeword[i_seq] ^= e_i;
    }

    Ok(codeword[..k].to_vec())
}
