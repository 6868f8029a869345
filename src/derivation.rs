//! Parameter-set provider.
//!
//! Derives validated Rescue Prime parameter sets following Algorithms 5-7 of
//! the specification: S-box exponents by gcd walk, round count from the
//! Groebner basis attack bound, round constants from SHAKE256 over a seed
//! string, and the MDS matrix from a systematic Reed-Solomon generator
//! matrix. The hash core never calls into this module; it only consumes the
//! resulting [`RescuePrimeParams`].

use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, ToPrimitive, Zero};

use crate::arith::{mod_pow, reduce};
use crate::errors::RescuePrimeError;
use crate::params::RescuePrimeParams;

/// Derives a full parameter set for the prime field `GF(p)`.
///
/// `generator` must be a primitive element of the field; finding one needs
/// the factorization of `p - 1` and stays with the caller.
pub fn derive_parameters(
    p: &BigUint,
    generator: &BigUint,
    m: usize,
    capacity: usize,
    security_level: usize,
) -> Result<RescuePrimeParams, RescuePrimeError> {
    if m == 0 || capacity >= m {
        return Err(RescuePrimeError::InvalidParameterSet(format!(
            "rate must be at least 1, got state width {} and capacity {}",
            m, capacity
        )));
    }

    let (alpha, alpha_inv) = derive_alpha(p);
    let alpha_small = alpha.to_usize().ok_or_else(|| {
        RescuePrimeError::InvalidParameterSet("no machine-word sized alpha found".to_string())
    })?;
    let rounds = number_of_rounds(m, capacity, security_level, alpha_small);
    let round_constants = derive_round_constants(p, m, capacity, security_level, rounds);
    let mds_matrix = derive_mds_matrix(p, generator, m);

    log::debug!(
        "derived parameters for {} bit modulus: alpha {}, {} rounds, {} round constants",
        p.bits(),
        alpha,
        rounds,
        round_constants.len()
    );

    RescuePrimeParams::new(
        p.clone(),
        m,
        capacity,
        security_level,
        alpha,
        alpha_inv,
        rounds,
        mds_matrix,
        round_constants,
    )
}

/// The parameter set of the reference implementation: BN254 scalar field,
/// state width 2, capacity 1, 128 bit security level.
pub fn bn254_parameters() -> RescuePrimeParams {
    let p = BigUint::parse_bytes(
        b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
        10,
    )
    .expect("modulus literal");
    // 5 is the smallest multiplicative generator of the BN254 scalar field
    let generator = BigUint::from(5u32);

    derive_parameters(&p, &generator, 2, 1, 128).expect("bn254 parameters are valid")
}

/// Smallest `alpha >= 3` coprime to `p - 1`, together with its inverse
/// mod `p - 1`.
pub fn derive_alpha(p: &BigUint) -> (BigUint, BigUint) {
    let p = BigInt::from(p.clone());
    let p_minus_one = &p - BigInt::one();

    let mut actual_alpha = BigInt::zero();
    for alpha in num_iter::range_inclusive(BigInt::from(3), p_minus_one.clone()) {
        if p_minus_one.gcd(&alpha).is_one() {
            actual_alpha = alpha;
            break;
        }
    }

    let ExtendedGcd {
        gcd,
        y: mut alpha_inv,
        ..
    } = p_minus_one.extended_gcd(&actual_alpha);
    assert!(gcd.is_one());
    if alpha_inv < BigInt::zero() {
        alpha_inv += &p_minus_one;
    }

    (
        actual_alpha.to_biguint().expect("alpha is positive"),
        alpha_inv.to_biguint().expect("inverse is reduced"),
    )
}

/// Number of double-rounds resisting the Groebner basis attack at the given
/// security level: the smallest `l1` with `binomial(v + dcon, v)^2 >
/// 2^security_level`, floored at 5 and scaled by 1.5.
pub fn number_of_rounds(m: usize, capacity: usize, security_level: usize, alpha: usize) -> usize {
    let rate = m - capacity;
    let dcon = |n: usize| ((alpha - 1) * m * (n - 1)) / 2 + 2;
    let v = |n: usize| m * (n - 1) + rate;
    let target = BigUint::one() << security_level;

    let mut l1 = 1;
    for candidate in 1..25 {
        l1 = candidate;
        if binomial(v(candidate) + dcon(candidate), v(candidate)).pow(2) > target {
            break;
        }
    }

    // minimum of 5 rounds, then a 50% safety margin, rounded up
    (3 * l1.max(5) + 1) / 2
}

/// Exactly `2 * m * rounds` pseudorandom field elements from SHAKE256 over
/// the seed string `Rescue-XLIX(p,m,capacity,security_level)`. Constants are
/// read little-endian, one byte more than the modulus width per constant,
/// and reduced mod `p`.
pub fn derive_round_constants(
    p: &BigUint,
    m: usize,
    capacity: usize,
    security_level: usize,
    rounds: usize,
) -> Vec<BigUint> {
    let bytes_per_int = (p.bits() as usize + 7) / 8 + 1;
    let num_bytes = bytes_per_int * 2 * m * rounds;
    let seed_string = format!("Rescue-XLIX({},{},{},{})", p, m, capacity, security_level);
    let byte_string = shake256(seed_string.as_bytes(), num_bytes);

    byte_string
        .chunks(bytes_per_int)
        .take(2 * m * rounds)
        .map(|chunk| BigUint::from_bytes_le(chunk) % p)
        .collect()
}

/// MDS matrix of the parameter set: echelonize the `m x 2m` Vandermonde
/// matrix of the primitive element, take the transpose of the right half.
pub fn derive_mds_matrix(p: &BigUint, generator: &BigUint, m: usize) -> Vec<Vec<BigUint>> {
    let mut rows: Vec<Vec<BigUint>> = (0..m)
        .map(|i| {
            (0..2 * m)
                .map(|j| mod_pow(generator, &BigUint::from(i * j), p))
                .collect()
        })
        .collect();

    // reduced row echelon form over GF(p), pivots inverted via Fermat
    let mut pivot_row = 0;
    for column in 0..2 * m {
        if pivot_row == m {
            break;
        }
        let pivot = match (pivot_row..m).find(|&row| !rows[row][column].is_zero()) {
            Some(row) => row,
            None => continue,
        };
        rows.swap(pivot_row, pivot);

        let inverse = mod_pow(&rows[pivot_row][column], &(p - 2u32), p);
        for el in rows[pivot_row].iter_mut() {
            *el = &*el * &inverse % p;
        }

        for row in 0..m {
            if row != pivot_row && !rows[row][column].is_zero() {
                let factor = rows[row][column].clone();
                for j in 0..2 * m {
                    let subtrahend = &factor * &rows[pivot_row][j];
                    let difference =
                        BigInt::from(rows[row][j].clone()) - BigInt::from(subtrahend);
                    rows[row][j] = reduce(&difference, p);
                }
            }
        }
        pivot_row += 1;
    }

    (0..m)
        .map(|i| (0..m).map(|j| rows[j][m + i].clone()).collect())
        .collect()
}

// exact at every step: each prefix product is itself a binomial coefficient
fn binomial(n: usize, k: usize) -> BigUint {
    let mut result = BigUint::one();
    for i in 0..k {
        result = result * BigUint::from(n - i) / BigUint::from(i + 1);
    }
    result
}

fn shake256(input: &[u8], num_bytes: usize) -> Box<[u8]> {
    use sha3::digest::{ExtendableOutput, Update};
    use sha3::Shake256;

    let mut shake = Shake256::default();
    shake.update(input);
    shake.finalize_boxed(num_bytes)
}
