//! Modular big-integer primitives shared by the permutation and the sponge.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

/// Canonical representative of `n` in `[0, p)`.
///
/// Floored modulo, so negative inputs map into the field as well.
pub(crate) fn reduce(n: &BigInt, p: &BigUint) -> BigUint {
    let remainder = n.mod_floor(&BigInt::from(p.clone()));
    remainder
        .to_biguint()
        .expect("floored remainder is non-negative")
}

/// `(a + b) mod p`.
#[inline]
pub(crate) fn add_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// `base^exp mod p` by square-and-multiply; the base is reduced first.
pub(crate) fn mod_pow(base: &BigUint, exp: &BigUint, p: &BigUint) -> BigUint {
    (base % p).modpow(exp, p)
}

/// `(matrix * v) mod p`. Every accumulated sum is reduced before it is
/// stored, so intermediate values never grow past `p^2`.
pub(crate) fn mat_vec_mul(matrix: &[Vec<BigUint>], v: &[BigUint], p: &BigUint) -> Vec<BigUint> {
    assert_eq!(matrix.len(), v.len(), "matrix dimension mismatch");
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(v.iter())
                .fold(BigUint::zero(), |acc, (coeff, el)| (acc + coeff * el) % p)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn fe(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_reduce_handles_negative_values() {
        let p = fe(7);
        assert_eq!(reduce(&BigInt::from(-1), &p), fe(6));
        assert_eq!(reduce(&BigInt::from(-14), &p), fe(0));
        assert_eq!(reduce(&BigInt::from(9), &p), fe(2));
    }

    #[test]
    fn test_mod_pow_known_values() {
        assert_eq!(mod_pow(&fe(3), &fe(67), &fe(101)), fe(53));
        assert_eq!(mod_pow(&fe(5), &fe(44), &fe(97)), fe(9));
        assert_eq!(mod_pow(&fe(2), &fe(0), &fe(101)), fe(1));
        // base larger than the modulus is reduced first
        assert_eq!(mod_pow(&fe(104), &fe(67), &fe(101)), fe(53));
    }

    #[test]
    fn test_mat_vec_mul_identity() {
        let p = fe(101);
        let identity = vec![
            vec![fe(1), fe(0)],
            vec![fe(0), fe(1)],
        ];
        let v = vec![fe(5), fe(103)];
        // identity returns the input reduced mod p
        assert_eq!(mat_vec_mul(&identity, &v, &p), vec![fe(5), fe(2)]);
    }
}
