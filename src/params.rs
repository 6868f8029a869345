//! Rescue Prime parameter set.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::errors::RescuePrimeError;

/// Immutable Rescue-XLIX parameter set over `GF(p)`.
///
/// Fields are private and the only constructor validates, so every reachable
/// value of this type satisfies the shape invariants: the MDS matrix is
/// square of dimension `m`, there are exactly `number_of_rounds * 2 * m`
/// round constants, `rate = m - capacity >= 1`, and all matrix and constant
/// entries lie in `[0, p)`. The hash path relies on this and never
/// re-validates.
///
/// A parameter set is read-only and may be shared freely between concurrent
/// hash computations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescuePrimeParams {
    p: BigUint,
    m: usize,
    capacity: usize,
    security_level: usize,
    alpha: BigUint,
    alpha_inv: BigUint,
    number_of_rounds: usize,
    mds_matrix: Vec<Vec<BigUint>>,
    round_constants: Vec<BigUint>,
}

impl RescuePrimeParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        p: BigUint,
        m: usize,
        capacity: usize,
        security_level: usize,
        alpha: BigUint,
        alpha_inv: BigUint,
        number_of_rounds: usize,
        mds_matrix: Vec<Vec<BigUint>>,
        round_constants: Vec<BigUint>,
    ) -> Result<Self, RescuePrimeError> {
        if m == 0 || capacity >= m {
            return Err(RescuePrimeError::InvalidParameterSet(format!(
                "rate must be at least 1, got state width {} and capacity {}",
                m, capacity
            )));
        }
        if mds_matrix.len() != m || mds_matrix.iter().any(|row| row.len() != m) {
            return Err(RescuePrimeError::InvalidParameterSet(format!(
                "MDS matrix must be square of dimension {}",
                m
            )));
        }
        if round_constants.len() != number_of_rounds * 2 * m {
            return Err(RescuePrimeError::InvalidParameterSet(format!(
                "expected {} round constants, got {}",
                number_of_rounds * 2 * m,
                round_constants.len()
            )));
        }
        if mds_matrix
            .iter()
            .flatten()
            .chain(round_constants.iter())
            .any(|el| el >= &p)
        {
            return Err(RescuePrimeError::InvalidParameterSet(
                "matrix and constant entries must lie in [0, p)".to_string(),
            ));
        }

        Ok(Self {
            p,
            m,
            capacity,
            security_level,
            alpha,
            alpha_inv,
            number_of_rounds,
            mds_matrix,
            round_constants,
        })
    }

    /// The field modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// State width `m`.
    pub fn state_width(&self) -> usize {
        self.m
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of state slots exposed to input and output.
    pub fn rate(&self) -> usize {
        self.m - self.capacity
    }

    pub fn security_level(&self) -> usize {
        self.security_level
    }

    /// Forward S-box exponent.
    pub fn alpha(&self) -> &BigUint {
        &self.alpha
    }

    /// Inverse S-box exponent, `alpha^-1 mod (p - 1)`.
    pub fn alpha_inv(&self) -> &BigUint {
        &self.alpha_inv
    }

    /// Number of double-rounds of the permutation.
    pub fn number_of_rounds(&self) -> usize {
        self.number_of_rounds
    }

    pub fn mds_matrix(&self) -> &[Vec<BigUint>] {
        &self.mds_matrix
    }

    /// Row-major walk over the MDS matrix, for constant-table emission.
    pub fn mds_matrix_flattened(&self) -> impl Iterator<Item = &BigUint> {
        self.mds_matrix.iter().flatten()
    }

    /// The flattened round-constant sequence, `2 * m` entries per round.
    pub fn round_constants(&self) -> &[BigUint] {
        &self.round_constants
    }

    /// The `2 * m` constants consumed by round `round`.
    pub(crate) fn constants_of_round(&self, round: usize) -> &[BigUint] {
        &self.round_constants[round * 2 * self.m..(round + 1) * 2 * self.m]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fe(v: u32) -> BigUint {
        BigUint::from(v)
    }

    fn fes(values: &[u32]) -> Vec<BigUint> {
        values.iter().map(|v| fe(*v)).collect()
    }

    fn build(
        m: usize,
        capacity: usize,
        rounds: usize,
        mds: Vec<Vec<BigUint>>,
        constants: Vec<BigUint>,
    ) -> Result<RescuePrimeParams, RescuePrimeError> {
        RescuePrimeParams::new(fe(101), m, capacity, 80, fe(3), fe(67), rounds, mds, constants)
    }

    #[test]
    fn test_accepts_well_formed_set() {
        let params = build(
            2,
            1,
            1,
            vec![fes(&[1, 2]), fes(&[3, 4])],
            fes(&[5, 6, 7, 8]),
        )
        .expect("valid parameter set");
        assert_eq!(params.rate(), 1);
        assert_eq!(params.constants_of_round(0), &fes(&[5, 6, 7, 8])[..]);
    }

    #[test]
    fn test_rejects_zero_rate() {
        let err = build(2, 2, 0, vec![fes(&[1, 2]), fes(&[3, 4])], vec![]).unwrap_err();
        assert!(matches!(err, RescuePrimeError::InvalidParameterSet(_)));
    }

    #[test]
    fn test_rejects_non_square_matrix() {
        let err = build(2, 1, 1, vec![fes(&[1, 2, 3]), fes(&[3, 4, 5])], fes(&[5, 6, 7, 8]))
            .unwrap_err();
        assert!(matches!(err, RescuePrimeError::InvalidParameterSet(_)));
    }

    #[test]
    fn test_rejects_wrong_constant_count() {
        let err = build(2, 1, 2, vec![fes(&[1, 2]), fes(&[3, 4])], fes(&[5, 6, 7, 8]))
            .unwrap_err();
        assert!(matches!(err, RescuePrimeError::InvalidParameterSet(_)));
    }

    #[test]
    fn test_rejects_unreduced_entries() {
        let err = build(2, 1, 1, vec![fes(&[1, 2]), fes(&[3, 4])], fes(&[5, 6, 7, 101]))
            .unwrap_err();
        assert!(matches!(err, RescuePrimeError::InvalidParameterSet(_)));
    }
}
