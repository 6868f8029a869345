//! The Rescue-XLIX permutation.

use num_bigint::BigUint;

use crate::arith::{add_mod, mat_vec_mul, mod_pow};
use crate::params::RescuePrimeParams;

/// Applies the Rescue-XLIX permutation to `state` in place.
///
/// Each of the `number_of_rounds` double-rounds runs the six-step sequence
/// of the specification: forward S-box, MDS mix, constant injection, inverse
/// S-box, MDS mix, constant injection. The inverse S-box exponentiates the
/// current mixed value; it is not a local inverse of the forward step and
/// must stay that way for digests to match external implementations.
///
/// Exposed so circuit implementations can cross-check intermediate
/// permutation outputs. A zero-round parameter set yields the identity.
pub fn rescue_xlix_permutation(params: &RescuePrimeParams, state: &mut [BigUint]) {
    assert_eq!(
        state.len(),
        params.state_width(),
        "state length must equal the state width"
    );
    let p = params.p();

    for round in 0..params.number_of_rounds() {
        let constants = params.constants_of_round(round);
        let (first_injection, second_injection) = constants.split_at(params.state_width());

        // sbox alpha
        sbox(params.alpha(), p, state);
        // mds
        apply_mds(params, state);
        // round constants
        for (el, constant) in state.iter_mut().zip(first_injection) {
            *el = add_mod(el, constant, p);
        }
        // sbox alpha inv
        sbox(params.alpha_inv(), p, state);
        // mds
        apply_mds(params, state);
        // round constants
        for (el, constant) in state.iter_mut().zip(second_injection) {
            *el = add_mod(el, constant, p);
        }
    }
}

// x -> x^power for every element of the state
#[inline]
fn sbox(power: &BigUint, p: &BigUint, state: &mut [BigUint]) {
    for el in state.iter_mut() {
        *el = mod_pow(el, power, p);
    }
}

fn apply_mds(params: &RescuePrimeParams, state: &mut [BigUint]) {
    let mixed = mat_vec_mul(params.mds_matrix(), state, params.p());
    for (el, value) in state.iter_mut().zip(mixed) {
        *el = value;
    }
}
