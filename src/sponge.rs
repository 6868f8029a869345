//! Sponge construction driving the Rescue-XLIX permutation.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::arith::add_mod;
use crate::params::RescuePrimeParams;
use crate::permutation::rescue_xlix_permutation;

/// Sponge state for one hash computation.
///
/// The state buffer is fixed to `state_width` elements at construction,
/// starts zeroed and is owned by a single invocation: fold the input in with
/// [`absorb`](Self::absorb), read the digest with
/// [`squeeze`](Self::squeeze), drop it. Nothing is shared across
/// computations; the parameter set is only borrowed.
#[derive(Debug, Clone)]
pub struct RescuePrimeSponge<'a> {
    params: &'a RescuePrimeParams,
    state: Box<[BigUint]>,
}

impl<'a> RescuePrimeSponge<'a> {
    pub fn from_params(params: &'a RescuePrimeParams) -> Self {
        Self {
            params,
            state: vec![BigUint::zero(); params.state_width()].into_boxed_slice(),
        }
    }

    /// In the absorbing phase, input blocks of up to `rate` elements are
    /// summed into the first `rate` elements of the state, interleaved with
    /// applications of the permutation. The permutation runs exactly
    /// `ceil(input.len() / rate)` times: once after every block, including a
    /// short final block. The capacity slots are never written directly.
    ///
    /// The padding rule of the public wrapper always delivers a multiple of
    /// `rate` that is at least `rate` long; a short or empty input here only
    /// occurs when driving the sponge manually over pre-encoded elements.
    pub fn absorb(&mut self, input: &[BigUint]) {
        let rate = self.params.rate();
        for block in input.chunks(rate) {
            for (el, value) in self.state.iter_mut().zip(block) {
                *el = add_mod(el, value, self.params.p());
            }
            rescue_xlix_permutation(self.params, &mut self.state);
        }
    }

    /// In the squeezing phase the first `rate` elements of the state are the
    /// digest. Output length always equals `rate` here, so squeezing is
    /// single-shot and never re-runs the permutation.
    pub fn squeeze(&self) -> Vec<BigUint> {
        self.state[..self.params.rate()].to_vec()
    }

    pub fn state_as_ref(&self) -> &[BigUint] {
        &self.state
    }
}
