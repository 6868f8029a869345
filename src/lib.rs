//! Rescue Prime hash function over a runtime prime field.
//!
//! Implements the Rescue-XLIX permutation and the sponge construction on top
//! of it, following <https://eprint.iacr.org/2020/1143.pdf>. Field elements
//! are arbitrary precision integers, so the same code drives production
//! sized prime fields and the small toy fields used for cross-checking
//! digests against external circuit implementations.

pub(crate) mod arith;
pub mod codegen;
pub mod derivation;
pub mod errors;
pub mod hash;
pub mod params;
pub mod permutation;
pub mod sponge;

pub use errors::RescuePrimeError;
pub use hash::{
    rescue_prime_hash, rescue_prime_hash_elements, rescue_prime_hash_sequence,
    rescue_prime_hash_text, HashInput,
};
pub use params::RescuePrimeParams;
pub use permutation::rescue_xlix_permutation;
pub use sponge::RescuePrimeSponge;
