//! Input encoding, padding and the public hash entry points.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::params::RescuePrimeParams;
use crate::sponge::RescuePrimeSponge;

/// Input accepted by the padding wrapper.
#[derive(Debug, Clone, Copy)]
pub enum HashInput<'a> {
    /// One field element per Unicode code point.
    Text(&'a str),
    /// One field element per integer. Values at or above `p` are reduced
    /// lazily during absorption.
    Sequence(&'a [BigUint]),
}

/// Encodes and pads the input, then drives the sponge. The digest is a
/// sequence of exactly `rate` field elements in `[0, p)`.
pub fn rescue_prime_hash(params: &RescuePrimeParams, input: HashInput<'_>) -> Vec<BigUint> {
    let elements = encode_with_padding(params.rate(), input);
    rescue_prime_hash_elements(params, &elements)
}

/// Convenience wrapper over [`rescue_prime_hash`] for text input.
pub fn rescue_prime_hash_text(params: &RescuePrimeParams, text: &str) -> Vec<BigUint> {
    rescue_prime_hash(params, HashInput::Text(text))
}

/// Convenience wrapper over [`rescue_prime_hash`] for integer sequences.
pub fn rescue_prime_hash_sequence(params: &RescuePrimeParams, values: &[BigUint]) -> Vec<BigUint> {
    rescue_prime_hash(params, HashInput::Sequence(values))
}

/// Drives the sponge over pre-encoded field elements, without padding. The
/// caller is responsible for delivering a padded sequence when digests must
/// match the wrapper; short final blocks are absorbed as-is.
pub fn rescue_prime_hash_elements(params: &RescuePrimeParams, elements: &[BigUint]) -> Vec<BigUint> {
    log::trace!(
        "absorbing {} field elements at rate {}",
        elements.len(),
        params.rate()
    );
    let mut sponge = RescuePrimeSponge::from_params(params);
    sponge.absorb(elements);
    sponge.squeeze()
}

/// Maps the input to field elements and applies the padding rule: one `1`
/// marker, then zeros until the length is a multiple of `rate`. The padded
/// length is the smallest multiple of `rate` strictly greater than the
/// content length, so the marker position always demarcates the content end.
///
/// Trailing zeros already present in an integer sequence are
/// indistinguishable from padding zeros; that ambiguity is inherent to the
/// scheme and deliberately kept.
pub(crate) fn encode_with_padding(rate: usize, input: HashInput<'_>) -> Vec<BigUint> {
    let mut elements = match input {
        HashInput::Text(text) => text
            .chars()
            .map(|c| BigUint::from(c as u32))
            .collect::<Vec<_>>(),
        HashInput::Sequence(values) => values.to_vec(),
    };

    elements.push(BigUint::one());
    while elements.len() % rate != 0 {
        elements.push(BigUint::zero());
    }

    elements
}

#[cfg(test)]
mod test {
    use super::*;

    fn fes(values: &[u32]) -> Vec<BigUint> {
        values.iter().map(|v| BigUint::from(*v)).collect()
    }

    #[test]
    fn test_padding_of_text_input() {
        assert_eq!(
            encode_with_padding(2, HashInput::Text("AB")),
            fes(&[65, 66, 1, 0])
        );
        assert_eq!(
            encode_with_padding(1, HashInput::Text("AB")),
            fes(&[65, 66, 1])
        );
    }

    #[test]
    fn test_padding_always_appends_a_marker() {
        // content length already a multiple of the rate still gets a marker
        // block, so the padded length is the next multiple up
        let values = fes(&[1, 2]);
        assert_eq!(
            encode_with_padding(2, HashInput::Sequence(&values)),
            fes(&[1, 2, 1, 0])
        );
    }

    #[test]
    fn test_padding_of_empty_input() {
        assert_eq!(encode_with_padding(3, HashInput::Text("")), fes(&[1, 0, 0]));
    }

    #[test]
    fn test_padded_length_is_smallest_multiple_above_content() {
        for rate in 1..5 {
            for content_len in 0..12 {
                let values = fes(&vec![7; content_len]);
                let padded = encode_with_padding(rate, HashInput::Sequence(&values));
                assert_eq!(padded.len() % rate, 0);
                assert!(padded.len() > content_len);
                assert!(padded.len() - content_len <= rate);
            }
        }
    }
}
