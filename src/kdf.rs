//! Traits and implementations for key derivation functions

use crate::hmac::hmac;
use crate::HashFunction;

/// HMAC based key derivation function following RFC 5869. A key of `output_length` bytes is
/// derived from the initial keying material `ikm` by first extracting a pseudo random key with
/// `salt`, then expanding it over `info` until enough output blocks have been generated.
pub fn hkdf_derive_key<Hash>(salt: &[u8], ikm: &[u8], output_length: usize, info: &[u8]) -> Box<[u8]>
    where Hash: HashFunction
{
    let pseudo_random_key = hmac::<Hash>(salt, ikm);
    let rounds = (output_length + Hash::OUTPUT_SIZE - 1) / Hash::OUTPUT_SIZE;

    let mut output = Vec::with_capacity(rounds * Hash::OUTPUT_SIZE);
    let mut previous_block: Vec<u8> = Vec::new();

    for counter in 1..=rounds {
        let mut block_input = previous_block;
        block_input.extend_from_slice(info);
        block_input.push((counter & 0xFF) as u8);

        previous_block = hmac::<Hash>(&pseudo_random_key, &block_input).into_vec();
        output.extend_from_slice(&previous_block);
    }

    output.truncate(output_length);
    output.into_boxed_slice()
}
