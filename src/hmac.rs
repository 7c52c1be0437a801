//! Keyed-hash message authentication codes following RFC 2104.

use crate::HashFunction;

/// Generate a keyed-hash message authentication code from a `HashFunction` and a given key using
/// the HMAC protocol of RFC 2104.
/// #Parameters
/// - `key` a secret key for the authentication code
/// - `message` an arbitrary-sized message to authenticate
/// - `H` an arbitrary hash function
///
/// #Output
/// Returns a boxed slice containing the raw authentication code, `H::OUTPUT_SIZE` bytes long.
pub fn hmac<H>(key: &[u8], message: &[u8]) -> Box<[u8]>
    where H: HashFunction {
    // keys longer than one block are digested first, everything shorter is zero-padded to block
    // length
    let mut padded_key = vec![0u8; H::BLOCK_SIZE];
    if key.len() > H::BLOCK_SIZE {
        padded_key[..H::OUTPUT_SIZE].copy_from_slice(H::digest_message(key).raw().as_ref());
    } else {
        padded_key[..key.len()].copy_from_slice(key);
    }

    let mut inner_message = padded_key.iter().map(|v| v ^ 0x36).collect::<Vec<_>>();
    inner_message.extend_from_slice(message);

    let mut outer_message = padded_key.iter().map(|v| v ^ 0x5C).collect::<Vec<_>>();
    outer_message.extend_from_slice(H::digest_message(&inner_message).raw().as_ref());

    H::digest_message(&outer_message).raw().as_ref().into()
}
