//! The Merkle–Damgård construction shared by the MD5 and SHA1 algorithms: the message is padded
//! to a multiple of the block length, decomposed into blocks, and every block is folded into a
//! running hash state by the algorithm's compression function. The two algorithms differ only in
//! their compression function and in the byte order of the appended length suffix.

use std::convert::TryInto;
use std::mem::size_of;

/// the hash block length in bytes
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// byte offset within a block at which the 64 bit length suffix is stored
const LENGTH_SUFFIX_OFFSET: usize = BLOCK_LENGTH_BYTES - size_of::<u64>();

/// A hash state generated from a Merkle–Damgård construction. Implementing hashes get their
/// digest function provided by this trait through [`digest_message`].
pub trait MerkleDamgardHash: Sized + Copy {
    /// The published initial state. From here, all blocks are applied.
    const INITIAL: Self;

    /// Encode the message length in bits for the 8 byte suffix of the padding. MD5 stores the
    /// length least significant byte first, SHA1 most significant byte first.
    fn encode_bit_length(bit_length: u64) -> [u8; 8];

    /// Mix one input block into the hash state.
    fn compress(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]);
}

/// Digest a full message of arbitrary size. All full blocks of ``input`` are compressed in
/// forward order, then the remaining tail is padded and compressed.
///
/// # Parameters
/// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
///
/// # Returns
/// The hash state after all blocks, including the padded tail, have been applied.
pub fn digest_message<H>(input: &[u8]) -> H
    where H: MerkleDamgardHash {
    let mut state = H::INITIAL;
    let full_blocks_length = input.len() / BLOCK_LENGTH_BYTES * BLOCK_LENGTH_BYTES;

    for block in input[..full_blocks_length].chunks_exact(BLOCK_LENGTH_BYTES) {
        state.compress(block.try_into().unwrap());
    }

    let message_length_bits = input.len() as u64 * 8;
    let (last_block, overflow_block) = pad_last_blocks(
        &input[full_blocks_length..],
        H::encode_bit_length(message_length_bits),
    );

    state.compress(&last_block);
    if let Some(block) = overflow_block {
        state.compress(&block);
    }

    state
}

/// Pad the message tail remaining after all full blocks. A single 1-bit (the byte `0x80`, since
/// messages are byte aligned) is appended directly after the tail, followed by zero fill and the
/// encoded message bit length in the final 8 bytes. If the tail leaves fewer than 9 free bytes,
/// the length suffix moves into a second, otherwise zero block.
///
/// # Parameters
/// - `tail` the message remainder, strictly shorter than one block
/// - `encoded_bit_length` the message length in bits, already encoded in the algorithm's byte
///   order
///
/// # Returns
/// The padded final block and, if the padding overflowed, the additional block carrying the
/// length suffix.
fn pad_last_blocks(
    tail: &[u8],
    encoded_bit_length: [u8; 8],
) -> ([u8; BLOCK_LENGTH_BYTES], Option<[u8; BLOCK_LENGTH_BYTES]>) {
    assert!(tail.len() < BLOCK_LENGTH_BYTES);

    let mut last_block = [0u8; BLOCK_LENGTH_BYTES];
    last_block[..tail.len()].copy_from_slice(tail);

    // append a single 1-bit to the end of the message
    last_block[tail.len()] = 0x80;

    // if there is not enough space for the message length to be appended, a new block must be
    // created
    if tail.len() + 1 + size_of::<u64>() > BLOCK_LENGTH_BYTES {
        let mut overflow_block = [0u8; BLOCK_LENGTH_BYTES];
        overflow_block[LENGTH_SUFFIX_OFFSET..].copy_from_slice(&encoded_bit_length);
        (last_block, Some(overflow_block))
    } else {
        last_block[LENGTH_SUFFIX_OFFSET..].copy_from_slice(&encoded_bit_length);
        (last_block, None)
    }
}
