#![allow(clippy::unreadable_literal)]
#![allow(clippy::zero_prefixed_literal)]

use std::mem;

use crate::merkle_damgard::{self, MerkleDamgardHash, BLOCK_LENGTH_BYTES};
use crate::{unpack_words_le, HashFunction};

/// the hash block length in 32 bit integers
const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// The initial state for any MD5 hash. From here, all blocks are applied.
pub const INITIAL: MD5Hash = MD5Hash(0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476);

/// A tuple struct containing the four state registers of an MD5 hash.
#[derive(Debug, Copy, Clone)]
pub struct MD5Hash(pub u32, pub u32, pub u32, pub u32);

/// bits rotated per round
static ROUND_ROTATION_COUNT: [u32; 64] = [
    07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22,
    05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20,
    04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23,
    06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21];

/// binary floored values of sin(i + 1) * 2^32 where i is the array index, reproduced bit-exact
/// from the published table
static MAGIC_SINUS_SCALARS: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391];

impl MerkleDamgardHash for MD5Hash {
    const INITIAL: Self = INITIAL;

    fn encode_bit_length(bit_length: u64) -> [u8; 8] {
        bit_length.to_le_bytes()
    }

    /// Mix one block of input data into the hash state through 64 rounds, each selecting its
    /// nonlinear function and message word by round group.
    fn compress(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        // MD5 consumes block words as little endian integers
        let mut input_block = [0u32; BLOCK_LENGTH_DOUBLE_WORDS];
        unpack_words_le(&mut input_block, block);

        let mut round_state = *self;

        for i in 0..64 {
            let (scrambled_data, message_index) = match i {
                0..=15 => (
                    (round_state.1 & round_state.2) | (!round_state.1 & round_state.3),
                    i,
                ),
                16..=31 => (
                    (round_state.3 & round_state.1) | (!round_state.3 & round_state.2),
                    (5 * i + 1) % BLOCK_LENGTH_DOUBLE_WORDS,
                ),
                32..=47 => (
                    round_state.1 ^ round_state.2 ^ round_state.3,
                    (3 * i + 5) % BLOCK_LENGTH_DOUBLE_WORDS,
                ),
                48..=63 => (
                    round_state.2 ^ (round_state.1 | !round_state.3),
                    (7 * i) % BLOCK_LENGTH_DOUBLE_WORDS,
                ),
                _ => unreachable!(),
            };

            let temp = round_state.3;
            round_state.3 = round_state.2;
            round_state.2 = round_state.1;
            round_state.1 = round_state.1.wrapping_add(
                round_state
                    .0
                    .wrapping_add(scrambled_data)
                    .wrapping_add(MAGIC_SINUS_SCALARS[i])
                    .wrapping_add(input_block[message_index])
                    .rotate_left(ROUND_ROTATION_COUNT[i]),
            );
            round_state.0 = temp;
        }

        self.0 = self.0.wrapping_add(round_state.0);
        self.1 = self.1.wrapping_add(round_state.1);
        self.2 = self.2.wrapping_add(round_state.2);
        self.3 = self.3.wrapping_add(round_state.3);
    }
}

impl HashFunction for MD5Hash {
    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    const OUTPUT_SIZE: usize = mem::size_of::<MD5Hash>();

    type Digest = [u8; 16];

    fn digest_message(input: &[u8]) -> Self {
        merkle_damgard::digest_message(input)
    }

    /// Serialize the hash state into a ``[u8; 16]`` digest, each register least significant
    /// byte first.
    fn raw(&self) -> [u8; 16] {
        let mut digest = [0u8; 16];
        digest[0..4].copy_from_slice(&self.0.to_le_bytes());
        digest[4..8].copy_from_slice(&self.1.to_le_bytes());
        digest[8..12].copy_from_slice(&self.2.to_le_bytes());
        digest[12..16].copy_from_slice(&self.3.to_le_bytes());
        digest
    }
}
