#![allow(clippy::unreadable_literal)]

use std::mem;

use crate::merkle_damgard::{self, MerkleDamgardHash, BLOCK_LENGTH_BYTES};
use crate::{unpack_words_be, HashFunction};

/// number of words in the extended message schedule
const SCHEDULE_LENGTH: usize = 80;

/// The initial state for any SHA1 hash. From here, all blocks are applied.
pub const INITIAL: SHA1Hash = SHA1Hash {
    a: 0x67452301,
    b: 0xEFCDAB89,
    c: 0x98BADCFE,
    d: 0x10325476,
    e: 0xC3D2E1F0,
};

/// A SHA1 hash state. It consists out of 5 double-words named `a`, `b`, `c`, `d` and `e`.
#[derive(Debug, Copy, Clone)]
pub struct SHA1Hash {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
}

impl MerkleDamgardHash for SHA1Hash {
    const INITIAL: Self = INITIAL;

    fn encode_bit_length(bit_length: u64) -> [u8; 8] {
        bit_length.to_be_bytes()
    }

    /// Mix one block of input data into the hash state. The block is first extended into an
    /// 80 word message schedule, then folded through 80 rounds grouped by round function and
    /// constant.
    fn compress(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        // SHA1 consumes block words as big endian integers
        let mut extended_block = [0u32; SCHEDULE_LENGTH];
        unpack_words_be(&mut extended_block[0..16], block);

        for i in 16..SCHEDULE_LENGTH {
            extended_block[i] = (extended_block[i - 3]
                ^ extended_block[i - 8]
                ^ extended_block[i - 14]
                ^ extended_block[i - 16])
                .rotate_left(1);
        }

        let mut round_state = *self;

        for (i, data_word) in extended_block.iter().enumerate() {
            let (scrambled_data, magic_constant) = match i {
                0..=19 => (
                    (round_state.b & round_state.c) | (!round_state.b & round_state.d),
                    0x5A827999,
                ),
                20..=39 => (round_state.b ^ round_state.c ^ round_state.d, 0x6ED9EBA1),
                40..=59 => (
                    (round_state.b & round_state.c)
                        | (round_state.b & round_state.d)
                        | (round_state.c & round_state.d),
                    0x8F1BBCDC,
                ),
                60..=79 => (round_state.b ^ round_state.c ^ round_state.d, 0xCA62C1D6),
                _ => unreachable!(),
            };

            let temp = round_state
                .a
                .rotate_left(5)
                .wrapping_add(scrambled_data)
                .wrapping_add(round_state.e)
                .wrapping_add(magic_constant)
                .wrapping_add(*data_word);
            round_state.e = round_state.d;
            round_state.d = round_state.c;
            round_state.c = round_state.b.rotate_left(30);
            round_state.b = round_state.a;
            round_state.a = temp;
        }

        self.a = self.a.wrapping_add(round_state.a);
        self.b = self.b.wrapping_add(round_state.b);
        self.c = self.c.wrapping_add(round_state.c);
        self.d = self.d.wrapping_add(round_state.d);
        self.e = self.e.wrapping_add(round_state.e);
    }
}

impl HashFunction for SHA1Hash {
    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    const OUTPUT_SIZE: usize = mem::size_of::<SHA1Hash>();

    type Digest = [u8; 20];

    fn digest_message(input: &[u8]) -> Self {
        merkle_damgard::digest_message(input)
    }

    /// Serialize the hash state into a ``[u8; 20]`` digest, each register most significant
    /// byte first.
    fn raw(&self) -> [u8; 20] {
        let mut digest = [0u8; 20];
        digest[0..4].copy_from_slice(&self.a.to_be_bytes());
        digest[4..8].copy_from_slice(&self.b.to_be_bytes());
        digest[8..12].copy_from_slice(&self.c.to_be_bytes());
        digest[12..16].copy_from_slice(&self.d.to_be_bytes());
        digest[16..20].copy_from_slice(&self.e.to_be_bytes());
        digest
    }
}
