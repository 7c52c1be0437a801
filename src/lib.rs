//! This crate contains software implementations of the MD5 and SHA1 message digest algorithms,
//! both built upon a shared Merkle–Damgård engine, along with HMAC, HKDF and a few simple
//! checksum functions. Each message is digested in one call; the algorithms do not keep state
//! between messages.

use std::convert::TryInto;

pub mod checksum;
pub mod hmac;
pub mod kdf;
pub mod md5;
pub mod merkle_damgard;
pub mod sha1;

/// Unpack ``source`` into the 32 bit words of ``dest``, reading each group of four consecutive
/// bytes as a little endian integer. ``source`` must hold at least four bytes per destination
/// word.
pub(crate) fn unpack_words_le(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_le_bytes(bytes.try_into().unwrap());
    }
}

/// Unpack ``source`` into the 32 bit words of ``dest``, reading each group of four consecutive
/// bytes as a big endian integer. ``source`` must hold at least four bytes per destination
/// word.
pub(crate) fn unpack_words_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_be_bytes(bytes.try_into().unwrap());
    }
}

/// Any hash function that digests an arbitrarily sized message in a single call.
pub trait HashFunction: Sized {
    /// The digestion block size of this hash function in bytes.
    const BLOCK_SIZE: usize;

    /// The size of the output digest in bytes.
    const OUTPUT_SIZE: usize;

    /// The raw digest, a fixed-size byte array of `OUTPUT_SIZE` bytes.
    type Digest: AsRef<[u8]>;

    /// Digest a full message of arbitrary size.
    /// #Parameters
    /// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
    ///
    /// #Output
    /// Returns the hash state of the digested input data. No assumptions can be made about
    /// whether the state can be used for further operations in the hash algorithm.
    fn digest_message(input: &[u8]) -> Self;

    /// Serialize the hash state into its raw digest bytes.
    fn raw(&self) -> Self::Digest;

    /// Render the digest as a lowercase hexadecimal string, two characters per digest byte.
    fn to_hex(&self) -> String {
        hex::encode(self.raw().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::md5::MD5Hash;
    use super::sha1::SHA1Hash;
    use super::{unpack_words_be, unpack_words_le, HashFunction};

    const EMPTY_MESSAGE: &[u8] = b"";

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    const FOX_WITH_PERIOD: &[u8] = b"The quick brown fox jumps over the lazy dog.";

    /// 62 bytes, which forces the length suffix of the padding into an overflow block
    const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    #[test]
    fn test_md5() {
        assert_eq!(
            MD5Hash::digest_message(EMPTY_MESSAGE).to_hex(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );

        assert_eq!(
            MD5Hash::digest_message(FOX).to_hex(),
            "9e107d9d372bb6826bd81d3542a419d6"
        );

        assert_eq!(
            MD5Hash::digest_message(FOX_WITH_PERIOD).to_hex(),
            "e4d909c290d0fb1ca068ffaddf22cbd0"
        );

        assert_eq!(
            MD5Hash::digest_message(ALPHANUMERIC).to_hex(),
            "d174ab98d277d9f5a5611c2c9f419d9f"
        );
    }

    #[test]
    fn test_md5_reference_suite() {
        assert_eq!(
            MD5Hash::digest_message(b"a").to_hex(),
            "0cc175b9c0f1b6a831c399e269772661"
        );

        assert_eq!(
            MD5Hash::digest_message(b"abc").to_hex(),
            "900150983cd24fb0d6963f7d28e17f72"
        );

        assert_eq!(
            MD5Hash::digest_message(b"message digest").to_hex(),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );

        assert_eq!(
            MD5Hash::digest_message(b"abcdefghijklmnopqrstuvwxyz").to_hex(),
            "c3fcd3d76192e4007dfb496cca67e13b"
        );

        assert_eq!(
            MD5Hash::digest_message(
                b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"
            )
            .to_hex(),
            "57edf4a22be3c955ac49da2e2107b67a"
        );
    }

    #[test]
    fn test_sha1() {
        assert_eq!(
            SHA1Hash::digest_message(EMPTY_MESSAGE).to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );

        assert_eq!(
            SHA1Hash::digest_message(FOX).to_hex(),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );

        assert_eq!(
            SHA1Hash::digest_message(ALPHANUMERIC).to_hex(),
            "761c457bf73b14d27e9e9265c46f4b4dda11f940"
        );
    }

    #[test]
    fn test_sha1_reference_suite() {
        assert_eq!(
            SHA1Hash::digest_message(b"a").to_hex(),
            "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8"
        );

        assert_eq!(
            SHA1Hash::digest_message(b"abc").to_hex(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );

        // 56 bytes, the smallest tail that forces the padding into an overflow block
        assert_eq!(
            SHA1Hash::digest_message(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")
                .to_hex(),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );

        assert_eq!(
            SHA1Hash::digest_message(b"The quick brown fox jumps over the lazy cog").to_hex(),
            "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3"
        );
    }

    #[test]
    fn test_determinism() {
        assert_eq!(
            MD5Hash::digest_message(FOX).raw(),
            MD5Hash::digest_message(FOX).raw()
        );

        assert_eq!(
            SHA1Hash::digest_message(FOX).raw(),
            SHA1Hash::digest_message(FOX).raw()
        );
    }

    #[test]
    fn test_output_length() {
        assert_eq!(MD5Hash::digest_message(FOX).raw().len(), MD5Hash::OUTPUT_SIZE);
        assert_eq!(MD5Hash::OUTPUT_SIZE, 16);

        assert_eq!(SHA1Hash::digest_message(FOX).raw().len(), SHA1Hash::OUTPUT_SIZE);
        assert_eq!(SHA1Hash::OUTPUT_SIZE, 20);
    }

    #[test]
    fn test_hex_encoding() {
        let md5_hex = MD5Hash::digest_message(FOX).to_hex();
        assert_eq!(md5_hex.len(), 2 * MD5Hash::OUTPUT_SIZE);
        assert!(md5_hex.chars().all(|c| c.is_digit(16) && !c.is_uppercase()));

        let sha1_hex = SHA1Hash::digest_message(FOX).to_hex();
        assert_eq!(sha1_hex.len(), 2 * SHA1Hash::OUTPUT_SIZE);
        assert!(sha1_hex.chars().all(|c| c.is_digit(16) && !c.is_uppercase()));
    }

    #[test]
    fn test_single_character_sensitivity() {
        assert_ne!(
            MD5Hash::digest_message(FOX).raw(),
            MD5Hash::digest_message(FOX_WITH_PERIOD).raw()
        );

        assert_ne!(
            SHA1Hash::digest_message(FOX).raw(),
            SHA1Hash::digest_message(FOX_WITH_PERIOD).raw()
        );
    }

    #[test]
    fn test_unpack_words_le() {
        let mut dest = [0u32; 2];
        unpack_words_le(&mut dest, &[0x78, 0x56, 0x34, 0x12, 0xFF, 0x00, 0xFF, 0x00]);
        assert_eq!([0x1234_5678u32, 0x00FF_00FFu32], dest)
    }

    #[test]
    fn test_unpack_words_be() {
        let mut dest = [0u32; 2];
        unpack_words_be(&mut dest, &[0x12, 0x34, 0x56, 0x78, 0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!([0x1234_5678u32, 0x00FF_00FFu32], dest)
    }
}
