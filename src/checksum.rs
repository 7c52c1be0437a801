//! Simple one-shot checksum functions. None of these are cryptographic; they are meant for
//! quick fingerprinting of small data, hash tables and legacy formats.

/// largest prime smaller than 2^16, the modulus of both Adler-32 sums
const MOD_ADLER: u32 = 65521;

/// Compute the Adler-32 checksum of ``data``. Two running sums are kept modulo 65521 and
/// combined into a single 32 bit value, the first sum in the low half.
pub fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;

    for &byte in data {
        a = (a + u32::from(byte)) % MOD_ADLER;
        b = (b + a) % MOD_ADLER;
    }

    (b << 16) | a
}

/// Compute the djb2 hash of ``data``: starting from 5381, every byte is folded in as
/// `hash * 33 + byte` with wrapping arithmetic.
pub fn djb2(data: &[u8]) -> u32 {
    let mut hash_value: u32 = 5381;

    for &byte in data {
        hash_value = hash_value
            .wrapping_shl(5)
            .wrapping_add(hash_value)
            .wrapping_add(u32::from(byte));
    }

    hash_value
}

/// Compute the Fletcher-16 checksum of ``data``. Two running sums are kept modulo 255 and
/// combined into a single 16 bit value, the first sum in the low byte.
pub fn fletcher16(data: &[u8]) -> u16 {
    let mut sum1: u16 = 0;
    let mut sum2: u16 = 0;

    for &byte in data {
        sum1 = (sum1 + u16::from(byte)) % 255;
        sum2 = (sum1 + sum2) % 255;
    }

    (sum2 << 8) | sum1
}

/// Compute the sdbm hash of ``data``: every byte is folded in as
/// `byte + (hash << 6) + (hash << 16) - hash` with wrapping arithmetic.
pub fn sdbm(data: &[u8]) -> u32 {
    let mut hash_value: u32 = 0;

    for &byte in data {
        hash_value = u32::from(byte)
            .wrapping_add(hash_value.wrapping_shl(6))
            .wrapping_add(hash_value.wrapping_shl(16))
            .wrapping_sub(hash_value);
    }

    hash_value
}
