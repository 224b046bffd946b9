//! Fixed-width big-endian integer primitives.
//!
//! Every multi-byte field on the wire is MSB-first in exactly 1, 2, or 4
//! bytes, never a native-endian or variable-width (varint) encoding. This
//! matches the TLS-style presentation the rest of the codec follows and
//! sidesteps endianness bugs entirely.

/// Number of bytes a 32-byte Merkle node occupies on the wire.
pub const HASH_LEN: usize = 32;

/// Appends `value` to `out` as `width` big-endian bytes.
///
/// # Panics
///
/// Panics if `value` does not fit in `width` bytes, or if `width` exceeds 8.
/// Both are programmer errors: the caller is expected to know the field
/// width and pass a value that already satisfies it.
pub fn encode_uint(value: u64, width: usize, out: &mut Vec<u8>) {
    assert!(width <= 8, "uint width {width} exceeds native width");
    if width < 8 {
        let max = 1u64 << (8 * width);
        assert!(value < max, "value {value} does not fit in {width} bytes");
    }
    let full = value.to_be_bytes();
    out.extend_from_slice(&full[8 - width..]);
}

/// Parses the first `buf.len()` bytes of `buf` as a big-endian unsigned
/// integer. Never fails: any byte slice of length `<= 8` has a value.
///
/// # Panics
///
/// Panics if `buf.len()` exceeds 8 (no native integer is that wide).
pub fn decode_uint(buf: &[u8]) -> u64 {
    assert!(buf.len() <= 8, "uint width {} exceeds native width", buf.len());
    let mut value: u64 = 0;
    for &byte in buf {
        value = (value << 8) | byte as u64;
    }
    value
}

/// Parses a fixed-width field of `width` bytes out of `buf`, returning the
/// value and the remainder of the buffer, or `None` if `buf` is too short.
pub fn take_uint(buf: &[u8], width: usize) -> Option<(u64, &[u8])> {
    if buf.len() < width {
        return None;
    }
    let (field, rest) = buf.split_at(width);
    Some((decode_uint(field), rest))
}

/// Splits a `[u8; 32]` Merkle node off the front of `buf`.
pub fn take_hash(buf: &[u8]) -> Option<([u8; 32], &[u8])> {
    if buf.len() < HASH_LEN {
        return None;
    }
    let (field, rest) = buf.split_at(HASH_LEN);
    let mut hash = [0u8; HASH_LEN];
    hash.copy_from_slice(field);
    Some((hash, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_each_supported_width() {
        for width in [1usize, 2, 4] {
            let max = if width == 4 { u32::MAX as u64 } else { (1u64 << (8 * width)) - 1 };
            for value in [0u64, 1, max / 2, max] {
                let mut out = Vec::new();
                encode_uint(value, width, &mut out);
                assert_eq!(out.len(), width);
                assert_eq!(decode_uint(&out), value);
            }
        }
    }

    #[test]
    fn encode_is_msb_first() {
        let mut out = Vec::new();
        encode_uint(0x01020304, 4, &mut out);
        assert_eq!(out, vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn encode_rejects_overflow() {
        let mut out = Vec::new();
        encode_uint(256, 1, &mut out);
    }

    #[test]
    fn take_uint_reports_short_buffer() {
        assert!(take_uint(&[0x01, 0x02], 4).is_none());
        assert_eq!(take_uint(&[0x00, 0x00, 0x00, 0x07, 0xff], 4), Some((7u64, &[0xffu8][..])));
    }

    #[test]
    fn take_hash_requires_32_bytes() {
        assert!(take_hash(&[0u8; 31]).is_none());
        let buf = [7u8; 33];
        let (hash, rest) = take_hash(&buf).unwrap();
        assert_eq!(hash, [7u8; 32]);
        assert_eq!(rest, &[7u8][..]);
    }
}
