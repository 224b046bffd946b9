//! `DigitallySigned`: an algorithm-tagged, length-prefixed signature envelope.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};
use crate::primitive::{decode_uint, encode_uint, take_uint};

/// Highest valid `HashAlgorithm` value.
pub const MAX_HASH_ALGORITHM: u8 = 6;
/// Highest valid `SignatureAlgorithm` value.
pub const MAX_SIGNATURE_ALGORITHM: u8 = 3;

/// Hash algorithm discriminant, `0..=6`. The concrete algorithms (MD5,
/// SHA-1, SHA-224, …) are left to the signature verifier; this codec only
/// validates that the byte is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashAlgorithm(u8);

impl HashAlgorithm {
    /// Builds a `HashAlgorithm` from a raw byte, rejecting out-of-range values.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_HASH_ALGORITHM {
            return Err(CodecError::BadEnum { value, max: MAX_HASH_ALGORITHM });
        }
        Ok(Self(value))
    }

    /// The raw wire byte.
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Signature algorithm discriminant, `0..=3` (RSA, DSA, ECDSA, etc., treated
/// as opaque by this codec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureAlgorithm(u8);

impl SignatureAlgorithm {
    /// Builds a `SignatureAlgorithm` from a raw byte, rejecting out-of-range values.
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_SIGNATURE_ALGORITHM {
            return Err(CodecError::BadEnum { value, max: MAX_SIGNATURE_ALGORITHM });
        }
        Ok(Self(value))
    }

    /// The raw wire byte.
    pub fn value(self) -> u8 {
        self.0
    }
}

/// `{hash_algo, sig_algo, signature}`, the envelope every checkpoint and
/// proof in this crate signs over.
///
/// Wire form, in order: `hash_algo: Uint(1)`, `sig_algo: Uint(1)`,
/// `len(signature): Uint(2)`, `signature` bytes. A zero-length signature is
/// legal; the length prefix simply reads zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitallySigned {
    pub hash_algo: HashAlgorithm,
    pub sig_algo: SignatureAlgorithm,
    pub signature: Vec<u8>,
}

impl DigitallySigned {
    /// Highest signature length the `Uint(2)` prefix can express.
    pub const MAX_SIGNATURE_LEN: usize = u16::MAX as usize;

    /// Builds a new envelope, panicking if the signature is too long for
    /// the `Uint(2)` length prefix (a programmer error, not a decode error).
    pub fn new(hash_algo: HashAlgorithm, sig_algo: SignatureAlgorithm, signature: Vec<u8>) -> Self {
        assert!(
            signature.len() <= Self::MAX_SIGNATURE_LEN,
            "signature of {} bytes exceeds the {}-byte limit",
            signature.len(),
            Self::MAX_SIGNATURE_LEN
        );
        Self { hash_algo, sig_algo, signature }
    }

    /// Serializes this envelope: `hash_algo ‖ sig_algo ‖ len(signature) ‖ signature`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.signature.len());
        self.write_to(&mut out);
        out
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        encode_uint(self.hash_algo.value() as u64, 1, out);
        encode_uint(self.sig_algo.value() as u64, 1, out);
        encode_uint(self.signature.len() as u64, 2, out);
        out.extend_from_slice(&self.signature);
    }

    /// Prefix-parses a `DigitallySigned` off the front of `buf`, returning
    /// the decoded value and the number of bytes consumed, or `None` if
    /// the buffer is too short or either algorithm byte is out of range.
    pub fn read_from_string(buf: &[u8]) -> Option<(Self, usize)> {
        if buf.len() < 4 {
            return None;
        }
        let hash_algo = HashAlgorithm::new(buf[0]).ok()?;
        let sig_algo = SignatureAlgorithm::new(buf[1]).ok()?;
        let (sig_len, rest) = take_uint(&buf[2..], 2)?;
        let sig_len = sig_len as usize;
        if rest.len() < sig_len {
            return None;
        }
        let signature = rest[..sig_len].to_vec();
        let consumed = 4 + sig_len;
        tracing::trace!(consumed, "DigitallySigned::read_from_string succeeded");
        Some((Self { hash_algo, sig_algo, signature }, consumed))
    }

    /// Strict decode: succeeds only if `read_from_string` consumes the
    /// entire buffer.
    pub fn deserialize(buf: &[u8]) -> Result<Self> {
        let Some((value, consumed)) = Self::read_from_string(buf) else {
            return Err(Self::prefix_parse_failure(buf));
        };
        if consumed != buf.len() {
            tracing::debug!(consumed, total = buf.len(), "DigitallySigned trailing bytes");
            return Err(CodecError::LengthMismatch { consumed, total: buf.len() });
        }
        Ok(value)
    }

    /// `read_from_string` collapses "too short" and "bad enum" into one
    /// `None`; a caller embedding a `DigitallySigned` inside a larger record
    /// calls this to recover which of the two actually happened, so the
    /// outer record's own error stays as informative as a direct decode.
    pub(crate) fn prefix_parse_failure(buf: &[u8]) -> CodecError {
        short_buffer_or_bad_enum(buf)
    }
}

fn short_buffer_or_bad_enum(buf: &[u8]) -> CodecError {
    if buf.len() < 4 {
        return CodecError::ShortBuffer { needed: 4, have: buf.len() };
    }
    if let Err(e) = HashAlgorithm::new(buf[0]) {
        return e;
    }
    if let Err(e) = SignatureAlgorithm::new(buf[1]) {
        return e;
    }
    let sig_len = decode_uint(&buf[2..4]) as usize;
    CodecError::ShortBuffer { needed: 4 + sig_len, have: buf.len() }
}
