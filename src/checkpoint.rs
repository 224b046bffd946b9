//! Signed Merkle-root checkpoints: `LogSegmentCheckpoint` and `LogHeadCheckpoint`.

use serde::{Deserialize, Serialize};

use crate::digitally_signed::DigitallySigned;
use crate::error::{CodecError, Result};
use crate::primitive::{encode_uint, take_hash, take_uint};
use crate::tree_type::TreeType;

/// A signed commitment to the Merkle root of `segment_size` leaves in
/// segment `sequence_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSegmentCheckpoint {
    pub sequence_number: u32,
    pub segment_size: u32,
    pub signature: DigitallySigned,
    pub root: [u8; 32],
}

impl LogSegmentCheckpoint {
    /// Signed wire form: `Uint(4) sequence_number ‖ Uint(4) segment_size ‖
    /// DigitallySigned signature ‖ Hash root`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(48 + self.signature.signature.len());
        encode_uint(self.sequence_number as u64, 4, &mut out);
        encode_uint(self.segment_size as u64, 4, &mut out);
        self.signature.write_to(&mut out);
        out.extend_from_slice(&self.root);
        out
    }

    /// The material fed to the hasher, distinct from [`Self::serialize`]:
    /// `Uint(1) tree_type=LOG_SEGMENT_TREE ‖ Uint(4) sequence_number ‖
    /// Uint(4) segment_size ‖ Hash root`.
    pub fn serialize_tree_data(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(9 + 32);
        out.push(TreeType::LogSegmentTree.as_byte());
        encode_uint(self.sequence_number as u64, 4, &mut out);
        encode_uint(self.segment_size as u64, 4, &mut out);
        out.extend_from_slice(&self.root);
        out
    }

    pub fn deserialize(buf: &[u8]) -> Result<Self> {
        if buf.len() < 8 {
            return Err(CodecError::ShortBuffer { needed: 8, have: buf.len() });
        }
        let (sequence_number, rest) = take_uint(buf, 4).expect("length checked above");
        let (segment_size, rest) = take_uint(rest, 4).expect("length checked above");
        let Some((signature, consumed)) = DigitallySigned::read_from_string(rest) else {
            let err = DigitallySigned::prefix_parse_failure(rest);
            tracing::debug!(?err, "LogSegmentCheckpoint signature prefix-parse failed");
            return Err(err);
        };
        let rest = &rest[consumed..];
        let Some((root, rest)) = take_hash(rest) else {
            return Err(CodecError::ShortBuffer { needed: 32, have: rest.len() });
        };
        if !rest.is_empty() {
            return Err(CodecError::LengthMismatch { consumed: buf.len() - rest.len(), total: buf.len() });
        }
        tracing::trace!(len = buf.len(), "LogSegmentCheckpoint decoded");
        Ok(Self {
            sequence_number: sequence_number as u32,
            segment_size: segment_size as u32,
            signature,
            root,
        })
    }
}

/// A signed commitment to the Merkle root over the first
/// `sequence_number + 1` segment checkpoints (the "head of the log of
/// logs").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogHeadCheckpoint {
    pub sequence_number: u32,
    pub signature: DigitallySigned,
    pub root: [u8; 32],
}

impl LogHeadCheckpoint {
    /// Signed wire form: `Uint(4) sequence_number ‖ DigitallySigned
    /// signature ‖ Hash root`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(36 + self.signature.signature.len());
        encode_uint(self.sequence_number as u64, 4, &mut out);
        self.signature.write_to(&mut out);
        out.extend_from_slice(&self.root);
        out
    }

    /// Tree-data form, using the `SEGMENT_INFO_TREE` discriminator and no
    /// `segment_size` field: `Uint(1) tree_type ‖ Uint(4) sequence_number ‖
    /// Hash root`.
    pub fn serialize_tree_data(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(5 + 32);
        out.push(TreeType::SegmentInfoTree.as_byte());
        encode_uint(self.sequence_number as u64, 4, &mut out);
        out.extend_from_slice(&self.root);
        out
    }

    pub fn deserialize(buf: &[u8]) -> Result<Self> {
        if buf.len() < 4 {
            return Err(CodecError::ShortBuffer { needed: 4, have: buf.len() });
        }
        let (sequence_number, rest) = take_uint(buf, 4).expect("length checked above");
        let Some((signature, consumed)) = DigitallySigned::read_from_string(rest) else {
            let err = DigitallySigned::prefix_parse_failure(rest);
            tracing::debug!(?err, "LogHeadCheckpoint signature prefix-parse failed");
            return Err(err);
        };
        let rest = &rest[consumed..];
        let Some((root, rest)) = take_hash(rest) else {
            return Err(CodecError::ShortBuffer { needed: 32, have: rest.len() });
        };
        if !rest.is_empty() {
            return Err(CodecError::LengthMismatch { consumed: buf.len() - rest.len(), total: buf.len() });
        }
        tracing::trace!(len = buf.len(), "LogHeadCheckpoint decoded");
        Ok(Self { sequence_number: sequence_number as u32, signature, root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digitally_signed::{HashAlgorithm, SignatureAlgorithm};

    fn empty_sig(hash: u8, sig: u8) -> DigitallySigned {
        DigitallySigned::new(HashAlgorithm::new(hash).unwrap(), SignatureAlgorithm::new(sig).unwrap(), vec![])
    }

    #[test]
    fn log_head_checkpoint_scenario() {
        let cp = LogHeadCheckpoint {
            sequence_number: 7,
            signature: empty_sig(1, 1),
            root: [0u8; 32],
        };
        let mut expected = vec![0x00, 0x00, 0x00, 0x07, 0x01, 0x01, 0x00, 0x00];
        expected.extend_from_slice(&[0u8; 32]);
        assert_eq!(cp.serialize(), expected);
        assert_eq!(cp.serialize().len(), 44);
        assert_eq!(LogHeadCheckpoint::deserialize(&cp.serialize()).unwrap(), cp);
    }

    #[test]
    fn log_segment_checkpoint_round_trips() {
        let cp = LogSegmentCheckpoint {
            sequence_number: 42,
            segment_size: 1024,
            signature: empty_sig(2, 1),
            root: [0xab; 32],
        };
        let encoded = cp.serialize();
        assert_eq!(encoded.len(), 48);
        assert_eq!(LogSegmentCheckpoint::deserialize(&encoded).unwrap(), cp);
    }

    #[test]
    fn tree_data_uses_correct_discriminator() {
        let segment = LogSegmentCheckpoint {
            sequence_number: 1,
            segment_size: 2,
            signature: empty_sig(0, 0),
            root: [1u8; 32],
        };
        assert_eq!(segment.serialize_tree_data()[0], TreeType::LogSegmentTree.as_byte());

        let head = LogHeadCheckpoint { sequence_number: 1, signature: empty_sig(0, 0), root: [1u8; 32] };
        assert_eq!(head.serialize_tree_data()[0], TreeType::SegmentInfoTree.as_byte());
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(LogSegmentCheckpoint::deserialize(&[0u8; 7]).is_err());
        assert!(LogHeadCheckpoint::deserialize(&[0u8; 3]).is_err());
    }

    #[test]
    fn rejects_missing_root_bytes() {
        let cp = LogHeadCheckpoint { sequence_number: 1, signature: empty_sig(0, 0), root: [9u8; 32] };
        let mut encoded = cp.serialize();
        encoded.truncate(encoded.len() - 1);
        assert!(LogHeadCheckpoint::deserialize(&encoded).is_err());
    }

    #[test]
    fn rejects_trailing_bytes() {
        let cp = LogSegmentCheckpoint {
            sequence_number: 1,
            segment_size: 1,
            signature: empty_sig(0, 0),
            root: [9u8; 32],
        };
        let mut encoded = cp.serialize();
        encoded.push(0xff);
        assert!(LogSegmentCheckpoint::deserialize(&encoded).is_err());
    }

    #[test]
    fn tamper_rejection() {
        let cp = LogSegmentCheckpoint {
            sequence_number: 5,
            segment_size: 9,
            signature: empty_sig(1, 1),
            root: [3u8; 32],
        };
        let mut encoded = cp.serialize();
        let last = encoded.len() - 1;
        encoded[last] ^= 0xff;
        match LogSegmentCheckpoint::deserialize(&encoded) {
            Err(_) => {}
            Ok(decoded) => assert_ne!(decoded, cp),
        }
    }
}
