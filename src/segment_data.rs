//! `SegmentData`: ties a segment checkpoint and a head checkpoint together
//! under one timestamp and sequence number.

use serde::{Deserialize, Serialize};

use crate::checkpoint::{LogHeadCheckpoint, LogSegmentCheckpoint};
use crate::digitally_signed::DigitallySigned;
use crate::error::{CodecError, Result};
use crate::primitive::{encode_uint, take_uint};

/// The wire form of `SegmentData` does not carry either checkpoint's
/// Merkle root; those are reconstructed by the verifier from the
/// corresponding `serialize_tree_data()` forms and the signature material.
/// This type therefore holds exactly the fields `SerializeSegmentInfo`
/// puts on the wire; [`Self::with_roots`] recombines it with externally
/// known roots into the two checkpoint types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentData {
    /// Shared by both the segment checkpoint and the head checkpoint; see
    /// the concurrent-sequence invariant below.
    pub sequence_number: u32,
    pub timestamp: u32,
    pub segment_size: u32,
    pub segment_signature: DigitallySigned,
    pub head_signature: DigitallySigned,
}

impl SegmentData {
    /// `Uint(4) sequence_number ‖ Uint(4) timestamp ‖ Uint(4) segment_size
    /// ‖ DigitallySigned segment_sig ‖ DigitallySigned head_sig`.
    pub fn serialize_segment_info(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            12 + 4 + self.segment_signature.signature.len() + 4 + self.head_signature.signature.len(),
        );
        encode_uint(self.sequence_number as u64, 4, &mut out);
        encode_uint(self.timestamp as u64, 4, &mut out);
        encode_uint(self.segment_size as u64, 4, &mut out);
        self.segment_signature.write_to(&mut out);
        self.head_signature.write_to(&mut out);
        out
    }

    /// The first embedded signature is parsed in prefix mode (it only
    /// consumes its own declared bytes); the second is parsed in strict
    /// mode (it must consume everything left in `buf`). The decoder sets
    /// `log_head.sequence_number := log_segment.sequence_number`, which
    /// this type enforces structurally by storing one shared field.
    pub fn deserialize_segment_info(buf: &[u8]) -> Result<Self> {
        if buf.len() < 12 {
            return Err(CodecError::ShortBuffer { needed: 12, have: buf.len() });
        }
        let (sequence_number, rest) = take_uint(buf, 4).expect("length checked above");
        let (timestamp, rest) = take_uint(rest, 4).expect("length checked above");
        let (segment_size, rest) = take_uint(rest, 4).expect("length checked above");

        let Some((segment_signature, consumed)) = DigitallySigned::read_from_string(rest) else {
            let err = DigitallySigned::prefix_parse_failure(rest);
            tracing::debug!(?err, "SegmentData segment_sig prefix-parse failed");
            return Err(err);
        };
        let rest = &rest[consumed..];

        let head_signature = DigitallySigned::deserialize(rest).map_err(|err| {
            tracing::debug!(?err, residual = rest.len(), "SegmentData head_sig strict-parse failed");
            err
        })?;

        tracing::trace!(len = buf.len(), "SegmentData decoded");
        Ok(Self {
            sequence_number: sequence_number as u32,
            timestamp: timestamp as u32,
            segment_size: segment_size as u32,
            segment_signature,
            head_signature,
        })
    }

    /// Recombines this value with externally-known Merkle roots into the
    /// pair of checkpoints it logically represents.
    pub fn with_roots(
        &self,
        segment_root: [u8; 32],
        head_root: [u8; 32],
    ) -> (LogSegmentCheckpoint, LogHeadCheckpoint) {
        (
            LogSegmentCheckpoint {
                sequence_number: self.sequence_number,
                segment_size: self.segment_size,
                signature: self.segment_signature.clone(),
                root: segment_root,
            },
            LogHeadCheckpoint {
                sequence_number: self.sequence_number,
                signature: self.head_signature.clone(),
                root: head_root,
            },
        )
    }
}
