//! `AuditProof`: a proof path witnessing that `leaf_index` is included in
//! a tree of `tree_size`, relative to a tree-type supplied out-of-band.

use serde::{Deserialize, Serialize};

use crate::digitally_signed::DigitallySigned;
use crate::error::{CodecError, Result};
use crate::primitive::{encode_uint, take_hash, take_uint, HASH_LEN};
use crate::tree_type::TreeType;

/// A Merkle inclusion proof for one leaf of either tree scheme.
///
/// The tree-type is never written to the wire (the receiver already
/// knows which tree a proof is for from the endpoint that served it), so
/// [`Self::deserialize`] takes it as an out-of-band parameter rather than
/// reading it from `buf`. For `SegmentInfoTree`, `tree_size` is likewise
/// implicit (`sequence_number + 1`) and is not written either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditProof {
    pub tree_type: TreeType,
    pub sequence_number: u32,
    pub tree_size: u32,
    pub leaf_index: u32,
    pub signature: DigitallySigned,
    pub audit_path: Vec<[u8; 32]>,
}

impl AuditProof {
    /// 1. `Uint(4) sequence_number`.
    /// 2. If `tree_type == LogSegmentTree`: `Uint(4) tree_size`.
    /// 3. `Uint(4) leaf_index`.
    /// 4. `DigitallySigned signature`.
    /// 5. Each `audit_path` entry, 32 bytes, in order.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            12 + self.signature.signature.len() + 4 + self.audit_path.len() * HASH_LEN,
        );
        encode_uint(self.sequence_number as u64, 4, &mut out);
        if self.tree_type == TreeType::LogSegmentTree {
            encode_uint(self.tree_size as u64, 4, &mut out);
        }
        encode_uint(self.leaf_index as u64, 4, &mut out);
        self.signature.write_to(&mut out);
        for node in &self.audit_path {
            out.extend_from_slice(node);
        }
        out
    }

    /// Decodes an audit proof known (out-of-band) to belong to `tree_type`.
    pub fn deserialize(tree_type: TreeType, buf: &[u8]) -> Result<Self> {
        let (sequence_number, rest) =
            take_uint(buf, 4).ok_or(CodecError::ShortBuffer { needed: 4, have: buf.len() })?;

        let (tree_size, rest) = match tree_type {
            TreeType::LogSegmentTree => {
                let (tree_size, rest) =
                    take_uint(rest, 4).ok_or(CodecError::ShortBuffer { needed: 4, have: rest.len() })?;
                (tree_size as u32, rest)
            }
            TreeType::SegmentInfoTree => ((sequence_number + 1) as u32, rest),
        };

        let (leaf_index, rest) =
            take_uint(rest, 4).ok_or(CodecError::ShortBuffer { needed: 4, have: rest.len() })?;

        let (signature, consumed) = DigitallySigned::read_from_string(rest).ok_or_else(|| {
            let err = DigitallySigned::prefix_parse_failure(rest);
            tracing::debug!(?err, "AuditProof signature prefix-parse failed");
            err
        })?;
        let rest = &rest[consumed..];

        if rest.len() % HASH_LEN != 0 {
            tracing::debug!(residual = rest.len(), "AuditProof audit_path misaligned");
            return Err(CodecError::Alignment { residual: rest.len() });
        }
        let mut audit_path = Vec::with_capacity(rest.len() / HASH_LEN);
        let mut cursor = rest;
        while !cursor.is_empty() {
            let (node, next) = take_hash(cursor).expect("alignment checked above");
            audit_path.push(node);
            cursor = next;
        }

        tracing::trace!(len = buf.len(), path_len = audit_path.len(), "AuditProof decoded");
        Ok(Self {
            tree_type,
            sequence_number: sequence_number as u32,
            tree_size,
            leaf_index: leaf_index as u32,
            signature,
            audit_path,
        })
    }
}
