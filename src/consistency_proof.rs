//! `ConsistencyProof`: witnesses that a tree of `second_tree_size` is an
//! append-only extension of a tree of `first_tree_size`.
//!
//! Grounded in the same audit-path shape as
//! [`crate::audit_proof::AuditProof`]; see `DESIGN.md` for the rationale.

use serde::{Deserialize, Serialize};

use crate::digitally_signed::DigitallySigned;
use crate::error::{CodecError, Result};
use crate::primitive::{encode_uint, take_hash, take_uint, HASH_LEN};
use crate::tree_type::TreeType;

/// A proof that one committed root is an append-only extension of an
/// earlier one. Shares the primitive codec and signature envelope with
/// `AuditProof`, but carries two tree sizes instead of a leaf index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyProof {
    pub tree_type: TreeType,
    pub first_tree_size: u32,
    pub second_tree_size: u32,
    pub signature: DigitallySigned,
    pub consistency_path: Vec<[u8; 32]>,
}

impl ConsistencyProof {
    /// `Uint(4) first_tree_size ‖ Uint(4) second_tree_size ‖
    /// DigitallySigned signature ‖` each `consistency_path` entry, 32
    /// bytes, in order.
    ///
    /// # Panics
    ///
    /// Panics if `first_tree_size > second_tree_size` (a structural
    /// precondition violation, not an untrusted-input error).
    pub fn serialize(&self) -> Vec<u8> {
        assert!(
            self.first_tree_size <= self.second_tree_size,
            "first_tree_size {} exceeds second_tree_size {}",
            self.first_tree_size,
            self.second_tree_size
        );
        let mut out = Vec::with_capacity(
            8 + 4 + self.signature.signature.len() + self.consistency_path.len() * HASH_LEN,
        );
        encode_uint(self.first_tree_size as u64, 4, &mut out);
        encode_uint(self.second_tree_size as u64, 4, &mut out);
        self.signature.write_to(&mut out);
        for node in &self.consistency_path {
            out.extend_from_slice(node);
        }
        out
    }

    /// Decodes a consistency proof known (out-of-band) to belong to
    /// `tree_type`. Does not re-check `first_tree_size <= second_tree_size`;
    /// that comparison is the consumer's job once both sizes are known.
    pub fn deserialize(tree_type: TreeType, buf: &[u8]) -> Result<Self> {
        let (first_tree_size, rest) =
            take_uint(buf, 4).ok_or(CodecError::ShortBuffer { needed: 4, have: buf.len() })?;
        let (second_tree_size, rest) =
            take_uint(rest, 4).ok_or(CodecError::ShortBuffer { needed: 4, have: rest.len() })?;

        let (signature, consumed) = DigitallySigned::read_from_string(rest).ok_or_else(|| {
            let err = DigitallySigned::prefix_parse_failure(rest);
            tracing::debug!(?err, "ConsistencyProof signature prefix-parse failed");
            err
        })?;
        let rest = &rest[consumed..];

        if rest.len() % HASH_LEN != 0 {
            tracing::debug!(residual = rest.len(), "ConsistencyProof path misaligned");
            return Err(CodecError::Alignment { residual: rest.len() });
        }
        let mut consistency_path = Vec::with_capacity(rest.len() / HASH_LEN);
        let mut cursor = rest;
        while !cursor.is_empty() {
            let (node, next) = take_hash(cursor).expect("alignment checked above");
            consistency_path.push(node);
            cursor = next;
        }

        tracing::trace!(len = buf.len(), path_len = consistency_path.len(), "ConsistencyProof decoded");
        Ok(Self {
            tree_type,
            first_tree_size: first_tree_size as u32,
            second_tree_size: second_tree_size as u32,
            signature,
            consistency_path,
        })
    }
}
