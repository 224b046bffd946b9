//! The single-byte discriminator tying a record to a Merkle tree scheme.

use serde::{Deserialize, Serialize};

/// Selects which Merkle scheme a checkpoint, `AuditProof`, or
/// `ConsistencyProof` belongs to: the per-segment entry tree, or the tree
/// of segment checkpoints (the "log of logs").
///
/// The numeric assignments are part of the wire contract and must match
/// the source-order assignment used by `SerializeTreeData`:
/// `LogSegmentCheckpoint` embeds `LOG_SEGMENT_TREE` (0) and
/// `LogHeadCheckpoint` embeds `SEGMENT_INFO_TREE` (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TreeType {
    /// The tree of leaves within one segment.
    LogSegmentTree = 0,
    /// The tree of per-segment checkpoints (the head tree).
    SegmentInfoTree = 1,
}

impl TreeType {
    /// The single byte this variant is written as in `SerializeTreeData`.
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}
