//! SHA-256-based Merkle hash oracle.
//!
//! The checkpoint and proof types in this crate never call these
//! functions themselves. The hash function is treated as an external
//! oracle they only feed preimages to via `serialize_tree_data`.
//! This module exists for tests that need a concrete root to check a
//! signature against, and for callers who want a ready RFC 6962-style
//! implementation rather than bringing their own.

use sha2::{Digest, Sha256};

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

/// Hashes a leaf preimage with the standard domain-separating `0x00` prefix.
pub fn hash_leaf(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(data);
    hasher.finalize().into()
}

/// Hashes two child nodes with the standard domain-separating `0x01` prefix.
pub fn hash_node(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([NODE_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}
