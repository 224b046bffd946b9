//! # CT Checkpoint Codec
//!
//! Byte-exact serialization for a Certificate Transparency append-only
//! log's signed checkpoints and Merkle audit proofs.
//!
//! This crate is a pure codec: it does no I/O, holds no shared state, and
//! treats both the Merkle hash function and the signature algorithms as
//! external oracles. One byte of drift here breaks signature verification
//! for every auditor and monitor downstream, so every decoder is strict
//! about what it accepts and every encoder panics rather than emit a
//! malformed record.
//!
//! ## Layout
//!
//! - [`primitive`]: fixed-width big-endian integers, the substrate
//!   everything else is built on.
//! - [`digitally_signed`]: the `DigitallySigned` signature envelope.
//! - [`checkpoint`]: `LogSegmentCheckpoint` and `LogHeadCheckpoint`.
//! - [`segment_data`]: `SegmentData`, pairing the two checkpoint kinds.
//! - [`audit_proof`]: `AuditProof`, an inclusion proof relative to a
//!   tree-type supplied out-of-band.
//! - [`consistency_proof`]: `ConsistencyProof`, the append-only-extension
//!   counterpart to `AuditProof`.
//! - [`tree_type`]: the `TreeType` discriminator threaded through the
//!   two proof kinds and the two checkpoint tree-data forms.
//! - [`hash`]: an optional SHA-256 Merkle oracle for tests and callers
//!   who want one; never called by the codec types themselves.
//!
//! ## Quick start
//!
//! ```rust
//! use ct_checkpoint_codec::digitally_signed::{DigitallySigned, HashAlgorithm, SignatureAlgorithm};
//! use ct_checkpoint_codec::checkpoint::LogHeadCheckpoint;
//!
//! let checkpoint = LogHeadCheckpoint {
//!     sequence_number: 7,
//!     signature: DigitallySigned::new(
//!         HashAlgorithm::new(1).unwrap(),
//!         SignatureAlgorithm::new(1).unwrap(),
//!         vec![],
//!     ),
//!     root: [0u8; 32],
//! };
//!
//! let encoded = checkpoint.serialize();
//! let decoded = LogHeadCheckpoint::deserialize(&encoded).unwrap();
//! assert_eq!(decoded, checkpoint);
//! ```

pub mod audit_proof;
pub mod checkpoint;
pub mod consistency_proof;
pub mod digitally_signed;
pub mod error;
pub mod hash;
pub mod primitive;
pub mod segment_data;
pub mod tree_type;

pub use audit_proof::AuditProof;
pub use checkpoint::{LogHeadCheckpoint, LogSegmentCheckpoint};
pub use consistency_proof::ConsistencyProof;
pub use digitally_signed::{DigitallySigned, HashAlgorithm, SignatureAlgorithm};
pub use error::{CodecError, Result};
pub use segment_data::SegmentData;
pub use tree_type::TreeType;
