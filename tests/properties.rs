//! Property-based coverage of the round-trip law, prefix-parse discipline,
//! and tamper rejection, using `proptest` rather than hand enumerating
//! every case.

use proptest::prelude::*;

use ct_checkpoint_codec::audit_proof::AuditProof;
use ct_checkpoint_codec::checkpoint::{LogHeadCheckpoint, LogSegmentCheckpoint};
use ct_checkpoint_codec::digitally_signed::{DigitallySigned, HashAlgorithm, SignatureAlgorithm};
use ct_checkpoint_codec::tree_type::TreeType;

fn arb_digitally_signed() -> impl Strategy<Value = DigitallySigned> {
    (0u8..=6, 0u8..=3, proptest::collection::vec(any::<u8>(), 0..=64)).prop_map(|(h, s, sig)| {
        DigitallySigned::new(HashAlgorithm::new(h).unwrap(), SignatureAlgorithm::new(s).unwrap(), sig)
    })
}

fn arb_hash() -> impl Strategy<Value = [u8; 32]> {
    proptest::array::uniform32(any::<u8>())
}

proptest! {
    #[test]
    fn digitally_signed_round_trips(d in arb_digitally_signed()) {
        let encoded = d.serialize();
        prop_assert_eq!(DigitallySigned::deserialize(&encoded).unwrap(), d.clone());

        let (decoded, consumed) = DigitallySigned::read_from_string(&encoded).unwrap();
        prop_assert_eq!(decoded, d);
        prop_assert_eq!(consumed, encoded.len());
    }

    #[test]
    fn digitally_signed_prefix_parse_ignores_suffix(
        d in arb_digitally_signed(),
        suffix in proptest::collection::vec(any::<u8>(), 0..=16),
    ) {
        let mut buf = d.serialize();
        let own_len = buf.len();
        buf.extend_from_slice(&suffix);

        let (decoded, consumed) = DigitallySigned::read_from_string(&buf).unwrap();
        prop_assert_eq!(decoded, d);
        prop_assert_eq!(consumed, own_len);

        if !suffix.is_empty() {
            prop_assert!(DigitallySigned::deserialize(&buf).is_err());
        }
    }

    #[test]
    fn log_segment_checkpoint_round_trips(
        sequence_number in any::<u32>(),
        segment_size in any::<u32>(),
        signature in arb_digitally_signed(),
        root in arb_hash(),
    ) {
        let cp = LogSegmentCheckpoint { sequence_number, segment_size, signature, root };
        let encoded = cp.serialize();
        prop_assert_eq!(LogSegmentCheckpoint::deserialize(&encoded).unwrap(), cp);
    }

    #[test]
    fn log_head_checkpoint_round_trips(
        sequence_number in any::<u32>(),
        signature in arb_digitally_signed(),
        root in arb_hash(),
    ) {
        let cp = LogHeadCheckpoint { sequence_number, signature, root };
        let encoded = cp.serialize();
        prop_assert_eq!(LogHeadCheckpoint::deserialize(&encoded).unwrap(), cp);
    }

    #[test]
    fn audit_proof_round_trips_log_segment_tree(
        sequence_number in any::<u32>(),
        tree_size in any::<u32>(),
        leaf_index in any::<u32>(),
        signature in arb_digitally_signed(),
        path in proptest::collection::vec(arb_hash(), 0..=8),
    ) {
        let proof = AuditProof {
            tree_type: TreeType::LogSegmentTree,
            sequence_number,
            tree_size,
            leaf_index,
            signature,
            audit_path: path,
        };
        let encoded = proof.serialize();
        prop_assert_eq!(AuditProof::deserialize(TreeType::LogSegmentTree, &encoded).unwrap(), proof);
    }

    #[test]
    fn audit_proof_round_trips_segment_info_tree(
        sequence_number in any::<u32>(),
        leaf_index in any::<u32>(),
        signature in arb_digitally_signed(),
        path in proptest::collection::vec(arb_hash(), 0..=8),
    ) {
        let proof = AuditProof {
            tree_type: TreeType::SegmentInfoTree,
            sequence_number,
            tree_size: sequence_number.wrapping_add(1),
            leaf_index,
            signature,
            audit_path: path,
        };
        let encoded = proof.serialize();
        let decoded = AuditProof::deserialize(TreeType::SegmentInfoTree, &encoded).unwrap();
        prop_assert_eq!(decoded, proof);
    }

    #[test]
    fn checkpoint_tamper_rejection(
        sequence_number in any::<u32>(),
        segment_size in any::<u32>(),
        signature in arb_digitally_signed(),
        root in arb_hash(),
        flip_index in any::<usize>(),
    ) {
        let cp = LogSegmentCheckpoint { sequence_number, segment_size, signature, root };
        let mut encoded = cp.serialize();
        let i = flip_index % encoded.len();
        encoded[i] ^= 0xff;
        match LogSegmentCheckpoint::deserialize(&encoded) {
            Err(_) => {}
            Ok(decoded) => prop_assert_ne!(decoded, cp),
        }
    }
}
