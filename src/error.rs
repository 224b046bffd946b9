//! Error types for the checkpoint codec.
//!
//! This module defines the error taxonomy that every strict decoder in the
//! crate reports through. Prefix-parse entry points (anything named
//! `read_from_string` or embedded in another record's decoder) keep the
//! lighter-weight "sentinel" contract described alongside them and return
//! `Option` instead of `Result<_, CodecError>`.

use thiserror::Error;

/// Errors that can occur while decoding a wire record.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CodecError {
    /// Fewer bytes remained than a fixed-width field required.
    #[error("buffer too short: need {needed} bytes, have {have}")]
    ShortBuffer {
        /// Bytes required by the field being parsed.
        needed: usize,
        /// Bytes actually available.
        have: usize,
    },

    /// `hash_algo` or `sig_algo` fell outside its valid range.
    #[error("algorithm byte {value} out of range (max {max})")]
    BadEnum {
        /// The out-of-range byte read from the wire.
        value: u8,
        /// The highest value the field accepts.
        max: u8,
    },

    /// A strict decoder was handed more bytes than the record accounts for.
    #[error("{consumed} bytes consumed but buffer has {total}")]
    LengthMismatch {
        /// Bytes consumed by the strict decode.
        consumed: usize,
        /// Total bytes supplied.
        total: usize,
    },

    /// The bytes following a signature were not a multiple of 32.
    #[error("audit path residual of {residual} bytes is not a multiple of 32")]
    Alignment {
        /// Leftover byte count after the fixed-width fields and signature.
        residual: usize,
    },
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
