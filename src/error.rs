//! Error types for identifier and digest codecs.
//!
//! Every failure in this crate is a deterministic data-shape violation, raised
//! at the point it is detected. Nothing here is transient, so nothing is
//! retried.

use crate::registry::Code;
use thiserror::Error;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input has the wrong shape: length, prefix, alphabet, or container
    /// fields.
    Validation,
    /// The caller combined arguments that must not be combined.
    ContractViolation,
}

/// An error from encoding, decoding, or constructing a value.
///
/// # Example
///
/// ```
/// use authentic::{C1, ErrorKind};
///
/// let err = C1::from_bytes(&[0u8; 3]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert!(err.to_string().contains("26"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte buffer (or decoded text) does not have the variant's length.
    #[error("{code} expects {expected} bytes, got {actual}")]
    InvalidLength {
        /// Variant being constructed.
        code: Code,
        /// Required length.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// Decoded text starts with a prefix that does not belong to the variant.
    #[error("{code} prefix expected, found {found:02x?}")]
    PrefixMismatch {
        /// Variant being decoded.
        code: Code,
        /// The leading bytes actually found (at most 6).
        found: Vec<u8>,
    },

    /// Text is not valid base64 in either alphabet.
    #[error("malformed base64 text: {0}")]
    MalformedText(String),

    /// A compound access-key text does not split into exactly two parts.
    #[error("encoding expects 2 parts separated by '.', found {0} part(s)")]
    MalformedAccessKey(usize),

    /// A secret was passed alongside a compound access-key text.
    #[error("cannot specify a secret when decoding a K1 access key")]
    SecretConflict,

    /// The multihash container names a hash other than sha2-512.
    #[error("multihash is expected to be 'sha2-512' (0x13), not {0:#x}")]
    UnsupportedHash(u64),

    /// The multihash container declares a digest length other than 64.
    #[error("sha2-512 digest should be 64 bytes, not {0}")]
    DigestLength(u64),

    /// The multihash container is truncated or otherwise unreadable.
    #[error("malformed multihash container: {0}")]
    MalformedMultihash(&'static str),

    /// A short code or prefix is not in the registry.
    #[error("unknown identifier code: {0}")]
    UnknownCode(String),
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SecretConflict => ErrorKind::ContractViolation,
            _ => ErrorKind::Validation,
        }
    }

    /// Returns `true` if the input had the wrong shape.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    /// Returns `true` if the caller combined incompatible arguments.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::ContractViolation)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::MalformedText(err.to_string())
    }
}

/// Result type for codec operations.
pub type Result<T> = core::result::Result<T, Error>;
