//! Error types for sigchain core.

use thiserror::Error;

/// Errors produced while turning armored text into a [`SignaturePacket`].
///
/// All of these are fatal to the packet being decoded.
///
/// [`SignaturePacket`]: crate::packet::SignaturePacket
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed armor: {0}")]
    MalformedArmor(String),

    #[error("malformed packet structure: {0}")]
    MalformedStructure(String),

    #[error("unsupported packet version: {0}")]
    UnsupportedVersion(u64),

    #[error("unsupported hash type: {0}")]
    UnsupportedHashType(u64),

    #[error("unsupported packet tag: {0:#06x}")]
    UnsupportedTag(u64),

    #[error("{what} too large: {actual} bytes exceeds limit of {limit}")]
    TooLarge {
        what: &'static str,
        limit: usize,
        actual: usize,
    },
}

/// Errors from the client name/version cross-check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("statement payload is not readable JSON: {0}")]
    StatementUnreadable(String),

    #[error("statement payload has no {0}")]
    MissingClientField(&'static str),

    #[error("{field} mismatch: expected {expected:?}, got {actual:?}")]
    ClientMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
}

/// Errors raised while rebuilding the canonical envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("cannot reconstruct envelope field `{field}`: {reason}")]
    ReconstructionFailed { field: &'static str, reason: String },
}

impl EncodingError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        EncodingError::ReconstructionFailed {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors from [`derive`](crate::derive::derive).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

/// Errors from parsing a hex-encoded identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    #[error("invalid hex: {0}")]
    Hex(String),

    #[error("expected {expected} hex characters, got {got}")]
    Length { expected: usize, got: usize },

    #[error("unknown sig ID suffix byte {0:#04x}")]
    UnknownSuffix(u8),
}

impl From<hex::FromHexError> for IdParseError {
    fn from(e: hex::FromHexError) -> Self {
        IdParseError::Hex(e.to_string())
    }
}
