//! Error types for the sigchain facade.

use sigchain_core::{DecodeError, DeriveError, IdParseError, SigId};
use sigchain_link::{LinkError, LinkageError};
use thiserror::Error;

/// Errors that can occur while decoding and deriving sig IDs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigchainError {
    /// The armored packet could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Client cross-check or envelope reconstruction failed.
    #[error("derive error: {0}")]
    Derive(#[from] DeriveError),

    /// Statement or linkage problem.
    #[error("link error: {0}")]
    Link(#[from] LinkError),

    /// An externally supplied sig ID could not be parsed.
    #[error("invalid sig ID: {0}")]
    InvalidSigId(#[from] IdParseError),

    /// The derived sig ID differs from the one the caller expected.
    #[error("sig ID mismatch: expected {expected}, computed {computed}")]
    SigIdMismatch { expected: String, computed: SigId },

    /// Link `index` of a batch failed.
    #[error("link {index}: {source}")]
    AtLink {
        index: usize,
        #[source]
        source: Box<SigchainError>,
    },
}

impl From<LinkageError> for SigchainError {
    fn from(e: LinkageError) -> Self {
        SigchainError::Link(LinkError::Linkage(e))
    }
}

impl SigchainError {
    pub(crate) fn at(index: usize, source: SigchainError) -> Self {
        SigchainError::AtLink {
            index,
            source: Box::new(source),
        }
    }
}

/// Result type for sigchain operations.
pub type Result<T> = std::result::Result<T, SigchainError>;
