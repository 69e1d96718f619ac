//! Error types for chain linkage.

use sigchain_core::{DeriveError, LinkId};
use thiserror::Error;

/// Problems reading the linkage fields of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("statement is not readable JSON: {0}")]
    Unreadable(String),

    #[error("seqno must be positive")]
    ZeroSeqno,

    #[error("prev is a suffixed sig ID ({0} hex chars), expected a bare 64-char digest")]
    PrevIsSigId(usize),

    #[error("invalid prev digest: {0}")]
    InvalidPrev(String),
}

/// Violations of the chain ordering rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkageError {
    #[error("first link must have seqno 1, got {0}")]
    FirstLinkSeqno(u64),

    #[error("first link must not carry prev, got {0}")]
    UnexpectedPrev(LinkId),

    #[error("invalid sequence number: expected {expected}, got {got}")]
    SeqnoGap { expected: u64, got: u64 },

    #[error("link {seqno} has no prev")]
    MissingPrev { seqno: u64 },

    #[error("link {seqno} prev mismatch: expected {expected}, got {got}")]
    PrevMismatch {
        seqno: u64,
        expected: LinkId,
        got: LinkId,
    },
}

/// Errors building or checking a link record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("derivation failed: {0}")]
    Derive(#[from] DeriveError),

    #[error("statement error: {0}")]
    Statement(#[from] StatementError),

    #[error("linkage error: {0}")]
    Linkage(#[from] LinkageError),
}
