//! Read-only view of the linkage fields of a chain statement.
//!
//! Only the fields needed to place a link in its chain are read. The rest of
//! the statement stays opaque.

use serde::Deserialize;

use sigchain_core::{LinkId, DIGEST_LEN, SIG_ID_LEN};

use crate::error::StatementError;

#[derive(Debug, Deserialize)]
struct RawStatement {
    seqno: u64,
    #[serde(default)]
    prev: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    ctime: Option<i64>,
    #[serde(default)]
    body: Option<RawBody>,
}

#[derive(Debug, Deserialize)]
struct RawBody {
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

/// Linkage fields of one chain statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLinkStatement {
    /// Position in the chain, starting at 1.
    pub seqno: u64,
    /// Digest of the previous link's statement, absent for the first link.
    pub prev: Option<LinkId>,
    /// Statement type (`eldest`, `subkey`, `track`, ...). Informational only.
    pub statement_type: Option<String>,
    pub tag: Option<String>,
    /// Author-claimed creation time. Untrusted.
    pub ctime: Option<i64>,
}

impl ChainLinkStatement {
    /// Parse from raw payload bytes.
    pub fn parse(payload: &[u8]) -> Result<Self, StatementError> {
        let raw: RawStatement = serde_json::from_slice(payload)
            .map_err(|e| StatementError::Unreadable(e.to_string()))?;

        if raw.seqno == 0 {
            return Err(StatementError::ZeroSeqno);
        }

        let prev = match raw.prev.as_deref() {
            None => None,
            Some(hex) => Some(parse_prev(hex)?),
        };

        Ok(Self {
            seqno: raw.seqno,
            prev,
            statement_type: raw.body.and_then(|b| b.kind),
            tag: raw.tag,
            ctime: raw.ctime,
        })
    }
}

fn parse_prev(hex: &str) -> Result<LinkId, StatementError> {
    if hex.len() == SIG_ID_LEN * 2 {
        return Err(StatementError::PrevIsSigId(hex.len()));
    }
    if hex.len() != DIGEST_LEN * 2 {
        return Err(StatementError::InvalidPrev(format!(
            "expected {} hex chars, got {}",
            DIGEST_LEN * 2,
            hex.len()
        )));
    }
    LinkId::from_hex(hex).map_err(|e| StatementError::InvalidPrev(e.to_string()))
}
