//! # Sigchain Link
//!
//! Places derived links in their chain.
//!
//! A statement names its position (`seqno`) and its predecessor (`prev`).
//! `prev` carries the [`LinkId`](sigchain_core::LinkId) of the previous link,
//! the SHA-256 of its raw payload. It never carries a suffixed sig ID; those
//! are rejected when the statement is read.
//!
//! ```text
//! SignaturePacket ──LinkRecord::from_packet──► LinkRecord ──verify_chain──► ()
//! ```

pub mod error;
pub mod linkage;
pub mod record;
pub mod statement;

pub use error::{LinkError, LinkageError, StatementError};
pub use linkage::{verify_chain, verify_first, verify_next, ChainTip};
pub use record::LinkRecord;
pub use statement::ChainLinkStatement;
