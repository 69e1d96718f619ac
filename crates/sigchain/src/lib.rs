//! # Sigchain
//!
//! Signature IDs for sigchain links.
//!
//! A sigchain link is an armored, MessagePack-encoded signature packet that
//! wraps a JSON statement. Its sig ID is the SHA-256 of the packet's canonical
//! envelope followed by one byte naming the packet format, rendered as 66
//! lowercase hex characters.
//!
//! ## Overview
//!
//! - **Decode**: strip armor, read the packet, reject unknown formats
//! - **Derive**: cross-check the statement's client, rebuild the envelope, hash
//! - **Link**: check seqno and `prev` ordering across a run of links
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sigchain::{Deriver, DeriverConfig};
//!
//! fn example(armored: &str) -> sigchain::Result<()> {
//!     let deriver = Deriver::new(DeriverConfig::default());
//!
//!     // Derive, checking the statement was written by the expected client
//!     let (_envelope, sig_id) = deriver.sig_id(armored, "keybase.io go client", "1.0.16")?;
//!     println!("{}", sig_id);
//!
//!     // Or compare against an ID fetched from elsewhere
//!     deriver.verify_expected(armored, "keybase.io go client", "1.0.16", &sig_id.to_hex())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `sigchain::core` - Decoder, deriver and identifier types
//! - `sigchain::link` - Statement linkage checks

pub mod deriver;
pub mod error;

pub use sigchain_core as core;
pub use sigchain_link as link;

pub use deriver::{Deriver, DeriverConfig};
pub use error::{Result, SigchainError};

pub use sigchain_core::{
    DecoderLimits, Derivation, LinkId, PacketVersion, SigDigest, SigId, SignaturePacket,
};
pub use sigchain_link::{ChainTip, LinkRecord};
