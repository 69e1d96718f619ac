//! # Sigchain Core
//!
//! Pure primitives for deriving signature IDs of sigchain links.
//!
//! This crate contains no I/O, no storage, no networking. Every function is a
//! synchronous computation over caller-supplied bytes and is safe to call
//! concurrently.
//!
//! ## Pipeline
//!
//! ```text
//! armored text ──decode──► SignaturePacket ──derive──► Derivation { envelope, digest, sig_id, link_id }
//! ```
//!
//! - [`decode`] strips armor, reads the MessagePack packet, and rejects unknown
//!   versions and hash types.
//! - [`derive`] cross-checks the statement's client fields, rebuilds the
//!   canonical envelope (see [`canonical`]), and hashes it with SHA-256.
//!
//! ## Key Types
//!
//! - [`SignaturePacket`] - Immutable decoded packet
//! - [`SigId`] - Envelope digest plus format suffix byte (66 hex chars)
//! - [`SigDigest`] - The bare envelope digest (64 hex chars)
//! - [`LinkId`] - Payload digest referenced by a successor's `prev`

pub mod armor;
pub mod canonical;
pub mod crypto;
pub mod derive;
pub mod error;
pub mod limits;
pub mod packet;
pub mod types;

pub use canonical::canonical_envelope;
pub use crypto::{EdDsaKid, HashType};
pub use derive::{derive, derive_unchecked, Derivation, StatementClient};
pub use error::{DecodeError, DeriveError, EncodingError, IdParseError, ValidationError};
pub use limits::DecoderLimits;
pub use packet::{
    decode, decode_bytes, decode_bytes_with_limits, decode_with_limits, PacketBuilder,
    PacketTag, PacketVersion, PrefixHash, SignaturePacket,
};
pub use types::{LinkId, SigDigest, SigId, DIGEST_LEN, SIG_ID_LEN};
