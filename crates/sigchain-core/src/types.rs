//! Strong type definitions for sigchain identifiers.
//!
//! A [`SigId`] is the bare [`SigDigest`] of a canonical envelope plus one
//! suffix byte naming the packet format. A [`LinkId`] is what the next link's
//! `prev` field points at. The hex forms have different lengths (66 vs 64) and
//! must never be mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::sha256;
use crate::error::IdParseError;
use crate::packet::PacketVersion;

/// Length of a bare digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a suffixed sig ID in bytes.
pub const SIG_ID_LEN: usize = DIGEST_LEN + 1;

fn parse_digest_hex(s: &str) -> Result<[u8; DIGEST_LEN], IdParseError> {
    if s.len() != DIGEST_LEN * 2 {
        return Err(IdParseError::Length {
            expected: DIGEST_LEN * 2,
            got: s.len(),
        });
    }
    let mut arr = [0u8; DIGEST_LEN];
    hex::decode_to_slice(s, &mut arr)?;
    Ok(arr)
}

/// SHA-256 of a canonical envelope, without any suffix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SigDigest(pub [u8; DIGEST_LEN]);

impl SigDigest {
    /// Hash canonical envelope bytes.
    pub fn of_envelope(envelope: &[u8]) -> Self {
        Self(sha256(envelope))
    }

    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, IdParseError> {
        parse_digest_hex(s).map(Self)
    }

    /// Attach the suffix byte of `version`.
    pub fn with_suffix(self, version: PacketVersion) -> SigId {
        SigId {
            digest: self,
            version,
        }
    }
}

impl fmt::Debug for SigDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigDigest({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for SigDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for SigDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

/// Externally visible signature identifier: `digest || suffix`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SigId {
    digest: SigDigest,
    version: PacketVersion,
}

impl SigId {
    /// The bare digest, as used for comparisons that ignore the format.
    pub const fn digest(&self) -> SigDigest {
        self.digest
    }

    /// The packet format the suffix byte encodes.
    pub const fn version(&self) -> PacketVersion {
        self.version
    }

    pub fn suffix(&self) -> u8 {
        self.version.sig_id_suffix()
    }

    /// Raw `digest || suffix` bytes.
    pub fn to_bytes(&self) -> [u8; SIG_ID_LEN] {
        let mut out = [0u8; SIG_ID_LEN];
        out[..DIGEST_LEN].copy_from_slice(&self.digest.0);
        out[DIGEST_LEN] = self.suffix();
        out
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse the suffixed form (66 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, IdParseError> {
        if s.len() != SIG_ID_LEN * 2 {
            return Err(IdParseError::Length {
                expected: SIG_ID_LEN * 2,
                got: s.len(),
            });
        }
        let mut arr = [0u8; SIG_ID_LEN];
        hex::decode_to_slice(s, &mut arr)?;
        let suffix = arr[DIGEST_LEN];
        let version = PacketVersion::from_sig_id_suffix(suffix)
            .ok_or(IdParseError::UnknownSuffix(suffix))?;
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&arr[..DIGEST_LEN]);
        Ok(SigDigest(digest).with_suffix(version))
    }

    /// Parse either the suffixed form or a bare 64-character digest.
    ///
    /// Bare digests are assumed to belong to the current packet format.
    pub fn parse_lenient(s: &str) -> Result<Self, IdParseError> {
        if s.len() == DIGEST_LEN * 2 {
            return Ok(SigDigest::from_hex(s)?.with_suffix(PacketVersion::CURRENT));
        }
        Self::from_hex(s)
    }

    /// Compare against an externally supplied hex ID, case-insensitively.
    ///
    /// Accepts the same forms as [`SigId::parse_lenient`].
    pub fn matches(&self, expected: &str) -> bool {
        match Self::parse_lenient(&expected.to_ascii_lowercase()) {
            Ok(other) => other == *self,
            Err(_) => false,
        }
    }
}

impl fmt::Debug for SigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigId({}..{:02x})", &self.digest.to_hex()[..16], self.suffix())
    }
}

impl fmt::Display for SigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for SigId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// SHA-256 of a statement payload: the value a successor's `prev` carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub [u8; DIGEST_LEN]);

impl LinkId {
    /// Hash raw statement payload bytes.
    pub fn of_payload(payload: &[u8]) -> Self {
        Self(sha256(payload))
    }

    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, IdParseError> {
        parse_digest_hex(s).map(Self)
    }
}

impl fmt::Debug for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for LinkId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
