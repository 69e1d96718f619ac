//! Hash algorithm identifiers, SHA-256 hashing, and key identifiers.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::EncodingError;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash algorithm identifiers carried in packets.
///
/// Wire values follow the OpenPGP hash algorithm registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HashType {
    Sha256 = 8,
    Sha384 = 9,
    Sha512 = 10,
    Sha224 = 11,
}

impl HashType {
    /// Try to parse from the wire value.
    pub fn from_wire(value: u64) -> Option<Self> {
        match value {
            8 => Some(Self::Sha256),
            9 => Some(Self::Sha384),
            10 => Some(Self::Sha512),
            11 => Some(Self::Sha224),
            _ => None,
        }
    }

    /// The wire value.
    pub fn to_wire(self) -> u8 {
        self as u8
    }

    /// Output length of the algorithm in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key identifier version byte.
pub const KID_VERSION: u8 = 0x01;

/// Key type byte for NaCl EdDSA (Ed25519) keys.
pub const KID_TYPE_EDDSA: u8 = 0x20;

/// Trailing byte of every key identifier.
pub const KID_TRAILER: u8 = 0x0a;

/// Total length of an EdDSA key identifier.
pub const EDDSA_KID_LEN: usize = 35;

/// Length of a NaCl EdDSA signature.
pub const EDDSA_SIG_LEN: usize = 64;

/// A NaCl EdDSA key identifier: `version || type || public_key[32] || trailer`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdDsaKid([u8; EDDSA_KID_LEN]);

impl EdDsaKid {
    /// Build a KID around a raw 32-byte Ed25519 public key.
    pub fn from_public_key(key: &[u8; 32]) -> Self {
        let mut kid = [0u8; EDDSA_KID_LEN];
        kid[0] = KID_VERSION;
        kid[1] = KID_TYPE_EDDSA;
        kid[2..34].copy_from_slice(key);
        kid[34] = KID_TRAILER;
        Self(kid)
    }

    /// Validate raw KID bytes as decoded from a packet.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError> {
        let kid: [u8; EDDSA_KID_LEN] = bytes.try_into().map_err(|_| {
            EncodingError::field(
                "key",
                format!("expected {} bytes, got {}", EDDSA_KID_LEN, bytes.len()),
            )
        })?;
        if kid[0] != KID_VERSION {
            return Err(EncodingError::field(
                "key",
                format!("unknown KID version {:#04x}", kid[0]),
            ));
        }
        if kid[1] != KID_TYPE_EDDSA {
            return Err(EncodingError::field(
                "key",
                format!("not an EdDSA key (type {:#04x})", kid[1]),
            ));
        }
        if kid[34] != KID_TRAILER {
            return Err(EncodingError::field("key", "missing KID trailer byte"));
        }
        Ok(Self(kid))
    }

    /// The embedded Ed25519 public key.
    pub fn public_key(&self) -> [u8; 32] {
        let mut key = [0u8; 32];
        key.copy_from_slice(&self.0[2..34]);
        key
    }

    pub const fn as_bytes(&self) -> &[u8; EDDSA_KID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for EdDsaKid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdDsaKid({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for EdDsaKid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_answer() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_type_wire_values() {
        assert_eq!(HashType::from_wire(10), Some(HashType::Sha512));
        assert_eq!(HashType::from_wire(8), Some(HashType::Sha256));
        assert_eq!(HashType::from_wire(2), None);
        assert_eq!(HashType::Sha512.to_wire(), 10);
        assert_eq!(HashType::Sha256.digest_len(), 32);
    }

    #[test]
    fn test_kid_roundtrip() {
        let kid = EdDsaKid::from_public_key(&[0x42; 32]);
        let parsed = EdDsaKid::from_slice(kid.as_bytes()).unwrap();
        assert_eq!(kid, parsed);
        assert_eq!(parsed.public_key(), [0x42; 32]);
        assert!(kid.to_hex().starts_with("0120"));
        assert!(kid.to_hex().ends_with("0a"));
    }

    #[test]
    fn test_kid_rejects_bad_bytes() {
        assert!(EdDsaKid::from_slice(&[0x01; 34]).is_err());

        let mut bytes = *EdDsaKid::from_public_key(&[0x11; 32]).as_bytes();
        bytes[1] = 0x11;
        assert!(EdDsaKid::from_slice(&bytes).is_err());

        let mut bytes = *EdDsaKid::from_public_key(&[0x11; 32]).as_bytes();
        bytes[34] = 0x00;
        assert!(EdDsaKid::from_slice(&bytes).is_err());
    }
}
