//! Signature packets and the packet decoder.
//!
//! A packet is a MessagePack map:
//!
//! ```text
//! {
//!   "body":    { "detached": bool, "hash_type": uint, "key": bin,
//!                "payload": bin, "sig": bin, "sig_type": uint },
//!   "hash":    { "type": uint, "value": bin },     // optional
//!   "tag":     uint,
//!   "version": uint,
//! }
//! ```
//!
//! Decoding keeps every field needed to rebuild the exact envelope; the
//! payload is held as opaque bytes and never re-serialized.

use bytes::Bytes;
use rmpv::Value;
use serde::{Deserialize, Serialize};

use crate::armor;
use crate::canonical::encode_envelope;
use crate::crypto::HashType;
use crate::error::DecodeError;
use crate::limits::DecoderLimits;

/// Packet format versions this implementation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PacketVersion {
    V1,
}

impl PacketVersion {
    /// The version new packets are produced with.
    pub const CURRENT: Self = Self::V1;

    pub fn from_wire(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::V1),
            _ => None,
        }
    }

    pub fn to_wire(self) -> u8 {
        match self {
            Self::V1 => 1,
        }
    }

    /// Byte appended to the envelope digest to form a sig ID.
    pub fn sig_id_suffix(self) -> u8 {
        match self {
            Self::V1 => 0x0f,
        }
    }

    pub fn from_sig_id_suffix(suffix: u8) -> Option<Self> {
        match suffix {
            0x0f => Some(Self::V1),
            _ => None,
        }
    }
}

/// Outer packet tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum PacketTag {
    Signature = 0x0202,
}

impl PacketTag {
    pub fn from_wire(value: u64) -> Option<Self> {
        match value {
            0x0202 => Some(Self::Signature),
            _ => None,
        }
    }

    pub fn to_wire(self) -> u16 {
        self as u16
    }
}

/// The optional outer `hash` entry: a digest of the signed message, named by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixHash {
    pub hash_type: HashType,
    pub value: Bytes,
}

/// A decoded signature packet. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePacket {
    version: PacketVersion,
    tag: PacketTag,
    hash_type: HashType,
    detached: bool,
    signing_key: Bytes,
    signature: Bytes,
    payload: Bytes,
    sig_type: u64,
    prefix_hash: Option<PrefixHash>,
}

impl SignaturePacket {
    pub fn version(&self) -> PacketVersion {
        self.version
    }

    pub fn tag(&self) -> PacketTag {
        self.tag
    }

    pub fn hash_type(&self) -> HashType {
        self.hash_type
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Raw key identifier bytes, exactly as decoded.
    pub fn signing_key(&self) -> &[u8] {
        &self.signing_key
    }

    /// Raw signature bytes, exactly as decoded.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Raw statement payload bytes.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn sig_type(&self) -> u64 {
        self.sig_type
    }

    pub fn prefix_hash(&self) -> Option<&PrefixHash> {
        self.prefix_hash.as_ref()
    }
}

/// Builder for packets assembled from parts rather than decoded.
///
/// Fields are taken as given; length constraints are enforced when the
/// envelope is reconstructed.
#[derive(Debug, Clone)]
pub struct PacketBuilder {
    packet: SignaturePacket,
}

impl PacketBuilder {
    /// Start a V1 signature packet around a statement payload.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            packet: SignaturePacket {
                version: PacketVersion::CURRENT,
                tag: PacketTag::Signature,
                hash_type: HashType::Sha512,
                detached: true,
                signing_key: Bytes::new(),
                signature: Bytes::new(),
                payload: payload.into(),
                sig_type: 32,
                prefix_hash: None,
            },
        }
    }

    pub fn signing_key(mut self, key: impl Into<Bytes>) -> Self {
        self.packet.signing_key = key.into();
        self
    }

    pub fn signature(mut self, sig: impl Into<Bytes>) -> Self {
        self.packet.signature = sig.into();
        self
    }

    pub fn hash_type(mut self, hash_type: HashType) -> Self {
        self.packet.hash_type = hash_type;
        self
    }

    pub fn detached(mut self, detached: bool) -> Self {
        self.packet.detached = detached;
        self
    }

    pub fn sig_type(mut self, sig_type: u64) -> Self {
        self.packet.sig_type = sig_type;
        self
    }

    pub fn prefix_hash(mut self, hash_type: HashType, value: impl Into<Bytes>) -> Self {
        self.packet.prefix_hash = Some(PrefixHash {
            hash_type,
            value: value.into(),
        });
        self
    }

    pub fn build(self) -> SignaturePacket {
        self.packet
    }
}

/// Outer map keys.
mod keys {
    pub const BODY: &str = "body";
    pub const HASH: &str = "hash";
    pub const TAG: &str = "tag";
    pub const VERSION: &str = "version";

    pub const DETACHED: &str = "detached";
    pub const HASH_TYPE: &str = "hash_type";
    pub const KEY: &str = "key";
    pub const PAYLOAD: &str = "payload";
    pub const SIG: &str = "sig";
    pub const SIG_TYPE: &str = "sig_type";

    pub const PREFIX_TYPE: &str = "type";
    pub const PREFIX_VALUE: &str = "value";
}

/// Decode armored text with default limits.
pub fn decode(armored: &str) -> Result<SignaturePacket, DecodeError> {
    decode_with_limits(armored, &DecoderLimits::default())
}

/// Decode armored text, enforcing `limits`.
pub fn decode_with_limits(
    armored: &str,
    limits: &DecoderLimits,
) -> Result<SignaturePacket, DecodeError> {
    limits.check_armored(armored.len())?;
    let bytes = armor::dearmor(armored)?;
    decode_bytes_with_limits(&bytes, limits)
}

/// Decode raw packet bytes (already de-armored) with default limits.
pub fn decode_bytes(bytes: &[u8]) -> Result<SignaturePacket, DecodeError> {
    decode_bytes_with_limits(bytes, &DecoderLimits::default())
}

/// Decode raw packet bytes, enforcing `limits` on the payload.
pub fn decode_bytes_with_limits(
    bytes: &[u8],
    limits: &DecoderLimits,
) -> Result<SignaturePacket, DecodeError> {
    check_declared_lengths(bytes)?;

    let mut reader = bytes;
    let value = rmpv::decode::read_value(&mut reader)
        .map_err(|e| DecodeError::MalformedStructure(format!("invalid msgpack: {}", e)))?;
    if !reader.is_empty() {
        return Err(DecodeError::MalformedStructure(format!(
            "{} trailing bytes after packet",
            reader.len()
        )));
    }

    let packet = packet_from_value(&value, limits)?;

    if encode_envelope(&packet) != bytes {
        tracing::warn!(
            len = bytes.len(),
            "packet is not canonically encoded; sig ID will follow the canonical form"
        );
    }
    tracing::debug!(
        payload_len = packet.payload.len(),
        has_prefix_hash = packet.prefix_hash.is_some(),
        "decoded signature packet"
    );

    Ok(packet)
}

fn packet_from_value(
    value: &Value,
    limits: &DecoderLimits,
) -> Result<SignaturePacket, DecodeError> {
    let outer = Fields::from_map(value, "packet", &[keys::BODY, keys::HASH, keys::TAG, keys::VERSION])?;

    // Version gates everything else.
    let raw_version = outer.uint(keys::VERSION)?;
    let version = PacketVersion::from_wire(raw_version)
        .ok_or(DecodeError::UnsupportedVersion(raw_version))?;

    let raw_tag = outer.uint(keys::TAG)?;
    let tag = PacketTag::from_wire(raw_tag).ok_or(DecodeError::UnsupportedTag(raw_tag))?;

    let body = Fields::from_map(
        outer.required(keys::BODY)?,
        keys::BODY,
        &[
            keys::DETACHED,
            keys::HASH_TYPE,
            keys::KEY,
            keys::PAYLOAD,
            keys::SIG,
            keys::SIG_TYPE,
        ],
    )?;

    let raw_hash_type = body.uint(keys::HASH_TYPE)?;
    let hash_type =
        HashType::from_wire(raw_hash_type).ok_or(DecodeError::UnsupportedHashType(raw_hash_type))?;

    let payload = body.binary(keys::PAYLOAD)?;
    limits.check_payload(payload.len())?;

    let prefix_hash = match outer.optional(keys::HASH) {
        Some(value) => {
            let hash = Fields::from_map(
                value,
                keys::HASH,
                &[keys::PREFIX_TYPE, keys::PREFIX_VALUE],
            )?;
            let raw_type = hash.uint(keys::PREFIX_TYPE)?;
            Some(PrefixHash {
                hash_type: HashType::from_wire(raw_type)
                    .ok_or(DecodeError::UnsupportedHashType(raw_type))?,
                value: Bytes::copy_from_slice(hash.binary(keys::PREFIX_VALUE)?),
            })
        }
        None => None,
    };

    Ok(SignaturePacket {
        version,
        tag,
        hash_type,
        detached: body.boolean(keys::DETACHED)?,
        signing_key: Bytes::copy_from_slice(body.binary(keys::KEY)?),
        signature: Bytes::copy_from_slice(body.binary(keys::SIG)?),
        payload: Bytes::copy_from_slice(payload),
        sig_type: body.uint(keys::SIG_TYPE)?,
        prefix_hash,
    })
}

/// Walk the msgpack headers and reject any declared length or element count
/// that runs past the end of the input. The value reader then never sizes a
/// buffer from an untrusted header.
fn check_declared_lengths(bytes: &[u8]) -> Result<(), DecodeError> {
    let mut pos = 0usize;
    let mut pending: u64 = 1;

    while pending > 0 {
        let marker = *bytes
            .get(pos)
            .ok_or_else(|| malformed("packet", "truncated input"))?;
        pos += 1;
        pending -= 1;

        // (bytes to skip, child values to read)
        let (skip, children): (u64, u64) = match marker {
            0x00..=0x7f | 0xe0..=0xff | 0xc0 | 0xc2 | 0xc3 => (0, 0),
            0x80..=0x8f => (0, 2 * u64::from(marker & 0x0f)),
            0x90..=0x9f => (0, u64::from(marker & 0x0f)),
            0xa0..=0xbf => (u64::from(marker & 0x1f), 0),
            0xc1 => return Err(malformed("packet", "reserved marker 0xc1")),
            0xc4 | 0xd9 => (read_len(bytes, &mut pos, 1)?, 0),
            0xc5 | 0xda => (read_len(bytes, &mut pos, 2)?, 0),
            0xc6 | 0xdb => (read_len(bytes, &mut pos, 4)?, 0),
            0xc7 => (read_len(bytes, &mut pos, 1)? + 1, 0),
            0xc8 => (read_len(bytes, &mut pos, 2)? + 1, 0),
            0xc9 => (read_len(bytes, &mut pos, 4)? + 1, 0),
            0xcc | 0xd0 => (1, 0),
            0xcd | 0xd1 => (2, 0),
            0xca | 0xce | 0xd2 => (4, 0),
            0xcb | 0xcf | 0xd3 => (8, 0),
            0xd4 => (2, 0),
            0xd5 => (3, 0),
            0xd6 => (5, 0),
            0xd7 => (9, 0),
            0xd8 => (17, 0),
            0xdc => (0, read_len(bytes, &mut pos, 2)?),
            0xdd => (0, read_len(bytes, &mut pos, 4)?),
            0xde => (0, 2 * read_len(bytes, &mut pos, 2)?),
            0xdf => (0, 2 * read_len(bytes, &mut pos, 4)?),
        };

        let remaining = (bytes.len() - pos) as u64;
        pending = pending.saturating_add(children);
        if skip > remaining || pending > remaining {
            return Err(malformed(
                "packet",
                &format!("declared length exceeds input at offset {}", pos),
            ));
        }
        pos += skip as usize;
    }
    Ok(())
}

fn read_len(bytes: &[u8], pos: &mut usize, width: usize) -> Result<u64, DecodeError> {
    let field = bytes
        .get(*pos..*pos + width)
        .ok_or_else(|| malformed("packet", "truncated length"))?;
    *pos += width;
    Ok(field.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

/// String-keyed view over a decoded msgpack map.
struct Fields<'a> {
    name: &'static str,
    entries: Vec<(&'a str, &'a Value)>,
}

impl<'a> Fields<'a> {
    fn from_map(
        value: &'a Value,
        name: &'static str,
        allowed: &[&str],
    ) -> Result<Self, DecodeError> {
        let map = match value {
            Value::Map(m) => m,
            _ => return Err(malformed(name, "expected map")),
        };

        let mut entries: Vec<(&'a str, &'a Value)> = Vec::with_capacity(map.len());
        for (k, v) in map {
            let key = match k {
                Value::String(s) => s
                    .as_str()
                    .ok_or_else(|| malformed(name, "non-UTF-8 key"))?,
                _ => return Err(malformed(name, "non-string key")),
            };
            if !allowed.iter().any(|a| *a == key) {
                return Err(malformed(name, &format!("unknown field `{}`", key)));
            }
            if entries.iter().any(|(seen, _)| *seen == key) {
                return Err(malformed(name, &format!("duplicate field `{}`", key)));
            }
            entries.push((key, v));
        }

        Ok(Self { name, entries })
    }

    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    fn required(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.optional(key)
            .ok_or_else(|| malformed(self.name, &format!("missing field `{}`", key)))
    }

    fn uint(&self, key: &str) -> Result<u64, DecodeError> {
        match self.required(key)? {
            Value::Integer(i) => i
                .as_u64()
                .ok_or_else(|| malformed(self.name, &format!("field `{}` is negative", key))),
            _ => Err(self.wrong_type(key, "unsigned integer")),
        }
    }

    fn binary(&self, key: &str) -> Result<&'a [u8], DecodeError> {
        match self.required(key)? {
            Value::Binary(b) => Ok(b.as_slice()),
            _ => Err(self.wrong_type(key, "binary")),
        }
    }

    fn boolean(&self, key: &str) -> Result<bool, DecodeError> {
        match self.required(key)? {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.wrong_type(key, "boolean")),
        }
    }

    fn wrong_type(&self, key: &str, expected: &str) -> DecodeError {
        malformed(self.name, &format!("field `{}` is not {}", key, expected))
    }
}

fn malformed(context: &str, detail: &str) -> DecodeError {
    DecodeError::MalformedStructure(format!("{}: {}", context, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::EdDsaKid;
    use crate::limits::DEFAULT_MAX_PAYLOAD_LEN;
    use crate::types::SigDigest;

    fn sample_packet() -> SignaturePacket {
        PacketBuilder::new(&br#"{"client":{"name":"c","version":"1"}}"#[..])
            .signing_key(EdDsaKid::from_public_key(&[0x11; 32]).as_bytes().to_vec())
            .signature(vec![0x22; 64])
            .build()
    }

    fn outer_map(entries: Vec<(&str, Value)>) -> Vec<u8> {
        let value = Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (Value::from(k), v))
                .collect(),
        );
        let mut buf = Vec::new();
        rmpv::encode::write_value(&mut buf, &value).unwrap();
        buf
    }

    fn body_value() -> Value {
        Value::Map(vec![
            (Value::from("detached"), Value::from(true)),
            (Value::from("hash_type"), Value::from(10)),
            (Value::from("key"), Value::Binary(vec![1; 35])),
            (Value::from("payload"), Value::Binary(b"{}".to_vec())),
            (Value::from("sig"), Value::Binary(vec![2; 64])),
            (Value::from("sig_type"), Value::from(32)),
        ])
    }

    #[test]
    fn test_decode_canonical_bytes() {
        let packet = sample_packet();
        let bytes = encode_envelope(&packet);
        let decoded = decode_bytes(&bytes).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_non_canonical_wire_follows_canonical_form() {
        let packet = sample_packet();
        let canonical = encode_envelope(&packet);
        // version 1 as uint8 instead of a positive fixint
        assert_eq!(canonical.last(), Some(&0x01));
        let mut wire = canonical.clone();
        wire.pop();
        wire.extend_from_slice(&[0xcc, 0x01]);

        let decoded = decode_bytes(&wire).unwrap();
        assert_eq!(decoded, packet);
        assert_eq!(encode_envelope(&decoded), canonical);
        assert_ne!(encode_envelope(&decoded), wire);

        let derivation = crate::derive::derive_unchecked(&decoded).unwrap();
        assert_eq!(derivation.envelope, canonical);
        assert_eq!(derivation.digest, SigDigest::of_envelope(&canonical));
        assert_ne!(derivation.digest, SigDigest::of_envelope(&wire));
    }

    #[test]
    fn test_decode_armored() {
        let packet = sample_packet();
        let text = armor::encode(&encode_envelope(&packet));
        assert_eq!(decode(&text).unwrap(), packet);

        let framed = armor::frame(&encode_envelope(&packet), armor::DEFAULT_LABEL);
        assert_eq!(decode(&framed).unwrap(), packet);
    }

    #[test]
    fn test_unsupported_version() {
        let bytes = outer_map(vec![
            ("body", body_value()),
            ("tag", Value::from(0x0202)),
            ("version", Value::from(2)),
        ]);
        assert_eq!(decode_bytes(&bytes), Err(DecodeError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_unsupported_hash_type() {
        let mut body = body_value();
        if let Value::Map(entries) = &mut body {
            entries[1].1 = Value::from(3);
        }
        let bytes = outer_map(vec![
            ("body", body),
            ("tag", Value::from(0x0202)),
            ("version", Value::from(1)),
        ]);
        assert_eq!(decode_bytes(&bytes), Err(DecodeError::UnsupportedHashType(3)));
    }

    #[test]
    fn test_unsupported_tag() {
        let bytes = outer_map(vec![
            ("body", body_value()),
            ("tag", Value::from(0x0201)),
            ("version", Value::from(1)),
        ]);
        assert_eq!(decode_bytes(&bytes), Err(DecodeError::UnsupportedTag(0x0201)));
    }

    #[test]
    fn test_missing_body_field() {
        let mut body = body_value();
        if let Value::Map(entries) = &mut body {
            entries.retain(|(k, _)| k.as_str() != Some("sig"));
        }
        let bytes = outer_map(vec![
            ("body", body),
            ("tag", Value::from(0x0202)),
            ("version", Value::from(1)),
        ]);
        let err = decode_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedStructure(ref m) if m.contains("`sig`")));
    }

    #[test]
    fn test_wrong_wire_type() {
        let mut body = body_value();
        if let Value::Map(entries) = &mut body {
            entries[3].1 = Value::from("{}");
        }
        let bytes = outer_map(vec![
            ("body", body),
            ("tag", Value::from(0x0202)),
            ("version", Value::from(1)),
        ]);
        let err = decode_bytes(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedStructure(ref m) if m.contains("payload")));
    }

    #[test]
    fn test_unknown_and_trailing() {
        let bytes = outer_map(vec![
            ("body", body_value()),
            ("extra", Value::Nil),
            ("tag", Value::from(0x0202)),
            ("version", Value::from(1)),
        ]);
        assert!(matches!(
            decode_bytes(&bytes),
            Err(DecodeError::MalformedStructure(_))
        ));

        let mut bytes = outer_map(vec![
            ("body", body_value()),
            ("tag", Value::from(0x0202)),
            ("version", Value::from(1)),
        ]);
        assert!(decode_bytes(&bytes).is_ok());
        bytes.push(0xc0);
        assert!(matches!(
            decode_bytes(&bytes),
            Err(DecodeError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_not_a_map() {
        assert!(matches!(
            decode_bytes(&[0x01]),
            Err(DecodeError::MalformedStructure(_))
        ));
        assert!(matches!(
            decode_bytes(&[]),
            Err(DecodeError::MalformedStructure(_))
        ));
    }

    #[test]
    fn test_payload_limit() {
        let packet = sample_packet();
        let bytes = encode_envelope(&packet);
        let limits = DecoderLimits {
            max_payload_len: 4,
            ..DecoderLimits::default()
        };
        assert!(matches!(
            decode_bytes_with_limits(&bytes, &limits),
            Err(DecodeError::TooLarge { what: "payload", .. })
        ));
    }

    #[test]
    fn test_unbounded_limits_accept_large_payload() {
        let packet = PacketBuilder::new(vec![b' '; DEFAULT_MAX_PAYLOAD_LEN + 1])
            .signing_key(EdDsaKid::from_public_key(&[0x11; 32]).as_bytes().to_vec())
            .signature(vec![0x22; 64])
            .build();
        let text = armor::encode(&encode_envelope(&packet));
        assert!(matches!(
            decode(&text),
            Err(DecodeError::TooLarge { what: "payload", .. })
        ));
        let decoded = decode_with_limits(&text, &DecoderLimits::unbounded()).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn test_armored_limit() {
        let limits = DecoderLimits {
            max_armored_len: 8,
            ..DecoderLimits::default()
        };
        assert!(matches!(
            decode_with_limits("aGVsbG8gd29ybGQ=", &limits),
            Err(DecodeError::TooLarge { what: "armored text", .. })
        ));
    }

    #[test]
    fn test_oversized_declared_length() {
        // bin32 claiming 4 GiB with three bytes behind it
        assert!(matches!(
            decode_bytes(&[0xc6, 0xff, 0xff, 0xff, 0xff, 0x01, 0x02, 0x03]),
            Err(DecodeError::MalformedStructure(ref m)) if m.contains("exceeds")
        ));
        // map32 claiming more entries than bytes
        assert!(decode_bytes(&[0xdf, 0x00, 0x01, 0x00, 0x00, 0xc0]).is_err());
        assert!(decode_bytes(&[0xc1]).is_err());
    }

    #[test]
    fn test_version_suffix_mapping() {
        assert_eq!(PacketVersion::V1.sig_id_suffix(), 0x0f);
        assert_eq!(PacketVersion::from_sig_id_suffix(0x0f), Some(PacketVersion::V1));
        assert_eq!(PacketVersion::from_wire(0), None);
    }
}
