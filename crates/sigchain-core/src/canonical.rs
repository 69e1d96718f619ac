//! Canonical MessagePack encoding of signature envelopes.
//!
//! The envelope is rebuilt from decoded fields with deterministic rules:
//! - Map keys are strings, sorted by their UTF-8 bytes (not by encoded length)
//! - Integers, strings, binaries and maps use the smallest valid header
//! - The payload is copied verbatim
//!
//! **CRITICAL**: sig IDs of every existing chain depend on this exact byte
//! layout. Any change breaks cross-implementation verification.

use crate::crypto::{EdDsaKid, EDDSA_SIG_LEN};
use crate::error::EncodingError;
use crate::packet::SignaturePacket;

/// An envelope node, borrowed from the packet.
#[derive(Debug, Clone)]
enum Node<'a> {
    Bool(bool),
    UInt(u64),
    Bin(&'a [u8]),
    Map(Vec<(&'static str, Node<'a>)>),
}

/// Rebuild the canonical envelope of `packet`, checking field constraints.
///
/// The key must be a well-formed EdDSA key identifier, the signature must be
/// 64 bytes, and a prefix hash value must match the length of its hash type.
pub fn canonical_envelope(packet: &SignaturePacket) -> Result<Vec<u8>, EncodingError> {
    EdDsaKid::from_slice(packet.signing_key())?;

    if packet.signature().len() != EDDSA_SIG_LEN {
        return Err(EncodingError::field(
            "sig",
            format!(
                "expected {} bytes, got {}",
                EDDSA_SIG_LEN,
                packet.signature().len()
            ),
        ));
    }

    if let Some(prefix) = packet.prefix_hash() {
        let expected = prefix.hash_type.digest_len();
        if prefix.value.len() != expected {
            return Err(EncodingError::field(
                "hash",
                format!(
                    "{} value must be {} bytes, got {}",
                    prefix.hash_type,
                    expected,
                    prefix.value.len()
                ),
            ));
        }
    }

    Ok(encode_envelope(packet))
}

/// Encode `packet` without checking field constraints.
pub(crate) fn encode_envelope(packet: &SignaturePacket) -> Vec<u8> {
    let value = envelope_node(packet);
    let mut buf = Vec::with_capacity(packet.payload().len() + 192);
    encode_node(&mut buf, &value);
    buf
}

fn envelope_node(packet: &SignaturePacket) -> Node<'_> {
    let body = Node::Map(vec![
        ("detached", Node::Bool(packet.is_detached())),
        ("hash_type", Node::UInt(packet.hash_type().to_wire().into())),
        ("key", Node::Bin(packet.signing_key())),
        ("payload", Node::Bin(packet.payload())),
        ("sig", Node::Bin(packet.signature())),
        ("sig_type", Node::UInt(packet.sig_type())),
    ]);

    let mut entries = Vec::with_capacity(4);
    entries.push(("body", body));
    if let Some(prefix) = packet.prefix_hash() {
        entries.push((
            "hash",
            Node::Map(vec![
                ("type", Node::UInt(prefix.hash_type.to_wire().into())),
                ("value", Node::Bin(&prefix.value)),
            ]),
        ));
    }
    entries.push(("tag", Node::UInt(packet.tag().to_wire().into())));
    entries.push(("version", Node::UInt(packet.version().to_wire().into())));

    Node::Map(entries)
}

fn encode_node(buf: &mut Vec<u8>, node: &Node<'_>) {
    match node {
        Node::Bool(b) => buf.push(if *b { 0xc3 } else { 0xc2 }),
        Node::UInt(n) => encode_uint(buf, *n),
        Node::Bin(b) => encode_bin(buf, b),
        Node::Map(entries) => encode_map_canonical(buf, entries),
    }
}

/// Encode an unsigned integer in its smallest form.
fn encode_uint(buf: &mut Vec<u8>, n: u64) {
    if n <= 0x7f {
        buf.push(n as u8);
    } else if n <= 0xff {
        buf.push(0xcc);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(0xcd);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(0xce);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(0xcf);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

fn encode_str(buf: &mut Vec<u8>, s: &str) {
    let len = s.len();
    if len <= 31 {
        buf.push(0xa0 | len as u8);
    } else if len <= 0xff {
        buf.push(0xd9);
        buf.push(len as u8);
    } else if len <= 0xffff {
        buf.push(0xda);
        buf.extend_from_slice(&(len as u16).to_be_bytes());
    } else {
        buf.push(0xdb);
        buf.extend_from_slice(&(len as u32).to_be_bytes());
    }
    buf.extend_from_slice(s.as_bytes());
}

fn encode_bin(buf: &mut Vec<u8>, bytes: &[u8]) {
    let len = bytes.len();
    if len <= 0xff {
        buf.push(0xc4);
        buf.push(len as u8);
    } else if len <= 0xffff {
        buf.push(0xc5);
        buf.extend_from_slice(&(len as u16).to_be_bytes());
    } else {
        buf.push(0xc6);
        buf.extend_from_slice(&(len as u32).to_be_bytes());
    }
    buf.extend_from_slice(bytes);
}

/// Encode a map with keys sorted by their string bytes.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(&'static str, Node<'_>)]) {
    let mut sorted: Vec<&(&'static str, Node<'_>)> = entries.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let len = sorted.len();
    if len <= 15 {
        buf.push(0x80 | len as u8);
    } else if len <= 0xffff {
        buf.push(0xde);
        buf.extend_from_slice(&(len as u16).to_be_bytes());
    } else {
        buf.push(0xdf);
        buf.extend_from_slice(&(len as u32).to_be_bytes());
    }

    for (key, value) in sorted {
        encode_str(buf, key);
        encode_node(buf, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::HashType;
    use crate::packet::PacketBuilder;

    fn builder() -> PacketBuilder {
        PacketBuilder::new(&b"{}"[..])
            .signing_key(EdDsaKid::from_public_key(&[0x11; 32]).as_bytes().to_vec())
            .signature(vec![0x22; 64])
    }

    #[test]
    fn test_integer_encoding() {
        let mut buf = Vec::new();
        encode_uint(&mut buf, 0x7f);
        assert_eq!(buf, vec![0x7f]);

        buf.clear();
        encode_uint(&mut buf, 0x80);
        assert_eq!(buf, vec![0xcc, 0x80]);

        buf.clear();
        encode_uint(&mut buf, 0x0202);
        assert_eq!(buf, vec![0xcd, 0x02, 0x02]);

        buf.clear();
        encode_uint(&mut buf, 0x1_0000);
        assert_eq!(buf, vec![0xce, 0x00, 0x01, 0x00, 0x00]);

        buf.clear();
        encode_uint(&mut buf, u64::MAX);
        assert_eq!(buf[0], 0xcf);
        assert_eq!(buf.len(), 9);
    }

    #[test]
    fn test_bin_and_str_headers() {
        let mut buf = Vec::new();
        encode_bin(&mut buf, &[0u8; 35]);
        assert_eq!(&buf[..2], &[0xc4, 35]);

        buf.clear();
        encode_bin(&mut buf, &[0u8; 1079]);
        assert_eq!(&buf[..3], &[0xc5, 0x04, 0x37]);

        buf.clear();
        encode_str(&mut buf, "version");
        assert_eq!(buf, b"\xa7version");
    }

    #[test]
    fn test_map_keys_sorted_by_string_bytes() {
        let mut buf = Vec::new();
        let entries = vec![
            ("version", Node::UInt(1)),
            ("tag", Node::UInt(2)),
            ("hash", Node::UInt(3)),
        ];
        encode_map_canonical(&mut buf, &entries);

        // Shorter "tag" must not sort before "hash".
        let mut expected = vec![0x83];
        expected.extend_from_slice(b"\xa4hash\x03");
        expected.extend_from_slice(b"\xa3tag\x02");
        expected.extend_from_slice(b"\xa7version\x01");
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_envelope_layout_without_prefix_hash() {
        let envelope = canonical_envelope(&builder().build()).unwrap();
        assert_eq!(envelope[0], 0x83);
        assert_eq!(&envelope[1..6], b"\xa4body");
        assert_eq!(envelope[6], 0x86);
        assert!(envelope.ends_with(b"\xa3tag\xcd\x02\x02\xa7version\x01"));
    }

    #[test]
    fn test_envelope_layout_with_prefix_hash() {
        let packet = builder().prefix_hash(HashType::Sha256, vec![0x33; 32]).build();
        let envelope = canonical_envelope(&packet).unwrap();
        assert_eq!(envelope[0], 0x84);
        let needle = b"\xa4hash\x82\xa4type\x08\xa5value\xc4\x20";
        assert!(envelope.windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn test_payload_copied_verbatim() {
        // Non-normalized JSON: whitespace and key order must survive.
        let payload = b"{ \"b\":1,  \"a\":2 }".to_vec();
        let packet = builder().build();
        let packet = PacketBuilder::new(payload.clone())
            .signing_key(packet.signing_key().to_vec())
            .signature(packet.signature().to_vec())
            .build();
        let envelope = canonical_envelope(&packet).unwrap();
        assert!(envelope.windows(payload.len()).any(|w| w == payload.as_slice()));
    }

    #[test]
    fn test_bad_signature_length() {
        let packet = builder().signature(vec![0x22; 63]).build();
        let err = canonical_envelope(&packet).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::ReconstructionFailed { field: "sig", .. }
        ));
    }

    #[test]
    fn test_bad_key() {
        let packet = builder().signing_key(vec![0x01; 32]).build();
        let err = canonical_envelope(&packet).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::ReconstructionFailed { field: "key", .. }
        ));
    }

    #[test]
    fn test_bad_prefix_hash_length() {
        let packet = builder().prefix_hash(HashType::Sha256, vec![0x33; 64]).build();
        let err = canonical_envelope(&packet).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::ReconstructionFailed { field: "hash", .. }
        ));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn read(bytes: &[u8]) -> rmpv::Value {
            let mut reader = bytes;
            let value = rmpv::decode::read_value(&mut reader).unwrap();
            assert!(reader.is_empty());
            value
        }

        proptest! {
            #[test]
            fn uint_is_readable_and_minimal(n in any::<u64>()) {
                let mut buf = Vec::new();
                encode_uint(&mut buf, n);
                prop_assert_eq!(read(&buf).as_u64(), Some(n));
                let expected_len = match n {
                    0..=0x7f => 1,
                    0x80..=0xff => 2,
                    0x100..=0xffff => 3,
                    0x1_0000..=0xffff_ffff => 5,
                    _ => 9,
                };
                prop_assert_eq!(buf.len(), expected_len);
            }

            #[test]
            fn bin_is_readable(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
                let mut buf = Vec::new();
                encode_bin(&mut buf, &bytes);
                let value = read(&buf);
                prop_assert_eq!(value.as_slice(), Some(&bytes[..]));
            }

            #[test]
            fn envelope_never_depends_on_builder_order(
                payload in prop::collection::vec(any::<u8>(), 0..256),
                key in any::<[u8; 32]>(),
            ) {
                let kid = EdDsaKid::from_public_key(&key).as_bytes().to_vec();
                let a = PacketBuilder::new(payload.clone())
                    .signing_key(kid.clone())
                    .signature(vec![0x44; 64])
                    .build();
                let b = PacketBuilder::new(payload)
                    .signature(vec![0x44; 64])
                    .signing_key(kid)
                    .build();
                prop_assert_eq!(canonical_envelope(&a).unwrap(), canonical_envelope(&b).unwrap());
            }
        }
    }
}
