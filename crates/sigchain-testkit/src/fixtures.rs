//! Test fixtures and helpers.
//!
//! Builds synthetic chains signed with a real Ed25519 key. The statements
//! carry only the fields the deriver and the linkage checks read.

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use serde_json::json;

use sigchain_core::{
    armor, canonical_envelope, crypto::sha256, derive, EdDsaKid, HashType, LinkId,
    PacketBuilder, SigId, SignaturePacket,
};

/// Client name written into fixture statements.
pub const FIXTURE_CLIENT_NAME: &str = "sigchain testkit";

/// Client version written into fixture statements.
pub const FIXTURE_CLIENT_VERSION: &str = "0.1.0";

/// One signed link produced by a fixture.
#[derive(Debug, Clone)]
pub struct FixtureLink {
    pub seqno: u64,
    pub packet: SignaturePacket,
    pub armored: String,
    pub link_id: LinkId,
    pub sig_id: SigId,
}

/// A signer plus the client identity it writes into statements.
pub struct ChainFixture {
    pub signing_key: SigningKey,
    pub username: String,
    /// Attach a prefix hash to every packet.
    pub with_prefix_hash: bool,
}

impl ChainFixture {
    /// Create a new fixture with a random key.
    pub fn new() -> Self {
        Self::from_key(SigningKey::generate(&mut OsRng))
    }

    /// Create with a deterministic key from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::from_key(SigningKey::from_bytes(&seed))
    }

    fn from_key(signing_key: SigningKey) -> Self {
        Self {
            signing_key,
            username: "alice".to_string(),
            with_prefix_hash: true,
        }
    }

    /// The signer's KID.
    pub fn kid(&self) -> EdDsaKid {
        EdDsaKid::from_public_key(&self.signing_key.verifying_key().to_bytes())
    }

    /// Statement JSON for a link at `seqno`.
    pub fn statement(&self, seqno: u64, prev: Option<LinkId>, statement_type: &str) -> Vec<u8> {
        let value = json!({
            "body": {
                "key": {
                    "kid": self.kid().to_hex(),
                    "username": self.username,
                },
                "type": statement_type,
                "version": 1,
            },
            "client": {
                "name": FIXTURE_CLIENT_NAME,
                "version": FIXTURE_CLIENT_VERSION,
            },
            "ctime": 1_579_738_412 + seqno as i64,
            "prev": prev.map(|p| p.to_hex()),
            "seqno": seqno,
            "tag": "signature",
        });
        value.to_string().into_bytes()
    }

    /// Sign a statement payload into a packet.
    pub fn sign(&self, payload: Vec<u8>) -> SignaturePacket {
        let signature = self.signing_key.sign(&payload);
        let mut builder = PacketBuilder::new(payload.clone())
            .signing_key(self.kid().as_bytes().to_vec())
            .signature(signature.to_bytes().to_vec());
        if self.with_prefix_hash {
            builder = builder.prefix_hash(HashType::Sha256, sha256(&payload).to_vec());
        }
        builder.build()
    }

    /// Sign and armor one link.
    pub fn make_link(&self, seqno: u64, prev: Option<LinkId>, statement_type: &str) -> FixtureLink {
        let packet = self.sign(self.statement(seqno, prev, statement_type));
        let envelope = canonical_envelope(&packet).expect("fixture packets are well-formed");
        let derivation = derive(&packet, FIXTURE_CLIENT_NAME, FIXTURE_CLIENT_VERSION)
            .expect("fixture statements name the fixture client");
        FixtureLink {
            seqno,
            armored: armor::encode(&envelope),
            link_id: derivation.link_id,
            sig_id: derivation.sig_id,
            packet,
        }
    }

    /// A correctly linked chain of `len` links starting at seqno 1.
    pub fn make_chain(&self, len: u64) -> Vec<FixtureLink> {
        let mut links: Vec<FixtureLink> = Vec::new();
        for seqno in 1..=len {
            let prev = links.last().map(|l| l.link_id);
            let kind = if seqno == 1 { "eldest" } else { "track" };
            links.push(self.make_link(seqno, prev, kind));
        }
        links
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures with distinct deterministic keys.
pub fn multi_party_fixtures(count: usize) -> Vec<ChainFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            let mut fixture = ChainFixture::with_seed(seed);
            fixture.username = format!("user{}", i);
            fixture
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier};
    use sigchain_core::decode;

    #[test]
    fn test_fixture_deterministic() {
        let a = ChainFixture::with_seed([0x42; 32]);
        let b = ChainFixture::with_seed([0x42; 32]);
        assert_eq!(a.make_link(1, None, "eldest").sig_id, b.make_link(1, None, "eldest").sig_id);
    }

    #[test]
    fn test_armored_link_decodes_to_same_id() {
        let fixture = ChainFixture::with_seed([0x01; 32]);
        let link = fixture.make_link(1, None, "eldest");
        let decoded = decode(&link.armored).unwrap();
        assert_eq!(decoded, link.packet);
        let derivation = derive(&decoded, FIXTURE_CLIENT_NAME, FIXTURE_CLIENT_VERSION).unwrap();
        assert_eq!(derivation.sig_id, link.sig_id);
    }

    #[test]
    fn test_signature_verifies() {
        let fixture = ChainFixture::with_seed([0x02; 32]);
        let link = fixture.make_link(1, None, "eldest");
        let sig = Signature::from_slice(link.packet.signature()).unwrap();
        let public = fixture.kid().public_key();
        let key = ed25519_dalek::VerifyingKey::from_bytes(&public).unwrap();
        assert!(key.verify(link.packet.payload(), &sig).is_ok());
    }

    #[test]
    fn test_chain_links_point_back() {
        let fixture = ChainFixture::with_seed([0x03; 32]);
        let chain = fixture.make_chain(3);
        assert_eq!(chain.len(), 3);
        for pair in chain.windows(2) {
            let stmt: serde_json::Value = serde_json::from_slice(pair[1].packet.payload()).unwrap();
            assert_eq!(stmt["prev"], pair[0].link_id.to_hex());
            assert_eq!(stmt["seqno"], pair[1].seqno);
        }
    }

    #[test]
    fn test_prefix_hash_toggle() {
        let mut fixture = ChainFixture::with_seed([0x04; 32]);
        let with = fixture.make_link(1, None, "eldest");
        fixture.with_prefix_hash = false;
        let without = fixture.make_link(1, None, "eldest");
        assert!(with.packet.prefix_hash().is_some());
        assert!(without.packet.prefix_hash().is_none());
        assert_ne!(with.sig_id, without.sig_id);
    }

    #[test]
    fn test_multi_party_distinct_keys() {
        let parties = multi_party_fixtures(3);
        assert_ne!(parties[0].kid(), parties[1].kid());
        assert_ne!(parties[1].kid(), parties[2].kid());
    }
}
