//! Link records: the identifiers and linkage fields of one decoded link.

use sigchain_core::{
    derive, Derivation, DeriveError, LinkId, SigDigest, SigId, SignaturePacket, StatementClient,
};

use crate::error::LinkError;
use crate::statement::ChainLinkStatement;

/// One link, reduced to what chain verification needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub seqno: u64,
    pub prev: Option<LinkId>,
    pub link_id: LinkId,
    pub digest: SigDigest,
    pub sig_id: SigId,
}

impl LinkRecord {
    /// Combine a derivation with the statement it was derived from.
    pub fn new(derivation: &Derivation, statement: &ChainLinkStatement) -> Self {
        Self {
            seqno: statement.seqno,
            prev: statement.prev,
            link_id: derivation.link_id,
            digest: derivation.digest,
            sig_id: derivation.sig_id,
        }
    }

    /// Derive a record from a packet, expecting the given client.
    pub fn derive(
        packet: &SignaturePacket,
        client_name: &str,
        client_version: &str,
    ) -> Result<Self, LinkError> {
        let derivation = derive(packet, client_name, client_version)?;
        let statement = ChainLinkStatement::parse(packet.payload())?;
        Ok(Self::new(&derivation, &statement))
    }

    /// Derive a record using the client fields the statement itself names.
    pub fn from_packet(packet: &SignaturePacket) -> Result<Self, LinkError> {
        let client = StatementClient::read(packet.payload()).map_err(DeriveError::from)?;
        Self::derive(packet, &client.name, &client.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigchain_core::{EdDsaKid, PacketBuilder};

    fn packet(payload: &str) -> SignaturePacket {
        PacketBuilder::new(payload.as_bytes().to_vec())
            .signing_key(EdDsaKid::from_public_key(&[0x01; 32]).as_bytes().to_vec())
            .signature(vec![0x02; 64])
            .build()
    }

    #[test]
    fn test_record_from_packet() {
        let p = packet(r#"{"client":{"name":"c","version":"1"},"seqno":1}"#);
        let record = LinkRecord::from_packet(&p).unwrap();
        assert_eq!(record.seqno, 1);
        assert!(record.prev.is_none());
        assert_eq!(record.link_id, LinkId::of_payload(p.payload()));
        assert_eq!(record.sig_id.digest(), record.digest);
    }

    #[test]
    fn test_record_client_mismatch() {
        let p = packet(r#"{"client":{"name":"c","version":"1"},"seqno":1}"#);
        assert!(matches!(
            LinkRecord::derive(&p, "c", "2"),
            Err(LinkError::Derive(_))
        ));
    }

    #[test]
    fn test_record_bad_statement() {
        let p = packet(r#"{"client":{"name":"c","version":"1"}}"#);
        assert!(matches!(
            LinkRecord::from_packet(&p),
            Err(LinkError::Statement(_))
        ));
    }
}
