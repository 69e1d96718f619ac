//! Identifier derivation: client cross-check, envelope, digest, sig ID.

use serde::Deserialize;
use std::borrow::Cow;

use crate::canonical::canonical_envelope;
use crate::error::{DeriveError, ValidationError};
use crate::packet::SignaturePacket;
use crate::types::{LinkId, SigDigest, SigId};

/// The `client` block of a statement payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementClient {
    pub name: String,
    pub version: String,
}

#[derive(Deserialize)]
struct ClientView<'a> {
    #[serde(borrow, default)]
    client: Option<ClientFields<'a>>,
}

#[derive(Deserialize)]
struct ClientFields<'a> {
    #[serde(borrow, default)]
    name: Option<Cow<'a, str>>,
    #[serde(borrow, default)]
    version: Option<Cow<'a, str>>,
}

impl StatementClient {
    /// Read `client.name` and `client.version` from raw payload bytes.
    ///
    /// The bytes are only viewed; nothing is re-serialized.
    pub fn read(payload: &[u8]) -> Result<Self, ValidationError> {
        let view: ClientView<'_> = serde_json::from_slice(payload)
            .map_err(|e| ValidationError::StatementUnreadable(e.to_string()))?;
        let client = view
            .client
            .ok_or(ValidationError::MissingClientField("client"))?;
        let name = client
            .name
            .ok_or(ValidationError::MissingClientField("client.name"))?;
        let version = client
            .version
            .ok_or(ValidationError::MissingClientField("client.version"))?;
        Ok(Self {
            name: name.into_owned(),
            version: version.into_owned(),
        })
    }

    /// Check against caller-supplied expectations.
    pub fn expect(&self, name: &str, version: &str) -> Result<(), ValidationError> {
        if self.name != name {
            return Err(ValidationError::ClientMismatch {
                field: "client.name",
                expected: name.to_string(),
                actual: self.name.clone(),
            });
        }
        if self.version != version {
            return Err(ValidationError::ClientMismatch {
                field: "client.version",
                expected: version.to_string(),
                actual: self.version.clone(),
            });
        }
        Ok(())
    }
}

/// Everything derived from one packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// Canonical envelope bytes (input to the digest).
    pub envelope: Vec<u8>,
    /// Bare envelope digest.
    pub digest: SigDigest,
    /// Suffixed, externally visible identifier.
    pub sig_id: SigId,
    /// Digest of the statement payload, referenced by the next link's `prev`.
    pub link_id: LinkId,
}

impl Derivation {
    /// Split into `(envelope, sig_id)`.
    pub fn into_parts(self) -> (Vec<u8>, SigId) {
        (self.envelope, self.sig_id)
    }
}

/// Derive the envelope and sig ID of `packet`.
///
/// The payload's `client.name` / `client.version` must equal the expected
/// values. This binds an out-of-band expectation to the packet; it is not a
/// signature check.
pub fn derive(
    packet: &SignaturePacket,
    expected_client_name: &str,
    expected_client_version: &str,
) -> Result<Derivation, DeriveError> {
    StatementClient::read(packet.payload())?
        .expect(expected_client_name, expected_client_version)?;
    derive_unchecked(packet)
}

/// Derive without the client cross-check.
pub fn derive_unchecked(packet: &SignaturePacket) -> Result<Derivation, DeriveError> {
    let envelope = canonical_envelope(packet)?;
    let digest = SigDigest::of_envelope(&envelope);
    let sig_id = digest.with_suffix(packet.version());
    let link_id = LinkId::of_payload(packet.payload());

    tracing::debug!(
        sig_id = %sig_id,
        envelope_len = envelope.len(),
        "derived sig ID"
    );

    Ok(Derivation {
        envelope,
        digest,
        sig_id,
        link_id,
    })
}
