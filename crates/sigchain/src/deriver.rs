//! The Deriver: decode and derive under one configuration.

use serde::{Deserialize, Serialize};

use sigchain_core::{
    decode_with_limits, derive, DecoderLimits, Derivation, SigId, SignaturePacket,
};
use sigchain_link::{verify_chain, LinkRecord};

use crate::error::{Result, SigchainError};

/// Configuration for the Deriver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriverConfig {
    /// Size limits applied while decoding.
    pub limits: DecoderLimits,
    /// Whether batch derivation also checks seqno and prev linkage.
    pub verify_linkage: bool,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            limits: DecoderLimits::default(),
            verify_linkage: true,
        }
    }
}

impl DeriverConfig {
    /// Tighter limits for untrusted input.
    pub fn strict() -> Self {
        Self {
            limits: DecoderLimits {
                max_armored_len: 16 * 1024,
                max_payload_len: 8 * 1024,
            },
            verify_linkage: true,
        }
    }
}

/// Decodes armored packets and derives their identifiers.
///
/// Stateless apart from its configuration; share freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Deriver {
    config: DeriverConfig,
}

impl Deriver {
    pub fn new(config: DeriverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeriverConfig {
        &self.config
    }

    /// Decode an armored packet.
    pub fn decode(&self, armored: &str) -> Result<SignaturePacket> {
        Ok(decode_with_limits(armored, &self.config.limits)?)
    }

    /// Decode and derive, returning the full derivation.
    pub fn derive(
        &self,
        armored: &str,
        client_name: &str,
        client_version: &str,
    ) -> Result<Derivation> {
        let packet = self.decode(armored)?;
        Ok(derive(&packet, client_name, client_version)?)
    }

    /// Decode and derive, returning the envelope bytes and the sig ID.
    pub fn sig_id(
        &self,
        armored: &str,
        client_name: &str,
        client_version: &str,
    ) -> Result<(Vec<u8>, SigId)> {
        Ok(self.derive(armored, client_name, client_version)?.into_parts())
    }

    /// Derive and compare against an externally supplied sig ID.
    ///
    /// `expected` may be the suffixed or the bare form, in either case.
    pub fn verify_expected(
        &self,
        armored: &str,
        client_name: &str,
        client_version: &str,
        expected: &str,
    ) -> Result<Derivation> {
        let expected_id = SigId::parse_lenient(expected)?;
        let derivation = self.derive(armored, client_name, client_version)?;
        if derivation.sig_id != expected_id {
            tracing::warn!(
                expected,
                computed = %derivation.sig_id,
                "sig ID mismatch"
            );
            return Err(SigchainError::SigIdMismatch {
                expected: expected.to_string(),
                computed: derivation.sig_id,
            });
        }
        Ok(derivation)
    }

    /// Decode one link, taking the client fields from its own statement.
    pub fn link(&self, armored: &str) -> Result<LinkRecord> {
        let packet = self.decode(armored)?;
        Ok(LinkRecord::from_packet(&packet)?)
    }

    /// Decode a run of links in chain order.
    ///
    /// With `verify_linkage` set, the run must also be contiguous.
    pub fn chain<S: AsRef<str>>(&self, armored: &[S]) -> Result<Vec<LinkRecord>> {
        let records = armored
            .iter()
            .enumerate()
            .map(|(i, a)| self.link(a.as_ref()).map_err(|e| SigchainError::at(i, e)))
            .collect::<Result<Vec<_>>>()?;

        if self.config.verify_linkage {
            if let Err(e) = verify_chain(&records) {
                tracing::warn!(error = %e, links = records.len(), "chain linkage rejected");
                return Err(e.into());
            }
        }

        tracing::debug!(links = records.len(), "derived chain");
        Ok(records)
    }
}
