//! Input size limits applied before and during decoding.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Default cap on armored text length.
pub const DEFAULT_MAX_ARMORED_LEN: usize = 64 * 1024;

/// Default cap on statement payload length.
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 32 * 1024;

/// Size limits for untrusted packet input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderLimits {
    /// Maximum accepted length of the armored text, in bytes.
    pub max_armored_len: usize,
    /// Maximum accepted length of the embedded statement payload.
    pub max_payload_len: usize,
}

impl Default for DecoderLimits {
    fn default() -> Self {
        Self {
            max_armored_len: DEFAULT_MAX_ARMORED_LEN,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
        }
    }
}

impl DecoderLimits {
    /// No limits at all. Only for trusted input.
    pub fn unbounded() -> Self {
        Self {
            max_armored_len: usize::MAX,
            max_payload_len: usize::MAX,
        }
    }

    pub(crate) fn check_armored(&self, len: usize) -> Result<(), DecodeError> {
        check("armored text", self.max_armored_len, len)
    }

    pub(crate) fn check_payload(&self, len: usize) -> Result<(), DecodeError> {
        check("payload", self.max_payload_len, len)
    }
}

fn check(what: &'static str, limit: usize, actual: usize) -> Result<(), DecodeError> {
    if actual > limit {
        return Err(DecodeError::TooLarge {
            what,
            limit,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = DecoderLimits::default();
        assert!(limits.check_armored(DEFAULT_MAX_ARMORED_LEN).is_ok());
        assert!(matches!(
            limits.check_armored(DEFAULT_MAX_ARMORED_LEN + 1),
            Err(DecodeError::TooLarge { what: "armored text", .. })
        ));
    }

    #[test]
    fn test_unbounded_accepts_any_length() {
        let limits = DecoderLimits::unbounded();
        assert!(limits.check_armored(usize::MAX).is_ok());
        assert!(limits.check_payload(usize::MAX).is_ok());
        assert!(DecoderLimits::default()
            .check_payload(DEFAULT_MAX_PAYLOAD_LEN + 1)
            .is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let limits: DecoderLimits = serde_json::from_str(r#"{"max_payload_len": 10}"#).unwrap();
        assert_eq!(limits.max_payload_len, 10);
        assert_eq!(limits.max_armored_len, DEFAULT_MAX_ARMORED_LEN);
        assert!(limits.check_payload(11).is_err());
    }
}
