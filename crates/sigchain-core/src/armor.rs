//! Armor framing: optional BEGIN/END marker lines around base64 text.
//!
//! Signature packets usually travel as a single line of bare base64. The
//! framed form looks like:
//!
//! ```text
//! -----BEGIN SIGNATURE PACKET-----
//! Comment: optional headers, terminated by a blank line
//!
//! hKRib2R5hqhkZXRhY2hlZMOpaGFzaF90eXBl...
//! -----END SIGNATURE PACKET-----
//! ```
//!
//! Whitespace inside the body is ignored. Padding is optional.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::DecodeError;

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const MARKER_SUFFIX: &str = "-----";

/// Default label used by [`frame`].
pub const DEFAULT_LABEL: &str = "SIGNATURE PACKET";

const LENIENT_PADDING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const CANONICAL_PADDING: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, GeneralPurposeConfig::new());

/// Strip armor framing and decode the base64 body.
pub fn dearmor(text: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::MalformedArmor("empty input".into()));
    }

    let body = if trimmed.starts_with(BEGIN_PREFIX) {
        framed_body(trimmed)?
    } else if trimmed.contains(END_PREFIX) {
        return Err(DecodeError::MalformedArmor(
            "END marker without BEGIN marker".into(),
        ));
    } else {
        strip_whitespace(trimmed)
    };

    if body.is_empty() {
        return Err(DecodeError::MalformedArmor("empty base64 body".into()));
    }

    LENIENT_PADDING
        .decode(body.as_bytes())
        .map_err(|e| DecodeError::MalformedArmor(format!("invalid base64: {}", e)))
}

/// Bare base64 encoding of packet bytes.
pub fn encode(bytes: &[u8]) -> String {
    CANONICAL_PADDING.encode(bytes)
}

/// Wrap packet bytes in BEGIN/END markers with the given label.
pub fn frame(bytes: &[u8], label: &str) -> String {
    let encoded = encode(bytes);
    let mut out = String::with_capacity(encoded.len() + encoded.len() / 64 + 2 * label.len() + 40);
    out.push_str(BEGIN_PREFIX);
    out.push_str(label);
    out.push_str(MARKER_SUFFIX);
    out.push('\n');
    for chunk in encoded.as_bytes().chunks(64) {
        // base64 output is ASCII
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
        out.push('\n');
    }
    out.push_str(END_PREFIX);
    out.push_str(label);
    out.push_str(MARKER_SUFFIX);
    out.push('\n');
    out
}

fn framed_body(text: &str) -> Result<String, DecodeError> {
    let mut lines = text.lines().map(str::trim);

    let first = lines.next().unwrap_or_default();
    let label = first
        .strip_prefix(BEGIN_PREFIX)
        .and_then(|rest| rest.strip_suffix(MARKER_SUFFIX))
        .filter(|label| !label.is_empty())
        .ok_or_else(|| DecodeError::MalformedArmor("malformed BEGIN marker".into()))?;
    let end_marker = format!("{}{}{}", END_PREFIX, label, MARKER_SUFFIX);

    let mut inner: Vec<&str> = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line == end_marker {
            closed = true;
            break;
        }
        if line.starts_with(END_PREFIX) {
            return Err(DecodeError::MalformedArmor(format!(
                "END marker does not match label {:?}",
                label
            )));
        }
        inner.push(line);
    }
    if !closed {
        return Err(DecodeError::MalformedArmor("missing END marker".into()));
    }
    if lines.any(|line| !line.is_empty()) {
        return Err(DecodeError::MalformedArmor(
            "trailing text after END marker".into(),
        ));
    }

    // Header lines contain ':', which is outside the base64 alphabet.
    let mut rest = &inner[..];
    if rest.first().is_some_and(|line| line.contains(':')) {
        let blank = rest
            .iter()
            .position(|line| line.is_empty())
            .ok_or_else(|| DecodeError::MalformedArmor("headers not terminated by a blank line".into()))?;
        if rest[..blank].iter().any(|line| !line.contains(':')) {
            return Err(DecodeError::MalformedArmor("malformed armor header".into()));
        }
        rest = &rest[blank + 1..];
    }

    Ok(rest.iter().map(|line| strip_whitespace(line)).collect())
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_base64() {
        assert_eq!(dearmor("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(dearmor("  aGVs\nbG8=\n").unwrap(), b"hello");
    }

    #[test]
    fn test_missing_padding_accepted() {
        assert_eq!(dearmor("aGVsbG8").unwrap(), b"hello");
    }

    #[test]
    fn test_framed_roundtrip() {
        let bytes: Vec<u8> = (0u8..=200).collect();
        let framed = frame(&bytes, DEFAULT_LABEL);
        assert!(framed.starts_with("-----BEGIN SIGNATURE PACKET-----\n"));
        assert_eq!(dearmor(&framed).unwrap(), bytes);
    }

    #[test]
    fn test_framed_with_headers() {
        let text = "-----BEGIN SIG-----\nComment: test\nVersion: 1\n\naGVsbG8=\n-----END SIG-----\n";
        assert_eq!(dearmor(text).unwrap(), b"hello");
    }

    #[test]
    fn test_invalid_base64() {
        let result = dearmor("hKRib2R5!!!notbase64");
        assert!(matches!(result, Err(DecodeError::MalformedArmor(_))));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(dearmor("  \n"), Err(DecodeError::MalformedArmor(_))));
        assert!(matches!(
            dearmor("-----BEGIN SIG-----\n-----END SIG-----"),
            Err(DecodeError::MalformedArmor(_))
        ));
    }

    #[test]
    fn test_mismatched_markers() {
        let text = "-----BEGIN SIG-----\naGVsbG8=\n-----END OTHER-----";
        assert!(matches!(dearmor(text), Err(DecodeError::MalformedArmor(_))));

        let text = "-----BEGIN SIG-----\naGVsbG8=\n";
        assert!(matches!(dearmor(text), Err(DecodeError::MalformedArmor(_))));

        let text = "aGVsbG8=\n-----END SIG-----";
        assert!(matches!(dearmor(text), Err(DecodeError::MalformedArmor(_))));
    }

    #[test]
    fn test_unterminated_headers() {
        let text = "-----BEGIN SIG-----\nComment: x\naGVsbG8=\n-----END SIG-----";
        assert!(matches!(dearmor(text), Err(DecodeError::MalformedArmor(_))));
    }
}
