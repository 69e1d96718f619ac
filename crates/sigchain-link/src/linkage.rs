//! Chain ordering rules: consecutive seqnos and `prev` pointers.
//!
//! `prev` always refers to the bare [`LinkId`] of the previous link, never to
//! its suffixed sig ID.

use sigchain_core::{LinkId, SigId};

use crate::error::LinkageError;
use crate::record::LinkRecord;

/// Check the first link of a chain: seqno 1, no prev.
pub fn verify_first(link: &LinkRecord) -> Result<(), LinkageError> {
    if link.seqno != 1 {
        return Err(LinkageError::FirstLinkSeqno(link.seqno));
    }
    if let Some(prev) = link.prev {
        return Err(LinkageError::UnexpectedPrev(prev));
    }
    Ok(())
}

/// Check that `next` directly follows `prev`.
pub fn verify_next(prev: &LinkRecord, next: &LinkRecord) -> Result<(), LinkageError> {
    let expected = prev.seqno.checked_add(1).ok_or(LinkageError::SeqnoGap {
        expected: u64::MAX,
        got: next.seqno,
    })?;
    if next.seqno != expected {
        return Err(LinkageError::SeqnoGap {
            expected,
            got: next.seqno,
        });
    }
    match next.prev {
        None => Err(LinkageError::MissingPrev { seqno: next.seqno }),
        Some(got) if got != prev.link_id => Err(LinkageError::PrevMismatch {
            seqno: next.seqno,
            expected: prev.link_id,
            got,
        }),
        Some(_) => Ok(()),
    }
}

/// Check a contiguous run of links.
///
/// A run starting at seqno 1 must also satisfy the first-link rules. An empty
/// run is valid.
pub fn verify_chain(links: &[LinkRecord]) -> Result<(), LinkageError> {
    let Some(first) = links.first() else {
        return Ok(());
    };
    let mut tip = if first.seqno == 1 {
        ChainTip::genesis(first)?
    } else {
        ChainTip::resume(first)
    };
    for link in &links[1..] {
        tip.advance(link)?;
    }
    Ok(())
}

/// The latest verified link of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTip {
    head: LinkRecord,
    len: u64,
}

impl ChainTip {
    /// Start from a first link.
    pub fn genesis(first: &LinkRecord) -> Result<Self, LinkageError> {
        verify_first(first)?;
        Ok(Self {
            head: first.clone(),
            len: 1,
        })
    }

    /// Start from a trusted mid-chain link (e.g. a cached head).
    pub fn resume(head: &LinkRecord) -> Self {
        Self {
            head: head.clone(),
            len: 1,
        }
    }

    /// Append `next` after checking it follows the current head.
    pub fn advance(&mut self, next: &LinkRecord) -> Result<(), LinkageError> {
        if let Err(e) = verify_next(&self.head, next) {
            tracing::warn!(seqno = next.seqno, error = %e, "rejected chain link");
            return Err(e);
        }
        self.head = next.clone();
        self.len += 1;
        Ok(())
    }

    pub fn seqno(&self) -> u64 {
        self.head.seqno
    }

    pub fn link_id(&self) -> LinkId {
        self.head.link_id
    }

    pub fn sig_id(&self) -> SigId {
        self.head.sig_id
    }

    /// Number of links verified since this tip was created.
    pub fn verified_len(&self) -> u64 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigchain_core::{PacketVersion, SigDigest};

    fn record(seqno: u64, prev: Option<LinkId>, tag: u8) -> LinkRecord {
        let digest = SigDigest::from_bytes([tag; 32]);
        LinkRecord {
            seqno,
            prev,
            link_id: LinkId::from_bytes([tag.wrapping_add(0x80); 32]),
            digest,
            sig_id: digest.with_suffix(PacketVersion::V1),
        }
    }

    fn chain(n: u64) -> Vec<LinkRecord> {
        let mut links: Vec<LinkRecord> = Vec::new();
        for seqno in 1..=n {
            let prev = links.last().map(|l| l.link_id);
            links.push(record(seqno, prev, seqno as u8));
        }
        links
    }

    #[test]
    fn test_valid_chain() {
        assert!(verify_chain(&chain(5)).is_ok());
        assert!(verify_chain(&[]).is_ok());
    }

    #[test]
    fn test_mid_chain_run() {
        let links = chain(6);
        assert!(verify_chain(&links[2..]).is_ok());
    }

    #[test]
    fn test_first_link_rules() {
        let first = record(2, None, 1);
        assert_eq!(verify_first(&first), Err(LinkageError::FirstLinkSeqno(2)));

        let prev = LinkId::from_bytes([0xee; 32]);
        let first = record(1, Some(prev), 1);
        assert_eq!(verify_first(&first), Err(LinkageError::UnexpectedPrev(prev)));
        assert!(verify_chain(&[first]).is_err());
    }

    #[test]
    fn test_seqno_gap() {
        let mut links = chain(3);
        links[2].seqno = 4;
        assert_eq!(
            verify_chain(&links),
            Err(LinkageError::SeqnoGap { expected: 3, got: 4 })
        );
    }

    #[test]
    fn test_prev_mismatch() {
        let mut links = chain(3);
        let wrong = LinkId::from_bytes([0x00; 32]);
        links[2].prev = Some(wrong);
        assert_eq!(
            verify_chain(&links),
            Err(LinkageError::PrevMismatch {
                seqno: 3,
                expected: links[1].link_id,
                got: wrong,
            })
        );
    }

    #[test]
    fn test_prev_must_not_be_envelope_digest() {
        let links = chain(2);
        let mut next = links[1].clone();
        next.prev = Some(LinkId::from_bytes(*links[0].digest.as_bytes()));
        assert!(matches!(
            verify_next(&links[0], &next),
            Err(LinkageError::PrevMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_prev() {
        let mut links = chain(2);
        links[1].prev = None;
        assert_eq!(
            verify_chain(&links),
            Err(LinkageError::MissingPrev { seqno: 2 })
        );
    }

    #[test]
    fn test_tip_tracks_head() {
        let links = chain(4);
        let mut tip = ChainTip::genesis(&links[0]).unwrap();
        for link in &links[1..] {
            tip.advance(link).unwrap();
        }
        assert_eq!(tip.seqno(), 4);
        assert_eq!(tip.link_id(), links[3].link_id);
        assert_eq!(tip.sig_id(), links[3].sig_id);
        assert_eq!(tip.verified_len(), 4);

        // A rejected link leaves the tip unchanged.
        assert!(tip.advance(&links[1]).is_err());
        assert_eq!(tip.seqno(), 4);
    }
}
