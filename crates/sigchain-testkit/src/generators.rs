//! Proptest generators for property-based testing.

use proptest::prelude::*;

use sigchain_core::{HashType, LinkId, SignaturePacket};

use crate::fixtures::ChainFixture;

/// Generate a random LinkId.
pub fn link_id() -> impl Strategy<Value = LinkId> {
    any::<[u8; 32]>().prop_map(LinkId::from_bytes)
}

/// Generate a valid sequence number (1-indexed).
pub fn seqno() -> impl Strategy<Value = u64> {
    1u64..=1_000_000u64
}

/// Generate a statement type.
pub fn statement_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("eldest"),
        Just("sibkey"),
        Just("subkey"),
        Just("track"),
        Just("untrack"),
        Just("pgp_update"),
        Just("web_service_binding"),
    ]
}

/// Generate a supported prefix hash type.
pub fn hash_type() -> impl Strategy<Value = HashType> {
    prop_oneof![
        Just(HashType::Sha224),
        Just(HashType::Sha256),
        Just(HashType::Sha384),
        Just(HashType::Sha512),
    ]
}

/// Generate text that looks like armor but usually is not valid.
pub fn armor_noise(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('A', 'Z'),
            prop::char::range('a', 'z'),
            prop::char::range('0', '9'),
            Just('+'),
            Just('/'),
            Just('='),
            Just('\n'),
            Just('-'),
        ],
        0..=max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Parameters for generating a signed link.
#[derive(Debug, Clone)]
pub struct LinkParams {
    pub seed: [u8; 32],
    pub seqno: u64,
    pub prev: Option<LinkId>,
    pub statement_type: &'static str,
    pub with_prefix_hash: bool,
}

impl Arbitrary for LinkParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<[u8; 32]>(),
            seqno(),
            proptest::option::of(link_id()),
            statement_type(),
            any::<bool>(),
        )
            .prop_map(|(seed, seqno, prev, statement_type, with_prefix_hash)| LinkParams {
                seed,
                seqno,
                prev,
                statement_type,
                with_prefix_hash,
            })
            .boxed()
    }
}

/// Generate a signed packet from parameters.
pub fn packet_from_params(params: &LinkParams) -> SignaturePacket {
    let mut fixture = ChainFixture::with_seed(params.seed);
    fixture.with_prefix_hash = params.with_prefix_hash;
    fixture.sign(fixture.statement(params.seqno, params.prev, params.statement_type))
}
